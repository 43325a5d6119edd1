//! # Path Module
//!
//! Control points describing the sweep path: an oriented, scaled frame per
//! node, plus the automatic rotation modes that derive interior node
//! orientations from their neighbors.

use config::constants::EPSILON;
use glam::{DMat3, DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// One node of the sweep path: a positioned, oriented, scaled frame.
///
/// The Bezier tangent handles are derived: they sit at
/// `position ± forward_direction * scale.z`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Node position.
    pub position: DVec3,
    /// Node orientation. Forward is +Z, up is +Y.
    pub rotation: DQuat,
    /// Non-uniform scale applied to the profile at this node. The Z
    /// component also sets the Bezier handle length.
    pub scale: DVec3,
}

impl ControlPoint {
    /// Creates a control point from explicit position, rotation and scale.
    #[must_use]
    pub fn new(position: DVec3, rotation: DQuat, scale: DVec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Creates a control point at a position with identity rotation and unit
    /// scale.
    #[must_use]
    pub fn at(position: DVec3) -> Self {
        Self::new(position, DQuat::IDENTITY, DVec3::ONE)
    }

    /// The node's forward direction (+Z rotated by the node orientation).
    #[must_use]
    pub fn forward_direction(&self) -> DVec3 {
        self.rotation * DVec3::Z
    }

    /// The node's up direction (+Y rotated by the node orientation).
    #[must_use]
    pub fn up_direction(&self) -> DVec3 {
        self.rotation * DVec3::Y
    }

    /// Forward Bezier handle position.
    #[must_use]
    pub fn forward_handle(&self) -> DVec3 {
        self.position + self.forward_direction() * self.scale.z
    }

    /// Backward Bezier handle position.
    #[must_use]
    pub fn backward_handle(&self) -> DVec3 {
        self.position - self.forward_direction() * self.scale.z
    }

    /// Transforms a point from profile space into path space:
    /// `position + rotation * (point ⊙ scale)`.
    #[must_use]
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.position + self.rotation * (point * self.scale)
    }

    /// Transforms a direction by the node orientation only (no scale, no
    /// translation).
    #[must_use]
    pub fn transform_direction(&self, direction: DVec3) -> DVec3 {
        self.rotation * direction
    }
}

/// How interior control point rotations are derived before extrusion.
///
/// Endpoints are never auto-adjusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RotationMode {
    /// Keep every rotation exactly as authored.
    #[default]
    Manual,
    /// Keep the authored facing but derive the up vector from the
    /// sign-corrected cross product of the incoming and outgoing directions.
    AutomaticNormals,
    /// Face along the sum of the incoming and outgoing directions, keeping
    /// the authored up vector.
    AutomaticOrientation,
    /// Derive both the facing and the up vector.
    AutomaticBoth,
}

/// Builds a rotation looking along `forward` with the given approximate up
/// vector, re-orthogonalized.
///
/// Falls back to the identity rotation when `forward` is degenerate, and
/// picks an arbitrary perpendicular when `forward` and `up` are parallel.
#[must_use]
pub fn look_rotation(forward: DVec3, up: DVec3) -> DQuat {
    let f = forward.normalize_or_zero();
    if f == DVec3::ZERO {
        return DQuat::IDENTITY;
    }
    let mut right = up.cross(f);
    if right.length_squared() < EPSILON * EPSILON {
        right = DVec3::Y.cross(f);
        if right.length_squared() < EPSILON * EPSILON {
            right = DVec3::X;
        }
    }
    let right = right.normalize();
    let new_up = f.cross(right);
    DQuat::from_mat3(&DMat3::from_cols(right, new_up, f))
}

/// Recomputes the rotations of interior control points according to the
/// selected mode.
///
/// The first and last node always keep their authored rotation. Nodes are
/// updated in order, so a node's derived rotation sees the already-updated
/// rotation of its predecessor.
pub fn orient_control_points(control_points: &mut [ControlPoint], mode: RotationMode) {
    if mode == RotationMode::Manual || control_points.len() < 2 {
        return;
    }

    for index in 1..control_points.len() - 1 {
        let from_previous = control_points[index].position - control_points[index - 1].position;
        let to_next = control_points[index + 1].position - control_points[index].position;

        let up = control_points[index].up_direction();
        let forward = control_points[index].forward_direction();
        let tangent = from_previous + to_next;

        // Bias the derived normal toward the average of the neighbors' up
        // vectors so consecutive rings do not flip.
        let neighbor_up =
            control_points[index - 1].up_direction() + control_points[index + 1].up_direction();
        let mut normal = from_previous.cross(to_next);
        if neighbor_up.dot(normal) < 0.0 {
            normal = -normal;
        }

        control_points[index].rotation = match mode {
            RotationMode::Manual => unreachable!("handled above"),
            RotationMode::AutomaticNormals => look_rotation(forward, normal),
            RotationMode::AutomaticOrientation => look_rotation(tangent, up),
            RotationMode::AutomaticBoth => look_rotation(tangent, normal),
        };
    }
}

/// Chains several paths end to end: the last control point of each path is
/// snapped onto the first control point of the next, so the swept segments
/// stay watertight at the joints.
///
/// With `loop_chain`, the last path is also attached back to the first one.
pub fn chain_paths(paths: &mut [Vec<ControlPoint>], loop_chain: bool) {
    let count = paths.len();
    for index in 0..count {
        let next = if index + 1 < count {
            index + 1
        } else if loop_chain {
            0
        } else {
            break;
        };
        let Some(&target) = paths[next].first() else {
            continue;
        };
        if let Some(last) = paths[index].last_mut() {
            *last = target;
        }
    }
}
