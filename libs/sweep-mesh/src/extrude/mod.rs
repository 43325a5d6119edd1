//! # Mesh Extrusion
//!
//! Sweeps a 2D profile along an interpolated control point path and emits
//! triangle mesh buffers, optionally closing the ends with triangulated
//! caps.
//!
//! ## Buffer Layout
//!
//! Vertices are sample-major, profile-point-minor: sample `s` and profile
//! point `p` map to flat index `s * point_count + p`. A path with `N` control
//! points sampled at resolution `R` produces exactly `(R * (N - 1) + 1)`
//! rings.

use crate::error::{ExtrudeError, ExtrudeResult};
use crate::interpolate::{InterpolationMethod, PathInterpolator};
use crate::mesh::Mesh;
use crate::path::{orient_control_points, ControlPoint, RotationMode};
use crate::profile::Profile;
use crate::triangulate::triangulate;
use config::constants::{DEFAULT_RESOLUTION, DEFAULT_TEXTURE_STRETCH};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Parameters controlling one extrusion pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtrudeParams {
    /// Interpolation passes per path segment. Clamped to at least 1.
    pub resolution: u32,
    /// Arc length is divided by this factor to produce the V coordinate.
    pub texture_stretch: f64,
    /// Position blending method between control points.
    pub interpolation: InterpolationMethod,
    /// Recompute smooth normals from the generated geometry instead of
    /// transforming the profile normals.
    pub recalculate_normals: bool,
    /// Close the swept tube with triangulated end caps.
    pub close_shape: bool,
    /// How interior control point rotations are derived before sampling.
    pub rotation_mode: RotationMode,
}

impl Default for ExtrudeParams {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            texture_stretch: DEFAULT_TEXTURE_STRETCH,
            interpolation: InterpolationMethod::default(),
            recalculate_normals: true,
            close_shape: false,
            rotation_mode: RotationMode::default(),
        }
    }
}

/// Result of an extrusion pass.
///
/// Cap generation failures are recoverable: the main body is still valid,
/// and the failure is reported in `cap_error` instead of discarding the
/// mesh.
#[derive(Debug)]
pub struct Extrusion {
    /// The generated mesh buffers.
    pub mesh: Mesh,
    /// Set when `close_shape` was requested but the cap outline could not
    /// be triangulated; the mesh is then the uncapped body.
    pub cap_error: Option<ExtrudeError>,
}

/// Sweeps `profile` along `control_points` and generates the mesh.
///
/// `cap_profile` optionally provides a different outline for the end caps;
/// when `None`, the swept profile itself is used.
///
/// # Errors
///
/// Returns [`ExtrudeError::DegeneratePath`] when fewer than 2 control points
/// are supplied. An empty profile is not an error and produces an empty
/// mesh. Cap triangulation failures do not fail the call; see
/// [`Extrusion::cap_error`].
///
/// # Example
///
/// ```rust
/// use sweep_mesh::{extrude, ControlPoint, ExtrudeParams, InterpolationMethod, Profile};
/// use glam::{DVec2, DVec3};
///
/// let profile = Profile::rectangle(DVec2::splat(1.0));
/// let path = vec![
///     ControlPoint::at(DVec3::ZERO),
///     ControlPoint::at(DVec3::new(0.0, 0.0, 1.0)),
/// ];
/// let params = ExtrudeParams {
///     resolution: 1,
///     interpolation: InterpolationMethod::Linear,
///     ..ExtrudeParams::default()
/// };
/// let result = extrude(&profile, None, &path, &params).unwrap();
/// assert_eq!(result.mesh.vertex_count(), 8);
/// ```
pub fn extrude(
    profile: &Profile,
    cap_profile: Option<&Profile>,
    control_points: &[ControlPoint],
    params: &ExtrudeParams,
) -> ExtrudeResult<Extrusion> {
    if control_points.len() < 2 {
        return Err(ExtrudeError::degenerate_path(control_points.len()));
    }

    if profile.is_empty() {
        return Ok(Extrusion {
            mesh: Mesh::new(),
            cap_error: None,
        });
    }

    let resolution = params.resolution.max(1);

    // The automatic modes rewrite interior rotations in place, so work on a
    // copy and leave the caller's path untouched.
    let mut oriented = control_points.to_vec();
    orient_control_points(&mut oriented, params.rotation_mode);
    let interpolator = PathInterpolator::new(&oriented, params.interpolation);

    let node_count = oriented.len();
    let point_count = profile.len();
    let sample_count = resolution as usize * (node_count - 1) + 1;
    let side_triangles = (sample_count - 1) * profile.edges().len() * 2;

    let mut mesh = Mesh::with_capacity(sample_count * point_count, side_triangles);

    // One ring of profile vertices per sample. The last control point gets a
    // single pass.
    let mut previous_position = oriented[0].position;
    let mut accumulated_distance = 0.0;
    for node in 0..node_count {
        for pass in 0..resolution {
            let t = node as f64 + pass as f64 / resolution as f64;
            let frame = ControlPoint::new(
                interpolator.position(t),
                interpolator.rotation(t),
                interpolator.scale(t),
            );

            accumulated_distance += (frame.position - previous_position).length();
            let v = accumulated_distance / params.texture_stretch;
            previous_position = frame.position;

            for vertex in profile.vertices() {
                let position =
                    frame.transform_point(DVec3::new(vertex.position.x, vertex.position.y, 0.0));
                let normal =
                    frame.transform_direction(DVec3::new(vertex.normal.x, vertex.normal.y, 0.0));
                mesh.add_vertex(position, normal, DVec2::new(vertex.u, v));
            }

            if node == node_count - 1 {
                break;
            }
        }
    }

    // Two triangles per profile edge between consecutive rings, with a fixed
    // diagonal so the surface faces the profile normal direction.
    for sample in 0..sample_count - 1 {
        let base = (sample * point_count) as u32;
        let next = ((sample + 1) * point_count) as u32;
        for &[a, b] in profile.edges() {
            let (a, b) = (a as u32, b as u32);
            mesh.add_triangle(next + a, base + b, base + a);
            mesh.add_triangle(next + b, base + b, next + a);
        }
    }

    if params.recalculate_normals {
        mesh.recalculate_normals();
    }

    let mut cap_error = None;
    if params.close_shape {
        let cap = cap_profile.unwrap_or(profile);
        match build_caps(cap, &interpolator) {
            Ok(caps) => mesh.merge(&caps),
            Err(error) => cap_error = Some(ExtrudeError::cap_not_closed(error.to_string())),
        }
    }

    Ok(Extrusion { mesh, cap_error })
}

/// Builds both end caps: the start cap with the triangulated winding and the
/// end cap with each triangle reversed.
fn build_caps(cap: &Profile, interpolator: &PathInterpolator<'_>) -> ExtrudeResult<Mesh> {
    let outline = cap.outline();
    let triangles = triangulate(&outline)?;

    let mut caps = build_cap(cap, &triangles, interpolator, 0.0, false);
    let end = build_cap(cap, &triangles, interpolator, interpolator.max_parameter(), true);
    caps.merge(&end);
    Ok(caps)
}

/// Transforms the cap outline by the endpoint frame and emits the cap
/// triangles, optionally with reversed winding.
fn build_cap(
    cap: &Profile,
    triangles: &[[u32; 3]],
    interpolator: &PathInterpolator<'_>,
    t: f64,
    reverse: bool,
) -> Mesh {
    let frame = ControlPoint::new(
        interpolator.position(t),
        interpolator.rotation(t),
        interpolator.scale(t),
    );

    let mut mesh = Mesh::with_capacity(cap.len(), triangles.len());
    for vertex in cap.vertices() {
        let position =
            frame.transform_point(DVec3::new(vertex.position.x, vertex.position.y, 0.0));
        mesh.add_vertex(position, DVec3::ZERO, DVec2::ZERO);
    }
    for &[a, b, c] in triangles {
        if reverse {
            mesh.add_triangle(c, b, a);
        } else {
            mesh.add_triangle(a, b, c);
        }
    }
    mesh.recalculate_normals();
    mesh
}
