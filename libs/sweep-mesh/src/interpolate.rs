//! # Path Interpolation
//!
//! Evaluates position, tangent, rotation and scale along the control point
//! chain for a real-valued path parameter `t`: the integer part selects the
//! segment, the fractional part blends within it.

use crate::path::ControlPoint;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Position blending method between consecutive control points.
///
/// Rotation is always slerped and scale always lerped, regardless of the
/// position method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InterpolationMethod {
    /// Straight lines between control point positions.
    Linear,
    /// Cubic Bezier through the control points' derived tangent handles.
    #[default]
    Bezier,
}

/// Evaluates a cubic Bezier curve at `factor` using the Bernstein basis.
///
/// The curve runs from `start` to `end`; `start_handle` and `end_handle`
/// are the outgoing and incoming tangent handles.
#[must_use]
pub fn bezier_position(
    start: DVec3,
    start_handle: DVec3,
    end: DVec3,
    end_handle: DVec3,
    factor: f64,
) -> DVec3 {
    let inverse = 1.0 - factor;
    let inverse_squared = inverse * inverse;
    let factor_squared = factor * factor;
    start * (inverse_squared * inverse)
        + start_handle * (3.0 * inverse_squared * factor)
        + end_handle * (3.0 * inverse * factor_squared)
        + end * (factor_squared * factor)
}

/// Evaluates the normalized tangent of a cubic Bezier curve at `factor`.
///
/// Returns the zero vector when the derivative vanishes (coincident control
/// points and handles).
#[must_use]
pub fn bezier_tangent(
    start: DVec3,
    start_handle: DVec3,
    end: DVec3,
    end_handle: DVec3,
    factor: f64,
) -> DVec3 {
    let inverse = 1.0 - factor;
    let inverse_squared = inverse * inverse;
    let factor_squared = factor * factor;
    let tangent = start * (-inverse_squared)
        + start_handle * (3.0 * inverse_squared - 2.0 * inverse)
        + end_handle * (-3.0 * factor_squared + 2.0 * factor)
        + end * factor_squared;
    tangent.normalize_or_zero()
}

/// Interpolates along a borrowed control point chain.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::{ControlPoint, InterpolationMethod, PathInterpolator};
/// use glam::DVec3;
///
/// let points = vec![
///     ControlPoint::at(DVec3::ZERO),
///     ControlPoint::at(DVec3::new(0.0, 0.0, 2.0)),
/// ];
/// let interpolator = PathInterpolator::new(&points, InterpolationMethod::Linear);
/// assert_eq!(interpolator.position(0.5), DVec3::new(0.0, 0.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathInterpolator<'a> {
    control_points: &'a [ControlPoint],
    method: InterpolationMethod,
}

impl<'a> PathInterpolator<'a> {
    /// Creates an interpolator over the given control points.
    ///
    /// # Panics
    ///
    /// Panics if `control_points` is empty.
    #[must_use]
    pub fn new(control_points: &'a [ControlPoint], method: InterpolationMethod) -> Self {
        assert!(
            !control_points.is_empty(),
            "cannot interpolate over an empty control point chain"
        );
        Self {
            control_points,
            method,
        }
    }

    /// Largest valid path parameter (`node_count - 1`).
    #[must_use]
    pub fn max_parameter(&self) -> f64 {
        (self.control_points.len() - 1) as f64
    }

    /// Selects the segment for `t`; at an exact node index both endpoints
    /// are the same node, so the last node never indexes out of range.
    fn segment(&self, t: f64) -> (&ControlPoint, &ControlPoint, f64) {
        assert!(
            t >= 0.0 && t <= self.max_parameter(),
            "path parameter {t} outside [0, {}]",
            self.max_parameter()
        );
        let start = &self.control_points[t.floor() as usize];
        let end = &self.control_points[t.ceil() as usize];
        (start, end, t - t.floor())
    }

    /// Interpolated position at `t`.
    ///
    /// # Panics
    ///
    /// Panics if `t` is outside `[0, node_count - 1]`.
    #[must_use]
    pub fn position(&self, t: f64) -> DVec3 {
        let (start, end, factor) = self.segment(t);
        match self.method {
            InterpolationMethod::Linear => start.position.lerp(end.position, factor),
            InterpolationMethod::Bezier => bezier_position(
                start.position,
                start.forward_handle(),
                end.position,
                end.backward_handle(),
                factor,
            ),
        }
    }

    /// Normalized tangent at `t`.
    ///
    /// # Panics
    ///
    /// Panics if `t` is outside `[0, node_count - 1]`.
    #[must_use]
    pub fn tangent(&self, t: f64) -> DVec3 {
        let (start, end, factor) = self.segment(t);
        match self.method {
            InterpolationMethod::Linear => (end.position - start.position).normalize_or_zero(),
            InterpolationMethod::Bezier => bezier_tangent(
                start.position,
                start.forward_handle(),
                end.position,
                end.backward_handle(),
                factor,
            ),
        }
    }

    /// Spherically interpolated rotation at `t`.
    ///
    /// # Panics
    ///
    /// Panics if `t` is outside `[0, node_count - 1]`.
    #[must_use]
    pub fn rotation(&self, t: f64) -> glam::DQuat {
        let (start, end, factor) = self.segment(t);
        start.rotation.slerp(end.rotation, factor)
    }

    /// Linearly interpolated scale at `t`.
    ///
    /// # Panics
    ///
    /// Panics if `t` is outside `[0, node_count - 1]`.
    #[must_use]
    pub fn scale(&self, t: f64) -> DVec3 {
        let (start, end, factor) = self.segment(t);
        start.scale.lerp(end.scale, factor)
    }
}
