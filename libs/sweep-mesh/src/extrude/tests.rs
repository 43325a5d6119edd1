//! # Extrusion Tests
//!
//! End-to-end tests for the sweep pipeline: vertex/triangle layout, UV
//! accumulation, normal generation and cap handling.

use super::*;
use crate::error::ExtrudeError;
use approx::assert_relative_eq;

fn unit_square() -> Profile {
    Profile::rectangle(DVec2::splat(1.0))
}

fn straight_path(length: f64) -> Vec<ControlPoint> {
    vec![
        ControlPoint::at(DVec3::ZERO),
        ControlPoint::at(DVec3::new(0.0, 0.0, length)),
    ]
}

fn linear_params(resolution: u32) -> ExtrudeParams {
    ExtrudeParams {
        resolution,
        interpolation: InterpolationMethod::Linear,
        ..ExtrudeParams::default()
    }
}

#[test]
fn degenerate_path_is_an_error() {
    let profile = unit_square();
    let params = ExtrudeParams::default();

    let err = extrude(&profile, None, &[], &params).unwrap_err();
    assert!(matches!(err, ExtrudeError::DegeneratePath { control_points: 0 }));

    let one = [ControlPoint::at(DVec3::ZERO)];
    let err = extrude(&profile, None, &one, &params).unwrap_err();
    assert!(matches!(err, ExtrudeError::DegeneratePath { control_points: 1 }));
}

#[test]
fn empty_profile_yields_empty_mesh() {
    let profile = Profile::new();
    let result = extrude(&profile, None, &straight_path(1.0), &ExtrudeParams::default()).unwrap();
    assert!(result.mesh.is_empty());
    assert!(result.cap_error.is_none());
}

#[test]
fn unit_square_produces_expected_counts() {
    let result = extrude(&unit_square(), None, &straight_path(1.0), &linear_params(1)).unwrap();
    // One ring per path node, 4 points each.
    assert_eq!(result.mesh.vertex_count(), 8);
    // 4 edges x 2 triangles between the single ring pair.
    assert_eq!(result.mesh.triangle_count(), 8);
}

#[test]
fn closed_square_adds_two_triangles_per_cap() {
    let params = ExtrudeParams {
        close_shape: true,
        ..linear_params(1)
    };
    let result = extrude(&unit_square(), None, &straight_path(1.0), &params).unwrap();
    assert!(result.cap_error.is_none());
    // 8 side triangles + 2 per cap.
    assert_eq!(result.mesh.triangle_count(), 12);
    // Cap vertices are appended after the 8 body vertices.
    assert_eq!(result.mesh.vertex_count(), 16);
}

#[test]
fn vertex_count_matches_formula() {
    // (R * (N - 1) + 1) * point_count
    let path = vec![
        ControlPoint::at(DVec3::ZERO),
        ControlPoint::at(DVec3::new(0.0, 1.0, 2.0)),
        ControlPoint::at(DVec3::new(0.0, 0.0, 4.0)),
    ];
    let result = extrude(&unit_square(), None, &path, &linear_params(4)).unwrap();
    assert_eq!(result.mesh.vertex_count(), (4 * 2 + 1) * 4);
}

#[test]
fn v_coordinate_accumulates_arc_length() {
    let params = ExtrudeParams {
        texture_stretch: 2.0,
        ..linear_params(2)
    };
    let result = extrude(&unit_square(), None, &straight_path(2.0), &params).unwrap();

    // Rings at t = 0, 0.5, 1.0 → accumulated distances 0, 1, 2, divided by
    // the stretch factor.
    let uvs = result.mesh.uvs();
    assert_relative_eq!(uvs[0].y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(uvs[4].y, 0.5, epsilon = 1e-12);
    assert_relative_eq!(uvs[8].y, 1.0, epsilon = 1e-12);
}

#[test]
fn u_coordinate_comes_from_profile() {
    let profile = unit_square();
    let result = extrude(&profile, None, &straight_path(1.0), &linear_params(1)).unwrap();
    for (index, uv) in result.mesh.uvs().iter().take(profile.len()).enumerate() {
        assert_relative_eq!(uv.x, profile.u(index), epsilon = 1e-12);
    }
}

#[test]
fn profile_normals_are_transformed_when_recalculation_is_off() {
    let profile = unit_square();
    let params = ExtrudeParams {
        recalculate_normals: false,
        ..linear_params(1)
    };
    let result = extrude(&profile, None, &straight_path(1.0), &params).unwrap();

    for (index, normal) in result.mesh.normals().iter().take(profile.len()).enumerate() {
        let expected = profile.normal(index);
        assert_relative_eq!(normal.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(normal.y, expected.y, epsilon = 1e-12);
        assert_relative_eq!(normal.z, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn recalculated_normals_face_outward() {
    let result = extrude(&unit_square(), None, &straight_path(1.0), &linear_params(1)).unwrap();
    for (position, normal) in result
        .mesh
        .positions()
        .iter()
        .zip(result.mesh.normals())
    {
        let radial = DVec3::new(position.x, position.y, 0.0);
        assert!(
            normal.dot(radial) > 0.0,
            "normal {normal:?} should face away from the tube axis at {position:?}"
        );
    }
}

#[test]
fn bowtie_cap_reports_error_but_keeps_body() {
    let mut bowtie = Profile::new();
    bowtie.add_points(&[
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(0.0, 1.0),
    ]);

    let params = ExtrudeParams {
        close_shape: true,
        ..linear_params(1)
    };
    let result = extrude(&unit_square(), Some(&bowtie), &straight_path(1.0), &params).unwrap();

    assert!(matches!(result.cap_error, Some(ExtrudeError::CapNotClosed { .. })));
    // Uncapped body is still returned.
    assert_eq!(result.mesh.triangle_count(), 8);
    assert_eq!(result.mesh.vertex_count(), 8);
}

#[test]
fn cap_vertices_sit_on_the_path_endpoints() {
    let params = ExtrudeParams {
        close_shape: true,
        ..linear_params(1)
    };
    let result = extrude(&unit_square(), None, &straight_path(3.0), &params).unwrap();

    // Body (8) + start cap (4) + end cap (4).
    let positions = result.mesh.positions();
    for p in &positions[8..12] {
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
    }
    for p in &positions[12..16] {
        assert_relative_eq!(p.z, 3.0, epsilon = 1e-12);
    }
}

#[test]
fn scale_interpolation_widens_the_tube() {
    let path = vec![
        ControlPoint::at(DVec3::ZERO),
        ControlPoint::new(
            DVec3::new(0.0, 0.0, 2.0),
            glam::DQuat::IDENTITY,
            DVec3::new(2.0, 2.0, 1.0),
        ),
    ];
    let result = extrude(&unit_square(), None, &path, &linear_params(1)).unwrap();
    let (min, max) = result.mesh.bounding_box();
    // First ring is a unit square, last ring is doubled.
    assert_relative_eq!(max.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(min.x, -1.0, epsilon = 1e-12);
}

#[test]
fn bezier_sweep_produces_full_ring_count() {
    let profile = Profile::circle(0.5, 16);
    let path = vec![
        ControlPoint::at(DVec3::ZERO),
        ControlPoint::at(DVec3::new(0.0, 2.0, 4.0)),
    ];
    let result = extrude(&profile, None, &path, &ExtrudeParams::default()).unwrap();
    // Default resolution 5: (5 * 1 + 1) rings of 16 points.
    assert_eq!(result.mesh.vertex_count(), 6 * 16);
    assert!(result.mesh.triangle_count() > 0);
}

#[test]
fn automatic_orientation_turns_rings_along_the_path() {
    // A right-angle corner in the XZ plane; with AutomaticOrientation the
    // middle ring should face the averaged direction.
    let path = vec![
        ControlPoint::at(DVec3::ZERO),
        ControlPoint::at(DVec3::new(0.0, 0.0, 2.0)),
        ControlPoint::at(DVec3::new(2.0, 0.0, 2.0)),
    ];
    let params = ExtrudeParams {
        rotation_mode: RotationMode::AutomaticOrientation,
        ..linear_params(1)
    };
    let result = extrude(&unit_square(), None, &path, &params).unwrap();

    // The middle ring (vertices 4..8) is rotated 45 degrees around Y, so its
    // points spread over both X and Z.
    let middle: Vec<DVec3> = result.mesh.positions()[4..8].to_vec();
    let spread_x = middle.iter().map(|p| p.x).fold(f64::MIN, f64::max)
        - middle.iter().map(|p| p.x).fold(f64::MAX, f64::min);
    assert!(spread_x > 0.1, "middle ring should tilt into X, spread {spread_x}");
}
