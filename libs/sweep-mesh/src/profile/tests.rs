//! Tests for the 2D profile data model and normal recalculation.

use super::*;
use approx::assert_relative_eq;

#[test]
fn add_point_defaults() {
    let mut profile = Profile::new();
    let index = profile.add_point(DVec2::new(2.0, 3.0));
    assert_eq!(index, 0);
    assert_eq!(profile.len(), 1);
    assert_eq!(profile.normal(0), DVec2::Y);
    assert_eq!(profile.u(0), 0.0);
}

#[test]
fn delete_point_removes_incident_edges() {
    // Edges (0,1) and (1,2); deleting point 1 must leave no edges.
    let mut profile = Profile::new();
    profile.add_points(&[DVec2::ZERO, DVec2::X, DVec2::new(2.0, 0.0)]);
    profile.create_edge(0, 1);
    profile.create_edge(1, 2);

    profile.delete_point(1);

    assert_eq!(profile.len(), 2);
    assert!(profile.edges().is_empty());
}

#[test]
fn delete_point_renumbers_surviving_edges() {
    let mut profile = Profile::new();
    profile.add_points(&[DVec2::ZERO, DVec2::X, DVec2::Y, DVec2::ONE]);
    profile.create_edge(2, 3);

    profile.delete_point(0);

    assert_eq!(profile.edges(), &[[1, 2]]);
}

#[test]
#[should_panic]
fn delete_point_out_of_range_panics() {
    let mut profile = Profile::new();
    profile.add_point(DVec2::ZERO);
    profile.delete_point(5);
}

#[test]
fn connection_tracks_create_and_remove() {
    let mut profile = Profile::new();
    profile.add_points(&[DVec2::ZERO; 6]);
    profile.create_edge(2, 5);

    assert_eq!(profile.connection(2, 5), Connection::Direct);
    assert_eq!(profile.connection(5, 2), Connection::Reverse);

    // Removal is undirected even though storage is directed.
    profile.remove_edge(5, 2);
    assert_eq!(profile.connection(2, 5), Connection::None);
    assert_eq!(profile.connection(5, 2), Connection::None);
}

#[test]
fn isolated_point_normal_is_up() {
    let mut profile = Profile::new();
    profile.add_point(DVec2::new(7.0, -3.0));
    profile.recalculate_normal(0);
    assert_eq!(profile.normal(0), DVec2::Y);
}

#[test]
fn recalculate_normal_is_idempotent() {
    let mut profile = Profile::rectangle(DVec2::splat(2.0));
    profile.recalculate_all_normals();
    let first: Vec<DVec2> = profile.vertices().iter().map(|v| v.normal).collect();
    profile.recalculate_all_normals();
    for (a, v) in first.iter().zip(profile.vertices()) {
        assert_relative_eq!(a.x, v.normal.x, epsilon = 1e-12);
        assert_relative_eq!(a.y, v.normal.y, epsilon = 1e-12);
    }
}

#[test]
fn rectangle_normals_point_outward() {
    let profile = Profile::rectangle(DVec2::splat(2.0));
    for vertex in profile.vertices() {
        // Outward means the normal and the position agree in direction.
        assert!(vertex.normal.dot(vertex.position) > 0.0);
        assert_relative_eq!(vertex.normal.length(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn circle_normals_are_radial() {
    let profile = Profile::circle(2.0, 16);
    for vertex in profile.vertices() {
        let radial = vertex.position.normalize();
        assert!(vertex.normal.dot(radial) > 0.99);
    }
}

#[test]
fn single_edge_normal_is_perpendicular() {
    let mut profile = Profile::new();
    profile.add_points(&[DVec2::ZERO, DVec2::X]);
    profile.create_edge(0, 1);
    profile.recalculate_all_normals();

    // Edge direction (start - end) is -X; rotated -90 degrees gives +Y... for
    // direction (-1, 0): (y, -x) = (0, 1).
    assert_relative_eq!(profile.normal(0).x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(profile.normal(0).y, 1.0, epsilon = 1e-12);
    assert_eq!(profile.normal(0), profile.normal(1));
}

#[test]
fn recalculate_subset_leaves_other_normals_untouched() {
    let mut profile = Profile::new();
    profile.add_points(&[DVec2::ZERO, DVec2::X, DVec2::new(2.0, 1.0)]);
    profile.create_edge(0, 1);
    profile.create_edge(1, 2);
    profile.recalculate_normals([1]);

    // Point 0 keeps its default until explicitly recalculated.
    assert_eq!(profile.normal(0), DVec2::Y);
    assert!(profile.normal(1).length() > 0.9);
}

#[test]
fn circle_u_coordinates_increase() {
    let profile = Profile::circle(1.0, 8);
    for i in 1..profile.len() {
        assert!(profile.u(i) > profile.u(i - 1));
    }
}
