//! # Profile Module
//!
//! Editable 2D cross-section used as the sweep profile.
//!
//! A profile is a graph, not necessarily a simple polygon: points carry a
//! normal and a texture U coordinate, and directed edges connect arbitrary
//! point pairs. Isolated points and branching topology are legal.
//!
//! ## Invariant
//!
//! Position, normal and U always move together: a single vertex record holds
//! all three, so add/delete operations can never leave the attributes with
//! mismatched lengths.

use config::constants::EPSILON;
use glam::DVec2;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Connection status between two profile points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connection {
    /// No edge between the two points.
    None,
    /// An edge runs from the first point to the second.
    Direct,
    /// An edge runs from the second point to the first.
    Reverse,
}

/// One profile point with its attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileVertex {
    /// 2D position in profile space.
    pub position: DVec2,
    /// Outward normal, recomputed from incident edges on demand.
    pub normal: DVec2,
    /// Texture U coordinate assigned to every swept vertex of this point.
    pub u: f64,
}

/// Editable 2D cross-section profile.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::{Connection, Profile};
/// use glam::DVec2;
///
/// let mut profile = Profile::new();
/// profile.add_points(&[DVec2::ZERO, DVec2::X, DVec2::Y]);
/// profile.create_edge(0, 1);
/// assert_eq!(profile.connection(0, 1), Connection::Direct);
/// assert_eq!(profile.connection(1, 0), Connection::Reverse);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    vertices: Vec<ProfileVertex>,
    /// Directed edges as `[start, end]` point indices.
    edges: Vec<[usize; 2]>,
}

impl Profile {
    /// Creates an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of points.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the profile has no points.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertex records in index order.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[ProfileVertex] {
        &self.vertices
    }

    /// All directed edges as `[start, end]` index pairs.
    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }

    /// Position of point `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    #[must_use]
    pub fn position(&self, index: usize) -> DVec2 {
        self.vertices[index].position
    }

    /// Normal of point `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    #[must_use]
    pub fn normal(&self, index: usize) -> DVec2 {
        self.vertices[index].normal
    }

    /// Texture U coordinate of point `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    #[must_use]
    pub fn u(&self, index: usize) -> f64 {
        self.vertices[index].u
    }

    /// Moves point `index` to a new position.
    ///
    /// Normals of affected points are not updated automatically; call
    /// [`Profile::recalculate_normal`] afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_position(&mut self, index: usize, position: DVec2) {
        self.vertices[index].position = position;
    }

    /// Sets the texture U coordinate of point `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_u(&mut self, index: usize, u: f64) {
        self.vertices[index].u = u;
    }

    /// The point positions in index order, used as a polygon outline when
    /// triangulating end caps.
    #[must_use]
    pub fn outline(&self) -> Vec<DVec2> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Appends a point. The normal defaults to +Y and U to 0.
    ///
    /// Returns the new point's index. Never fails.
    pub fn add_point(&mut self, position: DVec2) -> usize {
        let index = self.vertices.len();
        self.vertices.push(ProfileVertex {
            position,
            normal: DVec2::Y,
            u: 0.0,
        });
        index
    }

    /// Appends several points at once.
    pub fn add_points(&mut self, positions: &[DVec2]) {
        for &p in positions {
            self.add_point(p);
        }
    }

    /// Deletes a point, every edge touching it, and renumbers the endpoints
    /// of the surviving edges.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn delete_point(&mut self, index: usize) {
        assert!(
            index < self.vertices.len(),
            "point index {index} out of range ({} points)",
            self.vertices.len()
        );
        self.vertices.remove(index);
        self.edges.retain(|&[a, b]| a != index && b != index);
        for edge in &mut self.edges {
            for endpoint in edge {
                if *endpoint > index {
                    *endpoint -= 1;
                }
            }
        }
    }

    /// Adds a directed edge from `start` to `end`.
    ///
    /// Duplicate edges between the same pair are not rejected; connection
    /// queries resolve them by first match in storage order.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn create_edge(&mut self, start: usize, end: usize) {
        assert!(
            start < self.vertices.len() && end < self.vertices.len(),
            "edge ({start}, {end}) references a missing point ({} points)",
            self.vertices.len()
        );
        self.edges.push([start, end]);
    }

    /// Removes every edge between the two points, in either direction.
    pub fn remove_edge(&mut self, point_a: usize, point_b: usize) {
        self.edges
            .retain(|&[a, b]| !((a == point_a && b == point_b) || (a == point_b && b == point_a)));
    }

    /// Reports how two points are connected. First match in storage order
    /// wins.
    #[must_use]
    pub fn connection(&self, point_a: usize, point_b: usize) -> Connection {
        for &[a, b] in &self.edges {
            if a == point_a && b == point_b {
                return Connection::Direct;
            }
            if a == point_b && b == point_a {
                return Connection::Reverse;
            }
        }
        Connection::None
    }

    // =========================================================================
    // NORMALS
    // =========================================================================

    /// Recomputes the normal of one point from its incident edges.
    ///
    /// Each incident edge contributes the perpendicular of its unit direction
    /// (direction taken as `start - end` in storage order, rotated -90°).
    /// The contributions are summed and normalized. A point with no incident
    /// edges gets the canonical +Y normal.
    ///
    /// Idempotent: the result depends only on point positions and edges.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn recalculate_normal(&mut self, index: usize) {
        assert!(
            index < self.vertices.len(),
            "point index {index} out of range ({} points)",
            self.vertices.len()
        );

        let mut sum = DVec2::ZERO;
        let mut incident = 0usize;
        for &[start, end] in &self.edges {
            if start == index || end == index {
                let direction = self.vertices[start].position - self.vertices[end].position;
                if direction.length_squared() > EPSILON * EPSILON {
                    let unit = direction.normalize();
                    // Rotate -90 degrees: (x, y) -> (y, -x)
                    sum += DVec2::new(unit.y, -unit.x);
                }
                incident += 1;
            }
        }

        self.vertices[index].normal = if incident == 0 {
            DVec2::Y
        } else {
            sum.normalize_or_zero()
        };
    }

    /// Recomputes the normals of a subset of points.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn recalculate_normals<I>(&mut self, indices: I)
    where
        I: IntoIterator<Item = usize>,
    {
        for index in indices {
            self.recalculate_normal(index);
        }
    }

    /// Recomputes the normals of every point.
    pub fn recalculate_all_normals(&mut self) {
        for index in 0..self.vertices.len() {
            self.recalculate_normal(index);
        }
    }

    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Builds a closed circular profile with outward normals.
    ///
    /// Points are ordered clockwise so the recalculated normals face away
    /// from the center. U coordinates run proportionally around the
    /// perimeter.
    #[must_use]
    pub fn circle(radius: f64, segments: u32) -> Self {
        let n = segments.max(3) as usize;
        let mut profile = Self::new();
        for i in 0..n {
            // Clockwise: negative angle step.
            let theta = -2.0 * std::f64::consts::PI * i as f64 / n as f64;
            let index = profile.add_point(DVec2::new(radius * theta.cos(), radius * theta.sin()));
            profile.set_u(index, i as f64 / n as f64);
        }
        for i in 0..n {
            profile.create_edge(i, (i + 1) % n);
        }
        profile.recalculate_all_normals();
        profile
    }

    /// Builds a closed rectangular profile centered on the origin with
    /// outward normals.
    #[must_use]
    pub fn rectangle(size: DVec2) -> Self {
        let half = size / 2.0;
        let mut profile = Self::new();
        // Clockwise so recalculated normals point outward.
        profile.add_points(&[
            DVec2::new(half.x, half.y),
            DVec2::new(half.x, -half.y),
            DVec2::new(-half.x, -half.y),
            DVec2::new(-half.x, half.y),
        ]);
        let perimeter = 2.0 * (size.x + size.y);
        let mut distance = 0.0;
        for i in 0..4 {
            profile.set_u(i, distance / perimeter);
            let next = (i + 1) % 4;
            distance += (profile.position(next) - profile.position(i)).length();
            profile.create_edge(i, next);
        }
        profile.recalculate_all_normals();
        profile
    }
}
