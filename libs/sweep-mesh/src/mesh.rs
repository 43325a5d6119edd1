//! # Mesh Data Structure
//!
//! Triangle mesh buffers produced by the extrusion pipeline.
//!
//! All geometry calculations use f64 internally. Conversion to f32 is left
//! to the rendering or export layer.

use config::constants::EPSILON;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// A triangle mesh with per-vertex positions, normals and UVs.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::Mesh;
/// use glam::{DVec2, DVec3};
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex(DVec3::ZERO, DVec3::Z, DVec2::ZERO);
/// let b = mesh.add_vertex(DVec3::X, DVec3::Z, DVec2::X);
/// let c = mesh.add_vertex(DVec3::Y, DVec3::Z, DVec2::Y);
/// mesh.add_triangle(a, b, c);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions.
    positions: Vec<DVec3>,
    /// Per-vertex normals, same length as `positions`.
    normals: Vec<DVec3>,
    /// Per-vertex texture coordinates, same length as `positions`.
    uvs: Vec<DVec2>,
    /// Triangle indices (3 indices per triangle).
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Adds a vertex with position, normal and texture coordinate.
    ///
    /// Returns the vertex index for use in triangle definitions. The three
    /// attribute buffers always grow in lock-step.
    pub fn add_vertex(&mut self, position: DVec3, normal: DVec3, uv: DVec2) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        debug_assert!((v0 as usize) < self.positions.len());
        debug_assert!((v1 as usize) < self.positions.len());
        debug_assert!((v2 as usize) < self.positions.len());
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Vertex positions.
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Per-vertex normals.
    #[inline]
    #[must_use]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Per-vertex texture coordinates.
    #[inline]
    #[must_use]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Triangle index triples.
    #[inline]
    #[must_use]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the axis-aligned bounding box as `(min, max)`.
    ///
    /// Returns `(DVec3::ZERO, DVec3::ZERO)` for an empty mesh.
    #[must_use]
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.positions.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }
        let mut min = self.positions[0];
        let mut max = self.positions[0];
        for p in &self.positions[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }
        (min, max)
    }

    /// Merges another mesh into this one.
    ///
    /// Indices are adjusted to account for existing vertices.
    pub fn merge(&mut self, other: &Mesh) {
        let vertex_offset = self.vertex_count() as u32;

        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);

        for [a, b, c] in &other.triangles {
            self.triangles
                .push([a + vertex_offset, b + vertex_offset, c + vertex_offset]);
        }
    }

    /// Recomputes smooth per-vertex normals from triangle geometry.
    ///
    /// Unnormalized face normals (cross products) are accumulated on each
    /// vertex so larger faces contribute more, then the sums are normalized.
    /// Vertices not referenced by any triangle keep a zero normal.
    pub fn recalculate_normals(&mut self) {
        for n in &mut self.normals {
            *n = DVec3::ZERO;
        }

        for [a, b, c] in &self.triangles {
            let (ia, ib, ic) = (*a as usize, *b as usize, *c as usize);
            let face = (self.positions[ib] - self.positions[ia])
                .cross(self.positions[ic] - self.positions[ia]);
            self.normals[ia] += face;
            self.normals[ib] += face;
            self.normals[ic] += face;
        }

        for n in &mut self.normals {
            if n.length_squared() > EPSILON * EPSILON {
                *n = n.normalize();
            }
        }
    }
}
