//! # Sweep Mesh
//!
//! Procedural mesh extrusion: sweeps a 2D cross-section profile along a
//! chain of oriented control points and produces triangle mesh buffers.
//!
//! ## Architecture
//!
//! ```text
//! Profile (2D points/edges) + [ControlPoint] (path)
//!       ↓
//! PathInterpolator (position/tangent/rotation/scale per sample)
//!       ↓
//! extrude (vertex/normal/UV/triangle generation)
//!       ↓
//! triangulate (optional end caps) → Mesh
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are pure Rust with no native dependencies:
//! - **Interpolation**: Linear and cubic Bezier (Bernstein basis)
//! - **Triangulation**: Ear clipping
//! - **Normals**: Transformed profile normals or smooth face-averaged
//!
//! ## Usage
//!
//! ```rust
//! use sweep_mesh::{extrude, ControlPoint, ExtrudeParams, InterpolationMethod, Profile};
//! use glam::DVec3;
//!
//! let profile = Profile::rectangle(glam::DVec2::splat(1.0));
//! let path = vec![
//!     ControlPoint::at(DVec3::ZERO),
//!     ControlPoint::at(DVec3::new(0.0, 0.0, 4.0)),
//! ];
//! let params = ExtrudeParams {
//!     interpolation: InterpolationMethod::Linear,
//!     ..ExtrudeParams::default()
//! };
//! let result = extrude(&profile, None, &path, &params).unwrap();
//! assert!(!result.mesh.is_empty());
//! ```

pub mod error;
pub mod extrude;
pub mod interpolate;
pub mod mesh;
pub mod path;
pub mod profile;
pub mod triangulate;

pub use error::{ExtrudeError, ExtrudeResult};
pub use extrude::{extrude, ExtrudeParams, Extrusion};
pub use interpolate::{bezier_position, bezier_tangent, InterpolationMethod, PathInterpolator};
pub use mesh::Mesh;
pub use path::{chain_paths, look_rotation, orient_control_points, ControlPoint, RotationMode};
pub use profile::{Connection, Profile, ProfileVertex};
pub use triangulate::triangulate;
