//! # Config Crate
//!
//! Centralized configuration constants for the sweep-mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_RESOLUTION};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 1.0e-11;
//! assert!(value.abs() < EPSILON);
//!
//! // Use the default sampling resolution for extrusions
//! assert!(DEFAULT_RESOLUTION >= 1);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
