//! Centralized configuration values shared across the sweep-mesh pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining whether two floating-point values are "equal" within
/// numerical tolerance, and whether a vector is too short to normalize.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1.0e-9;

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Default number of samples per path segment when extruding.
///
/// Each pair of consecutive control points is subdivided into this many
/// interpolation passes.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_RESOLUTION;
/// assert!(DEFAULT_RESOLUTION >= 1);
/// ```
pub const DEFAULT_RESOLUTION: u32 = 5;

/// Default texture stretch factor.
///
/// The accumulated arc length along the path is divided by this value to
/// obtain the V texture coordinate.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_TEXTURE_STRETCH;
/// assert!(DEFAULT_TEXTURE_STRETCH > 0.0);
/// ```
pub const DEFAULT_TEXTURE_STRETCH: f64 = 1.0;

// =============================================================================
// HELPERS
// =============================================================================

/// Returns true when two values are equal within [`EPSILON`].
///
/// # Examples
/// ```
/// use config::constants::approx_equal;
/// assert!(approx_equal(1.0, 1.0 + 1.0e-12));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true when a value is zero within [`EPSILON`].
///
/// # Examples
/// ```
/// use config::constants::approx_zero;
/// assert!(approx_zero(1.0e-12));
/// ```
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into geometry kernels.
    pub tolerance: f64,
    /// Default number of interpolation passes per path segment.
    pub resolution: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and resolution.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 8).expect("valid config");
    /// assert_eq!(cfg.resolution, 8);
    /// ```
    pub fn new(tolerance: f64, resolution: u32) -> Result<Self, ConfigError> {
        if tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if resolution < 1 {
            return Err(ConfigError::InvalidResolution(resolution));
        }
        Ok(Self {
            tolerance,
            resolution,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero or negative.
    InvalidTolerance(f64),
    /// Raised when the requested resolution cannot produce a single sample.
    InvalidResolution(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidResolution(value) => {
                write!(f, "resolution must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
