//! # Configuration Constants
//!
//! Centralized numeric constants for the vec3 kernel. Every tolerance band,
//! comparison epsilon and angle conversion factor is defined here.
//!
//! ## Categories
//!
//! - **Precision**: zero bands and floating-point comparison tolerances
//! - **Angles**: radian/degree conversion factors
//! - **Global**: the validated [`GlobalConfig`] snapshot

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Zero band used by the tolerant operation twins.
///
/// The tolerant variants without an explicit tolerance argument treat a
/// vector as zero only when every component is exactly `0.0`, which is the
/// band `[-0.0, 0.0]`.
///
/// # Example
///
/// ```rust
/// use config::constants::ZERO_TOLERANCE;
///
/// let component = 0.0_f64;
/// assert!(-ZERO_TOLERANCE <= component && component <= ZERO_TOLERANCE);
/// ```
pub const ZERO_TOLERANCE: f64 = 0.0;

/// Suggested band for the `_with_tolerance` operations.
///
/// Large enough to absorb rounding noise accumulated by a handful of
/// products on unit-scale data, small enough to keep genuinely short
/// vectors distinguishable from zero.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, mostly by tests and documentation examples.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// ANGLE CONSTANTS
// =============================================================================

/// Degrees in a half turn, returned by the degree variants for opposite vectors.
pub const HALF_TURN_DEGREES: f64 = 180.0;

/// Multiplier converting degrees to radians.
///
/// # Example
///
/// ```rust
/// use config::constants::DEGREES_TO_RADIANS;
///
/// let right_angle = 90.0 * DEGREES_TO_RADIANS;
/// assert!((right_angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub const DEGREES_TO_RADIANS: f64 = std::f64::consts::PI / HALF_TURN_DEGREES;

/// Multiplier converting radians to degrees.
pub const RADIANS_TO_DEGREES: f64 = HALF_TURN_DEGREES / std::f64::consts::PI;

// =============================================================================
// GLOBAL CONFIGURATION
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert_eq!(config.tolerance, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Zero band propagated into the tolerance-aware kernel operations.
    pub tolerance: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance. Zero is allowed; negative, NaN and infinite values are not.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6).expect("valid config");
    /// assert_eq!(cfg.tolerance, 1.0e-6);
    /// ```
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        Ok(Self { tolerance })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: ZERO_TOLERANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the tolerance is negative, NaN or infinite.
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be finite and non-negative: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
