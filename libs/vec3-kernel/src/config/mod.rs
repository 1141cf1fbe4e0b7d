//! Kernel-level configuration building on the shared `config` crate.
//!
//! [`KernelConfig`] carries one validated tolerance band so a computation
//! can thread the same zero policy through every `_with_tolerance` call.

use config::constants::{GlobalConfig, EPSILON_TOLERANCE};

use crate::access::{VectorSink, VectorSource};
use crate::direction::normalize_with_tolerance;
use crate::error::KernelResult;
use crate::metric::{inverse_length_with_tolerance, is_zero_with_tolerance, length_with_tolerance};

/// Tolerance configuration for the kernel.
///
/// # Examples
/// ```
/// use vec3_kernel::KernelConfig;
///
/// let cfg = KernelConfig::new(1e-6).unwrap();
/// assert!(cfg.is_zero([1e-7, 0.0, -1e-7]));
/// assert!(!KernelConfig::default().is_zero([1e-7, 0.0, 0.0]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Half-width of the zero band, always finite and non-negative.
    tolerance: f64,
}

impl KernelConfig {
    /// Creates a configuration, rejecting negative, NaN or infinite bands.
    ///
    /// # Examples
    /// ```
    /// use vec3_kernel::{KernelConfig, KernelError};
    ///
    /// assert_eq!(KernelConfig::new(-1.0), Err(KernelError::InvalidTolerance(-1.0)));
    /// ```
    pub fn new(tolerance: f64) -> KernelResult<Self> {
        let global = GlobalConfig::new(tolerance)?;
        Ok(Self {
            tolerance: global.tolerance,
        })
    }

    /// Configuration using the workspace's suggested epsilon band.
    pub fn epsilon() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
        }
    }

    /// The configured band half-width.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Whether `v` is zero within the configured band.
    pub fn is_zero<S: VectorSource>(&self, v: S) -> bool {
        is_zero_with_tolerance(v, self.tolerance)
    }

    /// Length of `v`, `0` inside the band.
    pub fn length<S: VectorSource>(&self, v: S) -> f64 {
        length_with_tolerance(v, self.tolerance)
    }

    /// `1 / |v|`, `0` inside the band.
    pub fn inverse_length<S: VectorSource>(&self, v: S) -> f64 {
        inverse_length_with_tolerance(v, self.tolerance)
    }

    /// Normalizes `v` into `dest`, writing zero inside the band.
    pub fn normalize<'d, S: VectorSource, D: VectorSink + ?Sized>(
        &self,
        v: S,
        dest: &'d mut D,
    ) -> &'d mut D {
        normalize_with_tolerance(v, self.tolerance, dest)
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            tolerance: GlobalConfig::default().tolerance,
        }
    }
}

impl From<GlobalConfig> for KernelConfig {
    fn from(global: GlobalConfig) -> Self {
        Self {
            tolerance: global.tolerance,
        }
    }
}

#[cfg(test)]
mod tests;
