//! # Config Crate
//!
//! Centralized configuration constants for the vec3 kernel workspace.
//! All tolerance bands and conversion factors are defined here to keep the
//! kernel's zero-handling policy in one place.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, EPSILON_TOLERANCE, ZERO_TOLERANCE};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Tolerant twins treat only exact zero as zero
//! assert_eq!(ZERO_TOLERANCE, 0.0);
//! assert!(EPSILON_TOLERANCE > ZERO_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated**: Runtime tolerances go through [`constants::GlobalConfig`]

pub mod constants;
