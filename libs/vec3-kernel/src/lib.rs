//! Stateless 3-component vector algebra kernel.
//!
//! Every operation is written once against the [`VectorSource`] /
//! [`VectorSink`] access contract, so callers can hand in whatever
//! representation they already hold (`glam::DVec3`, `[f64; 3]`, a buffer
//! slice, a `(x, y, z)` tuple) and receive the result in a destination they
//! own. No operation allocates or keeps state between calls.
//!
//! Operations that divide by a length come in explicit twins:
//!
//! - `*_unsafe` assumes a non-zero operand and returns
//!   [`KernelError::DivisionByZero`] otherwise.
//! - the tolerant form writes or returns zero instead.
//! - `*_with_tolerance` widens "zero" to a symmetric band around zero.
//!
//! ```
//! use vec3_kernel::{direction, metric, product, Vec3};
//!
//! let mut out = Vec3::ZERO;
//! product::cross(Vec3::X, Vec3::Y, &mut out);
//! assert_eq!(out, Vec3::Z);
//!
//! assert_eq!(metric::length([3.0, 4.0, 0.0]), 5.0);
//!
//! direction::normalize(Vec3::ZERO, &mut out);
//! assert_eq!(out, Vec3::ZERO);
//! assert!(direction::normalize_unsafe(Vec3::ZERO, &mut out).is_err());
//! ```

pub mod access;
pub mod angle;
pub mod arithmetic;
pub mod config;
pub mod direction;
pub mod error;
pub mod metric;
pub mod product;
pub mod reduction;
pub mod rotation;
pub mod scalar;

pub use crate::access::{Slot, SlotMut, Vec3, VectorSink, VectorSource};
pub use crate::config::KernelConfig;
pub use crate::error::{KernelError, KernelResult};
