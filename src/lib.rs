//! IEEE-754 classification and truncation that evaluate the same in
//! `const` contexts and at runtime.
//!
//! [`constlibm`] holds the per-width `const fn`s (`trunc`, `truncf`,
//! `truncl`, `fpclassify`, `signbit`, ...). The crate root offers the same
//! operations as generic functions that dispatch on the argument type.
//!
//! ```
//! use constmath::constlibm;
//!
//! const T: f64 = constlibm::trunc(-0.999);
//! assert!(constlibm::signbit(T));
//! assert_eq!(constmath::trunc(-0.999f64).to_bits(), T.to_bits());
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

pub mod maths;

pub use maths::constlibm;
pub use maths::constlibm::{
    Classification, F80, FP_INFINITE, FP_NAN, FP_NORMAL, FP_SUBNORMAL, FP_ZERO, truncf, truncl,
};
pub use maths::{
    Classify, Trunc, classify, fpclassify, isfinite, isinf, isnan, isnormal, signbit, trunc,
};
