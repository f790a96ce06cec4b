//! Per-width `const fn` surface.
//!
//! Every routine here is a `const fn` built from `to_bits`/`from_bits`,
//! integer masks, float comparisons and float/int casts, so the same body
//! serves `const` items and runtime calls with bit-identical results.
//! Names follow the C convention: no suffix for `f64`, `f` for `f32`,
//! `l` for the x87 extended type [`F80`].

#![allow(clippy::unusual_byte_groupings)]

mod classify;
mod copysign;
mod extended;
mod trunc;

pub use classify::{
    Classification, FP_INFINITE, FP_NAN, FP_NORMAL, FP_SUBNORMAL, FP_ZERO, classify, classifyf,
    classifyl, fpclassify, fpclassifyf, fpclassifyl, isfinite, isfinitef, isfinitel, isinf,
    isinff, isinfl, isnan, isnanf, isnanl, isnormal, isnormalf, isnormall, signbit, signbitf,
    signbitl,
};
pub use copysign::{copysign, copysignf, copysignl, fabs, fabsf, fabsl};
pub use extended::F80;
pub use trunc::{trunc, truncf, truncl};

// ========= binary64 fields =========

const F64_SIGN_MASK: u64 = 0x8000_0000_0000_0000u64;
const F64_EXP_MASK: u64 = 0x7ff0_0000_0000_0000u64;
const F64_MANT_MASK: u64 = 0x000f_ffff_ffff_ffffu64;

// ========= binary32 fields =========

const F32_SIGN_MASK: u32 = 0x8000_0000u32;
const F32_EXP_MASK: u32 = 0x7f80_0000u32;
const F32_MANT_MASK: u32 = 0x007f_ffffu32;

// ========= bit helpers =========

#[inline(always)]
const fn f64_from_bits(u: u64) -> f64 {
    f64::from_bits(u)
}
#[inline(always)]
const fn f64_to_bits(x: f64) -> u64 {
    x.to_bits()
}

#[inline(always)]
const fn f32_from_bits(u: u32) -> f32 {
    f32::from_bits(u)
}
#[inline(always)]
const fn f32_to_bits(x: f32) -> u32 {
    x.to_bits()
}

/// Biased exponent field of a binary64 encoding.
#[inline(always)]
const fn get_exp_bits(u: u64) -> i32 {
    ((u & F64_EXP_MASK) >> 52) as i32
}

/// Biased exponent field of a binary32 encoding.
#[inline(always)]
const fn get_exp_bits_f32(u: u32) -> i32 {
    ((u & F32_EXP_MASK) >> 23) as i32
}
