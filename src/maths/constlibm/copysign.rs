//! Bit-level sign helpers: copysign and fabs.
//!
//! Sign injection and absolute value by masking the sign bit, so signed
//! zeros and NaNs keep every other bit of their encoding.

use super::extended::F80;
use super::{F32_SIGN_MASK, F64_SIGN_MASK, f32_from_bits, f32_to_bits, f64_from_bits, f64_to_bits};

#[inline(always)]
pub const fn copysign(x: f64, y: f64) -> f64 {
    f64_from_bits((f64_to_bits(x) & !F64_SIGN_MASK) | (f64_to_bits(y) & F64_SIGN_MASK))
}

#[inline(always)]
pub const fn fabs(x: f64) -> f64 {
    f64_from_bits(f64_to_bits(x) & !F64_SIGN_MASK)
}

#[inline(always)]
pub const fn copysignf(x: f32, y: f32) -> f32 {
    f32_from_bits((f32_to_bits(x) & !F32_SIGN_MASK) | (f32_to_bits(y) & F32_SIGN_MASK))
}

#[inline(always)]
pub const fn fabsf(x: f32) -> f32 {
    f32_from_bits(f32_to_bits(x) & !F32_SIGN_MASK)
}

#[inline(always)]
pub const fn copysignl(x: F80, y: F80) -> F80 {
    F80::from_parts(y.is_sign_negative(), x.biased_exponent(), x.significand())
}

#[inline(always)]
pub const fn fabsl(x: F80) -> F80 {
    F80::from_parts(false, x.biased_exponent(), x.significand())
}
