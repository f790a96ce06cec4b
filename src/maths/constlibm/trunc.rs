//! Truncation toward zero (trunc/truncf/truncl).
//!
//! Specials are settled from the classification: NaN comes back as the
//! quiet NaN of the same sign, infinities and zeros come back unchanged.
//! Finite values whose exponent leaves no fraction bits are already
//! integral. Everything else goes through an `i64` round trip with the
//! sign of the input copied back, so `-0.5` truncates to `-0.0`.

use super::classify::{Classification, classify, classifyf, classifyl, signbit, signbitf, signbitl};
use super::copysign::{copysign, copysignf, copysignl};
use super::extended::F80;
use super::{f32_from_bits, f32_to_bits, f64_from_bits, f64_to_bits, get_exp_bits, get_exp_bits_f32};

const F64_QNAN: u64 = 0x7ff8_0000_0000_0000u64;
const F64_NEG_QNAN: u64 = 0xfff8_0000_0000_0000u64;
const F32_QNAN: u32 = 0x7fc0_0000u32;
const F32_NEG_QNAN: u32 = 0xffc0_0000u32;

// Unbiased exponent from which the significand holds no fraction bits.
const F64_INTEGRAL_EXP: i32 = 52;
const F32_INTEGRAL_EXP: i32 = 23;
const F80_INTEGRAL_EXP: i32 = 63;

#[inline(always)]
const fn trunc64(x: f64) -> f64 {
    match classify(x) {
        Classification::Nan => {
            return f64_from_bits(if signbit(x) { F64_NEG_QNAN } else { F64_QNAN });
        }
        Classification::Infinite | Classification::Zero => return x,
        Classification::Subnormal | Classification::Normal => {}
    }
    let e = get_exp_bits(f64_to_bits(x)) - 1023;
    if e >= F64_INTEGRAL_EXP {
        return x;
    }
    // |x| < 2^52 here, well inside i64.
    debug_assert!(e < 63);
    copysign((x as i64) as f64, x)
}

#[inline(always)]
const fn trunc32(x: f32) -> f32 {
    match classifyf(x) {
        Classification::Nan => {
            return f32_from_bits(if signbitf(x) { F32_NEG_QNAN } else { F32_QNAN });
        }
        Classification::Infinite | Classification::Zero => return x,
        Classification::Subnormal | Classification::Normal => {}
    }
    let e = get_exp_bits_f32(f32_to_bits(x)) - 127;
    if e >= F32_INTEGRAL_EXP {
        return x;
    }
    debug_assert!(e < 63);
    copysignf((x as i64) as f32, x)
}

#[inline(always)]
const fn trunc80(x: F80) -> F80 {
    match classifyl(x) {
        Classification::Nan => return if signbitl(x) { F80::NEG_NAN } else { F80::NAN },
        Classification::Infinite | Classification::Zero => return x,
        Classification::Subnormal | Classification::Normal => {}
    }
    let e = x.unbiased_exponent();
    if e >= F80_INTEGRAL_EXP {
        return x;
    }
    debug_assert!(e < 63);
    copysignl(F80::from_i64(x.to_i64_trunc()), x)
}

/// Rounds `x` toward zero.
///
/// NaN input yields the quiet NaN carrying the sign of `x`; a signaling
/// NaN is quieted and its payload is not propagated. Infinities and
/// signed zeros are returned bit-for-bit.
///
/// The integer round trip is only taken for `|x| < 2^52`; larger finite
/// values are returned unchanged because they have no fractional part.
#[inline(always)]
pub const fn trunc(x: f64) -> f64 {
    trunc64(x)
}

/// Single precision [`trunc`].
#[inline(always)]
pub const fn truncf(x: f32) -> f32 {
    trunc32(x)
}

/// Extended precision [`trunc`].
#[inline(always)]
pub const fn truncl(x: F80) -> F80 {
    trunc80(x)
}
