//! x87 80-bit extended precision as a plain value type.
//!
//! The encoding is 1 sign bit, a 15-bit exponent biased by 16383 and a
//! 64-bit significand whose top bit is the explicit integer bit. Only the
//! bit-level operations classification and truncation need are provided;
//! there is no arithmetic.

use core::cmp::Ordering;
use core::fmt;
use core::ops::Neg;

use super::classify::{Classification, classifyl};

pub(super) const SIGN_BIT: u16 = 0x8000;
pub(super) const EXP_MASK: u16 = 0x7fff;
pub(super) const EXP_BIAS: i32 = 16383;
pub(super) const INT_BIT: u64 = 0x8000_0000_0000_0000u64;
pub(super) const FRAC_MASK: u64 = 0x7fff_ffff_ffff_ffffu64;
pub(super) const QUIET_BIT: u64 = 0x4000_0000_0000_0000u64;

const F64_QNAN: u64 = 0x7ff8_0000_0000_0000u64;
const F64_INF: u64 = 0x7ff0_0000_0000_0000u64;
const F64_MANT_MASK: u64 = 0x000f_ffff_ffff_ffffu64;

/// An x87 extended precision value (`long double` on x86 targets).
#[derive(Clone, Copy, Default)]
pub struct F80 {
    se: u16,
    m: u64,
}

impl F80 {
    pub const ZERO: F80 = F80::from_parts(false, 0, 0);
    pub const NEG_ZERO: F80 = F80::from_parts(true, 0, 0);
    pub const ONE: F80 = F80::from_parts(false, 0x3fff, INT_BIT);
    pub const NEG_ONE: F80 = F80::from_parts(true, 0x3fff, INT_BIT);
    pub const INFINITY: F80 = F80::from_parts(false, EXP_MASK, INT_BIT);
    pub const NEG_INFINITY: F80 = F80::from_parts(true, EXP_MASK, INT_BIT);
    /// Positive quiet NaN with an empty payload.
    pub const NAN: F80 = F80::from_parts(false, EXP_MASK, INT_BIT | QUIET_BIT);
    pub const NEG_NAN: F80 = F80::from_parts(true, EXP_MASK, INT_BIT | QUIET_BIT);
    pub const MAX: F80 = F80::from_parts(false, EXP_MASK - 1, u64::MAX);
    pub const MIN: F80 = F80::from_parts(true, EXP_MASK - 1, u64::MAX);
    /// Smallest positive normal value, 2^-16382.
    pub const MIN_POSITIVE: F80 = F80::from_parts(false, 1, INT_BIT);
    /// Smallest positive subnormal value, 2^-16445.
    pub const MIN_POSITIVE_SUBNORMAL: F80 = F80::from_parts(false, 0, 1);
    /// 2^-63, the gap between 1.0 and the next value.
    pub const EPSILON: F80 = F80::from_parts(false, 0x3fff - 63, INT_BIT);
    pub const MANTISSA_DIGITS: u32 = 64;

    #[inline(always)]
    pub const fn from_parts(sign: bool, biased_exp: u16, significand: u64) -> F80 {
        let s = if sign { SIGN_BIT } else { 0 };
        F80 {
            se: s | (biased_exp & EXP_MASK),
            m: significand,
        }
    }

    /// Builds a value from the low 80 bits of `bits`; the rest are ignored.
    #[inline(always)]
    pub const fn from_bits(bits: u128) -> F80 {
        F80 {
            se: (bits >> 64) as u16,
            m: bits as u64,
        }
    }

    #[inline(always)]
    pub const fn to_bits(self) -> u128 {
        ((self.se as u128) << 64) | (self.m as u128)
    }

    /// Sign bit and biased exponent, as stored in the top 16 bits.
    #[inline(always)]
    pub const fn sign_exponent(self) -> u16 {
        self.se
    }

    #[inline(always)]
    pub const fn biased_exponent(self) -> u16 {
        self.se & EXP_MASK
    }

    /// The 64-bit significand including the explicit integer bit.
    #[inline(always)]
    pub const fn significand(self) -> u64 {
        self.m
    }

    #[inline(always)]
    pub const fn is_sign_negative(self) -> bool {
        (self.se & SIGN_BIT) != 0
    }

    #[inline(always)]
    pub const fn negate(self) -> F80 {
        F80 {
            se: self.se ^ SIGN_BIT,
            m: self.m,
        }
    }

    /// Exact widening from binary64. NaN payloads, including the quiet
    /// bit, carry over unchanged.
    pub const fn from_f64(x: f64) -> F80 {
        let u = x.to_bits();
        let sign = (u >> 63) != 0;
        let e = ((u >> 52) & 0x7ff) as i32;
        let frac = u & F64_MANT_MASK;
        if e == 0x7ff {
            return F80::from_parts(sign, EXP_MASK, INT_BIT | (frac << 11));
        }
        if e == 0 {
            if frac == 0 {
                return F80::from_parts(sign, 0, 0);
            }
            // frac * 2^-1074, normalized so the integer bit is set
            let lz = frac.leading_zeros();
            return F80::from_parts(sign, (15372 - lz as i32) as u16, frac << lz);
        }
        F80::from_parts(sign, (e - 1023 + EXP_BIAS) as u16, INT_BIT | (frac << 11))
    }

    /// Exact widening from binary32, done on the encoding so that
    /// signaling NaNs stay signaling.
    pub const fn from_f32(x: f32) -> F80 {
        let u = x.to_bits();
        let sign = (u >> 31) != 0;
        let e = ((u >> 23) & 0xff) as i32;
        let frac = (u & 0x007f_ffff) as u64;
        if e == 0xff {
            return F80::from_parts(sign, EXP_MASK, INT_BIT | (frac << 40));
        }
        if e == 0 {
            if frac == 0 {
                return F80::from_parts(sign, 0, 0);
            }
            // frac * 2^-149
            let lz = frac.leading_zeros();
            return F80::from_parts(sign, (16297 - lz as i32) as u16, frac << lz);
        }
        F80::from_parts(sign, (e - 127 + EXP_BIAS) as u16, INT_BIT | (frac << 40))
    }

    /// Narrowing to binary64, rounding to nearest with ties to even.
    ///
    /// Overflows to a signed infinity and underflows gradually through the
    /// binary64 subnormals. NaNs come out quiet with their sign kept.
    pub const fn to_f64(self) -> f64 {
        let sign = if self.is_sign_negative() { 1u64 << 63 } else { 0 };
        match classifyl(self) {
            Classification::Nan => {
                return f64::from_bits(sign | F64_QNAN | ((self.m & FRAC_MASK) >> 11));
            }
            Classification::Infinite => return f64::from_bits(sign | F64_INF),
            Classification::Zero => return f64::from_bits(sign),
            Classification::Subnormal | Classification::Normal => {}
        }

        // value = m * 2^(e - 63)
        let mut e = self.unbiased_exponent();
        if e > 1023 {
            return f64::from_bits(sign | F64_INF);
        }
        if e >= -1022 {
            let mut kept = round_shift(self.m, 11);
            if kept == (1u64 << 53) {
                kept >>= 1;
                e += 1;
                if e > 1023 {
                    return f64::from_bits(sign | F64_INF);
                }
            }
            return f64::from_bits(sign | (((e + 1023) as u64) << 52) | (kept & F64_MANT_MASK));
        }
        // A carry into bit 52 lands on the smallest normal exponent.
        let kept = round_shift(self.m, (-1011 - e) as u32);
        f64::from_bits(sign | kept)
    }

    /// Exact conversion from a 64-bit integer. Zero maps to `+0`.
    pub const fn from_i64(v: i64) -> F80 {
        if v == 0 {
            return F80::ZERO;
        }
        let mag = v.unsigned_abs();
        let lz = mag.leading_zeros();
        F80::from_parts(v < 0, (EXP_BIAS + 63 - lz as i32) as u16, mag << lz)
    }

    /// Conversion to `i64` rounding toward zero, saturating like an `as`
    /// cast: NaN gives 0 and out-of-range magnitudes clamp to the bounds.
    pub const fn to_i64_trunc(self) -> i64 {
        match classifyl(self) {
            Classification::Nan | Classification::Zero | Classification::Subnormal => return 0,
            Classification::Infinite | Classification::Normal => {}
        }
        let neg = self.is_sign_negative();
        let e = self.unbiased_exponent();
        if e < 0 {
            return 0;
        }
        if e >= 63 {
            return if neg { i64::MIN } else { i64::MAX };
        }
        let mag = (self.m >> (63 - e)) as i64;
        if neg { -mag } else { mag }
    }

    /// Exponent of the integer bit; the zero exponent field reads as 1.
    #[inline(always)]
    pub(super) const fn unbiased_exponent(self) -> i32 {
        let biased = self.biased_exponent() as i32;
        if biased == 0 {
            1 - EXP_BIAS
        } else {
            biased - EXP_BIAS
        }
    }

    #[inline(always)]
    fn magnitude_key(self) -> (u16, u64) {
        let e = self.biased_exponent();
        (if e == 0 { 1 } else { e }, self.m)
    }
}

/// Drops the low `drop` bits of `sig`, rounding to nearest, ties to even.
#[inline(always)]
const fn round_shift(sig: u64, drop: u32) -> u64 {
    if drop == 0 {
        return sig;
    }
    if drop > 64 {
        return 0;
    }
    let (kept, rem) = if drop == 64 {
        (0, sig)
    } else {
        (sig >> drop, sig & ((1u64 << drop) - 1))
    };
    let half = 1u64 << (drop - 1);
    if rem > half || (rem == half && (kept & 1) == 1) {
        kept + 1
    } else {
        kept
    }
}

impl From<f64> for F80 {
    fn from(x: f64) -> F80 {
        F80::from_f64(x)
    }
}

impl From<f32> for F80 {
    fn from(x: f32) -> F80 {
        F80::from_f32(x)
    }
}

impl Neg for F80 {
    type Output = F80;

    fn neg(self) -> F80 {
        self.negate()
    }
}

impl PartialEq for F80 {
    fn eq(&self, other: &F80) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for F80 {
    fn partial_cmp(&self, other: &F80) -> Option<Ordering> {
        let (a, b) = (classifyl(*self), classifyl(*other));
        if a == Classification::Nan || b == Classification::Nan {
            return None;
        }
        if a == Classification::Zero && b == Classification::Zero {
            return Some(Ordering::Equal);
        }
        let neg = self.is_sign_negative();
        if neg != other.is_sign_negative() {
            return Some(if neg { Ordering::Less } else { Ordering::Greater });
        }
        let mag = self.magnitude_key().cmp(&other.magnitude_key());
        Some(if neg { mag.reverse() } else { mag })
    }
}

impl fmt::Debug for F80 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F80({:#06x}_{:016x})", self.se, self.m)
    }
}

impl fmt::LowerHex for F80 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        write!(f, "{:04x}{:016x}", self.se, self.m)
    }
}
