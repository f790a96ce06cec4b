use core::num::FpCategory;

use super::extended::{EXP_MASK as F80_EXP_MASK, F80, FRAC_MASK as F80_FRAC_MASK, INT_BIT};
use super::{
    F32_EXP_MASK, F32_MANT_MASK, F32_SIGN_MASK, F64_EXP_MASK, F64_MANT_MASK, F64_SIGN_MASK,
    f32_to_bits, f64_to_bits, get_exp_bits, get_exp_bits_f32,
};

pub const FP_NAN: i32 = 0;
pub const FP_INFINITE: i32 = 1;
pub const FP_ZERO: i32 = 2;
pub const FP_SUBNORMAL: i32 = 3;
pub const FP_NORMAL: i32 = 4;

/// The five-way partition of floating-point encodings.
///
/// Discriminants are the C `FP_*` codes, so `Classification::Zero as i32`
/// is interchangeable with `fpclassify` results from C code.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Nan = FP_NAN,
    Infinite = FP_INFINITE,
    Zero = FP_ZERO,
    Subnormal = FP_SUBNORMAL,
    Normal = FP_NORMAL,
}

impl Classification {
    #[inline(always)]
    pub const fn code(self) -> i32 {
        self as i32
    }

    pub const fn from_code(code: i32) -> Option<Classification> {
        match code {
            FP_NAN => Some(Classification::Nan),
            FP_INFINITE => Some(Classification::Infinite),
            FP_ZERO => Some(Classification::Zero),
            FP_SUBNORMAL => Some(Classification::Subnormal),
            FP_NORMAL => Some(Classification::Normal),
            _ => None,
        }
    }
}

impl From<FpCategory> for Classification {
    fn from(c: FpCategory) -> Classification {
        match c {
            FpCategory::Nan => Classification::Nan,
            FpCategory::Infinite => Classification::Infinite,
            FpCategory::Zero => Classification::Zero,
            FpCategory::Subnormal => Classification::Subnormal,
            FpCategory::Normal => Classification::Normal,
        }
    }
}

impl From<Classification> for FpCategory {
    fn from(c: Classification) -> FpCategory {
        match c {
            Classification::Nan => FpCategory::Nan,
            Classification::Infinite => FpCategory::Infinite,
            Classification::Zero => FpCategory::Zero,
            Classification::Subnormal => FpCategory::Subnormal,
            Classification::Normal => FpCategory::Normal,
        }
    }
}

// ========= binary64 =========

#[inline(always)]
pub const fn classify(x: f64) -> Classification {
    let u = f64_to_bits(x);
    let e = get_exp_bits(u);
    let mant = u & F64_MANT_MASK;
    if e == 0x7ff {
        if mant == 0 {
            Classification::Infinite
        } else {
            Classification::Nan
        }
    } else if e == 0 {
        if mant == 0 {
            Classification::Zero
        } else {
            Classification::Subnormal
        }
    } else {
        Classification::Normal
    }
}

#[inline(always)]
pub const fn fpclassify(x: f64) -> i32 {
    classify(x).code()
}

#[inline(always)]
pub const fn isfinite(x: f64) -> bool {
    let u = f64_to_bits(x);
    (u & F64_EXP_MASK) != F64_EXP_MASK
}

#[inline(always)]
pub const fn isinf(x: f64) -> bool {
    let u = f64_to_bits(x);
    (u & !F64_SIGN_MASK) == F64_EXP_MASK
}

#[inline(always)]
pub const fn isnan(x: f64) -> bool {
    let u = f64_to_bits(x);
    (u & F64_EXP_MASK) == F64_EXP_MASK && (u & F64_MANT_MASK) != 0
}

#[inline(always)]
pub const fn isnormal(x: f64) -> bool {
    matches!(classify(x), Classification::Normal)
}

/// Sign field of `x`. Unlike `x < 0.0` this sees the sign of `-0.0` and of
/// negative NaNs.
#[inline(always)]
pub const fn signbit(x: f64) -> bool {
    (f64_to_bits(x) & F64_SIGN_MASK) != 0
}

// ========= binary32 =========

#[inline(always)]
pub const fn classifyf(x: f32) -> Classification {
    let u = f32_to_bits(x);
    let e = get_exp_bits_f32(u);
    let mant = u & F32_MANT_MASK;
    if e == 0xff {
        if mant == 0 {
            Classification::Infinite
        } else {
            Classification::Nan
        }
    } else if e == 0 {
        if mant == 0 {
            Classification::Zero
        } else {
            Classification::Subnormal
        }
    } else {
        Classification::Normal
    }
}

#[inline(always)]
pub const fn fpclassifyf(x: f32) -> i32 {
    classifyf(x).code()
}

#[inline(always)]
pub const fn isfinitef(x: f32) -> bool {
    (f32_to_bits(x) & F32_EXP_MASK) != F32_EXP_MASK
}

#[inline(always)]
pub const fn isinff(x: f32) -> bool {
    (f32_to_bits(x) & !F32_SIGN_MASK) == F32_EXP_MASK
}

#[inline(always)]
pub const fn isnanf(x: f32) -> bool {
    let u = f32_to_bits(x);
    (u & F32_EXP_MASK) == F32_EXP_MASK && (u & F32_MANT_MASK) != 0
}

#[inline(always)]
pub const fn isnormalf(x: f32) -> bool {
    matches!(classifyf(x), Classification::Normal)
}

#[inline(always)]
pub const fn signbitf(x: f32) -> bool {
    (f32_to_bits(x) & F32_SIGN_MASK) != 0
}

// ========= x87 extended =========

/// Classifies an extended value, including the encodings the 387 and later
/// reject as invalid operands: pseudo-NaN, pseudo-infinity and unnormals
/// (integer bit clear under a non-zero exponent) are all `Nan`. A
/// pseudo-denormal (integer bit set under a zero exponent) is `Normal`.
#[inline(always)]
pub const fn classifyl(x: F80) -> Classification {
    let e = x.biased_exponent();
    let m = x.significand();
    let int_bit = (m & INT_BIT) != 0;
    if e == F80_EXP_MASK {
        if (m & F80_FRAC_MASK) == 0 && int_bit {
            Classification::Infinite
        } else {
            Classification::Nan
        }
    } else if e == 0 {
        if m == 0 {
            Classification::Zero
        } else if int_bit {
            Classification::Normal
        } else {
            Classification::Subnormal
        }
    } else if int_bit {
        Classification::Normal
    } else {
        Classification::Nan
    }
}

#[inline(always)]
pub const fn fpclassifyl(x: F80) -> i32 {
    classifyl(x).code()
}

#[inline(always)]
pub const fn isfinitel(x: F80) -> bool {
    !matches!(
        classifyl(x),
        Classification::Nan | Classification::Infinite
    )
}

#[inline(always)]
pub const fn isinfl(x: F80) -> bool {
    matches!(classifyl(x), Classification::Infinite)
}

#[inline(always)]
pub const fn isnanl(x: F80) -> bool {
    matches!(classifyl(x), Classification::Nan)
}

#[inline(always)]
pub const fn isnormall(x: F80) -> bool {
    matches!(classifyl(x), Classification::Normal)
}

#[inline(always)]
pub const fn signbitl(x: F80) -> bool {
    x.is_sign_negative()
}
