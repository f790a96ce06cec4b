//! Generic entry points over the supported numeric kinds.
//!
//! The traits are implemented for a closed set of types (`f32`, `f64`,
//! [`F80`] and the integers `f64` holds exactly), so the width is chosen
//! at the call site by the compiler. Every implementation forwards to the
//! `const fn` of the matching width in [`constlibm`](super::constlibm);
//! generic and `const` callers therefore run the same body.

use super::constlibm::{self, Classification, F80};

/// Floating-point types that can be classified.
pub trait Classify: Copy {
    fn classify(self) -> Classification;

    fn signbit(self) -> bool;

    #[inline(always)]
    fn fpclassify(self) -> i32 {
        self.classify().code()
    }

    #[inline(always)]
    fn isnan(self) -> bool {
        self.classify() == Classification::Nan
    }

    #[inline(always)]
    fn isinf(self) -> bool {
        self.classify() == Classification::Infinite
    }

    #[inline(always)]
    fn isfinite(self) -> bool {
        !matches!(
            self.classify(),
            Classification::Nan | Classification::Infinite
        )
    }

    #[inline(always)]
    fn isnormal(self) -> bool {
        self.classify() == Classification::Normal
    }
}

/// Types with a truncation toward zero.
///
/// Floats truncate to their own width. Integers have no fractional part
/// and widen to `f64`; only integer types that `f64` represents exactly
/// implement this.
pub trait Trunc: Copy {
    type Output;

    fn trunc(self) -> Self::Output;
}

impl Classify for f64 {
    #[inline(always)]
    fn classify(self) -> Classification {
        constlibm::classify(self)
    }

    #[inline(always)]
    fn signbit(self) -> bool {
        constlibm::signbit(self)
    }

    #[inline(always)]
    fn isnan(self) -> bool {
        constlibm::isnan(self)
    }

    #[inline(always)]
    fn isinf(self) -> bool {
        constlibm::isinf(self)
    }

    #[inline(always)]
    fn isfinite(self) -> bool {
        constlibm::isfinite(self)
    }
}

impl Classify for f32 {
    #[inline(always)]
    fn classify(self) -> Classification {
        constlibm::classifyf(self)
    }

    #[inline(always)]
    fn signbit(self) -> bool {
        constlibm::signbitf(self)
    }

    #[inline(always)]
    fn isnan(self) -> bool {
        constlibm::isnanf(self)
    }

    #[inline(always)]
    fn isinf(self) -> bool {
        constlibm::isinff(self)
    }

    #[inline(always)]
    fn isfinite(self) -> bool {
        constlibm::isfinitef(self)
    }
}

impl Classify for F80 {
    #[inline(always)]
    fn classify(self) -> Classification {
        constlibm::classifyl(self)
    }

    #[inline(always)]
    fn signbit(self) -> bool {
        constlibm::signbitl(self)
    }
}

impl Trunc for f64 {
    type Output = f64;

    #[inline(always)]
    fn trunc(self) -> f64 {
        constlibm::trunc(self)
    }
}

impl Trunc for f32 {
    type Output = f32;

    #[inline(always)]
    fn trunc(self) -> f32 {
        constlibm::truncf(self)
    }
}

impl Trunc for F80 {
    type Output = F80;

    #[inline(always)]
    fn trunc(self) -> F80 {
        constlibm::truncl(self)
    }
}

macro_rules! trunc_widening {
    ($($t:ty),*) => {
        $(
            impl Trunc for $t {
                type Output = f64;

                #[inline(always)]
                fn trunc(self) -> f64 {
                    f64::from(self)
                }
            }
        )*
    };
}

trunc_widening!(i8, i16, i32, u8, u16, u32);

#[inline(always)]
pub fn classify<T: Classify>(x: T) -> Classification {
    x.classify()
}

#[inline(always)]
pub fn fpclassify<T: Classify>(x: T) -> i32 {
    x.fpclassify()
}

#[inline(always)]
pub fn signbit<T: Classify>(x: T) -> bool {
    x.signbit()
}

#[inline(always)]
pub fn isnan<T: Classify>(x: T) -> bool {
    x.isnan()
}

#[inline(always)]
pub fn isinf<T: Classify>(x: T) -> bool {
    x.isinf()
}

#[inline(always)]
pub fn isfinite<T: Classify>(x: T) -> bool {
    x.isfinite()
}

#[inline(always)]
pub fn isnormal<T: Classify>(x: T) -> bool {
    x.isnormal()
}

/// Truncates toward zero, picking the width from the argument type.
///
/// ```
/// use constmath::{F80, signbit, trunc};
///
/// assert_eq!(trunc(-3.75f64), -3.0);
/// assert_eq!(trunc(2.5f32), 2.0);
/// assert_eq!(trunc(7i32), 7.0f64);
/// assert!(signbit(trunc(-0.999f64)));
/// assert!(trunc(F80::from_f64(1.5)) == F80::ONE);
/// ```
#[inline(always)]
pub fn trunc<T: Trunc>(x: T) -> T::Output {
    x.trunc()
}
