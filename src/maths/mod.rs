pub mod constlibm;
mod dispatch;

pub use dispatch::{
    Classify, Trunc, classify, fpclassify, isfinite, isinf, isnan, isnormal, signbit, trunc,
};
