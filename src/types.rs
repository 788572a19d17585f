//! Types

mod error;
mod norm;
mod tags;

pub use error::DimensionError;
pub use norm::NormType;
pub use tags::{Bound, PassBy, Sign};

use crate::traits::ScalarTraits;
use num::{traits::AsPrimitive, Num};
use std::fmt::{Debug, Display};

/// A scalar that can be used as a component of a [crate::PointVector]
///
/// The unsigned counterpart given by [ScalarTraits] must itself be a number that
/// can be converted to `f64`, as it is the type of the exact norms.
pub trait Scalar:
    ScalarTraits<
        UnsignedVersion: Num + Copy + PartialOrd + Debug + Display + AsPrimitive<f64>,
    > + Num
    + Copy
    + PartialOrd
    + Debug
    + Display
    + AsPrimitive<f64>
{
    /// The absolute value, as the unsigned counterpart
    ///
    /// This does not overflow for the smallest value of a bounded signed type.
    fn abs_unsigned(self) -> Self::UnsignedVersion;
}

macro_rules! impl_scalar_signed {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn abs_unsigned(self) -> Self::UnsignedVersion {
                    self.unsigned_abs()
                }
            }
        )*
    };
}

macro_rules! impl_scalar_unsigned {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn abs_unsigned(self) -> Self::UnsignedVersion {
                    self
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn abs_unsigned(self) -> Self::UnsignedVersion {
                    self.abs()
                }
            }
        )*
    };
}

impl_scalar_signed!(i8, i16, i32, i64, i128, isize);
impl_scalar_unsigned!(u8, u16, u32, u64, u128, usize);
impl_scalar_float!(f32, f64);
