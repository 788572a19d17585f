//! Scalar traits
use crate::types::{Bound, PassBy, Sign};

/// Compile-time facts about a scalar type.
///
/// Only the identities and the signed/unsigned counterparts have to be given by
/// an implementation. The provided items describe a scalar that nothing is known
/// about: the bound and sign are [Bound::Unknown] and [Sign::Unknown],
/// [ScalarTraits::IS_SPECIALIZED] is false and [ScalarTraits::MIN] and
/// [ScalarTraits::MAX] hold the sentinels `ONE` and `ZERO`. Generic code can
/// check `IS_SPECIALIZED` before relying on any of them.
///
/// Every built-in integer and floating point type overrides all of the items.
pub trait ScalarTraits: Sized {
    /// The signed counterpart of this type
    type SignedVersion;
    /// The unsigned counterpart of this type
    type UnsignedVersion;

    /// Additive identity
    const ZERO: Self;
    /// Multiplicative identity
    const ONE: Self;

    /// Whether the implementation describes the type
    const IS_SPECIALIZED: bool = false;
    /// Whether values of this type are bounded
    const BOUND: Bound = Bound::Unknown;
    /// Whether this type is signed
    const SIGN: Sign = Sign::Unknown;
    /// How a value of this type should be passed to a function
    const PASS_BY: PassBy = PassBy::Reference;
    /// The smallest representable value, or `ONE` if unbounded or unknown
    const MIN: Self = Self::ONE;
    /// The largest representable value, or `ZERO` if unbounded or unknown
    const MAX: Self = Self::ZERO;
    /// The number of significant binary digits, or 0 if unbounded or unknown
    const DIGITS: u32 = 0;
}

macro_rules! impl_signed_integer {
    ($($t:ty => $u:ty),*) => {
        $(
            impl ScalarTraits for $t {
                type SignedVersion = $t;
                type UnsignedVersion = $u;

                const ZERO: Self = 0;
                const ONE: Self = 1;

                const IS_SPECIALIZED: bool = true;
                const BOUND: Bound = Bound::Bounded;
                const SIGN: Sign = Sign::Signed;
                const PASS_BY: PassBy = PassBy::Value;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const DIGITS: u32 = <$t>::BITS - 1;
            }
        )*
    };
}

macro_rules! impl_unsigned_integer {
    ($($t:ty => $s:ty),*) => {
        $(
            impl ScalarTraits for $t {
                type SignedVersion = $s;
                type UnsignedVersion = $t;

                const ZERO: Self = 0;
                const ONE: Self = 1;

                const IS_SPECIALIZED: bool = true;
                const BOUND: Bound = Bound::Bounded;
                const SIGN: Sign = Sign::Unsigned;
                const PASS_BY: PassBy = PassBy::Value;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const DIGITS: u32 = <$t>::BITS;
            }
        )*
    };
}

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl ScalarTraits for $t {
                type SignedVersion = $t;
                type UnsignedVersion = $t;

                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                const IS_SPECIALIZED: bool = true;
                const BOUND: Bound = Bound::Bounded;
                const SIGN: Sign = Sign::Signed;
                const PASS_BY: PassBy = PassBy::Value;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const DIGITS: u32 = <$t>::MANTISSA_DIGITS;
            }
        )*
    };
}

impl_signed_integer!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);
impl_unsigned_integer!(u8 => i8, u16 => i16, u32 => i32, u64 => i64, u128 => i128, usize => isize);
impl_float!(f32, f64);
