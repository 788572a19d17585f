//! Traits

mod scalar_traits;

pub use scalar_traits::ScalarTraits;
