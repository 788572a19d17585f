//! Norms
use super::{PointVector, UnsignedComponent};
use crate::types::{NormType, Scalar};
use num::{traits::AsPrimitive, Zero};

impl<T: Scalar, const N: usize> PointVector<T, N> {
    /// Compute a norm of the vector
    ///
    /// The Euclidean and L1 norms are accumulated in `f64`, so they do not
    /// overflow for integer components. The L-infinity norm is the value of
    /// [PointVector::norm_infinity] converted to `f64`.
    pub fn norm(&self, norm_type: NormType) -> f64 {
        match norm_type {
            NormType::L2 => self
                .components
                .iter()
                .map(|&c| {
                    let c: f64 = c.as_();
                    c * c
                })
                .sum::<f64>()
                .sqrt(),
            NormType::L1 => self
                .components
                .iter()
                .map(|&c| -> f64 { c.abs_unsigned().as_() })
                .sum::<f64>(),
            NormType::LInfinity => self.norm_infinity().as_(),
        }
    }

    /// The sum of the absolute values of the components
    ///
    /// The sum is exact and overflows like the unsigned counterpart of `T`. Use
    /// `norm(NormType::L1)` for a floating value that cannot overflow.
    pub fn norm1(&self) -> UnsignedComponent<T> {
        self.components
            .iter()
            .fold(<UnsignedComponent<T> as Zero>::zero(), |sum, &c| {
                sum + c.abs_unsigned()
            })
    }

    /// The largest absolute value of a component
    pub fn norm_infinity(&self) -> UnsignedComponent<T> {
        self.components
            .iter()
            .fold(<UnsignedComponent<T> as Zero>::zero(), |max, &c| {
                let a = c.abs_unsigned();
                if a > max {
                    a
                } else {
                    max
                }
            })
    }
}
