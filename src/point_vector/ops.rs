//! Arithmetic operators
use super::PointVector;
use crate::types::Scalar;
use itertools::izip;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

impl<T: Scalar, const N: usize> AddAssign for PointVector<T, N> {
    fn add_assign(&mut self, other: Self) {
        *self += &other;
    }
}

impl<T: Scalar, const N: usize> AddAssign<&PointVector<T, N>> for PointVector<T, N> {
    fn add_assign(&mut self, other: &Self) {
        for (a, b) in izip!(self.components.iter_mut(), other.components.iter()) {
            *a = *a + *b;
        }
    }
}

impl<T: Scalar, const N: usize> SubAssign for PointVector<T, N> {
    fn sub_assign(&mut self, other: Self) {
        *self -= &other;
    }
}

impl<T: Scalar, const N: usize> SubAssign<&PointVector<T, N>> for PointVector<T, N> {
    fn sub_assign(&mut self, other: &Self) {
        for (a, b) in izip!(self.components.iter_mut(), other.components.iter()) {
            *a = *a - *b;
        }
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for PointVector<T, N> {
    fn mul_assign(&mut self, coeff: T) {
        for a in self.components.iter_mut() {
            *a = *a * coeff;
        }
    }
}

impl<T: Scalar, const N: usize> Add for PointVector<T, N> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += &other;
        self
    }
}

impl<T: Scalar, const N: usize> Add for &PointVector<T, N> {
    type Output = PointVector<T, N>;

    fn add(self, other: Self) -> PointVector<T, N> {
        *self + *other
    }
}

impl<T: Scalar, const N: usize> Sub for PointVector<T, N> {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= &other;
        self
    }
}

impl<T: Scalar, const N: usize> Sub for &PointVector<T, N> {
    type Output = PointVector<T, N>;

    fn sub(self, other: Self) -> PointVector<T, N> {
        *self - *other
    }
}

impl<T: Scalar, const N: usize> Mul<T> for PointVector<T, N> {
    type Output = Self;

    fn mul(mut self, coeff: T) -> Self {
        self *= coeff;
        self
    }
}
