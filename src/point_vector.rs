//! Points and vectors
//!
//! A [PointVector] is a fixed-size tuple of `N` scalars. The same type is used
//! for digital points and for displacement vectors: [Point] and [Vector] are
//! aliases of it, and nothing stops two points from being added together.
//!
//! Two orders are defined on points. The comparison operators (`<`, `<=`,
//! `>`, `>=`) are lexicographic, from component 0 to component `N - 1`, and
//! are the order used by sorting and ordered containers. The component-wise
//! partial order of the lattice is available through [PointVector::is_lower],
//! [PointVector::is_upper] and [PointVector::lattice_cmp], with
//! [PointVector::inf] and [PointVector::sup] as meet and join.
mod lattice;
mod norm;
mod ops;
#[cfg(feature = "serde")]
mod serialize;

use crate::{
    traits::ScalarTraits,
    types::{DimensionError, Scalar},
};
use itertools::{izip, Itertools};
use num::traits::AsPrimitive;
use std::{fmt, ops::Index, ops::IndexMut};

/// The unsigned type of the components of a point with scalar type `T`
pub type UnsignedComponent<T> = <T as ScalarTraits>::UnsignedVersion;

/// A point or vector with `N` components of type `T`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PointVector<T: Scalar, const N: usize> {
    components: [T; N],
}

/// A digital point
pub type Point<T, const N: usize> = PointVector<T, N>;
/// A digital vector
pub type Vector<T, const N: usize> = PointVector<T, N>;

impl<T: Scalar, const N: usize> PointVector<T, N> {
    /// The point with every component equal to zero
    pub const ZERO: Self = Self {
        components: [T::ZERO; N],
    };

    /// The number of components
    pub const DIMENSION: usize = N;

    /// Create a point with every component equal to zero
    pub fn new() -> Self {
        const { assert!(N >= 1, "A point must have at least one component") };
        Self::ZERO
    }

    /// The point with every component equal to zero
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Create a point from an array of components
    pub fn from_array(components: [T; N]) -> Self {
        const { assert!(N >= 1, "A point must have at least one component") };
        Self { components }
    }

    /// Create a point from the first `N` values of a slice
    ///
    /// Panics if the slice has fewer than `N` values. Use `TryFrom` to convert a
    /// slice of unknown length.
    pub fn from_slice(values: &[T]) -> Self {
        assert!(
            values.len() >= N,
            "Cannot create a point of dimension {N} from {} values",
            values.len()
        );
        Self::from_fn(|i| values[i])
    }

    /// Create a point from a function of the component index
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self::from_array(std::array::from_fn(f))
    }

    /// Create a point from its first component. The other components are zero.
    pub fn from_x(x: T) -> Self {
        const { assert!(N >= 1, "from_x needs a dimension of at least 1") };
        let mut p = Self::ZERO;
        p.components[0] = x;
        p
    }

    /// Create a point from its first two components. The other components are zero.
    pub fn from_xy(x: T, y: T) -> Self {
        const { assert!(N >= 2, "from_xy needs a dimension of at least 2") };
        let mut p = Self::ZERO;
        p.components[0] = x;
        p.components[1] = y;
        p
    }

    /// Create a point from its first three components. The other components are zero.
    pub fn from_xyz(x: T, y: T, z: T) -> Self {
        const { assert!(N >= 3, "from_xyz needs a dimension of at least 3") };
        let mut p = Self::ZERO;
        p.components[0] = x;
        p.components[1] = y;
        p.components[2] = z;
        p
    }

    /// Create a point from its first four components. The other components are zero.
    pub fn from_xyzt(x: T, y: T, z: T, t: T) -> Self {
        const { assert!(N >= 4, "from_xyzt needs a dimension of at least 4") };
        let mut p = Self::ZERO;
        p.components[0] = x;
        p.components[1] = y;
        p.components[2] = z;
        p.components[3] = t;
        p
    }

    /// Create a point by applying `f` to each pair of components of `a` and `b`
    pub fn combine<F: Fn(T, T) -> T>(a: &Self, b: &Self, f: F) -> Self {
        Self::from_fn(|i| f(a.components[i], b.components[i]))
    }

    /// Apply `f` to every component
    pub fn map<U: Scalar, F: FnMut(T) -> U>(self, f: F) -> PointVector<U, N> {
        PointVector {
            components: self.components.map(f),
        }
    }

    /// Convert every component to another scalar type, as the `as` operator does
    ///
    /// Converting floating point components to an integer type truncates them.
    pub fn cast<U: Scalar>(&self) -> PointVector<U, N>
    where
        T: AsPrimitive<U>,
    {
        self.map(|c| AsPrimitive::<U>::as_(c))
    }

    /// The number of components
    pub const fn size() -> usize {
        N
    }

    /// The number of components
    pub const fn dimension() -> usize {
        N
    }

    /// The component at index `i`
    ///
    /// Panics if `i` is not less than `N`.
    pub fn at(&self, i: usize) -> &T {
        &self.components[i]
    }

    /// A mutable reference to the component at index `i`
    ///
    /// Panics if `i` is not less than `N`.
    pub fn at_mut(&mut self, i: usize) -> &mut T {
        &mut self.components[i]
    }

    /// The component at index `i`, or `None` if `i` is out of range
    pub fn get(&self, i: usize) -> Option<&T> {
        self.components.get(i)
    }

    /// A mutable reference to the component at index `i`, or `None` if `i` is out of range
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.components.get_mut(i)
    }

    /// Iterate over the components
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.components.iter()
    }

    /// Iterate mutably over the components
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.components.iter_mut()
    }

    /// The components as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    /// The components as an array
    pub fn as_array(&self) -> &[T; N] {
        &self.components
    }

    /// Consume the point and return its components
    pub fn into_array(self) -> [T; N] {
        self.components
    }

    /// Set every component to zero
    pub fn reset(&mut self) {
        self.components = [T::ZERO; N];
    }

    /// Check that the point is consistent
    ///
    /// Every point built through the public API is valid.
    pub fn is_valid(&self) -> bool {
        true
    }

    /// Write the point to `out`, in the format used by [fmt::Display]
    pub fn self_display<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "[PointVector] {{{}}}", self.components.iter().join(", "))
    }
}

impl<T: Scalar, const N: usize> Default for PointVector<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, const N: usize> fmt::Display for PointVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.self_display(f)
    }
}

impl<T: Scalar, const N: usize> Index<usize> for PointVector<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.components[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for PointVector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.components[i]
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for PointVector<T, N> {
    fn from(components: [T; N]) -> Self {
        Self::from_array(components)
    }
}

impl<T: Scalar, const N: usize> From<&[T; N]> for PointVector<T, N> {
    fn from(components: &[T; N]) -> Self {
        Self::from_array(*components)
    }
}

impl<T: Scalar, const N: usize> From<PointVector<T, N>> for [T; N] {
    fn from(p: PointVector<T, N>) -> Self {
        p.components
    }
}

impl<T: Scalar, const N: usize> TryFrom<&[T]> for PointVector<T, N> {
    type Error = DimensionError;

    fn try_from(values: &[T]) -> Result<Self, DimensionError> {
        let components = <[T; N]>::try_from(values).map_err(|_| DimensionError::Mismatch {
            expected: N,
            found: values.len(),
        })?;
        Ok(Self::from_array(components))
    }
}

/// Values after the `N`th are ignored and missing values are zero
impl<T: Scalar, const N: usize> FromIterator<T> for PointVector<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut p = Self::new();
        for (c, value) in izip!(p.components.iter_mut(), iter) {
            *c = value;
        }
        p
    }
}

impl<T: Scalar, const N: usize> IntoIterator for PointVector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a, T: Scalar, const N: usize> IntoIterator for &'a PointVector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl<'a, T: Scalar, const N: usize> IntoIterator for &'a mut PointVector<T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter_mut()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let p = PointVector::<i32, 5>::default();
        for i in 0..PointVector::<i32, 5>::size() {
            assert_eq!(*p.at(i), 0);
        }
        assert_eq!(p, PointVector::ZERO);
        assert_eq!(p, PointVector::zero());
    }

    #[test]
    fn test_dimension() {
        assert_eq!(Point::<f64, 4>::dimension(), 4);
        assert_eq!(Point::<f64, 4>::size(), 4);
        assert_eq!(Point::<u16, 1>::DIMENSION, 1);
    }

    #[test]
    fn test_explicit_values() {
        let p = Point::<f64, 4>::from_xyz(-3.0, 4.0, 4.5);
        assert_eq!(p.into_array(), [-3.0, 4.0, 4.5, 0.0]);

        let q = Point::<i64, 2>::from_xy(7, -8);
        assert_eq!(q.as_slice(), &[7, -8]);

        let r = Point::<i32, 5>::from_xyzt(1, 2, 3, 4);
        assert_eq!(r.into_array(), [1, 2, 3, 4, 0]);

        let s = Point::<u8, 3>::from_x(9);
        assert_eq!(s.into_array(), [9, 0, 0]);
    }

    #[test]
    fn test_at_mut() {
        let mut p = Point::<f64, 4>::new();
        *p.at_mut(2) = 4.5;
        *p.at_mut(1) = 4.0;
        p[0] = -3.0;
        assert_eq!(p.into_array(), [-3.0, 4.0, 4.5, 0.0]);
    }

    #[test]
    fn test_get() {
        let mut p = Point::<i32, 2>::from_xy(1, 2);
        assert_eq!(p.get(1), Some(&2));
        assert_eq!(p.get(2), None);
        if let Some(c) = p.get_mut(0) {
            *c = 5;
        }
        assert_eq!(p[0], 5);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let p = Point::<i32, 3>::new();
        let _ = p[3];
    }

    #[test]
    fn test_from_slice() {
        let values = [3.5, 4.1, 2.2, 3.2, 9.9];
        let p = Vector::<f64, 4>::from_slice(&values);
        for i in 0..4 {
            assert_eq!(*p.at(i), values[i]);
        }
    }

    #[test]
    #[should_panic]
    fn test_from_short_slice() {
        let _ = Vector::<f64, 4>::from_slice(&[1.0, 2.0]);
    }

    #[test]
    fn test_try_from_slice() {
        let values = [1, 2, 3];
        let p = Point::<i32, 3>::try_from(&values[..]).unwrap();
        assert_eq!(p.into_array(), values);

        let e = Point::<i32, 4>::try_from(&values[..]).unwrap_err();
        assert_eq!(
            e,
            DimensionError::Mismatch {
                expected: 4,
                found: 3
            }
        );
        assert_eq!(e.to_string(), "expected 4 components, found 3");
    }

    #[test]
    fn test_from_iter() {
        let p: Point<i32, 4> = [1, 2].into_iter().collect();
        assert_eq!(p.into_array(), [1, 2, 0, 0]);

        let q: Point<i32, 2> = (1..10).collect();
        assert_eq!(q.into_array(), [1, 2]);
    }

    #[test]
    fn test_combine() {
        let a = Point::<i32, 3>::from_xyz(1, 5, -2);
        let b = Point::<i32, 3>::from_xyz(4, 2, -2);
        let c = PointVector::combine(&a, &b, |x, y| x * 10 + y);
        assert_eq!(c.into_array(), [14, 52, -22]);
    }

    #[test]
    fn test_cast() {
        let mut p = Point::<f64, 3>::new();
        p[2] = 4.3;
        p[1] = 2.3;
        let q: Point<i32, 3> = p.cast();
        assert_eq!(q.into_array(), [0, 2, 4]);

        let r: Point<f64, 3> = q.cast();
        assert_eq!(r.into_array(), [0.0, 2.0, 4.0]);
    }

    #[test]
    fn test_reset() {
        let mut p = Point::<i16, 3>::from_xyz(1, -2, 3);
        p.reset();
        assert_eq!(p, Point::ZERO);
    }

    #[test]
    fn test_iterators() {
        let mut p = Point::<i32, 3>::from_xyz(1, 2, 3);
        for c in p.iter_mut() {
            *c *= 2;
        }
        assert_eq!(p.iter().copied().collect::<Vec<_>>(), vec![2, 4, 6]);
        for c in &mut p {
            *c += 1;
        }
        assert_eq!((&p).into_iter().sum::<i32>(), 15);
        assert_eq!(p.into_iter().collect::<Vec<_>>(), vec![3, 5, 7]);
    }

    #[test]
    fn test_display() {
        let p = Point::<i32, 3>::from_xyz(3, -1, 2);
        assert_eq!(p.to_string(), "[PointVector] {3, -1, 2}");

        let mut s = String::new();
        Point::<f64, 2>::from_xy(0.5, -1.0)
            .self_display(&mut s)
            .unwrap();
        assert_eq!(s, "[PointVector] {0.5, -1}");
        assert!(p.is_valid());
    }

    #[test]
    fn test_lexicographic_order() {
        let a = Point::<i32, 3>::from_xyz(1, 9, 9);
        let b = Point::<i32, 3>::from_xyz(2, 0, 0);
        let c = Point::<i32, 3>::from_xyz(2, 0, 1);
        assert!(a < b);
        assert!(b < c);
        assert!(a <= b);
        assert!(c > a);
        assert!(c >= b);

        let mut points = vec![c, a, b];
        points.sort();
        assert_eq!(points, vec![a, b, c]);
    }
}
