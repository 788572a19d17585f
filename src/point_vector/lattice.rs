//! Lattice operations
use super::PointVector;
use crate::types::Scalar;
use itertools::izip;
use std::cmp::Ordering;

impl<T: Scalar, const N: usize> PointVector<T, N> {
    /// The infimum (greatest lower bound) of `self` and `other`
    ///
    /// Each component is the smaller of the two corresponding components.
    pub fn inf(&self, other: &Self) -> Self {
        Self::combine(self, other, |a, b| if b < a { b } else { a })
    }

    /// The supremum (least upper bound) of `self` and `other`
    ///
    /// Each component is the larger of the two corresponding components.
    pub fn sup(&self, other: &Self) -> Self {
        Self::combine(self, other, |a, b| if b > a { b } else { a })
    }

    /// Whether every component of `self` is at most the corresponding component of `p`
    ///
    /// Equivalent to `self.inf(p) == *self`, without computing the infimum.
    pub fn is_lower(&self, p: &Self) -> bool {
        izip!(self.components.iter(), p.components.iter()).all(|(a, b)| a <= b)
    }

    /// Whether every component of `self` is at least the corresponding component of `p`
    ///
    /// Equivalent to `self.sup(p) == *self`, without computing the supremum.
    pub fn is_upper(&self, p: &Self) -> bool {
        izip!(self.components.iter(), p.components.iter()).all(|(a, b)| a >= b)
    }

    /// Compare two points in the component-wise partial order
    ///
    /// Returns `None` when neither point is lower than the other. This is not
    /// the order used by the comparison operators, which is lexicographic.
    pub fn lattice_cmp(&self, p: &Self) -> Option<Ordering> {
        match (self.is_lower(p), self.is_upper(p)) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => None,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::Point;
    use std::cmp::Ordering;

    fn sample_points() -> Vec<Point<i32, 3>> {
        vec![
            Point::from_xyz(0, 0, 0),
            Point::from_xyz(1, -2, 3),
            Point::from_xyz(-4, 5, 3),
            Point::from_xyz(1, 5, -7),
            Point::from_xyz(i32::MIN, 0, i32::MAX),
            Point::from_xyz(2, 2, 2),
        ]
    }

    #[test]
    fn test_inf_sup() {
        let a = Point::<i32, 3>::from_xyz(1, -2, 3);
        let b = Point::<i32, 3>::from_xyz(-4, 5, 3);
        assert_eq!(a.inf(&b).into_array(), [-4, -2, 3]);
        assert_eq!(a.sup(&b).into_array(), [1, 5, 3]);
    }

    #[test]
    fn test_lattice_laws() {
        let points = sample_points();
        for a in &points {
            assert_eq!(a.inf(a), *a);
            assert_eq!(a.sup(a), *a);
            for b in &points {
                assert_eq!(a.inf(b), b.inf(a));
                assert_eq!(a.sup(b), b.sup(a));
                assert_eq!(a.inf(&a.sup(b)), *a);
                assert_eq!(a.sup(&a.inf(b)), *a);
                for c in &points {
                    assert_eq!(a.inf(&b.inf(c)), a.inf(b).inf(c));
                    assert_eq!(a.sup(&b.sup(c)), a.sup(b).sup(c));
                }
            }
        }
    }

    #[test]
    fn test_is_lower_is_upper() {
        let points = sample_points();
        for a in &points {
            for b in &points {
                assert_eq!(a.is_lower(b), a.inf(b) == *a);
                assert_eq!(a.is_upper(b), a.sup(b) == *a);
            }
        }
    }

    #[test]
    fn test_lattice_cmp() {
        let a = Point::<f64, 2>::from_xy(0.0, 1.0);
        let b = Point::<f64, 2>::from_xy(1.0, 1.0);
        let c = Point::<f64, 2>::from_xy(-1.0, 2.0);
        assert_eq!(a.lattice_cmp(&a), Some(Ordering::Equal));
        assert_eq!(a.lattice_cmp(&b), Some(Ordering::Less));
        assert_eq!(b.lattice_cmp(&a), Some(Ordering::Greater));
        assert_eq!(a.lattice_cmp(&c), None);
        // Incomparable in the lattice, but ordered lexicographically
        assert!(c < a);
    }
}
