//! Serialization
//!
//! A point is serialized as a tuple of its components.
use super::PointVector;
use crate::types::Scalar;
use serde::{
    de::{self, SeqAccess, Visitor},
    ser::SerializeTuple,
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::{fmt, marker::PhantomData};

impl<T: Scalar + Serialize, const N: usize> Serialize for PointVector<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for c in &self.components {
            tuple.serialize_element(c)?;
        }
        tuple.end()
    }
}

struct PointVectorVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T: Scalar + Deserialize<'de>, const N: usize> Visitor<'de> for PointVectorVisitor<T, N> {
    type Value = PointVector<T, N>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a tuple of {N} components")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut p = PointVector::<T, N>::ZERO;
        for i in 0..N {
            p.components[i] = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        Ok(p)
    }
}

impl<'de, T: Scalar + Deserialize<'de>, const N: usize> Deserialize<'de> for PointVector<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(N, PointVectorVisitor(PhantomData))
    }
}

#[cfg(test)]
mod test {
    use crate::Point;

    #[test]
    fn test_ron_roundtrip() {
        let p = Point::<f64, 3>::from_xyz(1.5, -2.0, 0.25);
        let s = ron::to_string(&p).unwrap();
        let q: Point<f64, 3> = ron::from_str(&s).unwrap();
        assert_eq!(p, q);
    }

    #[test]
    fn test_ron_tuple() {
        let p: Point<i32, 3> = ron::from_str("(3, -1, 2)").unwrap();
        assert_eq!(p, Point::from_xyz(3, -1, 2));
    }

    #[test]
    fn test_ron_too_short() {
        assert!(ron::from_str::<Point<i32, 3>>("(3, -1)").is_err());
    }
}
