//! n-dimensional digital points and vectors
//!
//! [PointVector] is a point or vector with a fixed number of components of a
//! scalar type. The scalar types that can be used are described at compile time
//! by the [traits::ScalarTraits] registry, which gives the limits, sign and
//! unsigned counterpart of each type. The unsigned counterpart is the type of the
//! exact norms [PointVector::norm1] and [PointVector::norm_infinity].
//!
//! ```
//! use ndpoint::{types::NormType, Point, Vector};
//!
//! let p = Point::<i32, 3>::from_xyz(3, -1, 2);
//! let v = Vector::<i32, 3>::from_xyz(1, 1, 1);
//! assert_eq!((p + v).into_array(), [4, 0, 3]);
//! assert_eq!(p.norm1(), 6u32);
//! assert_eq!(p.norm(NormType::LInfinity), 3.0);
//! assert!(p.inf(&v).is_lower(&p));
//! ```
#![cfg_attr(feature = "strict", deny(warnings), deny(unused_crate_dependencies))]
#![warn(missing_docs)]

pub mod point_vector;
pub mod traits;
pub mod types;

pub use point_vector::{Point, PointVector, UnsignedComponent, Vector};
