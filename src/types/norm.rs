//! Norm types

/// The norm computed by [crate::PointVector::norm]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum NormType {
    /// The Euclidean norm
    #[default]
    L2,
    /// The sum of the absolute values of the components
    L1,
    /// The largest absolute value of a component
    LInfinity,
}
