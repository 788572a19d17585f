//! Scalar classification tags

/// Whether the values of a scalar type are bounded
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Bound {
    /// The type has a smallest and a largest value
    Bounded,
    /// The type can represent arbitrarily large values
    Unbounded,
    /// Nothing is known about the type
    Unknown,
}

/// Whether a scalar type can represent negative values
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Sign {
    /// The type has negative values
    Signed,
    /// The type has no negative values
    Unsigned,
    /// Nothing is known about the type
    Unknown,
}

/// The preferred way of passing a scalar to a function
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PassBy {
    /// Pass a copy
    Value,
    /// Pass a reference
    Reference,
}
