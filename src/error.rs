//! The closed error taxonomy this crate can report.
//!
//! Every kind here is surfaced to the caller synchronously from the
//! operation that detects it; none is recovered internally. Breaches of a
//! trusted oracle's own contract (a `rank` implementation returning more
//! than `|S|`, for instance) are programmer errors and are not represented
//! here; this crate asserts on them instead of modelling them as a
//! `MatroidError` variant.

use crate::set::ElementType;

/// The closed set of failure modes this crate can report.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MatroidError {
    /// A set operation (`union`/`intersect`/`difference`/
    /// `symmetric_difference`/`add`) was given operands of two different
    /// [`ElementType`]s.
    #[error("element type mismatch: {left} and {right}")]
    TypeMismatch { left: ElementType, right: ElementType },

    /// [`crate::intersection::intersect`] was called on two matroids whose
    /// ground sets differ in type or key-membership.
    #[error("matroids have incompatible ground sets")]
    IncompatibleGroundSets,

    /// `Set::complement(x)` was called with `x` not a subset of the
    /// receiver.
    #[error("argument to complement() is not a subset of the receiver")]
    NotASubset,

    /// A partition matroid's blocks overlap, or their union does not equal
    /// the declared ground set.
    #[error("partition blocks are not pairwise disjoint, or do not cover the declared ground set")]
    DisjointnessViolated,

    /// The linear matroid's SVD rank tolerance ε was negative.
    #[error("numerical rank tolerance must be non-negative, got {0}")]
    NegativeTolerance(f64),
}
