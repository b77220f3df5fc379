use std::cmp::Eq;
use std::fmt::Debug;

use num_traits::One;
use num_traits::Zero;

/// The scalar used for edge costs, accumulated path costs and heuristics.
///
/// Costs must be non-negative; the search's optimality guarantee depends on
/// it. Unsigned integers satisfy this by construction. Floats get a total
/// order through [`ordered_float::OrderedFloat`], which also satisfies these
/// bounds, so `OrderedFloat<f64>` works for Euclidean-style heuristics.
///
/// Additions are unchecked: an accumulated path cost must stay within the
/// scalar's range, or integer costs overflow (a panic in debug builds,
/// wrap-around in release).
pub trait Cost:
    Copy
    + Debug
    + std::fmt::Display
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Zero
    + One
    + std::ops::Add<Self, Output = Self>
    + std::ops::AddAssign
{
}

impl<T> Cost for T where
    T: Copy
        + Debug
        + std::fmt::Display
        + PartialEq
        + Eq
        + PartialOrd
        + Ord
        + Zero
        + One
        + std::ops::Add<T, Output = T>
        + std::ops::AddAssign
{
}
