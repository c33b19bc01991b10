//! Numeric edge weights.

use crate::error::{GraphError, Result};
use core::fmt::Debug;
use num_traits::{NumCast, PrimInt, Saturating, Signed, ToPrimitive};

/// An integer edge weight.
///
/// Implemented for every signed primitive integer. Signedness is required
/// because Bellman-Ford and Floyd-Warshall accept negative edges; algorithms
/// that cannot handle them reject them explicitly.
pub trait Weight: PrimInt + Signed + Debug + Default + Send + Sync + 'static {
    /// Adds two weights, reporting overflow as [`GraphError::WeightOverflow`].
    #[inline]
    fn try_add(self, rhs: Self) -> Result<Self> {
        self.checked_add(&rhs).ok_or(GraphError::WeightOverflow)
    }

    /// Adds two weights, clamping at the type's bounds.
    #[inline]
    fn saturating_sum(self, rhs: Self) -> Self {
        Saturating::saturating_add(self, rhs)
    }

    /// Widens to `i128`, the type shortest-path costs accumulate in.
    #[inline]
    fn widen(self) -> Result<i128> {
        self.to_i128().ok_or(GraphError::WeightOverflow)
    }

    /// Narrows an accumulated cost back to `Self`.
    ///
    /// # Errors
    /// Returns [`GraphError::WeightOverflow`] if `cost` is outside the range of `Self`.
    #[inline]
    fn narrow(cost: i128) -> Result<Self> {
        <Self as NumCast>::from(cost).ok_or(GraphError::WeightOverflow)
    }
}

impl<T> Weight for T where T: PrimInt + Signed + Debug + Default + Send + Sync + 'static {}
