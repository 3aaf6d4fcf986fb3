#[cfg(feature = "std")]
use thiserror::Error;

/// Errors raised by [`ArrayBag`](crate::ArrayBag).
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BagError {
    /// Requested capacity is outside `1..=MAX_CAPACITY`.
    #[cfg_attr(
        feature = "std",
        error("capacity {0} is outside the allowed range 1..={max}", max = crate::MAX_CAPACITY)
    )]
    InvalidCapacity(usize),

    /// Growing the store would pass the hard capacity ceiling.
    #[cfg_attr(
        feature = "std",
        error("cannot grow bag to {requested} slots, maximum is {max}")
    )]
    CapacityExceeded { requested: usize, max: usize },

    /// The allocator refused the grown store. The bag is left invalid.
    #[cfg_attr(feature = "std", error("failed to allocate {0} slots"))]
    AllocationFailed(usize),

    /// The backing store was left mid-mutation and must not be used.
    #[cfg_attr(feature = "std", error("invalid bag state"))]
    InvalidState,
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BagError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BagError::InvalidCapacity(n) => write!(
                f,
                "capacity {} is outside the allowed range 1..={}",
                n,
                crate::MAX_CAPACITY
            ),
            BagError::CapacityExceeded { requested, max } => {
                write!(f, "cannot grow bag to {} slots, maximum is {}", requested, max)
            }
            BagError::AllocationFailed(n) => write!(f, "failed to allocate {} slots", n),
            BagError::InvalidState => write!(f, "invalid bag state"),
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::error::Error for BagError {}

pub type Result<T> = core::result::Result<T, BagError>;
