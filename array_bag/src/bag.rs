//! The capability contract every bag implementation provides.

use crate::error::Result;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// An unordered collection that permits duplicates.
///
/// Implementations make no promise about the order in which elements are
/// stored, returned by [`Bag::remove`] or exported by [`Bag::to_vec`].
///
/// # Examples
///
/// ```
/// use array_bag::{ArrayBag, Bag, BagError};
///
/// fn fill<B: Bag<&'static str>>(bag: &mut B) -> Result<(), BagError> {
///     for word in ["apple", "pear", "apple"] {
///         bag.add(word)?;
///     }
///     Ok(())
/// }
///
/// let mut bag = ArrayBag::new();
/// fill(&mut bag).unwrap();
/// assert_eq!(bag.frequency_of(&"apple").unwrap(), 2);
/// ```
pub trait Bag<T> {
    /// Adds one occurrence of `entry`.
    ///
    /// Returns `Ok(false)` without touching the bag when `entry` is `None`,
    /// since a bag never stores an absent value.
    fn add<E: Into<Option<T>>>(&mut self, entry: E) -> Result<bool>;

    /// Removes and returns an unspecified element, or `None` if empty.
    fn remove(&mut self) -> Result<Option<T>>;

    /// Removes one occurrence of `entry`. Returns whether one was found.
    fn remove_entry(&mut self, entry: &T) -> Result<bool>;

    /// Returns `true` if at least one occurrence of `entry` is stored.
    fn contains(&self, entry: &T) -> Result<bool>;

    /// Counts the occurrences of `entry`.
    fn frequency_of(&self, entry: &T) -> Result<usize>;

    /// Number of elements currently stored.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element.
    fn clear(&mut self) -> Result<()>;

    /// Copies the stored elements out into a new vector of length
    /// [`Bag::len`].
    fn to_vec(&self) -> Result<Vec<T>>;
}
