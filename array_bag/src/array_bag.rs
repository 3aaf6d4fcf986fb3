//! Resizable, array-backed [`Bag`] implementation.
//!
//! Elements live in a boxed slice of optional slots. The first `count` slots
//! are occupied, the rest are `None`. Removal swaps the last occupied slot
//! into the hole, so it runs in constant time and reorders the bag.
//!
//! # Examples
//!
//! ```rust
//! use array_bag::{ArrayBag, Bag};
//!
//! let mut bag = ArrayBag::<i32>::with_capacity(2).expect("failed to create bag");
//! bag.add(7).unwrap();
//! bag.add(7).unwrap();
//! bag.add(9).unwrap(); // grows to 4 slots
//!
//! assert_eq!(bag.capacity(), 4);
//! assert_eq!(bag.frequency_of(&7).unwrap(), 2);
//! assert!(bag.remove_entry(&9).unwrap());
//! assert_eq!(bag.len(), 2);
//! ```
use crate::bag::Bag;
use crate::error::{BagError, Result};

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

/// Capacity used by [`ArrayBag::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Hard ceiling on the number of slots a bag may allocate.
pub const MAX_CAPACITY: usize = 10_000;

#[derive(Debug, Clone)]
pub struct ArrayBag<T> {
    slots: Box<[Option<T>]>,
    count: usize,
    valid: bool,
}

/// Validates a requested slot count.
#[inline]
fn check_capacity(capacity: usize) -> Result<()> {
    if (1..=MAX_CAPACITY).contains(&capacity) {
        Ok(())
    } else {
        Err(BagError::InvalidCapacity(capacity))
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    core::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> ArrayBag<T> {
    /// Creates an empty bag with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            slots: empty_slots(DEFAULT_CAPACITY),
            count: 0,
            valid: true,
        }
    }

    /// Creates an empty bag with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`BagError::InvalidCapacity`] if `capacity` is zero or larger
    /// than [`MAX_CAPACITY`].
    ///
    /// # Examples
    ///
    /// ```
    /// use array_bag::{ArrayBag, BagError, MAX_CAPACITY};
    ///
    /// assert!(ArrayBag::<u8>::with_capacity(1).is_ok());
    /// assert!(ArrayBag::<u8>::with_capacity(MAX_CAPACITY).is_ok());
    /// assert_eq!(
    ///     ArrayBag::<u8>::with_capacity(0).unwrap_err(),
    ///     BagError::InvalidCapacity(0)
    /// );
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        check_capacity(capacity)?;

        Ok(Self {
            slots: empty_slots(capacity),
            count: 0,
            valid: true,
        })
    }

    /// Builds a default-capacity bag holding every item of `iter`.
    ///
    /// # Errors
    ///
    /// Returns [`BagError::CapacityExceeded`] if the items do not fit.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self> {
        let mut bag = Self::new();
        for value in iter {
            bag.store(value)?;
        }
        Ok(bag)
    }

    /// Number of slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Iterates over the stored elements in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`BagError::InvalidState`] if the store is not usable.
    pub fn iter(&self) -> Result<impl Iterator<Item = &T>> {
        self.check_integrity()?;
        Ok(self.live().iter().flatten())
    }

    #[inline]
    fn live(&self) -> &[Option<T>] {
        &self.slots[..self.count]
    }

    fn check_integrity(&self) -> Result<()> {
        if self.valid {
            Ok(())
        } else {
            Err(BagError::InvalidState)
        }
    }

    fn store(&mut self, value: T) -> Result<()> {
        self.ensure_capacity()?;
        self.slots[self.count] = Some(value);
        self.count += 1;
        Ok(())
    }

    /// Doubles the store when every slot is occupied.
    fn ensure_capacity(&mut self) -> Result<()> {
        let current = self.slots.len();
        if self.count < current {
            return Ok(());
        }

        let requested = current * 2;
        if requested > MAX_CAPACITY {
            log::warn!(
                "refusing to grow bag from {} to {} slots (maximum {})",
                current,
                requested,
                MAX_CAPACITY
            );
            return Err(BagError::CapacityExceeded {
                requested,
                max: MAX_CAPACITY,
            });
        }
        check_capacity(requested)?;

        // Cleared until the new store is in place.
        self.valid = false;

        let mut grown: Vec<Option<T>> = Vec::new();
        if grown.try_reserve_exact(requested).is_err() {
            log::warn!("failed to allocate {} slots, bag is now unusable", requested);
            return Err(BagError::AllocationFailed(requested));
        }
        grown.extend(self.slots[..self.count].iter_mut().map(Option::take));
        grown.resize_with(requested, || None);
        self.slots = grown.into_boxed_slice();

        self.valid = true;
        log::debug!("grew bag from {} to {} slots", current, requested);
        Ok(())
    }

    /// Removes the element at `index` by moving the last element into its
    /// slot. Returns `None` if `index` is not a live slot.
    fn remove_at(&mut self, index: usize) -> Option<T> {
        if self.count == 0 || index >= self.count {
            return None;
        }

        let last = self.count - 1;
        self.slots.swap(index, last);
        let removed = self.slots[last].take();
        self.count -= 1;

        log::trace!("removed slot {} of {}", index, last + 1);
        removed
    }
}

impl<T: PartialEq> ArrayBag<T> {
    fn index_of(&self, entry: &T) -> Option<usize> {
        self.live()
            .iter()
            .position(|slot| slot.as_ref() == Some(entry))
    }
}

impl<T: PartialEq + Clone> Bag<T> for ArrayBag<T> {
    fn add<E: Into<Option<T>>>(&mut self, entry: E) -> Result<bool> {
        self.check_integrity()?;

        let Some(value) = entry.into() else {
            return Ok(false);
        };
        self.store(value)?;
        Ok(true)
    }

    fn remove(&mut self) -> Result<Option<T>> {
        self.check_integrity()?;

        match self.count.checked_sub(1) {
            Some(last) => Ok(self.remove_at(last)),
            None => Ok(None),
        }
    }

    fn remove_entry(&mut self, entry: &T) -> Result<bool> {
        self.check_integrity()?;

        let removed = self
            .index_of(entry)
            .and_then(|index| self.remove_at(index));
        Ok(removed.is_some())
    }

    fn contains(&self, entry: &T) -> Result<bool> {
        self.check_integrity()?;
        Ok(self.index_of(entry).is_some())
    }

    fn frequency_of(&self, entry: &T) -> Result<usize> {
        Ok(self.iter()?.filter(|value| *value == entry).count())
    }

    #[inline]
    fn len(&self) -> usize {
        self.count
    }

    fn clear(&mut self) -> Result<()> {
        self.check_integrity()?;

        for slot in &mut self.slots[..self.count] {
            *slot = None;
        }
        self.count = 0;
        Ok(())
    }

    fn to_vec(&self) -> Result<Vec<T>> {
        Ok(self.iter()?.cloned().collect())
    }
}

impl<T> Default for ArrayBag<T> {
    fn default() -> Self {
        Self::new()
    }
}
