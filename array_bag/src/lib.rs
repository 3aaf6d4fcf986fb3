//! # array_bag
//!
//! A `no_std` compatible, resizable, array-backed multiset.
//!
//! ```rust
//! use array_bag::{ArrayBag, Bag};
//!
//! let mut bag = ArrayBag::<&str>::new();
//! bag.add("milk").unwrap();
//! bag.add("eggs").unwrap();
//! bag.add("milk").unwrap();
//!
//! assert_eq!(bag.len(), 3);
//! assert_eq!(bag.frequency_of(&"milk").unwrap(), 2);
//!
//! // Absent values are never stored.
//! assert!(!bag.add(None::<&str>).unwrap());
//! assert_eq!(bag.len(), 3);
//! ```
//!
//! ## Growth
//!
//! A full bag doubles its store on the next add, up to [`MAX_CAPACITY`]
//! slots. Once doubling would pass that ceiling, `add` fails with
//! [`BagError::CapacityExceeded`] and the bag keeps its contents.
//!
//! ```rust
//! use array_bag::{ArrayBag, Bag, BagError};
//!
//! let mut bag = ArrayBag::<u32>::new();
//! for i in 0..5_120 {
//!     bag.add(i).unwrap();
//! }
//! assert!(matches!(bag.add(0), Err(BagError::CapacityExceeded { .. })));
//! assert_eq!(bag.len(), 5_120);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod array_bag;
pub mod bag;
pub mod error;

pub use array_bag::{ArrayBag, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use bag::Bag;
pub use error::BagError;
