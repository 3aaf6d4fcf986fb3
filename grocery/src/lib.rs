//! # grocery
//!
//! Grocery-bagging client for [`array_bag`]: item firmness and weight
//! classes, per-bag limits, and a [`GroceryBag`] that enforces them.

pub mod firmness;
pub mod grocery_bag;
pub mod limits;
pub mod weight;

pub use firmness::GroceryItemFirmness;
pub use grocery_bag::{GroceryBag, GroceryBagError, GroceryItem, pack_items};
pub use limits::{GROCERY_BAG_MAX_ITEM_COUNT, GROCERY_BAG_MAX_VOLUME, GROCERY_BAG_MAX_WEIGHT};
pub use weight::GroceryItemWeight;
