//! Limits on what a single grocery bag may hold.

/// Maximum number of items in one bag.
pub const GROCERY_BAG_MAX_ITEM_COUNT: usize = 11;

/// Maximum cumulative size of the items in one bag.
pub const GROCERY_BAG_MAX_VOLUME: u32 = 13;

/// Maximum cumulative weight of the items in one bag.
pub const GROCERY_BAG_MAX_WEIGHT: u32 = 12;
