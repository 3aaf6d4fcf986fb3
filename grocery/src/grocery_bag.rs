//! A grocery bag that refuses items once any of its limits would be passed.

use array_bag::{ArrayBag, Bag, BagError};
use thiserror::Error;

use crate::limits::{GROCERY_BAG_MAX_ITEM_COUNT, GROCERY_BAG_MAX_VOLUME, GROCERY_BAG_MAX_WEIGHT};
use crate::{GroceryItemFirmness, GroceryItemWeight};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroceryBagError {
    #[error("bag already holds {0} items")]
    TooManyItems(usize),

    #[error("adding weight {weight} would exceed the limit ({remaining} left)")]
    TooHeavy { weight: u32, remaining: u32 },

    #[error("adding size {size} would exceed the volume limit ({remaining} left)")]
    TooBulky { size: u32, remaining: u32 },

    #[error("{0} does not fit in an empty bag")]
    Unpackable(String),

    #[error("bag error: {0}")]
    Bag(#[from] BagError),
}

pub type Result<T> = std::result::Result<T, GroceryBagError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroceryItem {
    pub name: String,
    pub firmness: GroceryItemFirmness,
    pub weight: GroceryItemWeight,
    pub size: u32,
}

impl GroceryItem {
    pub fn new(
        name: impl Into<String>,
        firmness: GroceryItemFirmness,
        weight: GroceryItemWeight,
        size: u32,
    ) -> Self {
        Self {
            name: name.into(),
            firmness,
            weight,
            size,
        }
    }
}

impl std::fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {}, size {})",
            self.name, self.firmness, self.weight, self.size
        )
    }
}

/// Holds up to [`GROCERY_BAG_MAX_ITEM_COUNT`] items within the weight and
/// volume limits.
///
/// # Examples
///
/// ```
/// use grocery::{GroceryBag, GroceryItem, GroceryItemFirmness, GroceryItemWeight};
///
/// let mut bag = GroceryBag::new().unwrap();
/// let melon = GroceryItem::new("melon", GroceryItemFirmness::Hard, GroceryItemWeight::VeryHeavy, 6);
///
/// bag.add(melon.clone()).unwrap();
/// assert_eq!(bag.total_weight().unwrap(), 7);
///
/// // A second melon would weigh 14.
/// assert!(bag.add(melon).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct GroceryBag {
    items: ArrayBag<GroceryItem>,
}

impl GroceryBag {
    pub fn new() -> Result<Self> {
        Ok(Self {
            items: ArrayBag::with_capacity(GROCERY_BAG_MAX_ITEM_COUNT)?,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_weight(&self) -> Result<u32> {
        Ok(self.items.iter()?.map(|i| i.weight.weight_value()).sum())
    }

    pub fn total_volume(&self) -> Result<u32> {
        Ok(self.items.iter()?.map(|i| i.size).sum())
    }

    /// Checks `item` against every limit without adding it.
    pub fn check_fits(&self, item: &GroceryItem) -> Result<()> {
        if self.len() >= GROCERY_BAG_MAX_ITEM_COUNT {
            return Err(GroceryBagError::TooManyItems(self.len()));
        }

        let remaining = GROCERY_BAG_MAX_WEIGHT.saturating_sub(self.total_weight()?);
        let weight = item.weight.weight_value();
        if weight > remaining {
            return Err(GroceryBagError::TooHeavy { weight, remaining });
        }

        let remaining = GROCERY_BAG_MAX_VOLUME.saturating_sub(self.total_volume()?);
        if item.size > remaining {
            return Err(GroceryBagError::TooBulky {
                size: item.size,
                remaining,
            });
        }

        Ok(())
    }

    pub fn add(&mut self, item: GroceryItem) -> Result<()> {
        self.check_fits(&item)?;
        log::debug!("bagging {}", item);
        self.items.add(item)?;
        Ok(())
    }

    /// Takes out one item equal to `item`.
    pub fn remove(&mut self, item: &GroceryItem) -> Result<bool> {
        Ok(self.items.remove_entry(item)?)
    }

    /// Takes out whichever item is on top.
    pub fn remove_any(&mut self) -> Result<Option<GroceryItem>> {
        Ok(self.items.remove()?)
    }

    pub fn contains(&self, item: &GroceryItem) -> Result<bool> {
        Ok(self.items.contains(item)?)
    }

    pub fn count_of(&self, item: &GroceryItem) -> Result<usize> {
        Ok(self.items.frequency_of(item)?)
    }

    pub fn items(&self) -> Result<Vec<GroceryItem>> {
        Ok(self.items.to_vec()?)
    }

    /// Removes and returns every item.
    pub fn empty_out(&mut self) -> Result<Vec<GroceryItem>> {
        let items = self.items.to_vec()?;
        self.items.clear()?;
        Ok(items)
    }
}

/// Packs `items` first-fit into as few bags as it manages.
///
/// Fails with [`GroceryBagError::Unpackable`] if an item does not fit even
/// in an empty bag.
pub fn pack_items<I>(items: I) -> Result<Vec<GroceryBag>>
where
    I: IntoIterator<Item = GroceryItem>,
{
    let mut bags: Vec<GroceryBag> = Vec::new();

    for item in items {
        match bags.iter_mut().find(|bag| bag.check_fits(&item).is_ok()) {
            Some(bag) => bag.add(item)?,
            None => {
                let mut bag = GroceryBag::new()?;
                if bag.check_fits(&item).is_err() {
                    return Err(GroceryBagError::Unpackable(item.to_string()));
                }
                bag.add(item)?;
                bags.push(bag);
            }
        }
    }

    log::debug!("packed groceries into {} bags", bags.len());
    Ok(bags)
}
