//! Generates a random shopping trip and packs it into grocery bags.
//!
//! Run with `RUST_LOG=debug` to watch items being bagged and the underlying
//! bags growing.

use grocery::{
    GroceryBagError, GroceryItem, GroceryItemFirmness, GroceryItemWeight, GROCERY_BAG_MAX_VOLUME,
    pack_items,
};
use rand::Rng;
use rand::seq::IndexedRandom;

const NAMES: [&str; 8] = [
    "apples", "bread", "milk", "eggs", "rice", "beans", "cheese", "soup",
];

fn main() -> Result<(), GroceryBagError> {
    env_logger::init();

    let mut rng = rand::rng();
    let count = rng.random_range(10..30);

    let mut trip = Vec::with_capacity(count);
    for _ in 0..count {
        let name = NAMES.choose(&mut rng).copied().unwrap_or("mystery");
        let firmness = *GroceryItemFirmness::ALL.choose(&mut rng).unwrap_or(&GroceryItemFirmness::Firm);
        let weight = *GroceryItemWeight::ALL.choose(&mut rng).unwrap_or(&GroceryItemWeight::Medium);
        let size = rng.random_range(1..=GROCERY_BAG_MAX_VOLUME / 2);
        trip.push(GroceryItem::new(name, firmness, weight, size));
    }

    let bags = pack_items(trip)?;
    for (i, bag) in bags.iter().enumerate() {
        println!(
            "bag {}: {} items, weight {}, volume {}",
            i + 1,
            bag.len(),
            bag.total_weight()?,
            bag.total_volume()?
        );
        for item in bag.items()? {
            println!("    {item}");
        }
    }

    Ok(())
}
