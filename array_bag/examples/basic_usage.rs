use array_bag::{ArrayBag, Bag, BagError};

fn main() -> Result<(), BagError> {
    env_logger::init();

    let mut bag = ArrayBag::<&str>::with_capacity(4)?;

    for word in ["apple", "pear", "apple", "plum", "apple", "fig"] {
        bag.add(word)?;
    }
    println!("stored {} words in {} slots", bag.len(), bag.capacity());
    println!("apple appears {} times", bag.frequency_of(&"apple")?);

    // Swap-with-last removal: the remaining order is unspecified.
    bag.remove_entry(&"apple")?;
    println!("after removing one apple: {:?}", bag.to_vec()?);

    if let Some(word) = bag.remove()? {
        println!("removed an arbitrary word: {word}");
    }

    bag.clear()?;
    println!("cleared, empty = {}", bag.is_empty());

    Ok(())
}
