//! Prints every grocery enumeration along with how its display name is
//! interpreted back.

use grocery::{GroceryItemFirmness, GroceryItemWeight};

fn main() {
    println!("Members of the GroceryItemFirmness enumeration\n");
    println!(
        "{:<5} {:<15} {:<15} {:<15}",
        "#", "Item Firmness", "Display Name", "Interpreted"
    );
    for (i, firmness) in GroceryItemFirmness::ALL.iter().enumerate() {
        println!(
            "{:<5} {:<15} {:<15} {:<15}",
            i,
            format!("{firmness:?}"),
            firmness.display_name(),
            GroceryItemFirmness::interpret_description(&firmness.to_string()),
        );
    }

    println!("\nMembers of the GroceryItemWeight enumeration\n");
    println!(
        "{:<5} {:<15} {:<15} {:<8} {:<15}",
        "#", "Item Weight", "Display Name", "Value", "Interpreted"
    );
    for (i, weight) in GroceryItemWeight::ALL.iter().enumerate() {
        println!(
            "{:<5} {:<15} {:<15} {:<8} {:<15}",
            i,
            format!("{weight:?}"),
            weight.display_name(),
            weight.weight_value(),
            GroceryItemWeight::interpret_description(&weight.to_string()),
        );
    }
}
