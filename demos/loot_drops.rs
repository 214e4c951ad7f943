//! Loot Drops
//!
//! This example demonstrates weighted random selection for item drops.
//!
//! Key concepts:
//! - Proportional draws over (value, weight) entries
//! - Zero-weight entries as disabled-but-present loot
//! - Conditional draws without replacement via pick_where
//! - Deterministic seeding for reproducible sessions
//!
//! Run with: cargo run --example loot_drops

use gambit::WeightedTable;

fn main() {
    println!("=== Loot Drops ===\n");

    let mut drops = WeightedTable::with_seed(2024);
    drops.extend([
        ("rusty sword", 40),
        ("oak shield", 25),
        ("health potion", 20),
        ("gold ring", 10),
        ("dragon scale", 5),
        ("cursed idol", 0), // disabled until the event quest
    ]);

    println!(
        "Table: {} items, total weight {}",
        drops.len(),
        drops.weight_sum()
    );

    println!("\nTen kills, ten drops:");
    for kill in 1..=10 {
        match drops.pick() {
            Some(item) => println!("  kill {kill:>2}: {item}"),
            None => println!("  kill {kill:>2}: nothing"),
        }
    }

    // A quest reward must not be a consumable; draw without replacement
    // until something durable comes up.
    let reward = drops
        .pick_where(|item| !item.ends_with("potion"))
        .copied()
        .unwrap_or("nothing");
    println!("\nQuest reward (no consumables): {reward}");

    // The first three entries are the common pool; a midnight kill only
    // draws from those.
    let common = drops.pick_in_range(0, 3).copied().unwrap_or("nothing");
    println!("Midnight kill (common pool only): {common}");

    println!("\n=== Example Complete ===");
}
