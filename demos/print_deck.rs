//! CLI deck-printing example.

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Suit, default_sort, filter, jokers, shuffle_seeded};

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    println!("A fresh deck:");
    for card in deckrs::new(Vec::new()) {
        println!("  {card}");
    }

    println!();
    println!("No hearts, two jokers, shuffled (seed {seed}), then re-sorted:");
    let cards = deckrs::new(vec![
        filter(|card| card.suit == Suit::Heart),
        jokers(2),
        shuffle_seeded(seed),
        default_sort(),
    ]);
    for card in &cards {
        println!("  {card}");
    }
    println!("{} cards total", cards.len());
}
