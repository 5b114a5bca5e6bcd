//! A composable playing-card deck builder with optional `no_std` support.
//!
//! The crate provides [`new`], a deck constructor that generates the 52
//! unique suit and rank combinations and threads them through a caller-chosen
//! pipeline of options: shuffling, sorting (default or custom), filtering,
//! and joker insertion.
//!
//! # Example
//!
//! ```
//! use deckrs::{Suit, filter, jokers, shuffle_seeded};
//!
//! let cards = deckrs::new(vec![
//!     filter(|card| card.suit == Suit::Club),
//!     jokers(2),
//!     shuffle_seeded(42),
//! ]);
//! assert_eq!(cards.len(), 41);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
#[cfg(feature = "std")]
pub use deck::shuffle;
pub use deck::{DeckOption, Less, default_sort, filter, jokers, less, new, shuffle_seeded, sort};
pub use error::{InvalidRank, InvalidSuit};
