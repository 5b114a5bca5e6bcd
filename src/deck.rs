//! Deck construction and the option pipeline.
//!
//! [`new`] builds the canonical 52-card sequence and threads it through the
//! supplied options in order. Each option is a whole-sequence transformation;
//! composition order is entirely caller-controlled.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A deck construction option: a one-shot transformation of the card
/// sequence.
///
/// Options receive whatever sequence the previous stage produced, including
/// an empty one, and never fail.
pub type DeckOption = Box<dyn FnOnce(Vec<Card>) -> Vec<Card>>;

/// A positional less-than predicate over a card sequence, as produced by a
/// comparator factory passed to [`sort`].
pub type Less<'a> = Box<dyn FnMut(usize, usize) -> bool + 'a>;

/// Creates a deck of cards.
///
/// The base sequence iterates the four standard suits in new-deck order and,
/// within each suit, ranks from Ace through King, yielding a deterministic
/// 52-card sequence. Each option is then applied in the order given.
///
/// # Example
///
/// ```
/// use deckrs::{DECK_SIZE, jokers, shuffle_seeded};
///
/// let plain = deckrs::new(Vec::new());
/// assert_eq!(plain.len(), DECK_SIZE);
///
/// let cards = deckrs::new(vec![shuffle_seeded(42), jokers(2)]);
/// assert_eq!(cards.len(), DECK_SIZE + 2);
/// ```
#[must_use]
pub fn new(options: impl IntoIterator<Item = DeckOption>) -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
    options.into_iter().fold(cards, |cards, option| option(cards))
}

/// Returns an option that shuffles the deck with the thread-local generator.
///
/// Every permutation is equally likely. The result is not deterministic
/// across runs; use [`shuffle_seeded`] when reproducibility matters.
///
/// There is no point passing a shuffle and a sort together in any order.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[must_use]
pub fn shuffle() -> DeckOption {
    Box::new(|mut cards| {
        cards.shuffle(&mut rand::rng());
        cards
    })
}

/// Returns an option that shuffles the deck with a seeded generator.
///
/// The same seed over the same input sequence always produces the same
/// permutation.
///
/// # Example
///
/// ```
/// use deckrs::shuffle_seeded;
///
/// let first = deckrs::new(vec![shuffle_seeded(7)]);
/// let second = deckrs::new(vec![shuffle_seeded(7)]);
/// assert_eq!(first, second);
/// ```
#[must_use]
pub fn shuffle_seeded(seed: u64) -> DeckOption {
    Box::new(move |mut cards| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        cards.shuffle(&mut rng);
        cards
    })
}

/// Returns a user-defined sorting option.
///
/// The factory sees the whole sequence and returns a positional less-than
/// predicate over it, so comparators may consult the entire collection (or
/// captured external tables) rather than just the two cards being compared.
///
/// # Example
///
/// ```
/// use deckrs::{Card, Less, sort};
///
/// fn by_rank(cards: &[Card]) -> Less<'_> {
///     Box::new(move |i, j| (cards[i].rank as u8) < (cards[j].rank as u8))
/// }
///
/// let cards = deckrs::new(vec![sort(by_rank)]);
/// assert_eq!(cards[0].rank, deckrs::Rank::Ace);
/// ```
#[must_use]
pub fn sort<F>(less: F) -> DeckOption
where
    F: for<'a> Fn(&'a [Card]) -> Less<'a> + 'static,
{
    Box::new(move |cards| {
        let mut order: Vec<usize> = (0..cards.len()).collect();
        {
            let mut less = less(&cards);
            order.sort_by(|&i, &j| {
                if less(i, j) {
                    Ordering::Less
                } else if less(j, i) {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            });
        }
        order.into_iter().map(|index| cards[index]).collect()
    })
}

/// Returns an option that sorts the deck in the default way.
///
/// The default order is the canonical construction order, so applying this
/// to a freshly built deck changes nothing, and applying it after a shuffle
/// recovers the original order.
#[must_use]
pub fn default_sort() -> DeckOption {
    sort(less)
}

/// The default comparator: ascending by the card's absolute value,
/// `suit * 13 + rank`. This is the same order the deck is built in.
///
/// # Example
///
/// ```
/// use deckrs::{Card, Rank, Suit, less};
///
/// let cards = [
///     Card::new(Suit::Heart, Rank::Ace),
///     Card::new(Suit::Spade, Rank::Two),
/// ];
/// let mut cmp = less(&cards);
/// assert!(cmp(1, 0));
/// ```
#[must_use]
pub fn less(cards: &[Card]) -> Less<'_> {
    Box::new(move |i, j| value(cards[i]) < value(cards[j]))
}

/// The absolute value of a card, used by the default sort.
const fn value(card: Card) -> u8 {
    card.suit as u8 * 13 + card.rank as u8
}

/// Returns an option that appends `count` joker cards to the deck.
///
/// Each joker carries [`Suit::Joker`] and a distinct rank-typed tag, assigned
/// in descending order from `count` down to 1, so the appended jokers are
/// mutually unequal and never equal to a standard card. Existing cards are
/// left untouched.
///
/// # Panics
///
/// Panics if `count` exceeds 13, the number of available rank tags.
///
/// # Example
///
/// ```
/// use deckrs::{Suit, jokers};
///
/// let cards = deckrs::new(vec![jokers(2)]);
/// assert_eq!(cards.len(), 54);
/// assert_eq!(cards[52].suit, Suit::Joker);
/// assert_ne!(cards[52], cards[53]);
/// ```
#[must_use]
pub fn jokers(count: u8) -> DeckOption {
    assert!(count <= 13, "at most 13 distinguishable jokers can be added");
    Box::new(move |mut cards| {
        cards.reserve(usize::from(count));
        for tag in (1..=count).rev() {
            cards.push(Card::new(Suit::Joker, Rank::ALL[usize::from(tag) - 1]));
        }
        cards
    })
}

/// Returns an option that removes every card the predicate matches.
///
/// Retained cards keep their relative order. Removing every card or no card
/// at all is fine.
///
/// # Example
///
/// ```
/// use deckrs::{Suit, filter};
///
/// let cards = deckrs::new(vec![filter(|card| card.suit == Suit::Heart)]);
/// assert_eq!(cards.len(), 39);
/// assert!(cards.iter().all(|card| card.suit != Suit::Heart));
/// ```
#[must_use]
pub fn filter<P>(predicate: P) -> DeckOption
where
    P: Fn(Card) -> bool + 'static,
{
    Box::new(move |mut cards| {
        cards.retain(|&card| !predicate(card));
        cards
    })
}
