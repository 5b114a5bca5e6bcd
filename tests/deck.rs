//! Deck construction integration tests.

use std::collections::HashSet;

use deckrs::{
    Card, DECK_SIZE, InvalidRank, InvalidSuit, Less, Rank, Suit, default_sort, filter, jokers,
    less, shuffle_seeded, sort,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Sorts a copy into canonical order so decks can be compared as multisets.
fn as_multiset(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_by_key(|card| (card.suit as u8, card.rank as u8));
    cards
}

#[test]
fn new_builds_the_canonical_52_card_deck() {
    let cards = deckrs::new(Vec::new());
    assert_eq!(cards.len(), DECK_SIZE);

    // Exactly the construction order: suits in new-deck order, Ace..King.
    let mut expected = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            expected.push(card(suit, rank));
        }
    }
    assert_eq!(cards, expected);

    let unique: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert!(cards.iter().all(|card| card.suit != Suit::Joker));
}

#[test]
fn default_sort_is_idempotent_on_a_fresh_deck() {
    assert_eq!(deckrs::new(vec![default_sort()]), deckrs::new(Vec::new()));
}

#[test]
fn seeded_shuffle_permutes_without_changing_the_multiset() {
    let base = deckrs::new(Vec::new());

    let shuffled = deckrs::new(vec![shuffle_seeded(99)]);
    assert_eq!(shuffled.len(), DECK_SIZE);
    assert_eq!(as_multiset(shuffled), as_multiset(base.clone()));

    // A shuffle that never moves anything would fail this for every seed.
    assert!((0..10u64).any(|seed| deckrs::new(vec![shuffle_seeded(seed)]) != base));
}

#[test]
fn seeded_shuffle_is_deterministic() {
    assert_eq!(
        deckrs::new(vec![shuffle_seeded(7)]),
        deckrs::new(vec![shuffle_seeded(7)])
    );
}

#[test]
fn default_sort_recovers_canonical_order_after_a_shuffle() {
    let cards = deckrs::new(vec![shuffle_seeded(1234), default_sort()]);
    assert_eq!(cards, deckrs::new(Vec::new()));
}

#[test]
fn custom_sort_sees_the_whole_collection() {
    fn by_rank(cards: &[Card]) -> Less<'_> {
        Box::new(move |i, j| (cards[i].rank as u8) < (cards[j].rank as u8))
    }

    let cards = deckrs::new(vec![sort(by_rank)]);

    // Rank-major order; ties keep the construction (suit) order.
    for (index, card) in cards.iter().enumerate() {
        assert_eq!(card.rank, Rank::ALL[index / 4]);
    }
    let aces: Vec<Suit> = cards[..4].iter().map(|card| card.suit).collect();
    assert_eq!(aces, Suit::STANDARD);
}

#[test]
fn default_comparator_orders_by_suit_then_rank() {
    let cards = [
        card(Suit::Heart, Rank::Ace),
        card(Suit::Spade, Rank::Two),
        card(Suit::Spade, Rank::King),
    ];
    let mut cmp = less(&cards);
    assert!(cmp(1, 0));
    assert!(cmp(1, 2));
    assert!(!cmp(0, 2));
}

#[test]
fn jokers_append_distinct_tagged_cards() {
    let cards = deckrs::new(vec![jokers(2)]);
    assert_eq!(cards.len(), DECK_SIZE + 2);

    // The standard 52 are untouched and in order.
    assert_eq!(&cards[..DECK_SIZE], deckrs::new(Vec::new()).as_slice());

    let (first, second) = (cards[DECK_SIZE], cards[DECK_SIZE + 1]);
    assert_eq!(first.suit, Suit::Joker);
    assert_eq!(second.suit, Suit::Joker);
    assert_ne!(first, second);

    // Tags descend from the joker count down to 1.
    assert_eq!(first.rank, Rank::Two);
    assert_eq!(second.rank, Rank::Ace);

    assert_eq!(first.to_string(), "Joker");
    assert_eq!(second.to_string(), "Joker");
    assert!(deckrs::new(Vec::new()).iter().all(|card| *card != first));
}

#[test]
fn thirteen_jokers_are_all_distinct() {
    let cards = deckrs::new(vec![jokers(13)]);
    assert_eq!(cards.len(), DECK_SIZE + 13);

    let tags: HashSet<Rank> = cards[DECK_SIZE..].iter().map(|card| card.rank).collect();
    assert_eq!(tags.len(), 13);
}

#[test]
fn zero_jokers_is_a_no_op() {
    assert_eq!(deckrs::new(vec![jokers(0)]), deckrs::new(Vec::new()));
}

#[test]
#[should_panic(expected = "at most 13 distinguishable jokers")]
fn more_than_thirteen_jokers_panics() {
    let _ = jokers(14);
}

#[test]
fn filter_removes_matching_cards_and_keeps_order() {
    let cards = deckrs::new(vec![filter(|card| card.suit == Suit::Heart)]);
    assert_eq!(cards.len(), DECK_SIZE - 13);
    assert!(cards.iter().all(|card| card.suit != Suit::Heart));

    let expected: Vec<Card> = deckrs::new(Vec::new())
        .into_iter()
        .filter(|card| card.suit != Suit::Heart)
        .collect();
    assert_eq!(cards, expected);
}

#[test]
fn filter_handles_the_all_and_none_cases() {
    assert!(deckrs::new(vec![filter(|_| true)]).is_empty());
    assert_eq!(
        deckrs::new(vec![filter(|_| false)]),
        deckrs::new(Vec::new())
    );
}

#[test]
fn options_compose_in_caller_order() {
    let cards = deckrs::new(vec![
        filter(|card| card.suit == Suit::Spade),
        jokers(3),
        shuffle_seeded(5),
    ]);

    assert_eq!(cards.len(), (DECK_SIZE - 13) + 3);
    assert!(cards.iter().all(|card| card.suit != Suit::Spade));
    assert_eq!(
        cards.iter().filter(|card| card.suit == Suit::Joker).count(),
        3
    );
}

#[test]
fn options_tolerate_an_empty_sequence() {
    let cards = deckrs::new(vec![filter(|_| true), default_sort(), shuffle_seeded(3)]);
    assert!(cards.is_empty());
}

#[test]
fn cards_render_with_the_display_contract() {
    assert_eq!(card(Suit::Spade, Rank::Ace).to_string(), "Ace of Spades");
    assert_eq!(card(Suit::Heart, Rank::King).to_string(), "King of Hearts");
    assert_eq!(card(Suit::Club, Rank::Ten).to_string(), "Ten of Clubs");
    assert_eq!(
        card(Suit::Diamond, Rank::Queen).to_string(),
        "Queen of Diamonds"
    );
    assert_eq!(card(Suit::Joker, Rank::Five).to_string(), "Joker");

    assert_eq!(Suit::Diamond.to_string(), "Diamond");
    assert_eq!(Rank::Jack.to_string(), "Jack");
}

#[test]
fn raw_ordinals_convert_only_in_range() {
    assert_eq!(Suit::try_from(0), Ok(Suit::Spade));
    assert_eq!(Suit::try_from(4), Ok(Suit::Joker));
    assert_eq!(Suit::try_from(5), Err(InvalidSuit(5)));

    assert_eq!(Rank::try_from(1), Ok(Rank::Ace));
    assert_eq!(Rank::try_from(13), Ok(Rank::King));
    assert_eq!(Rank::try_from(0), Err(InvalidRank(0)));
    assert_eq!(Rank::try_from(14), Err(InvalidRank(14)));
}
