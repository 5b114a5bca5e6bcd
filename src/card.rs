//! Card types: suits, ranks, and the card value pair.

use core::fmt;

use crate::error::{InvalidRank, InvalidSuit};

/// Card suit.
///
/// Suits are declared in the order cards are sorted in a brand new deck.
/// [`Suit::Joker`] is a sentinel for joker cards and is not part of the four
/// standard suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Spades.
    Spade = 0,
    /// Diamonds.
    Diamond = 1,
    /// Clubs.
    Club = 2,
    /// Hearts.
    Heart = 3,
    /// Joker sentinel suit.
    Joker = 4,
}

impl Suit {
    /// The four standard suits in new-deck order, excluding [`Suit::Joker`].
    pub const STANDARD: [Self; 4] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];

    /// Returns the suit's name.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Suit;
    ///
    /// assert_eq!(Suit::Spade.name(), "Spade");
    /// assert_eq!(Suit::Joker.name(), "Joker");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
            Self::Joker => "Joker",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Suit {
    type Error = InvalidSuit;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        match ordinal {
            0 => Ok(Self::Spade),
            1 => Ok(Self::Diamond),
            2 => Ok(Self::Club),
            3 => Ok(Self::Heart),
            4 => Ok(Self::Joker),
            _ => Err(InvalidSuit(ordinal)),
        }
    }
}

/// Card rank, Ace through King.
///
/// Ordinal values run 1 through 13 and are used purely for ordering; any
/// special point value of an Ace is a game-rule concern outside this crate.
/// On joker cards the rank slot holds a differentiator tag rather than a
/// real rank (see [`jokers`](crate::deck::jokers)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
}

impl Rank {
    /// All thirteen ranks in ascending ordinal order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the rank's name.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Rank;
    ///
    /// assert_eq!(Rank::Ace.name(), "Ace");
    /// assert_eq!(Rank::Ten.name(), "Ten");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Rank {
    type Error = InvalidRank;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        match ordinal {
            1..=13 => Ok(Self::ALL[usize::from(ordinal) - 1]),
            _ => Err(InvalidRank(ordinal)),
        }
    }
}

/// A playing card: a uniquely identifiable combination of suit and rank.
///
/// Two cards are equal iff both fields match. Joker cards carry
/// [`Suit::Joker`] and a rank-typed tag, so they never compare equal to a
/// standard card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card; a differentiator tag on joker cards.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    /// Renders a joker card as "Joker" and any other card as
    /// "`<Rank> of <Suit>s`".
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// let card = Card::new(Suit::Spade, Rank::Ace);
    /// assert_eq!(card.to_string(), "Ace of Spades");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.suit == Suit::Joker {
            f.write_str(self.suit.name())
        } else {
            write!(f, "{} of {}s", self.rank, self.suit)
        }
    }
}

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;
