//! Error types for fallible conversions.

use thiserror::Error;

/// Error returned when a raw ordinal does not name a [`Suit`](crate::Suit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no suit with ordinal {0} (valid ordinals are 0 through 4)")]
pub struct InvalidSuit(pub u8);

/// Error returned when a raw ordinal does not name a [`Rank`](crate::Rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no rank with ordinal {0} (valid ordinals are 1 through 13)")]
pub struct InvalidRank(pub u8);
