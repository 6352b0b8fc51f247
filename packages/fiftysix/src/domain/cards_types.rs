//! Core card types: Card, Rank, Suit.
//!
//! The game uses a double 24-card deck: two physical copies of every
//! (suit, rank) pair. Copies are interchangeable, so `Card` is a plain
//! value type with no per-copy identity.

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

/// Declaration order is trick strength, low to high: 9 < 10 < Q < K < A < J.
/// The derived `Ord` therefore answers "which card wins" within a suit.
/// Point values are a separate table in `cards_logic` and do NOT follow
/// this order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Nine,
    Ten,
    Queen,
    King,
    Ace,
    Jack,
}

impl Rank {
    pub const ALL: [Rank; 6] = [
        Rank::Nine,
        Rank::Ten,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Jack,
    ];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

// Note: Ord on Card is only for stable hand sorting: suit order C<D<H<S
// then rank strength. Do not use for trick resolution, which needs
// trump/lead context.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
