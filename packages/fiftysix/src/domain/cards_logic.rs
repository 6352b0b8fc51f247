//! Card game logic: point values, suit checks, comparing card strength.

use super::cards_types::{Card, Rank, Suit};

/// Total playable points across the full 48-card double deck:
/// (3+2+1+1+0+0) per suit-set × 4 suits × 2 copies.
pub const DECK_POINTS: u16 = 56;

/// Point value of a rank. Independent of trick strength: the 9 is worth
/// more than the ace even though the ace beats it.
pub fn rank_points(rank: Rank) -> u8 {
    match rank {
        Rank::Jack => 3,
        Rank::Nine => 2,
        Rank::Ace => 1,
        Rank::Ten => 1,
        Rank::King => 0,
        Rank::Queen => 0,
    }
}

pub fn card_points(card: Card) -> u8 {
    rank_points(card.rank)
}

pub fn hand_points(cards: &[Card]) -> u16 {
    cards.iter().map(|&c| card_points(c) as u16).sum()
}

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Whether `a` beats `b` in a trick led in `lead` with `trump` declared.
///
/// Trump beats non-trump; within the same effective suit the stronger
/// rank wins; an off-suit, non-trump card never beats anything.
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Suit) -> bool {
    let a_trump = a.suit == trump;
    let b_trump = b.suit == trump;
    if a_trump && !b_trump {
        return true;
    }
    if b_trump && !a_trump {
        return false;
    }
    if a_trump && b_trump {
        return a.rank > b.rank;
    }
    // Neither is trump: compare only if following the lead
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_follows && !b_follows {
        return true;
    }
    if b_follows && !a_follows {
        return false;
    }
    if a_follows && b_follows {
        return a.rank > b.rank;
    }
    false
}
