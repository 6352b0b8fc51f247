//! Card parsing from string representations (e.g., "JS", "9C", "TH").

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Parse card: {s}"),
            ));
        };
        let rank = match rank_ch {
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::InvalidRank,
                    format!("Invalid rank: {rank_ch}"),
                ))
            }
        };
        let suit = suit_ch
            .to_string()
            .parse::<Suit>()
            .map_err(|_| DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}")))?;
        Ok(Card { suit, rank })
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" | "Clubs" => Ok(Suit::Clubs),
            "D" | "Diamonds" => Ok(Suit::Diamonds),
            "H" | "Hearts" => Ok(Suit::Hearts),
            "S" | "Spades" => Ok(Suit::Spades),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidTrumpSuit,
                format!("Invalid suit: {s}"),
            )),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        };
        write!(f, "{s}")
    }
}

impl Card {
    /// Compact two-character token, e.g. "JS" or "TH".
    pub fn token(&self) -> String {
        let rank_ch = match self.rank {
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };
        let suit_ch = match self.suit {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };
        format!("{rank_ch}{suit_ch}")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Non-panicking helper to parse card tokens (e.g., "JS", "9C") into Card
/// instances. Fails on the first invalid token.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

#[cfg(test)]
pub fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens.iter().copied()).expect("hardcoded valid card tokens")
}
