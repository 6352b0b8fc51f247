//! Seat rotation and partnership derivation.
//!
//! Four fixed seats in clockwise order North → East → South → West, with
//! partnerships derived from opposite seating (North-South vs East-West).
//! All turn math in the engine goes through these pure helpers so there is
//! a single source of truth for rotation and "who acts next".

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Seat {
    North,
    East,
    South,
    West,
}

impl Seat {
    /// Clockwise table order; also the fixed rotation used for dealing,
    /// bidding, and trick play.
    pub const ALL: [Seat; 4] = [Seat::North, Seat::East, Seat::South, Seat::West];

    /// Positional index, used to address per-seat arrays.
    pub fn index(self) -> usize {
        match self {
            Seat::North => 0,
            Seat::East => 1,
            Seat::South => 2,
            Seat::West => 3,
        }
    }

    /// Next seat clockwise (N → E → S → W → N).
    pub fn next(self) -> Seat {
        match self {
            Seat::North => Seat::East,
            Seat::East => Seat::South,
            Seat::South => Seat::West,
            Seat::West => Seat::North,
        }
    }

    /// The seat `n` steps clockwise from this one.
    pub fn nth_from(self, n: u8) -> Seat {
        (0..n % 4).fold(self, |seat, _| seat.next())
    }

    /// Partner sits directly opposite.
    pub fn partner(self) -> Seat {
        self.nth_from(2)
    }

    pub fn team(self) -> TeamId {
        match self {
            Seat::North | Seat::South => TeamId::NorthSouth,
            Seat::East | Seat::West => TeamId::EastWest,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Seat::North => "North",
            Seat::East => "East",
            Seat::South => "South",
            Seat::West => "West",
        };
        write!(f, "{s}")
    }
}

/// The two fixed partnerships. Invariant: partnerships never change for
/// the life of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TeamId {
    NorthSouth,
    EastWest,
}

impl TeamId {
    pub const ALL: [TeamId; 2] = [TeamId::NorthSouth, TeamId::EastWest];

    /// Positional index, used to address per-team arrays.
    pub fn index(self) -> usize {
        match self {
            TeamId::NorthSouth => 0,
            TeamId::EastWest => 1,
        }
    }

    pub fn opponent(self) -> TeamId {
        match self {
            TeamId::NorthSouth => TeamId::EastWest,
            TeamId::EastWest => TeamId::NorthSouth,
        }
    }

    pub fn seats(self) -> [Seat; 2] {
        match self {
            TeamId::NorthSouth => [Seat::North, Seat::South],
            TeamId::EastWest => [Seat::East, Seat::West],
        }
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TeamId::NorthSouth => "North-South",
            TeamId::EastWest => "East-West",
        };
        write!(f, "{s}")
    }
}

/// Dealer seat for a 1-based round number; the deal rotates clockwise
/// from `starting_dealer` every round.
pub fn dealer_for_round(starting_dealer: Seat, round_no: u16) -> Seat {
    debug_assert!(round_no >= 1, "round_no is 1-based and must be >= 1");
    starting_dealer.nth_from((round_no.saturating_sub(1) % 4) as u8)
}

/// Round-start seat (player to the left of the dealer): opens the bidding.
pub fn round_start_seat(dealer: Seat) -> Seat {
    dealer.next()
}
