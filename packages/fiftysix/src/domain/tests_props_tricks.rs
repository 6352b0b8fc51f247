//! Property tests for trick resolution, legal moves, and dealing.

use proptest::prelude::*;

use crate::domain::cards_logic::{card_beats, card_points, hand_points, DECK_POINTS};
use crate::domain::dealing::{deal_hands, DECK_SIZE, HAND_SIZE};
use crate::domain::state::RoundState;
use crate::domain::test_prelude;
use crate::domain::test_state_helpers::trick_state;
use crate::domain::tricks::{legal_moves, play_card, resolve_current_trick};
use crate::domain::{test_gens, Seat};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// The resolved winner's card is unbeaten by every other card in the
    /// trick, under the trick's lead and trump.
    #[test]
    fn prop_trick_winner_is_unbeaten(
        (_, plays, trump, lead) in test_gens::complete_trick(),
    ) {
        let mut round = RoundState::empty();
        round.trick_plays = plays.clone();
        round.trick_lead = Some(lead);

        let (winner, points) = resolve_current_trick(&round, trump)
            .expect("four plays resolve");
        let (_, winner_card) = plays
            .iter()
            .copied()
            .find(|&(seat, _)| seat == winner)
            .expect("winner played a card");

        for &(_, card) in &plays {
            prop_assert!(
                !card_beats(card, winner_card, lead, trump),
                "{card} beats resolved winner {winner_card}"
            );
        }
        prop_assert_eq!(
            points,
            plays.iter().map(|&(_, c)| card_points(c) as u16).sum::<u16>()
        );
    }

    /// Legal moves are always a subset of the hand, and when the seat
    /// holds the lead suit they are exactly its lead-suit cards.
    #[test]
    fn prop_legal_moves_respect_hand_and_lead(seed in any::<u64>()) {
        let hands = deal_hands(seed).expect("standard deal");
        let mut state = trick_state(hands, crate::domain::Suit::Hearts, Seat::North);

        // Leader is unrestricted.
        let lead_options = legal_moves(&state, Seat::North);
        prop_assert_eq!(lead_options.len(), HAND_SIZE);

        let led = lead_options[0];
        play_card(&mut state, Seat::North, led).expect("leader plays anything");

        for seat in [Seat::East, Seat::South, Seat::West] {
            let hand = state.hand(seat).to_vec();
            let legal = legal_moves(&state, seat);
            prop_assert!(!legal.is_empty());
            prop_assert!(legal.iter().all(|c| hand.contains(c)));

            let holds_lead = hand.iter().any(|c| c.suit == led.suit);
            if holds_lead {
                prop_assert!(legal.iter().all(|c| c.suit == led.suit));
                prop_assert_eq!(
                    legal.len(),
                    hand.iter().filter(|c| c.suit == led.suit).count()
                );
            } else {
                prop_assert_eq!(legal.len(), hand.len());
            }
        }
    }

    /// Every deal partitions the 48-card double deck into four hands of
    /// twelve holding all 56 points, and is reproducible from its seed.
    #[test]
    fn prop_deal_partitions_the_deck(seed in any::<u64>()) {
        let hands = deal_hands(seed).expect("standard deal");
        prop_assert!(hands.iter().all(|h| h.len() == HAND_SIZE));

        let all: Vec<_> = hands.iter().flatten().copied().collect();
        prop_assert_eq!(all.len(), DECK_SIZE);
        prop_assert_eq!(hand_points(&all), DECK_POINTS);

        prop_assert_eq!(hands, deal_hands(seed).expect("same seed redeal"));
    }

    /// A whole round played greedily always distributes exactly 56 points
    /// and 12 tricks, whatever the deal and trump.
    #[test]
    fn prop_round_conserves_points(
        seed in any::<u64>(),
        trump in test_gens::suit(),
        leader in test_gens::seat(),
    ) {
        let hands = deal_hands(seed).expect("standard deal");
        let mut state = trick_state(hands, trump, leader);

        while let crate::domain::state::Phase::Trick { .. } = state.phase {
            let turn = state.turn.expect("turn set during play");
            let choice = legal_moves(&state, turn)[0];
            play_card(&mut state, turn, choice).expect("legal move plays");
        }

        prop_assert_eq!(state.round.points_won.iter().sum::<u16>(), DECK_POINTS);
        prop_assert_eq!(state.round.tricks_won.iter().sum::<u8>(), 12);
    }
}
