use crate::domain::cards_parsing::parse_cards;
use crate::domain::dealing::deal_hands;
use crate::domain::seats::Seat;
use crate::domain::state::{GameState, Phase, TRICKS_PER_ROUND};
use crate::domain::test_state_helpers::{bidding_state, trick_state};
use crate::domain::tricks::{legal_moves, play_card, resolve_current_trick};
use crate::domain::Suit;
use crate::errors::domain::ValidationKind;

use Seat::{East, North, South, West};

fn card(token: &str) -> crate::domain::Card {
    token.parse().expect("hardcoded valid card token")
}

fn four_hands(n: &[&str], e: &[&str], s: &[&str], w: &[&str]) -> [Vec<crate::domain::Card>; 4] {
    [
        parse_cards(n),
        parse_cards(e),
        parse_cards(s),
        parse_cards(w),
    ]
}

#[test]
fn leader_may_play_anything_followers_must_follow() {
    let hands = four_hands(
        &["AS", "KH", "9C"],
        &["TS", "9H", "QC"],
        &["QS", "9D", "TC"],
        &["9S", "KD", "QH"],
    );
    let mut state = trick_state(hands, Suit::Hearts, North);

    assert_eq!(legal_moves(&state, North).len(), 3);

    play_card(&mut state, North, card("AS")).unwrap();
    let east_legal = legal_moves(&state, East);
    assert!(!east_legal.is_empty());
    assert!(east_legal.iter().all(|c| c.suit == Suit::Spades));
}

#[test]
fn void_seat_may_discard_or_trump() {
    let hands = four_hands(
        &["AS", "KH"],
        &["9H", "QC"], // no spades
        &["QS", "9D"],
        &["TS", "QH"],
    );
    let mut state = trick_state(hands, Suit::Hearts, North);
    play_card(&mut state, North, card("AS")).unwrap();

    // East is void in spades: the whole hand is legal, trump included
    // but not mandatory.
    let east_legal = legal_moves(&state, East);
    assert_eq!(east_legal.len(), 2);
}

#[test]
fn play_errors_carry_their_kind_and_leave_state_intact() {
    let hands = four_hands(
        &["AS", "KH", "9C"],
        &["TS", "9H", "QC"],
        &["QS", "9D", "TC"],
        &["9S", "KD", "QH"],
    );
    let mut state = trick_state(hands, Suit::Hearts, North);

    let err = play_card(&mut state, East, card("TS")).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::OutOfTurn));

    let err = play_card(&mut state, North, card("JD")).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::CardNotInHand));

    play_card(&mut state, North, card("AS")).unwrap();
    // East holds a spade, so dumping clubs is a revoke.
    let err = play_card(&mut state, East, card("QC")).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::MustFollowSuit));

    assert_eq!(state.hands[East.index()].len(), 3);
    assert_eq!(state.round.trick_plays.len(), 1);
    assert_eq!(state.turn, Some(East));
}

#[test]
fn playing_before_trump_is_round_not_ready() {
    let hands = four_hands(&["AS"], &["TS"], &["QS"], &["9S"]);
    let mut state = bidding_state(hands);
    let err = play_card(&mut state, East, card("TS")).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::RoundNotReady));

    let mut fresh = GameState::new();
    let err = play_card(&mut fresh, North, card("AS")).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::PhaseMismatch));
}

#[test]
fn trump_wins_over_a_higher_plain_card() {
    let hands = four_hands(
        &["AS", "KC"],
        &["9H", "QC"], // void in spades, holds trump
        &["QS", "9D"],
        &["TS", "QH"],
    );
    let mut state = trick_state(hands, Suit::Hearts, North);

    play_card(&mut state, North, card("AS")).unwrap();
    play_card(&mut state, East, card("9H")).unwrap();
    play_card(&mut state, South, card("QS")).unwrap();
    let result = play_card(&mut state, West, card("TS")).unwrap();

    assert!(result.trick_completed);
    assert_eq!(result.trick_winner, Some(East));
    // AS=1, 9H=2, QS=0, TS=1
    assert_eq!(result.trick_points, 4);
    assert_eq!(state.round.tricks_won[East.index()], 1);
    assert_eq!(state.round.points_won, [0, 4]);
    // Winner leads the next trick.
    assert_eq!(state.turn, Some(East));
    assert_eq!(state.leader, Some(East));
    assert_eq!(state.phase, Phase::Trick { trick_no: 2 });
}

#[test]
fn jack_outranks_ace_within_a_suit() {
    let hands = four_hands(&["AS"], &["JS"], &["9S"], &["TS"]);
    let mut state = trick_state(hands, Suit::Hearts, North);

    play_card(&mut state, North, card("AS")).unwrap();
    play_card(&mut state, East, card("JS")).unwrap();
    play_card(&mut state, South, card("9S")).unwrap();
    let result = play_card(&mut state, West, card("TS")).unwrap();

    assert_eq!(result.trick_winner, Some(East));
    // A=1, J=3, 9=2, T=1
    assert_eq!(result.trick_points, 7);
}

#[test]
fn first_of_two_identical_cards_wins() {
    // Double deck: both copies of the jack of spades land in one trick.
    let hands = four_hands(&["JS"], &["JS"], &["9D"], &["9C"]);
    let mut state = trick_state(hands, Suit::Hearts, North);

    play_card(&mut state, North, card("JS")).unwrap();
    play_card(&mut state, East, card("JS")).unwrap();
    play_card(&mut state, South, card("9D")).unwrap();
    let result = play_card(&mut state, West, card("9C")).unwrap();

    assert_eq!(result.trick_winner, Some(North));
    // Off-suit nines never win, whatever their rank.
    assert_eq!(result.trick_points, 3 + 3 + 2 + 2);
}

#[test]
fn incomplete_trick_does_not_resolve() {
    let hands = four_hands(&["AS"], &["TS"], &["QS"], &["9S"]);
    let mut state = trick_state(hands, Suit::Hearts, North);
    play_card(&mut state, North, card("AS")).unwrap();
    assert_eq!(resolve_current_trick(&state.round, Suit::Hearts), None);
}

#[test]
fn twelve_tricks_consume_hands_and_reach_scoring() {
    let hands = deal_hands(3).unwrap();
    let mut state = trick_state(hands, Suit::Clubs, North);

    let mut tricks_seen = 0u8;
    while let Phase::Trick { .. } = state.phase {
        let turn = state.turn.expect("turn set during trick play");
        let choice = legal_moves(&state, turn)[0];
        let result = play_card(&mut state, turn, choice).unwrap();
        if result.trick_completed {
            tricks_seen += 1;
        }
    }

    assert_eq!(tricks_seen, TRICKS_PER_ROUND);
    assert_eq!(state.phase, Phase::Scoring);
    assert_eq!(state.turn, None);
    assert_eq!(state.trick_no, None);
    assert!(state.hands.iter().all(|h| h.is_empty()));
    assert_eq!(state.round.tricks_won.iter().sum::<u8>(), TRICKS_PER_ROUND);
    assert_eq!(state.round.points_won.iter().sum::<u16>(), 56);
    assert!(state.round.last_trick.is_some());
}
