use crate::domain::scoring::{apply_round_scoring, ScoringPolicy};
use crate::domain::seats::{Seat, TeamId};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::scoring_state;
use crate::domain::Suit;
use crate::errors::domain::ValidationKind;

#[test]
fn made_contract_splits_points_bid_and_remainder() {
    // East-West bid 30 and took 32: they score the bid, the defenders
    // keep the remainder of the 56.
    let mut state = scoring_state(Seat::East, 30, Suit::Spades, [24, 32]);
    let summary = apply_round_scoring(&mut state, ScoringPolicy::default(), 500).unwrap();

    assert!(summary.success);
    assert_eq!(summary.bidding_team, TeamId::EastWest);
    assert_eq!(summary.score_delta, [26, 30]);
    assert_eq!(state.scores_total, [26, 30]);
    assert_eq!(state.phase, Phase::Complete);
}

#[test]
fn exact_points_make_the_contract() {
    let mut state = scoring_state(Seat::North, 28, Suit::Hearts, [28, 28]);
    let summary = apply_round_scoring(&mut state, ScoringPolicy::default(), 500).unwrap();
    assert!(summary.success);
    assert_eq!(summary.score_delta, [28, 28]);
}

#[test]
fn failed_contract_awards_defenders_everything() {
    // North-South bid 28 and came up one short.
    let mut state = scoring_state(Seat::North, 28, Suit::Hearts, [27, 29]);
    let summary = apply_round_scoring(&mut state, ScoringPolicy::default(), 500).unwrap();

    assert!(!summary.success);
    assert_eq!(summary.score_delta, [0, 56]);
    assert_eq!(state.scores_total, [0, 56]);
}

#[test]
fn failure_award_is_configurable() {
    let policy = ScoringPolicy {
        defender_award_on_failure: 40,
    };
    let mut state = scoring_state(Seat::West, 35, Suit::Clubs, [30, 26]);
    let summary = apply_round_scoring(&mut state, policy, 500).unwrap();
    assert!(!summary.success);
    assert_eq!(summary.score_delta, [40, 0]);
}

#[test]
fn reaching_target_ends_the_game() {
    let mut state = scoring_state(Seat::South, 40, Suit::Diamonds, [45, 11]);
    state.scores_total = [470, 20];
    let summary = apply_round_scoring(&mut state, ScoringPolicy::default(), 500).unwrap();

    assert!(summary.success);
    assert_eq!(state.scores_total, [510, 36]);
    assert_eq!(state.phase, Phase::GameOver);
}

#[test]
fn defenders_can_end_the_game_too() {
    let mut state = scoring_state(Seat::South, 40, Suit::Diamonds, [39, 17]);
    state.scores_total = [100, 460];
    let summary = apply_round_scoring(&mut state, ScoringPolicy::default(), 500).unwrap();

    assert!(!summary.success);
    assert_eq!(state.scores_total, [100, 516]);
    assert_eq!(state.phase, Phase::GameOver);
}

#[test]
fn summary_echoes_the_contract() {
    let mut state = scoring_state(Seat::East, 33, Suit::Spades, [20, 36]);
    state.round_no = Some(4);
    let summary = apply_round_scoring(&mut state, ScoringPolicy::default(), 500).unwrap();
    assert_eq!(summary.round_no, 4);
    assert_eq!(summary.bid_amount, 33);
    assert_eq!(summary.trump, Suit::Spades);
    assert_eq!(summary.points, [20, 36]);
}

#[test]
fn scoring_requires_the_scoring_phase() {
    let mut state = scoring_state(Seat::North, 28, Suit::Hearts, [28, 28]);
    state.phase = Phase::Trick { trick_no: 12 };
    let err = apply_round_scoring(&mut state, ScoringPolicy::default(), 500).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::PhaseMismatch));
}
