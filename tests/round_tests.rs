//! Round lifecycle integration tests.
//!
//! These drive a full session through start/stop/reset and check the
//! balance, phase and roster after each step.

use rust_crash::core::{ScriptedSource, SessionConfig};
use rust_crash::display::{current_round_rows, PLACEHOLDER};
use rust_crash::round::{Phase, RoundError, WagerViolation};
use rust_crash::session::Session;

fn default_session() -> Session {
    Session::new(SessionConfig::default()).unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

/// Cashing out below the stop point pays stake * multiplier.
#[test]
fn test_scenario_win() {
    let mut session = default_session();
    session.start_round(50, 2.0).unwrap();
    let result = session.stop_round(3.0).unwrap();

    assert_eq!(result.human_score, 100);
    assert_eq!(session.balance(), 1050);
}

/// Stopping below the multiplier loses the stake.
#[test]
fn test_scenario_loss() {
    let mut session = default_session();
    session.start_round(50, 2.0).unwrap();
    let result = session.stop_round(1.5).unwrap();

    assert_eq!(result.human_score, 0);
    assert_eq!(session.balance(), 950);
}

/// A zero multiplier "wins" zero points; the whole stake is gone.
#[test]
fn test_scenario_zero_multiplier() {
    let mut session = default_session();
    session.start_round(1000, 0.0).unwrap();
    let result = session.stop_round(0.5).unwrap();

    assert_eq!(result.human_score, 0);
    assert_eq!(session.balance(), 0);
}

/// Resetting a running round clears the roster and forfeits the stake.
#[test]
fn test_scenario_cancel_forfeits_stake() {
    let mut session = default_session();
    session.start_round(200, 5.0).unwrap();
    session.reset_round();

    let human = session.human().unwrap();
    assert_eq!(human.stake(), None);
    assert_eq!(human.cash_out_multiplier(), None);
    assert_eq!(human.score(), None);
    assert_eq!(session.balance(), 800);
    assert_eq!(session.phase(), Phase::Idle);

    let rows = current_round_rows(&session);
    assert!(rows
        .iter()
        .all(|r| r.stake == PLACEHOLDER && r.multiplier == PLACEHOLDER));
}

// =============================================================================
// Phase guards
// =============================================================================

#[test]
fn test_stop_from_idle_fails() {
    let mut session = default_session();
    let err = session.stop_round(2.0).unwrap_err();

    assert!(matches!(
        err,
        RoundError::InvalidPhase {
            phase: Phase::Idle,
            ..
        }
    ));
    assert_eq!(session.balance(), 1000);
}

#[test]
fn test_invalid_stop_point_keeps_round_running() {
    let mut session = default_session();
    session.start_round(100, 2.0).unwrap();
    let roster = session.participants().clone();

    for stop_point in [-1.0, f64::NAN, f64::INFINITY] {
        let err = session.stop_round(stop_point).unwrap_err();
        assert!(matches!(err, RoundError::InvalidStopPoint(_)), "{stop_point}");
        assert_eq!(session.phase(), Phase::Running);
        assert_eq!(session.stop_point(), None);
        assert_eq!(session.balance(), 900);
        assert_eq!(session.participants(), &roster);
    }

    let result = session.stop_round(3.0).unwrap();
    assert_eq!(result.human_score, 200);
    assert_eq!(session.balance(), 1100);
}

#[test]
fn test_start_from_running_fails_without_reset() {
    let mut session = default_session();
    session.start_round(100, 2.0).unwrap();
    let roster = session.participants().clone();

    let err = session.start_round(10, 1.0).unwrap_err();

    assert!(matches!(
        err,
        RoundError::InvalidPhase {
            phase: Phase::Running,
            ..
        }
    ));
    assert_eq!(session.balance(), 900);
    assert_eq!(session.participants(), &roster);
}

#[test]
fn test_start_from_stopped_resets_implicitly() {
    let mut session = default_session();
    session.start_round(100, 2.0).unwrap();
    session.stop_round(3.0).unwrap();
    assert_eq!(session.balance(), 1100);

    session.start_round(100, 4.0).unwrap();

    assert_eq!(session.phase(), Phase::Running);
    assert_eq!(session.stop_point(), None);
    assert_eq!(session.balance(), 1000);
    assert!(session.participants().iter().all(|p| p.score().is_none()));
}

// =============================================================================
// Bounds
// =============================================================================

#[test]
fn test_bounds_enforced_without_state_change() {
    let mut session = default_session();

    let cases = [(1001, 2.0), (10, 10.5), (10, -0.5), (10, f64::NAN)];
    for (stake, multiplier) in cases {
        let err = session.start_round(stake, multiplier).unwrap_err();
        assert!(matches!(err, RoundError::InvalidWager(_)), "{stake} @ {multiplier}");
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.balance(), 1000);
    }
}

#[test]
fn test_bound_edges_accepted() {
    let mut session = default_session();
    session.start_round(0, 10.0).unwrap();
    session.stop_round(10.0).unwrap();
    assert_eq!(session.balance(), 1000);

    session.start_round(1000, 0.0).unwrap();
    assert_eq!(session.balance(), 0);
}

#[test]
fn test_broke_session_can_only_stake_zero() {
    let mut session = default_session();
    session.start_round(1000, 5.0).unwrap();
    session.stop_round(1.0).unwrap();
    assert_eq!(session.balance(), 0);
    assert_eq!(session.stake_bounds(), 0..=0);

    assert_eq!(
        session.start_round(1, 1.0).unwrap_err(),
        RoundError::InvalidWager(WagerViolation::StakeExceedsBalance {
            stake: 1,
            balance: 0
        })
    );
    session.start_round(0, 1.0).unwrap();
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_twice_equals_once() {
    let mut session = default_session();
    session.start_round(100, 2.0).unwrap();
    session.stop_round(5.0).unwrap();

    session.reset_round();
    let once = (
        session.phase(),
        session.stop_point(),
        session.participants().clone(),
        session.balance(),
    );
    session.reset_round();
    let twice = (
        session.phase(),
        session.stop_point(),
        session.participants().clone(),
        session.balance(),
    );

    assert_eq!(once, twice);
    assert_eq!(session.phase(), Phase::Idle);
    assert!(session
        .participants()
        .iter()
        .all(|p| p.stake().is_none() && p.cash_out_multiplier().is_none() && p.score().is_none()));
}

#[test]
fn test_reset_keeps_balance_after_settlement() {
    let mut session = default_session();
    session.start_round(100, 2.0).unwrap();
    session.stop_round(5.0).unwrap();
    session.reset_round();
    assert_eq!(session.balance(), 1100);
}

// =============================================================================
// Synthetic participants
// =============================================================================

#[test]
fn test_synthetic_scores_follow_draws() {
    let config = SessionConfig::default().with_synthetic_count(3);
    // (stake fraction, multiplier fraction) per synthetic
    let source = ScriptedSource::new([0.095, 0.1, 0.495, 0.5, 0.995, 0.05]);
    let mut session = Session::with_source(config, source).unwrap();

    session.start_round(10, 2.0).unwrap();
    let result = session.stop_round(3.0).unwrap();

    // CPU 1: 10 @ 1.0x, CPU 2: 50 @ 5.0x, CPU 3: 100 @ 0.5x
    let scores: Vec<_> = result.participants.iter().map(|p| p.score()).collect();
    assert_eq!(scores, vec![Some(20), Some(10), Some(0), Some(50)]);
    assert_eq!(result.total_staked(), 170);
    assert_eq!(result.total_paid(), 80);
    assert_eq!(result.house_delta(), 90);
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let config = SessionConfig::default().with_seed(1234);
    let mut a = Session::new(config.clone()).unwrap();
    let mut b = Session::new(config).unwrap();

    for _ in 0..5 {
        a.start_round(10, 2.0).unwrap();
        b.start_round(10, 2.0).unwrap();
        let ra = a.stop_round(4.0).unwrap();
        let rb = b.stop_round(4.0).unwrap();
        assert_eq!(ra, rb);
    }
}

#[test]
fn test_sessions_are_isolated() {
    let mut a = default_session();
    let b = default_session();

    a.start_round(300, 2.0).unwrap();

    assert_eq!(a.balance(), 700);
    assert_eq!(b.balance(), 1000);
    assert_eq!(b.phase(), Phase::Idle);
}

#[test]
fn test_session_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Session>();
}
