//! End-to-end session scenarios against the public scheduler API.
//!
//! Each test walks a full focus session tick by tick and checks the
//! phase transitions, emitted events, and the remaining-budget policy
//! after breaks.

use focusflow_core::{BreakRule, Event, Phase, PhaseScheduler, SchedulePlan};

fn scheduler(focus_secs: u64, breaks: &[(f64, u64)]) -> PhaseScheduler {
    let plan = SchedulePlan::new(
        focus_secs,
        breaks
            .iter()
            .map(|&(trigger_percent, duration_secs)| BreakRule {
                trigger_percent,
                duration_secs,
            })
            .collect(),
    );
    PhaseScheduler::new(plan).unwrap()
}

/// Tick `n` times, resuming automatically after auto-pauses, and collect
/// every emitted event.
fn run_ticks(sched: &mut PhaseScheduler, n: u64) -> Vec<Event> {
    let mut events = Vec::new();
    for _ in 0..n {
        if !sched.is_running() {
            sched.start_pause();
        }
        if let Some(ev) = sched.on_tick() {
            events.push(ev);
        }
    }
    events
}

#[test]
fn plain_session_completes_after_exactly_focus_duration_ticks() {
    let mut sched = scheduler(100, &[]);
    sched.start_pause();

    for tick in 1..=99 {
        assert!(sched.on_tick().is_none(), "unexpected event at tick {tick}");
        assert_eq!(sched.time_remaining(), 100 - tick);
    }
    let last = sched.on_tick();
    assert!(matches!(
        last,
        Some(Event::FocusSegmentCompleted {
            planned_secs: 100,
            elapsed_secs: 100,
            ..
        })
    ));
    // Back to the initial shape.
    assert_eq!(sched.phase(), Phase::Focus);
    assert_eq!(sched.time_remaining(), 100);
    assert!(!sched.is_running());
    assert_eq!(sched.active_break_index(), None);
}

#[test]
fn single_break_midway_resumes_with_remaining_budget() {
    let mut sched = scheduler(100, &[(50.0, 10)]);
    sched.start_pause();

    // At tick 50 the break fires and the timer auto-pauses.
    for _ in 1..=49 {
        assert!(sched.on_tick().is_none());
    }
    let entry = sched.on_tick();
    assert!(matches!(
        entry,
        Some(Event::BreakStarted {
            break_index: 0,
            duration_secs: 10,
            ..
        })
    ));
    assert_eq!(sched.phase(), Phase::Break);
    assert_eq!(sched.time_remaining(), 10);
    assert!(!sched.is_running());

    // Explicit resume, then ten break ticks.
    sched.start_pause();
    let mut last = None;
    for _ in 1..=10 {
        last = sched.on_tick();
    }
    assert!(matches!(
        last,
        Some(Event::BreakCompleted {
            break_index: 0,
            planned_secs: 10,
            elapsed_secs: 10,
            ..
        })
    ));
    // Remaining budget, not a fresh focus duration.
    assert_eq!(sched.phase(), Phase::Focus);
    assert_eq!(sched.time_remaining(), 50);
    assert!(!sched.is_running());

    // Fifty more focus ticks finish the session.
    sched.start_pause();
    let mut last = None;
    for _ in 1..=50 {
        last = sched.on_tick();
    }
    assert!(matches!(
        last,
        Some(Event::FocusSegmentCompleted {
            planned_secs: 100,
            elapsed_secs: 100,
            ..
        })
    ));
}

#[test]
fn duplicate_triggers_fire_on_consecutive_focus_ticks() {
    let mut sched = scheduler(100, &[(30.0, 5), (30.0, 5)]);
    sched.start_pause();

    for _ in 1..=30 {
        sched.on_tick();
    }
    assert_eq!(sched.active_break_index(), Some(0));

    // Drain the first break.
    sched.start_pause();
    for _ in 1..=5 {
        sched.on_tick();
    }
    assert_eq!(sched.phase(), Phase::Focus);
    assert_eq!(sched.time_remaining(), 0);

    // Progress is still past 30%, so the second break fires on the tick
    // immediately following resumption.
    sched.start_pause();
    let ev = sched.on_tick();
    assert!(matches!(
        ev,
        Some(Event::BreakStarted { break_index: 1, .. })
    ));
}

#[test]
fn breaks_fire_in_ascending_trigger_order_regardless_of_list_order() {
    // Exactly one session: 100s of focus plus two 5s breaks.
    let mut sched = scheduler(100, &[(60.0, 5), (20.0, 5)]);
    let events = run_ticks(&mut sched, 110);

    let fired: Vec<usize> = events
        .iter()
        .filter_map(|ev| match ev {
            Event::BreakStarted { break_index, .. } => Some(*break_index),
            _ => None,
        })
        .collect();
    assert_eq!(fired, vec![1, 0]);
}

#[test]
fn full_session_conserves_the_budget() {
    // 100s focus plus 5s + 7s of breaks: exactly 112 seconds of ticking.
    let mut sched = scheduler(100, &[(25.0, 5), (75.0, 7)]);

    let mut ticks = 0u64;
    loop {
        if !sched.is_running() {
            sched.start_pause();
        }
        let ev = sched.on_tick();
        ticks += 1;
        if matches!(ev, Some(Event::FocusSegmentCompleted { .. })) {
            break;
        }
        assert!(ticks < 1000, "session never completed");
    }
    assert_eq!(ticks, 112);
}

#[test]
fn each_break_fires_at_most_once_per_session() {
    let mut sched = scheduler(60, &[(10.0, 2), (50.0, 2), (90.0, 2)]);
    let events = run_ticks(&mut sched, 300);

    let mut fired: Vec<usize> = events
        .iter()
        .filter_map(|ev| match ev {
            Event::BreakStarted { break_index, .. } => Some(*break_index),
            _ => None,
        })
        .collect();
    // 300 ticks cover several sessions; within each, indices 0..3 once.
    let sessions = events
        .iter()
        .filter(|ev| matches!(ev, Event::FocusSegmentCompleted { .. }))
        .count();
    assert!(sessions >= 2);
    fired.truncate(3);
    assert_eq!(fired, vec![0, 1, 2]);
}

#[test]
fn rejected_config_update_keeps_prior_plan() {
    let mut sched = scheduler(100, &[(50.0, 10)]);
    let bad = SchedulePlan::new(
        100,
        vec![BreakRule {
            trigger_percent: 150.0,
            duration_secs: 10,
        }],
    );
    assert!(sched.set_plan(bad).is_err());

    // The prior plan still drives the session.
    sched.start_pause();
    for _ in 1..=50 {
        sched.on_tick();
    }
    assert_eq!(sched.active_break_index(), Some(0));
}

#[test]
fn session_ids_are_stable_within_and_fresh_across_sessions() {
    let mut sched = scheduler(10, &[(50.0, 2)]);
    let first = sched.session_id();
    let events = run_ticks(&mut sched, 12);

    let mut completion_ids = Vec::new();
    for ev in &events {
        match ev {
            Event::BreakCompleted { session_id, .. }
            | Event::FocusSegmentCompleted { session_id, .. } => completion_ids.push(*session_id),
            _ => {}
        }
    }
    assert_eq!(completion_ids, vec![first, first]);
    assert_ne!(sched.session_id(), first);
}
