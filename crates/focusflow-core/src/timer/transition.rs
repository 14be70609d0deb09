//! Pure transition engine.
//!
//! [`advance_second`] maps (state, plan) to the state one elapsed second
//! later. No clock, no I/O: the scheduler facade owns the state and the
//! clock driver decides when a second has elapsed.
//!
//! Each tick advances time first, then runs the break-trigger check, then
//! the zero check. A break eligible on the final focus second therefore
//! still fires before session completion, and a segment that reaches zero
//! transitions on the same tick.

use serde::{Deserialize, Serialize};

use super::plan::SchedulePlan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Focus,
    Break,
}

/// Mutable timer state for one focus session.
///
/// Owned by the scheduler facade; mutated only by [`advance_second`] and
/// the facade's commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: Phase,
    /// Seconds left in the current segment. During a break this counts
    /// within the break's own duration, independent of the focus budget.
    pub time_remaining: u64,
    pub is_running: bool,
    /// Set if and only if `phase == Break`.
    pub active_break: Option<usize>,
    /// Focus seconds consumed so far this session, across segments.
    /// Progress is computed from this, not from `time_remaining`, because
    /// post-break segments count down to the next trigger point only.
    pub focus_elapsed: u64,
    /// Seconds spent in the current break.
    pub break_elapsed: u64,
    /// Cursor into the plan's firing order. Breaks before it have fired;
    /// it only moves forward, so each break fires at most once per session.
    pub next_break: usize,
}

impl SessionState {
    pub fn initial(plan: &SchedulePlan) -> Self {
        Self {
            phase: Phase::Focus,
            time_remaining: plan.focus_secs,
            is_running: false,
            active_break: None,
            focus_elapsed: 0,
            break_elapsed: 0,
            next_break: 0,
        }
    }

    /// Focus progress in percent, 0.0 when the focus budget is zero.
    pub fn progress_pct(&self, plan: &SchedulePlan) -> f64 {
        if plan.focus_secs == 0 {
            return 0.0;
        }
        (self.focus_elapsed as f64 / plan.focus_secs as f64 * 100.0).min(100.0)
    }
}

/// Terminal outcome of one tick, for the facade to turn into events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Transition {
    /// A break trigger fired; the timer auto-paused.
    BreakEntered { index: usize },
    /// A break counted down to zero; focus resumed paused with the
    /// remaining budget.
    BreakFinished {
        index: usize,
        planned_secs: u64,
        elapsed_secs: u64,
    },
    /// The focus budget ran out; state returned to the initial shape.
    SessionFinished {
        planned_secs: u64,
        elapsed_secs: u64,
    },
}

/// Advance the session by exactly one elapsed second.
///
/// No-op unless the timer is running and a focus budget is configured.
/// `order` must be the plan's [`firing_order`](SchedulePlan::firing_order).
pub(crate) fn advance_second(
    state: &mut SessionState,
    plan: &SchedulePlan,
    order: &[usize],
) -> Option<Transition> {
    if !state.is_running || plan.focus_secs == 0 {
        return None;
    }
    match state.phase {
        Phase::Focus => {
            state.time_remaining = state.time_remaining.saturating_sub(1);
            state.focus_elapsed = (state.focus_elapsed + 1).min(plan.focus_secs);

            // Trigger check before the zero check: a break eligible on the
            // final focus second fires before session completion. One break
            // per tick at most; duplicates fire on consecutive ticks.
            if let Some(rule) = order
                .get(state.next_break)
                .and_then(|&index| plan.breaks.get(index))
            {
                if rule.trigger_percent <= state.progress_pct(plan) {
                    let index = order[state.next_break];
                    state.phase = Phase::Break;
                    state.is_running = false;
                    state.time_remaining = rule.duration_secs;
                    state.active_break = Some(index);
                    state.break_elapsed = 0;
                    state.next_break += 1;
                    return Some(Transition::BreakEntered { index });
                }
            }

            if state.time_remaining == 0 && state.focus_elapsed >= plan.focus_secs {
                let elapsed_secs = state.focus_elapsed;
                *state = SessionState::initial(plan);
                return Some(Transition::SessionFinished {
                    planned_secs: plan.focus_secs,
                    elapsed_secs,
                });
            }
            None
        }
        Phase::Break => {
            state.time_remaining = state.time_remaining.saturating_sub(1);
            state.break_elapsed += 1;
            if state.time_remaining > 0 {
                return None;
            }

            let index = state.active_break.take()?;
            let planned_secs = plan.breaks.get(index).map(|r| r.duration_secs).unwrap_or(0);
            let elapsed_secs = state.break_elapsed;

            // Resume focus with the remaining budget: count down to the
            // next unfired trigger point, or to the end of the focus
            // budget when no breaks remain.
            let resume_to = match order
                .get(state.next_break)
                .and_then(|&i| plan.breaks.get(i))
            {
                Some(next) => plan.trigger_elapsed(next.trigger_percent),
                None => plan.focus_secs,
            };
            state.phase = Phase::Focus;
            state.is_running = false;
            state.time_remaining = resume_to.saturating_sub(state.focus_elapsed);
            state.break_elapsed = 0;
            Some(Transition::BreakFinished {
                index,
                planned_secs,
                elapsed_secs,
            })
        }
    }
}
