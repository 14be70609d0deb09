//! Scheduler facade.
//!
//! [`PhaseScheduler`] owns the timer state and is the only way to mutate
//! it: commands (`start_pause`, `reset`, `set_plan`) and the tick entry
//! point (`on_tick`). It holds no clock -- the caller, usually a
//! [`ClockDriver`](super::ClockDriver), invokes `on_tick()` once per
//! elapsed second while the timer runs.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::plan::SchedulePlan;
use super::transition::{advance_second, Phase, SessionState, Transition};
use crate::error::ValidationError;
use crate::events::Event;

/// Scheduler facade: validated plan, owned session state, event emission.
///
/// Serializable so a host can carry it between invocations; the core
/// itself never touches disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseScheduler {
    plan: SchedulePlan,
    /// Precomputed firing order for `plan.breaks`.
    firing: Vec<usize>,
    state: SessionState,
    /// Plan accepted while a session was in flight; installed on the next
    /// natural reset so an entered break keeps its duration.
    #[serde(default)]
    pending_plan: Option<SchedulePlan>,
    session_id: Uuid,
}

impl PhaseScheduler {
    /// Create a scheduler for a validated plan.
    pub fn new(plan: SchedulePlan) -> Result<Self, ValidationError> {
        plan.validate()?;
        let firing = plan.firing_order();
        let state = SessionState::initial(&plan);
        Ok(Self {
            plan,
            firing,
            state,
            pending_plan: None,
            session_id: Uuid::new_v4(),
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn plan(&self) -> &SchedulePlan {
        &self.plan
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn time_remaining(&self) -> u64 {
        self.state.time_remaining
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    pub fn active_break_index(&self) -> Option<usize> {
        self.state.active_break
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.state.phase,
            time_remaining_secs: self.state.time_remaining,
            is_running: self.state.is_running,
            active_break_index: self.state.active_break,
            focus_secs: self.plan.focus_secs,
            progress_pct: self.state.progress_pct(&self.plan),
            session_id: self.session_id,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Toggle running. No-op while the focus budget is zero: an
    /// unconfigured timer is a reachable UI state, not a fault.
    pub fn start_pause(&mut self) -> Option<Event> {
        if self.plan.focus_secs == 0 {
            return None;
        }
        self.state.is_running = !self.state.is_running;
        Some(if self.state.is_running {
            Event::TimerStarted {
                phase: self.state.phase,
                remaining_secs: self.state.time_remaining,
                session_id: self.session_id,
                at: Utc::now(),
            }
        } else {
            Event::TimerPaused {
                remaining_secs: self.state.time_remaining,
                at: Utc::now(),
            }
        })
    }

    /// Unconditionally return to the initial focus state. Installs any
    /// plan change deferred while the session was in flight.
    pub fn reset(&mut self) -> Option<Event> {
        self.install_pending();
        self.state = SessionState::initial(&self.plan);
        self.session_id = Uuid::new_v4();
        Some(Event::TimerReset { at: Utc::now() })
    }

    /// Replace the configuration.
    ///
    /// Applied immediately (with a full state re-init) while idle in the
    /// focus phase. While running or on a break the new plan is deferred
    /// to the next natural reset, so an in-flight session -- and the
    /// duration of an already-entered break -- cannot be corrupted.
    pub fn set_plan(&mut self, plan: SchedulePlan) -> Result<(), ValidationError> {
        plan.validate()?;
        if self.state.phase == Phase::Focus && !self.state.is_running {
            self.install(plan);
        } else {
            self.pending_plan = Some(plan);
        }
        Ok(())
    }

    /// Advance one elapsed second. Invoked by the clock driver while
    /// running; publishes the transition, if any, as an event.
    pub fn on_tick(&mut self) -> Option<Event> {
        match advance_second(&mut self.state, &self.plan, &self.firing)? {
            Transition::BreakEntered { index } => Some(Event::BreakStarted {
                break_index: index,
                duration_secs: self.state.time_remaining,
                at: Utc::now(),
            }),
            Transition::BreakFinished {
                index,
                planned_secs,
                elapsed_secs,
            } => Some(Event::BreakCompleted {
                break_index: index,
                planned_secs,
                elapsed_secs,
                session_id: self.session_id,
                at: Utc::now(),
            }),
            Transition::SessionFinished {
                planned_secs,
                elapsed_secs,
            } => {
                let session_id = self.session_id;
                self.install_pending();
                self.session_id = Uuid::new_v4();
                Some(Event::FocusSegmentCompleted {
                    planned_secs,
                    elapsed_secs,
                    session_id,
                    at: Utc::now(),
                })
            }
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn install(&mut self, plan: SchedulePlan) {
        self.firing = plan.firing_order();
        self.state = SessionState::initial(&plan);
        self.plan = plan;
        self.pending_plan = None;
        self.session_id = Uuid::new_v4();
    }

    fn install_pending(&mut self) {
        if let Some(plan) = self.pending_plan.take() {
            self.install(plan);
        }
    }
}

impl Default for PhaseScheduler {
    fn default() -> Self {
        // The default plan always validates.
        Self::new(SchedulePlan::default()).unwrap_or_else(|_| unreachable!())
    }
}
