use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::timer::Phase;

/// Every state change in the scheduler produces an Event.
///
/// The CLI prints them; notification and analytics collaborators subscribe
/// to them. The core never acts on its own events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        phase: Phase,
        remaining_secs: u64,
        session_id: Uuid,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    /// A break trigger fired. This is a phase switch, not a completion;
    /// the timer auto-pauses and waits for an explicit resume.
    BreakStarted {
        break_index: usize,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    /// A break counted down to zero. Focus resumes (paused) with the
    /// remaining budget.
    BreakCompleted {
        break_index: usize,
        planned_secs: u64,
        elapsed_secs: u64,
        session_id: Uuid,
        at: DateTime<Utc>,
    },
    /// The focus budget ran out with no break pending: the session is over
    /// and the scheduler returned to its initial state.
    FocusSegmentCompleted {
        planned_secs: u64,
        elapsed_secs: u64,
        session_id: Uuid,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: Phase,
        time_remaining_secs: u64,
        is_running: bool,
        active_break_index: Option<usize>,
        focus_secs: u64,
        progress_pct: f64,
        session_id: Uuid,
        at: DateTime<Utc>,
    },
}
