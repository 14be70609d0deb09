//! Clock driver.
//!
//! The transition engine has no clock of its own: something must call
//! `on_tick()` about once per second while the timer runs. [`ClockDriver`]
//! is that something -- a tokio interval loop, decoupled from any
//! rendering surface. Ticks are serialized; a tick is never delivered
//! while the previous one is still being applied.
//!
//! The engine treats every delivered tick as exactly one elapsed second;
//! wall-clock drift is the driver's quality concern, not the engine's.

use std::time::Duration;

use tokio::time::MissedTickBehavior;

use super::scheduler::PhaseScheduler;
use crate::events::Event;

pub struct ClockDriver {
    period: Duration,
}

impl ClockDriver {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Deliver ticks until the scheduler stops running.
    ///
    /// Every transition the timer auto-pauses on (break entry, break
    /// completion, session completion) ends the loop, as does an external
    /// pause applied between ticks. Produced events are forwarded to
    /// `on_event`.
    pub async fn drive<F>(&self, scheduler: &mut PhaseScheduler, mut on_event: F)
    where
        F: FnMut(&Event),
    {
        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first interval tick completes immediately; consume it so the
        // first delivered second actually takes one period.
        interval.tick().await;
        while scheduler.is_running() {
            interval.tick().await;
            if let Some(event) = scheduler.on_tick() {
                on_event(&event);
            }
        }
    }
}

impl Default for ClockDriver {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
