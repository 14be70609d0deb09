use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A scheduled break: fires once per session when focus progress reaches
/// `trigger_percent`, then counts down `duration_secs` on its own clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakRule {
    /// Percentage of focus-elapsed progress at which the break becomes
    /// eligible. Strictly inside (0, 100).
    pub trigger_percent: f64,
    /// Break length in seconds.
    pub duration_secs: u64,
}

/// Immutable configuration snapshot for one focus session.
///
/// Break list order is insertion order; firing order is ascending
/// `(trigger_percent, index)` -- see [`SchedulePlan::firing_order`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulePlan {
    /// Total focus budget in seconds. Zero is valid but inert: the
    /// scheduler treats every command as a no-op until it is configured.
    pub focus_secs: u64,
    pub breaks: Vec<BreakRule>,
}

impl SchedulePlan {
    pub fn new(focus_secs: u64, breaks: Vec<BreakRule>) -> Self {
        Self { focus_secs, breaks }
    }

    /// Validate every break rule.
    ///
    /// Invalid entries are rejected here, at configuration time, never at
    /// scheduling time.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (index, rule) in self.breaks.iter().enumerate() {
            if !rule.trigger_percent.is_finite()
                || rule.trigger_percent <= 0.0
                || rule.trigger_percent >= 100.0
            {
                return Err(ValidationError::TriggerOutOfRange {
                    index,
                    value: rule.trigger_percent,
                });
            }
            if rule.duration_secs == 0 {
                return Err(ValidationError::ZeroBreakDuration { index });
            }
        }
        Ok(())
    }

    /// Break indices in the order they become eligible: ascending trigger
    /// position, insertion order among equal triggers.
    pub fn firing_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.breaks.len()).collect();
        order.sort_by(|&a, &b| {
            self.breaks[a]
                .trigger_percent
                .total_cmp(&self.breaks[b].trigger_percent)
                .then(a.cmp(&b))
        });
        order
    }

    /// Focus-elapsed seconds at which a trigger position is first reached.
    ///
    /// Rounded up so the break fires on the first whole second whose
    /// progress is at or past the trigger.
    pub(crate) fn trigger_elapsed(&self, trigger_percent: f64) -> u64 {
        (trigger_percent / 100.0 * self.focus_secs as f64).ceil() as u64
    }
}

impl Default for SchedulePlan {
    /// 25 minutes of focus, no breaks.
    fn default() -> Self {
        Self {
            focus_secs: 1500,
            breaks: Vec::new(),
        }
    }
}
