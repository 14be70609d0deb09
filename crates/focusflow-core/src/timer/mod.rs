mod driver;
mod plan;
mod scheduler;
mod transition;

pub use driver::ClockDriver;
pub use plan::{BreakRule, SchedulePlan};
pub use scheduler::PhaseScheduler;
pub use transition::{Phase, SessionState};
