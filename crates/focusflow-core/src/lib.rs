//! # Focusflow Core Library
//!
//! This library provides the scheduling core for the Focusflow countdown
//! timer: a focus interval interrupted by zero or more configured breaks,
//! each triggered at a percentage of focus progress.
//!
//! ## Architecture
//!
//! - **Transition engine**: a pure state machine advanced one second at a
//!   time; no clock, no I/O
//! - **Scheduler facade**: owns the timer state, exposes commands
//!   (`start_pause`, `reset`) and translates transitions into events
//! - **Clock driver**: a tokio interval loop that delivers ticks to the
//!   facade roughly once per second while the timer runs
//! - **Storage**: TOML-based user settings
//!
//! The core performs no rendering, audio, or analytics. Every state change
//! surfaces as an [`Event`]; collaborators decide what to do with it.
//!
//! ## Key Components
//!
//! - [`PhaseScheduler`]: scheduler facade and state owner
//! - [`SchedulePlan`]: validated configuration snapshot
//! - [`ClockDriver`]: tick delivery loop
//! - [`Settings`]: persisted user configuration

pub mod error;
pub mod events;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use events::Event;
pub use storage::Settings;
pub use timer::{BreakRule, ClockDriver, Phase, PhaseScheduler, SchedulePlan, SessionState};
