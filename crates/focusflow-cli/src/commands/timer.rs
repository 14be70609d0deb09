use std::time::Duration;

use clap::Subcommand;
use focusflow_core::storage::data_dir;
use focusflow_core::{ClockDriver, PhaseScheduler, Settings};

const STATE_FILE: &str = "timer_state.json";

#[derive(Subcommand)]
pub enum TimerAction {
    /// Toggle between running and paused
    StartPause,
    /// Return to the initial focus state
    Reset,
    /// Print the current timer state as JSON
    Status,
    /// Apply elapsed seconds manually (one tick per second)
    Tick {
        /// Number of seconds to apply
        #[arg(long, default_value = "1")]
        seconds: u64,
    },
    /// Run the timer in the foreground, printing events as JSON lines.
    /// Stops when the timer pauses (break entry, completion).
    Run,
}

fn state_path() -> Result<std::path::PathBuf, Box<dyn std::error::Error>> {
    Ok(data_dir()?.join(STATE_FILE))
}

/// Load the persisted scheduler, or build one from the settings file.
fn load_scheduler() -> Result<PhaseScheduler, Box<dyn std::error::Error>> {
    let path = state_path()?;
    if let Ok(json) = std::fs::read_to_string(&path) {
        if let Ok(scheduler) = serde_json::from_str::<PhaseScheduler>(&json) {
            return Ok(scheduler);
        }
    }
    let plan = Settings::load()?.to_plan()?;
    Ok(PhaseScheduler::new(plan)?)
}

fn save_scheduler(scheduler: &PhaseScheduler) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(scheduler)?;
    std::fs::write(state_path()?, json)?;
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut scheduler = load_scheduler()?;

    match action {
        TimerAction::StartPause => {
            match scheduler.start_pause() {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                // Zero focus budget: a no-op, not an error.
                None => println!("{}", serde_json::to_string_pretty(&scheduler.snapshot())?),
            }
        }
        TimerAction::Reset => {
            if let Some(event) = scheduler.reset() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
        TimerAction::Status => {
            println!("{}", serde_json::to_string_pretty(&scheduler.snapshot())?);
        }
        TimerAction::Tick { seconds } => {
            for _ in 0..seconds {
                if let Some(event) = scheduler.on_tick() {
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
            }
            println!("{}", serde_json::to_string_pretty(&scheduler.snapshot())?);
        }
        TimerAction::Run => {
            if !scheduler.is_running() {
                if let Some(event) = scheduler.start_pause() {
                    println!("{}", serde_json::to_string(&event)?);
                }
            }
            if scheduler.is_running() {
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .enable_time()
                    .build()?;
                let driver = ClockDriver::new(Duration::from_secs(1));
                runtime.block_on(driver.drive(&mut scheduler, |event| {
                    match serde_json::to_string(event) {
                        Ok(line) => println!("{line}"),
                        Err(e) => eprintln!("error: {e}"),
                    }
                }));
            }
            println!("{}", serde_json::to_string(&scheduler.snapshot())?);
        }
    }

    save_scheduler(&scheduler)?;
    Ok(())
}
