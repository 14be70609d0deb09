use clap::Subcommand;
use focusflow_core::{BreakRule, Settings};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print current settings as JSON
    Show,
    /// Validate the settings file
    Check,
    /// Set the focus duration in seconds
    SetFocus {
        /// Focus budget in seconds
        seconds: u64,
    },
    /// Add a scheduled break
    AddBreak {
        /// Trigger position as percent of focus progress, strictly
        /// between 0 and 100
        #[arg(long)]
        trigger: f64,
        /// Break duration in seconds
        #[arg(long)]
        duration: u64,
    },
    /// Remove all scheduled breaks
    ClearBreaks,
    /// Enable or disable notifications for collaborating frontends
    SetNotifications {
        /// true or false
        enabled: bool,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let settings = Settings::load()?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        ConfigAction::Check => {
            let settings = Settings::load()?;
            settings.to_plan()?;
            println!("ok");
        }
        ConfigAction::SetFocus { seconds } => {
            let mut settings = Settings::load()?;
            settings.focus_duration = seconds;
            settings.save()?;
            println!("ok");
        }
        ConfigAction::AddBreak { trigger, duration } => {
            let mut settings = Settings::load()?;
            settings.breaks.push(BreakRule {
                trigger_percent: trigger,
                duration_secs: duration,
            });
            // Reject before saving: an invalid rule never reaches disk.
            settings.to_plan()?;
            settings.save()?;
            println!("ok");
        }
        ConfigAction::ClearBreaks => {
            let mut settings = Settings::load()?;
            settings.breaks.clear();
            settings.save()?;
            println!("ok");
        }
        ConfigAction::SetNotifications { enabled } => {
            let mut settings = Settings::load()?;
            settings.notifications_enabled = enabled;
            settings.save()?;
            println!("ok");
        }
    }
    Ok(())
}
