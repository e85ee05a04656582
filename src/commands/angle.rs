//! Angle command implementation
//!
//! Computes and prints the angle between the clock hands.

use crate::cli::output::{print_output, AngleOutput};
use crate::config::Config;
use crate::error::Result;
use crate::services::AngleService;

/// Execute the angle command
pub fn run_angle(hour: &str, minute: &str, config: &Config) -> Result<()> {
    let service = AngleService::new(config.validation.policy);
    log::debug!(
        "Computing angle for hour={:?} minute={:?} (policy: {})",
        hour,
        minute,
        service.policy()
    );

    let reading = service.compute_str(hour, minute)?;
    print_output(&AngleOutput::from(&reading), config.general.format)?;

    Ok(())
}
