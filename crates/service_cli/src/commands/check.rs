//! Check command: prints the effective configuration.

use std::path::Path;

use pricer_models::lattice::MAX_STEPS;

use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig, config_file: Option<&Path>) -> Result<()> {
    if config.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    println!("lattice v{}", env!("CARGO_PKG_VERSION"));
    println!(
        "  Config file:     {}",
        config_file.map_or_else(|| "(none)".to_string(), |p| p.display().to_string())
    );
    println!("  Log level:       {}", config.log_level);
    println!("  Default steps:   {}", config.default_steps);
    println!("  Output format:   {}", config.format);
    println!("  Allow arbitrage: {}", config.allow_arbitrage);
    println!("  Max steps:       {}", MAX_STEPS);
    Ok(())
}
