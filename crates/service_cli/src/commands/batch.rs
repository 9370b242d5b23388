//! Batch command implementation
//!
//! Prices every `[[scenario]]` table of a TOML file in one parallel batch.
//!
//! ```toml
//! [[scenario]]
//! option_type = "put"
//! exercise_type = "american"
//! spot = 50.0
//! strike = 52.0
//! expiry = 2.0
//! steps = 1000
//! ```
//!
//! Omitted fields take the request defaults, except `steps`, which takes
//! the configured `default_steps`.

use std::path::Path;

use pricer_models::lattice::{price_batch, ArbitragePolicy, PricingRequest};
use tracing::{error, info};

use crate::config::CliConfig;
use crate::report::{render, PriceReport};
use crate::{CliError, Result};

/// Parses the scenario tables of a batch file.
pub fn parse_scenarios(content: &str, config: &CliConfig) -> Result<Vec<PricingRequest<f64>>> {
    let mut document: toml::Table = content.parse()?;
    let items = match document.remove("scenario") {
        Some(toml::Value::Array(items)) => items,
        Some(_) => {
            return Err(CliError::InvalidArgument(
                "`scenario` must be an array of tables".to_string(),
            ))
        }
        None => Vec::new(),
    };

    let default_steps = i64::try_from(config.default_steps).unwrap_or(i64::MAX);
    items
        .into_iter()
        .map(|mut item| {
            if let toml::Value::Table(table) = &mut item {
                table
                    .entry("steps")
                    .or_insert(toml::Value::Integer(default_steps));
            }
            let mut request: PricingRequest<f64> = item.try_into()?;
            if config.allow_arbitrage {
                request.arbitrage_policy = ArbitragePolicy::Warn;
            }
            Ok(request)
        })
        .collect()
}

/// Run the batch command
pub fn run(file: &Path, config: &CliConfig) -> Result<()> {
    if !file.exists() {
        return Err(CliError::FileNotFound(file.to_path_buf()));
    }

    let content = std::fs::read_to_string(file)?;
    let requests = parse_scenarios(&content, config)?;
    if requests.is_empty() {
        return Err(CliError::InvalidArgument(format!(
            "No [[scenario]] tables in {}",
            file.display()
        )));
    }
    info!(scenarios = requests.len(), file = %file.display(), "Pricing batch");

    let total = requests.len();
    let mut reports = Vec::with_capacity(total);
    for (index, (request, result)) in requests.iter().zip(price_batch(&requests)).enumerate() {
        let label = format!("#{}", index + 1);
        match result {
            Ok(result) => reports.push(PriceReport::new(label, request, &result)),
            Err(e) => error!(scenario = %label, error = %e, "Scenario failed"),
        }
    }

    println!("{}", render(&reports, config.format)?);

    let failed = total - reports.len();
    if failed > 0 {
        return Err(CliError::BatchFailed { failed, total });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::instruments::{ExerciseStyle, PayoffType};

    const SCENARIOS: &str = r#"
        [[scenario]]
        option_type = "put"
        exercise_type = "american"
        spot = 50.0
        strike = 52.0
        expiry = 2.0
        steps = 2
        fixed_moves = true

        [[scenario]]
        kind = "call"
        S0 = 20.0
        K = 21.0
    "#;

    #[test]
    fn test_parse_scenarios() {
        let config = CliConfig {
            default_steps: 300,
            ..Default::default()
        };
        let requests = parse_scenarios(SCENARIOS, &config).unwrap();

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].option_type, PayoffType::Put);
        assert_eq!(requests[0].exercise_type, ExerciseStyle::American);
        assert_eq!(requests[0].steps, 2);
        assert_eq!(requests[1].option_type, PayoffType::Call);
        assert_eq!(requests[1].spot, 20.0);
        assert_eq!(requests[1].steps, 300);
        assert_eq!(requests[1].arbitrage_policy, ArbitragePolicy::Reject);
    }

    #[test]
    fn test_allow_arbitrage_applies_to_all() {
        let config = CliConfig {
            allow_arbitrage: true,
            ..Default::default()
        };
        let requests = parse_scenarios(SCENARIOS, &config).unwrap();
        assert!(requests
            .iter()
            .all(|r| r.arbitrage_policy == ArbitragePolicy::Warn));
    }

    #[test]
    fn test_no_scenarios() {
        let requests = parse_scenarios("", &CliConfig::default()).unwrap();
        assert!(requests.is_empty());
    }

    #[test]
    fn test_scenario_must_be_array() {
        assert!(matches!(
            parse_scenarios("scenario = 3", &CliConfig::default()),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_bad_field_type() {
        assert!(matches!(
            parse_scenarios("[[scenario]]\nspot = \"high\"", &CliConfig::default()),
            Err(CliError::Scenario(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            run(Path::new("/nonexistent/scenarios.toml"), &CliConfig::default()),
            Err(CliError::FileNotFound(_))
        ));
    }
}
