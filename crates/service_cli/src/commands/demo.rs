//! Demo command: the three reference scenarios.
//!
//! American call 20/21 and American put 50/52 on two-step fixed-move
//! lattices, then the same put on a 1000-step CRR lattice. Priced as one
//! batch.

use pricer_models::instruments::{ExerciseStyle, PayoffType};
use pricer_models::lattice::{price_batch, PricingRequest};
use tracing::info;

use crate::config::{CliConfig, OutputFormat};
use crate::report::{render, PriceReport};
use crate::Result;

/// The demo scenarios with their labels.
pub fn scenarios() -> Vec<(&'static str, PricingRequest<f64>)> {
    let call_fixed = PricingRequest {
        option_type: PayoffType::Call,
        exercise_type: ExerciseStyle::American,
        spot: 20.0,
        strike: 21.0,
        expiry: 0.5,
        rate: 0.12,
        volatility: 0.1,
        steps: 2,
        fixed_moves: true,
        ..Default::default()
    };
    let put_fixed = PricingRequest {
        option_type: PayoffType::Put,
        exercise_type: ExerciseStyle::American,
        spot: 50.0,
        strike: 52.0,
        expiry: 2.0,
        rate: 0.05,
        volatility: 0.2,
        steps: 2,
        fixed_moves: true,
        ..Default::default()
    };
    let put_crr = PricingRequest {
        steps: 1000,
        fixed_moves: false,
        ..put_fixed
    };

    vec![
        ("call-fixed-2", call_fixed),
        ("put-fixed-2", put_fixed),
        ("put-crr-1000", put_crr),
    ]
}

/// Runs the demo scenarios and prints one summary line per scenario.
pub fn run(config: &CliConfig) -> Result<()> {
    let (labels, requests): (Vec<_>, Vec<_>) = scenarios().into_iter().unzip();
    info!(scenarios = requests.len(), "Running demo scenarios");

    let mut reports = Vec::with_capacity(requests.len());
    for ((label, request), result) in labels.iter().zip(&requests).zip(price_batch(&requests)) {
        reports.push(PriceReport::new(*label, request, &result?));
    }

    match config.format {
        OutputFormat::Table => {
            for report in &reports {
                println!("{}", report.summary_line());
            }
        }
        OutputFormat::Json => println!("{}", render(&reports, config.format)?),
    }
    Ok(())
}
