//! Price command implementation
//!
//! Prices a single vanilla option described entirely by command-line flags.

use clap::Args;
use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::{ExerciseStyle, PayoffType};
use pricer_models::lattice::{ArbitragePolicy, PricingRequest};
use tracing::{info, warn};

use crate::config::{CliConfig, OutputFormat};
use crate::report::{render, PriceReport};
use crate::Result;

/// Flags of the `price` command
#[derive(Debug, Clone, Args)]
pub struct PriceArgs {
    /// Payoff type (call, put)
    #[arg(short = 't', long, default_value = "call")]
    pub option_type: PayoffType,

    /// Exercise style (european, american)
    #[arg(short, long, default_value = "european")]
    pub exercise: ExerciseStyle,

    /// Initial underlying price S0
    #[arg(short, long, default_value_t = 100.0)]
    pub spot: f64,

    /// Strike price K
    #[arg(short = 'k', long, default_value_t = 110.0)]
    pub strike: f64,

    /// Time to maturity in years
    #[arg(short = 'T', long, default_value_t = 1.0)]
    pub expiry: f64,

    /// Continuously compounded risk-free rate
    #[arg(short, long, default_value_t = 0.05, allow_negative_numbers = true)]
    pub rate: f64,

    /// Volatility, or the per-step move size with --fixed-moves
    #[arg(long, default_value_t = 0.2)]
    pub volatility: f64,

    /// Number of lattice steps [default: from configuration]
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,

    /// Use u = 1 + volatility, d = 1 - volatility
    #[arg(long)]
    pub fixed_moves: bool,

    /// Explicit up factor
    #[arg(long)]
    pub up: Option<f64>,

    /// Explicit down factor
    #[arg(long)]
    pub down: Option<f64>,

    /// Price lattices whose risk-neutral probability is outside (0, 1)
    #[arg(long)]
    pub allow_arbitrage: bool,

    /// Output format (table, json) [default: from configuration]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Also print the Black-Scholes value of a European contract
    #[arg(long)]
    pub reference: bool,
}

impl PriceArgs {
    /// Builds the request, filling unset flags from `config`.
    pub fn to_request(&self, config: &CliConfig) -> PricingRequest<f64> {
        let arbitrage_policy = if self.allow_arbitrage || config.allow_arbitrage {
            ArbitragePolicy::Warn
        } else {
            ArbitragePolicy::Reject
        };

        PricingRequest {
            option_type: self.option_type,
            exercise_type: self.exercise,
            spot: self.spot,
            strike: self.strike,
            expiry: self.expiry,
            rate: self.rate,
            volatility: self.volatility,
            steps: self.steps.unwrap_or(config.default_steps),
            fixed_moves: self.fixed_moves,
            up: self.up,
            down: self.down,
            arbitrage_policy,
        }
    }
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &CliConfig) -> Result<()> {
    let request = args.to_request(config);
    info!(
        option_type = %request.option_type,
        exercise = %request.exercise_type,
        steps = request.steps,
        fixed_moves = request.fixed_moves,
        "Pricing option"
    );

    let result = request.price()?;
    let reference = if args.reference {
        reference_price(&request)
    } else {
        None
    };

    let report = PriceReport::new("price", &request, &result).with_reference(reference);
    let format = args.format.unwrap_or(config.format);
    match format {
        OutputFormat::Table => {
            println!("{}", report.summary_line());
            println!("{}", render(&[report], format)?);
        }
        OutputFormat::Json => println!("{}", render(&[report], format)?),
    }

    info!("Pricing complete");
    Ok(())
}

/// Black-Scholes value of the request's contract, when one exists.
///
/// Only CRR lattices without overrides read `volatility` as σ, so fixed
/// moves and explicit factors have no reference.
pub fn reference_price(request: &PricingRequest<f64>) -> Option<f64> {
    if request.exercise_type.allows_early_exercise() {
        info!("No closed-form reference for American exercise");
        return None;
    }
    if request.fixed_moves || request.up.is_some() || request.down.is_some() {
        info!("No closed-form reference when move factors do not come from volatility");
        return None;
    }

    let option = request.option().ok()?;
    match BlackScholes::price_option(request.rate, request.volatility, &option) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(error = %e, "Reference price unavailable");
            None
        }
    }
}
