//! Rendering of pricing results.

use pricer_models::instruments::{ExerciseStyle, PayoffType};
use pricer_models::lattice::{LatticeResult, PricingRequest};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// One priced scenario, flattened for output.
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    pub label: String,
    pub option_type: PayoffType,
    pub exercise_type: ExerciseStyle,
    pub spot: f64,
    pub strike: f64,
    pub expiry: f64,
    pub rate: f64,
    pub volatility: f64,
    pub steps: usize,
    pub price: f64,
    pub elapsed_secs: f64,
    pub node_count: u64,
    pub up: f64,
    pub down: f64,
    pub probability: f64,
    pub discount: f64,
    pub arbitrage_free: bool,
    /// Black-Scholes value of the same European contract
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<f64>,
}

impl PriceReport {
    pub fn new(
        label: impl Into<String>,
        request: &PricingRequest<f64>,
        result: &LatticeResult<f64>,
    ) -> Self {
        Self {
            label: label.into(),
            option_type: request.option_type,
            exercise_type: request.exercise_type,
            spot: request.spot,
            strike: request.strike,
            expiry: request.expiry,
            rate: request.rate,
            volatility: request.volatility,
            steps: request.steps,
            price: result.price,
            elapsed_secs: result.elapsed_secs(),
            node_count: result.node_count,
            up: result.params.up,
            down: result.params.down,
            probability: result.params.probability,
            discount: result.params.discount,
            arbitrage_free: result.arbitrage_free,
            reference: None,
        }
    }

    pub fn with_reference(mut self, reference: Option<f64>) -> Self {
        self.reference = reference;
        self
    }

    /// Single-line summary of price, timing and lattice size.
    pub fn summary_line(&self) -> String {
        format!(
            "Option Price: {:.4}, Computation Time: {:.6} sec, Number of Nodes: {}",
            self.price, self.elapsed_secs, self.node_count
        )
    }
}

/// Renders `reports` in the requested format.
pub fn render(reports: &[PriceReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
        OutputFormat::Table => Ok(render_table(reports)),
    }
}

fn render_table(reports: &[PriceReport]) -> String {
    let mut out = String::new();
    out.push_str("┌──────────────┬──────┬──────────┬─────────┬──────────────┬──────────────┬────────────┐\n");
    out.push_str("│ Scenario     │ Type │ Style    │ Steps   │ Price        │ BS reference │ Nodes      │\n");
    out.push_str("├──────────────┼──────┼──────────┼─────────┼──────────────┼──────────────┼────────────┤\n");
    if reports.is_empty() {
        out.push_str("│ (no data)    │      │          │         │              │              │            │\n");
    }
    for report in reports {
        let reference = report
            .reference
            .map(|v| format!("{:.6}", v))
            .unwrap_or_else(|| "-".to_string());
        let flag = if report.arbitrage_free { " " } else { "!" };
        out.push_str(&format!(
            "│ {:<12} │ {:<4} │ {:<8} │ {:>7} │ {:>11.6}{} │ {:>12} │ {:>10} │\n",
            report.label,
            report.option_type.as_str(),
            report.exercise_type.as_str(),
            report.steps,
            report.price,
            flag,
            reference,
            report.node_count
        ));
    }
    out.push_str("└──────────────┴──────┴──────────┴─────────┴──────────────┴──────────────┴────────────┘");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn literal_report() -> PriceReport {
        let request = PricingRequest {
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
        let result = request.price().unwrap();
        PriceReport::new("literal", &request, &result)
    }

    #[test]
    fn test_summary_line() {
        let report = literal_report();
        let line = report.summary_line();
        assert!(line.starts_with("Option Price: 1.2822, Computation Time: "));
        assert!(line.ends_with(" sec, Number of Nodes: 6"));
    }

    #[test]
    fn test_render_json() {
        let report = literal_report().with_reference(Some(1.5));
        let json = render(&[report], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["label"], "literal");
        assert_eq!(value[0]["option_type"], "call");
        assert_eq!(value[0]["exercise_type"], "american");
        assert_eq!(value[0]["node_count"], 6);
        assert_abs_diff_eq!(
            value[0]["price"].as_f64().unwrap(),
            1.282_184_945_274_140_5,
            epsilon = 1e-12
        );
        assert_eq!(value[0]["reference"], 1.5);
    }

    #[test]
    fn test_render_json_omits_missing_reference() {
        let json = render(&[literal_report()], OutputFormat::Json).unwrap();
        assert!(!json.contains("reference"));
    }

    #[test]
    fn test_render_table() {
        let table = render(&[literal_report()], OutputFormat::Table).unwrap();
        assert!(table.contains("literal"));
        assert!(table.contains("american"));
        assert!(table.contains("1.282185"));
        assert_eq!(table.lines().count(), 5);
    }

    #[test]
    fn test_render_empty_table() {
        let table = render(&[], OutputFormat::Table).unwrap();
        assert!(table.contains("(no data)"));
    }
}
