//! The calculation core: turns initiative metrics, risk ratings, and
//! confidence indicators into conservative/base/aggressive financial
//! projections plus a textual insights summary.
//!
//! Everything in here is pure arithmetic over immutable inputs: no I/O,
//! no shared state, no suspension points. Re-computation means calling
//! [`calculate`] again with new inputs.

pub mod confidence;
pub mod insights;
pub mod ramp;
pub mod scenario;
pub mod types;

use crate::config::InsightThresholds;
use chrono::{DateTime, Utc};
use self::types::{
    CalculationResult, ConfidenceInputs, InitiativeInputs, RiskInputs, Scenario, ScenarioSet,
};

/// Run the full pipeline: confidence score once, all three scenarios
/// independently, insights once, assemble with the current timestamp.
///
/// Infallible over the typed inputs: invalid categorical values are
/// unrepresentable, and degenerate numerics (zero delivery cost, zero
/// investment) resolve to defined sentinels inside the scenario engine.
pub fn calculate(
    initiative: InitiativeInputs,
    risks: RiskInputs,
    confidence: ConfidenceInputs,
    report_id: &str,
) -> CalculationResult {
    calculate_at(
        initiative,
        risks,
        confidence,
        report_id,
        Utc::now(),
        &InsightThresholds::default(),
    )
}

/// [`calculate`] with an injected clock and insight thresholds, for
/// callers that need reproducible output (tests) or configured thresholds
/// (the CLI).
pub fn calculate_at(
    initiative: InitiativeInputs,
    risks: RiskInputs,
    confidence: ConfidenceInputs,
    report_id: &str,
    created_at: DateTime<Utc>,
    thresholds: &InsightThresholds,
) -> CalculationResult {
    let confidence_score = confidence::confidence_score(&confidence);

    let scenarios = ScenarioSet {
        conservative: scenario::evaluate_scenario(
            &initiative,
            &risks,
            Scenario::Conservative,
            confidence_score,
        ),
        base: scenario::evaluate_scenario(&initiative, &risks, Scenario::Base, confidence_score),
        aggressive: scenario::evaluate_scenario(
            &initiative,
            &risks,
            Scenario::Aggressive,
            confidence_score,
        ),
    };

    let insights = insights::generate_insights(&initiative, &risks, &confidence, thresholds);

    CalculationResult {
        initiative,
        risks,
        confidence,
        confidence_score,
        scenarios,
        insights,
        created_at,
        report_id: report_id.to_string(),
    }
}
