//! Input validation: hard numeric preconditions on a case file, plus
//! per-business-model plausibility rules that flag suspicious values with
//! a suggestion (and sometimes a suggested replacement value).
//!
//! The calculation engine deliberately does not validate; it is a pure
//! function whose numeric preconditions are the caller's contract. The CLI
//! runs [`check_preconditions`] before calculating and logs plausibility
//! findings from [`validate_all_fields`].

use crate::engine::types::{BusinessModel, InitiativeInputs, RiskInputs};
use crate::errors::{PreconditionViolation, RoicastError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A plausibility finding on a single template field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFinding {
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_value: Option<f64>,
}

impl FieldFinding {
    fn error(message: &str, suggestion: String, suggested_value: f64) -> Self {
        Self {
            severity: Severity::Error,
            message: message.to_string(),
            suggestion: Some(suggestion),
            suggested_value: Some(suggested_value),
        }
    }

    fn warning(message: &str, suggestion: String) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.to_string(),
            suggestion: Some(suggestion),
            suggested_value: None,
        }
    }

    fn info(message: &str, suggestion: String) -> Self {
        Self {
            severity: Severity::Info,
            message: message.to_string(),
            suggestion: Some(suggestion),
            suggested_value: None,
        }
    }
}

/// Hard preconditions the engine assumes. Violations are accumulated so
/// the caller sees all of them in one pass.
pub fn check_preconditions(
    initiative: &InitiativeInputs,
    risks: &RiskInputs,
) -> Result<(), RoicastError> {
    let mut violations = Vec::new();

    let mut require = |field: &str, ok: bool, message: &str| {
        if !ok {
            violations.push(PreconditionViolation {
                field: field.to_string(),
                message: message.to_string(),
            });
        }
    };

    require("reach", initiative.reach >= 0.0, "must be >= 0");
    require("unitValue", initiative.unit_value >= 0.0, "must be >= 0");
    require("grossMargin", initiative.gross_margin >= 0.0, "must be >= 0");
    require("runCost", initiative.run_cost >= 0.0, "must be >= 0");
    require(
        "deliveryCost.timeMonths",
        initiative.delivery_cost.time_months >= 0.0,
        "must be >= 0",
    );
    require(
        "deliveryCost.monthlyCost",
        initiative.delivery_cost.monthly_cost >= 0.0,
        "must be >= 0",
    );
    require("horizon", initiative.horizon >= 1, "must be >= 1");

    let risk_dimensions = [
        ("risks.marketRisk", risks.market_risk),
        ("risks.technicalRisk", risks.technical_risk),
        ("risks.timeToMarketRisk", risks.time_to_market_risk),
    ];
    for (field, value) in risk_dimensions {
        require(field, (1.0..=5.0).contains(&value), "must be within 1-5");
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(RoicastError::Validation(violations))
    }
}

/// Check one template field against the plausibility rules for the given
/// business model. `None` means no rule fired (or no rule exists).
pub fn validate_field(
    model: BusinessModel,
    field_id: &str,
    value: f64,
    all_values: &BTreeMap<String, f64>,
) -> Option<FieldFinding> {
    match model {
        BusinessModel::Saas => validate_saas_field(field_id, value, all_values),
        BusinessModel::Ecommerce => validate_ecommerce_field(field_id, value, all_values),
        BusinessModel::B2bSales => validate_b2b_field(field_id, value),
        BusinessModel::CostReduction => validate_cost_reduction_field(field_id, value),
    }
}

/// Run every field through its rule; only fields with findings appear in
/// the output.
pub fn validate_all_fields(
    model: BusinessModel,
    values: &BTreeMap<String, f64>,
) -> BTreeMap<String, FieldFinding> {
    values
        .iter()
        .filter_map(|(field_id, &value)| {
            validate_field(model, field_id, value, values).map(|f| (field_id.clone(), f))
        })
        .collect()
}

fn validate_saas_field(
    field_id: &str,
    value: f64,
    all_values: &BTreeMap<String, f64>,
) -> Option<FieldFinding> {
    match field_id {
        "currentChurn" => {
            if value > 15.0 {
                Some(FieldFinding::error(
                    "Churn is very high (>15%)",
                    "Churn this high is critical for a SaaS. The average is 5-8%. Are you sure about this value?".to_string(),
                    7.0,
                ))
            } else if value > 10.0 {
                Some(FieldFinding::warning(
                    "High churn",
                    "Churn of 10%+ is concerning. The B2B SaaS average is 5-8%.".to_string(),
                ))
            } else if value < 1.0 {
                Some(FieldFinding::info(
                    "Excellent churn",
                    "Churn below 1% is exceptional. Double-check the calculation.".to_string(),
                ))
            } else {
                None
            }
        }
        "churnReduction" => {
            let current_churn = all_values.get("currentChurn").copied().unwrap_or(0.0);
            if value >= current_churn {
                Some(FieldFinding::error(
                    "Impossible reduction",
                    format!(
                        "You cannot reduce churn by {value}pp when current churn is {current_churn}%. Maximum possible: {current_churn}pp."
                    ),
                    (current_churn * 0.3).max(1.0),
                ))
            } else if value > current_churn * 0.5 {
                Some(FieldFinding::warning(
                    "Ambitious target",
                    format!(
                        "Reducing churn by {value}pp ({:.0}% relative reduction) is very ambitious. Are you confident?",
                        (value / current_churn) * 100.0
                    ),
                ))
            } else {
                None
            }
        }
        "grossMargin" => {
            if value > 95.0 {
                Some(FieldFinding::warning(
                    "Very high margin",
                    "Gross margin above 95% is rare in SaaS. Did you count all direct costs (servers, support, ...)?".to_string(),
                ))
            } else if value < 50.0 {
                Some(FieldFinding::warning(
                    "Low margin for SaaS",
                    "Typical SaaS gross margin is 70-85%. Below 50% may signal a cost-structure problem.".to_string(),
                ))
            } else {
                None
            }
        }
        _ => None,
    }
}

fn validate_ecommerce_field(
    field_id: &str,
    value: f64,
    all_values: &BTreeMap<String, f64>,
) -> Option<FieldFinding> {
    match field_id {
        "currentConversion" => {
            if value > 10.0 {
                Some(FieldFinding::warning(
                    "Very high conversion",
                    "A rate above 10% is exceptional in e-commerce (average 2-4%). Verify the calculation.".to_string(),
                ))
            } else if value < 0.5 {
                Some(FieldFinding::warning(
                    "Very low conversion",
                    "Even for e-commerce, below 0.5% is very low. There may be a major UX problem.".to_string(),
                ))
            } else {
                None
            }
        }
        "conversionUplift" => {
            let current = all_values.get("currentConversion").copied().unwrap_or(0.0);
            if value > current {
                Some(FieldFinding::error(
                    "Impossible uplift",
                    format!("You cannot improve by {value}pp when the current rate is {current}%."),
                    current * 0.3,
                ))
            } else if value > current * 0.5 {
                Some(FieldFinding::warning(
                    "Very ambitious uplift",
                    format!(
                        "+{value}pp is a +{:.0}% improvement. Typical UX overhauls deliver +0.5-2pp.",
                        (value / current) * 100.0
                    ),
                ))
            } else {
                None
            }
        }
        "grossMargin" => {
            if value > 70.0 {
                Some(FieldFinding::warning(
                    "High margin for e-commerce",
                    "Typical e-commerce margin is 30-50%. Above 70% is rare outside premium DTC.".to_string(),
                ))
            } else if value < 20.0 {
                Some(FieldFinding::warning(
                    "Very low margin",
                    "A margin below 20% leaves little room for operations. Check product costs.".to_string(),
                ))
            } else {
                None
            }
        }
        _ => None,
    }
}

fn validate_b2b_field(field_id: &str, value: f64) -> Option<FieldFinding> {
    match field_id {
        "currentWinRate" => {
            if value > 50.0 {
                Some(FieldFinding::info(
                    "Exceptional win rate",
                    "A win rate above 50% is excellent. The B2B average is 20-30%.".to_string(),
                ))
            } else if value < 10.0 {
                Some(FieldFinding::warning(
                    "Very low win rate",
                    "A win rate below 10% suggests a lead-qualification or product-market-fit problem.".to_string(),
                ))
            } else {
                None
            }
        }
        "winRateUplift" => {
            if value > 30.0 {
                Some(FieldFinding::warning(
                    "Very ambitious improvement",
                    format!(
                        "+{value}pp of win rate is extremely hard to reach. Typical product initiatives deliver +3-7pp."
                    ),
                ))
            } else {
                None
            }
        }
        "grossMargin" => {
            if value > 90.0 {
                Some(FieldFinding::info(
                    "Pure software margin",
                    "A margin above 90% suggests pure software without services.".to_string(),
                ))
            } else if value < 40.0 {
                Some(FieldFinding::warning(
                    "Low margin",
                    "In B2B software the typical margin is 70-85%. Below 40% may indicate too much custom service work.".to_string(),
                ))
            } else {
                None
            }
        }
        _ => None,
    }
}

fn validate_cost_reduction_field(field_id: &str, value: f64) -> Option<FieldFinding> {
    match field_id {
        "timeReduction" => {
            if value > 90.0 {
                Some(FieldFinding::warning(
                    "Near-total reduction",
                    "Eliminating more than 90% of the time is very rare. Make sure it is realistic.".to_string(),
                ))
            } else if value < 10.0 {
                Some(FieldFinding::info(
                    "Marginal gain",
                    "A reduction below 10% may not justify the investment. Are you sure about the impact?".to_string(),
                ))
            } else {
                None
            }
        }
        "grossMargin" => {
            if value != 100.0 {
                Some(FieldFinding {
                    severity: Severity::Info,
                    message: "Cost-reduction margin".to_string(),
                    suggestion: Some(
                        "For cost-reduction initiatives the gross margin is usually 100% (pure savings)."
                            .to_string(),
                    ),
                    suggested_value: Some(100.0),
                })
            } else {
                None
            }
        }
        _ => None,
    }
}
