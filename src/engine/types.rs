use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Business model selected for the initiative. Determines which semantic
/// the generic metric fields carry (e.g. churn vs. conversion); the engine
/// itself only echoes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessModel {
    Saas,
    Ecommerce,
    B2bSales,
    CostReduction,
}

impl BusinessModel {
    pub const ALL: [BusinessModel; 4] = [
        BusinessModel::Saas,
        BusinessModel::Ecommerce,
        BusinessModel::B2bSales,
        BusinessModel::CostReduction,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            BusinessModel::Saas => "saas",
            BusinessModel::Ecommerce => "ecommerce",
            BusinessModel::B2bSales => "b2b-sales",
            BusinessModel::CostReduction => "cost-reduction",
        }
    }
}

/// Adoption-speed curve applied to monthly profit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RampUpPeriod {
    #[serde(rename = "instant")]
    Instant,
    #[serde(rename = "3-months")]
    ThreeMonths,
    #[serde(rename = "6-months")]
    SixMonths,
    #[serde(rename = "12-months")]
    TwelveMonths,
}

impl RampUpPeriod {
    /// Number of months until full adoption; `None` for instant.
    pub fn window(&self) -> Option<u32> {
        match self {
            RampUpPeriod::Instant => None,
            RampUpPeriod::ThreeMonths => Some(3),
            RampUpPeriod::SixMonths => Some(6),
            RampUpPeriod::TwelveMonths => Some(12),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Conservative,
    Base,
    Aggressive,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [
        Scenario::Conservative,
        Scenario::Base,
        Scenario::Aggressive,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataQuality {
    Measured,
    Partial,
    Estimated,
}

/// Count of external dependencies the initiative hinges on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dependencies {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "1-2")]
    OneToTwo,
    #[serde(rename = "3+")]
    ThreeOrMore,
}

/// How the expected uplift was established.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpliftNature {
    #[serde(rename = "ab-test")]
    AbTest,
    #[serde(rename = "analogy")]
    Analogy,
    #[serde(rename = "intuition")]
    Intuition,
}

/// One-time delivery investment: people x months x monthly cost.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryCost {
    pub people: u32,
    pub time_months: f64,
    pub monthly_cost: f64,
}

impl DeliveryCost {
    pub fn total(&self) -> f64 {
        self.people as f64 * self.time_months * self.monthly_cost
    }
}

/// The initiative under evaluation.
///
/// `baseline` and `template_inputs` are informational echoes; the engine
/// never computes on them. Numeric range preconditions (`reach >= 0`,
/// `unit_value >= 0`, `horizon >= 1`) are the caller's responsibility;
/// see [`crate::validation::check_preconditions`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiativeInputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    pub business_model: BusinessModel,

    /// Current rate of the metric being improved (e.g. current churn %).
    pub baseline: f64,
    /// Annualizable population/volume the uplift applies to.
    pub reach: f64,
    /// Expected improvement in percentage points.
    pub uplift: f64,
    /// Monetary value per unit of incremental volume (ARPA, AOV, ...).
    pub unit_value: f64,
    /// Percentage of incremental revenue retained before run costs.
    pub gross_margin: f64,

    pub delivery_cost: DeliveryCost,
    /// Recurring monthly cost.
    pub run_cost: f64,

    pub ramp_up: RampUpPeriod,
    /// Total months to simulate (practical range 6-60).
    pub horizon: u32,

    /// Raw per-template field values, carried through untouched.
    #[serde(default)]
    pub template_inputs: BTreeMap<String, serde_json::Value>,
}

/// Three independent risk dimensions, each 1-5 (higher = riskier).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskInputs {
    pub market_risk: f64,
    pub technical_risk: f64,
    pub time_to_market_risk: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceInputs {
    pub data_quality: DataQuality,
    pub dependencies: Dependencies,
    pub uplift_nature: UpliftNature,
}

/// Running cash position at the end of a simulated month.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CashflowPoint {
    pub month: u32,
    pub value: f64,
}

/// Payback sentinel meaning "never pays back within any reasonable horizon".
pub const PAYBACK_NEVER: f64 = 999.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub scenario: Scenario,
    pub annual_profit: f64,
    pub total_profit: f64,
    pub contribution_margin: f64,
    /// ROI percentages; 0.0 when the respective denominator is zero.
    pub roi12: f64,
    pub roi24: f64,
    pub roi36: f64,
    /// Months to recoup delivery cost, one decimal; [`PAYBACK_NEVER`] when
    /// annual profit is not positive.
    pub payback_months: f64,
    pub cumulative_cashflow: Vector<CashflowPoint>,
}

/// All three scenarios are always present, never a subset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSet {
    pub conservative: ScenarioResult,
    pub base: ScenarioResult,
    pub aggressive: ScenarioResult,
}

impl ScenarioSet {
    pub fn get(&self, scenario: Scenario) -> &ScenarioResult {
        match scenario {
            Scenario::Conservative => &self.conservative,
            Scenario::Base => &self.base,
            Scenario::Aggressive => &self.aggressive,
        }
    }
}

/// Advisory text, each list truncated to its first three entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub top_drivers: Vector<String>,
    pub critical_assumptions: Vector<String>,
    pub dominant_risks: Vector<String>,
}

/// Immutable output of one `calculate` call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub initiative: InitiativeInputs,
    pub risks: RiskInputs,
    pub confidence: ConfidenceInputs,
    pub confidence_score: u32,
    pub scenarios: ScenarioSet,
    pub insights: Insights,
    pub created_at: DateTime<Utc>,
    pub report_id: String,
}

/// On-disk / on-wire shape of a case file fed to `roicast calculate`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaseFile {
    pub initiative: InitiativeInputs,
    pub risks: RiskInputs,
    pub confidence: ConfidenceInputs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_wire_tokens_match_original_format() {
        assert_eq!(
            serde_json::to_string(&RampUpPeriod::ThreeMonths).unwrap(),
            "\"3-months\""
        );
        assert_eq!(
            serde_json::to_string(&Dependencies::ThreeOrMore).unwrap(),
            "\"3+\""
        );
        assert_eq!(
            serde_json::to_string(&UpliftNature::AbTest).unwrap(),
            "\"ab-test\""
        );
        assert_eq!(
            serde_json::to_string(&BusinessModel::B2bSales).unwrap(),
            "\"b2b-sales\""
        );
    }

    #[test]
    fn unknown_enum_token_is_rejected() {
        let err = serde_json::from_str::<DataQuality>("\"guessed\"");
        assert!(err.is_err());
    }

    #[test]
    fn delivery_cost_total_multiplies_components() {
        let cost = DeliveryCost {
            people: 2,
            time_months: 3.0,
            monthly_cost: 8000.0,
        };
        assert_eq!(cost.total(), 48000.0);
    }
}
