use super::ramp::ramp_coefficients;
use super::types::{
    CashflowPoint, InitiativeInputs, RiskInputs, Scenario, ScenarioResult, PAYBACK_NEVER,
};
use im::Vector;

/// Scenario-specific adjustment knobs.
///
/// Higher confidence raises both the conservative and aggressive uplift
/// multipliers, so confidence is rewarded in every non-base scenario. The
/// risk-impact exponents pull the other way: conservative projections are
/// more sensitive to the risk penalty, aggressive ones less.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenarioMultipliers {
    pub uplift: f64,
    pub ramp_speed: f64,
    pub risk_impact: f64,
}

pub fn scenario_multipliers(scenario: Scenario, confidence_score: u32) -> ScenarioMultipliers {
    let confidence_factor = confidence_score as f64 / 100.0;

    match scenario {
        Scenario::Conservative => ScenarioMultipliers {
            uplift: 0.5 + 0.2 * confidence_factor,
            ramp_speed: 0.7,
            risk_impact: 1.3,
        },
        Scenario::Base => ScenarioMultipliers {
            uplift: 1.0,
            ramp_speed: 1.0,
            risk_impact: 1.0,
        },
        Scenario::Aggressive => ScenarioMultipliers {
            uplift: 1.2 + 0.3 * confidence_factor,
            ramp_speed: 1.3,
            risk_impact: 0.7,
        },
    }
}

/// Revenue depression factor in (0, 1] for risk scores within 1-5.
///
/// The average risk is normalized to [0, 1] (1 -> 0, 5 -> 1) and can
/// depress revenue by at most 30% at the base sensitivity; the exponent
/// amplifies (> 1) or dampens (< 1) that penalty per scenario.
pub fn risk_penalty(risks: &RiskInputs, risk_impact: f64) -> f64 {
    let avg_risk = (risks.market_risk + risks.technical_risk + risks.time_to_market_risk) / 3.0;
    let normalized_risk = (avg_risk - 1.0) / 4.0;
    let risk_factor = 1.0 - normalized_risk * 0.3;
    risk_factor.powf(risk_impact)
}

fn delta_revenue(initiative: &InitiativeInputs, uplift_multiplier: f64) -> f64 {
    let effective_uplift = initiative.uplift * uplift_multiplier;
    let incremental_volume = initiative.reach * (effective_uplift / 100.0);
    let monthly_revenue = incremental_volume * initiative.unit_value;
    monthly_revenue * 12.0
}

/// Evaluate one scenario end to end.
///
/// The scalar payback (steady-state annual profit divided into delivery
/// cost) and the month-by-month cashflow crossover account for ramp-up
/// differently and will generally disagree; both are part of the contract.
pub fn evaluate_scenario(
    initiative: &InitiativeInputs,
    risks: &RiskInputs,
    scenario: Scenario,
    confidence_score: u32,
) -> ScenarioResult {
    let multipliers = scenario_multipliers(scenario, confidence_score);
    let penalty = risk_penalty(risks, multipliers.risk_impact);

    let annual_delta_revenue = delta_revenue(initiative, multipliers.uplift) * penalty;

    let delivery_cost = initiative.delivery_cost.total();
    let annual_run_cost = initiative.run_cost * 12.0;

    let gross_profit = annual_delta_revenue * (initiative.gross_margin / 100.0);
    let annual_profit = gross_profit - annual_run_cost;
    let horizon_years = initiative.horizon as f64 / 12.0;
    let total_profit = annual_profit * horizon_years - delivery_cost;
    let contribution_margin = gross_profit;

    let total_investment = delivery_cost + annual_run_cost * horizon_years;
    // Zero denominators yield a defined 0.0 instead of NaN/infinity.
    let roi12 = if delivery_cost > 0.0 {
        ((annual_profit - delivery_cost) / delivery_cost) * 100.0
    } else {
        0.0
    };
    let roi_over = |years: f64| {
        if total_investment > 0.0 {
            ((annual_profit * years - delivery_cost) / total_investment) * 100.0
        } else {
            0.0
        }
    };
    let roi24 = roi_over(2.0);
    let roi36 = roi_over(3.0);

    let payback_months = if annual_profit > 0.0 {
        let months = delivery_cost / (annual_profit / 12.0);
        (months * 10.0).round() / 10.0
    } else {
        PAYBACK_NEVER
    };

    let ramp = ramp_coefficients(initiative.ramp_up, initiative.horizon);
    let mut cumulative = -delivery_cost;
    let mut cumulative_cashflow = Vector::new();
    for month in 1..=initiative.horizon {
        let monthly_profit =
            (annual_profit / 12.0) * ramp[(month - 1) as usize] * multipliers.ramp_speed;
        cumulative += monthly_profit;
        cumulative_cashflow.push_back(CashflowPoint {
            month,
            value: cumulative,
        });
    }

    ScenarioResult {
        scenario,
        annual_profit,
        total_profit,
        contribution_margin,
        roi12,
        roi24,
        roi36,
        payback_months,
        cumulative_cashflow,
    }
}
