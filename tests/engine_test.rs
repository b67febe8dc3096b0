mod common;

use chrono::{TimeZone, Utc};
use common::{assert_close, seed_confidence, seed_initiative, seed_risks};
use pretty_assertions::assert_eq;
use roicast::{
    calculate, calculate_at, confidence_score, evaluate_scenario, risk_penalty,
    InsightThresholds, Scenario, PAYBACK_NEVER,
};

#[test]
fn seed_case_confidence_score_is_85() {
    // measured (0) + 1-2 dependencies (15) + ab-test (0)
    assert_eq!(confidence_score(&seed_confidence()), 85);
}

#[test]
fn seed_case_base_scenario_matches_reference_figures() {
    let initiative = seed_initiative();
    let risks = seed_risks();
    let score = confidence_score(&seed_confidence());

    let result = evaluate_scenario(&initiative, &risks, Scenario::Base, score);

    // Reference arithmetic: uplift 2pp on 1000 units at 50/unit gives
    // 12,000 annual delta revenue; avg risk 8/3 gives a 0.875 penalty at
    // exponent 1.0; 80% margin and 24,000 annual run cost leave a loss.
    let penalty = risk_penalty(&risks, 1.0);
    assert_close(penalty, 0.875, "risk penalty");
    let annual_delta_revenue = 12_000.0 * penalty;
    let gross_profit = annual_delta_revenue * 0.80;
    let expected_annual_profit = gross_profit - 24_000.0;

    assert_close(result.annual_profit, expected_annual_profit, "annual profit");
    assert_close(result.annual_profit, -15_600.0, "annual profit (absolute)");
    assert_close(result.contribution_margin, 8_400.0, "contribution margin");
    // totalProfit = annual * 2 years - 48,000 delivery
    assert_close(result.total_profit, -79_200.0, "total profit");
    assert_close(result.roi12, -132.5, "roi12");
    // totalInvestment = 48,000 + 24,000 * 2 = 96,000
    assert_close(result.roi24, -82.5, "roi24");
    assert_close(result.roi36, -98.75, "roi36");
    assert_eq!(result.payback_months, PAYBACK_NEVER);
}

#[test]
fn scenario_profits_are_ordered_for_positive_uplift() {
    let initiative = seed_initiative();
    let risks = seed_risks();

    for score in [0, 40, 85, 100] {
        let conservative = evaluate_scenario(&initiative, &risks, Scenario::Conservative, score);
        let base = evaluate_scenario(&initiative, &risks, Scenario::Base, score);
        let aggressive = evaluate_scenario(&initiative, &risks, Scenario::Aggressive, score);

        assert!(
            aggressive.annual_profit >= base.annual_profit,
            "aggressive < base at score {score}"
        );
        assert!(
            base.annual_profit >= conservative.annual_profit,
            "base < conservative at score {score}"
        );
    }
}

#[test]
fn payback_sentinel_applies_whenever_profit_is_not_positive() {
    let mut initiative = seed_initiative();
    let risks = seed_risks();

    // Seed case already runs at a loss.
    let result = evaluate_scenario(&initiative, &risks, Scenario::Base, 85);
    assert_eq!(result.payback_months, PAYBACK_NEVER);

    // Delivery cost does not matter once profit is negative.
    initiative.delivery_cost.people = 0;
    let result = evaluate_scenario(&initiative, &risks, Scenario::Base, 85);
    assert_eq!(result.payback_months, PAYBACK_NEVER);
}

#[test]
fn positive_profit_payback_is_rounded_to_one_decimal() {
    let mut initiative = seed_initiative();
    initiative.uplift = 10.0;
    initiative.run_cost = 0.0;
    let risks = seed_risks();

    let result = evaluate_scenario(&initiative, &risks, Scenario::Base, 85);

    // annual profit = 60,000 * 0.875 * 0.8 = 42,000;
    // payback = 48,000 / 3,500 = 13.714... -> 13.7
    assert_close(result.annual_profit, 42_000.0, "annual profit");
    assert_eq!(result.payback_months, 13.7);
}

#[test]
fn zero_delivery_cost_yields_defined_roi() {
    let mut initiative = seed_initiative();
    initiative.uplift = 10.0;
    initiative.delivery_cost.people = 0;
    let risks = seed_risks();

    let result = evaluate_scenario(&initiative, &risks, Scenario::Base, 85);

    assert_eq!(result.roi12, 0.0);
    assert!(result.roi24.is_finite());
    assert!(result.roi36.is_finite());
}

#[test]
fn zero_investment_yields_zero_roi_across_the_board() {
    let mut initiative = seed_initiative();
    initiative.delivery_cost.people = 0;
    initiative.run_cost = 0.0;
    let risks = seed_risks();

    let result = evaluate_scenario(&initiative, &risks, Scenario::Base, 85);

    assert_eq!(result.roi12, 0.0);
    assert_eq!(result.roi24, 0.0);
    assert_eq!(result.roi36, 0.0);
}

#[test]
fn cashflow_has_one_entry_per_month_with_consistent_start() {
    let initiative = seed_initiative();
    let risks = seed_risks();

    let result = evaluate_scenario(&initiative, &risks, Scenario::Base, 85);

    assert_eq!(result.cumulative_cashflow.len(), 24);
    for (i, point) in result.cumulative_cashflow.iter().enumerate() {
        assert_eq!(point.month, i as u32 + 1);
        assert!(point.value.is_finite());
    }

    // First entry: -deliveryCost + first month's ramped profit
    // (3-month ramp, so coefficient 1/3; base ramp speed 1.0).
    let first_month_profit = (result.annual_profit / 12.0) * (1.0 / 3.0);
    assert_close(
        result.cumulative_cashflow[0].value,
        -48_000.0 + first_month_profit,
        "first cashflow entry",
    );
}

#[test]
fn all_three_scenarios_are_always_present() {
    let result = calculate(seed_initiative(), seed_risks(), seed_confidence(), "r-1");

    assert_eq!(result.scenarios.conservative.scenario, Scenario::Conservative);
    assert_eq!(result.scenarios.base.scenario, Scenario::Base);
    assert_eq!(result.scenarios.aggressive.scenario, Scenario::Aggressive);
    assert_eq!(result.report_id, "r-1");
    assert_eq!(result.confidence_score, 85);
}

#[test]
fn calculate_returns_even_when_no_insight_rule_fires() {
    let mut initiative = seed_initiative();
    initiative.gross_margin = 60.0;
    let mut risks = seed_risks();
    risks.time_to_market_risk = 2.0;

    let result = calculate(initiative, risks, seed_confidence(), "quiet");

    assert!(result.insights.top_drivers.is_empty());
    assert!(result.insights.critical_assumptions.is_empty());
    assert!(result.insights.dominant_risks.is_empty());
}

#[test]
fn calculation_is_idempotent_under_a_fixed_clock() {
    let created_at = Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap();
    let thresholds = InsightThresholds::default();

    let first = calculate_at(
        seed_initiative(),
        seed_risks(),
        seed_confidence(),
        "r-42",
        created_at,
        &thresholds,
    );
    let second = calculate_at(
        seed_initiative(),
        seed_risks(),
        seed_confidence(),
        "r-42",
        created_at,
        &thresholds,
    );

    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn result_echoes_inputs_untouched() {
    let initiative = seed_initiative();
    let risks = seed_risks();
    let confidence = seed_confidence();

    let result = calculate(initiative.clone(), risks, confidence, "echo");

    assert_eq!(result.initiative, initiative);
    assert_eq!(result.risks, risks);
    assert_eq!(result.confidence, confidence);
}

#[test]
fn degenerate_inputs_never_produce_nan_or_infinity() {
    let mut initiative = seed_initiative();
    initiative.reach = 0.0;
    initiative.uplift = 0.0;
    initiative.unit_value = 0.0;
    initiative.delivery_cost.people = 0;
    initiative.run_cost = 0.0;
    let risks = seed_risks();

    for scenario in Scenario::ALL {
        let result = evaluate_scenario(&initiative, &risks, scenario, 50);
        for value in [
            result.annual_profit,
            result.total_profit,
            result.contribution_margin,
            result.roi12,
            result.roi24,
            result.roi36,
            result.payback_months,
        ] {
            assert!(value.is_finite(), "{scenario:?} produced a non-finite value");
        }
    }
}
