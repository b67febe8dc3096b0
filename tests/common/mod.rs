#![allow(dead_code)]

use roicast::{
    BusinessModel, ConfidenceInputs, DataQuality, DeliveryCost, Dependencies, InitiativeInputs,
    RampUpPeriod, RiskInputs, UpliftNature,
};
use std::collections::BTreeMap;

/// The documented seed case: a SaaS churn-reduction initiative.
pub fn seed_initiative() -> InitiativeInputs {
    InitiativeInputs {
        project_name: Some("Churn reduction".to_string()),
        business_model: BusinessModel::Saas,
        baseline: 5.0,
        reach: 1000.0,
        uplift: 2.0,
        unit_value: 50.0,
        gross_margin: 80.0,
        delivery_cost: DeliveryCost {
            people: 2,
            time_months: 3.0,
            monthly_cost: 8000.0,
        },
        run_cost: 2000.0,
        ramp_up: RampUpPeriod::ThreeMonths,
        horizon: 24,
        template_inputs: BTreeMap::new(),
    }
}

pub fn seed_risks() -> RiskInputs {
    RiskInputs {
        market_risk: 2.0,
        technical_risk: 2.0,
        time_to_market_risk: 4.0,
    }
}

pub fn seed_confidence() -> ConfidenceInputs {
    ConfidenceInputs {
        data_quality: DataQuality::Measured,
        dependencies: Dependencies::OneToTwo,
        uplift_nature: UpliftNature::AbTest,
    }
}

pub fn assert_close(actual: f64, expected: f64, context: &str) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "{context}: expected {expected}, got {actual}"
    );
}
