// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod errors;
pub mod io;
pub mod storage;
pub mod templates;
pub mod validation;

// Re-export commonly used types
pub use crate::engine::types::{
    BusinessModel, CalculationResult, CaseFile, CashflowPoint, ConfidenceInputs, DataQuality,
    DeliveryCost, Dependencies, InitiativeInputs, Insights, RampUpPeriod, RiskInputs, Scenario,
    ScenarioResult, ScenarioSet, UpliftNature, PAYBACK_NEVER,
};

pub use crate::engine::{calculate, calculate_at};

pub use crate::engine::confidence::confidence_score;
pub use crate::engine::insights::generate_insights;
pub use crate::engine::ramp::ramp_coefficients;
pub use crate::engine::scenario::{
    evaluate_scenario, risk_penalty, scenario_multipliers, ScenarioMultipliers,
};

pub use crate::config::{InsightThresholds, RoicastConfig};
pub use crate::errors::{PreconditionViolation, RoicastError};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::storage::{InMemoryStore, JsonFileStore, ReportStore};
pub use crate::templates::{all_templates, get_template, TemplateConfig};
pub use crate::validation::{check_preconditions, validate_all_fields, validate_field};
