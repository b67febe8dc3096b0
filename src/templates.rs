//! Template catalog: per business model, the numeric input fields the
//! wizard collects and the default assumptions (gross margin, hourly rate,
//! horizon) seeded into a new case. The engine consumes only the resolved
//! values; this catalog is the contract with form-layer collaborators.

use crate::engine::types::BusinessModel;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Number,
    Percentage,
    Currency,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputField {
    pub id: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub kind: FieldKind,
    pub default_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub help_text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssumptionDefaults {
    pub gross_margin: f64,
    pub hourly_rate: f64,
    /// Months.
    pub horizon: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    pub id: BusinessModel,
    pub name: &'static str,
    pub description: &'static str,
    pub inputs: Vec<InputField>,
    pub assumptions_defaults: AssumptionDefaults,
}

pub fn get_template(id: BusinessModel) -> TemplateConfig {
    match id {
        BusinessModel::Saas => saas_template(),
        BusinessModel::Ecommerce => ecommerce_template(),
        BusinessModel::B2bSales => b2b_sales_template(),
        BusinessModel::CostReduction => cost_reduction_template(),
    }
}

pub fn all_templates() -> Vec<TemplateConfig> {
    BusinessModel::ALL.iter().map(|&id| get_template(id)).collect()
}

fn saas_template() -> TemplateConfig {
    TemplateConfig {
        id: BusinessModel::Saas,
        name: "SaaS (MRR/ARR)",
        description: "For SaaS products focused on reducing churn or improving retention",
        inputs: vec![
            InputField {
                id: "payingCustomers",
                label: "Current paying customers",
                unit: "customers",
                kind: FieldKind::Number,
                default_value: 1000.0,
                min: Some(1.0),
                max: None,
                help_text: "Total number of active paying customers",
            },
            InputField {
                id: "currentMRR",
                label: "Current MRR",
                unit: "EUR",
                kind: FieldKind::Currency,
                default_value: 50000.0,
                min: Some(0.0),
                max: None,
                help_text: "Monthly recurring revenue",
            },
            InputField {
                id: "currentChurn",
                label: "Current monthly churn",
                unit: "%",
                kind: FieldKind::Percentage,
                default_value: 5.0,
                min: Some(0.0),
                max: Some(100.0),
                help_text: "Percentage of customers churning each month",
            },
            InputField {
                id: "churnReduction",
                label: "Expected churn reduction",
                unit: "pp",
                kind: FieldKind::Percentage,
                default_value: 2.0,
                min: Some(0.0),
                max: Some(100.0),
                help_text: "Percentage points of churn reduction (e.g., from 5% to 3% = 2pp)",
            },
            InputField {
                id: "arpa",
                label: "ARPA (Average Revenue Per Account)",
                unit: "EUR",
                kind: FieldKind::Currency,
                default_value: 50.0,
                min: Some(0.0),
                max: None,
                help_text: "Average monthly revenue per customer",
            },
            InputField {
                id: "grossMargin",
                label: "Gross margin",
                unit: "%",
                kind: FieldKind::Percentage,
                default_value: 80.0,
                min: Some(0.0),
                max: Some(100.0),
                help_text: "Gross profit margin",
            },
        ],
        assumptions_defaults: AssumptionDefaults {
            gross_margin: 80.0,
            hourly_rate: 600.0,
            horizon: 24,
        },
    }
}

fn ecommerce_template() -> TemplateConfig {
    TemplateConfig {
        id: BusinessModel::Ecommerce,
        name: "E-commerce",
        description: "For e-commerce products focused on improving conversion or AOV",
        inputs: vec![
            InputField {
                id: "monthlyTraffic",
                label: "Monthly traffic",
                unit: "visitors",
                kind: FieldKind::Number,
                default_value: 100000.0,
                min: Some(1.0),
                max: None,
                help_text: "Monthly website visitors",
            },
            InputField {
                id: "currentConversion",
                label: "Current conversion rate",
                unit: "%",
                kind: FieldKind::Percentage,
                default_value: 2.0,
                min: Some(0.0),
                max: Some(100.0),
                help_text: "Percentage of visitors who make a purchase",
            },
            InputField {
                id: "conversionUplift",
                label: "Expected conversion uplift",
                unit: "pp",
                kind: FieldKind::Percentage,
                default_value: 0.5,
                min: Some(0.0),
                max: Some(100.0),
                help_text: "Percentage points increase in conversion (e.g., from 2% to 2.5% = 0.5pp)",
            },
            InputField {
                id: "aov",
                label: "Average Order Value (AOV)",
                unit: "EUR",
                kind: FieldKind::Currency,
                default_value: 80.0,
                min: Some(0.0),
                max: None,
                help_text: "Average value per order",
            },
            InputField {
                id: "grossMargin",
                label: "Gross margin",
                unit: "%",
                kind: FieldKind::Percentage,
                default_value: 40.0,
                min: Some(0.0),
                max: Some(100.0),
                help_text: "Gross profit margin",
            },
        ],
        assumptions_defaults: AssumptionDefaults {
            gross_margin: 40.0,
            hourly_rate: 600.0,
            horizon: 24,
        },
    }
}

fn b2b_sales_template() -> TemplateConfig {
    TemplateConfig {
        id: BusinessModel::B2bSales,
        name: "B2B Sales-led",
        description: "For B2B products focused on improving pipeline conversion or win rate",
        inputs: vec![
            InputField {
                id: "monthlyLeads",
                label: "Monthly qualified leads (SQL)",
                unit: "leads",
                kind: FieldKind::Number,
                default_value: 200.0,
                min: Some(1.0),
                max: None,
                help_text: "Number of sales-qualified leads per month",
            },
            InputField {
                id: "currentWinRate",
                label: "Current win rate",
                unit: "%",
                kind: FieldKind::Percentage,
                default_value: 20.0,
                min: Some(0.0),
                max: Some(100.0),
                help_text: "Percentage of leads that convert to customers",
            },
            InputField {
                id: "winRateUplift",
                label: "Expected win rate uplift",
                unit: "pp",
                kind: FieldKind::Percentage,
                default_value: 5.0,
                min: Some(0.0),
                max: Some(100.0),
                help_text: "Percentage points increase in win rate (e.g., from 20% to 25% = 5pp)",
            },
            InputField {
                id: "acv",
                label: "ACV (Annual Contract Value)",
                unit: "EUR",
                kind: FieldKind::Currency,
                default_value: 50000.0,
                min: Some(0.0),
                max: None,
                help_text: "Average annual contract value",
            },
            InputField {
                id: "grossMargin",
                label: "Gross margin",
                unit: "%",
                kind: FieldKind::Percentage,
                default_value: 70.0,
                min: Some(0.0),
                max: Some(100.0),
                help_text: "Gross profit margin",
            },
        ],
        assumptions_defaults: AssumptionDefaults {
            gross_margin: 70.0,
            hourly_rate: 700.0,
            horizon: 24,
        },
    }
}

fn cost_reduction_template() -> TemplateConfig {
    TemplateConfig {
        id: BusinessModel::CostReduction,
        name: "Cost Reduction / Automation",
        description: "For automation and productivity improvements",
        inputs: vec![
            InputField {
                id: "monthlyVolume",
                label: "Monthly volume",
                unit: "tasks/tickets",
                kind: FieldKind::Number,
                default_value: 5000.0,
                min: Some(1.0),
                max: None,
                help_text: "Number of tasks, tickets, or operations per month",
            },
            InputField {
                id: "currentAHT",
                label: "Current average handling time",
                unit: "minutes",
                kind: FieldKind::Number,
                default_value: 15.0,
                min: Some(0.0),
                max: None,
                help_text: "Average time to complete one task",
            },
            InputField {
                id: "timeReduction",
                label: "Expected time reduction",
                unit: "%",
                kind: FieldKind::Percentage,
                default_value: 30.0,
                min: Some(0.0),
                max: Some(100.0),
                help_text: "Percentage reduction in handling time",
            },
            InputField {
                id: "hourlyRate",
                label: "Loaded hourly rate",
                unit: "EUR/hour",
                kind: FieldKind::Currency,
                default_value: 50.0,
                min: Some(0.0),
                max: None,
                help_text: "Fully-loaded cost per hour (salary + benefits + overhead)",
            },
            InputField {
                id: "grossMargin",
                label: "Cost recovery rate",
                unit: "%",
                kind: FieldKind::Percentage,
                default_value: 100.0,
                min: Some(0.0),
                max: Some(100.0),
                help_text: "Percentage of saved costs that can be recovered (100% = pure savings)",
            },
        ],
        assumptions_defaults: AssumptionDefaults {
            gross_margin: 100.0,
            hourly_rate: 50.0,
            horizon: 24,
        },
    }
}
