use super::types::{ConfidenceInputs, DataQuality, InitiativeInputs, Insights, RiskInputs, UpliftNature};
use crate::config::InsightThresholds;
use im::Vector;

const MAX_ENTRIES: usize = 3;

/// Rule-based advisory text derived from raw inputs only; scenario
/// results never feed back into it. Append order is fixed and each list
/// keeps its first three entries, so the output is fully deterministic.
pub fn generate_insights(
    initiative: &InitiativeInputs,
    risks: &RiskInputs,
    confidence: &ConfidenceInputs,
    thresholds: &InsightThresholds,
) -> Insights {
    Insights {
        top_drivers: top_drivers(initiative, thresholds),
        critical_assumptions: critical_assumptions(initiative, confidence, thresholds),
        dominant_risks: dominant_risks(risks, thresholds),
    }
}

fn top_drivers(initiative: &InitiativeInputs, thresholds: &InsightThresholds) -> Vector<String> {
    let mut drivers = Vector::new();

    if initiative.uplift > thresholds.uplift_driver {
        drivers.push_back(format!(
            "High uplift expectation ({}%)",
            fmt_value(initiative.uplift)
        ));
    }
    if initiative.gross_margin > thresholds.margin_driver {
        drivers.push_back(format!(
            "Strong gross margin ({}%)",
            fmt_value(initiative.gross_margin)
        ));
    }
    if initiative.reach > thresholds.reach_driver {
        drivers.push_back(format!("Large reach ({} units)", fmt_grouped(initiative.reach)));
    }

    cap(drivers)
}

fn critical_assumptions(
    initiative: &InitiativeInputs,
    confidence: &ConfidenceInputs,
    thresholds: &InsightThresholds,
) -> Vector<String> {
    let mut assumptions = Vector::new();

    if confidence.data_quality == DataQuality::Estimated {
        assumptions.push_back("Data quality is estimated - validate with real metrics".to_string());
    }
    if confidence.uplift_nature == UpliftNature::Intuition {
        assumptions.push_back("Uplift based on intuition - run A/B test to validate".to_string());
    }
    if initiative.delivery_cost.time_months > thresholds.long_delivery_months {
        assumptions.push_back(format!(
            "Long delivery timeline ({} months) - ensure scope control",
            fmt_value(initiative.delivery_cost.time_months)
        ));
    }

    cap(assumptions)
}

fn dominant_risks(risks: &RiskInputs, thresholds: &InsightThresholds) -> Vector<String> {
    let dimensions = [
        ("Market risk", risks.market_risk),
        ("Technical risk", risks.technical_risk),
        ("Time-to-market risk", risks.time_to_market_risk),
    ];

    let mut dominant = Vector::new();
    for (name, value) in dimensions {
        // Risk scores live on a 1-5 scale; 4+ marks a dominant risk.
        if value >= thresholds.dominant_risk {
            dominant.push_back(format!("{} is high ({}/5)", name, fmt_value(value)));
        }
    }

    cap(dominant)
}

// im::Vector::truncate asserts len <= self.len(), so the cap must only
// apply to over-full lists.
fn cap(mut entries: Vector<String>) -> Vector<String> {
    if entries.len() > MAX_ENTRIES {
        entries.truncate(MAX_ENTRIES);
    }
    entries
}

/// Render a numeric input the way it was typed: no trailing ".0" for
/// whole numbers, full precision otherwise.
fn fmt_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Whole-number rendering with thousands separators ("15,000").
fn fmt_grouped(value: f64) -> String {
    let whole = value.trunc() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_value_drops_trailing_zero() {
        assert_eq!(fmt_value(25.0), "25");
        assert_eq!(fmt_value(7.5), "7.5");
    }

    #[test]
    fn cap_leaves_short_lists_untouched() {
        assert_eq!(cap(Vector::new()), Vector::<String>::new());

        let one: Vector<String> = Vector::unit("only".to_string());
        assert_eq!(cap(one.clone()), one);

        let four: Vector<String> = (0..4).map(|i| i.to_string()).collect();
        assert_eq!(cap(four).len(), MAX_ENTRIES);
    }

    #[test]
    fn fmt_grouped_inserts_separators() {
        assert_eq!(fmt_grouped(15000.0), "15,000");
        assert_eq!(fmt_grouped(999.0), "999");
        assert_eq!(fmt_grouped(1234567.0), "1,234,567");
    }
}
