use proptest::prelude::*;
use roicast::{ramp_coefficients, risk_penalty, RampUpPeriod, RiskInputs};

#[test]
fn instant_is_a_constant_sequence_of_ones() {
    for months in [1u32, 6, 24, 60] {
        let coeffs = ramp_coefficients(RampUpPeriod::Instant, months);
        assert_eq!(coeffs.len(), months as usize);
        assert!(coeffs.iter().all(|&c| c == 1.0));
    }
}

#[test]
fn three_month_ramp_reaches_exactly_one_at_month_three() {
    let coeffs = ramp_coefficients(RampUpPeriod::ThreeMonths, 3);
    assert_eq!(coeffs[2], 1.0);
}

#[test]
fn six_month_ramp_with_two_month_horizon_never_reaches_one() {
    let coeffs = ramp_coefficients(RampUpPeriod::SixMonths, 2);
    assert_eq!(coeffs.len(), 2);
    assert!(coeffs.iter().all(|&c| c < 1.0));
}

fn any_period() -> impl Strategy<Value = RampUpPeriod> {
    prop_oneof![
        Just(RampUpPeriod::Instant),
        Just(RampUpPeriod::ThreeMonths),
        Just(RampUpPeriod::SixMonths),
        Just(RampUpPeriod::TwelveMonths),
    ]
}

proptest! {
    #[test]
    fn coefficients_are_bounded_and_nondecreasing(period in any_period(), months in 1u32..=60) {
        let coeffs = ramp_coefficients(period, months);
        prop_assert_eq!(coeffs.len(), months as usize);
        for window in coeffs.windows(2) {
            prop_assert!(window[0] <= window[1]);
        }
        for &c in &coeffs {
            prop_assert!(c > 0.0 && c <= 1.0);
        }
    }

    #[test]
    fn full_ramp_is_reached_exactly_when_horizon_covers_the_window(
        period in any_period(),
        months in 1u32..=60,
    ) {
        let coeffs = ramp_coefficients(period, months);
        let window = period.window().unwrap_or(0);
        let reaches_one = coeffs.last().map(|&c| c == 1.0).unwrap_or(false);
        prop_assert_eq!(reaches_one, months >= window);
    }

    #[test]
    fn risk_penalty_stays_in_unit_interval(
        market in 1.0f64..=5.0,
        technical in 1.0f64..=5.0,
        time_to_market in 1.0f64..=5.0,
        exponent in prop_oneof![Just(0.7f64), Just(1.0), Just(1.3)],
    ) {
        let risks = RiskInputs {
            market_risk: market,
            technical_risk: technical,
            time_to_market_risk: time_to_market,
        };
        let penalty = risk_penalty(&risks, exponent);
        prop_assert!(penalty > 0.0 && penalty <= 1.0);
    }
}
