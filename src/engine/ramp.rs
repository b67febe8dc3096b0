use super::types::RampUpPeriod;

/// Adoption coefficients for each simulated month, in [0, 1].
///
/// Linear ramp over the period's window: month index `i` (0-based) gets
/// `(i + 1) / W` inside the window and 1.0 after it. A horizon shorter
/// than the window never reaches 1.0, which captures an initiative that
/// did not fully ramp before the measurement window ended.
pub fn ramp_coefficients(period: RampUpPeriod, months: u32) -> Vec<f64> {
    match period.window() {
        None => vec![1.0; months as usize],
        Some(window) => (0..months)
            .map(|i| {
                if i < window {
                    (i + 1) as f64 / window as f64
                } else {
                    1.0
                }
            })
            .collect(),
    }
}
