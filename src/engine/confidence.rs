use super::types::{ConfidenceInputs, DataQuality, Dependencies, UpliftNature};

/// Score the confidence inputs on a 0-100 scale.
///
/// Starts at 100 and subtracts a fixed penalty per category. The three
/// penalties sum to at most 100, so the floor is reachable only at the
/// worst combination (estimated data, 3+ dependencies, pure intuition).
pub fn confidence_score(inputs: &ConfidenceInputs) -> u32 {
    let mut score: i32 = 100;

    score -= match inputs.data_quality {
        DataQuality::Measured => 0,
        DataQuality::Partial => 20,
        DataQuality::Estimated => 40,
    };

    score -= match inputs.dependencies {
        Dependencies::None => 0,
        Dependencies::OneToTwo => 15,
        Dependencies::ThreeOrMore => 30,
    };

    score -= match inputs.uplift_nature {
        UpliftNature::AbTest => 0,
        UpliftNature::Analogy => 15,
        UpliftNature::Intuition => 30,
    };

    score.clamp(0, 100) as u32
}
