//! Weighted aggregation of the six normalized sub-scores into the
//! IRAH–Premier composite, plus the trigger override and tier
//! classification.

use irah_core::models::inputs::ScaleInputs;
use irah_core::models::score::{ScaleScore, ScoreBreakdown, ScoreResult};
use irah_core::models::tier::RiskTier;

use crate::catalog::charlson;
use crate::normalize;

pub const WEIGHT_CHARLSON: f64 = 0.20;
pub const WEIGHT_FUGULIN: f64 = 0.20;
pub const WEIGHT_MRC: f64 = 0.15;
pub const WEIGHT_ASG: f64 = 0.15;
pub const WEIGHT_FOIS: f64 = 0.15;
pub const WEIGHT_POLYPHARMACY: f64 = 0.15;

/// Round to one decimal, half away from zero (`f64::round` semantics).
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn weighted(normalized: f64, weight: f64) -> ScaleScore {
    ScaleScore {
        normalized,
        weight,
        contribution: normalized * weight,
    }
}

/// Tier thresholds over a 0–100 score: ≥67 High, ≥34 Moderate,
/// otherwise Low. Also applied to the ward mean for the global
/// complexity tier.
pub fn risk_tier(score: f64) -> RiskTier {
    if score >= 67.0 {
        RiskTier::High
    } else if score >= 34.0 {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    }
}

/// Final classification: the trigger forces High regardless of the
/// composite; otherwise the threshold table decides.
pub fn classify(composite: f64, trigger: bool) -> RiskTier {
    if trigger {
        RiskTier::High
    } else {
        risk_tier(composite)
    }
}

/// Evaluate one patient's raw inputs into the full score result.
///
/// Pure and deterministic: no hidden state, callers own re-invocation
/// timing. All clamping happens here.
pub fn evaluate(inputs: &ScaleInputs) -> ScoreResult {
    let fugulin_total = inputs.fugulin.total();

    let charlson_base = charlson::base_total(&inputs.charlson.conditions);
    let charlson_age_points = if inputs.charlson.age_adjustment {
        charlson::age_points(inputs.charlson.age)
    } else {
        0
    };
    let charlson_total = charlson_base + charlson_age_points;

    let mrc = inputs.mrc.min(60);
    let fois = inputs.fois.clamp(1, 7);
    let polypharmacy = inputs.polypharmacy;

    let breakdown = ScoreBreakdown {
        charlson: weighted(normalize::charlson(charlson_total), WEIGHT_CHARLSON),
        fugulin: weighted(normalize::fugulin(fugulin_total), WEIGHT_FUGULIN),
        mrc: weighted(normalize::mrc(mrc), WEIGHT_MRC),
        asg: weighted(normalize::asg(inputs.asg), WEIGHT_ASG),
        fois: weighted(normalize::fois(fois), WEIGHT_FOIS),
        polypharmacy: weighted(normalize::polypharmacy(polypharmacy), WEIGHT_POLYPHARMACY),
    };

    let trigger = fois <= 3 || polypharmacy >= 13 || mrc <= 35;

    let composite = round1(
        breakdown.charlson.contribution
            + breakdown.fugulin.contribution
            + breakdown.mrc.contribution
            + breakdown.asg.contribution
            + breakdown.fois.contribution
            + breakdown.polypharmacy.contribution,
    );

    ScoreResult {
        fugulin_total,
        fugulin_tier: normalize::fugulin_tier(fugulin_total),
        charlson_base,
        charlson_age_points,
        charlson_total,
        breakdown,
        trigger,
        composite,
        tier: classify(composite, trigger),
    }
}
