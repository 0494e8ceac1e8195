use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::tier::{FugulinTier, RiskTier};

/// One scale's slice of the composite: normalized sub-score, its fixed
/// weight, and the weighted contribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleScore {
    /// Normalized value in [0, 100].
    pub normalized: f64,
    pub weight: f64,
    /// `normalized * weight`, unrounded.
    pub contribution: f64,
}

/// Per-scale breakdown of the composite, in weight-table order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBreakdown {
    pub charlson: ScaleScore,
    pub fugulin: ScaleScore,
    pub mrc: ScaleScore,
    pub asg: ScaleScore,
    pub fois: ScaleScore,
    pub polypharmacy: ScaleScore,
}

/// The full result of one evaluation. Derived and immutable: always
/// recomputed from a `ScaleInputs`, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub fugulin_total: u8,
    pub fugulin_tier: FugulinTier,
    /// Charlson comorbidity sum before age points.
    pub charlson_base: u8,
    pub charlson_age_points: u8,
    /// `charlson_base + charlson_age_points`, before the [0, 13] cap.
    pub charlson_total: u8,
    pub breakdown: ScoreBreakdown,
    /// High-risk trigger: FOIS ≤ 3, polypharmacy ≥ 13, or MRC ≤ 35.
    pub trigger: bool,
    /// IRAH–Premier composite, 0–100, one decimal. The trigger never
    /// alters this number, only the tier.
    pub composite: f64,
    pub tier: RiskTier,
}
