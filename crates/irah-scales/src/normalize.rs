//! Per-scale normalization to a 0–100 risk sub-score.
//!
//! Every function here is total: raw values are clamped to the scale's
//! domain first, so out-of-range input can never propagate unclamped.

use irah_core::models::inputs::Asg;
use irah_core::models::tier::FugulinTier;

struct FugulinBand {
    /// Inclusive upper bound of the raw-total range.
    upper: u8,
    normalized: f64,
    tier: FugulinTier,
}

/// The single canonical Fugulin banding table. Both the numeric
/// normalization and the named tier come from here, so the two can
/// never disagree at a band boundary. 28 belongs to the
/// Semi-intensive band.
const FUGULIN_BANDS: [FugulinBand; 5] = [
    FugulinBand {
        upper: 17,
        normalized: 0.0,
        tier: FugulinTier::Minimal,
    },
    FugulinBand {
        upper: 22,
        normalized: 25.0,
        tier: FugulinTier::Intermediate,
    },
    FugulinBand {
        upper: 27,
        normalized: 50.0,
        tier: FugulinTier::HighDependency,
    },
    FugulinBand {
        upper: 34,
        normalized: 75.0,
        tier: FugulinTier::SemiIntensive,
    },
    FugulinBand {
        upper: u8::MAX,
        normalized: 100.0,
        tier: FugulinTier::Intensive,
    },
];

fn fugulin_band(total: u8) -> &'static FugulinBand {
    FUGULIN_BANDS
        .iter()
        .find(|band| total <= band.upper)
        .unwrap_or(&FUGULIN_BANDS[4])
}

/// Charlson: capped at 13, continuous linear mapping.
pub fn charlson(total: u8) -> f64 {
    f64::from(total.min(13)) / 13.0 * 100.0
}

/// Fugulin: piecewise-constant over the operational bands. Totals
/// below 12 stay at 0 (never extrapolated into risk).
pub fn fugulin(total: u8) -> f64 {
    fugulin_band(total).normalized
}

/// Named Fugulin tier, from the same banding table as [`fugulin`].
pub fn fugulin_tier(total: u8) -> FugulinTier {
    fugulin_band(total).tier
}

/// MRC 0–60, inverted: lower motor strength means higher risk.
pub fn mrc(raw: u8) -> f64 {
    (60.0 - f64::from(raw.min(60))) / 60.0 * 100.0
}

/// ASG categorical lookup.
pub fn asg(category: Asg) -> f64 {
    match category {
        Asg::A => 0.0,
        Asg::B => 50.0,
        Asg::C => 100.0,
    }
}

/// FOIS 1–7, strictly decreasing risk as oral intake improves.
pub fn fois(level: u8) -> f64 {
    match level.clamp(1, 7) {
        1 => 100.0,
        2 => 90.0,
        3 => 80.0,
        4 => 60.0,
        5 => 40.0,
        6 => 20.0,
        _ => 0.0,
    }
}

/// Continuous-medication count, banded.
pub fn polypharmacy(count: u16) -> f64 {
    match count {
        0..=4 => 0.0,
        5..=6 => 25.0,
        7..=9 => 50.0,
        10..=12 => 75.0,
        _ => 100.0,
    }
}
