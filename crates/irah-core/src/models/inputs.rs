use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which Fugulin domain set an assessment uses. The reduced model drops
/// the last three domains (skin-mucosa integrity, dressing, dressing
/// time). Banding is identical for both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FugulinModel {
    #[default]
    Full,
    Reduced,
}

impl FugulinModel {
    pub fn domain_count(self) -> usize {
        match self {
            FugulinModel::Full => 12,
            FugulinModel::Reduced => 9,
        }
    }
}

/// Per-domain Fugulin levels, one entry per domain of the configured
/// model, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FugulinInputs {
    pub model: FugulinModel,
    /// Ordinal level (1–4) per domain. Surplus entries are ignored;
    /// missing entries count as level 1.
    pub levels: Vec<u8>,
}

impl FugulinInputs {
    pub fn new(model: FugulinModel, levels: Vec<u8>) -> Self {
        Self { model, levels }
    }

    /// Effective level for the domain at `index`, clamped to the 1–4
    /// ordinal range. Missing entries count as level 1.
    pub fn level(&self, index: usize) -> u8 {
        self.levels.get(index).copied().unwrap_or(1).clamp(1, 4)
    }

    /// Raw Fugulin total: the sum of all domain levels of the
    /// configured model.
    pub fn total(&self) -> u8 {
        (0..self.model.domain_count()).map(|i| self.level(i)).sum()
    }
}

impl Default for FugulinInputs {
    fn default() -> Self {
        Self {
            model: FugulinModel::Full,
            levels: vec![1; FugulinModel::Full.domain_count()],
        }
    }
}

/// Charlson comorbidity checklist item. Weights live in the scale
/// catalog (`irah-scales`); this enum is only the vocabulary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Comorbidity {
    MyocardialInfarction,
    CongestiveHeartFailure,
    PeripheralVascularDisease,
    CerebrovascularDisease,
    Dementia,
    ChronicPulmonaryDisease,
    ConnectiveTissueDisease,
    PepticUlcerDisease,
    MildLiverDisease,
    DiabetesUncomplicated,
    DiabetesEndOrganDamage,
    Hemiplegia,
    ModerateSevereRenalDisease,
    SolidTumorNonMetastatic,
    Leukemia,
    Lymphoma,
    ModerateSevereLiverDisease,
    MetastaticSolidTumor,
    Aids,
}

/// Charlson inputs: the selected comorbidities plus the optional age
/// adjustment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CharlsonInputs {
    pub conditions: BTreeSet<Comorbidity>,
    /// Patient age in years, clamped to 0–120 before use.
    pub age: u8,
    /// When true, age points are added to the raw Charlson total.
    pub age_adjustment: bool,
}

/// ASG subjective global nutritional assessment category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Asg {
    #[default]
    A,
    B,
    C,
}

impl Asg {
    pub fn label(self) -> &'static str {
        match self {
            Asg::A => "A",
            Asg::B => "B",
            Asg::C => "C",
        }
    }
}

/// One patient's raw scale values for a single evaluation. The scoring
/// engine clamps every value to its domain range internally; callers
/// never need to pre-validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleInputs {
    pub fugulin: FugulinInputs,
    pub charlson: CharlsonInputs,
    /// MRC muscle strength, 0–60 (lower = weaker).
    pub mrc: u8,
    pub asg: Asg,
    /// FOIS functional oral intake, 1–7 (higher = less restricted).
    pub fois: u8,
    /// Number of continuous medications.
    pub polypharmacy: u16,
}

impl Default for ScaleInputs {
    fn default() -> Self {
        Self {
            fugulin: FugulinInputs::default(),
            charlson: CharlsonInputs::default(),
            mrc: 60,
            asg: Asg::A,
            fois: 7,
            polypharmacy: 0,
        }
    }
}
