use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Final IRAH–Premier risk classification for one patient, and the
/// ward-level global complexity tier (same three bands).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Label used in exports and reports. Downstream consumers rely on
    /// these exact strings, so they stay in the institution's language.
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Baixo",
            RiskTier::Moderate => "Moderado",
            RiskTier::High => "Alto",
        }
    }
}

/// Named Fugulin dependency tier. Derived from the same banding table
/// as the numeric Fugulin normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FugulinTier {
    Minimal,
    Intermediate,
    HighDependency,
    SemiIntensive,
    Intensive,
}

impl FugulinTier {
    pub fn label(self) -> &'static str {
        match self {
            FugulinTier::Minimal => "Mínimo",
            FugulinTier::Intermediate => "Intermediário",
            FugulinTier::HighDependency => "Alta dependência",
            FugulinTier::SemiIntensive => "Semi-intensivo",
            FugulinTier::Intensive => "Intensivo",
        }
    }
}
