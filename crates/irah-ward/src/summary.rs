use serde::{Deserialize, Serialize};
use ts_rs::TS;

use irah_core::models::patient::WARD_BEDS;
use irah_core::models::tier::RiskTier;
use irah_scales::evaluate::risk_tier;

use crate::roster::Roster;

/// Aggregate view of the unit, recomputed from scratch on every call.
/// With at most 20 beds there is nothing to cache, and full
/// recomputation stays correct under any edit order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitSummary {
    pub occupied: usize,
    pub capacity: u8,
    /// Mean composite, one decimal. `None` on an empty roster.
    pub mean: Option<f64>,
    /// Median composite, one decimal. `None` on an empty roster.
    pub median: Option<f64>,
    /// Sum of composites ("carga total").
    pub total_load: f64,
    pub low: usize,
    pub moderate: usize,
    pub high: usize,
    /// Tier-threshold function applied to the mean composite.
    pub global_complexity: Option<RiskTier>,
    pub generated_at: jiff::Timestamp,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl UnitSummary {
    pub fn from_roster(roster: &Roster) -> Self {
        let mut composites: Vec<f64> = roster.list().map(|r| r.score.composite).collect();
        composites.sort_by(|a, b| a.total_cmp(b));

        let occupied = composites.len();
        let total_load = round1(composites.iter().sum());

        let (mean, median) = if occupied == 0 {
            (None, None)
        } else {
            let mean = round1(composites.iter().sum::<f64>() / occupied as f64);
            let mid = occupied / 2;
            let median = if occupied % 2 == 1 {
                composites[mid]
            } else {
                (composites[mid - 1] + composites[mid]) / 2.0
            };
            (Some(mean), Some(round1(median)))
        };

        let mut low = 0;
        let mut moderate = 0;
        let mut high = 0;
        for record in roster.list() {
            match record.score.tier {
                RiskTier::Low => low += 1,
                RiskTier::Moderate => moderate += 1,
                RiskTier::High => high += 1,
            }
        }

        Self {
            occupied,
            capacity: WARD_BEDS,
            mean,
            median,
            total_load,
            low,
            moderate,
            high,
            global_complexity: mean.map(risk_tier),
            generated_at: jiff::Timestamp::now(),
        }
    }

    /// "3/20"-style occupancy, as shown in reports.
    pub fn occupancy(&self) -> String {
        format!("{}/{}", self.occupied, self.capacity)
    }

    /// Risk-tier distribution line, as shown in reports.
    pub fn distribution(&self) -> String {
        format!(
            "Baixo: {} | Moderado: {} | Alto: {}",
            self.low, self.moderate, self.high
        )
    }
}
