use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A score range mapped to a named risk tier and advisory message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskThreshold {
    pub level: String,
    pub range_min: u32,
    pub range_max: u32,
    #[serde(default)]
    pub color_code: String,
    pub message: String,
}

impl RiskThreshold {
    /// Inclusive on both ends.
    pub fn contains(&self, score: u32) -> bool {
        self.range_min <= score && score <= self.range_max
    }
}

/// The threshold table shared by every condition in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskLogic {
    pub total_possible_score: u32,
    pub thresholds: Vec<RiskThreshold>,
}

impl RiskLogic {
    /// First threshold whose range contains `score`, falling back to the
    /// first threshold in the table. `None` only for an empty table.
    pub fn threshold_for(&self, score: u32) -> Option<&RiskThreshold> {
        self.thresholds
            .iter()
            .find(|t| t.contains(score))
            .or_else(|| self.thresholds.first())
    }
}
