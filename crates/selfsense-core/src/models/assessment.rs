use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Option scores at or above this are flagged as risk factors.
pub const MODERATE_CUTOFF: u32 = 5;

/// Option scores at or above this are flagged as high severity.
pub const HIGH_CUTOFF: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Moderate,
    High,
}

impl Severity {
    /// Severity of a single answer, or `None` below [`MODERATE_CUTOFF`].
    pub fn for_score(score: u32) -> Option<Self> {
        if score >= HIGH_CUTOFF {
            Some(Self::High)
        } else if score >= MODERATE_CUTOFF {
            Some(Self::Moderate)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

/// An answered question whose score met the moderate cutoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskFactor {
    pub question: String,
    pub answer: String,
    pub severity: Severity,
}

/// The computed output of scoring a questionnaire. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub condition_id: String,
    pub condition_name: String,
    pub total_score: u32,
    pub risk_level: String,
    pub message: String,
    pub color_code: String,
    pub risk_factors: Vec<RiskFactor>,
    pub max_possible_score: u32,
}

impl Assessment {
    pub fn tier(&self) -> RiskTier {
        RiskTier::from_level(&self.risk_level)
    }
}

/// The three result branches an assessment is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Exact match on the threshold level; anything unrecognised is
    /// routed to [`RiskTier::High`].
    pub fn from_level(level: &str) -> Self {
        match level {
            "Low Risk" => Self::Low,
            "Moderate Risk" => Self::Moderate,
            _ => Self::High,
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Self::Low => "Low risk",
            Self::Moderate => "Moderate risk",
            Self::High => "High risk",
        }
    }
}
