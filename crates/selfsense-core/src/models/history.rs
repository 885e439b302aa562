use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::assessment::Assessment;

/// A persisted summary of one completed assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub condition_id: String,
    pub condition_name: String,
    pub date: Date,
    pub recorded_at: Timestamp,
    pub risk_level: String,
    pub total_score: u32,
    pub max_score: u32,
}

impl HistoryEntry {
    /// Build an entry dated in the system time zone.
    pub fn from_assessment(assessment: &Assessment, recorded_at: Timestamp) -> Self {
        Self::from_assessment_in(assessment, recorded_at, &TimeZone::system())
    }

    pub fn from_assessment_in(
        assessment: &Assessment,
        recorded_at: Timestamp,
        tz: &TimeZone,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            condition_id: assessment.condition_id.clone(),
            condition_name: assessment.condition_name.clone(),
            date: recorded_at.to_zoned(tz.clone()).date(),
            recorded_at,
            risk_level: assessment.risk_level.clone(),
            total_score: assessment.total_score,
            max_score: assessment.max_possible_score,
        }
    }

    /// Two entries with the same key describe the same submission.
    pub fn dedup_key(&self) -> (&str, Timestamp) {
        (&self.condition_id, self.recorded_at)
    }
}
