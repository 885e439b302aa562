use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use selfsense_core::models::{Category, Condition, RiskLogic, RiskThreshold};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::error::QuestionnaireError;

/// Newest catalog layout this build understands.
pub const CURRENT_CATALOG_VERSION: u32 = 1;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_json(include_str!("../catalog/health_assessments.json"))
        .expect("embedded catalog must parse")
});

/// Every condition the app can assess plus the shared threshold table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(rename = "health_assessments")]
    pub categories: Vec<Category>,
    pub risk_logic: RiskLogic,
}

fn default_version() -> u32 {
    CURRENT_CATALOG_VERSION
}

impl Catalog {
    /// The catalog shipped with the crate, parsed once per process.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn from_json(json: &str) -> Result<Self, QuestionnaireError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        if catalog.version > CURRENT_CATALOG_VERSION {
            return Err(QuestionnaireError::Catalog(format!(
                "catalog version {} is newer than this build supports ({CURRENT_CATALOG_VERSION})",
                catalog.version
            )));
        }
        Ok(catalog)
    }

    /// Read a catalog override from disk. Any configuration issue is
    /// logged and the first one is returned as the error.
    pub fn load(path: &Path) -> Result<Self, QuestionnaireError> {
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents)?;

        let issues = catalog.validate();
        for issue in &issues {
            tracing::warn!(
                path = %path.display(),
                condition = issue.condition_id.as_deref().unwrap_or("-"),
                "{issue}"
            );
        }
        if let Some(issue) = issues.into_iter().next() {
            return Err(issue.into());
        }

        tracing::info!(
            path = %path.display(),
            version = catalog.version,
            conditions = catalog.conditions().count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// All conditions in category order.
    pub fn conditions(&self) -> impl Iterator<Item = &Condition> {
        self.categories.iter().flat_map(|c| &c.conditions)
    }

    /// Look up a condition by id. Unknown ids are an input error, never a
    /// default condition.
    pub fn condition(&self, id: &str) -> Result<&Condition, QuestionnaireError> {
        self.conditions()
            .find(|c| c.id == id)
            .ok_or_else(|| QuestionnaireError::unknown_condition(id))
    }

    pub fn category_of(&self, condition_id: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|cat| cat.conditions.iter().any(|c| c.id == condition_id))
    }

    /// Check the invariants scoring relies on but does not enforce.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let total = self.risk_logic.total_possible_score;

        let mut seen = HashSet::new();
        for condition in self.conditions() {
            let cid = Some(condition.id.clone());
            if !seen.insert(condition.id.as_str()) {
                issues.push(CatalogIssue {
                    condition_id: cid.clone(),
                    kind: IssueKind::DuplicateCondition,
                    message: format!("condition '{}' is defined more than once", condition.id),
                });
            }
            if condition.questions.is_empty() {
                issues.push(CatalogIssue {
                    condition_id: cid.clone(),
                    kind: IssueKind::EmptyCondition,
                    message: format!("condition '{}' has no questions", condition.id),
                });
            }

            let mut question_ids = HashSet::new();
            for question in &condition.questions {
                if !question_ids.insert(question.id) {
                    issues.push(CatalogIssue {
                        condition_id: cid.clone(),
                        kind: IssueKind::DuplicateQuestion,
                        message: format!(
                            "condition '{}' repeats question id {}",
                            condition.id, question.id
                        ),
                    });
                }
                if question.options.is_empty() {
                    issues.push(CatalogIssue {
                        condition_id: cid.clone(),
                        kind: IssueKind::EmptyQuestion,
                        message: format!(
                            "question {} of '{}' has no options",
                            question.id, condition.id
                        ),
                    });
                }
            }

            if condition.max_score() > total {
                issues.push(CatalogIssue {
                    condition_id: cid,
                    kind: IssueKind::ExceedsTotal,
                    message: format!(
                        "condition '{}' can score {} but the catalog total is {total}",
                        condition.id,
                        condition.max_score()
                    ),
                });
            }
        }

        issues.extend(threshold_issues(&self.risk_logic));
        issues
    }
}

fn threshold_issues(logic: &RiskLogic) -> Vec<CatalogIssue> {
    let issue = |kind, message: String| CatalogIssue {
        condition_id: None,
        kind,
        message,
    };

    // checked in score order; the table may be stored in any order
    let mut thresholds: Vec<&RiskThreshold> = logic.thresholds.iter().collect();
    thresholds.sort_by_key(|t| (t.range_min, t.range_max));
    let (Some(first), Some(last)) = (thresholds.first(), thresholds.last()) else {
        return vec![issue(
            IssueKind::EmptyThresholds,
            "threshold table is empty".to_string(),
        )];
    };

    let mut issues = Vec::new();
    for t in &thresholds {
        if t.range_min > t.range_max {
            issues.push(issue(
                IssueKind::InvertedRange,
                format!("'{}' range [{}, {}] is inverted", t.level, t.range_min, t.range_max),
            ));
        }
    }

    for pair in thresholds.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if next.range_min <= prev.range_max {
            issues.push(issue(
                IssueKind::ThresholdOverlap,
                format!("'{}' overlaps '{}'", next.level, prev.level),
            ));
        } else if next.range_min > prev.range_max.saturating_add(1) {
            issues.push(issue(
                IssueKind::ThresholdGap,
                format!(
                    "scores {}..{} fall between '{}' and '{}'",
                    prev.range_max + 1,
                    next.range_min - 1,
                    prev.level,
                    next.level
                ),
            ));
        }
    }

    if first.range_min != 0 {
        issues.push(issue(
            IssueKind::UncoveredStart,
            format!("'{}' starts at {} instead of 0", first.level, first.range_min),
        ));
    }
    if last.range_max < logic.total_possible_score {
        issues.push(issue(
            IssueKind::UncoveredEnd,
            format!(
                "'{}' ends at {} but scores reach {}",
                last.level, last.range_max, logic.total_possible_score
            ),
        ));
    }
    issues
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum IssueKind {
    DuplicateCondition,
    EmptyCondition,
    DuplicateQuestion,
    EmptyQuestion,
    ExceedsTotal,
    EmptyThresholds,
    InvertedRange,
    ThresholdOverlap,
    ThresholdGap,
    UncoveredStart,
    UncoveredEnd,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct CatalogIssue {
    pub condition_id: Option<String>,
    pub kind: IssueKind,
    pub message: String,
}
