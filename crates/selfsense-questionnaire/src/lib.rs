//! selfsense-questionnaire
//!
//! Condition catalog, risk scoring and the answer-collection session.
//! Pure computation over static data — the only I/O is loading a catalog
//! override from disk.

pub mod catalog;
pub mod error;
pub mod report;
pub mod scoring;
pub mod session;

use selfsense_core::models::Condition;

pub use catalog::Catalog;
pub use error::QuestionnaireError;
pub use scoring::{RiskScorer, score, score_complete};
pub use session::QuestionnaireSession;

/// Look up a condition in the built-in catalog.
pub fn get_condition(id: &str) -> Result<&'static Condition, QuestionnaireError> {
    Catalog::builtin().condition(id)
}
