use thiserror::Error;

use crate::catalog::CatalogIssue;

#[derive(Debug, Error)]
pub enum QuestionnaireError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("incomplete answers: {answered} of {expected} questions answered")]
    IncompleteAnswers { answered: usize, expected: usize },

    #[error("invalid catalog: {0}")]
    Catalog(String),

    #[error("catalog check failed: {0}")]
    CatalogIssue(#[from] CatalogIssue),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuestionnaireError {
    pub fn unknown_condition(id: &str) -> Self {
        Self::InvalidInput(format!("unknown condition: {id}"))
    }
}
