use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One selectable answer to a question and its risk contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub text: String,
    pub score: u32,
}

/// A single assessment prompt. Option order is display order only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: u32,
    #[serde(rename = "question_text")]
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Highest score any option of this question can contribute.
    pub fn max_score(&self) -> u32 {
        self.options.iter().map(|o| o.score).max().unwrap_or(0)
    }
}

/// A named health topic with its own question set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Condition {
    pub id: String,
    pub name: String,
    pub questions: Vec<Question>,
}

impl Condition {
    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Sum of every question's maximum option score.
    pub fn max_score(&self) -> u32 {
        self.questions.iter().map(Question::max_score).sum()
    }
}

/// Display grouping of conditions (e.g. "Chronic Condition"). Has no
/// effect on scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    #[serde(rename = "category")]
    pub name: String,
    pub conditions: Vec<Condition>,
}
