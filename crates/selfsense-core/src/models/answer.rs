use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::condition::AnswerOption;

/// Chosen option per question id. A question is answered iff it has an
/// entry; answering again replaces the previous choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answers(BTreeMap<u32, AnswerOption>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the answer for `question_id`, returning the one it replaced.
    pub fn insert(&mut self, question_id: u32, option: AnswerOption) -> Option<AnswerOption> {
        self.0.insert(question_id, option)
    }

    pub fn get(&self, question_id: u32) -> Option<&AnswerOption> {
        self.0.get(&question_id)
    }

    pub fn is_answered(&self, question_id: u32) -> bool {
        self.0.contains_key(&question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &AnswerOption)> {
        self.0.iter().map(|(id, option)| (*id, option))
    }
}

impl FromIterator<(u32, AnswerOption)> for Answers {
    fn from_iter<I: IntoIterator<Item = (u32, AnswerOption)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
