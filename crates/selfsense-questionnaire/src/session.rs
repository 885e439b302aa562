use selfsense_core::models::{Answers, Assessment, Condition, Question, RiskLogic};

use crate::error::QuestionnaireError;
use crate::scoring;

/// One in-progress questionnaire: the answers collected so far and the
/// question currently shown.
#[derive(Debug, Clone)]
pub struct QuestionnaireSession<'a> {
    condition: &'a Condition,
    answers: Answers,
    active: usize,
}

impl<'a> QuestionnaireSession<'a> {
    pub fn start(condition: &'a Condition) -> Result<Self, QuestionnaireError> {
        if condition.questions.is_empty() {
            return Err(QuestionnaireError::InvalidInput(format!(
                "condition '{}' has no questions",
                condition.id
            )));
        }
        tracing::debug!(condition = %condition.id, "questionnaire started");
        Ok(Self {
            condition,
            answers: Answers::new(),
            active: 0,
        })
    }

    pub fn condition(&self) -> &'a Condition {
        self.condition
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_question(&self) -> &'a Question {
        &self.condition.questions[self.active]
    }

    /// Record the option at `option_index` for `question_id`. Answering the
    /// active question moves on to the next one unless it is the last.
    pub fn select(
        &mut self,
        question_id: u32,
        option_index: usize,
    ) -> Result<(), QuestionnaireError> {
        let position = self
            .condition
            .questions
            .iter()
            .position(|q| q.id == question_id)
            .ok_or_else(|| {
                QuestionnaireError::InvalidInput(format!(
                    "condition '{}' has no question {question_id}",
                    self.condition.id
                ))
            })?;
        let question = &self.condition.questions[position];
        let option = question.options.get(option_index).ok_or_else(|| {
            QuestionnaireError::InvalidInput(format!(
                "question {question_id} has no option {option_index}"
            ))
        })?;

        self.answers.insert(question_id, option.clone());

        if position == self.active {
            self.next();
        }
        Ok(())
    }

    /// Returns whether the active question changed.
    pub fn next(&mut self) -> bool {
        if self.active + 1 < self.condition.questions.len() {
            self.active += 1;
            true
        } else {
            false
        }
    }

    /// Returns whether the active question changed.
    pub fn previous(&mut self) -> bool {
        if self.active > 0 {
            self.active -= 1;
            true
        } else {
            false
        }
    }

    /// Answered questions of this condition. Ignores stray ids.
    pub fn answered_count(&self) -> usize {
        self.condition
            .questions
            .iter()
            .filter(|q| self.answers.is_answered(q.id))
            .count()
    }

    pub fn progress_pct(&self) -> f64 {
        let total = self.condition.questions.len();
        if total == 0 {
            return 0.0;
        }
        self.answered_count() as f64 / total as f64 * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.condition.questions.len()
    }

    /// Score the session. Refused until every question has an answer.
    pub fn submit(&self, risk_logic: &RiskLogic) -> Result<Assessment, QuestionnaireError> {
        let assessment = scoring::score_complete(self.condition, &self.answers, risk_logic)?;
        tracing::info!(
            condition = %assessment.condition_id,
            total = assessment.total_score,
            level = %assessment.risk_level,
            "questionnaire submitted"
        );
        Ok(assessment)
    }

    pub fn reset(&mut self) {
        self.answers.clear();
        self.active = 0;
    }
}
