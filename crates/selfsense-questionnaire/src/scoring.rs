use selfsense_core::models::{Answers, Assessment, Condition, RiskFactor, RiskLogic, Severity};

use crate::error::QuestionnaireError;

/// Score `answers` for `condition` against a threshold table.
///
/// Questions without an answer contribute nothing and raise no risk
/// factor; completeness is the caller's concern (see [`score_complete`]).
/// Pure and deterministic.
pub fn score(
    condition: &Condition,
    answers: &Answers,
    risk_logic: &RiskLogic,
) -> Result<Assessment, QuestionnaireError> {
    if condition.questions.is_empty() {
        return Err(QuestionnaireError::InvalidInput(format!(
            "condition '{}' has no questions",
            condition.id
        )));
    }

    let mut total_score = 0u32;
    let mut risk_factors = Vec::new();

    for question in &condition.questions {
        let Some(option) = answers.get(question.id) else {
            continue;
        };
        total_score = total_score.saturating_add(option.score);
        if let Some(severity) = Severity::for_score(option.score) {
            risk_factors.push(RiskFactor {
                question: question.text.clone(),
                answer: option.text.clone(),
                severity,
            });
        }
    }

    let threshold = risk_logic.threshold_for(total_score).ok_or_else(|| {
        QuestionnaireError::InvalidInput("threshold table is empty".to_string())
    })?;

    Ok(Assessment {
        condition_id: condition.id.clone(),
        condition_name: condition.name.clone(),
        total_score,
        risk_level: threshold.level.clone(),
        message: threshold.message.clone(),
        color_code: threshold.color_code.clone(),
        risk_factors,
        max_possible_score: risk_logic.total_possible_score,
    })
}

/// Like [`score`], but every question of `condition` must be answered.
pub fn score_complete(
    condition: &Condition,
    answers: &Answers,
    risk_logic: &RiskLogic,
) -> Result<Assessment, QuestionnaireError> {
    let answered = condition
        .questions
        .iter()
        .filter(|q| answers.is_answered(q.id))
        .count();
    if answered < condition.questions.len() {
        return Err(QuestionnaireError::IncompleteAnswers {
            answered,
            expected: condition.questions.len(),
        });
    }
    score(condition, answers, risk_logic)
}

/// Scores conditions against one catalog's threshold table.
#[derive(Debug, Clone, Copy)]
pub struct RiskScorer<'a> {
    risk_logic: &'a RiskLogic,
}

impl<'a> RiskScorer<'a> {
    pub fn new(risk_logic: &'a RiskLogic) -> Self {
        Self { risk_logic }
    }

    pub fn risk_logic(&self) -> &'a RiskLogic {
        self.risk_logic
    }

    pub fn score(
        &self,
        condition: &Condition,
        answers: &Answers,
    ) -> Result<Assessment, QuestionnaireError> {
        let assessment = score(condition, answers, self.risk_logic)?;
        tracing::debug!(
            condition = %assessment.condition_id,
            total = assessment.total_score,
            level = %assessment.risk_level,
            factors = assessment.risk_factors.len(),
            "scored questionnaire"
        );
        Ok(assessment)
    }

    pub fn score_complete(
        &self,
        condition: &Condition,
        answers: &Answers,
    ) -> Result<Assessment, QuestionnaireError> {
        score_complete(condition, answers, self.risk_logic)
    }
}
