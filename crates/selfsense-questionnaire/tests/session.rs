use selfsense_core::models::{Condition, RiskTier};
use selfsense_questionnaire::report::render_report;
use selfsense_questionnaire::{Catalog, QuestionnaireError, QuestionnaireSession};

fn stress() -> &'static Condition {
    Catalog::builtin().condition("stress").unwrap()
}

#[test]
fn selecting_the_active_question_advances() {
    let mut session = QuestionnaireSession::start(stress()).unwrap();
    assert_eq!(session.active_index(), 0);
    assert_eq!(session.active_question().id, 1);

    session.select(1, 0).unwrap();
    assert_eq!(session.active_index(), 1);
    session.select(2, 1).unwrap();
    session.select(3, 2).unwrap();
    assert_eq!(session.active_index(), 3);

    // the last question stays active once answered
    session.select(4, 0).unwrap();
    assert_eq!(session.active_index(), 3);
    assert!(session.is_complete());
}

#[test]
fn answering_an_earlier_question_keeps_position() {
    let mut session = QuestionnaireSession::start(stress()).unwrap();
    session.select(1, 0).unwrap();
    session.select(2, 0).unwrap();
    assert_eq!(session.active_index(), 2);

    session.select(1, 2).unwrap();
    assert_eq!(session.active_index(), 2);
    assert_eq!(session.answers().get(1).unwrap().text, "Rarely");
    assert_eq!(session.answered_count(), 2);
}

#[test]
fn navigation_stays_in_bounds() {
    let mut session = QuestionnaireSession::start(stress()).unwrap();
    assert!(!session.previous());
    assert!(session.next());
    assert!(session.next());
    assert!(session.next());
    assert!(!session.next());
    assert_eq!(session.active_index(), 3);
    assert!(session.previous());
    assert_eq!(session.active_index(), 2);
}

#[test]
fn progress_tracks_answered_questions() {
    let mut session = QuestionnaireSession::start(stress()).unwrap();
    assert_eq!(session.progress_pct(), 0.0);
    session.select(1, 0).unwrap();
    assert_eq!(session.progress_pct(), 25.0);
    session.select(1, 1).unwrap();
    assert_eq!(session.progress_pct(), 25.0);
    session.select(3, 1).unwrap();
    assert_eq!(session.progress_pct(), 50.0);
}

#[test]
fn submit_is_gated_on_completion() {
    let mut session = QuestionnaireSession::start(stress()).unwrap();
    session.select(1, 0).unwrap();
    let err = session.submit(&Catalog::builtin().risk_logic).unwrap_err();
    assert!(matches!(
        err,
        QuestionnaireError::IncompleteAnswers {
            answered: 1,
            expected: 4
        }
    ));

    session.select(2, 1).unwrap(); // 5
    session.select(3, 1).unwrap(); // 5
    session.select(4, 2).unwrap(); // 0
    let assessment = session.submit(&Catalog::builtin().risk_logic).unwrap();
    assert_eq!(assessment.total_score, 20);
    assert_eq!(assessment.tier(), RiskTier::Moderate);
    assert_eq!(assessment.risk_factors.len(), 3);
}

#[test]
fn invalid_selections_are_rejected() {
    let mut session = QuestionnaireSession::start(stress()).unwrap();
    assert!(matches!(
        session.select(9, 0),
        Err(QuestionnaireError::InvalidInput(_))
    ));
    assert!(matches!(
        session.select(1, 3),
        Err(QuestionnaireError::InvalidInput(_))
    ));
    assert_eq!(session.answered_count(), 0);
    assert_eq!(session.active_index(), 0);
}

#[test]
fn reset_clears_answers() {
    let mut session = QuestionnaireSession::start(stress()).unwrap();
    session.select(1, 0).unwrap();
    session.select(2, 0).unwrap();
    session.reset();
    assert_eq!(session.answered_count(), 0);
    assert_eq!(session.active_index(), 0);
}

#[test]
fn empty_condition_cannot_start() {
    let empty = Condition {
        id: "empty".to_string(),
        name: "Empty".to_string(),
        questions: vec![],
    };
    assert!(QuestionnaireSession::start(&empty).is_err());
}

#[test]
fn report_lists_risk_factors() {
    let mut session = QuestionnaireSession::start(stress()).unwrap();
    for id in 1..=4 {
        session.select(id, 0).unwrap();
    }
    let assessment = session.submit(&Catalog::builtin().risk_logic).unwrap();
    let report = render_report(&assessment);

    assert!(report.starts_with("## Stress\n"));
    assert!(report.contains("High Risk (score 40/40)"));
    assert!(report.contains("### Risk factors"));
    assert!(report.contains("- [high] How often do you feel overwhelmed"));
    assert!(report.contains("consultation"));
}

#[test]
fn low_risk_report_has_no_factor_section() {
    let mut session = QuestionnaireSession::start(stress()).unwrap();
    for id in 1..=4 {
        session.select(id, 2).unwrap();
    }
    let report = render_report(&session.submit(&Catalog::builtin().risk_logic).unwrap());
    assert!(report.contains("Low risk: Low Risk (score 0/40)"));
    assert!(!report.contains("Risk factors"));
    assert!(!report.contains("consultation"));
}
