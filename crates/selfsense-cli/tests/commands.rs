use std::io::Cursor;

use selfsense_cli::commands;
use selfsense_cli::config::SelfSenseConfig;
use selfsense_cli::state::SessionState;
use selfsense_core::models::{Gender, NewProfile, RiskTier};
use tempfile::TempDir;

fn session() -> (TempDir, SessionState) {
    let dir = tempfile::tempdir().unwrap();
    let config = SelfSenseConfig::new(dir.path().join("data"));
    let state = SessionState::new(config).unwrap();
    (dir, state)
}

fn output(f: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut buf = Vec::new();
    f(&mut buf);
    String::from_utf8(buf).unwrap()
}

#[test]
fn lists_builtin_conditions() {
    let (_dir, state) = session();
    let text = output(|out| commands::list_conditions(&state, out).unwrap());
    assert!(text.contains("Chronic Condition"));
    assert!(text.contains("lung_cancer"));
    assert!(text.contains("Vision (4 questions)"));
}

#[test]
fn unknown_condition_is_reported() {
    let (_dir, state) = session();
    let mut out = Vec::new();
    let err = commands::show_condition(&state, "asthma", &mut out).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Questions for this condition are not yet available."
    );
}

#[test]
fn assess_from_file_scores_and_saves() {
    let (dir, state) = session();
    let answers = dir.path().join("answers.json");
    // diabetes: 10 + 10 + 0 + 10
    std::fs::write(&answers, r#"{ "1": 0, "2": 0, "3": 0, "4": 0 }"#).unwrap();

    let assessment = commands::assess_from_file(&state, "diabetes", &answers).unwrap();
    assert_eq!(assessment.total_score, 30);
    assert_eq!(assessment.tier(), RiskTier::High);

    let text = output(|out| commands::finish_assessment(&state, &assessment, true, out).unwrap());
    assert!(text.contains("High Risk (score 30/40)"));
    assert!(text.contains("Saved to history."));

    let history = state.history.entries().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].condition_id, "diabetes");
    assert_eq!(history[0].total_score, 30);

    let text = output(|out| commands::show_history(&state, Some("diabetes"), out).unwrap());
    assert!(text.contains("Diabetes"));
    assert!(text.contains("30/40"));
}

#[test]
fn incomplete_answer_file_is_refused() {
    let (dir, state) = session();
    let answers = dir.path().join("answers.json");
    std::fs::write(&answers, r#"{ "1": 0, "2": 0 }"#).unwrap();
    let err = commands::assess_from_file(&state, "stress", &answers).unwrap_err();
    assert!(err.to_string().contains("2 of 4"));
}

#[test]
fn no_save_leaves_history_empty() {
    let (dir, state) = session();
    let answers = dir.path().join("answers.json");
    std::fs::write(&answers, r#"{ "1": 2, "2": 2, "3": 2, "4": 2 }"#).unwrap();
    let assessment = commands::assess_from_file(&state, "stress", &answers).unwrap();
    assert_eq!(assessment.tier(), RiskTier::Low);

    output(|out| commands::finish_assessment(&state, &assessment, false, out).unwrap());
    let text = output(|out| commands::show_history(&state, None, out).unwrap());
    assert_eq!(text, "No assessments yet.\n");
}

#[test]
fn interactive_session_supports_going_back() {
    let (_dir, state) = session();
    let mut input = Cursor::new("1\nb\n3\n1\n9\n1\n1\n");
    let mut out = Vec::new();
    let assessment = commands::assess_interactive(&state, "stress", &mut input, &mut out)
        .unwrap()
        .unwrap();
    assert_eq!(assessment.total_score, 30);
    assert_eq!(assessment.risk_factors.len(), 3);
    assert!(String::from_utf8(out).unwrap().contains("please pick 1-3"));
}

#[test]
fn interactive_session_can_be_cancelled() {
    let (_dir, state) = session();
    let mut input = Cursor::new("1\nq\n");
    let mut out = Vec::new();
    let result = commands::assess_interactive(&state, "vision", &mut input, &mut out).unwrap();
    assert!(result.is_none());
}

#[test]
fn interactive_session_fails_on_closed_input() {
    let (_dir, state) = session();
    let mut input = Cursor::new("1\n");
    let mut out = Vec::new();
    assert!(commands::assess_interactive(&state, "vision", &mut input, &mut out).is_err());
}

#[test]
fn profiles_are_managed_through_the_store() {
    let (_dir, state) = session();
    let asha = NewProfile {
        name: "Asha".to_string(),
        age: 30,
        gender: Gender::Female,
        phone: None,
    };
    let ravi = NewProfile {
        name: "Ravi".to_string(),
        age: 41,
        gender: Gender::Male,
        phone: Some("555-0100".to_string()),
    };
    assert_eq!(commands::add_profile(&state, asha).unwrap(), 1);
    assert_eq!(commands::add_profile(&state, ravi).unwrap(), 2);
    commands::use_profile(&state, 2).unwrap();

    let text = output(|out| commands::list_profiles(&state, out).unwrap());
    assert!(text.contains("*   2  Ravi (41, Male)"));

    commands::remove_profile(&state, 2).unwrap();
    assert!(commands::remove_profile(&state, 1).is_err());
    assert_eq!(state.profiles.load().unwrap().active_id, Some(1));
}

#[test]
fn added_profile_is_marked_active() {
    let (_dir, state) = session();
    for (name, age) in [("Asha", 30), ("Ravi", 41)] {
        let new = NewProfile {
            name: name.to_string(),
            age,
            gender: Gender::Female,
            phone: None,
        };
        commands::add_profile(&state, new).unwrap();
    }

    let text = output(|out| commands::list_profiles(&state, out).unwrap());
    assert!(text.contains("*   2  Ravi (41, Female)"));
    assert!(text.contains("    1  Asha (30, Female)"));
}
