use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::Path;

use eyre::WrapErr;
use selfsense_core::models::{Assessment, Condition, HistoryEntry, NewProfile};
use selfsense_questionnaire::QuestionnaireSession;
use selfsense_questionnaire::report::render_report;
use selfsense_storage::history::AppendOutcome;

use crate::state::SessionState;

fn lookup<'s>(state: &'s SessionState, condition_id: &str) -> eyre::Result<&'s Condition> {
    state
        .catalog
        .condition(condition_id)
        .wrap_err("Questions for this condition are not yet available.")
}

pub fn list_conditions(state: &SessionState, out: &mut impl Write) -> eyre::Result<()> {
    for category in &state.catalog.categories {
        writeln!(out, "{}", category.name)?;
        for condition in &category.conditions {
            writeln!(
                out,
                "  {:<14} {} ({} questions)",
                condition.id,
                condition.name,
                condition.questions.len()
            )?;
        }
    }
    Ok(())
}

pub fn show_condition(
    state: &SessionState,
    condition_id: &str,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let condition = lookup(state, condition_id)?;
    writeln!(out, "{}", condition.name)?;
    for question in &condition.questions {
        writeln!(out, "\n{}. {}", question.id, question.text)?;
        for (i, option) in question.options.iter().enumerate() {
            writeln!(out, "   [{i}] {}", option.text)?;
        }
    }
    Ok(())
}

/// Answer file: JSON object of question id → 0-based option index.
pub fn assess_from_file(
    state: &SessionState,
    condition_id: &str,
    answers_path: &Path,
) -> eyre::Result<Assessment> {
    let condition = lookup(state, condition_id)?;
    let contents = std::fs::read_to_string(answers_path)
        .wrap_err_with(|| format!("failed to read answers at {}", answers_path.display()))?;
    let choices: BTreeMap<u32, usize> = serde_json::from_str(&contents)?;

    let mut session = QuestionnaireSession::start(condition)?;
    for (question_id, option_index) in choices {
        session.select(question_id, option_index)?;
    }
    Ok(session.submit(&state.catalog.risk_logic)?)
}

/// Prompt for each question on `input`. Returns `None` if the user quits.
pub fn assess_interactive(
    state: &SessionState,
    condition_id: &str,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> eyre::Result<Option<Assessment>> {
    let condition = lookup(state, condition_id)?;
    let mut session = QuestionnaireSession::start(condition)?;
    let total = condition.questions.len();

    loop {
        if session.is_complete() {
            return Ok(Some(session.submit(&state.catalog.risk_logic)?));
        }

        let question = session.active_question();
        writeln!(
            out,
            "\n[{}/{}, {:.0}% answered] {}",
            session.active_index() + 1,
            total,
            session.progress_pct(),
            question.text
        )?;
        for (i, option) in question.options.iter().enumerate() {
            let marker = match session.answers().get(question.id) {
                Some(chosen) if chosen == option => "*",
                _ => " ",
            };
            writeln!(out, " {marker}{}) {}", i + 1, option.text)?;
        }
        write!(out, "choice (number, b = back, n = next, q = quit): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(eyre::eyre!("input ended before the questionnaire was complete"));
        }

        match line.trim() {
            "q" => {
                session.reset();
                return Ok(None);
            }
            "b" => {
                session.previous();
            }
            "n" => {
                session.next();
            }
            choice => match choice.parse::<usize>() {
                Ok(n) if (1..=question.options.len()).contains(&n) => {
                    let id = question.id;
                    session.select(id, n - 1)?;
                    // the last question does not auto-advance; go back to
                    // the first one still open
                    if session.active_question().id == id
                        && !session.is_complete()
                        && let Some(open) = condition
                            .questions
                            .iter()
                            .position(|q| !session.answers().is_answered(q.id))
                    {
                        while session.active_index() > open {
                            session.previous();
                        }
                    }
                }
                _ => writeln!(out, "please pick 1-{}", question.options.len())?,
            },
        }
    }
}

/// Print the report and, when `save` is set, append it to history.
pub fn finish_assessment(
    state: &SessionState,
    assessment: &Assessment,
    save: bool,
    out: &mut impl Write,
) -> eyre::Result<()> {
    if let Some(profile) = &state.active_profile {
        writeln!(out, "Assessment for {}", profile.name)?;
    }
    write!(out, "{}", render_report(assessment))?;

    if save {
        let entry = HistoryEntry::from_assessment(assessment, jiff::Timestamp::now());
        match state.history.append(entry)? {
            AppendOutcome::Appended => writeln!(out, "\nSaved to history.")?,
            AppendOutcome::Duplicate => writeln!(out, "\nAlready in history.")?,
        }
    }
    Ok(())
}

pub fn show_history(
    state: &SessionState,
    condition_id: Option<&str>,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let entries = match condition_id {
        Some(id) => state.history.for_condition(id)?,
        None => state.history.entries()?,
    };
    if entries.is_empty() {
        writeln!(out, "No assessments yet.")?;
        return Ok(());
    }
    for entry in entries {
        writeln!(
            out,
            "{}  {:<24} {:<14} {:>2}/{}",
            entry.date, entry.condition_name, entry.risk_level, entry.total_score, entry.max_score
        )?;
    }
    Ok(())
}

pub fn list_profiles(state: &SessionState, out: &mut impl Write) -> eyre::Result<()> {
    let book = state.profiles.load()?;
    let active = book.active().map(|p| p.id);
    if book.profiles.is_empty() {
        writeln!(out, "No profiles yet.")?;
    }
    for profile in &book.profiles {
        let marker = if Some(profile.id) == active { "*" } else { " " };
        writeln!(
            out,
            "{marker} {:>3}  {} ({}, {:?})",
            profile.id, profile.name, profile.age, profile.gender
        )?;
    }
    Ok(())
}

pub fn add_profile(state: &SessionState, new: NewProfile) -> eyre::Result<u32> {
    let id = state.profiles.update(|book| book.add(new))?;
    tracing::info!(id, "profile added");
    Ok(id)
}

pub fn remove_profile(state: &SessionState, id: u32) -> eyre::Result<()> {
    let removed = state.profiles.update(|book| book.remove(id))?;
    tracing::info!(id, name = %removed.name, "profile removed");
    Ok(())
}

pub fn use_profile(state: &SessionState, id: u32) -> eyre::Result<()> {
    state.profiles.update(|book| book.set_active(id))?;
    tracing::info!(id, "active profile changed");
    Ok(())
}
