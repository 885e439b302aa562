//! selfsense-core
//!
//! Pure domain types for the SelfSense health self-assessment: conditions,
//! questions, risk thresholds, answers, assessments, history entries and
//! user profiles. No I/O — this is the shared vocabulary of the workspace.

pub mod error;
pub mod models;
