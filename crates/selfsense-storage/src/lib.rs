//! selfsense-storage
//!
//! Local JSON-file persistence for assessment history and user profiles.

pub mod error;
pub mod file;
pub mod history;
pub mod profiles;
