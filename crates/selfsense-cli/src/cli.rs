use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use selfsense_core::models::Gender;

#[derive(Debug, Parser)]
#[command(
    name = "selfsense",
    version,
    about = "Health self-assessment questionnaires with risk scoring",
    long_about = "selfsense walks through a short questionnaire for a health condition,\n\
        scores the answers against the catalog's risk thresholds and keeps a\n\
        local history of past assessments.\n\n\
        EXAMPLES:\n\
        \n  selfsense conditions                          List available conditions\n\
        \n  selfsense assess diabetes                     Answer questions interactively\n\
        \n  selfsense assess stress --answers a.json      Score answers from a file\n\
        \n  selfsense history --condition vision          Show past vision assessments"
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to the platform config directory)
    #[arg(long = "config", global = true)]
    pub config_file: Option<PathBuf>,

    /// Catalog override for this run
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write or print the config file
    #[command(subcommand)]
    Config(ConfigCommand),

    #[command(flatten)]
    Session(SessionCommand),
}

/// Commands that run against a loaded catalog and data directory.
#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// List categories and conditions
    Conditions,

    /// Print the questions and options of a condition
    Show { condition: String },

    /// Take an assessment
    Assess(AssessArgs),

    /// List stored assessments, newest first
    History {
        #[arg(long)]
        condition: Option<String>,
    },

    /// Manage the people assessments are taken for
    #[command(subcommand)]
    Profile(ProfileCommand),
}

#[derive(Debug, Args)]
pub struct AssessArgs {
    pub condition: String,

    /// JSON object of question id to 0-based option index
    #[arg(long)]
    pub answers: Option<PathBuf>,

    /// Do not append the result to history
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    List,
    Add {
        name: String,
        age: u8,
        #[arg(long, default_value = "female")]
        gender: Gender,
        #[arg(long)]
        phone: Option<String>,
    },
    Remove {
        id: u32,
    },
    Use {
        id: u32,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    Show,
    /// Write a fresh config; `--catalog` is recorded as the catalog override
    Init {
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}
