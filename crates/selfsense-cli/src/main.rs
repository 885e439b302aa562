use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use eyre::Result;
use selfsense_core::models::NewProfile;

use selfsense_cli::cli::{Cli, Command, ConfigCommand, ProfileCommand, SessionCommand};
use selfsense_cli::commands;
use selfsense_cli::config::{self, SelfSenseConfig};
use selfsense_cli::state::SessionState;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = match &cli.config_file {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };

    match cli.command {
        Command::Config(cmd) => run_config(&cmd, &config_path, cli.catalog),
        Command::Session(cmd) => {
            let mut config = config::load_or_default(&config_path)?;
            if let Some(catalog) = cli.catalog {
                config.catalog_path = Some(catalog);
            }
            let state = SessionState::new(config)?;
            run_session(cmd, &state)
        }
    }
}

fn run_session(cmd: SessionCommand, state: &SessionState) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cmd {
        SessionCommand::Conditions => commands::list_conditions(state, &mut out)?,
        SessionCommand::Show { condition } => {
            commands::show_condition(state, &condition, &mut out)?
        }
        SessionCommand::Assess(args) => {
            let assessment = match &args.answers {
                Some(path) => Some(commands::assess_from_file(state, &args.condition, path)?),
                None => {
                    let stdin = io::stdin();
                    commands::assess_interactive(
                        state,
                        &args.condition,
                        &mut stdin.lock(),
                        &mut out,
                    )?
                }
            };
            match assessment {
                Some(assessment) => {
                    writeln!(out)?;
                    commands::finish_assessment(state, &assessment, !args.no_save, &mut out)?;
                }
                None => writeln!(out, "\nQuestionnaire cancelled.")?,
            }
        }
        SessionCommand::History { condition } => {
            commands::show_history(state, condition.as_deref(), &mut out)?
        }
        SessionCommand::Profile(cmd) => match cmd {
            ProfileCommand::List => commands::list_profiles(state, &mut out)?,
            ProfileCommand::Add {
                name,
                age,
                gender,
                phone,
            } => {
                let id = commands::add_profile(
                    state,
                    NewProfile {
                        name,
                        age,
                        gender,
                        phone,
                    },
                )?;
                writeln!(out, "Added profile {id}.")?;
            }
            ProfileCommand::Remove { id } => commands::remove_profile(state, id)?,
            ProfileCommand::Use { id } => commands::use_profile(state, id)?,
        },
    }

    Ok(())
}

fn run_config(
    cmd: &ConfigCommand,
    path: &Path,
    catalog: Option<PathBuf>,
) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let config = config::load_or_default(path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommand::Init { data_dir } => {
            let data_dir = match data_dir {
                Some(dir) => dir.clone(),
                None => config::default_data_dir()?,
            };
            let mut config = SelfSenseConfig::new(data_dir);
            config.catalog_path = catalog;
            config::save_config(path, &config)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}
