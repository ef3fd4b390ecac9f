//! BrightSpeak command-line entry point

mod cli;

use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;
use std::sync::Arc;

use brightspeak_lib::audio::LogSpeaker;
use brightspeak_lib::commands;
use brightspeak_lib::config::Config;
use brightspeak_lib::{init_app, AppState};
use cli::{CardsCommand, Cli, Command, PinCommand, ProfileCommand};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let (mut config, report) = Config::load_with_report(cli.config.as_ref()).map_err(|e| e.to_string())?;
    for warning in &report.warnings {
        eprintln!("warning: {}", warning);
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let mut logger_config = config.logger_config();
    if cli.verbose {
        logger_config.level = log::LevelFilter::Debug;
    }
    if let Err(e) = rolling_logger::init_logger_with(config.log_dir(), "BrightSpeak", logger_config) {
        eprintln!("warning: file logging disabled: {}", e);
    }

    // The logger was not installed while the config loaded
    for warning in &report.warnings {
        log::warn!("{}", warning);
    }
    match &report.source {
        Some(path) => log::info!("Using config from {}", path.display()),
        None => log::info!("Using default config"),
    }

    let state = init_app(config, Arc::new(LogSpeaker))
        .await
        .map_err(|e| e.to_string())?;

    dispatch(&state, cli.command).await
}

async fn dispatch(state: &AppState, command: Command) -> Result<(), String> {
    match command {
        Command::Cards(cmd) => match cmd {
            CardsCommand::List { category } => {
                for card in commands::list_cards(state, category).await? {
                    println!("{}", card.label);
                }
            }
            CardsCommand::Add { category, text, image, icon } => {
                let view = commands::add_card(state, category, text, image, icon).await?;
                if !view.persisted {
                    eprintln!("warning: change could not be saved");
                }
                print_json(&view)?;
            }
            CardsCommand::Remove { category, label } => {
                print_json(&commands::remove_card(state, category, label).await?)?;
            }
            CardsCommand::Speak { category, label } => {
                commands::speak_card(state, category, label).await?;
            }
            CardsCommand::Migrate => {
                let migrated = commands::migrate_cards(state).await?;
                println!("Migrated {} record(s)", migrated);
            }
        },
        Command::Profile(ProfileCommand::Show) => {
            match commands::get_profile(state).await? {
                Some(profile) => print_json(&profile)?,
                None => println!("No profile yet"),
            }
        }
        Command::Profile(ProfileCommand::Set { name, age, theme_color }) => {
            print_json(&commands::save_profile(state, name, age, theme_color).await?)?;
        }
        Command::Theme { value } => {
            print_json(&commands::get_theme(state, value).await?)?;
        }
        Command::Pin(PinCommand::Set { pin }) => {
            commands::set_parent_pin(state, pin).await?;
            println!("PIN saved");
        }
        Command::Pin(PinCommand::Check { pin }) => {
            print_json(&commands::check_parent_pin(state, pin).await?)?;
        }
        Command::Quiz { kind, answer, seed } => {
            print_json(&commands::play_quiz(state, kind.into(), answer, seed).await?)?;
        }
        Command::Bed { drop } => {
            print_json(&commands::play_ten_in_bed(state, drop).await?)?;
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}
