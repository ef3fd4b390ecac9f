//! CLI argument parsing for BrightSpeak.

use brightspeak_lib::games::QuizKind;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "brightspeak",
    about = "Inspect and edit BrightSpeak card sets, profile and games",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the data directory from the config
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage card collections
    #[command(subcommand)]
    Cards(CardsCommand),

    /// Show or edit the child profile
    #[command(subcommand)]
    Profile(ProfileCommand),

    /// Show a palette
    Theme {
        /// Theme discriminator (Boy, Girl, ...); defaults to the profile's
        value: Option<String>,
    },

    /// Manage the parent PIN
    #[command(subcommand)]
    Pin(PinCommand),

    /// Play a quiz round
    Quiz {
        #[arg(value_enum)]
        kind: QuizArg,

        /// Answers, in order
        #[arg(short, long)]
        answer: Vec<String>,

        /// Seed for repeatable questions
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play Ten in the Bed
    Bed {
        /// Numbers to drop into the bed, in order
        #[arg(short, long, num_args = 1..)]
        drop: Vec<u32>,
    },
}

#[derive(Subcommand)]
pub enum CardsCommand {
    /// List cards of a category
    #[command(alias = "ls")]
    List {
        /// phrases, food, people or feelings
        category: String,
    },

    /// Add a card
    Add {
        category: String,

        /// Label (a single word for feelings)
        text: String,

        /// Image reference
        #[arg(long)]
        image: Option<String>,

        /// Icon name
        #[arg(long)]
        icon: Option<String>,
    },

    /// Remove the first card with this label
    #[command(alias = "rm")]
    Remove { category: String, label: String },

    /// Speak a card
    Speak { category: String, label: String },

    /// Rewrite legacy records in the current format
    Migrate,
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Show the profile
    Show,

    /// Update profile fields
    Set {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        age: Option<String>,

        /// Boy, Girl or neutral
        #[arg(long)]
        theme_color: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum PinCommand {
    /// Create or replace the PIN
    Set { pin: String },

    /// Check a PIN
    Check { pin: String },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum QuizArg {
    Letters,
    Numbers,
    People,
}

impl From<QuizArg> for QuizKind {
    fn from(arg: QuizArg) -> Self {
        match arg {
            QuizArg::Letters => QuizKind::Letters,
            QuizArg::Numbers => QuizKind::Numbers,
            QuizArg::People => QuizKind::People,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cards_add() {
        let cli = Cli::parse_from(["brightspeak", "cards", "add", "food", "Pizza", "--image", "file:///p.jpg"]);
        match cli.command {
            Command::Cards(CardsCommand::Add { category, text, image, icon }) => {
                assert_eq!(category, "food");
                assert_eq!(text, "Pizza");
                assert_eq!(image.as_deref(), Some("file:///p.jpg"));
                assert!(icon.is_none());
            }
            _ => panic!("expected cards add"),
        }
    }

    #[test]
    fn test_parse_quiz_and_bed() {
        let cli = Cli::parse_from(["brightspeak", "quiz", "letters", "-a", "B", "-a", "C", "--seed", "4"]);
        assert!(matches!(
            cli.command,
            Command::Quiz { kind: QuizArg::Letters, ref answer, seed: Some(4) } if answer.len() == 2
        ));

        let cli = Cli::parse_from(["brightspeak", "--data-dir", "/tmp/bs", "bed", "--drop", "1", "2", "3"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/bs")));
        assert!(matches!(cli.command, Command::Bed { ref drop } if drop == &vec![1, 2, 3]));
    }
}
