//! Parsing of shell input lines.
//!
//! Each line is parsed as a multicall command: the first word names the
//! command, the rest are its arguments.

use std::path::PathBuf;

use app_state::{CommunityView, Tab};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(multicall = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Open the sign-in form
    Start,
    /// Return to the landing page
    Back,
    /// Sign in (any password is accepted)
    Login {
        /// Email address; the part before `@` becomes your name
        email: Option<String>,
    },
    /// Switch between sign-in and sign-up
    Signup,
    /// Sign out and forget the session
    Logout,
    /// Open a tab: dashboard, myfarm, weather, pest, market, chat, community, admin, settings
    Tab {
        #[arg(value_parser = clap::value_parser!(Tab))]
        tab: Tab,
    },
    /// Switch Kiswahili / English
    Lang,
    /// Switch light / dark
    Theme,
    /// Ask the AI advisor
    Ask {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        question: Vec<String>,
    },
    /// Show or hide the reasoning of message N
    Why { index: usize },
    /// Research a crop
    Crop {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        name: Vec<String>,
    },
    /// Diagnose a pest from an image file
    Scan { path: PathBuf },
    /// Remove the scanned image
    Clear,
    /// Print the diagnosis for sharing
    Share,
    /// Community sub-view: articles, forum, chat
    View {
        #[arg(value_parser = clap::value_parser!(CommunityView))]
        view: CommunityView,
    },
    /// Post to the community chat
    Say {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Exit
    #[command(alias = "exit")]
    Quit,
}

impl Command {
    /// Parse one input line. A blank line yields `None`.
    ///
    /// `help` and unknown input come back as a [`clap::Error`] whose
    /// rendering is the text to show.
    pub fn parse_line(line: &str) -> Result<Option<Self>, clap::Error> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(None);
        }
        Line::try_parse_from(words).map(|line| Some(line.command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(line: &str) -> Command {
        Command::parse_line(line).unwrap().unwrap()
    }

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse("start"), Command::Start);
        assert_eq!(Command::parse_line("  ").unwrap(), None);
        assert_eq!(
            parse("login juma@shamba.tz"),
            Command::Login {
                email: Some("juma@shamba.tz".to_string())
            }
        );
        assert_eq!(parse("tab MyFarm"), Command::Tab { tab: Tab::MyFarm });
        assert_eq!(
            parse("ask  Je nitumie mbolea gani? "),
            Command::Ask {
                question: words("Je nitumie mbolea gani?")
            }
        );
        assert_eq!(
            parse("scan photos/leaf.jpg"),
            Command::Scan {
                path: PathBuf::from("photos/leaf.jpg")
            }
        );
        assert_eq!(parse("why 3"), Command::Why { index: 3 });
        assert_eq!(
            parse("view forum"),
            Command::View {
                view: CommunityView::Forum
            }
        );
        assert_eq!(parse("exit"), Command::Quit);
    }

    #[test]
    fn test_free_text_keeps_hyphens() {
        assert_eq!(
            parse("say bei ni -5% leo"),
            Command::Say {
                text: words("bei ni -5% leo")
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        let kind = |line: &str| Command::parse_line(line).unwrap_err().kind();

        assert_eq!(kind("ask"), ErrorKind::MissingRequiredArgument);
        assert_eq!(kind("tab shamba"), ErrorKind::ValueValidation);
        assert_eq!(kind("why two"), ErrorKind::ValueValidation);
        assert_eq!(kind("view video"), ErrorKind::ValueValidation);
        assert_eq!(kind("dance"), ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn test_help_lists_commands() {
        let err = Command::parse_line("help").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let text = err.to_string();
        assert!(text.contains("ask"));
        assert!(text.contains("Research a crop"));
    }

    #[test]
    fn test_login_without_email() {
        assert_eq!(parse("login"), Command::Login { email: None });
    }
}
