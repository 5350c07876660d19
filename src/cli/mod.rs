//! Command line surface.
//!
//! The same [`Command`] set is used for one-shot invocations and for each
//! line typed into `cinetrack shell`.

mod line;
mod runner;

pub use line::split_line;
pub use runner::{CommandError, Outcome, Runner};

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::tmdb::MovieId;

#[derive(Debug, Parser)]
#[command(
    name = "cinetrack",
    version,
    about = "Trending movies, a personal watchlist and reviews"
)]
pub struct Cli {
    /// Config file (default: ~/.config/cinetrack/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the data directory from config
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Keep all state in memory for this process only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Parser for one line typed into the interactive shell.
#[derive(Debug, Parser)]
#[command(name = "cinetrack>", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Create a local account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in with a registered account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and forget the saved watchlist
    Logout,
    /// Show who is signed in
    Whoami,
    /// List this week's trending movies
    Trending {
        /// Maximum number of movies to print
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Show one trending movie with its reviews
    Movie { id: MovieId },
    /// Manage the watchlist
    Watchlist {
        #[command(subcommand)]
        action: WatchlistAction,
    },
    /// Write and read reviews (kept for the lifetime of the process)
    Review {
        #[command(subcommand)]
        action: ReviewAction,
    },
    /// Show or toggle the light/dark theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Watchlist statistics
    Profile,
    /// Interactive session; reviews persist until it exits
    Shell,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum WatchlistAction {
    List,
    /// Add a movie from the trending list by id
    Add { id: MovieId },
    Remove { id: MovieId },
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum ReviewAction {
    Add {
        id: MovieId,
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,
    },
    List { id: MovieId },
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum ThemeAction {
    Show,
    Toggle,
}

impl Command {
    /// Whether the command needs a signed-in user.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Command::Logout
                | Command::Movie { .. }
                | Command::Watchlist { .. }
                | Command::Review { .. }
                | Command::Profile
        )
    }
}
