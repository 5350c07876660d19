//! Executes parsed commands against an [`AppContext`].

use std::io::Write;

use clap::Parser;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::accounts::AuthError;
use crate::app::{AppContext, Route};
use crate::storage::StorageError;
use crate::tmdb::{DiscoverFeed, Movie, MovieId};

use super::line::split_line;
use super::{Command, ReviewAction, ShellLine, ThemeAction, WatchlistAction};

const PROMPT: &str = "cinetrack> ";
const POSTER_SIZE: &str = "w342";
const DETAIL_BACKDROP_SIZE: &str = "w780";
const DETAIL_POSTER_SIZE: &str = "w500";

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Not logged in. Run `login` first.")]
    NotLoggedIn,

    #[error("Movie {0} is not in the trending list")]
    UnknownMovie(MovieId),

    #[error("Review text must not be empty")]
    EmptyReview,

    #[error("Already inside a shell")]
    NestedShell,

    #[error("{}: {}", .0.title(), .0)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Whether the shell loop should keep reading.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Drives the stores from CLI commands.
pub struct Runner {
    ctx: AppContext,
    feed: DiscoverFeed,
}

impl Runner {
    pub fn new(ctx: AppContext, feed: DiscoverFeed) -> Self {
        Self { ctx, feed }
    }

    /// Run one command, writing human-readable output to `out`.
    pub async fn execute<W: Write>(&self, command: Command, out: &mut W) -> Result<(), CommandError> {
        if command.requires_auth() && self.ctx.route() != Route::Authenticated {
            return Err(CommandError::NotLoggedIn);
        }

        match command {
            Command::Register {
                name,
                email,
                password,
            } => {
                self.ctx.register(&name, &email, &password).await?;
                writeln!(out, "Account created. Please login.")?;
            }
            Command::Login { email, password } => {
                let session = self.ctx.login(&email, &password).await?;
                writeln!(out, "Welcome, {}!", session.name)?;
            }
            Command::Logout => {
                self.ctx.logout().await?;
                writeln!(out, "Logged out.")?;
            }
            Command::Whoami => match (self.ctx.route(), self.ctx.auth.user()) {
                (Route::Authenticated, Some(user)) => {
                    writeln!(out, "{} <{}>", user.name, user.email)?;
                }
                _ => writeln!(out, "Not logged in.")?,
            },
            Command::Trending { limit } => self.trending(limit, out).await?,
            Command::Movie { id } => self.movie(id, out).await?,
            Command::Watchlist { action } => self.watchlist(action, out).await?,
            Command::Review { action } => self.review(action, out)?,
            Command::Theme { action } => self.theme(action, out).await?,
            Command::Profile => self.profile(out)?,
            Command::Shell => return Err(CommandError::NestedShell),
        }
        Ok(())
    }

    /// Read commands line by line until EOF or `exit`.
    ///
    /// Errors are reported inline and never end the session.
    pub async fn run_shell<R, W>(&self, input: R, out: &mut W) -> Result<(), CommandError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                break;
            };
            if self.run_line(&line, out).await? == Outcome::Exit {
                break;
            }
        }
        Ok(())
    }

    async fn run_line<W: Write>(&self, line: &str, out: &mut W) -> Result<Outcome, CommandError> {
        let words = split_line(line);
        match words.first().map(String::as_str) {
            None => return Ok(Outcome::Continue),
            Some("exit") | Some("quit") => return Ok(Outcome::Exit),
            Some(_) => {}
        }

        let parsed = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(err) => {
                write!(out, "{}", err.render())?;
                return Ok(Outcome::Continue);
            }
        };

        match self.execute(parsed.command, out).await {
            Ok(()) => {}
            Err(CommandError::Io(err)) => return Err(CommandError::Io(err)),
            Err(err) => writeln!(out, "Error: {}", err)?,
        }
        Ok(Outcome::Continue)
    }

    async fn trending<W: Write>(&self, limit: usize, out: &mut W) -> Result<(), CommandError> {
        self.feed.refresh().await;
        let movies = self.feed.movies();
        if movies.is_empty() {
            writeln!(out, "No movies available.")?;
            return Ok(());
        }
        for movie in movies.iter().take(limit) {
            let year = movie
                .release_year()
                .map(|y| format!(" ({})", y))
                .unwrap_or_default();
            writeln!(
                out,
                "{:>8}  {}{}  ★ {}",
                movie.id,
                movie.title,
                year,
                movie.rating_label()
            )?;
        }
        Ok(())
    }

    /// Trending movie by id, refreshing the feed once if it is not there.
    async fn lookup(&self, id: MovieId) -> Result<Movie, CommandError> {
        if let Some(movie) = self.feed.find(id) {
            return Ok(movie);
        }
        self.feed.refresh().await;
        self.feed.find(id).ok_or(CommandError::UnknownMovie(id))
    }

    async fn movie<W: Write>(&self, id: MovieId, out: &mut W) -> Result<(), CommandError> {
        let movie = self.lookup(id).await?;
        let image_base = self.feed.client().image_base_url();

        match movie.release_year() {
            Some(year) => writeln!(out, "{} ({})", movie.title, year)?,
            None => writeln!(out, "{}", movie.title)?,
        }
        writeln!(
            out,
            "Released {}  ★ {}",
            movie.release_date.as_deref().unwrap_or("-"),
            movie.rating_label()
        )?;
        let image = movie
            .backdrop_url(image_base, DETAIL_BACKDROP_SIZE)
            .or_else(|| movie.poster_url(image_base, DETAIL_POSTER_SIZE));
        if let Some(image) = image {
            writeln!(out, "{}", image)?;
        }
        if self.ctx.watchlist.contains(id) {
            writeln!(out, "In your watchlist")?;
        }

        writeln!(out, "\nOverview")?;
        if movie.overview.is_empty() {
            writeln!(out, "No overview available.")?;
        } else {
            writeln!(out, "{}", movie.overview)?;
        }

        writeln!(out, "\nReviews")?;
        self.write_reviews(id, out)
    }

    async fn watchlist<W: Write>(&self, action: WatchlistAction, out: &mut W) -> Result<(), CommandError> {
        match action {
            WatchlistAction::List => {
                let watchlist = self.ctx.watchlist.snapshot();
                if watchlist.is_empty() {
                    writeln!(out, "Your watchlist is empty.")?;
                }
                let image_base = self.feed.client().image_base_url();
                for movie in &watchlist.movies {
                    writeln!(
                        out,
                        "{:>8}  {}  {}",
                        movie.id,
                        movie.title,
                        movie.release_date.as_deref().unwrap_or("-")
                    )?;
                    if let Some(poster) = movie.poster_url(image_base, POSTER_SIZE) {
                        writeln!(out, "          {}", poster)?;
                    }
                }
            }
            WatchlistAction::Add { id } => {
                let movie = self.lookup(id).await?;
                let title = movie.title.clone();
                self.ctx.watchlist.add_movie_and_persist(movie).await?;
                writeln!(out, "Added \"{}\" to your watchlist.", title)?;
            }
            WatchlistAction::Remove { id } => {
                self.ctx.watchlist.remove_movie_and_persist(id).await?;
                writeln!(out, "Removed {} from your watchlist.", id)?;
            }
        }
        Ok(())
    }

    fn review<W: Write>(&self, action: ReviewAction, out: &mut W) -> Result<(), CommandError> {
        match action {
            ReviewAction::Add { id, text } => {
                if !self.ctx.reviews.add_review(id, &text.join(" ")) {
                    return Err(CommandError::EmptyReview);
                }
                writeln!(out, "Review posted.")?;
            }
            ReviewAction::List { id } => self.write_reviews(id, out)?,
        }
        Ok(())
    }

    fn write_reviews<W: Write>(&self, id: MovieId, out: &mut W) -> Result<(), CommandError> {
        let reviews = self.ctx.reviews.reviews_for(id);
        if reviews.is_empty() {
            writeln!(out, "No reviews yet. Be the first!")?;
        }
        for review in reviews {
            writeln!(
                out,
                "{} · {}\n  {}",
                review.user,
                review.date.format("%Y-%m-%d %H:%M"),
                review.text
            )?;
        }
        Ok(())
    }

    async fn theme<W: Write>(&self, action: ThemeAction, out: &mut W) -> Result<(), CommandError> {
        match action {
            ThemeAction::Show => {
                let theme = self.ctx.theme.snapshot();
                writeln!(out, "mode: {}", theme.mode.as_str())?;
                for (name, color) in theme.colors.entries() {
                    writeln!(out, "  {:<16}{}", name, color)?;
                }
            }
            ThemeAction::Toggle => {
                let mode = self.ctx.theme.toggle_theme().await?;
                writeln!(out, "Theme set to {}.", mode.as_str())?;
            }
        }
        Ok(())
    }

    fn profile<W: Write>(&self, out: &mut W) -> Result<(), CommandError> {
        if let Some(user) = self.ctx.auth.user() {
            writeln!(out, "{}\n{}\n", user.name, user.email)?;
        }

        let stats = self.ctx.profile();
        writeln!(out, "Movies Added  {}", stats.movies_added)?;
        writeln!(out, "Avg Rating    {}", stats.average_rating_label())?;
        writeln!(out, "Watch Time    {} hrs", stats.watch_time_hours)?;
        writeln!(out, "Top Genre     {}", stats.top_genre().unwrap_or("-"))?;
        writeln!(out, "\nGenre Preferences")?;

        if stats.top_genres.is_empty() {
            writeln!(out, "No data yet. Add movies to see genre stats.")?;
            return Ok(());
        }
        let max = stats.top_genres.iter().map(|g| g.count).max().unwrap_or(1);
        for genre in &stats.top_genres {
            let width = (genre.count * 20).div_ceil(max);
            writeln!(out, "  {:<10} {} {}", genre.genre, "█".repeat(width), genre.count)?;
        }
        Ok(())
    }
}
