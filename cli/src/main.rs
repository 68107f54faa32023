//! `holidaze`: terminal client for the Holidaze API.
//!
//! Shares the request layer with the browser client through the `api` crate
//! and the listing/booking rules through `stays`, so a booking refused here
//! is refused in the browser for the same reason.

mod commands;
mod transport;

use api::{ApiConfig, ApiError, DEFAULT_BASE_URL, HolidazeApi, Role};
use clap::{Parser, Subcommand};
use stays::{BookingError, SelectionError, SortMode};
use tracing::Level;

use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("missing token; pass --token or set HOLIDAZE_TOKEN")]
    MissingToken,
    #[error("missing user name; pass --user or set HOLIDAZE_USER")]
    MissingUser,
    #[error("this command needs a venue manager account")]
    NotManager,
    #[error("invalid date `{0}`; expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("check-out must not be before check-in")]
    InvalidRange,
    #[error("missing expected field `{0}`")]
    MissingField(&'static str),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Booking(#[from] BookingError),
    #[error("cannot book: {0}")]
    Selection(#[from] SelectionError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "holidaze", about = "Holidaze venue booking CLI")]
struct Cli {
    #[arg(long, env = "HOLIDAZE_API_BASE", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "HOLIDAZE_API_KEY")]
    api_key: Option<String>,

    #[arg(long, env = "HOLIDAZE_TOKEN")]
    token: Option<String>,

    #[arg(long, env = "HOLIDAZE_USER")]
    user: Option<String>,

    #[arg(long, env = "HOLIDAZE_ROLE", value_parser = parse_role)]
    role: Option<Role>,

    /// Log requests and responses.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List venues, optionally searched, filtered by capacity and sorted.
    Venues {
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = 1)]
        guests: u32,
        #[arg(long, default_value = "popular")]
        sort: SortMode,
    },
    /// Show one venue with its booked date ranges.
    Venue {
        id: String,
        /// Print the raw venue JSON instead of a summary.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Log in and print shell exports for the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Book a venue after checking the dates against its bookings.
    Book {
        venue_id: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long, default_value_t = 1)]
        guests: u32,
    },
    /// A manager's venues and the bookings on them.
    Dashboard,
    DeleteVenue {
        id: String,
    },
}

/// Session values taken from flags or the environment.
#[derive(Debug, Clone)]
pub(crate) struct CliContext {
    pub api: HolidazeApi<ReqwestTransport>,
    pub token: Option<String>,
    pub user: Option<String>,
    pub role: Option<Role>,
}

impl CliContext {
    pub(crate) fn token(&self) -> Result<&str, CliError> {
        self.token.as_deref().filter(|t| !t.is_empty()).ok_or(CliError::MissingToken)
    }

    pub(crate) fn user(&self) -> Result<&str, CliError> {
        self.user.as_deref().filter(|u| !u.is_empty()).ok_or(CliError::MissingUser)
    }
}

fn parse_role(raw: &str) -> Result<Role, String> {
    Role::parse(raw).ok_or_else(|| format!("unknown role `{raw}`; expected customer or manager"))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let ctx = CliContext {
        api: HolidazeApi::new(ReqwestTransport::default(), ApiConfig::new(cli.base_url, cli.api_key)),
        token: cli.token,
        user: cli.user,
        role: cli.role,
    };

    let result = match cli.command {
        Command::Venues { search, guests, sort } => commands::venues(&ctx, search.as_deref(), guests, sort).await,
        Command::Venue { id, json } => commands::venue(&ctx, &id, json).await,
        Command::Login { email, password } => commands::login(&ctx, &email, &password).await,
        Command::Book { venue_id, from, to, guests } => commands::book(&ctx, &venue_id, &from, &to, guests).await,
        Command::Dashboard => commands::dashboard(&ctx).await,
        Command::DeleteVenue { id } => commands::delete_venue(&ctx, &id).await,
    };

    if let Err(error) = result {
        tracing::error!(%error, "command failed");
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
