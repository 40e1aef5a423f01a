use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kickoff::config::Config;

mod commands;

#[derive(Parser)]
#[command(
    name = "kickoff",
    version,
    about = "Football player management client",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// Path to a TOML config file (environment is used otherwise)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Player listing and lookup
    Players {
        #[command(subcommand)]
        action: PlayersAction,
    },

    /// Team listing
    Teams {
        #[command(subcommand)]
        action: TeamsAction,
    },

    /// Account session commands
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// Interactive search: type to search, `:team <id>`, `:page <n>`,
    /// `:clear`, `:retry`, `:quit`
    Browse,
}

#[derive(Subcommand)]
enum PlayersAction {
    /// List players with optional filters
    List {
        #[arg(short, long, default_value = "")]
        search: String,

        #[arg(short, long, default_value = "")]
        team: String,

        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Page size (defaults to the configured page size)
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Show one player and its comments
    Show { id: String },
}

#[derive(Subcommand)]
enum TeamsAction {
    /// List teams
    List {
        #[arg(short, long, default_value = "")]
        search: String,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Sign in and show the account profile
    Signin {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    config.validate().context("Invalid configuration")?;

    setup_tracing(&config.logging.format, &config.logging.level, cli.verbose)?;

    tracing::info!(base_url = %config.api.base_url, "kickoff starting");

    match cli.command {
        Commands::Players { action } => match action {
            PlayersAction::List {
                search,
                team,
                page,
                limit,
            } => {
                let limit = limit.unwrap_or(config.search.page_size);
                commands::players::list(&config, &search, &team, page, limit).await?;
            }
            PlayersAction::Show { id } => commands::players::show(&config, &id).await?,
        },
        Commands::Teams { action } => match action {
            TeamsAction::List { search } => commands::teams::list(&config, &search).await?,
        },
        Commands::Auth { action } => match action {
            AuthAction::Signin { email, password } => {
                commands::auth::signin(&config, email, password).await?;
            }
        },
        Commands::Browse => commands::browse::browse(&config).await?,
    }

    Ok(())
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("kickoff=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_new(format!("kickoff={level},warn"))
            .context("Invalid log level")?
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
