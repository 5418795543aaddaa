use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod db;

use commands::{BeesCommand, ConfigCommand, TypesCommand};
use config::Config;
use db::{init_db, SqliteDocumentStore};

#[derive(Parser)]
#[command(name = "herdbook")]
#[command(version)]
#[command(about = "Keep track of animal types and Beeste weights", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the animal-type list
    Types(TypesCommand),

    /// Manage Beeste records
    Bees(BeesCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    if let Some(path) = &config.config_file {
        tracing::debug!("Loaded config from {}", path.display());
    }

    match cli.command {
        Some(Commands::Types(cmd)) => {
            let store = open_store(&config).await?;
            cmd.run(store).await?;
        }
        Some(Commands::Bees(cmd)) => {
            let store = open_store(&config).await?;
            cmd.run(store).await?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config)?;
        }
        None => {
            let store = open_store(&config).await?;
            let screen = commands::render_screen(config.default_screen.value, store).await?;
            print!("{}", screen);
        }
    }

    Ok(())
}

async fn open_store(config: &Config) -> Result<SqliteDocumentStore, sqlx::Error> {
    let pool = init_db(&config.database_path.value).await?;
    Ok(SqliteDocumentStore::new(pool))
}
