//! Command line interface
//!
//! Thin shell over [`NamespacedCache`]: each subcommand maps onto one facade
//! operation and its result is printed as JSON.

use clap::{Parser, Subcommand};
use nscache_application::NamespacedCache;
use nscache_domain::error::Result;
use nscache_domain::value_objects::{CommandReply, KeyCount, KeysDeleted};
use nscache_infrastructure::config::ConfigLoader;
use nscache_infrastructure::logging::init_logging;
use serde::Serialize;
use std::path::PathBuf;

/// Command line interface for nscache
#[derive(Parser, Debug)]
#[command(name = "nscache")]
#[command(about = "Namespaced cache over a key-value store")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Cache operations
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store a value under a key
    Set {
        key: String,
        value: String,
        /// Expiration in seconds, overriding the configured default
        #[arg(short, long)]
        expire: Option<u64>,
    },
    /// Print the value stored under a key
    Get { key: String },
    /// Count the keys in the namespace
    Count,
    /// Delete every key in the namespace
    Clear,
}

/// Result of one command, serialized as printed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    Reply(CommandReply),
    Value(String),
    Count(KeyCount),
    Deleted(KeysDeleted),
}

/// Run a single command against the cache
pub async fn execute(cache: &NamespacedCache, command: &Command) -> Result<CommandOutput> {
    let output = match command {
        Command::Set { key, value, expire } => {
            CommandOutput::Reply(cache.set(key, value, *expire).await?)
        }
        Command::Get { key } => CommandOutput::Value(cache.get(key).await?),
        Command::Count => CommandOutput::Count(cache.count_keys().await?),
        Command::Clear => CommandOutput::Deleted(cache.clear_keys().await?),
    };
    Ok(output)
}

/// Load configuration, set up logging, build the cache and run the command
pub async fn run(cli: &Cli) -> Result<CommandOutput> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;

    init_logging(&config.logging)?;

    let cache = nscache_infrastructure::create_cache(&config.cache).await?;
    execute(&cache, &cli.command).await
}
