pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod output;
pub mod types;

use cli::Cli;
use colored::*;
use config::Config;
use error::Result;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Run one invocation against the real home directory and process environment.
pub async fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let home = dirs::home_dir();
    run_with_env(cli, home.as_deref(), |key| std::env::var(key).ok(), out).await?;
    Ok(())
}

/// Resolve config, fetch the user's repositories and print them to `out`.
/// Returns how many repositories were written.
pub async fn run_with_env<W, F>(
    cli: &Cli,
    home: Option<&Path>,
    env: F,
    out: &mut W,
) -> Result<usize>
where
    W: Write,
    F: Fn(&str) -> Option<String>,
{
    let loaded = Config::load(cli.config.as_deref(), home, env);
    if let Some(path) = &loaded.source {
        eprintln!("{} {}", "Using config file:".dimmed(), path.display());
    }

    list_repos(&loaded.config, &cli.username, out).await
}

/// Fetch `username`'s repositories and write one block per repository.
/// Returns how many were written.
pub async fn list_repos<W: Write>(config: &Config, username: &str, out: &mut W) -> Result<usize> {
    let repos = github::fetch_repos(config, username).await?;
    info!(username, count = repos.len(), "Fetched repositories");

    output::write_repos(out, &repos)?;
    Ok(repos.len())
}
