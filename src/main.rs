use clap::Parser;
use colored::*;
use gethubrepo::cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Diagnostics go to stderr; stdout carries only the repository listing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Errors end the run after being reported; the exit status stays 0.
    if let Err(e) = gethubrepo::run(&cli, &mut out).await {
        println!("{}", e.to_string().red());
    }
}
