use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gethubrepo")]
#[command(about = "Get Github repository")]
#[command(long_about = "gethubrepo-cli is a tool that gives you github repository data from some user")]
#[command(version)]
pub struct Cli {
    /// GitHub username
    #[arg(short, long)]
    pub username: String,

    /// Config file (default is $HOME/.gethubrepo-cli.yaml)
    #[arg(long, env = "GETHUBREPO_CONFIG")]
    pub config: Option<PathBuf>,
}
