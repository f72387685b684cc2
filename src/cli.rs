use clap::Parser;
use std::path::PathBuf;

/// Headless demo runner for the ledger globe scene
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Render tick rate in frames per second
    #[arg(long = "fps", value_name = "FPS", default_value = "60.0")]
    pub fps: f32,

    /// Synthetic confirmation rate (events per second)
    #[arg(short = 'r', long = "rate", value_name = "PER_SEC", default_value = "2.0")]
    pub rate: f32,

    /// Run duration in seconds
    #[arg(short = 'd', long = "duration", value_name = "SECONDS", default_value = "20.0")]
    pub duration: f32,

    /// Donation destination account (enables donation effect detection)
    #[arg(long = "donation-account", value_name = "ACCOUNT")]
    pub donation_account: Option<String>,

    /// Soft cap on live rockets (oldest evicted first)
    #[arg(long = "max-rockets", value_name = "N")]
    pub max_rockets: Option<usize>,

    /// Settings file (JSON); flags above override its values
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
