use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use xolak::core::config::{self, CliOverrides};

#[derive(Parser)]
#[command(name = "xolak", about = "Find open-source projects worth contributing to")]
struct Args {
    /// Base URL of the recommendation backend (e.g. http://localhost:8080)
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Where to write the debug log
    #[arg(long, default_value = "xolak.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger only: the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            warn!("Refusing to start with a broken config: {}", e);
            return Err(std::io::Error::other(e));
        }
    };

    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url,
            timeout_secs: args.timeout,
        },
    );

    info!(
        "Xolak starting up: backend={}, timeout={:?}",
        resolved.base_url, resolved.request_timeout
    );

    xolak::tui::run(resolved)
}
