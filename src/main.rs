use clap::Parser;
use roomdesk::core::config;
use roomdesk::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roomdesk", about = "Room booking desk in the terminal")]
struct Args {
    /// Location to open first, e.g. /manage-rooms
    #[arg(short, long)]
    path: Option<String>,

    /// JSON file with rooms and bookings to display
    #[arg(short, long)]
    data: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to roomdesk.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("roomdesk.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let (file_config, notice) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => {
            log::warn!("Ignoring config file: {}", e);
            (
                config::RoomdeskConfig::default(),
                Some(format!("Using default settings ({e})")),
            )
        }
    };
    let mut resolved = config::resolve(&file_config, args.path.as_deref(), args.data.as_deref());
    resolved.notice = notice;

    log::info!(
        "Roomdesk starting at {} (fallback: {:?})",
        resolved.start_path,
        resolved.fallback
    );

    tui::run(resolved)
}
