use clap::Parser;
use halaman::LogLevel;
use halaman::core::catalog::sample_catalog;
use halaman::core::config;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "halaman", about = "Lost-and-found board in the terminal")]
struct Args {
    /// Log verbosity (overrides the config file)
    #[arg(short, long, value_enum)]
    log_level: Option<LogLevel>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let file_config = match config::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("halaman: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.log_level.map(LogLevel::to_filter));

    // Initialize file logger - stdout belongs to the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    let catalog = sample_catalog();
    log::info!("Halaman starting up with {} items", catalog.len());

    halaman::tui::run(catalog, &resolved)
}
