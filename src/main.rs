use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use sutility::core::config::{self, CliOverrides};
use sutility::{logging, tui};

#[derive(Parser)]
#[command(name = "sutility", about = "Disk usage and battery status menu")]
struct Args {
    /// Filesystem path to report disk usage for
    #[arg(long)]
    disk_path: Option<PathBuf>,

    /// Battery device directory holding `capacity` and `status`
    #[arg(long)]
    battery_dir: Option<PathBuf>,

    /// Log file (the terminal belongs to the menu)
    #[arg(long, default_value = "sutility.log")]
    log_file: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logger first, so config warnings are kept
    logging::init(&args.log_file);

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("sutility: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            disk_path: args.disk_path,
            battery_dir: args.battery_dir,
            verbose: args.verbose,
        },
    );
    logging::apply_level(resolved.log_level);

    log::info!("sutility starting up: {:?}", resolved);

    match tui::run(resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal error: {}", e);
            eprintln!("sutility: terminal error: {e}");
            ExitCode::FAILURE
        }
    }
}
