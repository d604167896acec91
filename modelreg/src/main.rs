//! modelreg command-line entry point

use clap::Parser;
use modelreg::cli::{self, Cli};
use modelreg::config::RegistryConfig;
use modelreg::logging;

fn main() {
    let cli = Cli::parse();
    let config = RegistryConfig::from_env();

    if let Err(e) = logging::init(&config.log_level) {
        eprintln!("Warning: {}", e);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = cli::run(cli, config, &mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(cli::exit_code(&e));
    }
}
