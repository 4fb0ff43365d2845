use clap::Parser;
use tasks_enhancer::cli::commands::Cli;
use tasks_enhancer::cli::handlers;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostic filter, e.g. `TE_LOG=debug`
const LOG_ENV: &str = "TE_LOG";

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
