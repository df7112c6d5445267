use clap::Parser;
use packed_log::cli::{Cli, execute_command};
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so stdout stays clean for piping slot contents
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    execute_command(&cli);
}
