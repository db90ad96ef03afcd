use tracing_subscriber::EnvFilter;

use pawns_only_chess::console::console_top::run_stdio_session;
use pawns_only_chess::console::session_config::{SessionConfig, DEFAULT_LOG_FILTER, LOG_ENV_VAR};

fn main() -> Result<(), String> {
    // Logs go to stderr; stdout carries the game itself.
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = SessionConfig::from_args(std::env::args().skip(1))?;
    run_stdio_session(&config).map_err(|err| err.to_string())?;
    Ok(())
}
