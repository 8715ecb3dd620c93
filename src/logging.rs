// src/logging.rs

//! Subscriber setup shared by the solver binaries.

use tracing::Level;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "QTRAFFIC_LOG";

/// Parses `trace|debug|info|warn|error`; anything else means `warn`.
pub fn parse_level(value: Option<&str>) -> Level {
    match value {
        Some("trace") => Level::TRACE,
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("error") => Level::ERROR,
        _ => Level::WARN,
    }
}

/// Installs a stderr `fmt` subscriber so stdout carries only results.
pub fn init_from_env() {
    let level = parse_level(std::env::var(LOG_ENV).ok().as_deref());
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_levels_fall_back_to_warn() {
        assert_eq!(parse_level(Some("debug")), Level::DEBUG);
        assert_eq!(parse_level(Some("loud")), Level::WARN);
        assert_eq!(parse_level(None), Level::WARN);
    }
}
