//! Diagnostic logging via `tracing`.
//!
//! User-facing output goes through `ui::messages`; this is for the
//! developer-level trail (sync attempts, quota trimming, compression).

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Level taken from the configuration file.
    #[default]
    Normal,
    /// Debug and above.
    Verbose,
}

impl Verbosity {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (true, _) => Self::Verbose,
            (false, true) => Self::Quiet,
            _ => Self::Normal,
        }
    }

    /// Directive for this crate; `configured` is the config file's `log_level`.
    pub fn directive(&self, configured: &str) -> String {
        let level = match self {
            Self::Quiet => Level::ERROR.to_string(),
            Self::Verbose => Level::DEBUG.to_string(),
            Self::Normal => configured.to_string(),
        };
        format!("guruhadir={}", level.to_lowercase())
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the computed level.
/// Logs go to stderr so command output stays clean.
pub fn init_logging(verbosity: Verbosity, configured_level: &str) {
    let default_filter = verbosity.directive(configured_level);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time(),
    );

    // already set (tests, repeated runs in one process)
    let _ = subscriber.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_verbosity() {
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn directive_uses_configured_level_when_normal() {
        assert_eq!(Verbosity::Normal.directive("warn"), "guruhadir=warn");
        assert_eq!(Verbosity::Verbose.directive("warn"), "guruhadir=debug");
        assert_eq!(Verbosity::Quiet.directive("info"), "guruhadir=error");
    }

    #[test]
    fn init_logging_twice_does_not_panic() {
        init_logging(Verbosity::Normal, "info");
        init_logging(Verbosity::Verbose, "info");
    }
}
