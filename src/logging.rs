use tracing_subscriber::{EnvFilter, fmt};

/// Level used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Builds the log filter from `RUST_LOG`-style directives, falling back to
/// [`DEFAULT_DIRECTIVE`].
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global fmt subscriber. Call once at process start.
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    fmt().with_env_filter(env_filter(directives.as_deref())).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    fn under<R>(directives: Option<&str>, check: impl FnOnce() -> R) -> R {
        let subscriber = fmt().with_env_filter(env_filter(directives)).finish();
        tracing::subscriber::with_default(subscriber, check)
    }

    #[test]
    fn rust_log_can_raise_verbosity() {
        assert!(under(Some("debug"), || tracing::enabled!(Level::DEBUG)));
        assert!(under(Some("quest_tracker=debug"), || {
            tracing::enabled!(target: "quest_tracker::store", Level::DEBUG)
        }));
    }

    #[test]
    fn rust_log_can_lower_verbosity() {
        assert!(!under(Some("warn"), || tracing::enabled!(Level::INFO)));
        assert!(under(Some("warn"), || tracing::enabled!(Level::WARN)));
    }

    #[test]
    fn defaults_to_info() {
        assert!(under(None, || tracing::enabled!(Level::INFO)));
        assert!(!under(None, || tracing::enabled!(Level::DEBUG)));
        assert!(!under(Some("   "), || tracing::enabled!(Level::DEBUG)));
    }
}
