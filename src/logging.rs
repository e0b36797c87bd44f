use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "DATA_TYPES_LOG";

/// Installs a stderr subscriber filtered by `DATA_TYPES_LOG`.
///
/// Stdout carries the sample output only, so diagnostics never mix into it.
/// Calling this twice is harmless; the second install is ignored.
pub fn init_logging() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    // A second install fails once a global subscriber exists; keep the first.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logging();
        init_logging();
        tracing::debug!("logging initialised");
    }
}
