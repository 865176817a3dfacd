use tracing_subscriber::{fmt, EnvFilter};

/// Stdout carries the JSON document, so log output goes to stderr and stays
/// quiet unless `RUST_LOG` asks for more.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
