use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the stderr logger.
///
/// `RUST_LOG` wins when set. Otherwise only warnings are shown, or debug
/// output from the sgamargin crates with `--verbose`.
pub fn setup_logging(verbose: bool) {
    let default = if verbose {
        "warn,sgamargin_core=debug,sgamargin=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
