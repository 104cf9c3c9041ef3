use tracing_subscriber::EnvFilter;

/// The binary and the library it drives.
const LOG_TARGETS: &[&str] = &["jalali", "jalali_date"];

/// Level for a `-v` count: none is `warn`, then `info`, `debug`, `trace`.
const fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn directives(verbosity: u8) -> String {
    let level = level(verbosity);
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the subscriber for conversion, format and grid events.
///
/// Output goes to stderr; stdout carries only dates, grids and event lines.
/// A set `RUST_LOG` replaces the `-v` level entirely.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
