//! Logger setup for the CLI.
//!
//! The planner reports skipped drones and unknown ids through `log`. Here
//! they go to stderr, so stdout stays clean for plans and JSON. `RUST_LOG`,
//! when set, takes precedence over the level passed in.

use log::LevelFilter;

pub type LoggingError = Box<dyn std::error::Error + Send + Sync>;

/// Install the stderr logger (`env_logger`) with `level` as the default filter.
#[cfg(not(feature = "tracing"))]
pub fn init_logging(level: LevelFilter) -> Result<(), LoggingError> {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "[workbench {:>5} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;
    Ok(())
}

/// Install a `tracing-subscriber` fmt subscriber with `level` as the default
/// directive. `log` records are forwarded to it.
#[cfg(feature = "tracing")]
pub fn init_logging(level: LevelFilter) -> Result<(), LoggingError> {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::builder()
        .with_default_directive(tracing_level(level).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .try_init()
}

#[cfg(feature = "tracing")]
fn tracing_level(level: LevelFilter) -> tracing_subscriber::filter::LevelFilter {
    use tracing_subscriber::filter::LevelFilter as Tracing;
    match level {
        LevelFilter::Off => Tracing::OFF,
        LevelFilter::Error => Tracing::ERROR,
        LevelFilter::Warn => Tracing::WARN,
        LevelFilter::Info => Tracing::INFO,
        LevelFilter::Debug => Tracing::DEBUG,
        LevelFilter::Trace => Tracing::TRACE,
    }
}
