mod config;
mod error;
mod logger;
mod object;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerFormat, LoggerLevel, LoggerTimeZone, init_local_offset};

/// Installs the global tracing subscriber described by `cfg`.
///
/// Fails with [`LoggerError::AlreadyInitialized`] if a global subscriber is
/// already set.
///
/// For [`LoggerTimeZone::Local`], call [`init_local_offset`] first, while the
/// process is still single-threaded.
///
/// # Examples
/// ```rust
/// use runlabel_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::default();
/// init_logger(&config).expect("logger");
/// tracing::info!("ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => logger::logger_text(cfg),
        LoggerFormat::Json => logger::logger_json(cfg),
        LoggerFormat::Journald => logger::logger_journald(cfg),
    }
}
