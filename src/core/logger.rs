use flexi_logger::{
    filter::{self, LogLineFilter},
    FlexiLoggerError, Logger, LoggerHandle,
};

use super::configuration::sections::LogConfiguration;

const DEFAULT_LEVEL: &str = "info";

/// Drops the records emitted by the HTTP stack so only client logs remain.
pub struct IgnoreReqwest;

impl IgnoreReqwest {
    fn is_ignored(module_path: &str) -> bool {
        module_path.starts_with("reqwest") || module_path.starts_with("hyper")
    }
}

impl LogLineFilter for IgnoreReqwest {
    fn write(
        &self,
        now: &mut flexi_logger::DeferredNow,
        record: &log::Record,
        log_line_writer: &dyn filter::LogLineWriter,
    ) -> std::io::Result<()> {
        let path = record.module_path().unwrap_or_default();

        if IgnoreReqwest::is_ignored(path) {
            return Ok(());
        }

        log_line_writer.write(now, record)
    }
}

/// Starts a stderr logger at the configured level.
///
/// Meant for applications embedding the client; the returned handle must be
/// kept alive for as long as logging is wanted.
pub fn init(conf: &LogConfiguration) -> Result<LoggerHandle, FlexiLoggerError> {
    let level = conf.level.as_deref().unwrap_or(DEFAULT_LEVEL);

    Logger::try_with_str(level)?
        .filter(Box::new(IgnoreReqwest))
        .format(flexi_logger::detailed_format)
        .start()
}
