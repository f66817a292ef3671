use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Metadata, Record};

/// Writes log records to stderr so they never mix with plan output
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        };
        Self { level }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

fn format_line(timestamp: DateTime<Local>, level: Level, target: &str, message: &str) -> String {
    format!(
        "{} {:<5} {}: {}",
        timestamp.format("%H:%M:%S%.3f"),
        level,
        target,
        message
    )
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{}",
                format_line(
                    Local::now(),
                    record.level(),
                    record.target(),
                    &record.args().to_string(),
                )
            );
        }
    }

    fn flush(&self) {}
}
