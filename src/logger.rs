use std::io::Write;
use std::time::Instant;

use log::{Log, Metadata, Record};
use parking_lot::Mutex;

/// Diagnostics go to stderr so stdout stays a clean stream of aliases
struct KubealiasLogger {
    file: Option<Mutex<std::fs::File>>,
    filter: log::LevelFilter,
    start: Instant,
}

impl Log for KubealiasLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        eprintln!("[{}] {}", record.level(), record.args());

        if let Some(ref file) = self.file {
            let elapsed = self.start.elapsed().as_secs_f64();
            let _ = writeln!(
                file.lock(),
                "[{elapsed:.3}s] [{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Some(ref file) = self.file {
            let _ = file.lock().flush();
        }
    }
}

/// Level from `RUST_LOG`, falling back to warnings only
fn level_from_env() -> log::LevelFilter {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(log::LevelFilter::Warn)
}

/// Initialize the global logger. Must be called once before any logging.
///
/// # Errors
///
/// Returns `log::SetLoggerError` if a logger is already installed.
pub fn init(log_file: Option<std::fs::File>) -> Result<(), log::SetLoggerError> {
    let filter = level_from_env();

    let logger = KubealiasLogger {
        file: log_file.map(Mutex::new),
        filter,
        start: Instant::now(),
    };

    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(filter);
    Ok(())
}
