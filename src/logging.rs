use std::env;

use log::{self, Level, LevelFilter, Metadata, Record};

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "SEABATTLE_LOG";

// Logs go to stderr so they never interleave with the boards on stdout.
struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            match record.level() {
                Level::Error | Level::Warn => {
                    eprintln!("{} - {}", record.level(), record.args())
                }
                _ => eprintln!("{} [{}] {}", record.level(), record.target(), record.args()),
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Parse a level name such as `debug` or `off`, falling back to `info`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Initialize logging with a level taken from the `SEABATTLE_LOG` environment
/// variable. Defaults to `info` if the variable is not set or invalid.
/// Calling it again only updates the level.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
