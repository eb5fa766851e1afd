//! Console logger behind the `log` facade.
//!
//! Info goes to stdout and warnings/errors to stderr, so `--quiet` runs still
//! surface problems. With `--logfile`, every emitted line is also appended to
//! the file with ANSI color codes stripped.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::error::CliError;

struct CliLogger {
    level: LevelFilter,
    timestamps: bool,
    file: Option<Mutex<File>>,
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = record.args().to_string();
        let timestamp = self
            .timestamps
            .then(|| chrono::Local::now().format("%H:%M:%S%.3f").to_string());
        let line = decorate(record.level(), &message, timestamp.as_deref());

        if record.level() <= Level::Warn {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }

        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{}", strip_ansi_escapes::strip_str(&line));
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                let _ = f.flush();
            }
        }
    }
}

/// Prefix a message with a timestamp and level in verbose mode.
///
/// Normal output is left as-is; commands format their own markers.
fn decorate(level: Level, message: &str, timestamp: Option<&str>) -> String {
    match timestamp {
        Some(ts) => format!("[{ts} {level:<5}] {message}"),
        None => message.to_string(),
    }
}

/// Install the logger. `verbose` wins over `quiet` when both are given.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let file = match logfile {
        Some(path) => Some(Mutex::new(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| CliError::logging(format!("cannot open {}: {e}", path.display())))?,
        )),
        None => None,
    };

    log::set_boxed_logger(Box::new(CliLogger {
        level,
        timestamps: verbose,
        file,
    }))
    .map_err(|e| CliError::logging(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_are_untouched() {
        assert_eq!(decorate(Level::Info, "  copied", None), "  copied");
        assert_eq!(decorate(Level::Warn, "careful", None), "careful");
    }

    #[test]
    fn verbose_lines_get_timestamp_and_level() {
        assert_eq!(
            decorate(Level::Debug, "Created /out/nes", Some("12:00:00.000")),
            "[12:00:00.000 DEBUG] Created /out/nes"
        );
    }

    #[test]
    fn logfile_lines_lose_color_codes() {
        let colored = "\u{1b}[32m\u{2714}\u{1b}[0m 3 files copied";
        assert_eq!(
            strip_ansi_escapes::strip_str(colored),
            "\u{2714} 3 files copied"
        );
    }
}
