//! Log output targets
//!
//! Routes access/info lines and error lines to stdout/stderr or to
//! configured files. Initialized once at startup; before that, lines
//! fall through to the standard streams so early failures stay visible.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

static WRITER: OnceLock<LogWriter> = OnceLock::new();

/// Where one stream of log lines ends up
enum Destination {
    Stdout,
    Stderr,
    File(Mutex<File>),
}

impl Destination {
    fn for_path(path: Option<&str>, fallback: Self) -> io::Result<Self> {
        match path {
            Some(p) => Ok(Self::File(Mutex::new(open_append(p)?))),
            None => Ok(fallback),
        }
    }

    fn line(&self, message: &str) {
        match self {
            Self::Stdout => println!("{message}"),
            Self::Stderr => eprintln!("{message}"),
            Self::File(file) => {
                if let Ok(mut f) = file.lock() {
                    let _ = writeln!(f, "{message}");
                }
            }
        }
    }
}

/// The pair of destinations the server writes to
struct LogWriter {
    access: Destination,
    error: Destination,
}

/// Open a log file for appending, creating parent directories as needed
fn open_append(path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Set up the global writer. Called once at startup; a second call is a
/// configuration bug and reports as such.
pub fn init(access_log_file: Option<&str>, error_log_file: Option<&str>) -> io::Result<()> {
    let writer = LogWriter {
        access: Destination::for_path(access_log_file, Destination::Stdout)?,
        error: Destination::for_path(error_log_file, Destination::Stderr)?,
    };
    WRITER
        .set(writer)
        .map_err(|_| io::Error::new(io::ErrorKind::AlreadyExists, "logger initialized twice"))
}

/// Access log line (also carries startup/info output)
pub fn access(message: &str) {
    match WRITER.get() {
        Some(w) => w.access.line(message),
        None => println!("{message}"),
    }
}

/// Error log line
pub fn error(message: &str) {
    match WRITER.get() {
        Some(w) => w.error.line(message),
        None => eprintln!("{message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_append_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("log-writer-test-{}", std::process::id()));
        let path = dir.join("nested").join("server.log");
        let file = open_append(path.to_str().expect("temp path is utf-8"));
        assert!(file.is_ok());
        assert!(path.exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_uninitialized_writes_do_not_panic() {
        // Before init, lines go to the standard streams
        access("test access line");
        error("test error line");
    }
}
