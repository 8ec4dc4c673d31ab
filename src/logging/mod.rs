
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

use chrono::Local;

/// Directory used when no `--logs` path is given.
pub const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogTarget {
    ConsoleOnly,
    ConsoleAndFile,
    FileOnly,
}

impl LogTarget {
    fn console(self) -> bool {
        matches!(self, LogTarget::ConsoleOnly | LogTarget::ConsoleAndFile)
    }

    fn file(self) -> bool {
        matches!(self, LogTarget::ConsoleAndFile | LogTarget::FileOnly)
    }
}

/// Replies go to stdout, problems to stderr.
fn write_console(level: LogLevel, line: &str) {
    match level {
        LogLevel::Info => println!("{line}"),
        LogLevel::Warn | LogLevel::Error => eprintln!("{line}"),
    }
}

struct OpenLog {
    file: Mutex<File>,
    path: PathBuf,
}

impl OpenLog {
    fn create_in(dir: &Path) -> std::io::Result<Self> {
        fs::create_dir_all(dir)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let path = dir.join(format!("session-{stamp}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            file: Mutex::new(file),
            path,
        })
    }

    fn write(&self, level: LogLevel, line: &str) {
        if let Ok(mut file) = self.file.lock() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let _ = writeln!(file, "[{timestamp}] {:<5} {line}", level.to_string());
        }
    }
}

/// The per-session log file. Opening is tried once; a failure leaves the
/// session without a file.
struct SessionFile {
    dir: PathBuf,
    opened: OnceLock<Option<OpenLog>>,
}

impl SessionFile {
    fn get(&self) -> Option<&OpenLog> {
        self.opened
            .get_or_init(|| match OpenLog::create_in(&self.dir) {
                Ok(log) => Some(log),
                Err(err) => {
                    eprintln!(
                        "WARN: File logging unavailable in '{}'; continuing without a log file. ({err})",
                        self.dir.display()
                    );
                    None
                }
            })
            .as_ref()
    }

    fn path(&self) -> Option<PathBuf> {
        self.opened.get()?.as_ref().map(|log| log.path.clone())
    }
}

/// Session logger shared by the REPL and the command registry. The log
/// directory is fixed when the logger is built; the file inside it is
/// created on the first file-targeted message.
#[derive(Clone)]
pub struct Logger {
    file: Arc<SessionFile>,
    file_enabled: Arc<AtomicBool>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self::in_dir(DEFAULT_LOG_DIR)
    }

    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            file: Arc::new(SessionFile {
                dir: dir.as_ref().to_path_buf(),
                opened: OnceLock::new(),
            }),
            file_enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    fn log(&self, level: LogLevel, message: &str, target: LogTarget) {
        if target.console() {
            write_console(level, message);
        }

        if target.file() && self.file_logging_enabled() {
            if let Some(log) = self.file.get() {
                log.write(level, message);
            }
        }
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Info, message.as_ref(), target);
    }

    pub fn warn(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Warn, message.as_ref(), target);
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Error, message.as_ref(), target);
    }

    pub fn set_file_logging_enabled(&self, enabled: bool) {
        self.file_enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.file_enabled.load(Ordering::SeqCst)
    }

    pub fn log_dir(&self) -> &Path {
        &self.file.dir
    }

    /// Path of the session file, once it has been created.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.file.path()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("log_dir", &self.log_dir())
            .field("log_path", &self.log_path())
            .field("file_enabled", &self.file_logging_enabled())
            .finish()
    }
}
