use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Raised by field constructors when a raw value does not satisfy its format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid phone number '{0}'. Expected 10 or 12 digits.")]
    InvalidPhone(String),

    #[error("Invalid date '{0}'. Use the DD.MM.YYYY format.")]
    InvalidBirthday(String),

    #[error("Contact name must not be empty.")]
    EmptyName,
}

/// Crate-wide error set.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Domain -------------------------------------------------------------
    /// Field validation failure (phone, birthday, name).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // ---- Command input ------------------------------------------------------
    /// A handler was called with fewer positional arguments than it needs.
    #[error("Missing argument(s). Usage: {usage}")]
    MissingArgument { usage: String },

    /// A positional argument was present but unusable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// First token of the line does not name a command.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // ---- Config -------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// IO passthrough (stdin, config file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (config decode).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create a generic config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
    /// Helper for unknown command.
    pub fn unknown<S: Into<String>>(cmd: S) -> Self {
        Error::UnknownCommand(cmd.into())
    }
    /// Helper for a bad positional argument.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

// ----------------------- Small result helpers --------------------------------

/// Map an `Option<T>` into `Result<T, Error::MissingArgument>` carrying the usage line.
/// Used by handlers when pulling positional arguments.
pub fn require_arg<T, S: Into<String>>(opt: Option<T>, usage: S) -> Result<T> {
    opt.ok_or_else(|| Error::MissingArgument {
        usage: usage.into(),
    })
}
