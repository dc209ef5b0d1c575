use crate::runtime::fields::Fields;

/// Error codes prefixed by phase: C = command syntax, G = geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Command syntax
    C001, // unexpected character
    C002, // invalid number

    // Geometry
    G001, // zero slope with a y delta
    G002, // vertical slope with x given
    G003, // length too short
    G004, // under-determined parameter set
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::C001 => "C001",
            Self::C002 => "C002",
            Self::G001 => "G001",
            Self::G002 => "G002",
            Self::G003 => "G003",
            Self::G004 => "G004",
        }
    }

    /// Malformed command text, as opposed to a well-formed but unsolvable one.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::C001 | Self::C002)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fatal command failure. Aborts the remainder of the command string.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("[{code}] {message}. Command: \"{command}\"{}", fields_suffix(.fields))]
pub struct Error {
    pub code: ErrorCode,
    /// Raw command text as written between semicolons.
    pub command: String,
    pub message: String,
    /// Resolved field values at the time of failure. `None` for syntax errors.
    pub fields: Option<Fields>,
}

impl Error {
    pub fn new(code: ErrorCode, command: impl Into<String>, message: impl Into<String>) -> Self {
        Self { code, command: command.into(), message: message.into(), fields: None }
    }

    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = Some(fields);
        self
    }
}

fn fields_suffix(fields: &Option<Fields>) -> String {
    fields.map(|f| format!(" ({f})")).unwrap_or_default()
}

// ─────────────────────────────────────────────────────────────────────────────

/// Failure to load or save `Options`.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },
}
