use std::error;
use std::fmt;

// DecodeError represents failure to read an interchange document.
// every variant carries the position or the dotted field path that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    // Document is not well-formed json.
    Syntax {
        line: usize,
        column: usize,
        description: String,
    },
    // Document is well-formed but a value has the wrong shape.
    Schema {
        path: String,
        expected: &'static str,
        found: String,
    },
    // Required field is absent.
    MissingField { path: String },
}

impl DecodeError {
    pub fn path(&self) -> Option<&str> {
        match self {
            DecodeError::Syntax { .. } => None,
            DecodeError::Schema { path, .. } | DecodeError::MissingField { path } => Some(path),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecodeError::Syntax {
                line,
                column,
                description,
            } => write!(
                f,
                "syntax error at line {} column {}: {}",
                line, column, description
            ),
            DecodeError::Schema {
                path,
                expected,
                found,
            } => write!(f, "schema mismatch at {}: expected {}, found {}", path, expected, found),
            DecodeError::MissingField { path } => write!(f, "missing field {}", path),
        }
    }
}

impl error::Error for DecodeError {}
