mod decode;
pub use self::decode::DecodeError;

use std::error;
use std::fmt;
use std::io;

use backtrace::Backtrace;

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    backtrace: Option<Backtrace>,
}

#[derive(Debug)]
pub enum ErrorKind {
    Io(io::Error),
    Decode(DecodeError),
    Encode(serde_json::Error),
    Config(serde_yaml::Error),
    UnknownCategory(UnknownCategory),
    // Fault raised by an injected verifier, surfaced at the cli boundary.
    Verifier(Box<dyn error::Error + Send + Sync>),
}

// Label outside of a closed category set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory {
    pub label: String,
}

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown category: {:?}", self.label)
    }
}

impl error::Error for UnknownCategory {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind() {
            ErrorKind::Io(err) => fmt::Display::fmt(err, f),
            ErrorKind::Decode(err) => write!(f, "decode error. {}", err),
            ErrorKind::Encode(err) => write!(f, "encode error. {}", err),
            ErrorKind::Config(err) => write!(f, "config error. {}", err),
            ErrorKind::UnknownCategory(err) => fmt::Display::fmt(err, f),
            ErrorKind::Verifier(err) => write!(f, "verifier fault. {}", err),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::with_backtrace(kind)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::from(ErrorKind::Io(err))
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::from(ErrorKind::Decode(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::from(ErrorKind::Encode(err))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::from(ErrorKind::Config(err))
    }
}

impl From<UnknownCategory> for Error {
    fn from(err: UnknownCategory) -> Self {
        Error::from(ErrorKind::UnknownCategory(err))
    }
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_ref()
    }

    pub fn verifier(err: impl Into<Box<dyn error::Error + Send + Sync>>) -> Self {
        Error::from(ErrorKind::Verifier(err.into()))
    }

    // Caller supplied input did not match the closed schema or category set.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Decode(_) | ErrorKind::UnknownCategory(_)
        )
    }

    fn with_backtrace(kind: ErrorKind) -> Self {
        Self {
            kind,
            backtrace: Some(Backtrace::new()),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Io(err) => Some(err),
            ErrorKind::Decode(err) => Some(err),
            ErrorKind::Encode(err) => Some(err),
            ErrorKind::Config(err) => Some(err),
            ErrorKind::UnknownCategory(err) => Some(err),
            ErrorKind::Verifier(err) => Some(err.as_ref()),
        }
    }
}
