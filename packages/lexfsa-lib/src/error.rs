use std::{error::Error, fmt, io};

/// Typed failure reasons for core FSA operations.
///
/// Precondition violations are surfaced explicitly instead of silently
/// producing a plausible-looking but wrong result. Undefined transitions are
/// not errors; recognition treats them as ordinary rejection.
#[derive(Debug)]
pub enum FsaError {
    /// The operation requires a deterministic automaton but some
    /// (state, symbol) pair has more than one target.
    NotDeterministic,
    /// The automaton has no start state, i.e. no transition was ever added.
    MissingStartState,
    /// Reading an external input failed.
    Io(io::Error),
}

impl fmt::Display for FsaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsaError::NotDeterministic => {
                write!(f, "operation requires a deterministic automaton")
            }
            FsaError::MissingStartState => write!(f, "automaton has no start state"),
            FsaError::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl Error for FsaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FsaError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FsaError {
    fn from(value: io::Error) -> Self {
        FsaError::Io(value)
    }
}
