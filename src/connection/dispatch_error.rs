use std::fmt;
use std::io;

/// Errors originating in the connection collaborator. The engine
/// propagates these unchanged; retry policy, if any, lives with the
/// connection.
#[derive(Debug)]
pub enum DispatchError {
    /// The connection can no longer carry commands.
    ConnectionClosed,
    /// The remote end rejected the command.
    Remote(String),
    /// A transport-level I/O failure.
    Io(io::Error),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::ConnectionClosed => write!(f, "connection closed"),
            DispatchError::Remote(message) => write!(f, "remote error: {}", message),
            DispatchError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DispatchError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DispatchError {
    fn from(e: io::Error) -> Self {
        DispatchError::Io(e)
    }
}
