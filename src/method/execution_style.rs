use std::fmt;

/// The calling convention a command method requests, derived from the
/// shape of its declared return type.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ExecutionStyle {
    /// The caller receives the decoded value synchronously; the dispatch
    /// waits with a deadline.
    Blocking,
    /// The caller receives a future and manages waiting itself.
    Deferred,
    /// The caller receives a lazy, cancellable sequence of elements.
    Streaming,
}

impl fmt::Display for ExecutionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionStyle::Blocking => write!(f, "blocking"),
            ExecutionStyle::Deferred => write!(f, "deferred"),
            ExecutionStyle::Streaming => write!(f, "streaming"),
        }
    }
}
