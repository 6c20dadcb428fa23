use crate::execute::{BlockingCommand, DeferredCommand, StreamingCommand};
use crate::method::{CommandMethod, ExecutionStyle};
use std::fmt;

/// A resolved, ready-to-invoke command in one of the three execution
/// styles. Lookup strategies produce these once per method; the client
/// caches them for the lifetime of the generated interface.
pub enum ExecutableCommand {
    Blocking(BlockingCommand),
    Deferred(DeferredCommand),
    Streaming(StreamingCommand),
}

impl ExecutableCommand {
    pub fn style(&self) -> ExecutionStyle {
        match self {
            ExecutableCommand::Blocking(_) => ExecutionStyle::Blocking,
            ExecutableCommand::Deferred(_) => ExecutionStyle::Deferred,
            ExecutableCommand::Streaming(_) => ExecutionStyle::Streaming,
        }
    }

    pub fn method(&self) -> &CommandMethod {
        match self {
            ExecutableCommand::Blocking(command) => command.method(),
            ExecutableCommand::Deferred(command) => command.method(),
            ExecutableCommand::Streaming(command) => command.method(),
        }
    }
}

impl fmt::Debug for ExecutableCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutableCommand")
            .field("method", &self.method().name())
            .field("style", &self.style())
            .finish()
    }
}
