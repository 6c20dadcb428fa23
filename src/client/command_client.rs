use crate::client::CommandClientBuilder;
use crate::command::CommandValue;
use crate::connection::CommandConnection;
use crate::error::CallError;
use crate::execute::{CommandStream, ExecutableCommand, ReplyFuture};
use crate::output::CommandOutput;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// The generated-interface stand-in: an immutable dispatch table from
/// method name to its pre-resolved executable.
///
/// Invocation is fully concurrent — entry points take `&self`, every
/// call produces an independent bound command and deferred result, and
/// nothing here is mutated after construction.
pub struct CommandClient {
    commands: HashMap<String, ExecutableCommand>,
}

impl CommandClient {
    pub fn builder(connection: Arc<dyn CommandConnection>) -> CommandClientBuilder {
        CommandClientBuilder::new(connection)
    }

    pub(crate) fn from_commands(commands: HashMap<String, ExecutableCommand>) -> Self {
        Self { commands }
    }

    pub fn command(&self, method: &str) -> Option<&ExecutableCommand> {
        self.commands.get(method)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn lookup(&self, method: &str) -> Result<&ExecutableCommand, CallError> {
        self.commands
            .get(method)
            .ok_or_else(|| CallError::UnknownMethod {
                method: method.to_string(),
            })
    }

    /// Executes a blocking method and returns its decoded value, waiting
    /// at most the per-call or connection-default timeout.
    pub fn invoke_blocking(
        &self,
        method: &str,
        arguments: &[CommandValue],
    ) -> Result<CommandOutput, CallError> {
        match self.lookup(method)? {
            ExecutableCommand::Blocking(command) => command.execute(arguments),
            other => Err(CallError::WrongExecutionStyle {
                method: method.to_string(),
                declared: other.style(),
            }),
        }
    }

    /// Executes a future-style method; the returned future resolves to
    /// the decoded value.
    pub fn invoke_deferred(
        &self,
        method: &str,
        arguments: &[CommandValue],
    ) -> Result<ReplyFuture, CallError> {
        match self.lookup(method)? {
            ExecutableCommand::Deferred(command) => command.execute(arguments),
            other => Err(CallError::WrongExecutionStyle {
                method: method.to_string(),
                declared: other.style(),
            }),
        }
    }

    /// Executes a stream-style method and returns its element stream.
    pub async fn invoke_streaming(
        &self,
        method: &str,
        arguments: &[CommandValue],
    ) -> Result<CommandStream, CallError> {
        match self.lookup(method)? {
            ExecutableCommand::Streaming(command) => command.execute(arguments).await,
            other => Err(CallError::WrongExecutionStyle {
                method: method.to_string(),
                declared: other.style(),
            }),
        }
    }
}

impl fmt::Debug for CommandClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandClient")
            .field("methods", &self.commands.len())
            .finish()
    }
}
