use crate::command::{CommandFactory, CommandValue};
use crate::connection::CommandConnection;
use crate::convert::ResultConverter;
use crate::error::CallError;
use crate::execute::dispatch_pipeline::dispatch_and_decode;
use crate::method::CommandMethod;
use crate::output::CommandOutput;
use futures::future::BoxFuture;
use std::sync::Arc;

/// The eventual result of a deferred command.
pub type ReplyFuture = BoxFuture<'static, Result<CommandOutput, CallError>>;

/// Executable for future-style methods: binds the arguments, then hands
/// back the pending result without blocking. A declared timeout
/// parameter is inert on this path; awaiting is the caller's concern.
pub struct DeferredCommand {
    factory: CommandFactory,
    connection: Arc<dyn CommandConnection>,
    converter: ResultConverter,
}

impl DeferredCommand {
    pub(crate) fn new(
        factory: CommandFactory,
        connection: Arc<dyn CommandConnection>,
        converter: ResultConverter,
    ) -> Self {
        Self {
            factory,
            connection,
            converter,
        }
    }

    pub fn method(&self) -> &CommandMethod {
        self.factory.method()
    }

    /// Argument errors are raised here, before dispatch; everything else
    /// surfaces through the returned future.
    pub fn execute(&self, arguments: &[CommandValue]) -> Result<ReplyFuture, CallError> {
        let command = self.factory.create(arguments)?;
        let connection = Arc::clone(&self.connection);
        let converter = self.converter.clone();

        Ok(Box::pin(dispatch_and_decode(
            connection, command, converter,
        )))
    }
}
