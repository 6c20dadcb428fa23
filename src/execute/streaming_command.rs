use crate::command::{CommandFactory, CommandValue};
use crate::connection::CommandConnection;
use crate::convert::ResultConverter;
use crate::error::CallError;
use crate::execute::CommandStream;
use crate::method::CommandMethod;
use std::sync::Arc;

/// Executable for stream-style methods: dispatches, then exposes the
/// deferred reply as a lazy, cancellable element stream.
pub struct StreamingCommand {
    factory: CommandFactory,
    connection: Arc<dyn CommandConnection>,
    converter: ResultConverter,
}

impl StreamingCommand {
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

    pub async fn execute(&self, arguments: &[CommandValue]) -> Result<CommandStream, CallError> {
        let command = self.factory.create(arguments)?;
        let output = command.output.clone();

        let deferred = self
            .connection
            .dispatch(command)
            .await
            .map_err(CallError::Dispatch)?;

        Ok(CommandStream::new(deferred, output, self.converter.clone()))
    }
}
