use crate::command::{CommandFactory, CommandValue};
use crate::connection::CommandConnection;
use crate::convert::ResultConverter;
use crate::error::CallError;
use crate::execute::block_on_deadline;
use crate::execute::dispatch_pipeline::dispatch_and_decode;
use crate::method::CommandMethod;
use crate::output::CommandOutput;
use std::sync::Arc;

/// Executable for methods returning a plain value: dispatches, then
/// drives the deferred result on the calling thread until it completes
/// or the wait bound elapses.
///
/// The bound is the per-call timeout argument when the method declares
/// one and the invocation supplied a non-absent value, otherwise the
/// connection default.
pub struct BlockingCommand {
    factory: CommandFactory,
    connection: Arc<dyn CommandConnection>,
    converter: ResultConverter,
}

impl BlockingCommand {
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

    pub fn execute(&self, arguments: &[CommandValue]) -> Result<CommandOutput, CallError> {
        let limit = self
            .factory
            .method()
            .timeout_argument(arguments)
            .unwrap_or_else(|| self.connection.default_timeout());

        let command = self.factory.create(arguments)?;
        let invocation_id = command.invocation_id;

        let pending = dispatch_and_decode(
            Arc::clone(&self.connection),
            command,
            self.converter.clone(),
        );

        match block_on_deadline(pending, limit.duration()) {
            Ok(result) => result,
            Err(elapsed) => {
                tracing::trace!(invocation_id, ?elapsed, "blocking command timed out");
                Err(CallError::Timeout { elapsed })
            }
        }
    }
}
