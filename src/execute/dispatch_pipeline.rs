use crate::command::BoundCommand;
use crate::connection::CommandConnection;
use crate::convert::ResultConverter;
use crate::error::CallError;
use crate::output::CommandOutput;
use std::sync::Arc;

/// Request/response tail shared by the blocking and deferred variants:
/// dispatch, take the first reply frame, decode, convert.
pub(crate) async fn dispatch_and_decode(
    connection: Arc<dyn CommandConnection>,
    command: BoundCommand,
    converter: ResultConverter,
) -> Result<CommandOutput, CallError> {
    let invocation_id = command.invocation_id;
    let output = command.output.clone();

    let deferred = connection
        .dispatch(command)
        .await
        .map_err(CallError::Dispatch)?;

    let frame = deferred.first().await.map_err(CallError::Dispatch)?;
    tracing::trace!(invocation_id, "reply frame received");

    converter.convert(output.decode(frame)?)
}
