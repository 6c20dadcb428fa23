mod block_on_deadline;
mod blocking_command;
mod command_stream;
mod deferred_command;
mod dispatch_pipeline;
mod executable_command;
mod streaming_command;

pub use block_on_deadline::block_on_deadline;
pub use blocking_command::BlockingCommand;
pub use command_stream::{CommandStream, StreamCancelHandle};
pub use deferred_command::{DeferredCommand, ReplyFuture};
pub use executable_command::ExecutableCommand;
pub use streaming_command::StreamingCommand;
