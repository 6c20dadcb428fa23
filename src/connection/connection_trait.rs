use crate::command::BoundCommand;
use crate::connection::{DeferredReply, DispatchError};
use crate::method::Timeout;

/// External transport collaborator: accepts a fully-bound command and
/// returns a deferred result. All actual I/O scheduling lives behind
/// this trait; the engine only decides when to block, defer, or stream.
///
/// Implementations must tolerate many concurrent in-flight dispatches;
/// each call produces an independent [`DeferredReply`].
#[async_trait::async_trait]
pub trait CommandConnection: Send + Sync {
    async fn dispatch(&self, command: BoundCommand) -> Result<DeferredReply, DispatchError>;

    /// Wait bound applied when a blocking method declares no per-call
    /// timeout, or the caller supplied an absent one.
    fn default_timeout(&self) -> Timeout;
}
