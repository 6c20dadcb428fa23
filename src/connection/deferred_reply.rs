use crate::connection::reply_channel::{ReplyItem, ReplyReceiver, ReplySender};
use crate::connection::{DispatchError, ReplyFrame};
use crate::constants::DEFAULT_REPLY_CHANNEL_BUFFER_SIZE;
use futures::StreamExt;
use futures::channel::mpsc;

/// Handle to a result not yet available, produced by dispatch.
///
/// Connections push raw reply frames into the sender half; the engine
/// consumes either the first item (request/response commands) or the
/// whole sequence lazily (streaming commands).
pub struct DeferredReply {
    rx: ReplyReceiver,
}

impl DeferredReply {
    pub fn new(rx: ReplyReceiver) -> Self {
        Self { rx }
    }

    /// Bounded channel pair with the default buffer; the producer is
    /// subject to backpressure once the buffer fills.
    pub fn bounded() -> (ReplySender, DeferredReply) {
        Self::bounded_with_buffer(DEFAULT_REPLY_CHANNEL_BUFFER_SIZE)
    }

    pub fn bounded_with_buffer(buffer: usize) -> (ReplySender, DeferredReply) {
        let (tx, rx) = mpsc::channel::<ReplyItem>(buffer);
        (
            ReplySender::Bounded(tx),
            DeferredReply::new(ReplyReceiver::Bounded(rx)),
        )
    }

    pub fn unbounded() -> (ReplySender, DeferredReply) {
        let (tx, rx) = mpsc::unbounded::<ReplyItem>();
        (
            ReplySender::Unbounded(tx),
            DeferredReply::new(ReplyReceiver::Unbounded(rx)),
        )
    }

    /// Resolves the single reply of a request/response command. A
    /// channel that closes without delivering anything means the
    /// connection went away.
    pub async fn first(self) -> Result<ReplyFrame, DispatchError> {
        let mut rx = self.rx;
        match rx.next().await {
            Some(Ok(frame)) => Ok(frame),
            Some(Err(e)) => Err(e),
            None => Err(DispatchError::ConnectionClosed),
        }
    }

    pub fn into_receiver(self) -> ReplyReceiver {
        self.rx
    }
}
