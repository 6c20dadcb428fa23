use crate::connection::{DispatchError, ReplyFrame};
use futures::{
    SinkExt, Stream,
    channel::mpsc::{Receiver, Sender, UnboundedReceiver, UnboundedSender},
    pin_mut,
    task::{Context, Poll},
};
use std::pin::Pin;

pub type ReplyItem = Result<ReplyFrame, DispatchError>;

/// Producer half of a reply channel, handed to connection
/// implementations. Bounded senders give the consumer backpressure;
/// unbounded senders never block the producer.
pub enum ReplySender {
    Bounded(Sender<ReplyItem>),
    Unbounded(UnboundedSender<ReplyItem>),
}

impl ReplySender {
    /// Delivers `item`, waiting for capacity when the bounded buffer is
    /// full. This is the backpressure path: the producer advances only
    /// as fast as the consumer drains. An error means the consumer is
    /// gone.
    pub async fn send(&mut self, item: ReplyItem) -> Result<(), DispatchError> {
        match self {
            ReplySender::Bounded(s) => s.send(item).await,
            ReplySender::Unbounded(s) => s.send(item).await,
        }
        .map_err(|_| DispatchError::ConnectionClosed)
    }

    /// Best-effort, non-blocking send. On a bounded sender the item is
    /// dropped when the buffer is full; a consumer that dropped or
    /// cancelled its receiver is not an error for the producer. Use
    /// [`ReplySender::send`] when every frame must be delivered.
    pub fn send_and_ignore(&mut self, item: ReplyItem) {
        match self {
            ReplySender::Bounded(s) => {
                // try_send can fail if full or disconnected.
                let _ = s.try_send(item);
            }
            ReplySender::Unbounded(s) => {
                let _ = s.unbounded_send(item);
            }
        }
    }

    /// Whether the consumer side is gone.
    pub fn is_closed(&self) -> bool {
        match self {
            ReplySender::Bounded(s) => s.is_closed(),
            ReplySender::Unbounded(s) => s.is_closed(),
        }
    }

    /// Signals end-of-replies to the consumer.
    pub fn close(&mut self) {
        match self {
            ReplySender::Bounded(s) => s.close_channel(),
            ReplySender::Unbounded(s) => s.close_channel(),
        }
    }
}

/// Consumer half of a reply channel.
pub enum ReplyReceiver {
    Bounded(Receiver<ReplyItem>),
    Unbounded(UnboundedReceiver<ReplyItem>),
}

impl ReplyReceiver {
    /// Stops accepting further items; already-buffered items are dropped
    /// with the receiver.
    pub fn close(&mut self) {
        match self {
            ReplyReceiver::Bounded(r) => r.close(),
            ReplyReceiver::Unbounded(r) => r.close(),
        }
    }
}

impl Stream for ReplyReceiver {
    type Item = ReplyItem;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match self.get_mut() {
            ReplyReceiver::Bounded(r) => {
                let stream = r;
                pin_mut!(stream);
                stream.poll_next(cx)
            }
            ReplyReceiver::Unbounded(r) => {
                let stream = r;
                pin_mut!(stream);
                stream.poll_next(cx)
            }
        }
    }
}
