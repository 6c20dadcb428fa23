use crate::connection::{DeferredReply, ReplyReceiver};
use crate::convert::ResultConverter;
use crate::error::CallError;
use crate::output::{CommandOutput, OutputFactory};
use futures::Stream;
use futures::task::AtomicWaker;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::task::{Context, Poll};

/// Lazy sequence of decoded elements produced by a streaming command.
///
/// Elements are decoded one reply frame at a time, on demand; the
/// bounded reply channel underneath keeps the producing connection from
/// outrunning a slow consumer. Cancellation — via [`CommandStream::cancel`]
/// or a [`StreamCancelHandle`] from another task — guarantees that no
/// further elements are delivered once observed.
pub struct CommandStream {
    rx: ReplyReceiver,
    output: OutputFactory,
    converter: ResultConverter,
    cancelled: Arc<AtomicBool>,
    waker: Arc<AtomicWaker>,
    done: bool,
}

impl CommandStream {
    pub(crate) fn new(
        reply: DeferredReply,
        output: OutputFactory,
        converter: ResultConverter,
    ) -> Self {
        Self {
            rx: reply.into_receiver(),
            output,
            converter,
            cancelled: Arc::new(AtomicBool::new(false)),
            waker: Arc::new(AtomicWaker::new()),
            done: false,
        }
    }

    /// Handle for cancelling delivery from another task.
    pub fn cancel_handle(&self) -> StreamCancelHandle {
        StreamCancelHandle {
            cancelled: Arc::clone(&self.cancelled),
            waker: Arc::clone(&self.waker),
        }
    }

    /// Ceases decoding and delivery without consuming the rest of the
    /// reply.
    pub fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.rx.close();
        self.done = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Stream for CommandStream {
    type Item = Result<CommandOutput, CallError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if this.done {
            return Poll::Ready(None);
        }

        // Registered before the flag check so a cancel between the
        // check and a later park still wakes this consumer.
        this.waker.register(cx.waker());

        // Checked before touching the channel so a concurrent cancel is
        // honored even with buffered frames waiting.
        if this.cancelled.load(Ordering::SeqCst) {
            this.rx.close();
            this.done = true;
            return Poll::Ready(None);
        }

        match Pin::new(&mut this.rx).poll_next(cx) {
            Poll::Ready(Some(Ok(frame))) => {
                let item = this
                    .output
                    .decode(frame)
                    .and_then(|decoded| this.converter.convert(decoded));
                Poll::Ready(Some(item))
            }
            Poll::Ready(Some(Err(e))) => Poll::Ready(Some(Err(CallError::Dispatch(e)))),
            Poll::Ready(None) => {
                this.done = true;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Clonable cancellation flag shared with its [`CommandStream`].
#[derive(Clone)]
pub struct StreamCancelHandle {
    cancelled: Arc<AtomicBool>,
    waker: Arc<AtomicWaker>,
}

impl StreamCancelHandle {
    /// Flips the flag and wakes the stream, so a consumer parked on a
    /// silent producer observes the cancellation immediately.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.waker.wake();
    }
}
