use futures::pin_mut;
use futures::task::{ArcWake, waker};
use std::future::Future;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::thread::{self, Thread};
use std::time::{Duration, Instant};

/// Wakes the parked executor thread.
struct ThreadWaker(Thread);

impl ArcWake for ThreadWaker {
    fn wake_by_ref(arc_self: &Arc<Self>) {
        arc_self.0.unpark();
    }
}

/// Drives `future` to completion on the calling thread, or gives up once
/// `limit` elapses. No lock is held while parked, and spurious unparks
/// only cost an extra poll. On expiry the actual elapsed wall time is
/// returned.
pub fn block_on_deadline<F: Future>(future: F, limit: Duration) -> Result<F::Output, Duration> {
    let started = Instant::now();
    pin_mut!(future);

    let waker = waker(Arc::new(ThreadWaker(thread::current())));
    let mut cx = Context::from_waker(&waker);

    loop {
        if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
            return Ok(output);
        }

        let elapsed = started.elapsed();
        if elapsed >= limit {
            return Err(elapsed);
        }

        thread::park_timeout(limit - elapsed);
    }
}
