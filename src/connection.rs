mod connection_trait;
mod deferred_reply;
mod dispatch_error;
mod reply_channel;
mod reply_frame;

pub use connection_trait::CommandConnection;
pub use deferred_reply::DeferredReply;
pub use dispatch_error::DispatchError;
pub use reply_channel::{ReplyItem, ReplyReceiver, ReplySender};
pub use reply_frame::ReplyFrame;
