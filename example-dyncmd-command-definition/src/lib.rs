//! Example command set for a key/value cache protocol, declared the way
//! a `dyncmd` client consumes it: method specs, method-id constants for
//! connection-side routing, and two codecs.

mod codecs;
mod command_set;

pub use codecs::{RawCodec, Utf8Codec};
pub use command_set::*;
