mod raw_codec;
mod utf8_codec;

pub use raw_codec::RawCodec;
pub use utf8_codec::Utf8Codec;
