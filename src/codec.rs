mod codec_resolver;
mod codec_trait;

pub use codec_resolver::CodecResolver;
pub use codec_trait::{CodecError, CommandCodec};
