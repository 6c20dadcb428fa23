use crate::codec::CommandCodec;
use crate::error::BindError;
use crate::method::CommandMethod;
use std::sync::Arc;

/// Picks exactly one codec per method: an explicit per-method annotation
/// wins, otherwise the configured default applies. Resolution failure is
/// bind-time fatal for the whole client, never deferred to call time.
pub struct CodecResolver {
    default_codec: Option<Arc<dyn CommandCodec>>,
}

impl CodecResolver {
    pub fn new(default_codec: Option<Arc<dyn CommandCodec>>) -> Self {
        Self { default_codec }
    }

    pub fn resolve(&self, method: &CommandMethod) -> Result<Arc<dyn CommandCodec>, BindError> {
        method
            .codec_override()
            .or_else(|| self.default_codec.clone())
            .ok_or_else(|| BindError::UnresolvableCodec {
                method: method.name().to_string(),
            })
    }
}
