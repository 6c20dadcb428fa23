use crate::codec::{CodecResolver, CommandCodec};
use crate::command::CommandFactory;
use crate::convert::ResultConverter;
use crate::error::BindError;
use crate::method::CommandMethod;
use crate::output::OutputFactoryResolver;
use crate::segment::{CommandMethodVerifier, CommandSegmentFactory};
use std::sync::Arc;

/// Resolution pipeline shared by all lookup strategies: codec, segment
/// template, structural verification, output factory.
pub(crate) struct CommandFactoryResolver {
    codec_resolver: CodecResolver,
}

impl CommandFactoryResolver {
    pub(crate) fn new(default_codec: Option<Arc<dyn CommandCodec>>) -> Self {
        Self {
            codec_resolver: CodecResolver::new(default_codec),
        }
    }

    pub(crate) fn resolve(
        &self,
        method: &Arc<CommandMethod>,
    ) -> Result<(CommandFactory, ResultConverter), BindError> {
        let codec = self.codec_resolver.resolve(method)?;

        let template = CommandSegmentFactory::create(method);
        CommandMethodVerifier::validate(&template, method)?;

        let output = OutputFactoryResolver::resolve(Arc::clone(&codec), method);
        let converter = ResultConverter::new(method.returns().value_shape());

        tracing::debug!(
            method = method.name(),
            method_id = method.method_id(),
            style = %method.style(),
            codec = codec.name(),
            segments = template.len(),
            "resolved command method"
        );

        let factory = CommandFactory::new(
            Arc::clone(method),
            Arc::new(template),
            codec,
            output,
        );

        Ok((factory, converter))
    }
}
