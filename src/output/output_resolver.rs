use crate::codec::CommandCodec;
use crate::method::CommandMethod;
use crate::output::OutputFactory;
use std::sync::Arc;

/// Selects the reply decoder for a method: the declared return type is
/// unwrapped of its future/stream wrapper first, then paired with the
/// resolved codec. Selection is total over the supported shapes, so it
/// cannot fail once a codec is resolved.
pub struct OutputFactoryResolver;

impl OutputFactoryResolver {
    pub fn resolve(codec: Arc<dyn CommandCodec>, method: &CommandMethod) -> OutputFactory {
        OutputFactory::new(codec, method.returns().value_shape())
    }
}
