use crate::codec::CommandCodec;
use crate::connection::CommandConnection;
use crate::error::BindError;
use crate::execute::{BlockingCommand, ExecutableCommand};
use crate::lookup::ExecutableCommandLookupStrategy;
use crate::lookup::factory_resolver::CommandFactoryResolver;
use crate::lookup::lookup_strategy::verify_style;
use crate::method::{CommandMethod, ExecutionStyle, MethodSpec};
use std::sync::Arc;

/// Resolves methods whose declared return is a plain value.
pub struct BlockingLookupStrategy {
    connection: Arc<dyn CommandConnection>,
    resolver: CommandFactoryResolver,
}

impl BlockingLookupStrategy {
    pub fn new(
        connection: Arc<dyn CommandConnection>,
        default_codec: Option<Arc<dyn CommandCodec>>,
    ) -> Self {
        Self {
            connection,
            resolver: CommandFactoryResolver::new(default_codec),
        }
    }
}

impl ExecutableCommandLookupStrategy for BlockingLookupStrategy {
    fn style(&self) -> ExecutionStyle {
        ExecutionStyle::Blocking
    }

    fn resolve(&self, spec: MethodSpec) -> Result<ExecutableCommand, BindError> {
        let method = Arc::new(CommandMethod::new(spec)?);
        verify_style(&method, ExecutionStyle::Blocking)?;

        let (factory, converter) = self.resolver.resolve(&method)?;

        Ok(ExecutableCommand::Blocking(BlockingCommand::new(
            factory,
            Arc::clone(&self.connection),
            converter,
        )))
    }
}
