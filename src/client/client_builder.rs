use crate::client::CommandClient;
use crate::codec::CommandCodec;
use crate::connection::CommandConnection;
use crate::error::BindError;
use crate::execute::ExecutableCommand;
use crate::lookup::{
    BlockingLookupStrategy, DeferredLookupStrategy, ExecutableCommandLookupStrategy,
    StreamingLookupStrategy,
};
use crate::method::{ExecutionStyle, MethodSpec};
use std::collections::HashMap;
use std::sync::Arc;

/// Registration-time builder for a [`CommandClient`].
///
/// Every registered method is resolved eagerly in `build`; any bind
/// error aborts construction, so a successfully built client can only
/// fail at call time.
pub struct CommandClientBuilder {
    connection: Arc<dyn CommandConnection>,
    default_codec: Option<Arc<dyn CommandCodec>>,
    specs: Vec<MethodSpec>,
}

impl CommandClientBuilder {
    pub fn new(connection: Arc<dyn CommandConnection>) -> Self {
        Self {
            connection,
            default_codec: None,
            specs: Vec::new(),
        }
    }

    /// Codec applied to every method without an explicit annotation.
    pub fn default_codec(mut self, codec: Arc<dyn CommandCodec>) -> Self {
        self.default_codec = Some(codec);
        self
    }

    pub fn register(mut self, spec: MethodSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn register_all(mut self, specs: impl IntoIterator<Item = MethodSpec>) -> Self {
        self.specs.extend(specs);
        self
    }

    pub fn build(self) -> Result<CommandClient, BindError> {
        let blocking =
            BlockingLookupStrategy::new(Arc::clone(&self.connection), self.default_codec.clone());
        let deferred =
            DeferredLookupStrategy::new(Arc::clone(&self.connection), self.default_codec.clone());
        let streaming =
            StreamingLookupStrategy::new(Arc::clone(&self.connection), self.default_codec.clone());

        let mut commands: HashMap<String, ExecutableCommand> =
            HashMap::with_capacity(self.specs.len());

        for spec in self.specs {
            let name = spec.name.clone();
            if commands.contains_key(&name) {
                return Err(BindError::DuplicateMethod { method: name });
            }

            let strategy: &dyn ExecutableCommandLookupStrategy = match spec.returns.classify() {
                ExecutionStyle::Blocking => &blocking,
                ExecutionStyle::Deferred => &deferred,
                ExecutionStyle::Streaming => &streaming,
            };

            let executable = strategy.resolve(spec)?;
            commands.insert(name, executable);
        }

        tracing::debug!(methods = commands.len(), "command client built");

        Ok(CommandClient::from_commands(commands))
    }
}
