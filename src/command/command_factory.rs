use crate::codec::CommandCodec;
use crate::command::{BoundCommand, CommandValue};
use crate::error::CallError;
use crate::method::{CommandMethod, ParameterKind, ParameterSpec};
use crate::output::OutputFactory;
use crate::segment::{CommandSegment, CommandSegmentTemplate};
use crate::utils::next_invocation_id;
use std::sync::Arc;

/// Call-time combiner: applies runtime argument values to the method's
/// segment template and attaches the resolved output factory.
///
/// One factory exists per resolved method; `create` runs on every
/// invocation and touches no shared mutable state.
#[derive(Clone)]
pub struct CommandFactory {
    method: Arc<CommandMethod>,
    template: Arc<CommandSegmentTemplate>,
    codec: Arc<dyn CommandCodec>,
    output: OutputFactory,
    method_name: Arc<str>,
}

impl CommandFactory {
    pub(crate) fn new(
        method: Arc<CommandMethod>,
        template: Arc<CommandSegmentTemplate>,
        codec: Arc<dyn CommandCodec>,
        output: OutputFactory,
    ) -> Self {
        let method_name: Arc<str> = Arc::from(method.name());
        Self {
            method,
            template,
            codec,
            output,
            method_name,
        }
    }

    pub fn method(&self) -> &CommandMethod {
        &self.method
    }

    pub fn template(&self) -> &CommandSegmentTemplate {
        &self.template
    }

    /// Binds `arguments` to the template. Argument count mismatches and
    /// encoding failures are fatal to the call and raised here, before
    /// any dispatch happens.
    pub fn create(&self, arguments: &[CommandValue]) -> Result<BoundCommand, CallError> {
        let parameters = self.method.parameters();
        if arguments.len() != parameters.len() {
            return Err(CallError::ArgumentCountMismatch {
                method: self.method.name().to_string(),
                expected: parameters.len(),
                actual: arguments.len(),
            });
        }

        let mut tokens = Vec::with_capacity(self.template.len());
        for segment in self.template.segments() {
            match segment {
                CommandSegment::Literal(keyword) => {
                    tokens.push(keyword.as_bytes().to_vec());
                }
                CommandSegment::Placeholder(index) => {
                    let parameter = &parameters[*index];
                    let argument = &arguments[*index];

                    if parameter.variadic {
                        match argument {
                            CommandValue::Seq(items) => {
                                for item in items {
                                    tokens.push(self.encode(parameter, *index, item)?);
                                }
                            }
                            // A lone value is a one-element expansion.
                            other => tokens.push(self.encode(parameter, *index, other)?),
                        }
                    } else {
                        tokens.push(self.encode(parameter, *index, argument)?);
                    }
                }
            }
        }

        let invocation_id = next_invocation_id();
        tracing::trace!(
            invocation_id,
            method = self.method.name(),
            tokens = tokens.len(),
            "bound command"
        );

        Ok(BoundCommand {
            invocation_id,
            method_id: self.method.method_id(),
            method_name: Arc::clone(&self.method_name),
            tokens,
            output: self.output.clone(),
        })
    }

    fn encode(
        &self,
        parameter: &ParameterSpec,
        index: usize,
        value: &CommandValue,
    ) -> Result<Vec<u8>, CallError> {
        let encoded = match parameter.kind {
            ParameterKind::Key => self.codec.encode_key(value),
            ParameterKind::Value => self.codec.encode_value(value),
            // Verified at bind time: timeout parameters never own a placeholder.
            ParameterKind::Timeout => Err(crate::codec::CodecError::Unencodable(
                "timeout parameters are not wire segments".to_string(),
            )),
        };

        encoded.map_err(|source| CallError::ArgumentEncoding {
            method: self.method.name().to_string(),
            index,
            source,
        })
    }
}
