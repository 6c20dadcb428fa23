use crate::codec::CommandCodec;
use crate::command::CommandValue;
use crate::error::BindError;
use crate::method::{ExecutionStyle, MethodSpec, ParameterKind, ParameterSpec, ReturnShape, Timeout};
use std::fmt;
use std::sync::Arc;
use xxhash_rust::xxh3::xxh3_64;

/// Introspected, immutable view over a declared [`MethodSpec`].
///
/// Derived once at bind time; classification and the timeout parameter
/// position are fixed facts every other component reads from here.
pub struct CommandMethod {
    spec: MethodSpec,
    method_id: u64,
    style: ExecutionStyle,
    timeout_index: Option<usize>,
}

impl CommandMethod {
    pub fn new(spec: MethodSpec) -> Result<Self, BindError> {
        let mut timeout_index = None;
        for (index, parameter) in spec.parameters.iter().enumerate() {
            if parameter.kind == ParameterKind::Timeout {
                match timeout_index {
                    None => timeout_index = Some(index),
                    Some(first) => {
                        return Err(BindError::AmbiguousTimeoutParameter {
                            method: spec.name.clone(),
                            first,
                            second: index,
                        });
                    }
                }
            }
        }

        let style = spec.returns.classify();
        let method_id = xxh3_64(spec.name.as_bytes());

        Ok(Self {
            spec,
            method_id,
            style,
            timeout_index,
        })
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    /// Stable routing id, the xxh3-64 hash of the method name. Agrees
    /// with [`command_method_id!`](crate::command_method_id) applied to
    /// the same literal.
    pub fn method_id(&self) -> u64 {
        self.method_id
    }

    pub fn style(&self) -> ExecutionStyle {
        self.style
    }

    pub fn returns(&self) -> ReturnShape {
        self.spec.returns
    }

    pub fn keywords(&self) -> &[String] {
        &self.spec.keywords
    }

    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.spec.parameters
    }

    pub fn timeout_index(&self) -> Option<usize> {
        self.timeout_index
    }

    pub fn codec_override(&self) -> Option<Arc<dyn CommandCodec>> {
        self.spec.codec.clone()
    }

    /// The per-call timeout override, when this method declares a
    /// timeout parameter and the invocation supplied a non-absent value
    /// at that position.
    pub fn timeout_argument(&self, arguments: &[CommandValue]) -> Option<Timeout> {
        let index = self.timeout_index?;
        match arguments.get(index) {
            Some(CommandValue::Timeout(timeout)) => Some(*timeout),
            _ => None,
        }
    }
}

impl fmt::Debug for CommandMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandMethod")
            .field("name", &self.spec.name)
            .field("method_id", &self.method_id)
            .field("style", &self.style)
            .field("timeout_index", &self.timeout_index)
            .finish()
    }
}
