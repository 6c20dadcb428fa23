use crate::codec::CommandCodec;
use crate::method::{ParameterSpec, ReturnShape, ValueShape};
use std::fmt;
use std::sync::Arc;

/// Declarative registration-time description of one command method.
///
/// This is the configuration object the lookup strategies consume: the
/// method name (its identity in the dispatch table), the protocol
/// keyword(s), the ordered parameter declarations, the tagged return
/// descriptor, and an optional codec annotation overriding the client
/// default.
#[derive(Clone)]
pub struct MethodSpec {
    pub name: String,
    /// Fixed keyword segments, e.g. `["GET"]` or `["CLIENT", "SETNAME"]`.
    pub keywords: Vec<String>,
    pub parameters: Vec<ParameterSpec>,
    pub returns: ReturnShape,
    /// Per-method codec annotation; wins over the configured default.
    pub codec: Option<Arc<dyn CommandCodec>>,
}

impl MethodSpec {
    pub fn builder(name: impl Into<String>) -> MethodSpecBuilder {
        MethodSpecBuilder {
            name: name.into(),
            keywords: Vec::new(),
            parameters: Vec::new(),
            returns: ReturnShape::Plain(ValueShape::Unit),
            codec: None,
        }
    }
}

impl fmt::Debug for MethodSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodSpec")
            .field("name", &self.name)
            .field("keywords", &self.keywords)
            .field("parameters", &self.parameters)
            .field("returns", &self.returns)
            .field("codec", &self.codec.as_ref().map(|c| c.name()))
            .finish()
    }
}

/// Builder for [`MethodSpec`]. Structural validation happens at bind
/// time, not here.
pub struct MethodSpecBuilder {
    name: String,
    keywords: Vec<String>,
    parameters: Vec<ParameterSpec>,
    returns: ReturnShape,
    codec: Option<Arc<dyn CommandCodec>>,
}

impl MethodSpecBuilder {
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    pub fn parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn key_parameter(self, name: impl Into<String>) -> Self {
        self.parameter(ParameterSpec::key(name))
    }

    pub fn value_parameter(self, name: impl Into<String>) -> Self {
        self.parameter(ParameterSpec::value(name))
    }

    pub fn timeout_parameter(self, name: impl Into<String>) -> Self {
        self.parameter(ParameterSpec::timeout(name))
    }

    pub fn returns(mut self, returns: ReturnShape) -> Self {
        self.returns = returns;
        self
    }

    pub fn codec(mut self, codec: Arc<dyn CommandCodec>) -> Self {
        self.codec = Some(codec);
        self
    }

    pub fn build(self) -> MethodSpec {
        MethodSpec {
            name: self.name,
            keywords: self.keywords,
            parameters: self.parameters,
            returns: self.returns,
            codec: self.codec,
        }
    }
}
