/// The role a declared parameter plays in the wire command.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ParameterKind {
    /// Encoded through the codec's key side.
    Key,
    /// Encoded through the codec's value side.
    Value,
    /// A call-scoped timeout override; never becomes a wire segment.
    Timeout,
}

/// One declared parameter of a command method.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    pub name: String,
    pub kind: ParameterKind,
    /// Accepts a sequence of values expanded in declaration order.
    pub variadic: bool,
}

impl ParameterSpec {
    pub fn key(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Key,
            variadic: false,
        }
    }

    pub fn value(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Value,
            variadic: false,
        }
    }

    pub fn timeout(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Timeout,
            variadic: false,
        }
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }
}
