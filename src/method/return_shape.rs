use crate::method::ExecutionStyle;
use std::fmt;

/// Tagged descriptor of a method's declared return type.
///
/// The wrapper variant decides the execution style; the inner
/// [`ValueShape`] decides the reply decoder. Classification is a pure
/// function of this descriptor and is never recomputed differently by
/// two components.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ReturnShape {
    /// A plain value, delivered synchronously.
    Plain(ValueShape),
    /// A future resolving to the value.
    Deferred(ValueShape),
    /// A stream of values.
    Streaming(ValueShape),
}

impl ReturnShape {
    /// Maps the return descriptor onto the execution style it requests.
    pub fn classify(&self) -> ExecutionStyle {
        match self {
            ReturnShape::Plain(_) => ExecutionStyle::Blocking,
            ReturnShape::Deferred(_) => ExecutionStyle::Deferred,
            ReturnShape::Streaming(_) => ExecutionStyle::Streaming,
        }
    }

    /// The declared value shape with any future/stream wrapper removed.
    pub fn value_shape(&self) -> ValueShape {
        match self {
            ReturnShape::Plain(shape)
            | ReturnShape::Deferred(shape)
            | ReturnShape::Streaming(shape) => *shape,
        }
    }
}

/// The unwrapped shape a decoded reply must take.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ValueShape {
    /// The caller discards the reply (status-style commands).
    Unit,
    Boolean,
    Integer,
    /// A required single value.
    Value,
    /// A single value that may legitimately be absent.
    OptionalValue,
    ValueList,
    /// Like [`ValueShape::ValueList`] but without duplicates.
    ValueSet,
    /// Alternating key/value pairs.
    KeyValueMap,
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueShape::Unit => write!(f, "unit"),
            ValueShape::Boolean => write!(f, "boolean"),
            ValueShape::Integer => write!(f, "integer"),
            ValueShape::Value => write!(f, "value"),
            ValueShape::OptionalValue => write!(f, "optional value"),
            ValueShape::ValueList => write!(f, "value list"),
            ValueShape::ValueSet => write!(f, "value set"),
            ValueShape::KeyValueMap => write!(f, "key/value map"),
        }
    }
}
