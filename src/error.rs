use crate::codec::CodecError;
use crate::connection::DispatchError;
use crate::method::{ExecutionStyle, ValueShape};
use std::fmt;
use std::time::Duration;

/// Bind-time resolution failures. These are configuration errors: any one
/// of them prevents the client from being constructed.
#[derive(Debug)]
pub enum BindError {
    /// No codec annotation on the method and no configured default.
    UnresolvableCodec { method: String },
    /// The segment template failed structural verification.
    MalformedTemplate { method: String, detail: String },
    /// More than one parameter declares a call-scoped timeout.
    AmbiguousTimeoutParameter {
        method: String,
        first: usize,
        second: usize,
    },
    /// The method's declared execution style is not served by the chosen
    /// lookup strategy.
    StyleMismatch {
        method: String,
        declared: ExecutionStyle,
        expected: ExecutionStyle,
    },
    /// The same method name was registered twice.
    DuplicateMethod { method: String },
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::UnresolvableCodec { method } => {
                write!(f, "cannot resolve a codec for command method `{}`", method)
            }
            BindError::MalformedTemplate { method, detail } => {
                write!(
                    f,
                    "malformed segment template for command method `{}`: {}",
                    method, detail
                )
            }
            BindError::AmbiguousTimeoutParameter {
                method,
                first,
                second,
            } => {
                write!(
                    f,
                    "command method `{}` declares timeout parameters at positions {} and {}; at most one is allowed",
                    method, first, second
                )
            }
            BindError::StyleMismatch {
                method,
                declared,
                expected,
            } => {
                write!(
                    f,
                    "command method `{}` declares {} execution and is not supported by the {} lookup strategy",
                    method, declared, expected
                )
            }
            BindError::DuplicateMethod { method } => {
                write!(f, "command method `{}` is registered more than once", method)
            }
        }
    }
}

impl std::error::Error for BindError {}

/// Call-time failures. None of these are retried by this crate.
#[derive(Debug)]
pub enum CallError {
    /// The invocation named a method the client never resolved.
    UnknownMethod { method: String },
    /// The invocation used an entry point for a different execution style.
    WrongExecutionStyle {
        method: String,
        declared: ExecutionStyle,
    },
    /// Supplied argument count does not match the method declaration.
    /// Raised before dispatch.
    ArgumentCountMismatch {
        method: String,
        expected: usize,
        actual: usize,
    },
    /// An argument could not be encoded by the resolved codec.
    /// Raised before dispatch.
    ArgumentEncoding {
        method: String,
        index: usize,
        source: CodecError,
    },
    /// Propagated unchanged from the connection collaborator.
    Dispatch(DispatchError),
    /// The blocking wait elapsed without a reply.
    Timeout { elapsed: Duration },
    /// The raw reply frame does not fit the declared value shape.
    UnexpectedReply { expected: ValueShape, detail: String },
    /// The codec rejected the reply payload.
    ReplyDecode { source: CodecError },
    /// No known adaptation between the produced and declared shapes.
    Conversion {
        produced: ValueShape,
        declared: ValueShape,
    },
}

impl fmt::Display for CallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallError::UnknownMethod { method } => {
                write!(f, "unknown command method `{}`", method)
            }
            CallError::WrongExecutionStyle { method, declared } => {
                write!(
                    f,
                    "command method `{}` declares {} execution; use the matching entry point",
                    method, declared
                )
            }
            CallError::ArgumentCountMismatch {
                method,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "command method `{}` takes {} arguments but {} were supplied",
                    method, expected, actual
                )
            }
            CallError::ArgumentEncoding {
                method,
                index,
                source,
            } => {
                write!(
                    f,
                    "cannot encode argument {} of command method `{}`: {}",
                    index, method, source
                )
            }
            CallError::Dispatch(e) => write!(f, "dispatch failed: {}", e),
            CallError::Timeout { elapsed } => {
                write!(f, "command timed out after {:?}", elapsed)
            }
            CallError::UnexpectedReply { expected, detail } => {
                write!(f, "reply does not fit declared shape {}: {}", expected, detail)
            }
            CallError::ReplyDecode { source } => {
                write!(f, "cannot decode reply payload: {}", source)
            }
            CallError::Conversion { produced, declared } => {
                write!(
                    f,
                    "no adaptation from produced shape {} to declared shape {}",
                    produced, declared
                )
            }
        }
    }
}

impl std::error::Error for CallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CallError::Dispatch(e) => Some(e),
            CallError::ArgumentEncoding { source, .. } => Some(source),
            CallError::ReplyDecode { source } => Some(source),
            _ => None,
        }
    }
}

impl From<DispatchError> for CallError {
    fn from(e: DispatchError) -> Self {
        CallError::Dispatch(e)
    }
}
