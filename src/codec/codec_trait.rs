use crate::command::CommandValue;
use std::fmt;

/// Encode/decode boundary between domain values and wire bytes.
///
/// A codec pairs the key-side and value-side transformations resolved
/// for one method. Implementations live outside this crate; the engine
/// only decides *which* codec applies and feeds it opaque values.
pub trait CommandCodec: Send + Sync {
    /// Short name used in logs and error messages.
    fn name(&self) -> &'static str;

    fn encode_key(&self, key: &CommandValue) -> Result<Vec<u8>, CodecError>;

    fn encode_value(&self, value: &CommandValue) -> Result<Vec<u8>, CodecError>;

    fn decode_key(&self, bytes: &[u8]) -> Result<CommandValue, CodecError>;

    fn decode_value(&self, bytes: &[u8]) -> Result<CommandValue, CodecError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    /// The supplied value cannot be represented by this codec.
    Unencodable(String),
    /// The wire bytes do not form a value this codec understands.
    Undecodable(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Unencodable(detail) => write!(f, "unencodable value: {}", detail),
            CodecError::Undecodable(detail) => write!(f, "undecodable bytes: {}", detail),
        }
    }
}

impl std::error::Error for CodecError {}
