use dyncmd::codec::{CodecError, CommandCodec};
use dyncmd::command::CommandValue;

/// Byte-for-byte passthrough. Text encodes as its UTF-8 bytes; decoded
/// payloads always come back as `CommandValue::Bytes`.
pub struct RawCodec;

impl RawCodec {
    fn encode(&self, value: &CommandValue) -> Result<Vec<u8>, CodecError> {
        match value {
            CommandValue::Bytes(bytes) => Ok(bytes.clone()),
            CommandValue::Text(text) => Ok(text.clone().into_bytes()),
            other => Err(CodecError::Unencodable(format!(
                "{:?} has no raw-byte form",
                other
            ))),
        }
    }
}

impl CommandCodec for RawCodec {
    fn name(&self) -> &'static str {
        "raw"
    }

    fn encode_key(&self, key: &CommandValue) -> Result<Vec<u8>, CodecError> {
        self.encode(key)
    }

    fn encode_value(&self, value: &CommandValue) -> Result<Vec<u8>, CodecError> {
        self.encode(value)
    }

    fn decode_key(&self, bytes: &[u8]) -> Result<CommandValue, CodecError> {
        Ok(CommandValue::Bytes(bytes.to_vec()))
    }

    fn decode_value(&self, bytes: &[u8]) -> Result<CommandValue, CodecError> {
        Ok(CommandValue::Bytes(bytes.to_vec()))
    }
}
