use dyncmd::codec::{CodecError, CommandCodec};
use dyncmd::command::CommandValue;

/// Keys and values as UTF-8 text. Integers and booleans are written in
/// their decimal form, matching what a text protocol expects.
pub struct Utf8Codec;

impl Utf8Codec {
    fn encode(&self, value: &CommandValue) -> Result<Vec<u8>, CodecError> {
        match value {
            CommandValue::Text(text) => Ok(text.clone().into_bytes()),
            CommandValue::Int(n) => Ok(n.to_string().into_bytes()),
            CommandValue::Bool(b) => Ok(if *b { b"1".to_vec() } else { b"0".to_vec() }),
            other => Err(CodecError::Unencodable(format!(
                "{:?} has no UTF-8 form",
                other
            ))),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<CommandValue, CodecError> {
        String::from_utf8(bytes.to_vec())
            .map(CommandValue::Text)
            .map_err(|_| CodecError::Undecodable("payload is not valid UTF-8".to_string()))
    }
}

impl CommandCodec for Utf8Codec {
    fn name(&self) -> &'static str {
        "utf8"
    }

    fn encode_key(&self, key: &CommandValue) -> Result<Vec<u8>, CodecError> {
        self.encode(key)
    }

    fn encode_value(&self, value: &CommandValue) -> Result<Vec<u8>, CodecError> {
        self.encode(value)
    }

    fn decode_key(&self, bytes: &[u8]) -> Result<CommandValue, CodecError> {
        self.decode(bytes)
    }

    fn decode_value(&self, bytes: &[u8]) -> Result<CommandValue, CodecError> {
        self.decode(bytes)
    }
}
