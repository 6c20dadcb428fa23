use crate::method::Timeout;

/// Dynamic argument or reply element, the unit codecs encode and decode.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandValue {
    Text(String),
    Bytes(Vec<u8>),
    Int(i64),
    Bool(bool),
    /// Ordered values for a variadic parameter, expanded in place.
    Seq(Vec<CommandValue>),
    /// Call-scoped timeout override; only meaningful at a declared
    /// timeout parameter position.
    Timeout(Timeout),
    /// Absent / nil.
    Absent,
}

impl From<&str> for CommandValue {
    fn from(text: &str) -> Self {
        CommandValue::Text(text.to_string())
    }
}

impl From<String> for CommandValue {
    fn from(text: String) -> Self {
        CommandValue::Text(text)
    }
}

impl From<Vec<u8>> for CommandValue {
    fn from(bytes: Vec<u8>) -> Self {
        CommandValue::Bytes(bytes)
    }
}

impl From<i64> for CommandValue {
    fn from(value: i64) -> Self {
        CommandValue::Int(value)
    }
}

impl From<bool> for CommandValue {
    fn from(value: bool) -> Self {
        CommandValue::Bool(value)
    }
}

impl From<Timeout> for CommandValue {
    fn from(timeout: Timeout) -> Self {
        CommandValue::Timeout(timeout)
    }
}
