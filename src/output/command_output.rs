use crate::command::CommandValue;
use crate::method::ValueShape;

/// A decoded command result. Produced by the output factory, then
/// adapted to the declared return shape by the result converter.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Unit,
    Boolean(bool),
    Integer(i64),
    /// A single value; `CommandValue::Absent` models nil.
    Value(CommandValue),
    ValueList(Vec<CommandValue>),
    ValueSet(Vec<CommandValue>),
    KeyValueMap(Vec<(CommandValue, CommandValue)>),
}

impl CommandOutput {
    /// The shape this result actually has. An absent single value
    /// reports as optional so the converter can tell "nil" apart from a
    /// required value.
    pub fn shape(&self) -> ValueShape {
        match self {
            CommandOutput::Unit => ValueShape::Unit,
            CommandOutput::Boolean(_) => ValueShape::Boolean,
            CommandOutput::Integer(_) => ValueShape::Integer,
            CommandOutput::Value(CommandValue::Absent) => ValueShape::OptionalValue,
            CommandOutput::Value(_) => ValueShape::Value,
            CommandOutput::ValueList(_) => ValueShape::ValueList,
            CommandOutput::ValueSet(_) => ValueShape::ValueSet,
            CommandOutput::KeyValueMap(_) => ValueShape::KeyValueMap,
        }
    }
}
