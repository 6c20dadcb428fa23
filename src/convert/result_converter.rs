use crate::command::CommandValue;
use crate::error::CallError;
use crate::method::ValueShape;
use crate::output::CommandOutput;

/// Post-processes a decoded result into the method's exact declared
/// shape. Adapts between equivalent representations without altering
/// element values; a no-op when shapes already match; a conversion
/// error when no adaptation exists.
#[derive(Debug, Clone)]
pub struct ResultConverter {
    target: ValueShape,
}

impl ResultConverter {
    pub fn new(target: ValueShape) -> Self {
        Self { target }
    }

    pub fn target(&self) -> ValueShape {
        self.target
    }

    pub fn convert(&self, output: CommandOutput) -> Result<CommandOutput, CallError> {
        let produced = output.shape();
        if produced == self.target {
            return Ok(output);
        }

        match (self.target, output) {
            // A present value satisfies an optional declaration as-is;
            // nil satisfies it trivially.
            (ValueShape::OptionalValue, CommandOutput::Value(value)) => {
                Ok(CommandOutput::Value(value))
            }
            // Nil cannot satisfy a required value.
            (ValueShape::Value, CommandOutput::Value(CommandValue::Absent)) => {
                Err(self.mismatch(produced))
            }
            (ValueShape::Value, CommandOutput::ValueList(mut items)) if items.len() == 1 => {
                Ok(CommandOutput::Value(items.remove(0)))
            }
            (ValueShape::OptionalValue, CommandOutput::ValueList(mut items)) => {
                match items.len() {
                    0 => Ok(CommandOutput::Value(CommandValue::Absent)),
                    1 => Ok(CommandOutput::Value(items.remove(0))),
                    _ => Err(self.mismatch(produced)),
                }
            }
            (ValueShape::ValueList, CommandOutput::Value(CommandValue::Absent)) => {
                Ok(CommandOutput::ValueList(Vec::new()))
            }
            (ValueShape::ValueList, CommandOutput::Value(value)) => {
                Ok(CommandOutput::ValueList(vec![value]))
            }
            (ValueShape::ValueList, CommandOutput::ValueSet(items)) => {
                Ok(CommandOutput::ValueList(items))
            }
            (ValueShape::ValueSet, CommandOutput::ValueList(items)) => {
                Ok(CommandOutput::ValueSet(dedupe(items)))
            }
            (ValueShape::Boolean, CommandOutput::Integer(n)) => {
                Ok(CommandOutput::Boolean(n != 0))
            }
            (ValueShape::Integer, CommandOutput::Boolean(b)) => {
                Ok(CommandOutput::Integer(i64::from(b)))
            }
            // A unit declaration discards whatever was produced.
            (ValueShape::Unit, _) => Ok(CommandOutput::Unit),
            _ => Err(self.mismatch(produced)),
        }
    }

    fn mismatch(&self, produced: ValueShape) -> CallError {
        CallError::Conversion {
            produced,
            declared: self.target,
        }
    }
}

/// Removes duplicates, keeping first occurrences in order.
fn dedupe(items: Vec<CommandValue>) -> Vec<CommandValue> {
    let mut unique: Vec<CommandValue> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}
