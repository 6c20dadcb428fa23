use crate::method::{CommandMethod, ParameterKind};
use crate::segment::{CommandSegment, CommandSegmentTemplate};

/// Translates a method's declared keywords and parameters into its
/// segment template: the fixed keywords first, then one placeholder per
/// non-timeout parameter in declaration order. Variadic parameters keep
/// their declared position; expansion happens at call time.
pub struct CommandSegmentFactory;

impl CommandSegmentFactory {
    pub fn create(method: &CommandMethod) -> CommandSegmentTemplate {
        let mut segments = Vec::with_capacity(method.keywords().len() + method.parameters().len());

        for keyword in method.keywords() {
            segments.push(CommandSegment::Literal(keyword.clone()));
        }

        for (index, parameter) in method.parameters().iter().enumerate() {
            if parameter.kind != ParameterKind::Timeout {
                segments.push(CommandSegment::Placeholder(index));
            }
        }

        CommandSegmentTemplate::new(segments)
    }
}
