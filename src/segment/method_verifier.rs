use crate::error::BindError;
use crate::method::{CommandMethod, ParameterKind};
use crate::segment::{CommandSegment, CommandSegmentTemplate};

/// Structural check between a segment template and its owning method.
/// Violations are bind-time fatal; nothing here runs at call time.
pub struct CommandMethodVerifier;

impl CommandMethodVerifier {
    pub fn validate(
        template: &CommandSegmentTemplate,
        method: &CommandMethod,
    ) -> Result<(), BindError> {
        let malformed = |detail: String| BindError::MalformedTemplate {
            method: method.name().to_string(),
            detail,
        };

        if !matches!(template.segments().first(), Some(CommandSegment::Literal(_))) {
            return Err(malformed(
                "template must start with a keyword segment".to_string(),
            ));
        }

        let parameters = method.parameters();
        let mut references = vec![0usize; parameters.len()];
        let mut last_placeholder = None;

        for segment in template.segments() {
            if let CommandSegment::Placeholder(index) = segment {
                let parameter = parameters.get(*index).ok_or_else(|| {
                    malformed(format!(
                        "placeholder references parameter position {} but only {} parameters are declared",
                        index,
                        parameters.len()
                    ))
                })?;

                if parameter.kind == ParameterKind::Timeout {
                    return Err(malformed(format!(
                        "placeholder references timeout parameter `{}` at position {}",
                        parameter.name, index
                    )));
                }

                references[*index] += 1;
                last_placeholder = Some(*index);
            }
        }

        for (index, parameter) in parameters.iter().enumerate() {
            if parameter.kind == ParameterKind::Timeout {
                continue;
            }
            match references[index] {
                1 => {}
                0 => {
                    return Err(malformed(format!(
                        "parameter `{}` at position {} has no matching placeholder",
                        parameter.name, index
                    )));
                }
                n => {
                    return Err(malformed(format!(
                        "parameter `{}` at position {} is referenced {} times",
                        parameter.name, index, n
                    )));
                }
            }

            // A variadic expansion would shift everything after it.
            if parameter.variadic && last_placeholder != Some(index) {
                return Err(malformed(format!(
                    "variadic parameter `{}` must occupy the final placeholder",
                    parameter.name
                )));
            }
        }

        Ok(())
    }
}
