use crate::error::BindError;
use crate::execute::ExecutableCommand;
use crate::method::{CommandMethod, ExecutionStyle, MethodSpec};

/// Bind-time orchestrator for one execution style.
///
/// `resolve` runs the sub-resolvers in order — classify, verify style,
/// resolve codec, build and verify the segment template, resolve the
/// output factory — and produces a ready-to-invoke executable. It runs
/// once per method; callers cache the result.
pub trait ExecutableCommandLookupStrategy {
    fn style(&self) -> ExecutionStyle;

    fn resolve(&self, spec: MethodSpec) -> Result<ExecutableCommand, BindError>;
}

/// Fail fast when a method landed in the wrong strategy, naming the one
/// that serves its declared style.
pub(crate) fn verify_style(
    method: &CommandMethod,
    expected: ExecutionStyle,
) -> Result<(), BindError> {
    if method.style() != expected {
        return Err(BindError::StyleMismatch {
            method: method.name().to_string(),
            declared: method.style(),
            expected,
        });
    }
    Ok(())
}
