mod command_method;
mod execution_style;
mod method_spec;
mod parameter;
mod return_shape;
mod timeout;

pub use command_method::CommandMethod;
pub use execution_style::ExecutionStyle;
pub use method_spec::{MethodSpec, MethodSpecBuilder};
pub use parameter::{ParameterKind, ParameterSpec};
pub use return_shape::{ReturnShape, ValueShape};
pub use timeout::Timeout;
