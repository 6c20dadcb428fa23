mod bound_command;
mod command_factory;
mod command_value;

pub use bound_command::BoundCommand;
pub use command_factory::CommandFactory;
pub use command_value::CommandValue;
