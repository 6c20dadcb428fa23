mod command_output;
mod output_factory;
mod output_resolver;

pub use command_output::CommandOutput;
pub use output_factory::OutputFactory;
pub use output_resolver::OutputFactoryResolver;
