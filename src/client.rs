mod client_builder;
mod command_client;

pub use client_builder::CommandClientBuilder;
pub use command_client::CommandClient;
