//! Declarative command binding and dispatch.
//!
//! `dyncmd` turns declarative method specifications into cached,
//! ready-to-invoke protocol commands. Binding happens once per method:
//! the lookup strategy classifies the execution style, resolves the
//! codec, builds the keyword/placeholder segment template, and selects
//! the reply decoder. Invocation happens per call: arguments are encoded
//! into a transient [`command::BoundCommand`], dispatched over an
//! external [`connection::CommandConnection`], and the reply is decoded
//! and shaped into the declared return form.
//!
//! The transport, the protocol grammar, and codec implementations all
//! live outside this crate.

pub mod client;
pub mod codec;
pub mod command;
pub mod connection;
pub mod constants;
pub mod convert;
pub mod error;
pub mod execute;
pub mod lookup;
mod macros;
pub mod method;
pub mod output;
pub mod segment;
pub mod utils;

pub use macros::*;
