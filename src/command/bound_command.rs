use crate::output::OutputFactory;
use std::sync::Arc;

/// A fully-bound, dispatchable command: the segment template with every
/// placeholder substituted by its encoded argument, plus the reply
/// decoder for the declared return shape.
///
/// Owned exclusively by the single dispatch call that created it and
/// discarded once the deferred result is handed over.
#[derive(Debug)]
pub struct BoundCommand {
    /// Process-wide correlation id, for log lines only.
    pub invocation_id: u32,
    /// xxh3-64 of the method name; connections route on this.
    pub method_id: u64,
    pub method_name: Arc<str>,
    /// Encoded wire tokens in template order.
    pub tokens: Vec<Vec<u8>>,
    pub output: OutputFactory,
}
