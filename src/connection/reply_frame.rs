/// Raw protocol reply delivered by a connection, prior to codec
/// decoding. The wire encoding that produced it belongs to the protocol
/// layer; this crate only consumes the structured form.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyFrame {
    /// Simple status line, e.g. `OK`.
    Status(String),
    /// Protocol-level error reported by the remote end.
    Error(String),
    Integer(i64),
    /// Possibly-nil bulk payload.
    Bulk(Option<Vec<u8>>),
    Array(Vec<ReplyFrame>),
}
