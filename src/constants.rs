/// The default buffer size for the reply channel backing streaming
/// commands.
///
/// This value counts *items* (decoded reply frames) the channel can hold
/// before backpressure reaches the producing connection, not a size in
/// bytes. A small buffer keeps memory use low and backpressure
/// responsive; a larger one absorbs delivery jitter at the cost of
/// buffering more undelivered elements.
pub const DEFAULT_REPLY_CHANNEL_BUFFER_SIZE: usize = 8;
