mod next_invocation_id;

pub use next_invocation_id::next_invocation_id;
