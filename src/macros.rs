use xxhash_rust::const_xxh3::xxh3_64 as const_xxh3_64;

pub const fn command_id_hash(name: &str) -> u64 {
    const_xxh3_64(name.as_bytes())
}

/// Compile-time command method ID generator using xxHash3.
///
/// Computes a deterministic `u64` identifier from a method name literal
/// at **compile time**. The result is identical to the id the binder
/// derives at registration time, so connection implementations can route
/// on constants:
///
/// ```rust,no_run
/// use dyncmd::command_method_id;
/// const GET: u64 = command_method_id!("get");
/// const SET: u64 = command_method_id!("set");
/// assert_ne!(GET, SET);
/// ```
#[macro_export]
macro_rules! command_method_id {
    ($name:literal) => {{
        const ID: u64 = $crate::command_id_hash($name);
        ID
    }};
}
