mod blocking_lookup_strategy;
mod deferred_lookup_strategy;
mod factory_resolver;
mod lookup_strategy;
mod streaming_lookup_strategy;

pub use blocking_lookup_strategy::BlockingLookupStrategy;
pub use deferred_lookup_strategy::DeferredLookupStrategy;
pub use lookup_strategy::ExecutableCommandLookupStrategy;
pub use streaming_lookup_strategy::StreamingLookupStrategy;
