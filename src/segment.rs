mod command_segment;
mod method_verifier;
mod segment_factory;
mod segment_template;

pub use command_segment::CommandSegment;
pub use method_verifier::CommandMethodVerifier;
pub use segment_factory::CommandSegmentFactory;
pub use segment_template::CommandSegmentTemplate;
