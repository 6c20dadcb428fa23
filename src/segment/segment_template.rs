use crate::segment::CommandSegment;

/// Ordered, immutable sequence of segment slots — the protocol "shape"
/// of a method, independent of runtime argument values. Built once per
/// method and reused across calls.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CommandSegmentTemplate {
    segments: Vec<CommandSegment>,
}

impl CommandSegmentTemplate {
    pub fn new(segments: Vec<CommandSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[CommandSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
