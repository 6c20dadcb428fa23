/// One slot in a command's wire template.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CommandSegment {
    /// Fixed protocol keyword, emitted verbatim.
    Literal(String),
    /// Substituted at call time with the encoded argument at this
    /// parameter index of the owning method.
    Placeholder(usize),
}
