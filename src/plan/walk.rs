use crate::plan::{Decimate, Stream, TopLevel};

/// Read-only traversal of a plan, in the order a pipeline is wired: the
/// capture source, then each decimator followed by its streams, then the
/// streams fed directly by the source.
pub trait PlanVisitor {
    fn source(&mut self, _top: &TopLevel) {}

    fn decimate(&mut self, _decimate: &Decimate) {}

    /// `parent` is `None` for streams fed by the capture source.
    fn stream(&mut self, _stream: &Stream, _parent: Option<&Decimate>) {}
}

impl TopLevel {
    pub fn walk<V: PlanVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.source(self);
        for decimate in self.decimators() {
            visitor.decimate(decimate);
            for stream in decimate.streams() {
                visitor.stream(stream, Some(decimate));
            }
        }
        for stream in self.streams() {
            visitor.stream(stream, None);
        }
    }
}
