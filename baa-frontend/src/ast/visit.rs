//! Tree traversal for the Baa AST
//!
//! Generic pre-order visitor over a subtree. Context travels through
//! closure capture, so the callback's state is statically typed instead
//! of threaded through an opaque pointer.

use super::node::Node;

impl Node {
    /// Walk the subtree rooted at this node, invoking `visitor` on the
    /// node itself and then on each child in order (pre-order,
    /// depth-first).
    ///
    /// There is no early exit at this layer; a visitor wanting one
    /// threads a sentinel through its captured state.
    pub fn visit(&self, visitor: &mut impl FnMut(&Node)) {
        visitor(self);
        for child in &self.children {
            child.visit(visitor);
        }
    }

    /// Pre-order walk with mutable access, for annotation passes.
    ///
    /// The callback may rewrite payloads, flags, and attributes; it must
    /// not restructure the children of nodes still being walked.
    pub fn visit_mut(&mut self, visitor: &mut impl FnMut(&mut Node)) {
        visitor(self);
        for child in &mut self.children {
            child.visit_mut(visitor);
        }
    }
}
