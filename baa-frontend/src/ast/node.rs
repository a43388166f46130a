//! AST node, attributes, and tree-building operations
//!
//! The tree entity for every Baa construct: a kind tag, an optional
//! textual payload, a flag bitset, owned ordered children, and a lazily
//! allocated attributes block. Ownership is exclusive and singly rooted;
//! `add_child` moves the child in, and dropping a node tears down its
//! whole subtree.

use baa_common::SourceLocation;
use serde::{Deserialize, Serialize};

use super::kind::{NodeFlags, NodeKind};

/// Optional per-node metadata, allocated on the first setter call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeAttributes {
    pub location: Option<SourceLocation>,
    pub is_constant: bool,
    pub is_static: bool,
    pub is_extern: bool,
}

/// One syntactic construct in the Baa AST
///
/// Child order is semantically significant: statement order in a block,
/// argument order in a call. The kind is fixed at creation; everything
/// else can be annotated by later phases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    kind: NodeKind,
    value: Option<String>,
    flags: NodeFlags,
    pub(crate) children: Vec<Node>,
    attributes: Option<Box<NodeAttributes>>,
}

impl Node {
    /// Create a node with the given kind and optional textual payload
    pub fn new(kind: NodeKind, value: Option<&str>) -> Self {
        Self {
            kind,
            value: value.map(str::to_string),
            flags: NodeFlags::empty(),
            children: Vec::new(),
            attributes: None,
        }
    }

    /// The construct this node represents; immutable after creation
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Textual payload (identifier name, literal's raw text), if any
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    pub fn has_flag(&self, flag: NodeFlags) -> bool {
        self.flags.contains(flag)
    }

    pub fn set_flag(&mut self, flag: NodeFlags) {
        self.flags.insert(flag);
    }

    pub fn clear_flag(&mut self, flag: NodeFlags) {
        self.flags.remove(flag);
    }

    /// Append `child` as the last child, transferring ownership to this
    /// node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Children in insertion order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The attributes block, if any setter has run
    pub fn attributes(&self) -> Option<&NodeAttributes> {
        self.attributes.as_deref()
    }

    fn attributes_mut(&mut self) -> &mut NodeAttributes {
        self.attributes.get_or_insert_with(Default::default)
    }

    /// Record the source position this node came from; a second call
    /// overwrites the stored location
    pub fn set_location(&mut self, line: u32, column: u32, file: &str) {
        self.attributes_mut().location = Some(SourceLocation::new(file, line, column));
    }

    pub fn set_constant(&mut self, is_constant: bool) {
        self.attributes_mut().is_constant = is_constant;
    }

    pub fn set_static(&mut self, is_static: bool) {
        self.attributes_mut().is_static = is_static;
    }

    pub fn set_extern(&mut self, is_extern: bool) {
        self.attributes_mut().is_extern = is_extern;
    }
}

impl Drop for Node {
    // Drains descendants onto an explicit stack so teardown of an
    // arbitrarily deep tree never recurses with its depth. Each node's
    // attributes and payload still go down with the node itself,
    // children before parent.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
