//! Structural tree of a composed graph.
//!
//! Leaves are arena indices. Chains and branches always hold at least two
//! children, and never a child of their own kind: composition flattens.

use serde::{Deserialize, Serialize};

use super::atom::NodeId;
use crate::error::GraphError;

/// What kind of structure a node is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// A single payload.
    Atom,
    /// Sub-nodes run one after another.
    Chain,
    /// Alternative sub-nodes sharing their exits.
    Branch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Shape {
    Atom(NodeId),
    Chain(Vec<Shape>),
    Branch(Vec<Shape>),
}

impl Shape {
    pub(crate) fn kind(&self) -> NodeKind {
        match self {
            Self::Atom(_) => NodeKind::Atom,
            Self::Chain(_) => NodeKind::Chain,
            Self::Branch(_) => NodeKind::Branch,
        }
    }

    pub(crate) fn child_count(&self) -> usize {
        match self {
            Self::Atom(_) => 1,
            Self::Chain(children) | Self::Branch(children) => children.len(),
        }
    }

    /// Number of atoms in this structure.
    pub(crate) fn node_num(&self) -> usize {
        match self {
            Self::Atom(_) => 1,
            Self::Chain(children) | Self::Branch(children) => {
                children.iter().map(Shape::node_num).sum()
            }
        }
    }

    /// Atoms a traversal reaches first.
    pub(crate) fn entries(&self, out: &mut Vec<NodeId>) {
        match self {
            Self::Atom(id) => out.push(*id),
            // chains have at least two children
            Self::Chain(children) => children[0].entries(out),
            Self::Branch(children) => children.iter().for_each(|child| child.entries(out)),
        }
    }

    /// Atoms a traversal reaches last.
    pub(crate) fn exits(&self, out: &mut Vec<NodeId>) {
        match self {
            Self::Atom(id) => out.push(*id),
            Self::Chain(children) => children[children.len() - 1].exits(out),
            Self::Branch(children) => children.iter().for_each(|child| child.exits(out)),
        }
    }

    pub(crate) fn offset(&mut self, by: usize) {
        match self {
            Self::Atom(id) => *id = id.offset(by),
            Self::Chain(children) | Self::Branch(children) => {
                children.iter_mut().for_each(|child| child.offset(by))
            }
        }
    }

    /// Sequential composition, splicing chain operands.
    pub(crate) fn chain(self, next: Shape) -> Shape {
        let mut children = self.into_chain_children();
        children.extend(next.into_chain_children());
        Self::Chain(children)
    }

    /// Alternative composition, splicing branch operands.
    pub(crate) fn branch(self, other: Shape) -> Shape {
        let mut children = self.into_branch_children();
        children.extend(other.into_branch_children());
        Self::Branch(children)
    }

    fn into_chain_children(self) -> Vec<Shape> {
        match self {
            Self::Chain(children) => children,
            other => vec![other],
        }
    }

    fn into_branch_children(self) -> Vec<Shape> {
        match self {
            Self::Branch(children) => children,
            other => vec![other],
        }
    }

    /// Check a structure read from outside against an arena of `node_num`
    /// atoms.
    ///
    /// Chains and branches need two or more children and never a child of
    /// their own kind; every arena index appears exactly once.
    pub(crate) fn validate(&self, node_num: usize) -> Result<(), GraphError> {
        let mut seen = vec![false; node_num];
        let mut stack = vec![self];
        while let Some(shape) = stack.pop() {
            match shape {
                Self::Atom(id) => {
                    let slot = seen.get_mut(id.index()).ok_or(GraphError::UnknownNode {
                        id: *id,
                        node_num,
                    })?;
                    if std::mem::replace(slot, true) {
                        return Err(GraphError::DuplicateNode { id: *id });
                    }
                }
                Self::Chain(children) | Self::Branch(children) => {
                    let kind = shape.kind();
                    if children.len() < 2 {
                        return Err(GraphError::TooFewChildren {
                            kind,
                            children: children.len(),
                        });
                    }
                    if children.iter().any(|child| child.kind() == kind) {
                        return Err(GraphError::NestedComposite { kind });
                    }
                    stack.extend(children.iter());
                }
            }
        }

        match seen.iter().position(|seen| !seen) {
            Some(index) => Err(GraphError::DetachedNode {
                id: NodeId::new(index),
            }),
            None => Ok(()),
        }
    }

    /// Every `(exits, entries)` pair that sits side by side inside a chain,
    /// at any depth.
    pub(crate) fn adjacent_pairs(&self, out: &mut Vec<(Vec<NodeId>, Vec<NodeId>)>) {
        let mut stack = vec![self];
        while let Some(shape) = stack.pop() {
            match shape {
                Self::Atom(_) => {}
                Self::Chain(children) => {
                    for pair in children.windows(2) {
                        let mut exits = Vec::new();
                        let mut entries = Vec::new();
                        pair[0].exits(&mut exits);
                        pair[1].entries(&mut entries);
                        out.push((exits, entries));
                    }
                    stack.extend(children.iter());
                }
                Self::Branch(children) => stack.extend(children.iter()),
            }
        }
    }
}
