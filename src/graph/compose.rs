//! The `+` and `|` composition operators.

use std::marker::PhantomData;
use std::ops::{Add, BitOr};

use super::atom::Successor;
use super::shape::Shape;
use super::{Node, Unconnected};

impl<P: Clone> Node<P, Unconnected> {
    /// A structural copy whose exits are composed against `successor`.
    ///
    /// Only the exit atoms change; `self` is left untouched.
    ///
    /// The declared successor is a record of intent, not a link. Placing the
    /// copy on the left of a `+` redirects its exits again, to the entry set
    /// they actually precede. Exits that nothing follows are wired to
    /// [`Link::Terminal`](super::Link::Terminal) by
    /// [`construct_connection`](Node::construct_connection) whatever they
    /// declare.
    pub fn copy_with_successor(&self, successor: Successor) -> Self {
        let mut copy = self.clone();
        copy.redirect_exits(successor);
        copy
    }
}

impl<P> Node<P, Unconnected> {
    fn redirect_exits(&mut self, successor: Successor) {
        for id in self.exits() {
            self.atoms[id.index()].set_successor(successor);
        }
    }

    /// Move the atoms of `other` behind ours, renumbering its structure,
    /// and join the two structures with `join`.
    fn combine(self, mut other: Self, join: fn(Shape, Shape) -> Shape) -> Self {
        let Node {
            mut atoms, shape, ..
        } = self;
        let by = atoms.len();
        other.shape.offset(by);
        for atom in &mut other.atoms {
            atom.offset(by);
        }
        atoms.append(&mut other.atoms);
        Node {
            atoms,
            shape: join(shape, other.shape),
            _state: PhantomData,
        }
    }
}

/// Sequential composition: `self` then `rhs`.
///
/// Every exit of `self` is composed against the entry set of `rhs`. Chains
/// on either side are spliced, so `(a + b) + (c + d)` is one chain of four.
impl<P> Add for Node<P, Unconnected> {
    type Output = Node<P, Unconnected>;

    fn add(mut self, rhs: Self) -> Self::Output {
        let successor = Successor::for_entries(rhs.entries().len());
        self.redirect_exits(successor);
        self.combine(rhs, Shape::chain)
    }
}

/// Alternative composition: `self` or `rhs`.
///
/// Successors are left alone; the exits of both sides are redirected
/// together by a later `+`. Branches on either side are spliced.
impl<P> BitOr for Node<P, Unconnected> {
    type Output = Node<P, Unconnected>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.combine(rhs, Shape::branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{NodeId, NodeKind};

    #[test]
    fn chain_plus_atom_extends_the_chain() {
        let chain = Node::atom(1) + Node::atom(2) + Node::atom(3);
        assert_eq!(chain.child_count(), 3);

        let longer = chain + Node::atom(4);
        assert_eq!(longer.kind(), NodeKind::Chain);
        assert_eq!(longer.child_count(), 4);
        assert_eq!(longer.node_num(), 4);
    }

    #[test]
    fn atom_plus_chain_is_flat() {
        let node = Node::atom(1) + (Node::atom(2) + Node::atom(3));
        assert_eq!(node.child_count(), 3);
        let payloads: Vec<_> = node.iter().map(|(_, p)| *p).collect();
        assert_eq!(payloads, vec![1, 2, 3]);
    }

    #[test]
    fn branch_of_branches_is_flat() {
        let node = (Node::atom(1) | Node::atom(2)) | (Node::atom(3) | Node::atom(4));
        assert_eq!(node.kind(), NodeKind::Branch);
        assert_eq!(node.child_count(), 4);
        assert_eq!(node.entries().len(), 4);
        assert_eq!(node.exits().len(), 4);
    }

    #[test]
    fn plus_redirects_exits_to_the_entry_set() {
        let node = Node::atom(0) + (Node::atom(1) | Node::atom(2));
        assert_eq!(node.atom_at(NodeId::new(0)).successor(), Successor::Fanout(2));
        assert_eq!(node.atom_at(NodeId::new(1)).successor(), Successor::Terminal);

        let node = node + Node::atom(3);
        assert_eq!(node.atom_at(NodeId::new(1)).successor(), Successor::Single);
        assert_eq!(node.atom_at(NodeId::new(2)).successor(), Successor::Single);
        assert_eq!(node.atom_at(NodeId::new(3)).successor(), Successor::Terminal);
    }

    #[test]
    fn or_leaves_successors_alone() {
        let node = Node::atom(0) | Node::atom(1);
        assert!(node
            .iter()
            .all(|(id, _)| node.atom_at(id).successor() == Successor::Terminal));
    }

    #[test]
    fn copy_with_successor_leaves_the_source() {
        let chain = Node::atom('a') + Node::atom('b');
        let copy = chain.copy_with_successor(Successor::Fanout(2));
        assert_eq!(copy.atom_at(NodeId::new(1)).successor(), Successor::Fanout(2));
        assert_eq!(chain.atom_at(NodeId::new(1)).successor(), Successor::Terminal);
        assert_eq!(copy.atom_at(NodeId::new(0)).successor(), Successor::Single);
    }

    #[test]
    fn declared_successor_is_not_a_link() {
        let copy = Node::atom('a').copy_with_successor(Successor::Fanout(3));

        let lone = copy.clone().construct_connection();
        assert_eq!(lone.atom_at(NodeId::new(0)).successor(), Successor::Fanout(3));
        assert!(lone.link(NodeId::new(0)).is_terminal());

        let joined = (copy + Node::atom('b')).construct_connection();
        assert_eq!(joined.atom_at(NodeId::new(0)).successor(), Successor::Single);
        assert_eq!(joined.successors(NodeId::new(0)), &[NodeId::new(1)]);
    }
}
