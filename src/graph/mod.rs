//! Typed node graphs composed with `+` and `|`.
//!
//! A graph is built bottom-up from atomic nodes:
//!
//! - `a + b` runs `a` then `b`: every exit of `a` leads to every entry of `b`
//! - `a | b` offers `a` and `b` as alternatives sharing their exits
//!
//! Composition only records structure. [`Node::construct_connection`] then
//! wires the successor links once, turning a `Node<P, Unconnected>` into a
//! traversable `Node<P, Connected>`. Typestate keeps the two phases apart:
//! an unconnected graph has no traversal API, a connected one cannot be
//! composed further.
//!
//! ```
//! use weft::graph::Node;
//!
//! let graph = (Node::atom("a") | Node::atom("b")) + Node::atom("c");
//! let mut graph = graph.construct_connection();
//! assert_eq!(graph.node_num(), 3);
//! assert_eq!(graph.depth_first_payloads(), vec![&"a", &"c", &"b"]);
//! ```

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::error::ContractViolation;

mod atom;
mod compose;
mod connect;
mod raw;
mod shape;

pub use atom::{Atom, Link, NodeId, Successor};
pub use shape::NodeKind;

use shape::Shape;

// ============================================================================
// Typestate Markers
// ============================================================================

/// Marker: the graph is still being composed; links are not wired.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconnected;

/// Marker: links are wired and the graph can be traversed.
#[derive(Debug, Clone, Copy)]
pub struct Connected;

/// The phase a graph is in, recorded alongside it when serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Composed but not wired.
    Unconnected,
    /// Wired by `construct_connection`.
    Connected,
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Unconnected {}
    impl Sealed for super::Connected {}
}

/// Implemented by the typestate markers [`Unconnected`] and [`Connected`].
pub trait GraphState: sealed::Sealed {
    /// The phase the marker stands for.
    const PHASE: Phase;
}

impl GraphState for Unconnected {
    const PHASE: Phase = Phase::Unconnected;
}

impl GraphState for Connected {
    const PHASE: Phase = Phase::Connected;
}

// ============================================================================
// Node
// ============================================================================

/// A composed graph of atomic nodes carrying payloads of type `P`.
///
/// The node owns every atom it contains in a flat arena; the structure
/// (atom, chain or branch) refers to atoms by [`NodeId`].
///
/// A node serializes together with its [`Phase`]. Deserializing checks the
/// phase against `State` and rejects, with a [`GraphError`], any structure
/// or wiring that composition could not have produced.
///
/// [`GraphError`]: crate::GraphError
pub struct Node<P, State = Unconnected> {
    atoms: Vec<Atom<P>>,
    shape: Shape,
    _state: PhantomData<State>,
}

impl<P> Node<P, Unconnected> {
    /// Create an atomic node holding `payload`.
    ///
    /// Its successor is the terminal marker until it is composed.
    pub fn atom(payload: P) -> Self {
        Self {
            atoms: vec![Atom::new(payload)],
            shape: Shape::Atom(NodeId::new(0)),
            _state: PhantomData,
        }
    }
}

impl<P, State> Node<P, State> {
    /// Number of atomic nodes in this structure.
    pub fn node_num(&self) -> usize {
        debug_assert_eq!(self.shape.node_num(), self.atoms.len());
        self.atoms.len()
    }

    /// Whether this is an atom, a chain or a branch.
    pub fn kind(&self) -> NodeKind {
        self.shape.kind()
    }

    /// Number of direct sub-nodes; `1` for an atom.
    pub fn child_count(&self) -> usize {
        self.shape.child_count()
    }

    /// The atoms a traversal of this node reaches first.
    pub fn entries(&self) -> Vec<NodeId> {
        let mut entries = Vec::new();
        self.shape.entries(&mut entries);
        entries
    }

    /// The atoms a traversal of this node reaches last.
    pub fn exits(&self) -> Vec<NodeId> {
        let mut exits = Vec::new();
        self.shape.exits(&mut exits);
        exits
    }

    /// The atom with the given id, if it belongs to this graph.
    pub fn get(&self, id: NodeId) -> Option<&Atom<P>> {
        self.atoms.get(id.index())
    }

    /// The atom with the given id, or the violation if it does not belong
    /// to this graph.
    pub fn try_atom(&self, id: NodeId) -> Result<&Atom<P>, ContractViolation> {
        self.get(id).ok_or(ContractViolation::UnknownNode {
            id,
            node_num: self.atoms.len(),
        })
    }

    /// The atom with the given id.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::UnknownNode`] if `id` is out of range.
    #[track_caller]
    pub fn atom_at(&self, id: NodeId) -> &Atom<P> {
        match self.try_atom(id) {
            Ok(atom) => atom,
            Err(violation) => panic!("{violation}"),
        }
    }

    /// The payload of the atom with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    #[track_caller]
    pub fn payload(&self, id: NodeId) -> &P {
        self.atom_at(id).payload()
    }

    /// Mutable access to the payload of the atom with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    #[track_caller]
    pub fn payload_mut(&mut self, id: NodeId) -> &mut P {
        let node_num = self.atoms.len();
        match self.atoms.get_mut(id.index()) {
            Some(atom) => atom.payload_mut(),
            None => panic!("{}", ContractViolation::UnknownNode { id, node_num }),
        }
    }

    /// Iterate over `(id, payload)` in arena order.
    ///
    /// Arena order is the order in which atoms appear in the composition
    /// expression, left to right.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &P)> + '_ {
        self.atoms
            .iter()
            .enumerate()
            .map(|(index, atom)| (NodeId::new(index), atom.payload()))
    }
}

impl<P: Clone, State> Clone for Node<P, State> {
    fn clone(&self) -> Self {
        Self {
            atoms: self.atoms.clone(),
            shape: self.shape.clone(),
            _state: PhantomData,
        }
    }
}

impl<P: std::fmt::Debug, State> std::fmt::Debug for Node<P, State> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.kind())
            .field("atoms", &self.atoms)
            .finish()
    }
}
