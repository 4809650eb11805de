//! Serialized form of a graph, validated on the way back in.

use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::atom::{Atom, Link, NodeId};
use super::connect::wiring;
use super::shape::Shape;
use super::{GraphState, Node, Phase};
use crate::error::GraphError;

#[derive(Serialize)]
struct RawNodeRef<'a, P> {
    phase: Phase,
    atoms: &'a [Atom<P>],
    shape: &'a Shape,
}

#[derive(Deserialize)]
struct RawNode<P> {
    phase: Phase,
    atoms: Vec<Atom<P>>,
    shape: Shape,
}

impl<P, State> Serialize for Node<P, State>
where
    P: Serialize,
    State: GraphState,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawNodeRef {
            phase: State::PHASE,
            atoms: &self.atoms,
            shape: &self.shape,
        }
        .serialize(serializer)
    }
}

impl<'de, P, State> Deserialize<'de> for Node<P, State>
where
    P: Deserialize<'de>,
    State: GraphState,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawNode::<P>::deserialize(deserializer)?;
        Self::from_raw(raw).map_err(serde::de::Error::custom)
    }
}

impl<P, State: GraphState> Node<P, State> {
    fn from_raw(raw: RawNode<P>) -> Result<Self, GraphError> {
        let RawNode {
            phase,
            atoms,
            shape,
        } = raw;

        if phase != State::PHASE {
            return Err(GraphError::WrongPhase {
                expected: State::PHASE,
                found: phase,
            });
        }
        shape.validate(atoms.len())?;
        check_links(&atoms, &shape, phase)?;

        Ok(Node {
            atoms,
            shape,
            _state: PhantomData,
        })
    }
}

/// Every link must be the one wiring `shape` produces: the terminal marker
/// everywhere before connection, the resolved successors after.
fn check_links<P>(atoms: &[Atom<P>], shape: &Shape, phase: Phase) -> Result<(), GraphError> {
    let node_num = atoms.len();
    let expected = match phase {
        Phase::Unconnected => vec![Link::Terminal; node_num],
        Phase::Connected => wiring(atoms, shape),
    };

    for (index, (atom, expected)) in atoms.iter().zip(&expected).enumerate() {
        let link = atom.link();
        if let Some(&id) = link.targets().iter().find(|id| id.index() >= node_num) {
            return Err(GraphError::UnknownNode { id, node_num });
        }
        if link != expected {
            return Err(GraphError::LinkMismatch {
                id: NodeId::new(index),
            });
        }
    }
    Ok(())
}
