//! Wiring successor links and walking the wired graph.

use std::marker::PhantomData;

use super::atom::{Atom, Link, NodeId};
use super::shape::Shape;
use super::{Connected, Node, Unconnected};

impl<P> Node<P, Unconnected> {
    /// Wire every successor link and make the graph traversable.
    ///
    /// For each pair of neighbouring elements inside every chain, the exits
    /// of the first are linked to the entry set of the second, using the
    /// successor shape recorded during composition. Branches are wired by
    /// wiring each alternative. The final exits keep the terminal marker.
    pub fn construct_connection(self) -> Node<P, Connected> {
        let Node {
            mut atoms, shape, ..
        } = self;

        let links = wiring(&atoms, &shape);

        #[cfg(feature = "tracing")]
        {
            let wired = links.iter().filter(|link| !link.is_terminal()).count();
            tracing::debug!(node_num = atoms.len(), links = wired, "graph.connect");
            for (index, link) in links.iter().enumerate() {
                if !link.is_terminal() {
                    tracing::trace!(from = %NodeId::new(index), to = ?link.targets(), "graph.link");
                }
            }
        }

        for (atom, link) in atoms.iter_mut().zip(links) {
            atom.set_link(link);
        }

        Node {
            atoms,
            shape,
            _state: PhantomData,
        }
    }
}

/// The link of every atom, by arena index, once `shape` is wired.
pub(super) fn wiring<P>(atoms: &[Atom<P>], shape: &Shape) -> Vec<Link> {
    let mut pairs = Vec::new();
    shape.adjacent_pairs(&mut pairs);

    let mut links = vec![Link::Terminal; atoms.len()];
    for (exits, entries) in pairs {
        for exit in exits {
            links[exit.index()] = Link::resolve(atoms[exit.index()].successor(), entries.clone());
        }
    }
    links
}

impl<P> Node<P, Connected> {
    /// The wired successor pointer of an atom.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    #[track_caller]
    pub fn link(&self, id: NodeId) -> &Link {
        self.atom_at(id).link()
    }

    /// The successors of an atom, empty when it leads to the terminal marker.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    #[track_caller]
    pub fn successors(&self, id: NodeId) -> &[NodeId] {
        self.link(id).targets()
    }

    /// Whether a traversal has passed through an atom.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    #[track_caller]
    pub fn is_visited(&self, id: NodeId) -> bool {
        self.atom_at(id).is_visited()
    }

    /// Mark an atom as visited. Returns `true` if it was not visited before.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    #[track_caller]
    pub fn visit(&mut self, id: NodeId) -> bool {
        let fresh = !self.is_visited(id);
        self.atoms[id.index()].set_visited(true);
        fresh
    }

    /// Clear every visited flag.
    pub fn reset_visits(&mut self) {
        self.atoms.iter_mut().for_each(|atom| atom.set_visited(false));
    }

    /// Depth-first walk from the entry set, in visiting order.
    ///
    /// Entries are walked in structural order and links are followed in
    /// order. An atom reached a second time (where branches converge) is not
    /// revisited, and every path ends at the terminal marker. Visited flags
    /// are reset first and left set afterwards.
    pub fn depth_first(&mut self) -> Vec<NodeId> {
        self.reset_visits();

        let mut order = Vec::with_capacity(self.atoms.len());
        let mut stack: Vec<NodeId> = self.entries();
        stack.reverse();

        while let Some(id) = stack.pop() {
            if !self.visit(id) {
                continue;
            }
            order.push(id);
            stack.extend(self.successors(id).iter().rev());
        }
        order
    }

    /// Payloads in [`depth_first`](Self::depth_first) order.
    pub fn depth_first_payloads(&mut self) -> Vec<&P> {
        let order = self.depth_first();
        let this = &*self;
        order.into_iter().map(move |id| this.payload(id)).collect()
    }
}
