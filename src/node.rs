use num_traits::real::Real;
use smallvec::SmallVec;

use crate::{Coords, errors::InternalError, idx::Idx, math::is_righter};

pub(crate) type NodeIdx<C> = Idx<PolyNode<C>>;

/// A vertex of the edge tracer's intersection graph.
///
/// Neighbors are stored as arena indices in insertion order. Removing a neighbor keeps the order of the rest,
/// which the boundary walk's tie-breaking relies on.
#[derive(Debug, Clone)]
pub(crate) struct PolyNode<C: Real> {
    position: Coords<C>,
    connected: SmallVec<[NodeIdx<C>; 4]>,
}

impl<C: Real> PolyNode<C> {
    pub fn new(position: Coords<C>) -> Self {
        Self {
            position,
            connected: SmallVec::new(),
        }
    }

    pub fn position(&self) -> Coords<C> { self.position }

    pub fn connected(&self) -> &[NodeIdx<C>] { &self.connected }

    pub fn degree(&self) -> usize { self.connected.len() }

    pub fn is_connected_to(&self, ni: NodeIdx<C>) -> bool {
        self.connected.contains(&ni)
    }

    /// Duplicate additions are ignored
    pub fn add_connection(&mut self, ni: NodeIdx<C>, max_connections: usize) -> Result<(), InternalError> {
        if self.is_connected_to(ni) {
            return Ok(());
        }
        if self.connected.len() >= max_connections {
            return Err(InternalError::new(format!("Node at {} exceeded {} connections", self.position, max_connections)));
        }
        self.connected.push(ni);
        Ok(())
    }

    pub fn remove_connection(&mut self, ni: NodeIdx<C>) -> Result<(), InternalError> {
        match self.connected.iter().position(|&c| c == ni) {
            Some(i) => {
                self.connected.remove(i);
                Ok(())
            }
            None => Err(InternalError::new(format!("Node at {} has no reciprocal connection to {}", self.position, ni))),
        }
    }

    /// Detaches the node from the graph. It stays in the arena so other indices remain valid.
    pub fn orphan(&mut self) {
        self.connected.clear();
    }
}

/// Picks the neighbor of `nodes[ni]` with the "rightest" turn (smallest clockwise deviation) relative to `in_dir`,
/// skipping `incoming`.
///
/// A node with a single neighbor is a dead end, and the walk turns around toward `incoming`.
pub(crate) fn rightest_connection<C: Real>(nodes: &[PolyNode<C>], ni: NodeIdx<C>, in_dir: Coords<C>, incoming: Option<NodeIdx<C>>) -> Option<NodeIdx<C>> {
    let node = &nodes[ni];
    match (node.degree(), incoming) {
        (0, _) => return None,
        (1, Some(incoming)) => return Some(incoming),
        _ => { }
    }

    let in_dir = in_dir.normalized();
    let mut result: Option<(NodeIdx<C>, C, C)> = None;
    for &ci in node.connected() {
        if Some(ci) == incoming {
            continue;
        }
        let test_dir = (nodes[ci].position() - node.position()).normalized();
        let my_cos = in_dir.dot(test_dir);
        let my_sin = in_dir.cross(test_dir);
        result = match result {
            Some((_, res_sin, res_cos)) if !is_righter(my_sin, my_cos, res_sin, res_cos) => result,
            _ => Some((ci, my_sin, my_cos)),
        };
    }
    result.map(|(ci, _, _)| ci)
}
