use num_traits::real::Real;

use crate::{Coords, GeometryError, Polygon, Settings, idx::{self, Idx}, math::{next_index, prev_index, segment_crossing}, node::{NodeIdx, PolyNode, rightest_connection}};

/// The intersection graph of a closed vertex loop. Lives only for a single [trace_edges] call.
struct TraceState<'s, C: Real> {
    nodes: Vec<PolyNode<C>>,
    settings: &'s Settings<C>,
}

/// A crossing between edge `(ni, nj)` and edge `(nk, nl)`
struct Crossing<C: Real> {
    ni: NodeIdx<C>,
    nj: NodeIdx<C>,
    nk: NodeIdx<C>,
    nl: NodeIdx<C>,
    point: Coords<C>,
}

/// Converts a closed vertex loop which may intersect itself into a single simple outline.
///
/// Every crossing of two edges is replaced by a new node joined to all four former endpoints, nodes closer than
/// [Settings::collapse_distance_squared] are merged, and then the outer boundary is walked by always taking the
/// rightmost turn, starting from the lowest node. Dangling "spider legs" left behind by merging are walked out and
/// back, so the outline can visit a position more than once; those become pinch points for
/// [split_pinch_points](crate::split_pinch_points).
///
/// The walk winds counterclockwise.
pub fn trace_edges<C: Real>(polygon: &Polygon<C>, settings: &Settings<C>) -> Result<Polygon<C>, GeometryError> {
    let n = polygon.len();
    if n < 3 {
        return Err(GeometryError::NotEnoughVertices(n));
    }

    let mut state = TraceState::new(polygon, settings)?;
    let crossings = state.resolve_crossings(n * n)?;
    let collapsed = state.collapse_duplicates()?;
    let outline = state.walk_boundary()?;
    // Only dangling edges were left after collapsing
    if outline.len() < 3 {
        return Err(GeometryError::DegenerateInput);
    }
    log::debug!("Traced {} vertices into {} ({} crossings resolved, {} nodes collapsed)", n, outline.len(), crossings, collapsed);
    Ok(outline)
}

impl<'s, C: Real> TraceState<'s, C> {
    fn new(polygon: &Polygon<C>, settings: &'s Settings<C>) -> Result<Self, GeometryError> {
        let n = polygon.len();
        let mut nodes: Vec<PolyNode<C>> = polygon.vertices().iter().map(|&p| PolyNode::new(p)).collect();
        for i in 0..n {
            let node = &mut nodes[i];
            node.add_connection(Idx::new(next_index(i, n)), settings.max_connections)?;
            node.add_connection(Idx::new(prev_index(i, n)), settings.max_connections)?;
        }
        Ok(Self { nodes, settings })
    }

    fn connect(&mut self, a: NodeIdx<C>, b: NodeIdx<C>) -> Result<(), GeometryError> {
        let max_connections = self.settings.max_connections;
        self.nodes[a].add_connection(b, max_connections)?;
        self.nodes[b].add_connection(a, max_connections)?;
        Ok(())
    }

    fn disconnect(&mut self, a: NodeIdx<C>, b: NodeIdx<C>) -> Result<(), GeometryError> {
        self.nodes[b].remove_connection(a)?;
        self.nodes[a].remove_connection(b)?;
        Ok(())
    }

    fn find_crossing(&self) -> Option<Crossing<C>> {
        let epsilon = self.settings.epsilon;
        for ni in idx::indices(&self.nodes) {
            let node_i = &self.nodes[ni];
            for &nj in node_i.connected() {
                for nk in idx::indices(&self.nodes) {
                    if nk == ni || nk == nj {
                        continue;
                    }
                    let node_k = &self.nodes[nk];
                    for &nl in node_k.connected() {
                        if nl == nj || nl == ni {
                            continue;
                        }
                        let crossing = segment_crossing(node_i.position(), self.nodes[nj].position(), node_k.position(), self.nodes[nl].position(), epsilon);
                        if let Some(point) = crossing {
                            return Some(Crossing { ni, nj, nk, nl, point });
                        }
                    }
                }
            }
        }
        None
    }

    /// Splits crossing edges one at a time, rescanning from scratch after each, until no crossing remains.
    fn resolve_crossings(&mut self, max_nodes: usize) -> Result<usize, GeometryError> {
        let mut count = 0;
        while let Some(Crossing { ni, nj, nk, nl, point }) = self.find_crossing() {
            if self.nodes.len() >= max_nodes {
                return Err(GeometryError::inconsistency(format!("Crossing resolution exceeded {} nodes", max_nodes)));
            }
            log::trace!("Edges {} -> {} and {} -> {} cross at {}", ni, nj, nk, nl, point);

            self.disconnect(ni, nj)?;
            self.disconnect(nk, nl)?;
            let nc = idx::push(&mut self.nodes, PolyNode::new(point));
            self.connect(nc, ni)?;
            self.connect(nc, nk)?;
            self.connect(nc, nj)?;
            self.connect(nc, nl)?;
            count += 1;
        }
        Ok(count)
    }

    /// Merges every pair of nodes closer than the collapse distance; the later node's connections move to the earlier node.
    fn collapse_duplicates(&mut self) -> Result<usize, GeometryError> {
        let mut active = self.nodes.len();
        let mut collapsed = 0;
        let mut found_dupe = true;
        while found_dupe {
            found_dupe = false;
            for i in 0..self.nodes.len() {
                let ni: NodeIdx<C> = Idx::new(i);
                if self.nodes[ni].degree() == 0 {
                    continue;
                }
                for j in i + 1..self.nodes.len() {
                    let nj: NodeIdx<C> = Idx::new(j);
                    if self.nodes[nj].degree() == 0 {
                        continue;
                    }
                    let diff = self.nodes[ni].position() - self.nodes[nj].position();
                    if diff.length_squared() > self.settings.collapse_distance_squared {
                        continue;
                    }
                    if active <= 3 {
                        return Err(GeometryError::DegenerateInput);
                    }
                    active -= 1;
                    collapsed += 1;
                    found_dupe = true;

                    let j_connections: Vec<NodeIdx<C>> = self.nodes[nj].connected().to_vec();
                    for nk in j_connections {
                        if nk != ni {
                            self.connect(ni, nk)?;
                        }
                        self.nodes[nk].remove_connection(nj)?;
                    }
                    self.nodes[nj].orphan();

                    if self.nodes[ni].degree() == 0 {
                        break;
                    }
                }
            }
        }
        Ok(collapsed)
    }

    /// The lowest node still attached to the boundary, preferring the largest `x` on ties
    fn start_node(&self) -> Option<NodeIdx<C>> {
        let mut min_y = C::max_value();
        let mut max_x = C::min_value();
        let mut start = None;
        for ni in idx::indices(&self.nodes) {
            let node = &self.nodes[ni];
            if node.degree() <= 1 {
                continue;
            }
            let p = node.position();
            if p.y() < min_y || (p.y() == min_y && p.x() > max_x) {
                min_y = p.y();
                max_x = p.x();
                start = Some(ni);
            }
        }
        start
    }

    fn walk_boundary(&self) -> Result<Polygon<C>, GeometryError> {
        let start = self.start_node().ok_or_else(|| GeometryError::inconsistency("No node of the traced graph has more than one connection"))?;
        let limit = 4 * self.nodes.len();

        let mut outline = vec![self.nodes[start].position()];
        let mut current = start;
        let mut next = rightest_connection(&self.nodes, current, Coords::new(C::one(), C::zero()), None)
            .ok_or_else(|| GeometryError::inconsistency("Start node of the boundary walk has no way out"))?;
        while next != start {
            if outline.len() > limit {
                return Err(GeometryError::inconsistency(format!("Boundary walk visited more than {} nodes without closing", limit)));
            }
            outline.push(self.nodes[next].position());
            let previous = current;
            current = next;
            let in_dir = self.nodes[current].position() - self.nodes[previous].position();
            next = rightest_connection(&self.nodes, current, in_dir, Some(previous))
                .ok_or_else(|| GeometryError::inconsistency(format!("Boundary walk reached isolated node {}", current)))?;
        }
        Ok(Polygon::new(outline))
    }
}
