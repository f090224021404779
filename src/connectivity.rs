//! Connectivity by mark propagation.
//!
//! A query marks a seed vertex and then sweeps over every edge cell of the graph, marking the
//! unmarked endpoint of any edge whose other endpoint is already marked. Sweeps repeat until one
//! of them marks nothing new. The graph counts as connected when every vertex that owns an edge
//! cell ended up marked, so isolated vertices never make a graph disconnected.
//!
//! Marks are created for each query and handed back to the caller. The graph itself is never
//! modified, so repeated queries give the same answer.
use bitvec::prelude::*;
use tracing::{debug, instrument, trace};

use crate::graph::{Graph, GraphError};
use crate::index::VertexIndex;

/// Vertex from which mark propagation starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Seed {
    /// The lowest-index vertex that owns an edge cell. Resolves to no vertex at all when the
    /// graph has no edges.
    #[default]
    FirstWithEdges,
    /// A specific vertex, which must lie inside the graph.
    Vertex(VertexIndex),
}

impl From<VertexIndex> for Seed {
    fn from(vertex: VertexIndex) -> Self {
        Seed::Vertex(vertex)
    }
}

/// The set of vertices reached by one connectivity query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marks {
    bits: BitVec,
}

impl Marks {
    /// Creates a set of `order` unmarked vertices.
    pub fn new(order: usize) -> Self {
        Self {
            bits: bitvec![0; order],
        }
    }

    /// Whether a vertex is marked. Vertices outside the set are unmarked.
    #[inline]
    pub fn is_marked(&self, vertex: VertexIndex) -> bool {
        self.bits.get(vertex.index()).map_or(false, |bit| *bit)
    }

    /// Marks a vertex, returning whether it was unmarked before.
    ///
    /// # Panics
    ///
    /// Panics if the vertex lies outside the set.
    #[inline]
    pub fn mark(&mut self, vertex: VertexIndex) -> bool {
        !self.bits.replace(vertex.index(), true)
    }

    /// Iterates over the marked vertices in index order.
    pub fn marked(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        self.bits.iter_ones().map(VertexIndex::new)
    }

    /// Number of marked vertices.
    #[inline]
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Number of vertices covered by the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the set covers no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The marks as a bit slice indexed by vertex position.
    #[inline]
    pub fn as_bitslice(&self) -> &BitSlice {
        &self.bits
    }
}

impl Graph {
    /// Resolves a [`Seed`] to a vertex of this graph.
    ///
    /// Returns `Ok(None)` for [`Seed::FirstWithEdges`] when no vertex owns an edge cell.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] when an explicit seed lies outside the graph.
    pub fn resolve_seed(&self, seed: Seed) -> Result<Option<VertexIndex>, GraphError> {
        match seed {
            Seed::FirstWithEdges => Ok(self.first_with_edges()),
            Seed::Vertex(vertex) => {
                self.check_vertex(vertex)?;
                Ok(Some(vertex))
            }
        }
    }

    /// Propagates marks from a seed until a full sweep changes nothing.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] when an explicit seed lies outside the graph.
    ///
    /// # Example
    ///
    /// ```
    /// # use adjgraph::{Graph, Seed, VertexIndex};
    /// let mut graph = Graph::new(4);
    /// let v = VertexIndex::new;
    /// graph.add_edge(v(0), v(1)).unwrap();
    /// graph.add_edge(v(2), v(3)).unwrap();
    ///
    /// let marks = graph.propagate_marks(Seed::Vertex(v(3))).unwrap();
    /// assert!(marks.marked().eq([v(2), v(3)]));
    /// ```
    pub fn propagate_marks(&self, seed: Seed) -> Result<Marks, GraphError> {
        let seed = self.resolve_seed(seed)?;
        Ok(self.propagate_from(seed))
    }

    /// Whether every vertex with an incident edge is reachable from the first such vertex.
    ///
    /// Isolated vertices are ignored, so a graph without edges is connected.
    ///
    /// # Example
    ///
    /// ```
    /// # use adjgraph::{Graph, VertexIndex};
    /// let mut graph = Graph::new(5);
    /// let v = VertexIndex::new;
    /// graph.add_edge(v(1), v(2)).unwrap();
    /// graph.add_edge(v(3), v(2)).unwrap();
    /// assert!(graph.is_connected());
    ///
    /// graph.add_edge(v(0), v(4)).unwrap();
    /// assert!(!graph.is_connected());
    /// ```
    pub fn is_connected(&self) -> bool {
        let marks = self.propagate_from(self.first_with_edges());
        self.edges_covered_by(&marks)
    }

    /// Whether every vertex with an incident edge is reachable from `seed`.
    ///
    /// When an explicit seed is isolated only the seed itself is marked, so the graph is
    /// connected exactly when it has no edges at all.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] when an explicit seed lies outside the graph.
    pub fn is_connected_from(&self, seed: impl Into<Seed>) -> Result<bool, GraphError> {
        let marks = self.propagate_marks(seed.into())?;
        Ok(self.edges_covered_by(&marks))
    }

    /// Whether every vertex, isolated or not, is reachable from vertex `0`.
    ///
    /// Unlike [`Graph::is_connected`] an isolated vertex makes a graph of order two or more
    /// disconnected. A graph without vertices is connected.
    pub fn is_connected_strict(&self) -> bool {
        let seed = self.vertices().next().map(|vertex| vertex.index());
        self.propagate_from(seed).count() == self.order()
    }

    /// Whether every vertex that owns an edge cell is marked.
    pub fn edges_covered_by(&self, marks: &Marks) -> bool {
        self.vertices()
            .all(|vertex| !vertex.has_edges() || marks.is_marked(vertex.index()))
    }

    fn first_with_edges(&self) -> Option<VertexIndex> {
        self.vertices()
            .find(|vertex| vertex.has_edges())
            .map(|vertex| vertex.index())
    }

    #[instrument(level = "debug", skip(self), fields(order = self.order()))]
    fn propagate_from(&self, seed: Option<VertexIndex>) -> Marks {
        let mut marks = Marks::new(self.order());
        let Some(seed) = seed else {
            return marks;
        };
        marks.mark(seed);

        let mut sweeps = 0usize;
        loop {
            sweeps += 1;
            let mut newly_marked = 0usize;

            for vertex in self.vertices() {
                for other in vertex.neighbours() {
                    match (marks.is_marked(vertex.index()), marks.is_marked(other)) {
                        (true, false) => {
                            marks.mark(other);
                            newly_marked += 1;
                        }
                        (false, true) => {
                            marks.mark(vertex.index());
                            newly_marked += 1;
                        }
                        _ => {}
                    }
                }
            }

            trace!(sweep = sweeps, newly_marked, "propagation sweep");
            if newly_marked == 0 {
                break;
            }
        }

        debug!(sweeps, marked = marks.count(), "mark propagation settled");
        marks
    }
}
