use std::collections::TryReserveError;
use std::iter::{Copied, FusedIterator, Rev};
use std::ops::Index;
use std::slice;

use thiserror::Error;
use tracing::debug;

use crate::index::VertexIndex;

/// A vertex together with the edge cells it owns.
///
/// Every cell names the vertex at the other end of an incident edge. A self-loop is stored as a
/// single cell naming the vertex itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    index: VertexIndex,

    /// Edge cells in insertion order. Public views iterate this in reverse so that the most
    /// recently added cell comes first.
    cells: Vec<VertexIndex>,
}

impl Vertex {
    fn new(index: VertexIndex) -> Self {
        Self {
            index,
            cells: Vec::new(),
        }
    }

    /// The identifier of the vertex, equal to its position in the graph.
    #[inline]
    pub fn index(&self) -> VertexIndex {
        self.index
    }

    /// Iterates over the neighbours named by the vertex's edge cells, most recently added first.
    ///
    /// Parallel edges yield the same neighbour once per insertion.
    #[inline]
    pub fn neighbours(&self) -> Neighbours<'_> {
        Neighbours(self.cells.iter().copied().rev())
    }

    /// Number of edge cells owned by the vertex. A self-loop contributes a single cell.
    #[inline]
    pub fn degree(&self) -> usize {
        self.cells.len()
    }

    /// Whether the vertex owns at least one edge cell.
    #[inline]
    pub fn has_edges(&self) -> bool {
        !self.cells.is_empty()
    }

    /// The edge cells from oldest to newest.
    #[inline]
    pub(crate) fn cells(&self) -> &[VertexIndex] {
        &self.cells
    }

    /// Whether a cell refers back to this vertex.
    #[inline]
    pub(crate) fn is_loop(&self, cell: VertexIndex) -> bool {
        cell == self.index
    }
}

const NO_CELLS: &[VertexIndex] = &[];

/// An undirected graph of fixed order stored as adjacency lists.
///
/// The vertices `0..order` are created together with the graph and live as long as it does.
/// Edges can only be added. Inserting an edge between two distinct vertices stores one cell in
/// each endpoint's list, while a self-loop is stored as a single cell. Parallel edges are kept
/// as separate cells.
///
/// Dropping the graph releases every adjacency list together with the vertices.
///
/// # Example
///
/// ```
/// # use adjgraph::{Graph, VertexIndex};
/// let mut graph = Graph::new(3);
/// let (v0, v1, v2) = (VertexIndex::new(0), VertexIndex::new(1), VertexIndex::new(2));
///
/// graph.add_edge(v0, v1).unwrap();
/// graph.add_edge(v0, v2).unwrap();
///
/// assert!(graph.neighbours(v0).eq([v2, v1]));
/// assert!(graph.neighbours(v1).eq([v0]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: Vec<Vertex>,
}

impl Graph {
    /// Creates a graph with `order` vertices and no edges.
    ///
    /// # Panics
    ///
    /// Panics if `order` exceeds the number of vertices a [`VertexIndex`] can address. Use
    /// [`Graph::try_new`] to handle that case and allocation failure as errors.
    pub fn new(order: usize) -> Self {
        Self {
            vertices: (0..order)
                .map(|index| Vertex::new(VertexIndex::new(index)))
                .collect(),
        }
    }

    /// Creates a graph with `order` vertices and no edges.
    ///
    /// # Errors
    ///
    ///  - [`GraphError::OrderTooLarge`] when `order` exceeds the addressable vertices.
    ///  - [`GraphError::Allocation`] when the vertex storage can not be allocated.
    ///
    /// # Example
    ///
    /// ```
    /// # use adjgraph::Graph;
    /// let graph = Graph::try_new(4)?;
    /// assert_eq!(graph.order(), 4);
    /// assert!(graph.vertices().all(|vertex| !vertex.has_edges()));
    /// # Ok::<(), adjgraph::GraphError>(())
    /// ```
    pub fn try_new(order: usize) -> Result<Self, GraphError> {
        if order > 0 && VertexIndex::try_new(order - 1).is_none() {
            return Err(GraphError::OrderTooLarge { order });
        }

        let mut vertices = Vec::new();
        vertices.try_reserve_exact(order)?;
        vertices.extend((0..order).map(|index| Vertex::new(VertexIndex::new(index))));

        Ok(Self { vertices })
    }

    /// The number of vertices.
    #[inline]
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether `vertex` lies in `0..order`.
    #[inline]
    pub fn contains_vertex(&self, vertex: VertexIndex) -> bool {
        vertex.index() < self.order()
    }

    /// Borrows a vertex if it exists.
    #[inline]
    pub fn vertex(&self, vertex: VertexIndex) -> Option<&Vertex> {
        self.vertices.get(vertex.index())
    }

    /// Iterates over the vertices in index order.
    #[inline]
    pub fn vertices(&self) -> Vertices<'_> {
        Vertices(self.vertices.iter())
    }

    /// Iterates over the neighbours of a vertex, most recently added first.
    ///
    /// When the vertex does not exist, the iterator is empty.
    pub fn neighbours(&self, vertex: VertexIndex) -> Neighbours<'_> {
        match self.vertex(vertex) {
            Some(vertex_data) => vertex_data.neighbours(),
            None => Neighbours(NO_CELLS.iter().copied().rev()),
        }
    }

    /// Number of edge cells owned by a vertex, or zero if it does not exist.
    pub fn degree(&self, vertex: VertexIndex) -> usize {
        self.vertex(vertex).map_or(0, Vertex::degree)
    }

    /// Adds an undirected edge between `a` and `b`.
    ///
    /// A cell naming `b` is prepended to `a`'s list and, unless the edge is a self-loop, a cell
    /// naming `a` is prepended to `b`'s list. Adding the same pair again stores another pair of
    /// cells.
    ///
    /// # Errors
    ///
    ///  - [`GraphError::InvalidVertex`] when either endpoint is outside `0..order`.
    ///  - [`GraphError::Allocation`] when a list can not grow.
    ///
    /// In the case of an error, the graph is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// # use adjgraph::{Graph, GraphError, VertexIndex};
    /// let mut graph = Graph::new(2);
    /// let v0 = VertexIndex::new(0);
    ///
    /// graph.add_edge(v0, v0).unwrap();
    /// assert_eq!(graph.degree(v0), 1);
    ///
    /// let result = graph.add_edge(v0, VertexIndex::new(2));
    /// assert!(matches!(result, Err(GraphError::InvalidVertex { .. })));
    /// assert_eq!(graph.degree(v0), 1);
    /// ```
    pub fn add_edge(&mut self, a: VertexIndex, b: VertexIndex) -> Result<(), GraphError> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;

        // A failed reservation must not leave a half-inserted edge behind.
        self.vertices[a.index()].cells.try_reserve(1)?;
        if a != b {
            self.vertices[b.index()].cells.try_reserve(1)?;
        }

        self.vertices[a.index()].cells.push(b);
        if a != b {
            self.vertices[b.index()].cells.push(a);
        }

        Ok(())
    }

    /// The size of the graph as half the number of edge cells plus the order.
    ///
    /// Self-loop cells are counted twice before halving, so a self-loop contributes one just like
    /// an edge between distinct vertices does. This is not an edge count: see
    /// [`Graph::edge_count`] for that.
    ///
    /// # Example
    ///
    /// ```
    /// # use adjgraph::{Graph, VertexIndex};
    /// let mut graph = Graph::new(3);
    /// graph.add_edge(VertexIndex::new(0), VertexIndex::new(1)).unwrap();
    /// graph.add_edge(VertexIndex::new(2), VertexIndex::new(2)).unwrap();
    /// assert_eq!(graph.size(), 2 + 3);
    /// ```
    pub fn size(&self) -> usize {
        let occurrences: usize = self
            .vertices
            .iter()
            .map(|vertex| {
                vertex
                    .cells
                    .iter()
                    .map(|&cell| if vertex.is_loop(cell) { 2 } else { 1 })
                    .sum::<usize>()
            })
            .sum();

        occurrences / 2 + self.order()
    }

    /// The number of successful edge insertions, counting parallel edges separately and each
    /// self-loop once.
    pub fn edge_count(&self) -> usize {
        let (loops, mirrored) = self
            .vertices
            .iter()
            .flat_map(|vertex| vertex.cells.iter().map(move |&cell| vertex.is_loop(cell)))
            .fold((0, 0), |(loops, mirrored), is_loop| {
                if is_loop {
                    (loops + 1, mirrored)
                } else {
                    (loops, mirrored + 1)
                }
            });

        loops + mirrored / 2
    }

    /// The number of vertices with at least one incident edge.
    pub fn vertices_with_edges(&self) -> usize {
        self.vertices.iter().filter(|vertex| vertex.has_edges()).count()
    }

    /// Checks that `vertex` lies in `0..order`.
    pub(crate) fn check_vertex(&self, vertex: VertexIndex) -> Result<(), GraphError> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            debug!(%vertex, order = self.order(), "rejected out-of-range vertex");
            Err(GraphError::InvalidVertex {
                vertex,
                order: self.order(),
            })
        }
    }
}

impl Index<VertexIndex> for Graph {
    type Output = Vertex;

    /// # Panics
    ///
    /// Panics if the vertex is outside `0..order`.
    fn index(&self, index: VertexIndex) -> &Self::Output {
        &self.vertices[index.index()]
    }
}

/// Error returned by [`Graph::try_new`], [`Graph::add_edge`] and the seeded connectivity queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph of order {order}")]
    InvalidVertex { vertex: VertexIndex, order: usize },
    #[error("order {order} exceeds the number of addressable vertices")]
    OrderTooLarge { order: usize },
    #[error("failed to allocate graph storage")]
    Allocation(#[from] TryReserveError),
}

/// Iterator created by [`Graph::neighbours`] and [`Vertex::neighbours`].
#[derive(Debug, Clone)]
pub struct Neighbours<'a>(Rev<Copied<slice::Iter<'a, VertexIndex>>>);

impl<'a> Iterator for Neighbours<'a> {
    type Item = VertexIndex;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Neighbours<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<'a> ExactSizeIterator for Neighbours<'a> {}
impl<'a> FusedIterator for Neighbours<'a> {}

/// Iterator created by [`Graph::vertices`].
#[derive(Debug, Clone)]
pub struct Vertices<'a>(slice::Iter<'a, Vertex>);

impl<'a> Iterator for Vertices<'a> {
    type Item = &'a Vertex;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Vertices<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<'a> ExactSizeIterator for Vertices<'a> {}
impl<'a> FusedIterator for Vertices<'a> {}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    fn v(index: usize) -> VertexIndex {
        VertexIndex::new(index)
    }

    fn graph_with_edges(order: usize, edges: &[(usize, usize)]) -> Graph {
        let mut graph = Graph::new(order);
        for &(a, b) in edges {
            graph.add_edge(v(a), v(b)).unwrap();
        }
        graph
    }

    #[test]
    fn new_graph_has_dense_indices_and_no_edges() {
        let graph = Graph::new(5);

        assert_eq!(graph.order(), 5);
        for (position, vertex) in graph.vertices().enumerate() {
            assert_eq!(vertex.index(), v(position));
            assert!(!vertex.has_edges());
            assert_eq!(vertex.neighbours().next(), None);
        }
    }

    #[test]
    fn try_new_matches_new() {
        assert_eq!(Graph::try_new(6).unwrap(), Graph::new(6));
        assert_eq!(Graph::try_new(0).unwrap(), Graph::default());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn try_new_rejects_unaddressable_order() {
        let order = u32::MAX as usize + 2;
        assert_eq!(
            Graph::try_new(order),
            Err(GraphError::OrderTooLarge { order })
        );
    }

    #[test]
    fn edge_is_mirrored_between_endpoints() {
        let graph = graph_with_edges(4, &[(1, 3)]);

        assert!(graph.neighbours(v(1)).eq([v(3)]));
        assert!(graph.neighbours(v(3)).eq([v(1)]));
        assert_eq!(graph.degree(v(0)), 0);
        assert_eq!(graph.degree(v(2)), 0);
    }

    #[test]
    fn self_loop_stores_a_single_cell() {
        let graph = graph_with_edges(2, &[(1, 1)]);

        assert!(graph.neighbours(v(1)).eq([v(1)]));
        assert_eq!(graph.degree(v(1)), 1);
        assert_eq!(graph.degree(v(0)), 0);
    }

    #[test]
    fn parallel_edges_are_not_deduplicated() {
        let graph = graph_with_edges(2, &[(1, 0), (0, 1)]);

        assert!(graph.neighbours(v(0)).eq([v(1), v(1)]));
        assert!(graph.neighbours(v(1)).eq([v(0), v(0)]));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn neighbours_are_most_recent_first() {
        let graph = graph_with_edges(5, &[(0, 1), (0, 2), (3, 0), (0, 4)]);

        assert!(graph.neighbours(v(0)).eq([v(4), v(3), v(2), v(1)]));
        assert!(graph.neighbours(v(0)).rev().eq([v(1), v(2), v(3), v(4)]));
        assert_eq!(graph.neighbours(v(0)).len(), 4);
    }

    #[rstest]
    #[case(7, 0)]
    #[case(0, 7)]
    #[case(7, 7)]
    #[case(100, 3)]
    fn out_of_range_edge_is_rejected_without_mutation(#[case] a: usize, #[case] b: usize) {
        let mut graph = graph_with_edges(7, &[(3, 4), (0, 0)]);
        let before = graph.clone();

        let result = graph.add_edge(v(a), v(b));

        assert!(matches!(result, Err(GraphError::InvalidVertex { order: 7, .. })));
        assert_eq!(graph, before);
    }

    #[test]
    fn invalid_vertex_reports_offending_endpoint() {
        let mut graph = Graph::new(3);
        let error = graph.add_edge(v(1), v(9)).unwrap_err();

        assert_eq!(
            error,
            GraphError::InvalidVertex {
                vertex: v(9),
                order: 3
            }
        );
        assert_eq!(
            error.to_string(),
            "vertex 9 is out of range for a graph of order 3"
        );
    }

    #[test]
    fn missing_vertex_has_no_neighbours() {
        let graph = graph_with_edges(2, &[(0, 1)]);

        assert!(graph.vertex(v(2)).is_none());
        assert_eq!(graph.neighbours(v(2)).next(), None);
        assert_eq!(graph.degree(v(2)), 0);
    }

    #[rstest]
    #[case::empty(0, &[], 0)]
    #[case::no_edges(4, &[], 4)]
    #[case::single_edge(3, &[(0, 1)], 4)]
    #[case::self_loop(3, &[(2, 2)], 4)]
    #[case::parallel(2, &[(0, 1), (1, 0)], 4)]
    #[case::loop_and_edge(3, &[(0, 0), (0, 1)], 5)]
    fn size_is_half_the_cells_plus_order(
        #[case] order: usize,
        #[case] edges: &[(usize, usize)],
        #[case] expected: usize,
    ) {
        assert_eq!(graph_with_edges(order, edges).size(), expected);
    }

    #[rstest]
    #[case(&[], 0)]
    #[case(&[(0, 0)], 1)]
    #[case(&[(0, 1), (1, 2)], 2)]
    #[case(&[(0, 0), (1, 1), (1, 2), (2, 1)], 4)]
    fn edge_count_counts_insertions(#[case] edges: &[(usize, usize)], #[case] expected: usize) {
        assert_eq!(graph_with_edges(3, edges).edge_count(), expected);
    }

    #[test]
    fn vertices_with_edges_ignores_isolated_vertices() {
        let graph = graph_with_edges(6, &[(0, 1), (4, 4)]);
        assert_eq!(graph.vertices_with_edges(), 3);
    }

    #[test]
    fn index_returns_vertex_record() {
        let graph = graph_with_edges(3, &[(2, 0)]);
        assert_eq!(graph[v(2)].index(), v(2));
        assert!(graph[v(2)].neighbours().eq([v(0)]));
    }
}
