//! Tree checks.
//!
//! [`Graph::is_tree`] is a counting heuristic over the adjacency lists and does not inspect the
//! structure of the graph. [`Graph::is_tree_strict`] is the textbook definition.
use crate::graph::{Graph, Vertex};

impl Graph {
    /// Heuristic tree check comparing vertices with edges against edge cells.
    ///
    /// Counts the vertices that own an edge cell and the edge cells themselves, where a self-loop
    /// cell counts twice unless it is the last cell reached when walking the list from the most
    /// recent insertion. Returns whether
    /// `vertices_with_edges > edge_cells / 2 - 1`, with truncating division.
    ///
    /// Neither acyclicity nor connectivity is verified: two disjoint edges pass, and so does a
    /// graph without edges. Combine with [`Graph::is_connected`] or use
    /// [`Graph::is_tree_strict`].
    ///
    /// # Example
    ///
    /// ```
    /// # use adjgraph::{Graph, VertexIndex};
    /// let mut graph = Graph::new(4);
    /// let v = VertexIndex::new;
    /// graph.add_edge(v(0), v(1)).unwrap();
    /// graph.add_edge(v(1), v(2)).unwrap();
    /// assert!(graph.is_tree());
    ///
    /// graph.add_edge(v(2), v(0)).unwrap();
    /// graph.add_edge(v(0), v(1)).unwrap();
    /// assert!(!graph.is_tree());
    /// ```
    pub fn is_tree(&self) -> bool {
        let cells: usize = self.vertices().map(tree_cell_count).sum();

        // `a > b / 2 - 1` rearranged so that it can not underflow for `b < 2`.
        self.vertices_with_edges() + 1 > cells / 2
    }

    /// Whether the graph is a tree: it has at least one vertex, every vertex is reachable from
    /// every other, and it has exactly `order - 1` edges.
    ///
    /// Self-loops and parallel edges count as edges, so any graph containing one is rejected.
    ///
    /// # Example
    ///
    /// ```
    /// # use adjgraph::{Graph, VertexIndex};
    /// let mut graph = Graph::new(3);
    /// let v = VertexIndex::new;
    /// graph.add_edge(v(0), v(1)).unwrap();
    /// assert!(!graph.is_tree_strict());
    ///
    /// graph.add_edge(v(2), v(1)).unwrap();
    /// assert!(graph.is_tree_strict());
    /// ```
    pub fn is_tree_strict(&self) -> bool {
        !self.is_empty() && self.edge_count() + 1 == self.order() && self.is_connected_strict()
    }
}

/// Number of edge cells of a vertex as weighed by [`Graph::is_tree`].
fn tree_cell_count(vertex: &Vertex) -> usize {
    // Cells are stored oldest first, so the last cell of the walk sits at position zero.
    vertex
        .cells()
        .iter()
        .enumerate()
        .map(|(position, &cell)| {
            if position > 0 && vertex.is_loop(cell) {
                2
            } else {
                1
            }
        })
        .sum()
}
