//! Human-readable adjacency listing.
use std::fmt;

use crate::connectivity::Marks;
use crate::graph::Graph;

/// Adjacency listing of a graph, created by [`Graph::display`] and [`Graph::display_marked`].
///
/// The listing starts with the order, followed by one line per vertex with its index, its mark
/// and its neighbours, most recently added first:
///
/// ```text
/// Order: 3
/// Adjacency list:
///     V0 (mark: 1):  2  1
///     V1 (mark: 1):  0
///     V2 (mark: 1):  0
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GraphDisplay<'a> {
    graph: &'a Graph,
    marks: Option<&'a Marks>,
}

impl Graph {
    /// Lists the graph with every vertex unmarked.
    ///
    /// # Example
    ///
    /// ```
    /// # use adjgraph::{Graph, VertexIndex};
    /// let mut graph = Graph::new(2);
    /// graph.add_edge(VertexIndex::new(0), VertexIndex::new(1)).unwrap();
    ///
    /// assert_eq!(
    ///     graph.display().to_string(),
    ///     "Order: 2\nAdjacency list:\n    V0 (mark: 0):  1\n    V1 (mark: 0):  0\n",
    /// );
    /// ```
    pub fn display(&self) -> GraphDisplay<'_> {
        GraphDisplay {
            graph: self,
            marks: None,
        }
    }

    /// Lists the graph with the marks left by a connectivity query.
    pub fn display_marked<'a>(&'a self, marks: &'a Marks) -> GraphDisplay<'a> {
        GraphDisplay {
            graph: self,
            marks: Some(marks),
        }
    }
}

impl fmt::Display for GraphDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order: {}", self.graph.order())?;
        writeln!(f, "Adjacency list:")?;

        for vertex in self.graph.vertices() {
            let marked = self
                .marks
                .map_or(false, |marks| marks.is_marked(vertex.index()));
            write!(f, "    V{} (mark: {}):", vertex.index(), u8::from(marked))?;

            for neighbour in vertex.neighbours() {
                write!(f, "{neighbour:>3}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(), f)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Seed, VertexIndex};

    #[test]
    fn lists_neighbours_most_recent_first() {
        let mut graph = Graph::new(3);
        let v = VertexIndex::new;
        graph.add_edge(v(0), v(1)).unwrap();
        graph.add_edge(v(0), v(2)).unwrap();

        let marks = graph.propagate_marks(Seed::Vertex(v(1))).unwrap();

        assert_eq!(
            graph.display_marked(&marks).to_string(),
            "Order: 3\n\
             Adjacency list:\n    \
             V0 (mark: 1):  2  1\n    \
             V1 (mark: 1):  0\n    \
             V2 (mark: 1):  0\n"
        );
    }

    #[test]
    fn isolated_vertices_have_empty_lines() {
        let mut graph = Graph::new(2);
        graph
            .add_edge(VertexIndex::new(1), VertexIndex::new(1))
            .unwrap();

        assert_eq!(
            graph.to_string(),
            "Order: 2\nAdjacency list:\n    V0 (mark: 0):\n    V1 (mark: 0):  1\n"
        );
    }

    #[test]
    fn wide_indices_fill_the_column() {
        let mut graph = Graph::new(120);
        graph
            .add_edge(VertexIndex::new(0), VertexIndex::new(119))
            .unwrap();

        let listing = graph.display().to_string();
        assert!(listing.contains("    V0 (mark: 0):119\n"));
        assert!(listing.contains("    V119 (mark: 0):  0\n"));
    }
}
