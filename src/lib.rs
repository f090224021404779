//! Undirected graphs of fixed order stored as adjacency lists.
//!
//! A [`Graph`] is created with all of its vertices and grows only by adding edges. Every vertex
//! owns the cells of its incident edges: an edge between two distinct vertices is stored as a
//! cell in each endpoint's list and a self-loop as a single cell.
//!
//! On top of the lists the graph answers two structural questions. [`Graph::is_connected`]
//! propagates marks from a seed vertex until nothing changes and [`Graph::is_tree`] applies a
//! counting rule to vertices and edge cells. Both have exact counterparts,
//! [`Graph::is_connected_strict`] and [`Graph::is_tree_strict`].
//!
//! # Example
//!
//! ```
//! use adjgraph::{Graph, VertexIndex};
//!
//! let mut graph = Graph::new(4);
//! let v = VertexIndex::new;
//! graph.add_edge(v(0), v(1))?;
//! graph.add_edge(v(1), v(2))?;
//! graph.add_edge(v(1), v(3))?;
//!
//! assert!(graph.is_connected());
//! assert!(graph.is_tree());
//! assert!(graph.is_tree_strict());
//! assert_eq!(graph.size(), 3 + 4);
//! # Ok::<(), adjgraph::GraphError>(())
//! ```
pub mod connectivity;
pub mod display;
pub mod graph;
pub mod index;
pub mod tree;

pub use connectivity::{Marks, Seed};
pub use display::GraphDisplay;
pub use graph::{Graph, GraphError, Neighbours, Vertex, Vertices};
pub use index::{EntityIndex, VertexIndex};
