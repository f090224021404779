//! Builds the order-seven reference graph, reports whether it is connected and whether it is a
//! tree, and prints its adjacency lists with the marks of the connectivity query.
//!
//! Set `RUST_LOG=adjgraph=trace` to follow the propagation sweeps.
use adjgraph::{Graph, GraphError, Seed, VertexIndex};
use tracing_subscriber::EnvFilter;

const ORDER: usize = 7;
const EDGES: [(usize, usize); 7] = [(0, 0), (3, 4), (4, 3), (4, 2), (5, 4), (2, 3), (3, 0)];
const SEED: usize = 5;

fn main() -> Result<(), GraphError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut graph = Graph::try_new(ORDER)?;
    for (a, b) in EDGES {
        graph.add_edge(VertexIndex::new(a), VertexIndex::new(b))?;
    }

    let marks = graph.propagate_marks(Seed::Vertex(VertexIndex::new(SEED)))?;

    let verdict = match (graph.edges_covered_by(&marks), graph.is_tree()) {
        (true, true) => "The graph is connected and a tree.",
        (true, false) => "The graph is connected but not a tree.",
        (false, _) => "The graph is not connected.",
    };

    println!("{verdict}");
    println!();
    print!("{}", graph.display_marked(&marks));

    Ok(())
}
