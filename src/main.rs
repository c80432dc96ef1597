use anyhow::Context;
use neighborhood_view::{Edge, Graph, NeighborhoodView, Node, ViewConfig};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Neighborhood View v{}", neighborhood_view::version());
    println!("==========================================");

    // Optional YAML config as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => ViewConfig::from_file(&path)
            .with_context(|| format!("loading config from {}", path))?,
        None => ViewConfig::default(),
    };

    let graph = demo_graph()?;
    let view = NeighborhoodView::new(&graph, config);

    for min_weight in [0.3, 0.6] {
        println!("\n=== Seeds {{A}}, min_weight {} ===", min_weight);
        let query = view.default_query(["A"]).with_min_weight(min_weight);
        let result = view.query(&query);

        for node in &result.nodes {
            println!("  {} ({}) size {:.2}", node.id, node.category, node.size);
        }
        for edge in &result.visible_edges {
            println!("  {} -[{}]-> {} ({})", edge.source, edge.edge_type, edge.target, edge.weight);
        }
        for issue in &result.issues {
            println!("  note: {}", issue);
        }

        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}

fn demo_graph() -> anyhow::Result<Graph> {
    let graph = Graph::from_parts(
        vec![
            Node::new("A", "person").with_neighbor_count(4),
            Node::new("B", "vessel").with_neighbor_count(1),
            Node::new("C", "person").with_neighbor_count(0),
        ],
        vec![
            Edge::new("A", "B", "owns", 0.5),
            Edge::new("B", "C", "near", 0.9),
        ],
    )?;
    Ok(graph)
}
