//! Query points inside a rectangle
use pointquad::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), QuadTreeError> {
    // RUST_LOG=pointquad=debug shows every split
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = PartitionConfig::default().with_capacity(4);
    let mut tree = QuadTree::with_config(Envelope::new(0.0, 0.0, 100.0, 100.0), config)
        .expect("valid config");

    for (x, y) in [(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0), (5.0, 5.0), (70.0, 80.0)] {
        let leaf = tree.insert(Coordinate::new(x, y))?;
        println!("({x}, {y}) -> leaf {}", leaf.index());
    }

    let query = Envelope::new(0.0, 0.0, 10.0, 10.0);
    let found: Vec<_> = tree.query(&query).collect();
    println!("Found {} points in {}: {:?}", found.len(), query, found);
    Ok(())
}
