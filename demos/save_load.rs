//! Save and restore a QuadTree through its layout
use pointquad::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = PartitionConfig::default().with_capacity(2);
    let mut tree = QuadTree::with_config(Envelope::new(0.0, 0.0, 100.0, 100.0), config)?;
    for (x, y) in [(10.0, 10.0), (20.0, 20.0), (30.0, 10.0), (80.0, 90.0)] {
        let _ = tree.insert(Coordinate::new(x, y))?;
    }

    let path = std::env::temp_dir().join("pointquad_tree.json");
    std::fs::write(&path, serde_json::to_string(&tree.to_layout())?)?;
    println!("Saved {} leaves to {}", tree.leaf_count(), path.display());

    let layout: NodeLayout<VecPartition<Coordinate>> =
        serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    let loaded = QuadTree::from_layout(layout, config.factory())?;
    println!("Loaded {} leaves", loaded.leaf_count());

    let query = Envelope::new(0.0, 0.0, 25.0, 25.0);
    let original = tree.query(&query).count();
    let restored = loaded.query(&query).count();
    assert_eq!(original, restored, "Query results must match");
    println!("✓ {restored} points in {query} before and after");
    Ok(())
}
