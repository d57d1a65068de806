//! Walk all leaves through the leaf list
use pointquad::prelude::*;

fn main() {
    let config = PartitionConfig::default().with_capacity(2);
    let mut tree = QuadTree::with_config(Envelope::new(0.0, 0.0, 16.0, 16.0), config)
        .expect("valid config");

    for i in 0..12 {
        let v = f64::from(i);
        let _ = tree.insert(Coordinate::new(v, 15.0 - v)).expect("point fits");
    }

    println!("{} leaves, depth {}", tree.leaf_count(), tree.depth());
    for leaf in tree.stream_leaves() {
        println!("{} holds {} value(s)", leaf.bounds(), leaf.value_count());
    }
}
