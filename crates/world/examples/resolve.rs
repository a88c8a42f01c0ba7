//! Demo: decode a chunk position off the wire, resolve it against a live
//! universe, and route a few block edits through it.
//!
//! Run with: `cargo run -p chunkspace-world --example resolve`

use chunkspace_coords::{ChunkPosition, Direction};
use chunkspace_world::{BlockId, Universe};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".parse().unwrap()),
        )
        .init();

    let universe = Universe::new();
    universe.create_world("overworld");

    // A position as it would arrive off the wire.
    let payload = r#"{"x":3,"z":-2,"world":"overworld"}"#;
    let node: serde_json::Value = serde_json::from_str(payload).unwrap();
    let position = ChunkPosition::from_json(&node).unwrap();
    println!("decoded {position}");

    // Resolve it and its eastern neighbor into live chunks.
    let chunk = position.to_chunk(&universe).unwrap();
    let neighbor = position
        .relative(Direction::East)
        .unwrap()
        .to_chunk(&universe)
        .unwrap();
    println!("resolved {} and {}", chunk.position(), neighbor.position());

    // Sub-address a block, write through the universe, read it back.
    let stone = BlockId::new(1);
    let block = position.block(17, 64, -1); // masked to local (1, 15)
    assert!(universe.set_block(&block, stone));
    println!("placed block {:?} at {}", universe.block_at(&block), block);

    let world = universe.world("overworld").unwrap();
    println!(
        "universe now holds {} world(s), {} loaded chunk(s)",
        universe.world_count(),
        world.chunk_count()
    );
}
