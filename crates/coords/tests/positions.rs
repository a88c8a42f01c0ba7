//! Contract tests for the position values: structural equality, the
//! canonical wire encoding, grid arithmetic, and the chunk/block
//! sub-addressing math.

use std::hash::{DefaultHasher, Hash, Hasher};

use serde_json::json;

use chunkspace_coords::{BlockPosition, ChunkPosition, Direction, PositionError};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// ---------------------------------------------------------------------------
// Equality and hashing
// ---------------------------------------------------------------------------

#[test]
fn equality_is_structural() {
    assert_eq!(
        ChunkPosition::new(3, -7, "overworld"),
        ChunkPosition::new(3, -7, "overworld")
    );
    assert_ne!(
        ChunkPosition::new(3, -7, "overworld"),
        ChunkPosition::new(3, -7, "nether")
    );
    assert_ne!(
        ChunkPosition::new(3, -7, "overworld"),
        ChunkPosition::new(3, 7, "overworld")
    );
}

#[test]
fn detached_positions_compare_equal_to_each_other() {
    assert_eq!(
        ChunkPosition::without_world(4, 5),
        ChunkPosition::without_world(4, 5)
    );
    assert_ne!(
        ChunkPosition::without_world(4, 5),
        ChunkPosition::new(4, 5, "overworld")
    );
}

#[test]
fn equal_values_hash_identically() {
    let pairs = [
        (
            ChunkPosition::new(0, 0, "overworld"),
            ChunkPosition::new(0, 0, "overworld"),
        ),
        (
            ChunkPosition::new(i32::MIN, i32::MAX, "nether"),
            ChunkPosition::new(i32::MIN, i32::MAX, "nether"),
        ),
        (
            ChunkPosition::without_world(-1, 1),
            ChunkPosition::without_world(-1, 1),
        ),
    ];
    for (a, b) in pairs {
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b), "{a} and {b} must hash alike");
    }
}

#[test]
fn ordering_is_lexicographic_world_then_coords() {
    let mut positions = vec![
        ChunkPosition::new(0, 1, "overworld"),
        ChunkPosition::new(0, 0, "nether"),
        ChunkPosition::without_world(9, 9),
        ChunkPosition::new(0, 0, "overworld"),
        ChunkPosition::new(-1, 0, "overworld"),
    ];
    positions.sort();
    assert_eq!(
        positions,
        vec![
            ChunkPosition::without_world(9, 9),
            ChunkPosition::new(0, 0, "nether"),
            ChunkPosition::new(-1, 0, "overworld"),
            ChunkPosition::new(0, 0, "overworld"),
            ChunkPosition::new(0, 1, "overworld"),
        ]
    );
}

// ---------------------------------------------------------------------------
// Wire encoding
// ---------------------------------------------------------------------------

#[test]
fn json_round_trip() {
    let cases = [
        ChunkPosition::new(0, 0, "overworld"),
        ChunkPosition::new(-41, 982, "nether"),
        ChunkPosition::new(i32::MIN, i32::MAX, "end"),
        ChunkPosition::without_world(12, -3),
    ];
    for position in cases {
        let decoded = ChunkPosition::from_json(&position.to_json()).unwrap();
        assert_eq!(decoded, position);
    }
}

#[test]
fn encoder_emits_canonical_field_order() {
    let position = ChunkPosition::new(1, 2, "overworld");
    assert_eq!(
        position.to_json().to_string(),
        r#"{"x":1,"z":2,"world":"overworld"}"#
    );
    // The serde derive must agree with the Value-level codec byte for byte.
    assert_eq!(
        serde_json::to_string(&position).unwrap(),
        r#"{"x":1,"z":2,"world":"overworld"}"#
    );
}

#[test]
fn detached_position_encodes_world_as_null() {
    let position = ChunkPosition::without_world(1, 2);
    assert_eq!(
        position.to_json().to_string(),
        r#"{"x":1,"z":2,"world":null}"#
    );
}

#[test]
fn decode_rejects_missing_fields() {
    for node in [
        json!({ "x": 1, "z": 2 }),
        json!({ "x": 1, "world": "overworld" }),
        json!({ "z": 2, "world": "overworld" }),
        json!({}),
    ] {
        let err = ChunkPosition::from_json(&node).unwrap_err();
        assert!(matches!(err, PositionError::Malformed(_)), "got {err}");
    }
}

#[test]
fn decode_rejects_non_objects_and_mistyped_fields() {
    for node in [
        json!(17),
        json!("overworld"),
        json!([1, 2, "overworld"]),
        json!(null),
        json!({ "x": "one", "z": 2, "world": "overworld" }),
        json!({ "x": 1, "z": 2, "world": 3 }),
    ] {
        assert!(
            matches!(
                ChunkPosition::from_json(&node),
                Err(PositionError::Malformed(_))
            ),
            "accepted {node}"
        );
    }
}

#[test]
fn decode_rejects_coordinate_sequences() {
    // An array happens to carry fields in declaration order; it is still
    // not an object and must not decode.
    assert!(matches!(
        ChunkPosition::from_json(&json!([1, 2, "overworld"])),
        Err(PositionError::Malformed(_))
    ));
    assert!(matches!(
        BlockPosition::from_json(&json!([1, 2, 3, "overworld"])),
        Err(PositionError::Malformed(_))
    ));
}

#[test]
fn decode_ignores_unknown_fields() {
    let node = json!({ "x": 5, "z": 6, "world": "overworld", "dimension_id": 0 });
    let decoded = ChunkPosition::from_json(&node).unwrap();
    assert_eq!(decoded, ChunkPosition::new(5, 6, "overworld"));
}

#[test]
fn decode_accepts_null_world() {
    let node = json!({ "x": 5, "z": 6, "world": null });
    let decoded = ChunkPosition::from_json(&node).unwrap();
    assert_eq!(decoded, ChunkPosition::without_world(5, 6));
}

// ---------------------------------------------------------------------------
// Grid arithmetic
// ---------------------------------------------------------------------------

#[test]
fn unit_relative_steps() {
    let origin = ChunkPosition::new(0, 0, "w");
    assert_eq!(
        origin.relative(Direction::East).unwrap(),
        ChunkPosition::new(1, 0, "w")
    );
    assert_eq!(
        origin.relative(Direction::North).unwrap(),
        ChunkPosition::new(0, -1, "w")
    );
    assert_eq!(
        origin.relative(Direction::SouthWest).unwrap(),
        ChunkPosition::new(-1, 1, "w")
    );
}

#[test]
fn scaled_relative_equals_repeated_unit_steps() {
    let origin = ChunkPosition::new(4, -2, "w");
    let mut stepped = origin.clone();
    for _ in 0..3 {
        stepped = stepped.relative(Direction::North).unwrap();
    }
    assert_eq!(origin.relative_by(Direction::North, 3).unwrap(), stepped);
}

#[test]
fn zero_and_negative_distances() {
    let origin = ChunkPosition::new(4, -2, "w");
    assert_eq!(origin.relative_by(Direction::East, 0).unwrap(), origin);
    assert_eq!(
        origin.relative_by(Direction::East, -2).unwrap(),
        ChunkPosition::new(2, -2, "w")
    );
}

#[test]
fn relative_preserves_world() {
    let moved = ChunkPosition::new(0, 0, "nether")
        .relative(Direction::SouthEast)
        .unwrap();
    assert_eq!(moved.world(), Some("nether"));

    let detached = ChunkPosition::without_world(0, 0)
        .relative(Direction::West)
        .unwrap();
    assert_eq!(detached.world(), None);
}

#[test]
fn vertical_directions_are_rejected() {
    let origin = ChunkPosition::new(7, 7, "w");
    for direction in [Direction::Up, Direction::Down] {
        assert!(matches!(
            origin.relative(direction),
            Err(PositionError::VerticalOffset(d)) if d == direction
        ));
        assert!(matches!(
            origin.relative_by(direction, 5),
            Err(PositionError::VerticalOffset(d)) if d == direction
        ));
    }
}

#[test]
fn add_and_subtract_are_inverses() {
    let cases = [
        (0, 0, 1, 1),
        (5, -3, -10, 42),
        (i32::MAX, i32::MIN, 1, -1),
        (i32::MIN, i32::MAX, i32::MIN, i32::MAX),
    ];
    for (x, z, dx, dz) in cases {
        let origin = ChunkPosition::new(x, z, "w");
        assert_eq!(origin.add(dx, dz).subtract(dx, dz), origin);
        assert_eq!(origin.subtract(dx, dz).add(dx, dz), origin);
    }
}

#[test]
fn arithmetic_wraps_at_the_extremes() {
    let edge = ChunkPosition::new(i32::MAX, 0, "w");
    assert_eq!(edge.add(1, 0).x(), i32::MIN);
    assert_eq!(ChunkPosition::new(i32::MIN, 0, "w").subtract(1, 0).x(), i32::MAX);
}

// ---------------------------------------------------------------------------
// Block sub-addressing
// ---------------------------------------------------------------------------

#[test]
fn block_uses_only_low_four_bits_of_locals() {
    let chunk = ChunkPosition::new(1, 2, "w");
    // 17 & 0xF == 1 and -1 & 0xF == 15, so both spellings name one block.
    assert_eq!(chunk.block(17, 64, -1), chunk.block(1, 64, 15));
    let block = chunk.block(17, 64, -1);
    assert_eq!((block.x(), block.y(), block.z()), (17, 64, 47));
}

#[test]
fn block_preserves_world_and_y() {
    let block = ChunkPosition::new(-3, 9, "nether").block(0, -60, 8);
    assert_eq!(block.world(), Some("nether"));
    assert_eq!(block.y(), -60);

    let detached = ChunkPosition::without_world(0, 0).block(1, 0, 1);
    assert_eq!(detached.world(), None);
}

#[test]
fn chunk_inverts_block_for_any_local() {
    let chunk = ChunkPosition::new(-3, 9, "nether");
    for (local_x, local_z) in [(0, 0), (15, 15), (31, -1), (-16, 7)] {
        let block = chunk.block(local_x, 12, local_z);
        assert_eq!(block.chunk(), chunk);
        assert_eq!(block.local_x(), local_x & 0xF);
        assert_eq!(block.local_z(), local_z & 0xF);
    }
}

#[test]
fn negative_block_coordinates_map_to_negative_chunks() {
    let block = BlockPosition::new(-1, 70, -16, "w");
    assert_eq!(block.chunk(), ChunkPosition::new(-1, -1, "w"));
    assert_eq!(block.local_x(), 15);
    assert_eq!(block.local_z(), 0);
}

// ---------------------------------------------------------------------------
// Block positions
// ---------------------------------------------------------------------------

#[test]
fn block_round_trip_and_canonical_order() {
    let block = BlockPosition::new(17, 64, 47, "overworld");
    assert_eq!(BlockPosition::from_json(&block.to_json()).unwrap(), block);
    assert_eq!(
        block.to_json().to_string(),
        r#"{"x":17,"y":64,"z":47,"world":"overworld"}"#
    );
}

#[test]
fn block_decode_rejects_missing_fields() {
    let node = json!({ "x": 1, "y": 2, "z": 3 });
    assert!(matches!(
        BlockPosition::from_json(&node),
        Err(PositionError::Malformed(_))
    ));
}

#[test]
fn blocks_move_on_all_three_axes() {
    let origin = BlockPosition::new(0, 64, 0, "w");
    assert_eq!(origin.relative(Direction::Up), BlockPosition::new(0, 65, 0, "w"));
    assert_eq!(
        origin.relative_by(Direction::Down, 4),
        BlockPosition::new(0, 60, 0, "w")
    );
    assert_eq!(
        origin.relative(Direction::NorthEast),
        BlockPosition::new(1, 64, -1, "w")
    );
}

#[test]
fn block_add_subtract_inverse() {
    let origin = BlockPosition::new(i32::MAX, -40, 3, "w");
    assert_eq!(origin.add(5, 100, -9).subtract(5, 100, -9), origin);
}

// ---------------------------------------------------------------------------
// Directions and diagnostics
// ---------------------------------------------------------------------------

#[test]
fn horizontal_table_covers_exactly_the_planar_members() {
    assert_eq!(Direction::HORIZONTAL.len(), 8);
    for direction in Direction::HORIZONTAL {
        assert!(direction.is_horizontal());
        assert_eq!(direction.delta_y(), 0);
        assert!(
            direction.delta_x() != 0 || direction.delta_z() != 0,
            "{direction} must move on the plane"
        );
    }
    assert!(!Direction::Up.is_horizontal());
    assert!(!Direction::Down.is_horizontal());
}

#[test]
fn opposite_negates_every_delta() {
    let all = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::Up,
        Direction::Down,
    ];
    for direction in all {
        let opposite = direction.opposite();
        assert_eq!(direction.delta_x(), -opposite.delta_x());
        assert_eq!(direction.delta_y(), -opposite.delta_y());
        assert_eq!(direction.delta_z(), -opposite.delta_z());
        assert_eq!(opposite.opposite(), direction);
    }
}

#[test]
fn display_forms() {
    assert_eq!(
        ChunkPosition::new(3, -7, "overworld").to_string(),
        "ChunkPosition(x=3, z=-7, world=overworld)"
    );
    assert_eq!(
        ChunkPosition::without_world(3, -7).to_string(),
        "ChunkPosition(x=3, z=-7, world=null)"
    );
    assert_eq!(
        BlockPosition::new(1, 2, 3, "w").to_string(),
        "BlockPosition(x=1, y=2, z=3, world=w)"
    );
    assert_eq!(Direction::NorthEast.to_string(), "north-east");
}
