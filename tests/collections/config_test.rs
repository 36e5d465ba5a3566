/*!
 * Configuration Tests
 * Containers built from CollectionConfig presets
 */

use pretty_assertions::assert_eq;
use rt_collections::{
    BoundedCollection, ByteBuffer, CollectionConfig, DynamicArray, HashTable, RingBuffer,
    RuntimeError,
};

#[test]
fn test_containers_follow_compact_preset() {
    let config = CollectionConfig::compact();

    let array = DynamicArray::<u32>::from_config(&config).unwrap();
    assert_eq!(array.capacity(), config.dynamic_array_initial_capacity);

    let ring = RingBuffer::<u32>::from_config(&config).unwrap();
    assert_eq!(ring.capacity(), config.ring_buffer_capacity);

    let table = HashTable::from_config(&config).unwrap();
    assert_eq!(table.bucket_count(), config.hash_table_buckets);
}

#[test]
fn test_byte_buffer_baseline_from_config() {
    let config = CollectionConfig::compact();
    let mut buffer = ByteBuffer::from_config(&config).unwrap();
    buffer.set(b"x").unwrap();
    assert_eq!(buffer.capacity(), config.byte_buffer_initial_capacity);
}

#[test]
fn test_invalid_config_surfaces_as_runtime_error() {
    let config = CollectionConfig {
        byte_buffer_initial_capacity: 0,
        ..CollectionConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(RuntimeError::Configuration(_))
    ));

    let err: RuntimeError = ByteBuffer::from_config(&config).unwrap_err().into();
    assert!(matches!(err, RuntimeError::Collection(_)));
}

#[test]
fn test_config_json_round_trip() {
    let config = CollectionConfig::large();
    let json = serde_json::to_string(&config).unwrap();
    let parsed: CollectionConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}
