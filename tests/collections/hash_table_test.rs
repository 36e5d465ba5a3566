/*!
 * Hash Table Tests
 */

use bytemuck::{Pod, Zeroable};
use pretty_assertions::assert_eq;
use rt_collections::{djb2, Collection, CollectionError, HashTable, InsertOutcome};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn test_djb2_known_values() {
    assert_eq!(djb2(""), 5381);
    assert_eq!(djb2("a"), 5381 * 33 + 97);
    assert_eq!(djb2("ab"), (5381 * 33 + 97) * 33 + 98);
}

#[test]
fn test_insert_get_replace() {
    let mut table = HashTable::new(8).unwrap();
    assert_eq!(table.insert("alpha", b"one").unwrap(), InsertOutcome::Inserted);
    assert_eq!(table.insert("alpha", b"uno!").unwrap(), InsertOutcome::Replaced);
    assert_eq!(table.len(), 1);

    let mut out = [0u8; 16];
    let written = table.get("alpha", &mut out).unwrap();
    assert_eq!(&out[..written], b"uno!");
    assert_eq!(table.value_size("alpha"), Some(4));
}

#[test]
fn test_get_reports_small_output_buffer() {
    let mut table = HashTable::new(4).unwrap();
    table.insert("key", b"longer value").unwrap();

    let mut out = [0u8; 4];
    assert_eq!(
        table.get("key", &mut out),
        Err(CollectionError::BufferTooSmall {
            required: 12,
            provided: 4
        })
    );
}

#[test]
fn test_remove_from_shared_bucket() {
    // A single bucket forces every key into one chain
    let mut table = HashTable::new(1).unwrap();
    for key in ["a", "b", "c", "d"] {
        table.insert(key, key.as_bytes()).unwrap();
    }
    assert_eq!(table.bucket_len(0), Some(4));

    table.remove("b").unwrap();
    table.remove("d").unwrap();
    assert_eq!(
        table.remove("b"),
        Err(CollectionError::KeyNotFound("b".into()))
    );

    assert!(!table.contains("b"));
    let mut out = [0u8; 4];
    assert_eq!(
        table.get("b", &mut out),
        Err(CollectionError::KeyNotFound("b".into()))
    );
    assert_eq!(table.get_ref("d"), None);

    assert!(table.contains("a"));
    assert!(table.contains("c"));
    assert_eq!(table.len(), 2);
    assert_eq!(table.bucket_len(0), Some(2));
}

#[test]
fn test_invalid_arguments() {
    let mut table = HashTable::new(4).unwrap();
    assert!(matches!(
        table.insert("empty", b""),
        Err(CollectionError::InvalidArgument(_))
    ));
    assert!(matches!(
        table.insert("nul\0key", b"x"),
        Err(CollectionError::InvalidArgument(_))
    ));
    assert!(table.is_empty());
}

#[test]
fn test_pod_values() {
    let mut table = HashTable::new(16).unwrap();
    table.insert_value("origin", &Point { x: 0, y: 0 }).unwrap();
    table.insert_value("target", &Point { x: -3, y: 7 }).unwrap();

    assert_eq!(table.get_value::<Point>("target").unwrap(), Point { x: -3, y: 7 });
    assert!(matches!(
        table.get_value::<u32>("origin"),
        Err(CollectionError::InvalidArgument(_))
    ));
}

#[test]
fn test_rehash_keeps_every_entry() {
    let mut table = HashTable::new(2).unwrap();
    for i in 0..20 {
        table.insert(&format!("key-{i}"), &[i as u8]).unwrap();
    }
    assert!(table.needs_rehash());

    table.rehash(64).unwrap();
    assert_eq!(table.bucket_count(), 64);
    assert_eq!(table.len(), 20);
    assert!(!table.needs_rehash());
    for i in 0..20 {
        assert_eq!(table.get_ref(&format!("key-{i}")), Some(&[i as u8][..]));
    }
}

#[test]
fn test_stats_and_iter() {
    let mut table = HashTable::new(4).unwrap();
    table.insert("x", b"1").unwrap();
    table.insert("y", b"2").unwrap();

    let stats = table.stats();
    assert_eq!(stats.size, 2);
    assert_eq!(stats.bucket_count, 4);
    assert_eq!(stats.load_factor, 0.5);

    let mut keys: Vec<&str> = table.iter().map(|(key, _)| key).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["x", "y"]);

    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.iter().count(), 0);
}
