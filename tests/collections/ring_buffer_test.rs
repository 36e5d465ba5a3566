/*!
 * Ring Buffer Tests
 */

use pretty_assertions::assert_eq;
use rt_collections::{BoundedCollection, Collection, CollectionError, RingBuffer};

#[test]
fn test_fifo_with_wraparound() {
    let mut ring = RingBuffer::new(3).unwrap();
    ring.write(1).unwrap();
    ring.write(2).unwrap();
    assert_eq!(ring.read().unwrap(), 1);
    ring.write(3).unwrap();
    ring.write(4).unwrap();

    assert!(ring.is_full());
    assert_eq!(ring.write(5), Err(CollectionError::Full { capacity: 3 }));
    assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);

    assert_eq!(ring.read().unwrap(), 2);
    assert_eq!(ring.read().unwrap(), 3);
    assert_eq!(ring.read().unwrap(), 4);
    assert_eq!(ring.read(), Err(CollectionError::Empty));
}

#[test]
fn test_peek_does_not_consume() {
    let mut ring = RingBuffer::new(2).unwrap();
    ring.write(String::from("first")).unwrap();

    assert_eq!(ring.peek().unwrap(), "first");
    assert_eq!(ring.peek_ref().unwrap(), "first");
    assert_eq!(ring.len(), 1);
}

#[test]
fn test_zero_capacity_selects_default() {
    let ring = RingBuffer::<u8>::new(0).unwrap();
    assert_eq!(ring.capacity(), rt_collections::core::limits::RING_BUFFER_INIT_CAPACITY);
}

#[test]
fn test_default_capacity_counts_items_not_bytes() {
    let narrow = RingBuffer::<u8>::new(0).unwrap();
    let wide = RingBuffer::<[u64; 4]>::new(0).unwrap();
    assert_eq!(narrow.capacity(), wide.capacity());
}

#[test]
fn test_clear_resets_positions() {
    let mut ring = RingBuffer::new(4).unwrap();
    for i in 0..3 {
        ring.write(i).unwrap();
    }
    ring.clear();

    assert!(ring.is_empty());
    assert_eq!(ring.head(), ring.tail());
    assert_eq!(ring.remaining(), 4);
}
