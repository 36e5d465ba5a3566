/*!
 * rt-collections
 * Owned container primitives: arrays, lists, ring and byte buffers, hash table
 */

pub mod collections;
pub mod core;
pub mod monitoring;

// Re-exports
pub use crate::collections::{
    djb2, BoundedCollection, ByteBuffer, Collection, CollectionError, CollectionResult, Deque,
    DynamicArray, End, FixedArray, HashTable, InsertOutcome, LinkedList, NodeId, RingBuffer,
    Stack,
};
pub use crate::core::{CollectionConfig, Result, RuntimeError};
pub use crate::monitoring::init_tracing;
