/*!
 * Hash Table
 * Separate-chaining table mapping string keys to opaque byte values
 *
 * # Layout
 *
 * A fixed array of buckets, each owning a singly-linked chain of entries.
 * New keys are pushed at the chain front. The bucket count never changes on
 * its own: `needs_rehash` is advisory and `rehash` must be called
 * explicitly, so degenerate key sets can produce long chains.
 *
 * # Hashing
 *
 * djb2 (`hash * 33 + byte`, seeded with 5381) over the key bytes with
 * wrapping arithmetic; bucket index is `hash % bucket_count`.
 */

use crate::collections::traits::Collection;
use crate::collections::types::{
    CollectionError, CollectionResult, HashTableStats, InsertOutcome,
};
use crate::core::config::CollectionConfig;
use crate::core::limits::{
    DJB2_MULTIPLIER, DJB2_SEED, HASH_TABLE_INIT_BUCKETS, HASH_TABLE_LOAD_FACTOR_MAX,
};
use crate::monitoring::span_operation;
use bytemuck::Pod;
use tracing::{debug, warn};

/// djb2 string hash
///
/// Key bytes are added as unsigned values, so keys with non-ASCII bytes hash
/// differently from a C implementation built with signed `char`.
#[inline]
pub fn djb2(key: &str) -> usize {
    key.bytes().fold(DJB2_SEED, |hash, byte| {
        hash.wrapping_mul(DJB2_MULTIPLIER).wrapping_add(byte as usize)
    })
}

#[derive(Debug, Clone)]
struct Entry {
    key: String,
    value: Vec<u8>,
    next: Option<Box<Entry>>,
}

impl Entry {
    fn new(key: &str, value: &[u8]) -> CollectionResult<Self> {
        let mut owned_key = String::new();
        owned_key
            .try_reserve_exact(key.len())
            .map_err(|_| CollectionError::AllocationFailed {
                requested: key.len(),
            })?;
        owned_key.push_str(key);

        Ok(Self {
            key: owned_key,
            value: copy_value(value)?,
            next: None,
        })
    }

    /// Replace the value, reusing storage when it is large enough
    fn replace_value(&mut self, value: &[u8]) -> CollectionResult<()> {
        if value.len() <= self.value.capacity() {
            self.value.clear();
            self.value.extend_from_slice(value);
        } else {
            self.value = copy_value(value)?;
        }
        Ok(())
    }
}

fn copy_value(value: &[u8]) -> CollectionResult<Vec<u8>> {
    let mut owned = Vec::new();
    owned
        .try_reserve_exact(value.len())
        .map_err(|_| CollectionError::AllocationFailed {
            requested: value.len(),
        })?;
    owned.extend_from_slice(value);
    Ok(owned)
}

#[derive(Debug, Clone, Default)]
struct Bucket {
    head: Option<Box<Entry>>,
    count: usize,
}

impl Bucket {
    fn find(&self, key: &str) -> Option<&Entry> {
        let mut cursor = self.head.as_deref();
        while let Some(entry) = cursor {
            if entry.key == key {
                return Some(entry);
            }
            cursor = entry.next.as_deref();
        }
        None
    }

    fn find_mut(&mut self, key: &str) -> Option<&mut Entry> {
        let mut cursor = self.head.as_deref_mut();
        while let Some(entry) = cursor {
            if entry.key == key {
                return Some(entry);
            }
            cursor = entry.next.as_deref_mut();
        }
        None
    }

    fn push_front(&mut self, mut entry: Box<Entry>) {
        entry.next = self.head.take();
        self.head = Some(entry);
        self.count += 1;
    }

    fn unlink(&mut self, key: &str) -> Option<Box<Entry>> {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|entry| entry.key != key) {
            link = &mut link.as_mut()?.next;
        }

        let mut removed = link.take()?;
        *link = removed.next.take();
        self.count -= 1;
        Some(removed)
    }
}

fn allocate_buckets(bucket_count: usize) -> CollectionResult<Vec<Bucket>> {
    let mut buckets = Vec::new();
    buckets
        .try_reserve_exact(bucket_count)
        .map_err(|_| CollectionError::AllocationFailed {
            requested: bucket_count.saturating_mul(std::mem::size_of::<Bucket>()),
        })?;
    buckets.resize_with(bucket_count, Bucket::default);
    Ok(buckets)
}

fn validate_key(key: &str) -> CollectionResult<()> {
    if key.as_bytes().contains(&0) {
        return Err(CollectionError::InvalidArgument(
            "keys must not contain NUL bytes".into(),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct HashTable {
    buckets: Vec<Bucket>,
    size: usize,
}

impl HashTable {
    /// Create a table with `bucket_count` buckets (0 selects the default)
    pub fn new(bucket_count: usize) -> CollectionResult<Self> {
        let bucket_count = if bucket_count == 0 {
            HASH_TABLE_INIT_BUCKETS
        } else {
            bucket_count
        };

        Ok(Self {
            buckets: allocate_buckets(bucket_count)?,
            size: 0,
        })
    }

    pub fn from_config(config: &CollectionConfig) -> CollectionResult<Self> {
        Self::new(config.hash_table_buckets)
    }

    #[inline]
    fn bucket_index(&self, key: &str) -> usize {
        djb2(key) % self.buckets.len()
    }

    /// Insert or replace the value stored under `key`
    pub fn insert(&mut self, key: &str, value: &[u8]) -> CollectionResult<InsertOutcome> {
        validate_key(key)?;
        if value.is_empty() {
            return Err(CollectionError::InvalidArgument(
                "value must be non-empty".into(),
            ));
        }

        let bucket_index = self.bucket_index(key);
        let bucket = &mut self.buckets[bucket_index];

        if let Some(entry) = bucket.find_mut(key) {
            entry.replace_value(value)?;
            debug!(
                bucket_index,
                key,
                value_size = value.len(),
                "hash table entry replaced"
            );
            return Ok(InsertOutcome::Replaced);
        }

        let entry = Box::new(Entry::new(key, value)?);
        bucket.push_front(entry);
        self.size += 1;

        debug!(
            bucket_index,
            key,
            value_size = value.len(),
            "hash table entry inserted"
        );
        if self.needs_rehash() {
            warn!(
                load_factor = self.load_factor(),
                bucket_count = self.buckets.len(),
                "hash table load factor above threshold"
            );
        }

        Ok(InsertOutcome::Inserted)
    }

    /// Copy the value stored under `key` into `out`, returning its size
    pub fn get(&self, key: &str, out: &mut [u8]) -> CollectionResult<usize> {
        let value = self
            .get_ref(key)
            .ok_or_else(|| CollectionError::KeyNotFound(key.to_string()))?;

        if out.len() < value.len() {
            return Err(CollectionError::BufferTooSmall {
                required: value.len(),
                provided: out.len(),
            });
        }

        out[..value.len()].copy_from_slice(value);
        Ok(value.len())
    }

    /// Borrow the value stored under `key`
    pub fn get_ref(&self, key: &str) -> Option<&[u8]> {
        self.buckets[self.bucket_index(key)]
            .find(key)
            .map(|entry| entry.value.as_slice())
    }

    /// Size of the value stored under `key`
    pub fn value_size(&self, key: &str) -> Option<usize> {
        self.get_ref(key).map(<[u8]>::len)
    }

    /// Insert a plain-old-data value by its byte representation
    pub fn insert_value<V: Pod>(&mut self, key: &str, value: &V) -> CollectionResult<InsertOutcome> {
        self.insert(key, bytemuck::bytes_of(value))
    }

    /// Read back a plain-old-data value stored under `key`
    pub fn get_value<V: Pod>(&self, key: &str) -> CollectionResult<V> {
        let bytes = self
            .get_ref(key)
            .ok_or_else(|| CollectionError::KeyNotFound(key.to_string()))?;

        bytemuck::try_pod_read_unaligned(bytes).map_err(|_| {
            CollectionError::InvalidArgument(format!(
                "stored value is {} bytes, expected {}",
                bytes.len(),
                std::mem::size_of::<V>()
            ))
        })
    }

    /// Remove the entry stored under `key`
    pub fn remove(&mut self, key: &str) -> CollectionResult<()> {
        let bucket_index = self.bucket_index(key);
        match self.buckets[bucket_index].unlink(key) {
            Some(_) => {
                self.size -= 1;
                debug!(bucket_index, key, "hash table entry removed");
                Ok(())
            }
            None => Err(CollectionError::KeyNotFound(key.to_string())),
        }
    }

    /// Membership check
    pub fn contains(&self, key: &str) -> bool {
        self.buckets[self.bucket_index(key)].find(key).is_some()
    }

    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of entries chained in bucket `index`
    pub fn bucket_len(&self, index: usize) -> Option<usize> {
        self.buckets.get(index).map(|bucket| bucket.count)
    }

    /// Entries per bucket
    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Whether the load factor exceeds the rehash threshold (advisory)
    #[inline]
    pub fn needs_rehash(&self) -> bool {
        self.load_factor() > HASH_TABLE_LOAD_FACTOR_MAX
    }

    /// Redistribute every entry over `new_bucket_count` buckets
    ///
    /// Entries are moved, not copied. On allocation failure the table is unchanged.
    pub fn rehash(&mut self, new_bucket_count: usize) -> CollectionResult<()> {
        if new_bucket_count == 0 {
            return Err(CollectionError::InvalidArgument(
                "bucket count must be non-zero".into(),
            ));
        }

        let span = span_operation("hash_table_rehash");
        let _entered = span.enter();
        span.record_items(self.size);

        let mut buckets = allocate_buckets(new_bucket_count)?;
        for bucket in self.buckets.iter_mut() {
            let mut cursor = bucket.head.take();
            while let Some(mut entry) = cursor {
                cursor = entry.next.take();
                let index = djb2(&entry.key) % new_bucket_count;
                buckets[index].push_front(entry);
            }
            bucket.count = 0;
        }

        debug!(
            old_bucket_count = self.buckets.len(),
            new_bucket_count,
            size = self.size,
            "hash table rehashed"
        );
        self.buckets = buckets;
        Ok(())
    }

    /// Iterate `(key, value)` pairs in bucket order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter(),
            current: None,
        }
    }

    pub fn stats(&self) -> HashTableStats {
        HashTableStats {
            size: self.size,
            bucket_count: self.buckets.len(),
            empty_buckets: self.buckets.iter().filter(|b| b.count == 0).count(),
            longest_chain: self.buckets.iter().map(|b| b.count).max().unwrap_or(0),
            load_factor: self.load_factor(),
        }
    }
}

impl Collection for HashTable {
    #[inline]
    fn len(&self) -> usize {
        self.size
    }

    /// Drop every entry; the bucket count is kept
    fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            // Unlink iteratively so long chains do not recurse on drop
            let mut cursor = bucket.head.take();
            while let Some(mut entry) = cursor {
                cursor = entry.next.take();
            }
            bucket.count = 0;
        }
        self.size = 0;
    }
}

impl Drop for Bucket {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut entry) = cursor {
            cursor = entry.next.take();
        }
    }
}

/// Iterator over hash table entries
pub struct Iter<'a> {
    buckets: std::slice::Iter<'a, Bucket>,
    current: Option<&'a Entry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current {
                self.current = entry.next.as_deref();
                return Some((entry.key.as_str(), entry.value.as_slice()));
            }
            self.current = self.buckets.next()?.head.as_deref();
        }
    }
}

impl<'a> IntoIterator for &'a HashTable {
    type Item = (&'a str, &'a [u8]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
