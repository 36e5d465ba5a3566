/*!
 * Ring Buffer
 * Fixed-capacity circular FIFO that never overwrites unread items
 *
 * `head` is the next slot to read, `tail` the next slot to write; both are
 * kept modulo capacity. A write against a full buffer fails, so callers that
 * want overwrite-on-full semantics must drain first.
 */

use crate::collections::traits::{BoundedCollection, Collection};
use crate::collections::types::{bytes_for, ensure_sized, CollectionError, CollectionResult};
use crate::core::config::CollectionConfig;
use crate::core::limits::RING_BUFFER_INIT_CAPACITY;

#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Create a buffer holding `capacity` items
    ///
    /// 0 selects `RING_BUFFER_INIT_CAPACITY` items, whatever the element size.
    pub fn new(capacity: usize) -> CollectionResult<Self> {
        ensure_sized::<T>("RingBuffer")?;
        let capacity = if capacity == 0 {
            RING_BUFFER_INIT_CAPACITY
        } else {
            capacity
        };

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| CollectionError::AllocationFailed {
                requested: bytes_for::<T>(capacity),
            })?;
        slots.resize_with(capacity, || None);

        Ok(Self {
            slots,
            head: 0,
            tail: 0,
            len: 0,
        })
    }

    pub fn from_config(config: &CollectionConfig) -> CollectionResult<Self> {
        Self::new(config.ring_buffer_capacity)
    }

    /// Store `value` at the tail
    pub fn write(&mut self, value: T) -> CollectionResult<()> {
        if self.is_full() {
            return Err(CollectionError::Full {
                capacity: self.capacity(),
            });
        }

        self.slots[self.tail] = Some(value);
        self.tail = (self.tail + 1) % self.capacity();
        self.len += 1;
        Ok(())
    }

    /// Take the oldest item
    pub fn read(&mut self) -> CollectionResult<T> {
        if self.len == 0 {
            return Err(CollectionError::Empty);
        }

        let value = self.slots[self.head].take().ok_or(CollectionError::Empty)?;
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        Ok(value)
    }

    /// Copy out the oldest item without consuming it
    pub fn peek(&self) -> CollectionResult<T>
    where
        T: Clone,
    {
        self.peek_ref().cloned()
    }

    pub fn peek_ref(&self) -> CollectionResult<&T> {
        if self.len == 0 {
            return Err(CollectionError::Empty);
        }
        self.slots[self.head].as_ref().ok_or(CollectionError::Empty)
    }

    /// Index of the next slot to read
    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Index of the next slot to write
    #[inline]
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Unread items, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let capacity = self.capacity();
        (0..self.len).filter_map(move |offset| self.slots[(self.head + offset) % capacity].as_ref())
    }
}

impl<T> Collection for RingBuffer<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }
}

impl<T> BoundedCollection for RingBuffer<T> {
    #[inline]
    fn capacity(&self) -> usize {
        self.slots.len()
    }
}
