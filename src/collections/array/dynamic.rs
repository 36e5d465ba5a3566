/*!
 * Dynamic Array
 * Growable array that doubles on overflow and halves when sparse
 *
 * # Capacity policy
 *
 * - Grow: capacity doubles when a push finds the array full
 * - Shrink: after a pop leaves `len <= capacity / 4` (and `len > 0`),
 *   capacity halves, never below the initial capacity
 *
 * Capacity is therefore always `initial_capacity * 2^k`.
 */

use crate::collections::traits::Collection;
use crate::collections::types::{
    bytes_for, ensure_sized, ArrayStats, CollectionError, CollectionResult,
};
use crate::core::config::CollectionConfig;
use crate::core::limits::{
    DYNAMIC_ARRAY_GROWTH_FACTOR, DYNAMIC_ARRAY_INIT_CAPACITY, DYNAMIC_ARRAY_SHRINK_DIVISOR,
};
use tracing::trace;

#[derive(Debug, Clone)]
pub struct DynamicArray<T> {
    data: Vec<T>,
    capacity: usize,
    initial_capacity: usize,
    reallocations: usize,
}

impl<T> DynamicArray<T> {
    /// Create an array with the default initial capacity
    pub fn new() -> CollectionResult<Self> {
        Self::with_initial_capacity(DYNAMIC_ARRAY_INIT_CAPACITY)
    }

    /// Create an array sized from configuration
    pub fn from_config(config: &CollectionConfig) -> CollectionResult<Self> {
        Self::with_initial_capacity(config.dynamic_array_initial_capacity)
    }

    /// Create an array whose capacity never drops below `initial_capacity`
    pub fn with_initial_capacity(initial_capacity: usize) -> CollectionResult<Self> {
        ensure_sized::<T>("DynamicArray")?;
        if initial_capacity == 0 {
            return Err(CollectionError::InvalidArgument(
                "DynamicArray initial capacity must be non-zero".into(),
            ));
        }

        let mut data = Vec::new();
        data.try_reserve_exact(initial_capacity)
            .map_err(|_| CollectionError::AllocationFailed {
                requested: bytes_for::<T>(initial_capacity),
            })?;

        Ok(Self {
            data,
            capacity: initial_capacity,
            initial_capacity,
            reallocations: 0,
        })
    }

    /// Append an element, doubling capacity first when full
    pub fn push(&mut self, value: T) -> CollectionResult<()> {
        if self.data.len() >= self.capacity {
            self.grow()?;
        }
        self.data.push(value);
        Ok(())
    }

    /// Remove and return the last element, shrinking when sparse
    pub fn pop(&mut self) -> CollectionResult<T> {
        let value = self.data.pop().ok_or(CollectionError::Empty)?;

        let len = self.data.len();
        if len > 0
            && len <= self.capacity / DYNAMIC_ARRAY_SHRINK_DIVISOR
            && self.capacity > self.initial_capacity
        {
            self.shrink();
        }

        Ok(value)
    }

    /// Copy out the element at `index`
    pub fn get(&self, index: usize) -> CollectionResult<T>
    where
        T: Clone,
    {
        self.get_ref(index).cloned()
    }

    #[inline]
    pub fn get_ref(&self, index: usize) -> CollectionResult<&T> {
        let len = self.data.len();
        self.data.get(index).ok_or(CollectionError::index(index, len))
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> CollectionResult<&mut T> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(CollectionError::index(index, len))
    }

    /// Overwrite the element at `index`, returning the previous value
    pub fn set(&mut self, index: usize, value: T) -> CollectionResult<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Current capacity in elements
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Number of grow/shrink reallocations since construction
    #[inline]
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn stats(&self) -> ArrayStats {
        ArrayStats {
            len: self.data.len(),
            capacity: self.capacity,
            initial_capacity: self.initial_capacity,
            element_size: std::mem::size_of::<T>(),
            reallocations: self.reallocations,
        }
    }

    fn grow(&mut self) -> CollectionResult<()> {
        let new_capacity = self
            .capacity
            .checked_mul(DYNAMIC_ARRAY_GROWTH_FACTOR)
            .ok_or(CollectionError::AllocationFailed {
                requested: usize::MAX,
            })?;

        self.data
            .try_reserve_exact(new_capacity - self.data.len())
            .map_err(|_| CollectionError::AllocationFailed {
                requested: bytes_for::<T>(new_capacity),
            })?;

        trace!(
            old_capacity = self.capacity,
            new_capacity,
            "dynamic array grown"
        );
        self.capacity = new_capacity;
        self.reallocations += 1;
        Ok(())
    }

    fn shrink(&mut self) {
        let new_capacity = (self.capacity / DYNAMIC_ARRAY_GROWTH_FACTOR).max(self.initial_capacity);
        self.data.shrink_to(new_capacity);

        trace!(
            old_capacity = self.capacity,
            new_capacity,
            len = self.data.len(),
            "dynamic array shrunk"
        );
        self.capacity = new_capacity;
        self.reallocations += 1;
    }
}

impl<T> Collection for DynamicArray<T> {
    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    /// Drop every element; capacity is kept
    fn clear(&mut self) {
        self.data.clear();
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
