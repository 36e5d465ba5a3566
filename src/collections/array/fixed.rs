/*!
 * Fixed Array
 * Pre-sized array that rejects pushes once full
 */

use crate::collections::traits::{BoundedCollection, Collection};
use crate::collections::types::{bytes_for, ensure_sized, CollectionError, CollectionResult};

/// Array with a capacity chosen at construction
///
/// Storage is allocated exactly once. A push against a full array fails
/// without side effects; there is no implicit growth.
#[derive(Debug, Clone)]
pub struct FixedArray<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> FixedArray<T> {
    /// Create an array holding at most `capacity` elements
    pub fn new(capacity: usize) -> CollectionResult<Self> {
        ensure_sized::<T>("FixedArray")?;
        if capacity == 0 {
            return Err(CollectionError::InvalidArgument(
                "FixedArray capacity must be non-zero".into(),
            ));
        }

        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| CollectionError::AllocationFailed {
                requested: bytes_for::<T>(capacity),
            })?;

        Ok(Self { data, capacity })
    }

    /// Append an element
    pub fn push(&mut self, value: T) -> CollectionResult<()> {
        if self.is_full() {
            return Err(CollectionError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.data.push(value);
        Ok(())
    }

    /// Remove and return the last written element
    pub fn pop(&mut self) -> CollectionResult<T> {
        self.data.pop().ok_or(CollectionError::Empty)
    }

    /// Copy out the element at `index`
    pub fn get(&self, index: usize) -> CollectionResult<T>
    where
        T: Clone,
    {
        self.get_ref(index).cloned()
    }

    /// Borrow the element at `index`
    #[inline]
    pub fn get_ref(&self, index: usize) -> CollectionResult<&T> {
        let len = self.data.len();
        self.data.get(index).ok_or(CollectionError::index(index, len))
    }

    /// Mutably borrow the element at `index`
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

    /// Delete the element at `index`, shifting the tail down one slot
    pub fn del(&mut self, index: usize) -> CollectionResult<T> {
        if index >= self.data.len() {
            return Err(CollectionError::index(index, self.data.len()));
        }
        Ok(self.data.remove(index))
    }

    /// Scan front to back and stop at the first element matching `predicate`
    pub fn find_if<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.data.iter().position(|item| predicate(item))
    }

    /// Visit elements front to back with their index
    ///
    /// Iteration stops early when `f` returns `true`.
    pub fn for_each<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T, usize) -> bool,
    {
        for (index, item) in self.data.iter_mut().enumerate() {
            if f(item, index) {
                return;
            }
        }
    }

    /// Capacity in bytes (`capacity * element_size`)
    #[inline]
    pub fn capacity_bytes(&self) -> usize {
        bytes_for::<T>(self.capacity)
    }

    /// Size of one element in bytes
    #[inline]
    pub fn element_size(&self) -> usize {
        std::mem::size_of::<T>()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> Collection for FixedArray<T> {
    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T> BoundedCollection for FixedArray<T> {
    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn is_full(&self) -> bool {
        bytes_for::<T>(self.data.len()) >= self.capacity_bytes()
    }
}

impl<'a, T> IntoIterator for &'a FixedArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
