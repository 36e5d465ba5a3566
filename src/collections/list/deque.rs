/*!
 * Deque
 * Double-ended adapter over the linked list
 */

use super::linked::{Iter, LinkedList};
use crate::collections::traits::Collection;
use crate::collections::types::{ensure_sized, CollectionError, CollectionResult, End};

#[derive(Debug, Clone)]
pub struct Deque<T> {
    list: LinkedList<T>,
}

impl<T> Deque<T> {
    pub fn new() -> CollectionResult<Self> {
        ensure_sized::<T>("Deque")?;
        Ok(Self {
            list: LinkedList::new(),
        })
    }

    #[inline]
    pub fn push(&mut self, value: T, end: End) {
        self.list.push(value, end);
    }

    #[inline]
    pub fn push_front(&mut self, value: T) {
        self.push(value, End::Front);
    }

    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.push(value, End::Back);
    }

    #[inline]
    pub fn pop(&mut self, end: End) -> CollectionResult<T> {
        self.list.pop(end)
    }

    #[inline]
    pub fn pop_front(&mut self) -> CollectionResult<T> {
        self.pop(End::Front)
    }

    #[inline]
    pub fn pop_back(&mut self) -> CollectionResult<T> {
        self.pop(End::Back)
    }

    /// Copy out the element at `end` without removing it
    pub fn peek(&self, end: End) -> CollectionResult<T>
    where
        T: Clone,
    {
        self.peek_ref(end).cloned()
    }

    pub fn peek_ref(&self, end: End) -> CollectionResult<&T> {
        match end {
            End::Front => self.list.front_ref(),
            End::Back => self.list.back_ref(),
        }
        .ok_or(CollectionError::Empty)
    }

    #[inline]
    pub fn peek_front(&self) -> CollectionResult<T>
    where
        T: Clone,
    {
        self.peek(End::Front)
    }

    #[inline]
    pub fn peek_back(&self) -> CollectionResult<T>
    where
        T: Clone,
    {
        self.peek(End::Back)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Collection for Deque<T> {
    #[inline]
    fn len(&self) -> usize {
        self.list.len()
    }

    fn clear(&mut self) {
        self.list.clear();
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
