/*!
 * Stack
 * LIFO adapter over the linked list (back-only operations)
 */

use super::linked::LinkedList;
use crate::collections::traits::Collection;
use crate::collections::types::{ensure_sized, CollectionError, CollectionResult};

#[derive(Debug, Clone)]
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Stack<T> {
    pub fn new() -> CollectionResult<Self> {
        ensure_sized::<T>("Stack")?;
        Ok(Self {
            list: LinkedList::new(),
        })
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        self.list.push_back(value);
    }

    #[inline]
    pub fn pop(&mut self) -> CollectionResult<T> {
        self.list.pop_back()
    }

    /// Copy out the top element without removing it
    pub fn peek(&self) -> CollectionResult<T>
    where
        T: Clone,
    {
        self.list.back()
    }

    pub fn peek_ref(&self) -> CollectionResult<&T> {
        self.list.back_ref().ok_or(CollectionError::Empty)
    }
}

impl<T> Collection for Stack<T> {
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
