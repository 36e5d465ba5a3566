/*!
 * Doubly-Linked List
 * Arena-backed list with O(1) splice and unlink at any node
 *
 * Nodes live in a generational slot map. A `NodeId` stays valid until its
 * node is popped or removed; a stale handle is rejected with
 * `CollectionError::InvalidNode` instead of corrupting the list. Handles
 * must come from the same list: a key minted by another list may alias a
 * live node here.
 */

use crate::collections::traits::Collection;
use crate::collections::types::{CollectionError, CollectionResult, End};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable handle to a list node
    pub struct NodeId;
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<NodeId>,
    prev: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    nodes: SlotMap<NodeId, Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
        }
    }

    /// Splice a new node holding `value` at `end`
    pub fn push(&mut self, value: T, end: End) -> NodeId {
        let id = self.nodes.insert(Node {
            value,
            next: None,
            prev: None,
        });

        match end {
            End::Front => {
                if let Some(old_head) = self.head {
                    self.nodes[id].next = Some(old_head);
                    self.nodes[old_head].prev = Some(id);
                } else {
                    self.tail = Some(id);
                }
                self.head = Some(id);
            }
            End::Back => {
                if let Some(old_tail) = self.tail {
                    self.nodes[id].prev = Some(old_tail);
                    self.nodes[old_tail].next = Some(id);
                } else {
                    self.head = Some(id);
                }
                self.tail = Some(id);
            }
        }

        id
    }

    #[inline]
    pub fn push_front(&mut self, value: T) -> NodeId {
        self.push(value, End::Front)
    }

    #[inline]
    pub fn push_back(&mut self, value: T) -> NodeId {
        self.push(value, End::Back)
    }

    /// Detach the node at `end` and return its value
    pub fn pop(&mut self, end: End) -> CollectionResult<T> {
        let id = match end {
            End::Front => self.head,
            End::Back => self.tail,
        }
        .ok_or(CollectionError::Empty)?;

        self.remove_node(id)
    }

    #[inline]
    pub fn pop_front(&mut self) -> CollectionResult<T> {
        self.pop(End::Front)
    }

    #[inline]
    pub fn pop_back(&mut self) -> CollectionResult<T> {
        self.pop(End::Back)
    }

    /// Unlink an arbitrary node in O(1)
    pub fn remove_node(&mut self, id: NodeId) -> CollectionResult<T> {
        let node = self.nodes.remove(id).ok_or(CollectionError::InvalidNode)?;

        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            None => self.tail = node.prev,
        }

        Ok(node.value)
    }

    /// Locate the node at `index`, walking from the closer end
    pub fn get_node(&self, index: usize) -> Option<NodeId> {
        let len = self.len();
        if index >= len {
            return None;
        }

        if index > len / 2 {
            let mut cursor = self.tail;
            for _ in 0..(len - 1 - index) {
                cursor = cursor.and_then(|id| self.nodes[id].prev);
            }
            cursor
        } else {
            let mut cursor = self.head;
            for _ in 0..index {
                cursor = cursor.and_then(|id| self.nodes[id].next);
            }
            cursor
        }
    }

    /// Copy out the value at `index`
    pub fn get(&self, index: usize) -> CollectionResult<T>
    where
        T: Clone,
    {
        self.get_ref(index).cloned()
    }

    pub fn get_ref(&self, index: usize) -> CollectionResult<&T> {
        let id = self
            .get_node(index)
            .ok_or(CollectionError::index(index, self.len()))?;
        Ok(&self.nodes[id].value)
    }

    pub fn get_mut(&mut self, index: usize) -> CollectionResult<&mut T> {
        let id = self
            .get_node(index)
            .ok_or(CollectionError::index(index, self.len()))?;
        Ok(&mut self.nodes[id].value)
    }

    /// Overwrite the value at `index`, returning the previous one
    pub fn update(&mut self, index: usize, value: T) -> CollectionResult<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Copy out the first value
    pub fn front(&self) -> CollectionResult<T>
    where
        T: Clone,
    {
        self.front_ref().cloned().ok_or(CollectionError::Empty)
    }

    /// Copy out the last value
    pub fn back(&self) -> CollectionResult<T>
    where
        T: Clone,
    {
        self.back_ref().cloned().ok_or(CollectionError::Empty)
    }

    pub fn front_ref(&self) -> Option<&T> {
        self.head.map(|id| &self.nodes[id].value)
    }

    pub fn back_ref(&self) -> Option<&T> {
        self.tail.map(|id| &self.nodes[id].value)
    }

    #[inline]
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    #[inline]
    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    /// Successor of `id`, if any
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| node.next)
    }

    /// Predecessor of `id`, if any
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| node.prev)
    }

    /// Borrow the value held by `id`
    pub fn node_value(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|node| &node.value)
    }

    pub fn node_value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id).map(|node| &mut node.value)
    }

    /// Check whether `id` is a live node of this list
    #[inline]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Copy out the first value equal to `value`, scanning front to back
    pub fn find(&self, value: &T) -> CollectionResult<T>
    where
        T: PartialEq + Clone,
    {
        if self.is_empty() {
            return Err(CollectionError::Empty);
        }
        self.iter()
            .find(|candidate| *candidate == value)
            .cloned()
            .ok_or(CollectionError::NotFound)
    }

    /// First node whose value satisfies `predicate`
    pub fn find_if<F>(&self, mut predicate: F) -> Option<NodeId>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            if predicate(&node.value) {
                return Some(id);
            }
            cursor = node.next;
        }
        None
    }

    /// Visit every node front to back
    ///
    /// The successor is captured before `f` runs, so `f` may remove the
    /// node it was handed. Iteration stops early when `f` returns `true`.
    pub fn for_each<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Self, NodeId) -> bool,
    {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let Some(node) = self.nodes.get(id) else {
                break;
            };
            let next = node.next;
            if f(self, id) {
                return;
            }
            cursor = next;
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len(),
        }
    }
}

impl<T> Collection for LinkedList<T> {
    #[inline]
    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.head.is_none() && self.tail.is_none()
    }
}

/// Front-to-back iterator over list values
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.list.nodes.get(id)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
