/*!
 * Collection Traits
 * Uniform surface shared by every container
 */

/// Basic container introspection
pub trait Collection {
    /// Number of live elements
    fn len(&self) -> usize;

    /// Drop every element, keeping allocated capacity where the container has one
    fn clear(&mut self);

    /// Check if empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Containers with a capacity fixed for their lifetime
pub trait BoundedCollection: Collection {
    /// Maximum number of elements
    fn capacity(&self) -> usize;

    /// Check if no further element fits
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Free slots left
    fn remaining(&self) -> usize {
        self.capacity().saturating_sub(self.len())
    }
}
