/*!
 * Lists
 *
 * Doubly-linked list plus the Stack and Deque adapters built on it.
 */

mod deque;
mod linked;
mod stack;

pub use deque::Deque;
pub use linked::{Iter, LinkedList, NodeId};
pub use stack::Stack;
