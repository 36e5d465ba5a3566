/*!
 * Collections
 *
 * Owned generic containers:
 * - Fixed and dynamic arrays
 * - Doubly-linked list with Stack and Deque adapters
 * - Bounded ring buffer
 * - Growable byte buffer with whole-file I/O
 * - Separate-chaining string-keyed hash table
 *
 * # Ownership
 *
 * Every container exclusively owns its storage. Values are moved or cloned
 * in and out; borrowing accessors (`get_ref`, `at`, `peek_ref`, ...) are
 * tied to the container borrow and end at the next mutation.
 *
 * # Concurrency
 *
 * Containers are unsynchronized. Sharing one instance across threads needs
 * external locking.
 */

pub mod array;
pub mod byte_buffer;
pub mod hash_table;
pub mod list;
pub mod ring_buffer;
pub mod traits;
pub mod types;

pub use array::{DynamicArray, FixedArray};
pub use byte_buffer::ByteBuffer;
pub use hash_table::{djb2, HashTable};
pub use list::{Deque, LinkedList, NodeId, Stack};
pub use ring_buffer::RingBuffer;
pub use traits::*;
pub use types::*;
