/*!
 * List Tests
 * Linked list handles, stack and deque adapters
 */

use pretty_assertions::assert_eq;
use rt_collections::{Collection, CollectionError, Deque, End, LinkedList, Stack};

fn collect<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_push_both_ends_preserves_order() {
    let mut list = LinkedList::new();
    list.push_back(2);
    list.push_front(1);
    list.push(3, End::Back);
    list.push(0, End::Front);

    assert_eq!(collect(&list), vec![0, 1, 2, 3]);
    assert_eq!(list.len(), 4);
    assert_eq!(list.front().unwrap(), 0);
    assert_eq!(list.back().unwrap(), 3);
}

#[test]
fn test_remove_middle_node_by_handle() {
    let mut list = LinkedList::new();
    let a = list.push_back("a");
    let b = list.push_back("b");
    let c = list.push_back("c");

    assert_eq!(list.remove_node(b).unwrap(), "b");
    assert_eq!(list.next(a), Some(c));
    assert_eq!(list.prev(c), Some(a));
    assert_eq!(collect(&list), vec!["a", "c"]);

    // Removed handles stay dead
    assert_eq!(list.remove_node(b), Err(CollectionError::InvalidNode));
    assert!(!list.contains_node(b));
}

#[test]
fn test_remove_only_node_empties_list() {
    let mut list = LinkedList::new();
    let only = list.push_back(7u8);
    list.remove_node(only).unwrap();

    assert!(list.is_empty());
    assert_eq!(list.head(), None);
    assert_eq!(list.tail(), None);
    assert_eq!(list.pop_front(), Err(CollectionError::Empty));
}

#[test]
fn test_index_access_from_both_halves() {
    let mut list = LinkedList::new();
    for i in 0..9 {
        list.push_back(i * 10);
    }

    assert_eq!(list.get(1).unwrap(), 10);
    assert_eq!(list.get(7).unwrap(), 70);
    assert_eq!(list.update(8, 800).unwrap(), 80);
    assert_eq!(list.back().unwrap(), 800);
    assert_eq!(
        list.get(9),
        Err(CollectionError::IndexOutOfBounds { index: 9, len: 9 })
    );
}

#[test]
fn test_find_distinguishes_empty_and_missing() {
    let mut list = LinkedList::new();
    assert_eq!(list.find(&1), Err(CollectionError::Empty));

    list.push_back(1);
    list.push_back(2);
    assert_eq!(list.find(&2).unwrap(), 2);
    assert_eq!(list.find(&5), Err(CollectionError::NotFound));
}

#[test]
fn test_for_each_can_remove_visited_node() {
    let mut list = LinkedList::new();
    for i in 1..=6 {
        list.push_back(i);
    }

    list.for_each(|list, id| {
        if list.node_value(id).is_some_and(|v| v % 2 == 0) {
            let _ = list.remove_node(id);
        }
        false
    });

    assert_eq!(collect(&list), vec![1, 3, 5]);
}

#[test]
fn test_find_if_returns_handle() {
    let mut list = LinkedList::new();
    list.push_back(String::from("alpha"));
    list.push_back(String::from("beta"));

    let id = list.find_if(|s| s.starts_with('b')).unwrap();
    list.node_value_mut(id).unwrap().push_str("-2");
    assert_eq!(list.back().unwrap(), "beta-2");
}

#[test]
fn test_stack_is_lifo() {
    let mut stack = Stack::new().unwrap();
    for i in 0..3u16 {
        stack.push(i);
    }

    assert_eq!(stack.peek().unwrap(), 2);
    assert_eq!(stack.pop().unwrap(), 2);
    assert_eq!(stack.pop().unwrap(), 1);
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.pop().unwrap(), 0);
    assert_eq!(stack.pop(), Err(CollectionError::Empty));
}

#[test]
fn test_deque_both_ends() {
    let mut deque = Deque::new().unwrap();
    deque.push_back(2);
    deque.push_front(1);
    deque.push(3, End::Back);

    assert_eq!(deque.peek_front().unwrap(), 1);
    assert_eq!(deque.peek_back().unwrap(), 3);
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(deque.pop(End::Front).unwrap(), 1);
    assert_eq!(deque.pop_back().unwrap(), 3);
    assert_eq!(deque.pop_back().unwrap(), 2);
    assert_eq!(deque.peek(End::Back), Err(CollectionError::Empty));
}

#[test]
fn test_zero_sized_adapters_rejected() {
    assert!(Stack::<()>::new().is_err());
    assert!(Deque::<()>::new().is_err());
}
