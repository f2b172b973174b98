use std::alloc::{self, Layout};
use std::fmt;

use itertools::Itertools;

use crate::error::{Error, Result};

#[cfg(test)]
mod test {
    use super::*;
    use crate::list;

    #[test]
    fn append_keeps_insertion_order() {
        let mut list = List::new();
        list.try_append(10).unwrap();
        list.try_append(20).unwrap();
        list.try_append(30).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(vec![10, 20, 30], list.iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn append_to_empty_sets_sole_node() {
        let mut list = List::new();
        assert!(list.is_empty());
        list.try_append(42).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.iter().next(), Some(&42));
        assert_eq!(list.to_string(), "42 -> NULL");
    }

    #[test]
    fn display_chains_values_to_the_terminal_marker() {
        let list = list![10, 20, 30];
        assert_eq!(list.to_string(), "10 -> 20 -> 30 -> NULL");
    }

    #[test]
    fn display_of_the_empty_list() {
        let list: List<i64> = List::new();
        assert_eq!(list.to_string(), "NULL");
    }

    #[test]
    fn display_is_stable_across_calls() {
        let list = list![1, 2, 3];
        assert_eq!(list.to_string(), list.to_string());
    }

    #[test]
    fn clear_releases_every_node() {
        let mut list = list![10, 20, 30];
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    fn clear_on_an_empty_list_is_a_no_op() {
        let mut list: List<i64> = List::new();
        list.clear();
        assert!(list.is_empty());
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn append_after_clear_starts_a_fresh_chain() {
        let mut list = list![10, 20, 30];
        list.clear();
        list.try_append(40).unwrap();
        assert_eq!(list.to_string(), "40 -> NULL");
    }

    #[test]
    fn list_macro() {
        let list = list![1, 2, 3];
        assert_eq!(vec![1, 2, 3], list.iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn long_chains_drop_without_recursing() {
        // Built by head insertion to keep the test linear.
        let mut list = List::new();
        for i in 0..500_000 {
            list.head = Some(Box::new(Node {
                value: i,
                next: list.head.take(),
            }));
            list.size += 1;
        }
        drop(list);
    }
}

#[macro_export]
macro_rules! list {
    ($($x:expr),*$(,)?) => {{
        let mut list = $crate::list::List::default();
        for x in [$($x),*] {
            list.try_append(x).expect("node allocation failed");
        }
        list
    }};
}

/// An ordered singly linked list.
///
/// Each node owns its successor, so the whole chain hangs off the head
/// link. Appending seeks the tail from the head on every call; there is no
/// cached tail pointer.
pub struct List<T> {
    head: Link<T>,
    size: usize,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Allocates a detached node through the fallible allocation path, so
    /// that memory exhaustion surfaces as a recoverable error rather than
    /// an abort.
    fn try_new(value: T) -> Result<Box<Self>> {
        // The link field keeps the layout non-zero-sized, so `alloc` is
        // always legal here.
        let layout = Layout::new::<Self>();
        let ptr = unsafe { alloc::alloc(layout) }.cast::<Self>();
        if ptr.is_null() {
            return Error::AllocationFailure.err();
        }
        unsafe {
            ptr.write(Self { value, next: None });
            Ok(Box::from_raw(ptr))
        }
    }
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends `value` at the tail, walking the chain from the head to find
    /// it. On allocation failure the list is left exactly as it was.
    pub fn try_append(&mut self, value: T) -> Result<()> {
        let node = Node::try_new(value)?;
        let mut link = &mut self.head;
        while let Some(current) = link {
            link = &mut current.next;
        }
        *link = Some(node);
        self.size += 1;
        Ok(())
    }

    /// Releases every node, head to tail. The list is empty afterwards;
    /// calling this on an empty list does nothing.
    pub fn clear(&mut self) {
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
        self.size = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            head: None,
            size: 0,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NULL");
        }
        write!(f, "{} -> NULL", self.iter().format(" -> "))
    }
}

// Dropping the head link alone would recurse once per node.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}
