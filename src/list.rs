use std::iter::FusedIterator;

use log::{debug, trace};
use serde::{Serialize, Serializer};

use crate::{allocator::NodeAllocator, error::ListError};

/// Values of the list built by the demo program, in order.
pub const SAMPLE_VALUES: [i32; 2] = [1, 2];

/// Index of a node within the arena of the list that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A linked list node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    value: i32,
    next: Option<NodeId>,
}

impl Node {
    pub fn value(&self) -> i32 {
        self.value
    }

    /// `None` marks the last node.
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }
}

/// Singly linked list of integers.
///
/// Nodes are stored in an arena owned by the list and linked by [`NodeId`].
/// Links are only ever written when a node is appended, each pointing at the
/// freshly stored node, so following `next` from the head always reaches the
/// end after `len()` steps.
#[derive(Debug, Clone, Default)]
pub struct List {
    nodes: Vec<Node>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the two-node demo list `1 -> 2`.
    pub fn sample<A: NodeAllocator + ?Sized>(alloc: &mut A) -> Result<Self, ListError> {
        Self::from_values(&SAMPLE_VALUES, alloc)
    }

    /// Build a list holding `values` in order, allocating one node at a time.
    ///
    /// Stops at the first refused allocation; the partially built list is
    /// dropped.
    pub fn from_values<A: NodeAllocator + ?Sized>(
        values: &[i32],
        alloc: &mut A,
    ) -> Result<Self, ListError> {
        let mut list = Self::new();
        for &value in values {
            list.append(value, alloc)?;
        }
        Ok(list)
    }

    fn append<A: NodeAllocator + ?Sized>(
        &mut self,
        value: i32,
        alloc: &mut A,
    ) -> Result<NodeId, ListError> {
        alloc.reserve(&mut self.nodes)?;

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { value, next: None });
        debug!("allocated node {} with value {}", id.0, value);

        match self.tail {
            Some(tail) => {
                self.nodes[tail.0].next = Some(id);
                debug!("linked node {} -> node {}", tail.0, id.0);
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);

        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Value of the first node.
    pub fn head(&self) -> Option<i32> {
        self.head.map(|id| self.nodes[id.0].value)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn head_id(&self) -> Option<NodeId> {
        self.head
    }

    /// Walk the list from the head to the terminal marker.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
            remaining: self.nodes.len(),
        }
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for List {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Forward cursor over a [`List`].
///
/// Consumed as it advances; call [`List::iter`] again to start over.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    nodes: &'a [Node],
    cursor: Option<NodeId>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let id = self.cursor?;
        let node = &self.nodes[id.0];
        trace!("visit node {} (value {})", id.0, node.value);

        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        if self.cursor.is_none() {
            trace!("reached end of list");
        }
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::allocator::{FailingAllocator, SystemAllocator};

    #[test]
    fn sample_is_one_then_two() {
        let list = List::sample(&mut SystemAllocator).unwrap();
        assert_eq!(list.to_vec(), vec![1, 2]);
        assert_eq!(list.head(), Some(1));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn links_follow_construction_order() {
        let list = List::sample(&mut SystemAllocator).unwrap();
        let head = list.head_id().unwrap();
        let second = list.node(head).unwrap().next().unwrap();
        assert_eq!(list.node(second).unwrap().value(), 2);
        assert_eq!(list.node(second).unwrap().next(), None);
    }

    #[test]
    fn empty_list_yields_nothing() {
        let list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.head(), None);
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    fn iterator_reports_exact_len() {
        let list = List::from_values(&[5, 6, 7], &mut SystemAllocator).unwrap();
        let mut it = list.iter();
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.len(), 2);
    }

    #[test]
    fn first_allocation_failure_builds_nothing() {
        let mut alloc = FailingAllocator::on_request(1);
        let err = List::sample(&mut alloc).unwrap_err();
        assert_eq!(err.request(), 1);
        assert_eq!(alloc.requests(), 1);
    }

    #[test]
    fn second_allocation_failure_is_reported() {
        let mut alloc = FailingAllocator::on_request(2);
        let err = List::sample(&mut alloc).unwrap_err();
        assert_eq!(err.request(), 2);
    }

    #[test]
    fn serializes_as_sequence() {
        let list = List::sample(&mut SystemAllocator).unwrap();
        assert_eq!(serde_json::to_string(&list).unwrap(), "[1,2]");
    }
}
