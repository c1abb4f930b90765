use std::collections::HashMap;
use std::fmt;

use crate::{errors::SeqListError, node::Node};

/// A mutable singly-linked sequence with O(1) insertion at both ends.
///
/// Nodes live in an id-keyed arena owned by the list; the chain is the
/// `next` links rooted at `head`. `tail` and `len` are cached alongside the
/// chain, and every mutation repairs them before it returns.
#[derive(Debug)]
pub struct SeqList<T> {
    nodes: HashMap<usize, Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    next_id: usize,
    len: usize,
}

impl<T> Default for SeqList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SeqList<T> {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            head: None,
            tail: None,
            next_id: 0,
            len: 0,
        }
    }

    /// Create a list seeded with a single node, which becomes both head
    /// and tail.
    pub fn with_seed(node: Node<T>) -> Self {
        debug_assert!(node.next.is_none(), "seed node must be unlinked");
        let mut list = Self::new();
        let id = list.adopt(node);
        list.head = Some(id);
        list.tail = Some(id);
        list.len = 1;
        list
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first node, if any.
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.map(|id| &self.nodes[&id])
    }

    /// The last node, if any. O(1) through the cached id; the chain is
    /// never walked to find it.
    pub fn tail(&self) -> Option<&Node<T>> {
        self.tail.map(|id| &self.nodes[&id])
    }

    /// Append a value after the current tail.
    pub fn append(&mut self, value: T) {
        let id = self.adopt(Node::new(value));
        match self.tail {
            Some(t) => self.nodes.get_mut(&t).expect("tail id is live").next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Prepend a value before the current head.
    pub fn prepend(&mut self, value: T) {
        let mut node = Node::new(value);
        node.next = self.head;
        let id = self.adopt(node);
        self.head = Some(id);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.len += 1;
    }

    /// The value at a zero-based position, or `None` past the end.
    pub fn at(&self, index: usize) -> Option<&T> {
        let mut cur = self.head?;
        for _ in 0..index {
            cur = self.nodes[&cur].next?;
        }
        Some(&self.nodes[&cur].value)
    }

    /// Remove and return the head value; the second node becomes the new
    /// head. An empty list yields `None` rather than an error. Popping the
    /// last node clears `tail` as well.
    pub fn pop(&mut self) -> Option<T> {
        let id = self.head?;
        let node = self.nodes.remove(&id).expect("head id is live");
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Does any node hold a value equal to `value`?
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find_index(value).is_some()
    }

    /// Zero-based position of the first node holding `value`, or `None`.
    pub fn find_index(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut cur = self.head;
        let mut index = 0;
        while let Some(id) = cur {
            let node = &self.nodes[&id];
            if node.value == *value {
                return Some(index);
            }
            cur = node.next;
            index += 1;
        }
        None
    }

    /// Insert `values` as a contiguous run starting at `index`; the node
    /// previously at `index` and everything after it follow the run.
    ///
    /// Error if `index` is outside `[0, len)`; the list is left unchanged.
    pub fn insert_at(
        &mut self,
        index: usize,
        values: impl IntoIterator<Item = T>,
    ) -> Result<(), SeqListError> {
        if index >= self.len {
            return Err(SeqListError::OutOfRange { index, len: self.len });
        }

        let mut prev = self.id_before(index);
        let follow = match prev {
            Some(p) => self.nodes[&p].next,
            None => self.head,
        };

        for value in values {
            let id = self.adopt(Node::new(value));
            match prev {
                Some(p) => self.nodes.get_mut(&p).expect("prev id is live").next = Some(id),
                None => self.head = Some(id),
            }
            prev = Some(id);
            self.len += 1;
        }

        if let Some(p) = prev {
            self.nodes.get_mut(&p).expect("prev id is live").next = follow;
            if follow.is_none() {
                self.tail = Some(p);
            }
        }
        Ok(())
    }

    /// Remove and return the value at `index`, splicing the chain around
    /// it. Index 0 is a `pop`; removing the last node repoints `tail` at
    /// its predecessor.
    ///
    /// Error if `index` is outside `[0, len)`; the list is left unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<T, SeqListError> {
        if index >= self.len {
            return Err(SeqListError::OutOfRange { index, len: self.len });
        }
        if index == 0 {
            return Ok(self.pop().expect("in-range index 0 means non-empty"));
        }

        let prev = self.id_before(index).expect("index > 0 has a predecessor");
        let target = self.nodes[&prev].next.expect("in-range index has a node");
        let node = self.nodes.remove(&target).expect("target id is live");
        self.nodes.get_mut(&prev).expect("prev id is live").next = node.next;
        if node.next.is_none() {
            self.tail = Some(prev);
        }
        self.len -= 1;
        Ok(node.value)
    }

    fn adopt(&mut self, node: Node<T>) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }

    /// Id of the node preceding position `index`. `None` stands for the
    /// position just before the head, so index 0 splices exactly like any
    /// other position.
    fn id_before(&self, index: usize) -> Option<usize> {
        let mut cur = None;
        for _ in 0..index {
            cur = match cur {
                Some(id) => self.nodes[&id].next,
                None => self.head,
            };
        }
        cur
    }
}

impl<T: fmt::Display> fmt::Display for SeqList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cur = self.head;
        while let Some(id) = cur {
            let node = &self.nodes[&id];
            write!(f, "({}) -> ", node.value)?;
            cur = node.next;
        }
        f.write_str("null")
    }
}
