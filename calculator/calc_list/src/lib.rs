//! Index-addressed linked sequence.
//!
//! [`LinkedList`] is the ordered container backing both an expression node's
//! child list and the coordinate output of range sampling. It supports O(1)
//! appends at either end and index operations that walk from whichever end is
//! nearer, giving O(min(i, len - i)) access instead of the O(i) cost of a
//! front-only walk.
//!
//! # Representation
//!
//! Nodes live in a slab: a `Vec` of slots linked by `prev`/`next` slot
//! indices, with removed slots kept on an intrusive free list for reuse.
//! Interior nodes are never exposed; the API is value-level only (get, set,
//! insert, remove by index), so links cannot be aliased from outside.

use std::fmt;

use thiserror::Error;

/// Error returned by index operations given a position outside the sequence.
///
/// The failed operation performs no structural change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("index {index} out of bounds for list of length {len}")]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The list length at the time of the call.
    pub len: usize,
}

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

/// A doubly linked sequence with positions `0..len`.
///
/// `push_front`/`push_back` are O(1); `get`, `set`, `insert`, and `remove`
/// are O(min(i, len - i)) because the walk starts from the nearer end.
#[derive(Clone)]
pub struct LinkedList<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub const fn new() -> Self {
        LinkedList {
            slots: Vec::new(),
            free_head: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of elements. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First element, if any.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|slot| &self.node(slot).value)
    }

    /// Last element, if any.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|slot| &self.node(slot).value)
    }

    /// Append at the back. O(1).
    pub fn push_back(&mut self, value: T) {
        let slot = self.alloc(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(old_tail) => self.node_mut(old_tail).next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Prepend at the front. O(1).
    pub fn push_front(&mut self, value: T) {
        let slot = self.alloc(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old_head) => self.node_mut(old_head).prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        self.len += 1;
    }

    /// Remove and return the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.unlink(head))
    }

    /// Remove and return the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        Some(self.unlink(tail))
    }

    /// Element at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slot_at(index).map(|slot| &self.node(slot).value)
    }

    /// Mutable element at `index`, or `None` when out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let slot = self.slot_at(index)?;
        Some(&mut self.node_mut(slot).value)
    }

    /// Replace the element at `index`, returning the old value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        let slot = self.slot_at(index).ok_or(IndexOutOfBounds {
            index,
            len: self.len,
        })?;
        Ok(std::mem::replace(&mut self.node_mut(slot).value, value))
    }

    /// Insert `value` so it ends up at position `index`.
    ///
    /// `index == len` appends. Relinks neighbors; nothing is shifted.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index == self.len {
            self.push_back(value);
            return Ok(());
        }
        if index == 0 && self.len > 0 {
            self.push_front(value);
            return Ok(());
        }
        let Some(at) = self.slot_at(index) else {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        };
        let prev = self.node(at).prev;
        let slot = self.alloc(Node {
            value,
            prev,
            next: Some(at),
        });
        if let Some(prev) = prev {
            self.node_mut(prev).next = Some(slot);
        } else {
            self.head = Some(slot);
        }
        self.node_mut(at).prev = Some(slot);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at `index`.
    ///
    /// Remaining elements keep their relative order.
    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let Some(at) = self.slot_at(index) else {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        };
        Ok(self.unlink(at))
    }

    /// Iterator over the elements from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Slot index of position `index`, walking from the nearer end.
    ///
    /// This is the traversal contract the whole container exists for: cost is
    /// proportional to the distance from the closer of the two ends.
    fn slot_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        let from_back = self.len - 1 - index;
        if index <= from_back {
            let mut slot = self.head?;
            for _ in 0..index {
                slot = self.node(slot).next?;
            }
            Some(slot)
        } else {
            let mut slot = self.tail?;
            for _ in 0..from_back {
                slot = self.node(slot).prev?;
            }
            Some(slot)
        }
    }

    /// Detach the node in `at` from its neighbors and reclaim its slot.
    fn unlink(&mut self, at: usize) -> T {
        let (prev, next) = {
            let node = self.node(at);
            (node.prev, node.next)
        };
        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
        self.release(at)
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free_head {
            Some(slot) => {
                self.free_head = match &self.slots[slot] {
                    Slot::Vacant { next_free } => *next_free,
                    Slot::Occupied(_) => {
                        unreachable!("free list only references vacant slots")
                    }
                };
                self.slots[slot] = Slot::Occupied(node);
                slot
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, at: usize) -> T {
        let slot = std::mem::replace(
            &mut self.slots[at],
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(at);
        match slot {
            Slot::Occupied(node) => node.value,
            Slot::Vacant { .. } => unreachable!("list links only reference occupied slots"),
        }
    }

    fn node(&self, slot: usize) -> &Node<T> {
        match &self.slots[slot] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("list links only reference occupied slots"),
        }
    }

    fn node_mut(&mut self, slot: usize) -> &mut Node<T> {
        match &mut self.slots[slot] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("list links only reference occupied slots"),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

/// Borrowing iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.front?;
        let node = self.list.node(slot);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.back?;
        let node = self.list.node(slot);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Owning iterator over a [`LinkedList`].
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}
