//! Cursor-based circular ring container.
//!
//! All nodes sit on a single circular chain, one of them distinguished as
//! the cursor:
//!
//! ```text
//!        +-> [1] --+
//!        |         v
//!       [3]       [2]
//!        ^         |
//!        +---------+
//!      cursor = [3]
//! ```
//!
//! # Invariants
//!
//! - `len == 0` iff the cursor is absent.
//! - Following `next` from the cursor exactly `len` times returns to the
//!   cursor and visits `len` distinct nodes.
//! - A single-element ring's node is its own successor.
//!
//! Every public operation either completes its structural change (links and
//! length together) or returns an error before mutating anything.

use crate::error::{Error, Result};
use crate::ring::arena::{NodeArena, NodeRef};
use siphasher::sip::SipHasher13;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A circular sequence container with a single movable cursor.
///
/// The cursor marks the "current" element; reads, steps, insertion and
/// removal all act relative to it. Indexed access counts forward from the
/// cursor, so index 0 is always the cursor itself.
///
/// # Example
///
/// ```rust
/// use corelib::Ring;
///
/// let mut ring = Ring::new();
/// ring.insert_after_cursor(1).insert_after_cursor(2).insert_after_cursor(3);
///
/// // Each insertion lands right after the cursor and becomes the cursor,
/// // so earlier values trail behind it.
/// assert_eq!(ring.to_string(), "3 -> 1 -> 2");
/// assert_eq!(ring.read()?, &3);
///
/// ring.step_forward()?;
/// assert_eq!(ring.read()?, &1);
/// # Ok::<(), corelib::Error>(())
/// ```
#[derive(Debug)]
pub struct Ring<T> {
    arena: NodeArena<T>,
    cursor: Option<NodeRef>,
    len: usize,
}

impl<T> Ring<T> {
    /// Creates an empty ring.
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            cursor: None,
            len: 0,
        }
    }

    /// Creates a ring holding a single value, cursor on it.
    pub fn with_value(value: T) -> Self {
        let mut arena = NodeArena::new();
        let id = arena.alloc(value);
        Self {
            arena,
            cursor: Some(id),
            len: 1,
        }
    }

    /// Bulk-loads a ring from an ordered sequence of values.
    ///
    /// The chain is built in sequence order and closed circularly, with the
    /// cursor on the **last** value loaded. This makes bulk loading exactly
    /// equivalent to feeding the sequence through
    /// [`insert_after_cursor`](Self::insert_after_cursor).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if the sequence is empty. This is a hard
    /// precondition, not a silent no-op.
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut ring = Self::new();
        for value in values {
            ring.insert_after_cursor(value);
        }
        if ring.is_empty() {
            return Err(Error::InvalidArgument(
                "bulk input must contain at least one value".to_owned(),
            ));
        }
        Ok(ring)
    }

    /// Rebuilds a ring from values already listed in cursor order, placing
    /// the cursor on the first value. Used wherever an existing ring is
    /// reconstructed exactly (clone, deserialization).
    pub(crate) fn from_cursor_order<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut ring = Self::new();
        for value in values {
            ring.insert_after_cursor(value);
        }
        // Loading left the cursor on the last value; its successor is the
        // first value of the sequence.
        if let Some(id) = ring.cursor {
            ring.cursor = Some(ring.arena.next(id));
        }
        ring
    }

    /// Number of elements currently on the chain.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the ring has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the ring has at least one element.
    ///
    /// Together with [`is_empty`](Self::is_empty) this lets a ring
    /// participate in boolean contexts without exposing its length.
    pub fn is_non_empty(&self) -> bool {
        self.len > 0
    }

    /// Returns the value at the cursor.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyRing`] if the ring has no elements.
    pub fn read(&self) -> Result<&T> {
        let id = self.cursor.ok_or(Error::EmptyRing)?;
        Ok(&self.arena.get(id).value)
    }

    /// Moves the cursor to its successor.
    ///
    /// Returns the mutated ring so steps can be chained.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyRing`] if the ring has no elements.
    pub fn step_forward(&mut self) -> Result<&mut Self> {
        let id = self.cursor.ok_or(Error::EmptyRing)?;
        self.cursor = Some(self.arena.next(id));
        Ok(self)
    }

    /// Moves the cursor to its predecessor.
    ///
    /// The chain is singly linked, so the predecessor is found by a linear
    /// scan from the cursor until `node.next` equals the cursor: O(len) per
    /// call. On a single-element ring this is a no-op.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyRing`] if the ring has no elements.
    pub fn step_backward(&mut self) -> Result<&mut Self> {
        let id = self.cursor.ok_or(Error::EmptyRing)?;
        let mut prev = id;
        while self.arena.next(prev) != id {
            prev = self.arena.next(prev);
        }
        self.cursor = Some(prev);
        Ok(self)
    }

    /// Splices a new value in immediately after the cursor and moves the
    /// cursor onto it. On an empty ring the new node becomes the sole,
    /// self-linked element.
    ///
    /// Returns the mutated ring so insertions can be chained.
    pub fn insert_after_cursor(&mut self, value: T) -> &mut Self {
        let new = self.arena.alloc(value);
        if let Some(id) = self.cursor {
            let next = self.arena.next(id);
            self.arena.set_next(new, next);
            self.arena.set_next(id, new);
        }
        self.cursor = Some(new);
        self.len += 1;
        self
    }

    /// Unlinks the node *after* the cursor and returns its value.
    ///
    /// The cursor's own node is never removed by this operation — except on
    /// a single-element ring, where the sole node is its own successor and
    /// therefore removes itself, leaving the ring empty.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyRing`] if the ring has no elements.
    pub fn remove_after_cursor(&mut self) -> Result<T> {
        let id = self.cursor.ok_or(Error::EmptyRing)?;
        let victim = self.arena.next(id);
        if victim == id {
            self.cursor = None;
        } else {
            let after = self.arena.next(victim);
            self.arena.set_next(id, after);
        }
        self.len -= 1;
        Ok(self.arena.free(victim))
    }

    /// Returns the value `index` steps forward from the cursor.
    ///
    /// Index 0 is the cursor itself. Walks the chain, so O(index).
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let id = self.node_at(index)?;
        Ok(&self.arena.get(id).value)
    }

    /// Replaces the value `index` steps forward from the cursor.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let id = self.node_at(index)?;
        self.arena.get_mut(id).value = value;
        Ok(())
    }

    fn node_at(&self, index: usize) -> Result<NodeRef> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                length: self.len,
            });
        }
        let mut id = self.cursor.ok_or(Error::EmptyRing)?;
        for _ in 0..index {
            id = self.arena.next(id);
        }
        Ok(id)
    }

    /// Copies the elements into a `Vec` in cursor order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.walk().cloned().collect()
    }

    /// Consumes the ring, returning its elements in cursor order.
    pub fn into_vec(mut self) -> Vec<T> {
        let mut ids = Vec::with_capacity(self.len);
        let mut at = self.cursor;
        for _ in 0..self.len {
            if let Some(id) = at {
                ids.push(id);
                at = Some(self.arena.next(id));
            }
        }
        self.cursor = None;
        self.len = 0;
        ids.into_iter().map(|id| self.arena.free(id)).collect()
    }

    /// Combines all elements in cursor order into a single hash value.
    ///
    /// Polynomial accumulation with seed 17 and multiplier 31, each element
    /// reduced to a `u64` through `SipHasher13`. Rings that compare equal
    /// always hash equal; the value of an empty ring is the bare seed.
    pub fn ring_hash(&self) -> u64
    where
        T: Hash,
    {
        let mut hash: u64 = 17;
        for value in self.walk() {
            let mut hasher = SipHasher13::new();
            value.hash(&mut hasher);
            hash = hash.wrapping_mul(31).wrapping_add(hasher.finish());
        }
        hash
    }

    /// Walks one full circuit in cursor order. Internal only; the public
    /// surface navigates through the cursor.
    pub(crate) fn walk(&self) -> impl Iterator<Item = &T> + '_ {
        let mut at = self.cursor;
        std::iter::from_fn(move || {
            let id = at?;
            let node = self.arena.get(id);
            at = Some(node.next);
            Some(&node.value)
        })
        .take(self.len)
    }
}

impl<T> Default for Ring<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy: a fresh chain with identical values in the same order and the
/// new cursor on the copy of the source's cursor node. No node is ever
/// shared between the two rings.
impl<T: Clone> Clone for Ring<T> {
    fn clone(&self) -> Self {
        Self::from_cursor_order(self.walk().cloned())
    }
}

/// Two rings are equal iff they have the same length and, walking both
/// chains from their respective cursors in lockstep, every corresponding
/// value is equal. Two rings holding the same values under different cursor
/// rotations are therefore not equal.
impl<T: PartialEq> PartialEq for Ring<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.walk().eq(other.walk())
    }
}

impl<T: Eq> Eq for Ring<T> {}

impl<T: Hash> Hash for Ring<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.ring_hash());
    }
}

/// Narrowing conversion from an ordered sequence; same contract as
/// [`Ring::from_values`].
impl<T> TryFrom<Vec<T>> for Ring<T> {
    type Error = Error;

    fn try_from(values: Vec<T>) -> Result<Self> {
        Self::from_values(values)
    }
}

/// Values in cursor order joined by `" -> "`, or the `"empty"` sentinel.
///
/// Rendering is one full circuit that starts and ends at the cursor node,
/// terminated by node identity rather than by counting.
impl<T: fmt::Display> fmt::Display for Ring<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = match self.cursor {
            Some(id) => id,
            None => return f.write_str("empty"),
        };
        let mut at = start;
        loop {
            let node = self.arena.get(at);
            write!(f, "{}", node.value)?;
            if node.next == start {
                return Ok(());
            }
            f.write_str(" -> ")?;
            at = node.next;
        }
    }
}
