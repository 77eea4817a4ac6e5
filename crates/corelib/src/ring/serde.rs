//! Serde support for the ring.
//!
//! A ring serializes as its cursor-order sequence, so the wire form of
//! `Ring::from_values([1, 2, 3])` is `[3, 1, 2]`. Deserialization rebuilds
//! the identical ring by placing the cursor back on the first element of
//! the sequence; an empty sequence yields an empty ring, keeping the
//! round trip lossless.

use crate::ring::ring::Ring;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<T: Serialize> Serialize for Ring<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self.walk() {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

struct RingVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for RingVisitor<T> {
    type Value = Ring<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of ring elements in cursor order")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element()? {
            values.push(value);
        }
        Ok(Ring::from_cursor_order(values))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Ring<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(RingVisitor(PhantomData))
    }
}
