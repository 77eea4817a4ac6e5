//! Circular ring container implementation.
//!
//! The ring owns a set of nodes arranged in a single circular chain and
//! exposes one movable cursor. Every operation is defined relative to the
//! cursor and the chain topology.

mod arena;
mod ring;
mod serde;

pub use ring::Ring;
