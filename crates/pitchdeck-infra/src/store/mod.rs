//! Deck store implementations.

pub mod memory;
