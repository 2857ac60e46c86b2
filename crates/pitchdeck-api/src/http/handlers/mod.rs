//! HTTP request handlers.

pub mod deck;
pub mod generate;
pub mod pages;
pub mod usage;
