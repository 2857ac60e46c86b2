//! Deck storage port.
//!
//! Generated decks are handed to a [`DeckStore`] which issues a [`DeckId`];
//! the viewer fetches the deck back by that id. Implementations live in
//! pitchdeck-infra.

use std::future::Future;

use pitchdeck_types::deck::{Deck, DeckId, StoredDeck};

/// Storage for generated decks.
pub trait DeckStore: Send + Sync {
    /// Store a deck and return it with its freshly issued id.
    fn put(&self, deck: Deck) -> impl Future<Output = StoredDeck> + Send;

    /// Fetch a previously stored deck.
    fn get(&self, id: &DeckId) -> impl Future<Output = Option<StoredDeck>> + Send;
}
