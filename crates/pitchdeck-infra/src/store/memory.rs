//! In-memory [`DeckStore`] backed by a `DashMap`.
//!
//! Decks live only as long as the process. The store is bounded: once
//! `max_decks` is exceeded the oldest decks are evicted. Ids are UUID v7,
//! so the smallest id is the oldest deck.

use dashmap::DashMap;

use pitchdeck_core::store::DeckStore;
use pitchdeck_types::deck::{Deck, DeckId, StoredDeck};

pub struct InMemoryDeckStore {
    decks: DashMap<DeckId, StoredDeck>,
    max_decks: usize,
}

impl InMemoryDeckStore {
    pub fn new(max_decks: usize) -> Self {
        Self {
            decks: DashMap::new(),
            max_decks: max_decks.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    fn evict_oldest(&self) {
        while self.decks.len() > self.max_decks {
            let oldest = self.decks.iter().map(|entry| *entry.key()).min();
            match oldest {
                Some(id) => {
                    self.decks.remove(&id);
                    tracing::debug!(deck_id = %id, "evicted deck");
                }
                None => break,
            }
        }
    }
}

impl DeckStore for InMemoryDeckStore {
    async fn put(&self, deck: Deck) -> StoredDeck {
        let stored = StoredDeck {
            id: DeckId::new(),
            slides: deck.slides,
            created_at: chrono::Utc::now(),
        };
        self.decks.insert(stored.id, stored.clone());
        self.evict_oldest();
        stored
    }

    async fn get(&self, id: &DeckId) -> Option<StoredDeck> {
        self.decks.get(id).map(|entry| entry.value().clone())
    }
}
