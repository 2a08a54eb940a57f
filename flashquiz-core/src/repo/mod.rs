use crate::{CoreError, DeckValue};
use async_trait::async_trait;

pub mod memory;

pub use memory::MemoryStore;

#[async_trait]
pub trait DeckStore: Send + Sync {
    // Decks
    async fn get_deck(&self, name: &str) -> Result<Option<DeckValue>, CoreError>;
    /// Stores `value` under `name`, returning true when an entry was replaced.
    async fn put_deck(&self, name: &str, value: DeckValue) -> Result<bool, CoreError>;
    /// Names in the order they were first stored.
    async fn deck_names(&self) -> Result<Vec<String>, CoreError>;

    // Scores
    async fn append_score(&self, record: String) -> Result<(), CoreError>;
    async fn scores(&self) -> Result<Vec<String>, CoreError>;

    async fn reset(&self) -> Result<(), CoreError>;
}
