use crate::{repo::DeckStore, CoreError, DeckValue, MAX_DECK_NAME_LEN};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveReceipt {
    pub replaced: bool,
}

/// Everything a study client needs from the backend, whether it runs in
/// process or across HTTP.
#[async_trait]
pub trait DeckApi: Send + Sync {
    async fn save_deck(&self, name: &str, value: DeckValue) -> Result<SaveReceipt, CoreError>;
    async fn load_deck(&self, name: &str) -> Result<DeckValue, CoreError>;
    async fn list_decks(&self) -> Result<Vec<String>, CoreError>;
    async fn save_score(&self, record: &str) -> Result<(), CoreError>;
    async fn list_scores(&self) -> Result<Vec<String>, CoreError>;
}

#[derive(Clone)]
pub struct DeckService {
    store: Arc<dyn DeckStore>,
}

impl DeckService {
    pub fn new(store: Arc<dyn DeckStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(crate::repo::MemoryStore::new()))
    }

    pub async fn save_deck(&self, name: &str, value: DeckValue) -> Result<SaveReceipt, CoreError> {
        if name.trim().is_empty() {
            return Err(CoreError::Validation("deck name must not be empty"));
        }
        if name.chars().count() > MAX_DECK_NAME_LEN {
            return Err(CoreError::Validation("deck name is longer than 30 characters"));
        }
        let cards = value.cards.len();
        let replaced = self.store.put_deck(name, value).await?;
        info!(deck = name, cards, replaced, "saved deck");
        Ok(SaveReceipt { replaced })
    }

    pub async fn load_deck(&self, name: &str) -> Result<DeckValue, CoreError> {
        let value = self
            .store
            .get_deck(name)
            .await?
            .ok_or(CoreError::NotFound("deck"))?;
        debug!(deck = name, cards = value.cards.len(), "loaded deck");
        Ok(value)
    }

    pub async fn list_decks(&self) -> Result<Vec<String>, CoreError> {
        self.store.deck_names().await
    }

    pub async fn save_score(&self, record: &str) -> Result<(), CoreError> {
        self.store.append_score(record.to_string()).await?;
        info!(record, "saved score");
        Ok(())
    }

    pub async fn list_scores(&self) -> Result<Vec<String>, CoreError> {
        self.store.scores().await
    }

    /// Drops all decks and scores. Only meant for isolating tests.
    pub async fn reset(&self) -> Result<(), CoreError> {
        self.store.reset().await
    }
}

#[async_trait]
impl DeckApi for DeckService {
    async fn save_deck(&self, name: &str, value: DeckValue) -> Result<SaveReceipt, CoreError> {
        DeckService::save_deck(self, name, value).await
    }

    async fn load_deck(&self, name: &str) -> Result<DeckValue, CoreError> {
        DeckService::load_deck(self, name).await
    }

    async fn list_decks(&self) -> Result<Vec<String>, CoreError> {
        DeckService::list_decks(self).await
    }

    async fn save_score(&self, record: &str) -> Result<(), CoreError> {
        DeckService::save_score(self, record).await
    }

    async fn list_scores(&self) -> Result<Vec<String>, CoreError> {
        DeckService::list_scores(self).await
    }
}
