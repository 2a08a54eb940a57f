use crate::{CoreError, DeckValue};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Default)]
struct Decks {
    values: HashMap<String, DeckValue>,
    order: Vec<String>,
}

#[derive(Default)]
pub struct MemoryStore {
    decks: RwLock<Decks>,
    scores: RwLock<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl crate::repo::DeckStore for MemoryStore {
    async fn get_deck(&self, name: &str) -> Result<Option<DeckValue>, CoreError> {
        Ok(self.decks.read().values.get(name).cloned())
    }

    async fn put_deck(&self, name: &str, value: DeckValue) -> Result<bool, CoreError> {
        let mut d = self.decks.write();
        let replaced = d.values.insert(name.to_string(), value).is_some();
        if !replaced {
            d.order.push(name.to_string());
        }
        Ok(replaced)
    }

    async fn deck_names(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.decks.read().order.clone())
    }

    async fn append_score(&self, record: String) -> Result<(), CoreError> {
        self.scores.write().push(record);
        Ok(())
    }

    async fn scores(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.scores.read().clone())
    }

    async fn reset(&self) -> Result<(), CoreError> {
        let mut d = self.decks.write();
        d.values.clear();
        d.order.clear();
        self.scores.write().clear();
        Ok(())
    }
}
