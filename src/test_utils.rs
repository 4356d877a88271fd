//! Fakes shared by the unit tests

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

use crate::database::MemoryStore;
use crate::models::Drink;
use crate::services::CocktailLookup;
use crate::state::AppState;

/// Canned upstream answers
pub struct FakeLookup {
    result: Result<Option<Vec<Drink>>, String>,
    echo: bool,
}

impl FakeLookup {
    pub fn with_drinks(names: Vec<&str>) -> Self {
        let drinks = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let mut d = Drink::new();
                d.insert("idDrink".to_string(), json!(format!("{}", 11000 + i)));
                d.insert("strDrink".to_string(), json!(name));
                d
            })
            .collect();
        Self { result: Ok(Some(drinks)), echo: false }
    }

    /// Search answers one drink named after the received `name`
    pub fn echo() -> Self {
        Self { result: Ok(None), echo: true }
    }

    pub fn null() -> Self {
        Self { result: Ok(None), echo: false }
    }

    pub fn failing(message: &str) -> Self {
        Self { result: Err(message.to_string()), echo: false }
    }
}

#[async_trait]
impl CocktailLookup for FakeLookup {
    async fn search_by_name(&self, name: &str) -> Result<Option<Vec<Drink>>, String> {
        if self.echo {
            let mut d = Drink::new();
            d.insert("strDrink".to_string(), json!(name));
            return Ok(Some(vec![d]));
        }
        self.result.clone()
    }

    async fn random(&self) -> Result<Option<Vec<Drink>>, String> {
        self.result.clone()
    }
}

pub fn memory_state(lookup: FakeLookup) -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (AppState::new(store.clone(), Arc::new(lookup)), store)
}
