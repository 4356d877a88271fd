use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Store, USER_EXISTS};
use crate::models::{SavedCocktail, User};
use crate::utils::AppError;

/// Demo mode: everything lives in the process and is lost on restart
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    saved_cocktails: RwLock<Vec<SavedCocktail>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_user(&self, user: User) -> Result<(), AppError> {
        let mut users = self.users.write().await;
        // check and insert under the same lock
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::Validation(USER_EXISTS.to_string()));
        }
        users.push(user);
        Ok(())
    }

    async fn user_count(&self) -> Result<usize, AppError> {
        Ok(self.users.read().await.len())
    }

    async fn list_saved(&self) -> Result<Vec<SavedCocktail>, AppError> {
        Ok(self.saved_cocktails.read().await.clone())
    }

    async fn insert_saved(&self, cocktail: SavedCocktail) -> Result<(), AppError> {
        self.saved_cocktails.write().await.push(cocktail);
        Ok(())
    }

    fn mode(&self) -> &'static str {
        "Demo (sin base de datos)"
    }
}
