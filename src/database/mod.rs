use async_trait::async_trait;

use crate::models::{SavedCocktail, User};
use crate::utils::AppError;

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::{redacted_uri, MongoStore};

/// Storage seam for the two collections the service keeps.
///
/// `insert_user` rejects an email that is already registered with
/// `AppError::Validation("User already exists")`.
#[async_trait]
pub trait Store: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn insert_user(&self, user: User) -> Result<(), AppError>;

    async fn user_count(&self) -> Result<usize, AppError>;

    /// Saved cocktails in insertion order
    async fn list_saved(&self) -> Result<Vec<SavedCocktail>, AppError>;

    async fn insert_saved(&self, cocktail: SavedCocktail) -> Result<(), AppError>;

    /// Label reported by `/api/health`
    fn mode(&self) -> &'static str;
}

pub const USER_EXISTS: &str = "User already exists";
