pub mod auth_service;
pub mod cocktail_db;
pub mod cocktail_service;

pub use auth_service::{Authenticator, MockAuthenticator};
pub use cocktail_db::{CocktailDbClient, CocktailLookup};
