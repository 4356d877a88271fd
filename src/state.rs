use std::sync::Arc;

use crate::database::Store;
use crate::services::{Authenticator, CocktailLookup, MockAuthenticator};
use crate::utils::IdGenerator;

/// Shared handler state, registered once as `web::Data<AppState>`
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub cocktails: Arc<dyn CocktailLookup>,
    pub auth: Arc<dyn Authenticator>,
    pub ids: Arc<IdGenerator>,
}

impl AppState {
    /// Wires the mock authenticator over `store`
    pub fn new(store: Arc<dyn Store>, cocktails: Arc<dyn CocktailLookup>) -> Self {
        let ids = Arc::new(IdGenerator::new());
        let auth = Arc::new(MockAuthenticator::new(store.clone(), ids.clone()));
        Self {
            store,
            cocktails,
            auth,
            ids,
        }
    }
}
