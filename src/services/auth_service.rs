use async_trait::async_trait;

use crate::database::Store;
use crate::models::{
    LoginRequest, RegisterRequest, User, UserInfo, DEMO_TOKEN, DEMO_USER_EMAIL, DEMO_USER_ID, DEMO_USER_NAME,
};
use crate::services::cocktail_service::present_text;
use crate::utils::{AppError, IdGenerator};
use std::sync::Arc;

pub const REGISTER_FIELDS_REQUIRED: &str = "Please provide name, email and password";
pub const LOGIN_FIELDS_REQUIRED: &str = "Please provide email and password";

/// Authentication strategy used by the `/api/auth` handlers
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> Result<UserInfo, AppError>;

    async fn login(&self, request: LoginRequest) -> Result<UserInfo, AppError>;

    async fn current_user(&self) -> Result<UserInfo, AppError>;
}

/// Mock authentication: login accepts any email/password pair and returns the
/// demo user; `/me` always answers with the demo user. Registration does store
/// users and enforces unique emails.
pub struct MockAuthenticator {
    store: Arc<dyn Store>,
    ids: Arc<IdGenerator>,
}

impl MockAuthenticator {
    pub fn new(store: Arc<dyn Store>, ids: Arc<IdGenerator>) -> Self {
        Self { store, ids }
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn register(&self, request: RegisterRequest) -> Result<UserInfo, AppError> {
        let (name, email, password) = match (
            present_text(request.name),
            present_text(request.email),
            present_text(request.password),
        ) {
            (Some(n), Some(e), Some(p)) => (n, e, p),
            _ => return Err(AppError::Validation(REGISTER_FIELDS_REQUIRED.to_string())),
        };

        if self.store.find_by_email(&email).await?.is_some() {
            return Err(AppError::Validation(crate::database::USER_EXISTS.to_string()));
        }

        let id = self.ids.next_id();
        let user = User {
            id,
            name,
            email,
            password,
            token: format!("{}-{}", DEMO_TOKEN, id),
        };

        self.store.insert_user(user.clone()).await?;

        Ok(UserInfo::from(&user))
    }

    async fn login(&self, request: LoginRequest) -> Result<UserInfo, AppError> {
        let email = match (present_text(request.email), present_text(request.password)) {
            (Some(email), Some(_)) => email,
            _ => return Err(AppError::Validation(LOGIN_FIELDS_REQUIRED.to_string())),
        };

        Ok(UserInfo {
            id: DEMO_USER_ID,
            name: DEMO_USER_NAME.to_string(),
            email,
            token: Some(DEMO_TOKEN.to_string()),
        })
    }

    async fn current_user(&self) -> Result<UserInfo, AppError> {
        Ok(UserInfo {
            id: DEMO_USER_ID,
            name: DEMO_USER_NAME.to_string(),
            email: DEMO_USER_EMAIL.to_string(),
            token: None,
        })
    }
}
