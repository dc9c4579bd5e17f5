//! Shared test fixtures
//!
//! In-memory implementations of the user and post stores, plus helpers for
//! wiring service instances over them. The post store counts owner queries
//! so tests can assert that a cached listing skipped the store.

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use postline::auth::service::AuthService;
use postline::auth::sessions::TokenService;
use postline::auth::users::{User, UserStore};
use postline::error::StoreError;
use postline::middleware::auth::RequestAuthenticator;
use postline::posts::service::PostService;
use postline::posts::store::{Post, PostStore};
use postline::server::state::AppState;

/// In-memory user store
pub struct MemUserStore {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

impl Default for MemUserStore {
    fn default() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl MemUserStore {
    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserStore for MemUserStore {
    async fn create(&self, email: &str, hashed_password: &str) -> Result<User, StoreError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|user| user.email == email) {
            return Err(StoreError::UniqueViolation("users.email"));
        }

        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            email: email.to_string(),
            hashed_password: hashed_password.to_string(),
        };
        users.push(user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| user.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| user.id == id).cloned())
    }
}

/// In-memory post store with an owner-query counter
pub struct MemPostStore {
    posts: Mutex<Vec<Post>>,
    next_id: AtomicI64,
    find_by_owner_calls: AtomicUsize,
}

impl Default for MemPostStore {
    fn default() -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            find_by_owner_calls: AtomicUsize::new(0),
        }
    }
}

impl MemPostStore {
    /// How many times `find_by_owner` has hit this store
    pub fn owner_queries(&self) -> usize {
        self.find_by_owner_calls.load(Ordering::SeqCst)
    }

    pub fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }
}

#[async_trait]
impl PostStore for MemPostStore {
    async fn create(&self, owner_id: i64, text: &str) -> Result<Post, StoreError> {
        let post = Post {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            user_id: owner_id,
            text: text.to_string(),
            created_at: Utc::now(),
        };
        self.posts.lock().unwrap().push(post.clone());

        Ok(post)
    }

    async fn find_by_owner(&self, owner_id: i64) -> Result<Vec<Post>, StoreError> {
        self.find_by_owner_calls.fetch_add(1, Ordering::SeqCst);

        let posts = self.posts.lock().unwrap();
        Ok(posts
            .iter()
            .filter(|post| post.user_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, StoreError> {
        let posts = self.posts.lock().unwrap();
        Ok(posts.iter().find(|post| post.id == id).cloned())
    }

    async fn delete(&self, post_id: i64, owner_id: i64) -> Result<bool, StoreError> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|post| !(post.id == post_id && post.user_id == owner_id));

        Ok(posts.len() < before)
    }
}

/// Fully wired service set over in-memory stores
pub struct TestApp {
    pub users: Arc<MemUserStore>,
    pub post_store: Arc<MemPostStore>,
    pub tokens: TokenService,
    pub auth: AuthService,
    pub posts: PostService,
    pub authenticator: RequestAuthenticator,
}

pub fn token_service() -> TokenService {
    TokenService::new("test-secret", chrono::Duration::minutes(30))
}

pub fn test_app() -> TestApp {
    let users = Arc::new(MemUserStore::default());
    let post_store = Arc::new(MemPostStore::default());
    let tokens = token_service();

    let user_store: Arc<dyn UserStore> = users.clone();
    let posts: Arc<dyn PostStore> = post_store.clone();

    TestApp {
        users: users.clone(),
        post_store: post_store.clone(),
        tokens: tokens.clone(),
        auth: AuthService::new(user_store.clone(), tokens.clone()),
        posts: PostService::new(posts),
        authenticator: RequestAuthenticator::new(user_store, tokens),
    }
}

pub fn app_state(app: &TestApp) -> AppState {
    AppState {
        auth: app.auth.clone(),
        posts: app.posts.clone(),
        authenticator: app.authenticator.clone(),
    }
}
