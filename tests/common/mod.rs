#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use link_shortener::domain::entities::{Link, NewLink};
use link_shortener::domain::errors::StoreError;
use link_shortener::domain::repositories::{InsertOutcome, LinkRepository};
use link_shortener::infrastructure::persistence::MemoryLinkRepository;
use link_shortener::state::AppState;
use link_shortener::utils::token_generator::{RandomTokenGenerator, TokenGenerator};

pub const BASE_URL: &str = "https://s.example.com";
pub const FALLBACK_URL: &str = "https://example.com/home";

/// Always returns the same token.
pub struct FixedTokenGenerator(pub &'static str);

impl TokenGenerator for FixedTokenGenerator {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}

/// Returns the given tokens in order, then repeats the last one.
pub struct ScriptedTokenGenerator {
    tokens: Vec<&'static str>,
    next: AtomicUsize,
}

impl ScriptedTokenGenerator {
    pub fn new(tokens: Vec<&'static str>) -> Self {
        Self {
            tokens,
            next: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.next.load(Ordering::SeqCst)
    }
}

impl TokenGenerator for ScriptedTokenGenerator {
    fn generate(&self) -> String {
        let i = self.next.fetch_add(1, Ordering::SeqCst);
        self.tokens[i.min(self.tokens.len() - 1)].to_string()
    }
}

/// A store whose every call times out.
pub struct DownRepository;

#[async_trait]
impl LinkRepository for DownRepository {
    async fn insert_if_absent(&self, _new_link: NewLink) -> Result<InsertOutcome, StoreError> {
        Err(StoreError::Timeout(Duration::from_secs(5)))
    }

    async fn find_by_token(&self, _token: &str) -> Result<Option<Link>, StoreError> {
        Err(StoreError::Timeout(Duration::from_secs(5)))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Timeout(Duration::from_secs(5)))
    }
}

/// State backed by a store that never answers.
pub fn create_down_state() -> AppState {
    AppState::new(
        Arc::new(DownRepository),
        Arc::new(RandomTokenGenerator::default()),
        5,
        BASE_URL,
        FALLBACK_URL,
    )
}

pub fn create_test_state_with(
    repo: Arc<MemoryLinkRepository>,
    generator: Arc<dyn TokenGenerator>,
) -> AppState {
    AppState::new(repo, generator, 5, BASE_URL, FALLBACK_URL)
}

pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repo = Arc::new(MemoryLinkRepository::new());
    let state = create_test_state_with(repo.clone(), Arc::new(RandomTokenGenerator::default()));
    (state, repo)
}

pub async fn create_test_link(repo: &MemoryLinkRepository, token: &str, destination: &str) {
    let outcome = repo
        .insert_if_absent(NewLink::new(token, destination))
        .await
        .unwrap();
    assert!(matches!(outcome, InsertOutcome::Inserted(_)));
}
