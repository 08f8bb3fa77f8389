//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{Resolver, ShortenService};
use crate::domain::repositories::LinkRepository;
use crate::utils::token_generator::TokenGenerator;

/// Shortening service over type-erased store and generator.
pub type DynShortenService = ShortenService<dyn LinkRepository, dyn TokenGenerator>;

/// Resolver over a type-erased store.
pub type DynResolver = Resolver<dyn LinkRepository>;

/// Handler state. Cloning is cheap: every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<DynShortenService>,
    pub resolver: Arc<DynResolver>,
    pub link_repository: Arc<dyn LinkRepository>,
    /// Public prefix used to build `short_url` values.
    pub base_url: Arc<str>,
    /// Where unknown tokens are redirected.
    pub fallback_url: Arc<str>,
}

impl AppState {
    /// Wires services around one explicitly constructed store handle.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        token_generator: Arc<dyn TokenGenerator>,
        max_attempts: usize,
        base_url: &str,
        fallback_url: &str,
    ) -> Self {
        let shorten_service = Arc::new(
            ShortenService::new(link_repository.clone(), token_generator)
                .with_max_attempts(max_attempts),
        );
        let resolver = Arc::new(Resolver::new(link_repository.clone()));

        Self {
            shorten_service,
            resolver,
            link_repository,
            base_url: base_url.trim_end_matches('/').into(),
            fallback_url: fallback_url.into(),
        }
    }

    /// Builds the public short URL for a token.
    pub fn short_url(&self, token: &str) -> String {
        format!("{}/{}", self.base_url, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::MemoryLinkRepository;
    use crate::utils::token_generator::RandomTokenGenerator;

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let state = AppState::new(
            Arc::new(MemoryLinkRepository::new()),
            Arc::new(RandomTokenGenerator::default()),
            5,
            "https://s.example.com/",
            "https://example.com",
        );

        assert_eq!(state.short_url("ab3_x"), "https://s.example.com/ab3_x");
        assert_eq!(&*state.fallback_url, "https://example.com");
        assert_eq!(state.shorten_service.max_attempts(), 5);
    }
}
