mod common;

use std::collections::HashSet;
use std::sync::Arc;

use link_shortener::application::services::{Resolution, Resolver, ShortenService};
use link_shortener::domain::errors::ShortenError;
use link_shortener::infrastructure::persistence::MemoryLinkRepository;
use link_shortener::utils::token_generator::RandomTokenGenerator;

use common::{FixedTokenGenerator, ScriptedTokenGenerator};

fn random_service(
    repo: Arc<MemoryLinkRepository>,
) -> ShortenService<MemoryLinkRepository, RandomTokenGenerator> {
    ShortenService::new(repo, Arc::new(RandomTokenGenerator::default()))
}

#[tokio::test]
async fn test_generated_tokens_are_unique() {
    let repo = Arc::new(MemoryLinkRepository::new());
    let service = random_service(repo.clone());

    let mut tokens = HashSet::new();
    for i in 0..200 {
        let link = service
            .shorten(format!("https://example.com/{i}"), None)
            .await
            .unwrap();
        assert!(tokens.insert(link.token));
    }

    assert_eq!(repo.len(), 200);
}

#[tokio::test]
async fn test_round_trip_returns_destination_byte_for_byte() {
    let repo = Arc::new(MemoryLinkRepository::new());
    let service = random_service(repo.clone());
    let resolver = Resolver::new(repo);

    for destination in [
        "https://example.com",
        "https://EXAMPLE.com:443/Path/?q=a%20b&x=1#frag",
        "http://127.0.0.1:8080/a/../b",
    ] {
        let link = service.shorten(destination.to_string(), None).await.unwrap();

        assert_eq!(
            resolver.resolve(&link.token).await.unwrap(),
            Resolution::Found {
                destination: destination.to_string()
            }
        );
    }
}

#[tokio::test]
async fn test_taken_suggested_token_leaves_store_unchanged() {
    let repo = Arc::new(MemoryLinkRepository::new());
    let service = random_service(repo.clone());
    let resolver = Resolver::new(repo.clone());

    service
        .shorten("https://first.example".to_string(), Some("promo".to_string()))
        .await
        .unwrap();

    let err = service
        .shorten("https://second.example".to_string(), Some("promo".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, ShortenError::TokenTaken { .. }));
    assert_eq!(repo.len(), 1);
    assert_eq!(
        resolver.resolve("promo").await.unwrap(),
        Resolution::Found {
            destination: "https://first.example".to_string()
        }
    );
}

#[tokio::test]
async fn test_invalid_destination_creates_nothing() {
    let repo = Arc::new(MemoryLinkRepository::new());
    let service = random_service(repo.clone());

    let err = service
        .shorten("not-a-url".to_string(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ShortenError::InvalidDestination { .. }));
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_unknown_token_is_not_found() {
    let resolver = Resolver::new(Arc::new(MemoryLinkRepository::new()));

    assert_eq!(
        resolver.resolve("doesnotexist").await.unwrap(),
        Resolution::NotFound
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_suggested_token_has_single_winner() {
    const N: usize = 32;

    let repo = Arc::new(MemoryLinkRepository::new());
    let service = Arc::new(random_service(repo.clone()));

    let handles: Vec<_> = (0..N)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .shorten(format!("https://example.com/{i}"), Some("race".to_string()))
                    .await
            })
        })
        .collect();

    let mut successes = 0;
    let mut taken = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(link) => {
                assert_eq!(link.token, "race");
                successes += 1;
            }
            Err(ShortenError::TokenTaken { .. }) => taken += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(taken, N - 1);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_generation_exhausted_when_generator_only_collides() {
    let repo = Arc::new(MemoryLinkRepository::new());
    common::create_test_link(&repo, "taken", "https://example.com").await;

    let generator = Arc::new(FixedTokenGenerator("taken"));
    let service = ShortenService::new(repo.clone(), generator).with_max_attempts(5);

    let err = service
        .shorten("https://other.example".to_string(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ShortenError::GenerationExhausted { attempts: 5 }));
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_generated_collision_is_retried() {
    let repo = Arc::new(MemoryLinkRepository::new());
    common::create_test_link(&repo, "aaaaa", "https://example.com").await;
    common::create_test_link(&repo, "bbbbb", "https://example.com").await;

    let generator = Arc::new(ScriptedTokenGenerator::new(vec!["aaaaa", "bbbbb", "ccccc"]));
    let service = ShortenService::new(repo.clone(), generator.clone());

    let link = service
        .shorten("https://other.example".to_string(), None)
        .await
        .unwrap();

    assert_eq!(link.token, "ccccc");
    assert_eq!(generator.calls(), 3);
    assert_eq!(repo.len(), 3);
}
