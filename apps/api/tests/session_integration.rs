//! Integration tests for the session repository
//!
//! These tests run whole user flows through the repository the way the
//! HTTP handlers do, and check that operations are serialized.

use std::sync::Arc;

use team_divider_api::domain::repositories::SessionRepository;
use team_divider_api::domain::roster::RosterError;
use team_divider_api::infrastructure::repositories::InMemorySessionRepository;

#[tokio::test]
async fn test_full_flow_enter_edit_divide_clear() {
    let repo = InMemorySessionRepository::new();

    {
        let mut session = repo.acquire().await;
        for (name, rating) in [("Ann", 5), ("Ben", 4), ("Cat", 3), ("Dan", 2)] {
            session.submit_player(name, rating).unwrap();
        }

        // Fix a typo through the edit flow
        session.edit_player(2).unwrap();
        session.submit_player("Cath", 3).unwrap();

        let split = session.divide_teams();
        assert_eq!(split.sum_a(), split.sum_b());
    }

    let snapshot = repo.snapshot().await;
    let team_a: Vec<&str> = snapshot
        .teams()
        .team_a()
        .iter()
        .map(|p| p.name().as_str())
        .collect();
    let team_b: Vec<&str> = snapshot
        .teams()
        .team_b()
        .iter()
        .map(|p| p.name().as_str())
        .collect();
    assert_eq!(team_a, vec!["Ann", "Dan"]);
    assert_eq!(team_b, vec!["Ben", "Cath"]);

    repo.acquire().await.clear_players();

    let snapshot = repo.snapshot().await;
    assert!(snapshot.roster().is_empty());
    assert!(snapshot.teams().is_empty());
}

#[tokio::test]
async fn test_add_while_editing_is_rejected() {
    let repo = InMemorySessionRepository::new();
    let mut session = repo.acquire().await;

    session.submit_player("Ann", 5).unwrap();
    session.edit_player(0).unwrap();

    let mut roster = session.roster().clone();
    assert_eq!(roster.add_player("Ben", 4), Err(RosterError::EditInProgress));
    assert_eq!(roster.len(), 1);
}

#[tokio::test]
async fn test_concurrent_submissions_are_serialized() {
    let repo = Arc::new(InMemorySessionRepository::new());

    let mut handles = Vec::new();
    for i in 0..20 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            let mut session = repo.acquire().await;
            session
                .submit_player(&format!("Player {}", i), (i % 5) + 1)
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let snapshot = repo.snapshot().await;
    assert_eq!(snapshot.roster().len(), 20);
    assert_eq!(snapshot.roster().total_rating(), 60);
}

#[tokio::test]
async fn test_repository_as_trait_object() {
    let repo: Arc<dyn SessionRepository> = Arc::new(InMemorySessionRepository::new());

    repo.acquire()
        .await
        .submit_player("Trait", 3)
        .unwrap();

    assert_eq!(repo.snapshot().await.roster().len(), 1);
}
