mod common;

use rand::rngs::StdRng;
use rand::SeedableRng;
use user_directory::services::seed_service::{
    generate_users, SeedOutcome, DEPARTMENTS, SEED_USER_COUNT,
};

#[test]
fn generated_users_respect_field_constraints() {
    let mut rng = StdRng::seed_from_u64(7);
    let users = generate_users(&mut rng, 500).expect("generate");
    assert_eq!(users.len(), 500);

    for user in &users {
        assert!(DEPARTMENTS.contains(&user.department.as_str()));
        assert!((30_000.0..=120_000.0).contains(&user.salary), "salary {}", user.salary);
        let cents = user.salary * 100.0;
        assert!((cents - cents.round()).abs() < 1e-6, "salary {} has more than 2 decimals", user.salary);
        assert!(!user.first_name.is_empty());
        assert!(!user.last_name.is_empty());
        assert!(user.email.contains('@'));
        assert!(!user.company.is_empty());
        assert!(!user.phone.is_empty());
    }
}

#[test]
fn same_seed_generates_same_users() {
    let first = generate_users(&mut StdRng::seed_from_u64(42), 10).expect("generate");
    let second = generate_users(&mut StdRng::seed_from_u64(42), 10).expect("generate");
    assert_eq!(first, second);
}

#[tokio::test]
async fn seeding_empty_store_inserts_one_hundred_users() {
    let state = common::setup_state().await;
    assert_eq!(state.user_service.count().await.expect("count"), 0);

    let outcome = state.seed_service.ensure_seeded().await.expect("seed");
    assert_eq!(outcome, SeedOutcome::Applied { inserted: SEED_USER_COUNT });
    assert_eq!(state.user_service.count().await.expect("count"), 100);

    let users = state.user_service.fetch_all().await.expect("fetch");
    let mut ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 100);
    assert!(users.windows(2).all(|pair| pair[0].id < pair[1].id));
}

#[tokio::test]
async fn seeding_is_idempotent() {
    let state = common::setup_state().await;
    state.seed_service.ensure_seeded().await.expect("first seed");

    let outcome = state.seed_service.ensure_seeded().await.expect("second seed");
    assert_eq!(outcome, SeedOutcome::AlreadySeeded { existing: 100 });
    assert_eq!(state.user_service.count().await.expect("count"), 100);
}

#[tokio::test]
async fn concurrent_seeding_inserts_once() {
    let state = common::setup_state().await;

    let (a, b) = tokio::join!(
        state.seed_service.ensure_seeded(),
        state.seed_service.ensure_seeded()
    );
    a.expect("seed a");
    b.expect("seed b");
    assert_eq!(state.user_service.count().await.expect("count"), 100);
}

#[tokio::test]
async fn seeding_skips_store_with_existing_records() {
    let state = common::setup_state().await;
    state
        .user_service
        .insert(&common::new_user("Solo", "Lonely LLC", 42_000.0))
        .await
        .expect("insert");

    let outcome = state.seed_service.ensure_seeded().await.expect("seed");
    assert_eq!(outcome, SeedOutcome::AlreadySeeded { existing: 1 });
    assert_eq!(state.user_service.count().await.expect("count"), 1);
}

#[tokio::test]
async fn insert_assigns_increasing_ids() {
    let state = common::setup_state().await;
    let first = state
        .user_service
        .insert(&common::new_user("Ann", "Acme", 31_000.5))
        .await
        .expect("insert");
    let stored = state
        .user_service
        .insert_batch(&[
            common::new_user("Ben", "Globex", 32_000.0),
            common::new_user("Cid", "Initech", 33_000.0),
        ])
        .await
        .expect("batch");

    assert_eq!(first.first_name, "Ann");
    assert_eq!(first.salary, 31_000.5);
    assert_eq!(stored.len(), 2);
    assert!(first.id < stored[0].id && stored[0].id < stored[1].id);
    assert_eq!(state.user_service.count().await.expect("count"), 3);
}

#[tokio::test]
async fn failed_batch_leaves_store_untouched() {
    let state = common::setup_state().await;

    let result = state
        .user_service
        .insert_batch(&[
            common::new_user("Ok", "Acme", 1.0),
            common::new_user("Bad", "Globex", -5.0),
        ])
        .await;

    assert!(result.is_err());
    assert_eq!(state.user_service.count().await.expect("count"), 0);
}

#[tokio::test]
async fn populated_store_skips_database_on_later_checks() {
    let state = common::setup_state().await;
    state.seed_service.ensure_seeded().await.expect("seed");

    state.pool.close().await;

    let outcome = state
        .seed_service
        .ensure_seeded()
        .await
        .expect("cached seed check");
    assert_eq!(outcome, SeedOutcome::AlreadySeeded { existing: 100 });
}
