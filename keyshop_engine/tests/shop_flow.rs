//! Integration tests for the catalogue and order flow, run against per-test throwaway SQLite databases.
use keyshop_engine::{
    db_types::{NewUser, OrderStatusType},
    CatalogApi,
    CatalogError,
    OrderFlowApi,
    OrderFlowError,
    UserApi,
};
use ks_common::Sats;

mod support;
use support::{fetch_user, mark_key_sold, prepare_test_env, random_db_path};

#[tokio::test]
async fn catalog_lists_only_unsold_keys() {
    let db = prepare_test_env(&random_db_path()).await;
    let catalog = CatalogApi::new(db.clone());
    catalog.add_key("Diablo IV|DDDD-1111|0.01").await.unwrap();
    let starfield = catalog.add_key("Starfield|SSSS-2222|0.005").await.unwrap();
    mark_key_sold(starfield.id, &db).await;

    let keys = catalog.available_keys().await.unwrap();
    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0].game, "Diablo IV");
    assert!(!keys[0].sold);
}

#[tokio::test]
async fn reserving_a_missing_key_is_unavailable() {
    let db = prepare_test_env(&random_db_path()).await;
    let orders = OrderFlowApi::new(db);
    let err = orders.reserve_key(999, 42).await.unwrap_err();
    assert!(matches!(err, OrderFlowError::KeyUnavailable));
    assert!(orders.fetch_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn reserving_a_sold_key_is_unavailable() {
    let db = prepare_test_env(&random_db_path()).await;
    let catalog = CatalogApi::new(db.clone());
    let orders = OrderFlowApi::new(db.clone());
    let key = catalog.add_key("Cyberpunk|ABCD-1234|0.002").await.unwrap();
    mark_key_sold(key.id, &db).await;

    let err = orders.reserve_key(key.id, 42).await.unwrap_err();
    assert!(matches!(err, OrderFlowError::KeyUnavailable));
    assert!(orders.fetch_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn reserving_an_unsold_key_creates_a_pending_order() {
    let db = prepare_test_env(&random_db_path()).await;
    let catalog = CatalogApi::new(db.clone());
    let orders = OrderFlowApi::new(db);
    let key = catalog.add_key("Diablo IV|DDDD-1111|0.01").await.unwrap();

    let order = orders.reserve_key(key.id, 42).await.unwrap();
    assert_eq!(order.customer_id, 42);
    assert_eq!(order.key_id, key.id);
    assert_eq!(order.total_price, Sats::from(1_000_000));
    assert_eq!(order.status, OrderStatusType::Pending);

    let all = orders.fetch_orders().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, order.id);
}

// There is no conditional write guarding a reservation, so concurrent buyers race freely. This pins down the
// behaviour as it stands: the second reservation succeeds rather than failing.
#[tokio::test]
async fn the_same_key_can_be_reserved_twice() {
    let db = prepare_test_env(&random_db_path()).await;
    let catalog = CatalogApi::new(db.clone());
    let orders = OrderFlowApi::new(db);
    let key = catalog.add_key("Cyberpunk|ABCD-1234|0.002").await.unwrap();

    let first = orders.reserve_key(key.id, 42).await.unwrap();
    let second = orders.reserve_key(key.id, 43).await.unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(orders.fetch_orders().await.unwrap().len(), 2);

    // The key also stays in the catalogue, since nothing flipped the sold flag.
    let keys = catalog.available_keys().await.unwrap();
    assert_eq!(keys.len(), 1);
}

#[tokio::test]
async fn adding_a_key_stores_the_exact_price() {
    let db = prepare_test_env(&random_db_path()).await;
    let catalog = CatalogApi::new(db);
    let key = catalog.add_key("Cyberpunk|ABCD-1234|0.002").await.unwrap();
    assert_eq!(key.price, Sats::from(200_000));
    assert!(!key.sold);
    assert_eq!(key.code, "ABCD-1234");
}

#[tokio::test]
async fn a_malformed_listing_writes_nothing() {
    let db = prepare_test_env(&random_db_path()).await;
    let catalog = CatalogApi::new(db);

    let err = catalog.add_key("badformat").await.unwrap_err();
    assert!(matches!(err, CatalogError::InvalidKeySpec(_)));
    let err = catalog.add_key("Game|Key|not-a-price").await.unwrap_err();
    assert!(matches!(err, CatalogError::InvalidKeySpec(_)));

    assert!(catalog.available_keys().await.unwrap().is_empty());
}

#[tokio::test]
async fn re_registering_a_user_keeps_the_first_profile() {
    let db = prepare_test_env(&random_db_path()).await;
    let users = UserApi::new(db.clone());

    let original = NewUser::new(42).with_username("alice".to_string()).with_first_name("Alice".to_string());
    users.register_user(original).await.unwrap();
    let imposter = NewUser::new(42).with_first_name("Mallory".to_string());
    users.register_user(imposter).await.unwrap();

    let stored = fetch_user(42, &db).await.unwrap();
    assert_eq!(stored.username.as_deref(), Some("alice"));
    assert_eq!(stored.first_name.as_deref(), Some("Alice"));
}
