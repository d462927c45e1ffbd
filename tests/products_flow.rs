use axum_catalog_api::{
    error::AppError,
    notify::{self, StoreEvent},
    services::product_service,
    state::AppState,
    store::JsonStore,
};
use serde_json::json;
use tempfile::TempDir;

fn test_state(dir: &TempDir) -> AppState {
    let (events, _) = notify::channel();
    AppState {
        products: JsonStore::new(dir.path().join("products.json")),
        carts: JsonStore::new(dir.path().join("carts.json")),
        events,
    }
}

fn product_payload(code: &str) -> serde_json::Value {
    json!({
        "title": "A",
        "description": "d",
        "code": code,
        "price": 10,
        "stock": 5,
        "category": "c"
    })
}

#[tokio::test]
async fn ids_follow_the_maximum_plus_one_rule() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let state = test_state(&dir);

    let first = product_service::create_product(&state, product_payload("X1"))
        .await?
        .data
        .unwrap();
    assert_eq!(first.id, 1);

    let second = product_service::create_product(&state, product_payload("X2"))
        .await?
        .data
        .unwrap();
    assert_eq!(second.id, 2);

    // After deleting the current maximum, its id is handed out again.
    product_service::delete_product(&state, 2).await?;
    let third = product_service::create_product(&state, product_payload("X3"))
        .await?
        .data
        .unwrap();
    assert_eq!(third.id, 2);

    Ok(())
}

#[tokio::test]
async fn created_product_gets_defaults() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let state = test_state(&dir);

    let product = product_service::create_product(&state, product_payload("X1"))
        .await?
        .data
        .unwrap();

    assert_eq!(product.id, 1);
    assert!(product.status);
    assert!(product.thumbnails.is_empty());
    Ok(())
}

#[tokio::test]
async fn duplicate_code_is_rejected_and_collection_unchanged() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let state = test_state(&dir);

    product_service::create_product(&state, product_payload("X1")).await?;
    let err = product_service::create_product(&state, product_payload("X1"))
        .await
        .expect_err("duplicate code must conflict");
    assert!(matches!(err, AppError::Conflict(_)));

    let stored = state.products.load().await?;
    assert_eq!(stored.len(), 1);
    Ok(())
}

#[tokio::test]
async fn update_merges_partial_fields_and_ignores_id() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let state = test_state(&dir);

    product_service::create_product(&state, product_payload("X1")).await?;

    let updated = product_service::update_product(
        &state,
        1,
        json!({ "id": 999, "price": 99.5, "status": false }),
    )
    .await?
    .data
    .unwrap();

    assert_eq!(updated.id, 1);
    assert_eq!(updated.price, 99.5);
    assert!(!updated.status);
    assert_eq!(updated.title, "A");
    assert_eq!(updated.stock, 5);
    Ok(())
}

#[tokio::test]
async fn empty_update_leaves_the_record_alone() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let state = test_state(&dir);

    let created = product_service::create_product(&state, product_payload("X1"))
        .await?
        .data
        .unwrap();
    let updated = product_service::update_product(&state, 1, json!({}))
        .await?
        .data
        .unwrap();

    assert_eq!(created, updated);
    Ok(())
}

#[tokio::test]
async fn update_rejects_mistyped_numbers_and_alien_codes() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let state = test_state(&dir);

    product_service::create_product(&state, product_payload("X1")).await?;
    product_service::create_product(&state, product_payload("X2")).await?;

    let err = product_service::update_product(&state, 1, json!({ "stock": "many" }))
        .await
        .expect_err("string stock must be rejected");
    assert!(matches!(err, AppError::Validation(_)));

    let err = product_service::update_product(&state, 1, json!({ "code": "X2" }))
        .await
        .expect_err("stealing another product's code must conflict");
    assert!(matches!(err, AppError::Conflict(_)));

    Ok(())
}

#[tokio::test]
async fn delete_then_get_is_not_found() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let state = test_state(&dir);

    product_service::create_product(&state, product_payload("X1")).await?;
    let removed = product_service::delete_product(&state, 1).await?.data.unwrap();
    assert_eq!(removed.code, "X1");

    let err = product_service::get_product(&state, 1)
        .await
        .expect_err("deleted product must be gone");
    assert!(matches!(err, AppError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn list_respects_the_limit() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let state = test_state(&dir);

    for code in ["X1", "X2", "X3"] {
        product_service::create_product(&state, product_payload(code)).await?;
    }

    let all = product_service::list_products(&state, None).await?.data.unwrap();
    assert_eq!(all.items.len(), 3);

    let capped = product_service::list_products(&state, Some(2))
        .await?
        .data
        .unwrap();
    assert_eq!(capped.items.len(), 2);
    assert_eq!(capped.items[0].code, "X1");

    let err = product_service::list_products(&state, Some(0))
        .await
        .expect_err("non-positive limit must be rejected");
    assert!(matches!(err, AppError::Validation(_)));
    Ok(())
}

#[tokio::test]
async fn mutations_broadcast_the_full_collection() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let state = test_state(&dir);
    let mut events = state.events.subscribe();

    product_service::create_product(&state, product_payload("X1")).await?;
    match events.recv().await? {
        StoreEvent::ProductsChanged(products) => {
            assert_eq!(products.len(), 1);
            assert_eq!(products[0].code, "X1");
        }
    }

    product_service::delete_product(&state, 1).await?;
    match events.recv().await? {
        StoreEvent::ProductsChanged(products) => assert!(products.is_empty()),
    }

    Ok(())
}
