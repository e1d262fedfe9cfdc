//! Integration tests for the local property store.

use inmo_core::error::InmoError;
use inmo_core::models::property::{
    NewProperty, OperationType, PropertyPatch, PropertyStatus, PropertyType,
};
use inmo_core::repository::PropertyRepository;
use inmo_store::LocalPropertyRepository;
use uuid::Uuid;

fn casa_moderna() -> NewProperty {
    NewProperty {
        title: "Casa Moderna en Palermo".into(),
        description: "Hermosa casa moderna de 3 pisos con jardín y pileta".into(),
        price: 450000.0,
        currency: "USD".into(),
        location: "Palermo, Buenos Aires".into(),
        kind: PropertyType::Casa,
        operation: OperationType::Venta,
        bedrooms: Some(4),
        bathrooms: Some(3),
        area: Some(320.0),
        featured: true,
        status: PropertyStatus::Available,
        images: vec!["a.jpg".into(), "b.jpg".into()],
    }
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let repo = LocalPropertyRepository::new();

    let created = repo.create(casa_moderna()).await.unwrap();
    assert_eq!(created.images, vec!["a.jpg", "b.jpg"]);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = repo.get(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn list_returns_newest_first_with_insertion_tiebreak() {
    let repo = LocalPropertyRepository::new();

    let first = repo.create(casa_moderna()).await.unwrap();
    let second = repo.create(casa_moderna()).await.unwrap();

    let listed = repo.list().await.unwrap();
    assert_eq!(listed.len(), 2);
    // Even with identical timestamps the later insertion wins.
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
}

#[tokio::test]
async fn update_merges_only_patched_fields() {
    let repo = LocalPropertyRepository::new();
    let created = repo.create(casa_moderna()).await.unwrap();

    let updated = repo
        .update(
            created.id,
            PropertyPatch {
                status: Some(PropertyStatus::Sold),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, PropertyStatus::Sold);
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.images, created.images);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let fetched = repo.get(created.id).await.unwrap();
    assert_eq!(fetched.status, PropertyStatus::Sold);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let repo = LocalPropertyRepository::new();
    let created = repo.create(casa_moderna()).await.unwrap();

    repo.delete(created.id).await.unwrap();
    assert!(matches!(
        repo.get(created.id).await.unwrap_err(),
        InmoError::NotFound { .. }
    ));
}

#[tokio::test]
async fn delete_missing_id_is_not_found() {
    let repo = LocalPropertyRepository::new();
    assert!(matches!(
        repo.delete(Uuid::new_v4()).await.unwrap_err(),
        InmoError::NotFound { .. }
    ));
}

#[tokio::test]
async fn seeded_store_lists_demo_catalogue() {
    let repo = LocalPropertyRepository::with_seed();
    let listed = repo.list().await.unwrap();
    assert_eq!(listed.len(), 4);
    assert_eq!(listed[0].title, "Casa Moderna en Palermo");
    assert!(listed.iter().all(|p| !p.images.is_empty()));
}

#[tokio::test]
async fn reset_clears_every_listing() {
    let repo = LocalPropertyRepository::with_seed();
    repo.reset().await.unwrap();
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn snapshot_survives_a_restart() {
    let path = std::env::temp_dir().join(format!("inmo-store-test-{}.json", Uuid::new_v4()));

    let repo = LocalPropertyRepository::with_snapshot(path.clone())
        .await
        .unwrap();
    repo.reset().await.unwrap();
    let created = repo.create(casa_moderna()).await.unwrap();
    drop(repo);

    let reopened = LocalPropertyRepository::with_snapshot(path.clone())
        .await
        .unwrap();
    let fetched = reopened.get(created.id).await.unwrap();
    assert_eq!(fetched.title, created.title);
    assert_eq!(fetched.images, created.images);

    let _ = std::fs::remove_file(path);
}
