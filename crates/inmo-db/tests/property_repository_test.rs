//! Integration tests for the property repository using in-memory
//! SurrealDB.

use inmo_core::error::InmoError;
use inmo_core::models::property::{
    NewProperty, OperationType, PropertyPatch, PropertyStatus, PropertyType,
};
use inmo_core::repository::PropertyRepository;
use inmo_db::SurrealPropertyRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use uuid::Uuid;

/// Helper: spin up in-memory DB and run migrations.
async fn setup() -> SurrealPropertyRepository<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    inmo_db::run_migrations(&db).await.unwrap();
    SurrealPropertyRepository::new(db)
}

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

fn local_microcentro() -> NewProperty {
    NewProperty {
        title: "Local Comercial en Microcentro".into(),
        description: "Local a la calle en excelente ubicación comercial".into(),
        price: 2500.0,
        currency: "USD".into(),
        location: "Microcentro, Buenos Aires".into(),
        kind: PropertyType::Local,
        operation: OperationType::Alquiler,
        bedrooms: None,
        bathrooms: None,
        area: Some(120.0),
        featured: false,
        status: PropertyStatus::Available,
        images: vec!["c.jpg".into()],
    }
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let repo = setup().await;

    let created = repo.create(casa_moderna()).await.unwrap();
    assert_eq!(created.title, "Casa Moderna en Palermo");
    assert_eq!(created.price, 450000.0);
    assert_eq!(created.kind, PropertyType::Casa);
    assert_eq!(created.operation, OperationType::Venta);
    assert_eq!(created.bedrooms, Some(4));
    // The stored text column decodes back to the original ordered list.
    assert_eq!(created.images, vec!["a.jpg", "b.jpg"]);

    let fetched = repo.get(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn optional_fields_may_be_absent() {
    let repo = setup().await;

    let created = repo.create(local_microcentro()).await.unwrap();
    assert_eq!(created.bedrooms, None);
    assert_eq!(created.bathrooms, None);
    assert_eq!(created.area, Some(120.0));

    let fetched = repo.get(created.id).await.unwrap();
    assert_eq!(fetched.bedrooms, None);
}

#[tokio::test]
async fn list_returns_newest_first() {
    let repo = setup().await;

    let older = repo.create(local_microcentro()).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let newer = repo.create(casa_moderna()).await.unwrap();

    let listed = repo.list().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, newer.id);
    assert_eq!(listed[0].title, "Casa Moderna en Palermo");
    assert_eq!(listed[0].images, vec!["a.jpg", "b.jpg"]);
    assert_eq!(listed[1].id, older.id);
}

#[tokio::test]
async fn get_missing_id_is_not_found() {
    let repo = setup().await;
    let err = repo.get(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, InmoError::NotFound { .. }));
}

#[tokio::test]
async fn update_merges_only_patched_fields() {
    let repo = setup().await;
    let created = repo.create(casa_moderna()).await.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
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
    assert_eq!(updated.price, created.price);
    assert_eq!(updated.images, created.images);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    // Per-id read-your-writes: the update is visible to a later get.
    let fetched = repo.get(created.id).await.unwrap();
    assert_eq!(fetched.status, PropertyStatus::Sold);
}

#[tokio::test]
async fn update_can_replace_images() {
    let repo = setup().await;
    let created = repo.create(casa_moderna()).await.unwrap();

    let updated = repo
        .update(
            created.id,
            PropertyPatch {
                images: Some(vec!["nuevo.jpg".into()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.images, vec!["nuevo.jpg"]);
}

#[tokio::test]
async fn update_missing_id_is_not_found() {
    let repo = setup().await;
    let err = repo
        .update(
            Uuid::new_v4(),
            PropertyPatch {
                featured: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, InmoError::NotFound { .. }));
}

#[tokio::test]
async fn delete_removes_the_record() {
    let repo = setup().await;
    let created = repo.create(casa_moderna()).await.unwrap();

    repo.delete(created.id).await.unwrap();

    let err = repo.get(created.id).await.unwrap_err();
    assert!(matches!(err, InmoError::NotFound { .. }));
}

#[tokio::test]
async fn delete_missing_id_is_not_found() {
    let repo = setup().await;
    let err = repo.delete(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, InmoError::NotFound { .. }));
}
