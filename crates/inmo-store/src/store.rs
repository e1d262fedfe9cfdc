//! Local implementation of [`PropertyRepository`].
//!
//! An explicitly constructed, injected state container: listings live
//! in memory behind an async lock, optionally snapshotted to a JSON
//! file after every write. This backend is independent of the remote
//! one — the two are alternates selected at startup, never
//! reconciled.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use inmo_core::error::{InmoError, InmoResult};
use inmo_core::models::property::{NewProperty, Property, PropertyPatch};
use inmo_core::repository::PropertyRepository;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::seed::demo_listings;

/// Local property repository. Cloning shares the same underlying
/// collection.
#[derive(Clone)]
pub struct LocalPropertyRepository {
    // Newest-first: creates prepend, so insertion order doubles as the
    // tie-breaker for equal timestamps.
    items: Arc<RwLock<Vec<Property>>>,
    snapshot: Option<PathBuf>,
}

impl LocalPropertyRepository {
    /// Empty store with no persistence.
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
            snapshot: None,
        }
    }

    /// Store preloaded with the demo listings, no persistence.
    pub fn with_seed() -> Self {
        Self {
            items: Arc::new(RwLock::new(demo_listings())),
            snapshot: None,
        }
    }

    /// Store persisted to `path`. Loads an existing snapshot when the
    /// file is present, otherwise starts from the demo listings. Every
    /// write rewrites the snapshot.
    pub async fn with_snapshot(path: PathBuf) -> InmoResult<Self> {
        let items = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<Vec<Property>>(&bytes).map_err(|e| {
                InmoError::Decode {
                    context: format!("snapshot {}: {e}", path.display()),
                }
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "No snapshot found, seeding demo listings");
                demo_listings()
            }
            Err(e) => {
                return Err(InmoError::Database(format!(
                    "reading snapshot {}: {e}",
                    path.display()
                )));
            }
        };

        Ok(Self {
            items: Arc::new(RwLock::new(items)),
            snapshot: Some(path),
        })
    }

    /// Clear every listing. Test lifecycle hook; also rewrites the
    /// snapshot when one is configured.
    pub async fn reset(&self) -> InmoResult<()> {
        let mut items = self.items.write().await;
        items.clear();
        self.persist(&items).await
    }

    async fn persist(&self, items: &[Property]) -> InmoResult<()> {
        let Some(path) = &self.snapshot else {
            return Ok(());
        };
        let bytes = serde_json::to_vec_pretty(items)
            .map_err(|e| InmoError::Internal(format!("serializing snapshot: {e}")))?;
        tokio::fs::write(path, bytes).await.map_err(|e| {
            InmoError::Database(format!("writing snapshot {}: {e}", path.display()))
        })
    }
}

impl Default for LocalPropertyRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyRepository for LocalPropertyRepository {
    async fn list(&self) -> InmoResult<Vec<Property>> {
        let items = self.items.read().await;
        let mut listed = items.clone();
        // Stable sort: equal timestamps keep the newest-first
        // insertion order.
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }

    async fn get(&self, id: Uuid) -> InmoResult<Property> {
        let items = self.items.read().await;
        items
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, input: NewProperty) -> InmoResult<Property> {
        let now = Utc::now();
        let property = Property {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            price: input.price,
            currency: input.currency,
            location: input.location,
            kind: input.kind,
            operation: input.operation,
            bedrooms: input.bedrooms,
            bathrooms: input.bathrooms,
            area: input.area,
            featured: input.featured,
            status: input.status,
            images: input.images,
            created_at: now,
            updated_at: now,
        };

        let mut items = self.items.write().await;
        items.insert(0, property.clone());
        self.persist(&items).await?;
        Ok(property)
    }

    async fn update(&self, id: Uuid, patch: PropertyPatch) -> InmoResult<Property> {
        let mut items = self.items.write().await;
        let Some(property) = items.iter_mut().find(|p| p.id == id) else {
            return Err(not_found(id));
        };
        patch.apply_to(property, Utc::now());
        let updated = property.clone();
        self.persist(&items).await?;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> InmoResult<()> {
        let mut items = self.items.write().await;
        let Some(position) = items.iter().position(|p| p.id == id) else {
            return Err(not_found(id));
        };
        items.remove(position);
        self.persist(&items).await?;
        Ok(())
    }
}

fn not_found(id: Uuid) -> InmoError {
    InmoError::NotFound {
        entity: "property".into(),
        id: id.to_string(),
    }
}
