//! SurrealDB implementation of [`PropertyRepository`].
//!
//! The `images` column is serialized text; [`crate::images`] runs at
//! the read/write boundary here so callers only ever see the ordered
//! URL list. Listing order is `created_at` descending.

use inmo_core::error::InmoResult;
use inmo_core::models::property::{
    NewProperty, OperationType, Property, PropertyPatch, PropertyStatus, PropertyType,
};
use inmo_core::repository::PropertyRepository;
use serde::Deserialize;
use surrealdb::sql::Datetime;
use surrealdb::{Connection, Surreal};
use uuid::Uuid;

use crate::error::DbError;
use crate::images::{decode_images, encode_images};

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, Deserialize)]
struct PropertyRow {
    title: String,
    description: String,
    price: f64,
    currency: String,
    location: String,
    kind: String,
    operation: String,
    bedrooms: Option<u32>,
    bathrooms: Option<u32>,
    area: Option<f64>,
    featured: bool,
    status: String,
    images: String,
    created_at: Datetime,
    updated_at: Datetime,
}

/// DB-side row struct that includes the record ID via `record::id(id)`.
#[derive(Debug, Deserialize)]
struct PropertyRowWithId {
    record_id: String,
    title: String,
    description: String,
    price: f64,
    currency: String,
    location: String,
    kind: String,
    operation: String,
    bedrooms: Option<u32>,
    bathrooms: Option<u32>,
    area: Option<f64>,
    featured: bool,
    status: String,
    images: String,
    created_at: Datetime,
    updated_at: Datetime,
}

/// Row struct for existence checks.
#[derive(Debug, Deserialize)]
struct IdRow {
    #[allow(dead_code)]
    record_id: String,
}

fn parse_kind(s: &str, id: Uuid) -> Result<PropertyType, DbError> {
    PropertyType::from_wire(s)
        .ok_or_else(|| DbError::Decode(format!("property {id}: unknown type '{s}'")))
}

fn parse_operation(s: &str, id: Uuid) -> Result<OperationType, DbError> {
    OperationType::from_wire(s)
        .ok_or_else(|| DbError::Decode(format!("property {id}: unknown operation '{s}'")))
}

fn parse_status(s: &str, id: Uuid) -> Result<PropertyStatus, DbError> {
    PropertyStatus::from_wire(s)
        .ok_or_else(|| DbError::Decode(format!("property {id}: unknown status '{s}'")))
}

impl PropertyRow {
    fn into_property(self, id: Uuid) -> Result<Property, DbError> {
        let images = decode_images(&self.images)
            .map_err(|e| DbError::Decode(format!("property {id}: {e}")))?;
        Ok(Property {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            currency: self.currency,
            location: self.location,
            kind: parse_kind(&self.kind, id)?,
            operation: parse_operation(&self.operation, id)?,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area: self.area,
            featured: self.featured,
            status: parse_status(&self.status, id)?,
            images,
            created_at: self.created_at.0,
            updated_at: self.updated_at.0,
        })
    }
}

impl PropertyRowWithId {
    fn try_into_property(self) -> Result<Property, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Decode(format!("invalid property UUID: {e}")))?;
        let row = PropertyRow {
            title: self.title,
            description: self.description,
            price: self.price,
            currency: self.currency,
            location: self.location,
            kind: self.kind,
            operation: self.operation,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area: self.area,
            featured: self.featured,
            status: self.status,
            images: self.images,
            created_at: self.created_at,
            updated_at: self.updated_at,
        };
        row.into_property(id)
    }
}

/// SurrealDB implementation of the Property repository.
#[derive(Clone)]
pub struct SurrealPropertyRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealPropertyRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> PropertyRepository for SurrealPropertyRepository<C> {
    async fn list(&self) -> InmoResult<Vec<Property>> {
        let mut result = self
            .db
            .query(
                "SELECT record::id(id) AS record_id, * OMIT id \
                 FROM property \
                 ORDER BY created_at DESC",
            )
            .await
            .map_err(DbError::from)?;

        let rows: Vec<PropertyRowWithId> = result.take(0).map_err(DbError::from)?;

        let items = rows
            .into_iter()
            .map(|row| row.try_into_property())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(items)
    }

    async fn get(&self, id: Uuid) -> InmoResult<Property> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * OMIT id FROM type::thing('property', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<PropertyRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "property".into(),
            id: id_str,
        })?;

        Ok(row.into_property(id)?)
    }

    async fn create(&self, input: NewProperty) -> InmoResult<Property> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let images = encode_images(&input.images)?;

        let mut sets = vec![
            "title = $title",
            "description = $description",
            "price = $price",
            "currency = $currency",
            "location = $location",
            "kind = $kind",
            "operation = $operation",
            "featured = $featured",
            "status = $status",
            "images = $images",
        ];
        if input.bedrooms.is_some() {
            sets.push("bedrooms = $bedrooms");
        }
        if input.bathrooms.is_some() {
            sets.push("bathrooms = $bathrooms");
        }
        if input.area.is_some() {
            sets.push("area = $area");
        }

        let query = format!(
            "CREATE type::thing('property', $id) SET {}",
            sets.join(", ")
        );

        let mut builder = self
            .db
            .query(query)
            .bind(("id", id_str.clone()))
            .bind(("title", input.title))
            .bind(("description", input.description))
            .bind(("price", input.price))
            .bind(("currency", input.currency))
            .bind(("location", input.location))
            .bind(("kind", input.kind.as_wire()))
            .bind(("operation", input.operation.as_wire()))
            .bind(("featured", input.featured))
            .bind(("status", input.status.as_wire()))
            .bind(("images", images));

        if let Some(bedrooms) = input.bedrooms {
            builder = builder.bind(("bedrooms", bedrooms));
        }
        if let Some(bathrooms) = input.bathrooms {
            builder = builder.bind(("bathrooms", bathrooms));
        }
        if let Some(area) = input.area {
            builder = builder.bind(("area", area));
        }

        let result = builder.await.map_err(DbError::from)?;
        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<PropertyRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "property".into(),
            id: id_str,
        })?;

        Ok(row.into_property(id)?)
    }

    async fn update(&self, id: Uuid, patch: PropertyPatch) -> InmoResult<Property> {
        let id_str = id.to_string();

        let images = match &patch.images {
            Some(list) => Some(encode_images(list)?),
            None => None,
        };

        let mut sets = Vec::new();
        if patch.title.is_some() {
            sets.push("title = $title");
        }
        if patch.description.is_some() {
            sets.push("description = $description");
        }
        if patch.price.is_some() {
            sets.push("price = $price");
        }
        if patch.currency.is_some() {
            sets.push("currency = $currency");
        }
        if patch.location.is_some() {
            sets.push("location = $location");
        }
        if patch.kind.is_some() {
            sets.push("kind = $kind");
        }
        if patch.operation.is_some() {
            sets.push("operation = $operation");
        }
        if patch.bedrooms.is_some() {
            sets.push("bedrooms = $bedrooms");
        }
        if patch.bathrooms.is_some() {
            sets.push("bathrooms = $bathrooms");
        }
        if patch.area.is_some() {
            sets.push("area = $area");
        }
        if patch.featured.is_some() {
            sets.push("featured = $featured");
        }
        if patch.status.is_some() {
            sets.push("status = $status");
        }
        if images.is_some() {
            sets.push("images = $images");
        }
        sets.push("updated_at = time::now()");

        let query = format!(
            "UPDATE type::thing('property', $id) SET {}",
            sets.join(", ")
        );

        let mut builder = self.db.query(query).bind(("id", id_str.clone()));

        if let Some(title) = patch.title {
            builder = builder.bind(("title", title));
        }
        if let Some(description) = patch.description {
            builder = builder.bind(("description", description));
        }
        if let Some(price) = patch.price {
            builder = builder.bind(("price", price));
        }
        if let Some(currency) = patch.currency {
            builder = builder.bind(("currency", currency));
        }
        if let Some(location) = patch.location {
            builder = builder.bind(("location", location));
        }
        if let Some(kind) = patch.kind {
            builder = builder.bind(("kind", kind.as_wire()));
        }
        if let Some(operation) = patch.operation {
            builder = builder.bind(("operation", operation.as_wire()));
        }
        if let Some(bedrooms) = patch.bedrooms {
            builder = builder.bind(("bedrooms", bedrooms));
        }
        if let Some(bathrooms) = patch.bathrooms {
            builder = builder.bind(("bathrooms", bathrooms));
        }
        if let Some(area) = patch.area {
            builder = builder.bind(("area", area));
        }
        if let Some(featured) = patch.featured {
            builder = builder.bind(("featured", featured));
        }
        if let Some(status) = patch.status {
            builder = builder.bind(("status", status.as_wire()));
        }
        if let Some(images) = images {
            builder = builder.bind(("images", images));
        }

        let result = builder.await.map_err(DbError::from)?;
        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<PropertyRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "property".into(),
            id: id_str,
        })?;

        Ok(row.into_property(id)?)
    }

    async fn delete(&self, id: Uuid) -> InmoResult<()> {
        let id_str = id.to_string();

        // Existence check and delete run in one request so a missing
        // id is reported distinctly, never a silent no-op.
        let mut result = self
            .db
            .query("SELECT record::id(id) AS record_id FROM type::thing('property', $id)")
            .query("DELETE type::thing('property', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<IdRow> = result.take(0).map_err(DbError::from)?;
        if rows.is_empty() {
            return Err(DbError::NotFound {
                entity: "property".into(),
                id: id_str,
            }
            .into());
        }

        Ok(())
    }
}
