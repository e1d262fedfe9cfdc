//! Property listing domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of real estate on offer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum PropertyType {
    Casa,
    Depto,
    Lote,
    Local,
    Otro,
}

impl PropertyType {
    pub fn as_wire(&self) -> &'static str {
        match self {
            PropertyType::Casa => "CASA",
            PropertyType::Depto => "DEPTO",
            PropertyType::Lote => "LOTE",
            PropertyType::Local => "LOCAL",
            PropertyType::Otro => "OTRO",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "CASA" => Some(PropertyType::Casa),
            "DEPTO" => Some(PropertyType::Depto),
            "LOTE" => Some(PropertyType::Lote),
            "LOCAL" => Some(PropertyType::Local),
            "OTRO" => Some(PropertyType::Otro),
            _ => None,
        }
    }
}

/// Whether the listing is for sale or for rent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationType {
    Venta,
    Alquiler,
}

impl OperationType {
    pub fn as_wire(&self) -> &'static str {
        match self {
            OperationType::Venta => "VENTA",
            OperationType::Alquiler => "ALQUILER",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "VENTA" => Some(OperationType::Venta),
            "ALQUILER" => Some(OperationType::Alquiler),
            _ => None,
        }
    }
}

/// Listing lifecycle state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum PropertyStatus {
    #[default]
    Available,
    Sold,
    Rented,
}

impl PropertyStatus {
    pub fn as_wire(&self) -> &'static str {
        match self {
            PropertyStatus::Available => "AVAILABLE",
            PropertyStatus::Sold => "SOLD",
            PropertyStatus::Rented => "RENTED",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "AVAILABLE" => Some(PropertyStatus::Available),
            "SOLD" => Some(PropertyStatus::Sold),
            "RENTED" => Some(PropertyStatus::Rented),
            _ => None,
        }
    }
}

/// A real-estate listing.
///
/// Invariants enforced by the validation layer and both backends:
/// `images` is never empty, and `kind`/`operation`/`status` only ever
/// hold members of their closed sets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub operation: OperationType,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub area: Option<f64>,
    pub featured: bool,
    pub status: PropertyStatus,
    /// Ordered image URLs. The remote backend stores these as a single
    /// serialized-text column; repository callers only ever see the list.
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating a listing. Defaults for `currency`,
/// `featured` and `status` have already been applied by the
/// validation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub operation: OperationType,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub area: Option<f64>,
    pub featured: bool,
    pub status: PropertyStatus,
    pub images: Vec<String>,
}

/// Validated partial update. `None` fields are left untouched in the
/// stored record; no defaulting is applied here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<PropertyType>,
    pub operation: Option<OperationType>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub area: Option<f64>,
    pub featured: Option<bool>,
    pub status: Option<PropertyStatus>,
    pub images: Option<Vec<String>>,
}

impl PropertyPatch {
    /// True when the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.currency.is_none()
            && self.location.is_none()
            && self.kind.is_none()
            && self.operation.is_none()
            && self.bedrooms.is_none()
            && self.bathrooms.is_none()
            && self.area.is_none()
            && self.featured.is_none()
            && self.status.is_none()
            && self.images.is_none()
    }

    /// Merge this patch onto an existing record, refreshing
    /// `updated_at`. Used by the local backend; the SurrealDB backend
    /// merges server-side with the same semantics.
    pub fn apply_to(&self, property: &mut Property, now: DateTime<Utc>) {
        if let Some(title) = &self.title {
            property.title = title.clone();
        }
        if let Some(description) = &self.description {
            property.description = description.clone();
        }
        if let Some(price) = self.price {
            property.price = price;
        }
        if let Some(currency) = &self.currency {
            property.currency = currency.clone();
        }
        if let Some(location) = &self.location {
            property.location = location.clone();
        }
        if let Some(kind) = self.kind {
            property.kind = kind;
        }
        if let Some(operation) = self.operation {
            property.operation = operation;
        }
        if let Some(bedrooms) = self.bedrooms {
            property.bedrooms = Some(bedrooms);
        }
        if let Some(bathrooms) = self.bathrooms {
            property.bathrooms = Some(bathrooms);
        }
        if let Some(area) = self.area {
            property.area = Some(area);
        }
        if let Some(featured) = self.featured {
            property.featured = featured;
        }
        if let Some(status) = self.status {
            property.status = status;
        }
        if let Some(images) = &self.images {
            property.images = images.clone();
        }
        property.updated_at = now;
    }
}
