//! Demo listings preloaded into the local backend.

use chrono::{Duration, Utc};
use inmo_core::models::property::{OperationType, Property, PropertyStatus, PropertyType};
use uuid::Uuid;

/// The demo catalogue. Timestamps are staggered so `list()` order is
/// deterministic, newest first.
pub fn demo_listings() -> Vec<Property> {
    let now = Utc::now();
    vec![
        Property {
            id: Uuid::new_v4(),
            title: "Casa Moderna en Palermo".into(),
            description: "Hermosa casa moderna de 3 pisos con jardín, pileta y parrilla. \
                Ubicada en una zona residencial tranquila de Palermo. Cuenta con 4 \
                dormitorios, 3 baños completos, cocina integrada y living amplio."
                .into(),
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
            images: vec![
                "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=800".into(),
                "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=800".into(),
            ],
            created_at: now,
            updated_at: now,
        },
        Property {
            id: Uuid::new_v4(),
            title: "Departamento de Lujo en Puerto Madero".into(),
            description: "Exclusivo departamento con vista al río en el piso 25. Amenities \
                de primer nivel: gimnasio, pileta climatizada, SUM, seguridad 24hs."
                .into(),
            price: 380000.0,
            currency: "USD".into(),
            location: "Puerto Madero, Buenos Aires".into(),
            kind: PropertyType::Depto,
            operation: OperationType::Venta,
            bedrooms: Some(3),
            bathrooms: Some(2),
            area: Some(180.0),
            featured: true,
            status: PropertyStatus::Available,
            images: vec![
                "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=800".into(),
                "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?w=800".into(),
            ],
            created_at: now - Duration::minutes(1),
            updated_at: now - Duration::minutes(1),
        },
        Property {
            id: Uuid::new_v4(),
            title: "Local Comercial en Microcentro".into(),
            description: "Local a la calle en excelente ubicación comercial. Ideal para \
                gastronomía o retail. Habilitación al día. 2 baños, depósito y oficina."
                .into(),
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
            images: vec![
                "https://images.unsplash.com/photo-1497366216548-37526070297c?w=800".into(),
            ],
            created_at: now - Duration::minutes(2),
            updated_at: now - Duration::minutes(2),
        },
        Property {
            id: Uuid::new_v4(),
            title: "Lote en Country Club".into(),
            description: "Terreno de 1000m² en exclusivo country con seguridad, club \
                house, canchas de tenis y golf. Ideal para construir."
                .into(),
            price: 95000.0,
            currency: "USD".into(),
            location: "Pilar, Buenos Aires".into(),
            kind: PropertyType::Lote,
            operation: OperationType::Venta,
            bedrooms: None,
            bathrooms: None,
            area: Some(1000.0),
            featured: false,
            status: PropertyStatus::Available,
            images: vec![
                "https://images.unsplash.com/photo-1500382017468-9049fed747ef?w=800".into(),
            ],
            created_at: now - Duration::minutes(3),
            updated_at: now - Duration::minutes(3),
        },
    ]
}
