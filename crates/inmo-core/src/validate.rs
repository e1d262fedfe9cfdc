//! Validation and normalization of untyped input records.
//!
//! Every function here is pure: it either produces a fully-typed,
//! normalized value or a [`FieldErrors`] map naming every violated
//! constraint, never just the first. Malformed input is reported, not
//! panicked on.
//!
//! Defaulting (`currency` -> "USD", `featured` -> false, `status` ->
//! AVAILABLE) applies only when a field is entirely absent from the
//! input object, never when it is present-but-empty. The patch
//! variant applies no defaults at all.

use serde_json::Value;

use crate::error::FieldErrors;
use crate::models::property::{
    NewProperty, OperationType, PropertyPatch, PropertyStatus, PropertyType,
};
use crate::models::user::LoginCredentials;

const DEFAULT_CURRENCY: &str = "USD";

/// Validate input for creating a property listing.
pub fn validate_new_property(input: &Value) -> Result<NewProperty, FieldErrors> {
    let mut errors = FieldErrors::new();
    let Some(obj) = input.as_object() else {
        errors.insert("body".into(), vec!["Se esperaba un objeto JSON".into()]);
        return Err(errors);
    };

    let title = required_string(obj, "title", 5, TITLE_MSG, &mut errors);
    let description = required_string(obj, "description", 20, DESCRIPTION_MSG, &mut errors);
    let location = required_string(obj, "location", 3, LOCATION_MSG, &mut errors);
    let price = required_positive_number(obj, "price", PRICE_MSG, &mut errors);

    let kind = match obj.get("type").and_then(Value::as_str) {
        Some(s) => match PropertyType::from_wire(s) {
            Some(kind) => Some(kind),
            None => {
                push(&mut errors, "type", TYPE_MSG);
                None
            }
        },
        None => {
            push(&mut errors, "type", TYPE_MSG);
            None
        }
    };

    let operation = match obj.get("operation").and_then(Value::as_str) {
        Some(s) => match OperationType::from_wire(s) {
            Some(op) => Some(op),
            None => {
                push(&mut errors, "operation", OPERATION_MSG);
                None
            }
        },
        None => {
            push(&mut errors, "operation", OPERATION_MSG);
            None
        }
    };

    let currency = match obj.get("currency") {
        None => DEFAULT_CURRENCY.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(_) => {
            push(&mut errors, "currency", CURRENCY_MSG);
            String::new()
        }
    };

    let featured = match obj.get("featured") {
        None => false,
        Some(Value::Bool(b)) => *b,
        Some(_) => {
            push(&mut errors, "featured", FEATURED_MSG);
            false
        }
    };

    let status = match obj.get("status") {
        None => PropertyStatus::default(),
        Some(value) => match value.as_str().and_then(PropertyStatus::from_wire) {
            Some(status) => status,
            None => {
                push(&mut errors, "status", STATUS_MSG);
                PropertyStatus::default()
            }
        },
    };

    let bedrooms = optional_count(obj, "bedrooms", &mut errors);
    let bathrooms = optional_count(obj, "bathrooms", &mut errors);
    let area = optional_positive_number(obj, "area", &mut errors);

    let images = match obj.get("images") {
        Some(value) => image_list(value, &mut errors),
        None => {
            push(&mut errors, "images", IMAGES_MSG);
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    // All Nones have been reported above; unreachable fallbacks keep
    // this branch panic-free on a contract slip.
    Ok(NewProperty {
        title: title.unwrap_or_default(),
        description: description.unwrap_or_default(),
        price: price.unwrap_or_default(),
        currency,
        location: location.unwrap_or_default(),
        kind: kind.unwrap_or(PropertyType::Otro),
        operation: operation.unwrap_or(OperationType::Venta),
        bedrooms,
        bathrooms,
        area,
        featured,
        status,
        images: images.unwrap_or_default(),
    })
}

/// Validate input for a partial update. Every field is optional;
/// absent fields are left out of the patch entirely.
pub fn validate_property_patch(input: &Value) -> Result<PropertyPatch, FieldErrors> {
    let mut errors = FieldErrors::new();
    let Some(obj) = input.as_object() else {
        errors.insert("body".into(), vec!["Se esperaba un objeto JSON".into()]);
        return Err(errors);
    };

    let mut patch = PropertyPatch::default();

    if obj.contains_key("title") {
        patch.title = required_string(obj, "title", 5, TITLE_MSG, &mut errors);
    }
    if obj.contains_key("description") {
        patch.description = required_string(obj, "description", 20, DESCRIPTION_MSG, &mut errors);
    }
    if obj.contains_key("location") {
        patch.location = required_string(obj, "location", 3, LOCATION_MSG, &mut errors);
    }
    if obj.contains_key("price") {
        patch.price = required_positive_number(obj, "price", PRICE_MSG, &mut errors);
    }
    if let Some(value) = obj.get("currency") {
        match value {
            Value::String(s) => patch.currency = Some(s.clone()),
            _ => push(&mut errors, "currency", CURRENCY_MSG),
        }
    }
    if let Some(value) = obj.get("type") {
        match value.as_str().and_then(PropertyType::from_wire) {
            Some(kind) => patch.kind = Some(kind),
            None => push(&mut errors, "type", TYPE_MSG),
        }
    }
    if let Some(value) = obj.get("operation") {
        match value.as_str().and_then(OperationType::from_wire) {
            Some(op) => patch.operation = Some(op),
            None => push(&mut errors, "operation", OPERATION_MSG),
        }
    }
    if let Some(value) = obj.get("status") {
        match value.as_str().and_then(PropertyStatus::from_wire) {
            Some(status) => patch.status = Some(status),
            None => push(&mut errors, "status", STATUS_MSG),
        }
    }
    if let Some(value) = obj.get("featured") {
        match value {
            Value::Bool(b) => patch.featured = Some(*b),
            _ => push(&mut errors, "featured", FEATURED_MSG),
        }
    }
    if obj.contains_key("bedrooms") {
        patch.bedrooms = optional_count(obj, "bedrooms", &mut errors);
    }
    if obj.contains_key("bathrooms") {
        patch.bathrooms = optional_count(obj, "bathrooms", &mut errors);
    }
    if obj.contains_key("area") {
        patch.area = optional_positive_number(obj, "area", &mut errors);
    }
    if let Some(value) = obj.get("images") {
        patch.images = image_list(value, &mut errors);
    }

    if errors.is_empty() { Ok(patch) } else { Err(errors) }
}

/// Validate login credentials.
pub fn validate_login(input: &Value) -> Result<LoginCredentials, FieldErrors> {
    let mut errors = FieldErrors::new();
    let Some(obj) = input.as_object() else {
        errors.insert("body".into(), vec!["Se esperaba un objeto JSON".into()]);
        return Err(errors);
    };

    let email = match obj.get("email").and_then(Value::as_str) {
        Some(s) if is_plausible_email(s) => Some(s.to_string()),
        _ => {
            push(&mut errors, "email", EMAIL_MSG);
            None
        }
    };

    let password = match obj.get("password").and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => {
            push(&mut errors, "password", PASSWORD_MSG);
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(LoginCredentials {
        email: email.unwrap_or_default(),
        password: password.unwrap_or_default(),
    })
}

// -----------------------------------------------------------------------
// Field helpers
// -----------------------------------------------------------------------

const TITLE_MSG: &str = "El título debe tener al menos 5 caracteres";
const DESCRIPTION_MSG: &str = "La descripción debe ser más detallada";
const LOCATION_MSG: &str = "La ubicación es requerida";
const PRICE_MSG: &str = "El precio debe ser un número positivo";
const TYPE_MSG: &str = "Tipo de propiedad inválido";
const OPERATION_MSG: &str = "Operación inválida";
const STATUS_MSG: &str = "Estado inválido";
const CURRENCY_MSG: &str = "La moneda debe ser texto";
const FEATURED_MSG: &str = "Destacada debe ser un booleano";
const IMAGES_MSG: &str = "Debe cargar al menos una imagen";
const IMAGES_TYPE_MSG: &str = "Las imágenes deben ser URLs de texto";
const COUNT_MSG: &str = "Debe ser un número entero no negativo";
const AREA_MSG: &str = "La superficie debe ser un número positivo";
const EMAIL_MSG: &str = "Email inválido";
const PASSWORD_MSG: &str = "La contraseña es requerida";

fn push(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}

fn required_string(
    obj: &serde_json::Map<String, Value>,
    field: &str,
    min_chars: usize,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match obj.get(field).and_then(Value::as_str) {
        Some(s) if s.chars().count() >= min_chars => Some(s.to_string()),
        _ => {
            push(errors, field, message);
            None
        }
    }
}

/// Coerce a JSON number or numeric string to `f64`.
fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if !s.trim().is_empty() => s.trim().parse().ok(),
        _ => None,
    }
}

fn required_positive_number(
    obj: &serde_json::Map<String, Value>,
    field: &str,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<f64> {
    match obj.get(field).and_then(coerce_f64) {
        Some(n) if n > 0.0 && n.is_finite() => Some(n),
        _ => {
            push(errors, field, message);
            None
        }
    }
}

/// Optional non-negative integer (bedrooms, bathrooms). Accepts
/// numeric strings; rejects negatives and fractions.
fn optional_count(
    obj: &serde_json::Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<u32> {
    let value = obj.get(field)?;
    let coerced = match value {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) if !s.trim().is_empty() => s.trim().parse().ok(),
        _ => None,
    };
    match coerced {
        Some(n) => Some(n),
        None => {
            push(errors, field, COUNT_MSG);
            None
        }
    }
}

fn optional_positive_number(
    obj: &serde_json::Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<f64> {
    let value = obj.get(field)?;
    match coerce_f64(value) {
        Some(n) if n > 0.0 && n.is_finite() => Some(n),
        _ => {
            push(errors, field, AREA_MSG);
            None
        }
    }
}

/// Non-empty array of strings. No per-URL format validation.
fn image_list(value: &Value, errors: &mut FieldErrors) -> Option<Vec<String>> {
    let Some(items) = value.as_array() else {
        push(errors, "images", IMAGES_MSG);
        return None;
    };
    if items.is_empty() {
        push(errors, "images", IMAGES_MSG);
        return None;
    }
    let mut urls = Vec::with_capacity(items.len());
    for item in items {
        match item.as_str() {
            Some(s) => urls.push(s.to_string()),
            None => {
                push(errors, "images", IMAGES_TYPE_MSG);
                return None;
            }
        }
    }
    Some(urls)
}

fn is_plausible_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}
