//! Database-specific error types and conversions.

use inmo_core::error::InmoError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    /// A stored row held data that could not be decoded back into its
    /// domain form (malformed image-list text, unknown enum value).
    /// Treated as a data-integrity fault, never coerced away.
    #[error("Stored data corrupt: {0}")]
    Decode(String),

    /// Domain data could not be serialized into its stored form.
    #[error("Serialization failed: {0}")]
    Encode(String),
}

impl From<DbError> for InmoError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => InmoError::NotFound { entity, id },
            DbError::Decode(context) => InmoError::Decode { context },
            other => InmoError::Database(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_keep_the_fault_direction() {
        let err: InmoError = DbError::Decode("bad image list".into()).into();
        assert!(matches!(err, InmoError::Decode { .. }));

        let err: InmoError = DbError::Encode("cannot serialize images".into()).into();
        match err {
            InmoError::Database(msg) => assert!(msg.contains("Serialization failed")),
            other => panic!("expected a database fault, got {other:?}"),
        }

        let err: InmoError = DbError::NotFound {
            entity: "property".into(),
            id: "abc".into(),
        }
        .into();
        assert!(matches!(err, InmoError::NotFound { .. }));
    }
}
