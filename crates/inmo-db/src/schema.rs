//! Schema definitions and migration runner for SurrealDB.
//!
//! All table definitions use SCHEMAFULL mode for data integrity.
//! UUIDs are stored as string record keys. Enum fields are stored as
//! their wire strings with ASSERT constraints so a row can never hold
//! a value outside its closed set. The `images` column is serialized
//! text (see [`crate::images`]).

use surrealdb::{Connection, Surreal};
use serde::Deserialize;
use tracing::info;

use crate::error::DbError;

// -----------------------------------------------------------------------
// Migration tracking
// -----------------------------------------------------------------------

const MIGRATION_TABLE_DDL: &str = "\
DEFINE TABLE IF NOT EXISTS _migration SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS version ON TABLE _migration TYPE int;
DEFINE FIELD IF NOT EXISTS name ON TABLE _migration TYPE string;
DEFINE FIELD IF NOT EXISTS applied_at ON TABLE _migration TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_migration_version ON TABLE _migration \
    COLUMNS version UNIQUE;
";

#[derive(Debug, Deserialize)]
struct MigrationRecord {
    version: u32,
}

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    sql: SCHEMA_V1,
}];

// -----------------------------------------------------------------------
// Schema v1 — initial table definitions
// -----------------------------------------------------------------------

const SCHEMA_V1: &str = "\
-- =======================================================================
-- Property listings
-- =======================================================================
DEFINE TABLE property SCHEMAFULL;
DEFINE FIELD title ON TABLE property TYPE string;
DEFINE FIELD description ON TABLE property TYPE string;
DEFINE FIELD price ON TABLE property TYPE number ASSERT $value > 0;
DEFINE FIELD currency ON TABLE property TYPE string DEFAULT 'USD';
DEFINE FIELD location ON TABLE property TYPE string;
DEFINE FIELD kind ON TABLE property TYPE string \
    ASSERT $value IN ['CASA', 'DEPTO', 'LOTE', 'LOCAL', 'OTRO'];
DEFINE FIELD operation ON TABLE property TYPE string \
    ASSERT $value IN ['VENTA', 'ALQUILER'];
DEFINE FIELD bedrooms ON TABLE property TYPE option<int>;
DEFINE FIELD bathrooms ON TABLE property TYPE option<int>;
DEFINE FIELD area ON TABLE property TYPE option<number>;
DEFINE FIELD featured ON TABLE property TYPE bool DEFAULT false;
DEFINE FIELD status ON TABLE property TYPE string \
    ASSERT $value IN ['AVAILABLE', 'SOLD', 'RENTED'] \
    DEFAULT 'AVAILABLE';
-- Ordered image URL list, serialized to JSON array text. A listing
-- is never persisted without at least one image.
DEFINE FIELD images ON TABLE property TYPE string \
    ASSERT string::len($value) > 0;
DEFINE FIELD created_at ON TABLE property TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE property TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_property_created ON TABLE property COLUMNS created_at;

-- =======================================================================
-- Administrative accounts
-- =======================================================================
DEFINE TABLE user SCHEMAFULL;
DEFINE FIELD email ON TABLE user TYPE string;
DEFINE FIELD name ON TABLE user TYPE string;
DEFINE FIELD password_hash ON TABLE user TYPE string;
DEFINE FIELD role ON TABLE user TYPE string \
    ASSERT $value IN ['ADMIN'] DEFAULT 'ADMIN';
DEFINE FIELD created_at ON TABLE user TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE user TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_user_email ON TABLE user COLUMNS email UNIQUE;
";

// -----------------------------------------------------------------------
// Public API
// -----------------------------------------------------------------------

/// Run all pending migrations against the given SurrealDB client.
///
/// Creates a `_migration` tracking table on first run, then applies
/// each migration whose version exceeds the current maximum.
/// All DEFINE statements are idempotent so re-running is safe.
pub async fn run_migrations<C: Connection>(db: &Surreal<C>) -> Result<(), DbError> {
    // Ensure migration tracking table exists (idempotent).
    db.query(MIGRATION_TABLE_DDL)
        .await?
        .check()
        .map_err(|e| DbError::Migration(e.to_string()))?;

    // Determine current schema version.
    let mut result = db
        .query("SELECT version FROM _migration ORDER BY version DESC LIMIT 1")
        .await?;
    let records: Vec<MigrationRecord> = result.take(0)?;
    let current_version = records.first().map(|m| m.version).unwrap_or(0);

    for migration in MIGRATIONS {
        if migration.version > current_version {
            info!(
                version = migration.version,
                name = migration.name,
                "Applying migration"
            );
            db.query(migration.sql).await?.check().map_err(|e| {
                DbError::Migration(format!(
                    "Migration v{} '{}' failed: {}",
                    migration.version, migration.name, e,
                ))
            })?;

            // Record the applied migration.
            db.query(
                "CREATE _migration SET version = $version, \
                 name = $name",
            )
            .bind(("version", migration.version))
            .bind(("name", migration.name))
            .await?
            .check()
            .map_err(|e| {
                DbError::Migration(format!(
                    "Failed to record migration v{}: {}",
                    migration.version, e,
                ))
            })?;

            info!(
                version = migration.version,
                "Migration applied successfully"
            );
        }
    }

    Ok(())
}
