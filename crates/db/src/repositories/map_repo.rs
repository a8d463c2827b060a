//! Repository for the `maps` table.

use sqlx::PgPool;

use crate::models::map::MapModifier;

/// Provides data access for map modifiers.
pub struct MapRepo;

impl MapRepo {
    /// All maps with their modifiers, sorted by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<MapModifier>, sqlx::Error> {
        sqlx::query_as::<_, MapModifier>("SELECT name, modifier FROM maps ORDER BY name")
            .fetch_all(pool)
            .await
    }

    /// Insert a map or, on name conflict, overwrite its modifier.
    pub async fn upsert(pool: &PgPool, name: &str, modifier: f64) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO maps (name, modifier) VALUES ($1, $2) \
             ON CONFLICT (name) DO UPDATE SET \
                 modifier = EXCLUDED.modifier, \
                 updated_at = now()",
        )
        .bind(name)
        .bind(modifier)
        .execute(pool)
        .await
        .map(|_| ())
    }

    /// Delete a map by name. Returns `false` when no row matched.
    pub async fn delete(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM maps WHERE name = $1")
            .bind(name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
