//! Repository for the `classes` table and its category/tier lookups.
//!
//! Writes resolve category and tier names to row ids inside the same
//! transaction as the insert/update, so a placement can never reference a
//! row that disappeared between lookup and write.

use sqlx::{PgPool, Postgres, Transaction};
use tierlist_core::types::{Category, DbId, Tier};

use crate::models::class::ClassPlacement;

/// Outcome of a class write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassWrite {
    /// The insert/update was applied.
    Applied,
    /// The category or tier name did not resolve to a seeded row.
    UnresolvedRefs,
    /// No class row matched the targeted name.
    NoSuchClass,
}

/// Provides data access for class placements.
pub struct ClassRepo;

impl ClassRepo {
    /// All placements joined with their category and tier names, in
    /// insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ClassPlacement>, sqlx::Error> {
        sqlx::query_as::<_, ClassPlacement>(
            "SELECT c.name, cat.name AS category, t.name AS tier, c.mpm \
             FROM classes c \
             JOIN categories cat ON cat.id = c.category_id \
             JOIN tiers t ON t.id = c.tier_id \
             ORDER BY c.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Insert a placement or, on name conflict, overwrite its category,
    /// tier, and mpm. Last writer wins.
    pub async fn upsert(
        pool: &PgPool,
        name: &str,
        category: Category,
        tier: Tier,
        mpm: f64,
    ) -> Result<ClassWrite, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some((category_id, tier_id)) = Self::resolve_refs(&mut tx, category, tier).await?
        else {
            return Ok(ClassWrite::UnresolvedRefs);
        };

        sqlx::query(
            "INSERT INTO classes (name, category_id, tier_id, mpm) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (name) DO UPDATE SET \
                 category_id = EXCLUDED.category_id, \
                 tier_id = EXCLUDED.tier_id, \
                 mpm = EXCLUDED.mpm, \
                 updated_at = now()",
        )
        .bind(name)
        .bind(category_id)
        .bind(tier_id)
        .bind(mpm)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(ClassWrite::Applied)
    }

    /// Update the row currently named `current_name`, possibly renaming it.
    pub async fn rename(
        pool: &PgPool,
        current_name: &str,
        new_name: &str,
        category: Category,
        tier: Tier,
        mpm: f64,
    ) -> Result<ClassWrite, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some((category_id, tier_id)) = Self::resolve_refs(&mut tx, category, tier).await?
        else {
            return Ok(ClassWrite::UnresolvedRefs);
        };

        let result = sqlx::query(
            "UPDATE classes \
             SET name = $1, category_id = $2, tier_id = $3, mpm = $4, updated_at = now() \
             WHERE name = $5",
        )
        .bind(new_name)
        .bind(category_id)
        .bind(tier_id)
        .bind(mpm)
        .bind(current_name)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(ClassWrite::NoSuchClass);
        }

        tx.commit().await?;
        Ok(ClassWrite::Applied)
    }

    /// Delete a placement by name. Returns `false` when no row matched.
    pub async fn delete(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM classes WHERE name = $1")
            .bind(name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn resolve_refs(
        tx: &mut Transaction<'_, Postgres>,
        category: Category,
        tier: Tier,
    ) -> Result<Option<(DbId, DbId)>, sqlx::Error> {
        let category_id: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM categories WHERE name = $1")
                .bind(category.as_str())
                .fetch_optional(&mut **tx)
                .await?;
        let tier_id: Option<(DbId,)> = sqlx::query_as("SELECT id FROM tiers WHERE name = $1")
            .bind(tier.as_str())
            .fetch_optional(&mut **tx)
            .await?;

        Ok(match (category_id, tier_id) {
            (Some((c,)), Some((t,))) => Some((c, t)),
            _ => None,
        })
    }
}
