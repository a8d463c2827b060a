//! Repository for the `enchantments` table.
//!
//! One row per class name. Rows are created once and thereafter only
//! updated slot by slot; nothing in the exposed surface deletes them.

use sqlx::PgPool;

use crate::models::enchantment::EnchantmentSet;

/// Column list for `enchantments` reads.
const COLUMNS: &str = "weapon, class, helm, cape";

/// Provides data access for enchantment sets.
pub struct EnchantmentRepo;

impl EnchantmentRepo {
    /// The enchantment set for a class, or `None` when the class has never
    /// had one. Absence is a normal state, not an error.
    pub async fn find_by_class(
        pool: &PgPool,
        class_name: &str,
    ) -> Result<Option<EnchantmentSet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enchantments WHERE class_name = $1");
        sqlx::query_as::<_, EnchantmentSet>(&query)
            .bind(class_name)
            .fetch_optional(pool)
            .await
    }

    /// Whether a row already exists for the class.
    pub async fn exists(pool: &PgPool, class_name: &str) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM enchantments WHERE class_name = $1)")
                .bind(class_name)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Create the row for a class with whichever slots were provided.
    pub async fn create(
        pool: &PgPool,
        class_name: &str,
        set: &EnchantmentSet,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO enchantments (class_name, weapon, class, helm, cape) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(class_name)
        .bind(&set.weapon)
        .bind(&set.class_slot)
        .bind(&set.helm)
        .bind(&set.cape)
        .execute(pool)
        .await
        .map(|_| ())
    }

    /// Partially update a row: slots passed as `None` keep their current
    /// value. Returns `false` when no row matched the class name.
    pub async fn update(
        pool: &PgPool,
        class_name: &str,
        set: &EnchantmentSet,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE enchantments SET \
                 weapon = COALESCE($2, weapon), \
                 class = COALESCE($3, class), \
                 helm = COALESCE($4, helm), \
                 cape = COALESCE($5, cape), \
                 updated_at = now() \
             WHERE class_name = $1",
        )
        .bind(class_name)
        .bind(&set.weapon)
        .bind(&set.class_slot)
        .bind(&set.helm)
        .bind(&set.cape)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
