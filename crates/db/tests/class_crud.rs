//! Integration tests for class placement CRUD against a real database.
//!
//! - Upsert-by-name overwrite semantics (single placement per name)
//! - Rename/update and delete outcomes
//! - Category/tier reference resolution

use sqlx::PgPool;
use tierlist_core::types::{Category, Tier};
use tierlist_db::repositories::{ClassRepo, ClassWrite};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn upsert(pool: &PgPool, name: &str, category: Category, tier: Tier, mpm: f64) {
    let outcome = ClassRepo::upsert(pool, name, category, tier, mpm)
        .await
        .expect("upsert failed");
    assert_eq!(outcome, ClassWrite::Applied);
}

// ---------------------------------------------------------------------------
// Test: upserting twice with a different tier keeps exactly one row
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn double_upsert_moves_the_single_placement(pool: PgPool) {
    upsert(&pool, "Necromancer", Category::Farm, Tier::A, 12.5).await;
    upsert(&pool, "Necromancer", Category::Farm, Tier::S, 14.0).await;

    let rows = ClassRepo::list(&pool).await.unwrap();
    let placements: Vec<_> = rows.iter().filter(|r| r.name == "Necromancer").collect();

    assert_eq!(placements.len(), 1);
    assert_eq!(placements[0].tier, "S");
    assert_eq!(placements[0].mpm, 14.0);
}

// ---------------------------------------------------------------------------
// Test: upsert may move a class across categories
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn upsert_overwrites_the_category_too(pool: PgPool) {
    upsert(&pool, "Lightcaster", Category::Farm, Tier::S, 12.0).await;
    upsert(&pool, "Lightcaster", Category::Pvp, Tier::A, 0.0).await;

    let rows = ClassRepo::list(&pool).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].category, "pvp");
    assert_eq!(rows[0].tier, "A");
}

// ---------------------------------------------------------------------------
// Test: rename targets the current name and reports missing rows
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn rename_updates_the_matched_row(pool: PgPool) {
    upsert(&pool, "Rustbucket", Category::Solo, Tier::C, 0.0).await;

    let outcome = ClassRepo::rename(&pool, "Rustbucket", "Rustbucket 2.0", Category::Solo, Tier::B, 0.0)
        .await
        .unwrap();
    assert_eq!(outcome, ClassWrite::Applied);

    let rows = ClassRepo::list(&pool).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Rustbucket 2.0");
    assert_eq!(rows[0].tier, "B");
}

#[sqlx::test]
async fn rename_of_a_missing_class_reports_no_such_class(pool: PgPool) {
    let outcome = ClassRepo::rename(&pool, "Ghost", "Phantom", Category::Farm, Tier::A, 0.0)
        .await
        .unwrap();
    assert_eq!(outcome, ClassWrite::NoSuchClass);
}

// ---------------------------------------------------------------------------
// Test: delete removes the row exactly once
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn delete_removes_the_row_and_reports_absence(pool: PgPool) {
    upsert(&pool, "Dragonlord", Category::Solo, Tier::C, 0.0).await;

    assert!(ClassRepo::delete(&pool, "Dragonlord").await.unwrap());
    assert!(!ClassRepo::delete(&pool, "Dragonlord").await.unwrap());

    let rows = ClassRepo::list(&pool).await.unwrap();
    assert!(rows.iter().all(|r| r.name != "Dragonlord"));
}

// ---------------------------------------------------------------------------
// Test: listed rows convert into typed placement rows
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn listed_rows_parse_into_typed_placements(pool: PgPool) {
    upsert(&pool, "Void Highlord", Category::Farm, Tier::S, 14.0).await;

    let rows = ClassRepo::list(&pool).await.unwrap();
    let row = rows.into_iter().next().unwrap().into_row().unwrap();

    assert_eq!(row.category, Category::Farm);
    assert_eq!(row.tier, Tier::S);
    assert_eq!(row.name, "Void Highlord");
}
