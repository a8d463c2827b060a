//! Integration tests for enchantment set storage.
//!
//! Absence of a row is a normal state; creation happens at most once per
//! class name; updates touch only the slots that were provided.

use sqlx::PgPool;
use tierlist_db::models::enchantment::EnchantmentSet;
use tierlist_db::repositories::EnchantmentRepo;

fn set(
    weapon: Option<&str>,
    class_slot: Option<&str>,
    helm: Option<&str>,
    cape: Option<&str>,
) -> EnchantmentSet {
    EnchantmentSet {
        weapon: weapon.map(Into::into),
        class_slot: class_slot.map(Into::into),
        helm: helm.map(Into::into),
        cape: cape.map(Into::into),
    }
}

// ---------------------------------------------------------------------------
// Test: missing rows read back as None
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn absent_class_reads_back_as_none(pool: PgPool) {
    let found = EnchantmentRepo::find_by_class(&pool, "Unknown").await.unwrap();
    assert!(found.is_none());
    assert!(!EnchantmentRepo::exists(&pool, "Unknown").await.unwrap());
}

// ---------------------------------------------------------------------------
// Test: created rows read back with their slots
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn created_row_reads_back(pool: PgPool) {
    EnchantmentRepo::create(&pool, "Necromancer", &set(Some("Awe"), None, Some("Vim"), None))
        .await
        .unwrap();

    assert!(EnchantmentRepo::exists(&pool, "Necromancer").await.unwrap());

    let found = EnchantmentRepo::find_by_class(&pool, "Necromancer")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.weapon.as_deref(), Some("Awe"));
    assert_eq!(found.class_slot, None);
    assert_eq!(found.helm.as_deref(), Some("Vim"));
    assert_eq!(found.cape, None);
}

// ---------------------------------------------------------------------------
// Test: partial update keeps untouched slots
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn partial_update_keeps_untouched_slots(pool: PgPool) {
    EnchantmentRepo::create(&pool, "Necromancer", &set(Some("Awe"), None, None, None))
        .await
        .unwrap();

    let updated =
        EnchantmentRepo::update(&pool, "Necromancer", &set(None, None, None, Some("Forge")))
            .await
            .unwrap();
    assert!(updated);

    let found = EnchantmentRepo::find_by_class(&pool, "Necromancer")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.weapon.as_deref(), Some("Awe"));
    assert_eq!(found.cape.as_deref(), Some("Forge"));
}

// ---------------------------------------------------------------------------
// Test: updating a class with no row reports no match
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn update_of_a_missing_row_reports_no_match(pool: PgPool) {
    let updated = EnchantmentRepo::update(&pool, "Unknown", &set(Some("Awe"), None, None, None))
        .await
        .unwrap();
    assert!(!updated);
}
