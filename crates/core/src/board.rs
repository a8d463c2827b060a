//! Two-level tier-board grouping: category → tier → ordered class list.
//!
//! The same structure backs the server's `GET /classes` response shaping and
//! the client's in-memory cache, so the grouping/flattening round trip and
//! the at-most-one-placement invariant live in one place instead of being
//! re-derived ad hoc on both sides of the wire.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{Category, Tier};

/// A class as it appears inside a tier list: name plus farming metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassEntry {
    pub name: String,
    pub mpm: f64,
}

/// A flat class placement row, as read from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassRow {
    pub category: Category,
    pub tier: Tier,
    pub name: String,
    pub mpm: f64,
}

/// Nested grouping of classes: category → tier → ordered entries.
///
/// Serializes to the wire shape `{"farm": {"S": [{"name", "mpm"}]}}`.
/// Entry order within a tier is insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierBoard {
    groups: IndexMap<Category, IndexMap<Tier, Vec<ClassEntry>>>,
}

impl TierBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the nested grouping from flat placement rows.
    pub fn from_rows(rows: impl IntoIterator<Item = ClassRow>) -> Self {
        let mut board = Self::new();
        for row in rows {
            board
                .groups
                .entry(row.category)
                .or_default()
                .entry(row.tier)
                .or_default()
                .push(ClassEntry {
                    name: row.name,
                    mpm: row.mpm,
                });
        }
        board
    }

    /// Flatten back to placement rows. Inverse of [`TierBoard::from_rows`]:
    /// the produced set of `(category, tier, name, mpm)` tuples is identical
    /// to the one the board was built from.
    pub fn flatten(&self) -> Vec<ClassRow> {
        let mut rows = Vec::new();
        for (&category, tiers) in &self.groups {
            for (&tier, entries) in tiers {
                for entry in entries {
                    rows.push(ClassRow {
                        category,
                        tier,
                        name: entry.name.clone(),
                        mpm: entry.mpm,
                    });
                }
            }
        }
        rows
    }

    /// Insert a class into `(category, tier)`, first removing it from any
    /// other tier of the same category.
    ///
    /// This is the client-side mirror of the server's upsert-by-name: a
    /// class holds at most one placement per category. Returns `true` when
    /// an existing placement was replaced or moved.
    pub fn insert_or_move(&mut self, category: Category, tier: Tier, entry: ClassEntry) -> bool {
        let existed = self.remove(category, &entry.name);
        self.groups
            .entry(category)
            .or_default()
            .entry(tier)
            .or_default()
            .push(entry);
        existed
    }

    /// Remove a class from whichever tier of `category` holds it.
    pub fn remove(&mut self, category: Category, name: &str) -> bool {
        let Some(tiers) = self.groups.get_mut(&category) else {
            return false;
        };
        for entries in tiers.values_mut() {
            if let Some(pos) = entries.iter().position(|e| e.name == name) {
                entries.remove(pos);
                return true;
            }
        }
        false
    }

    /// Entries for one `(category, tier)` cell, empty when none exist.
    pub fn entries(&self, category: Category, tier: Tier) -> &[ClassEntry] {
        self.groups
            .get(&category)
            .and_then(|tiers| tiers.get(&tier))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Read-time search filter for one category.
    ///
    /// Case-insensitive substring match on the class name. Tiers are
    /// returned in rank order (S first) and tiers left empty by the filter
    /// are omitted. The underlying grouping is not mutated.
    pub fn filter(&self, category: Category, query: &str) -> Vec<(Tier, Vec<ClassEntry>)> {
        let needle = query.to_lowercase();
        Tier::ALL
            .into_iter()
            .filter_map(|tier| {
                let matches: Vec<ClassEntry> = self
                    .entries(category, tier)
                    .iter()
                    .filter(|e| needle.is_empty() || e.name.to_lowercase().contains(&needle))
                    .cloned()
                    .collect();
                (!matches.is_empty()).then_some((tier, matches))
            })
            .collect()
    }

    /// All class names across every category and tier, sorted and deduped.
    /// Feeds the enchantment panel's class selector.
    pub fn class_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .groups
            .values()
            .flat_map(|tiers| tiers.values())
            .flatten()
            .map(|e| e.name.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.groups.values().all(|tiers| tiers.values().all(Vec::is_empty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: Category, tier: Tier, name: &str, mpm: f64) -> ClassRow {
        ClassRow {
            category,
            tier,
            name: name.to_string(),
            mpm,
        }
    }

    fn sample_rows() -> Vec<ClassRow> {
        vec![
            row(Category::Farm, Tier::S, "Void Highlord", 14.0),
            row(Category::Farm, Tier::S, "Lightcaster", 12.5),
            row(Category::Farm, Tier::B, "Rustbucket", 6.0),
            row(Category::Pvp, Tier::A, "Lightcaster", 0.0),
            row(Category::Solo, Tier::C, "Dragonlord", 0.0),
        ]
    }

    #[test]
    fn grouping_then_flattening_is_lossless() {
        let board = TierBoard::from_rows(sample_rows());
        let mut flattened = board.flatten();
        let mut original = sample_rows();

        let key = |r: &ClassRow| (r.category.as_str(), r.tier.as_str(), r.name.clone());
        flattened.sort_by_key(key);
        original.sort_by_key(key);
        assert_eq!(flattened, original);
    }

    #[test]
    fn insert_or_move_enforces_single_placement() {
        let mut board = TierBoard::from_rows(sample_rows());

        let moved = board.insert_or_move(
            Category::Farm,
            Tier::A,
            ClassEntry {
                name: "Lightcaster".into(),
                mpm: 13.0,
            },
        );

        assert!(moved);
        // Gone from the old tier, present exactly once in the new one.
        assert!(board
            .entries(Category::Farm, Tier::S)
            .iter()
            .all(|e| e.name != "Lightcaster"));
        let in_a: Vec<_> = board
            .entries(Category::Farm, Tier::A)
            .iter()
            .filter(|e| e.name == "Lightcaster")
            .collect();
        assert_eq!(in_a.len(), 1);
        assert_eq!(in_a[0].mpm, 13.0);
        // The same name in a different category is untouched.
        assert_eq!(board.entries(Category::Pvp, Tier::A).len(), 1);
    }

    #[test]
    fn insert_of_a_new_class_reports_no_move() {
        let mut board = TierBoard::new();
        let moved = board.insert_or_move(
            Category::Farm,
            Tier::S,
            ClassEntry {
                name: "Necromancer".into(),
                mpm: 12.5,
            },
        );
        assert!(!moved);
        assert_eq!(board.entries(Category::Farm, Tier::S).len(), 1);
    }

    #[test]
    fn remove_only_touches_the_named_class() {
        let mut board = TierBoard::from_rows(sample_rows());
        assert!(board.remove(Category::Farm, "Rustbucket"));
        assert!(!board.remove(Category::Farm, "Rustbucket"));
        assert_eq!(board.entries(Category::Farm, Tier::S).len(), 2);
    }

    #[test]
    fn filter_matches_case_insensitive_substrings() {
        let board = TierBoard::from_rows(sample_rows());

        let hits = board.filter(Category::Farm, "light");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, Tier::S);
        assert_eq!(hits[0].1[0].name, "Lightcaster");

        // Empty query returns every non-empty tier, best first.
        let all = board.filter(Category::Farm, "");
        let tiers: Vec<Tier> = all.iter().map(|(t, _)| *t).collect();
        assert_eq!(tiers, vec![Tier::S, Tier::B]);
    }

    #[test]
    fn filter_does_not_mutate_the_board() {
        let board = TierBoard::from_rows(sample_rows());
        let before = board.flatten().len();
        let _ = board.filter(Category::Farm, "void");
        assert_eq!(board.flatten().len(), before);
    }

    #[test]
    fn class_names_are_sorted_and_deduped() {
        let board = TierBoard::from_rows(sample_rows());
        assert_eq!(
            board.class_names(),
            vec![
                "Dragonlord".to_string(),
                "Lightcaster".to_string(),
                "Rustbucket".to_string(),
                "Void Highlord".to_string(),
            ]
        );
    }

    #[test]
    fn serializes_to_the_wire_shape() {
        let board = TierBoard::from_rows(vec![row(Category::Farm, Tier::A, "Necromancer", 12.5)]);
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json["farm"]["A"][0]["name"], "Necromancer");
        assert_eq!(json["farm"]["A"][0]["mpm"], 12.5);
    }
}
