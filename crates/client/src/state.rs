//! Application state for the tier-list view.
//!
//! [`BoardState`] owns the in-memory grouping cache plus the UI-relevant
//! selections (category, search text, map), exposing pure old-state →
//! new-state transitions so the rendering layer stays a read-only consumer.
//! The cache is rebuilt wholesale from the API response on every load and
//! mutated optimistically on local edits.

use indexmap::IndexMap;
use tierlist_core::board::{ClassEntry, TierBoard};
use tierlist_core::sanitize::sanitize;
use tierlist_core::types::{Category, Tier};

/// The implicit map every board carries. Lives only on the client and is
/// never persisted or deleted.
pub const DEFAULT_MAP: &str = "default";

/// Errors from local state transitions.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("Name is required")]
    EmptyName,

    #[error("The default map cannot be changed or removed")]
    DefaultMapProtected,

    #[error("No such map: {0}")]
    UnknownMap(String),
}

/// In-memory tier-list state.
#[derive(Debug, Clone)]
pub struct BoardState {
    board: TierBoard,
    map_modifiers: IndexMap<String, f64>,
    selected_map: String,
    current_category: Category,
    search_query: String,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    pub fn new() -> Self {
        let mut map_modifiers = IndexMap::new();
        map_modifiers.insert(DEFAULT_MAP.to_string(), 1.0);
        Self {
            board: TierBoard::new(),
            map_modifiers,
            selected_map: DEFAULT_MAP.to_string(),
            current_category: Category::Farm,
            search_query: String::new(),
        }
    }

    /// Replace the cache wholesale from freshly fetched server data.
    ///
    /// The `default` map entry is re-seeded first regardless of the fetched
    /// set, and a selection pointing at a map that no longer exists falls
    /// back to `default`.
    pub fn load(&mut self, board: TierBoard, maps: IndexMap<String, f64>) {
        self.board = board;

        self.map_modifiers.clear();
        self.map_modifiers.insert(DEFAULT_MAP.to_string(), 1.0);
        for (name, modifier) in maps {
            if name != DEFAULT_MAP {
                self.map_modifiers.insert(name, modifier);
            }
        }

        if !self.map_modifiers.contains_key(&self.selected_map) {
            self.selected_map = DEFAULT_MAP.to_string();
        }
    }

    // -- Category & search --------------------------------------------------

    pub fn current_category(&self) -> Category {
        self.current_category
    }

    pub fn select_category(&mut self, category: Category) {
        self.current_category = category;
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Store the (trimmed) search text. The filtered view is recomputed at
    /// read time by [`BoardState::visible_tiers`]; callers debounce input
    /// before invoking this so rendering is not retriggered per keystroke.
    pub fn set_search(&mut self, query: &str) {
        self.search_query = query.trim().to_string();
    }

    /// The current category's tiers after search filtering, best tier
    /// first, with empty tiers omitted.
    pub fn visible_tiers(&self) -> Vec<(Tier, Vec<ClassEntry>)> {
        self.board.filter(self.current_category, &self.search_query)
    }

    // -- Classes ------------------------------------------------------------

    pub fn board(&self) -> &TierBoard {
        &self.board
    }

    /// Optimistically place a class in the current category.
    ///
    /// Mirrors the server upsert: an existing placement anywhere in the
    /// category is moved rather than duplicated. The mpm metric only means
    /// anything for the farm category and is zeroed elsewhere. Returns
    /// `true` when an existing placement was replaced.
    pub fn add_class(
        &mut self,
        name: &str,
        tier: Tier,
        mpm: Option<f64>,
    ) -> Result<bool, StateError> {
        let name = sanitize(name);
        if name.is_empty() {
            return Err(StateError::EmptyName);
        }

        let mpm = match self.current_category {
            Category::Farm => mpm.unwrap_or(0.0),
            _ => 0.0,
        };

        Ok(self
            .board
            .insert_or_move(self.current_category, tier, ClassEntry { name, mpm }))
    }

    /// Remove a class from the current category. Returns `false` when it
    /// was not present.
    pub fn remove_class(&mut self, name: &str) -> bool {
        self.board.remove(self.current_category, name)
    }

    /// All known class names, sorted; feeds the enchantment panel selector.
    pub fn known_class_names(&self) -> Vec<String> {
        self.board.class_names()
    }

    // -- Maps ---------------------------------------------------------------

    /// Maps and their modifiers, `default` first.
    pub fn map_modifiers(&self) -> &IndexMap<String, f64> {
        &self.map_modifiers
    }

    pub fn selected_map(&self) -> &str {
        &self.selected_map
    }

    /// The modifier of the currently selected map.
    pub fn selected_modifier(&self) -> f64 {
        self.map_modifiers
            .get(&self.selected_map)
            .copied()
            .unwrap_or(1.0)
    }

    pub fn select_map(&mut self, name: &str) -> Result<(), StateError> {
        if !self.map_modifiers.contains_key(name) {
            return Err(StateError::UnknownMap(name.to_string()));
        }
        self.selected_map = name.to_string();
        Ok(())
    }

    /// Add or overwrite a map modifier locally.
    pub fn upsert_map(&mut self, name: &str, modifier: f64) -> Result<(), StateError> {
        let name = sanitize(name);
        if name.is_empty() {
            return Err(StateError::EmptyName);
        }
        if name == DEFAULT_MAP {
            return Err(StateError::DefaultMapProtected);
        }
        self.map_modifiers.insert(name, modifier);
        Ok(())
    }

    /// Remove a map locally; a removed selection falls back to `default`.
    pub fn remove_map(&mut self, name: &str) -> Result<(), StateError> {
        if name == DEFAULT_MAP {
            return Err(StateError::DefaultMapProtected);
        }
        if self.map_modifiers.shift_remove(name).is_none() {
            return Err(StateError::UnknownMap(name.to_string()));
        }
        if self.selected_map == name {
            self.selected_map = DEFAULT_MAP.to_string();
        }
        Ok(())
    }
}
