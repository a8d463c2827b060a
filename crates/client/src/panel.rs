//! Enchantment panel: per-class-selection state machine and its driver.
//!
//! Selecting a class moves the panel `Unselected → Loading`, then to
//! `Loaded` (a set exists) or `Empty` (offer creation). Every mutating
//! action passes back through `Loading`; on failure the panel returns to
//! whatever state it was in before the action.

use tierlist_core::sanitize::{sanitize, sanitize_nonempty};

use crate::api::{ApiError, Enchantments, TierlistApi};

/// The four enchantment slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnchantSlot {
    Weapon,
    Class,
    Helm,
    Cape,
}

impl EnchantSlot {
    pub fn as_str(self) -> &'static str {
        match self {
            EnchantSlot::Weapon => "weapon",
            EnchantSlot::Class => "class",
            EnchantSlot::Helm => "helm",
            EnchantSlot::Cape => "cape",
        }
    }

    /// A partial-update payload touching only this slot.
    fn to_set(self, value: String) -> Enchantments {
        let mut set = Enchantments::default();
        match self {
            EnchantSlot::Weapon => set.weapon = Some(value),
            EnchantSlot::Class => set.class_slot = Some(value),
            EnchantSlot::Helm => set.helm = Some(value),
            EnchantSlot::Cape => set.cape = Some(value),
        }
        set
    }
}

/// Panel display state for the current class selection.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState {
    /// No class selected.
    Unselected,
    /// A request is in flight; the UI shows its loading indicator.
    Loading,
    /// The selected class has an enchantment set.
    Loaded(Enchantments),
    /// The selected class has no set yet; creation is offered.
    Empty,
}

/// Errors surfaced by panel actions.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("No class is selected")]
    NoSelection,

    #[error("The value cannot be empty")]
    EmptyValue,

    #[error("At least one field must be filled in")]
    NothingToSave,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// The pure state machine. All transitions are synchronous; the async
/// driver is [`PanelController`].
#[derive(Debug)]
pub struct EnchantPanel {
    class_name: Option<String>,
    state: PanelState,
}

impl Default for EnchantPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl EnchantPanel {
    pub fn new() -> Self {
        Self {
            class_name: None,
            state: PanelState::Unselected,
        }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Enter `Loading` for a new class selection.
    pub fn begin_load(&mut self, class_name: String) {
        self.class_name = Some(class_name);
        self.state = PanelState::Loading;
    }

    /// Resolve a load with the fetched set (or its absence).
    pub fn finish_load(&mut self, set: Option<Enchantments>) {
        self.state = match set {
            Some(set) => PanelState::Loaded(set),
            None => PanelState::Empty,
        };
    }

    /// Drop the selection entirely.
    pub fn clear(&mut self) {
        self.class_name = None;
        self.state = PanelState::Unselected;
    }

    /// Enter `Loading` for a mutation, returning the state to restore if
    /// the mutation fails.
    fn begin_mutation(&mut self) -> PanelState {
        std::mem::replace(&mut self.state, PanelState::Loading)
    }

    fn restore(&mut self, prior: PanelState) {
        self.state = prior;
    }
}

/// Drives [`EnchantPanel`] through the API client.
pub struct PanelController {
    api: TierlistApi,
    panel: EnchantPanel,
}

impl PanelController {
    pub fn new(api: TierlistApi) -> Self {
        Self {
            api,
            panel: EnchantPanel::new(),
        }
    }

    pub fn panel(&self) -> &EnchantPanel {
        &self.panel
    }

    /// Select a class and fetch its enchantment set.
    ///
    /// An empty selection clears the panel; a failed fetch also clears it,
    /// since there is no prior per-class state worth keeping.
    pub async fn select(&mut self, class_name: &str) -> Result<(), PanelError> {
        let name = sanitize(class_name);
        if name.is_empty() {
            self.panel.clear();
            return Ok(());
        }

        self.panel.begin_load(name.clone());
        match self.api.get_enchantments(&name).await {
            Ok(set) => {
                self.panel.finish_load(set);
                Ok(())
            }
            Err(err) => {
                self.panel.clear();
                Err(err.into())
            }
        }
    }

    /// Edit a single slot of the selected class's set.
    pub async fn edit_slot(&mut self, slot: EnchantSlot, value: &str) -> Result<(), PanelError> {
        let name = self
            .panel
            .class_name()
            .ok_or(PanelError::NoSelection)?
            .to_string();
        let value = sanitize_nonempty(Some(value)).ok_or(PanelError::EmptyValue)?;

        let prior = self.panel.begin_mutation();
        match self.mutate_and_refetch(&name, MutatingCall::Update(slot.to_set(value))).await {
            Ok(set) => {
                self.panel.finish_load(set);
                Ok(())
            }
            Err(err) => {
                self.panel.restore(prior);
                Err(err.into())
            }
        }
    }

    /// Create the selected class's set from a draft. At least one slot must
    /// survive sanitization.
    pub async fn create(&mut self, draft: &Enchantments) -> Result<(), PanelError> {
        let name = self
            .panel
            .class_name()
            .ok_or(PanelError::NoSelection)?
            .to_string();

        let set = Enchantments {
            weapon: sanitize_nonempty(draft.weapon.as_deref()),
            class_slot: sanitize_nonempty(draft.class_slot.as_deref()),
            helm: sanitize_nonempty(draft.helm.as_deref()),
            cape: sanitize_nonempty(draft.cape.as_deref()),
        };
        if set.is_empty() {
            return Err(PanelError::NothingToSave);
        }

        let prior = self.panel.begin_mutation();
        match self.mutate_and_refetch(&name, MutatingCall::Create(set)).await {
            Ok(set) => {
                self.panel.finish_load(set);
                Ok(())
            }
            Err(err) => {
                self.panel.restore(prior);
                Err(err.into())
            }
        }
    }

    async fn mutate_and_refetch(
        &self,
        name: &str,
        call: MutatingCall,
    ) -> Result<Option<Enchantments>, ApiError> {
        match call {
            MutatingCall::Create(set) => self.api.create_enchantments(name, &set).await?,
            MutatingCall::Update(set) => self.api.update_enchantments(name, &set).await?,
        }
        self.api.get_enchantments(name).await
    }
}

enum MutatingCall {
    Create(Enchantments),
    Update(Enchantments),
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn starts_unselected() {
        let panel = EnchantPanel::new();
        assert_eq!(*panel.state(), PanelState::Unselected);
        assert_eq!(panel.class_name(), None);
    }

    #[test]
    fn load_resolves_to_loaded_or_empty() {
        let mut panel = EnchantPanel::new();

        panel.begin_load("Necromancer".into());
        assert_eq!(*panel.state(), PanelState::Loading);

        panel.finish_load(None);
        assert_eq!(*panel.state(), PanelState::Empty);

        panel.begin_load("Necromancer".into());
        let set = Enchantments {
            weapon: Some("Awe".into()),
            ..Default::default()
        };
        panel.finish_load(Some(set.clone()));
        assert_eq!(*panel.state(), PanelState::Loaded(set));
    }

    #[test]
    fn failed_mutation_restores_the_prior_state() {
        let mut panel = EnchantPanel::new();
        panel.begin_load("Necromancer".into());
        let set = Enchantments {
            weapon: Some("Awe".into()),
            ..Default::default()
        };
        panel.finish_load(Some(set.clone()));

        let prior = panel.begin_mutation();
        assert_eq!(*panel.state(), PanelState::Loading);

        panel.restore(prior);
        assert_eq!(*panel.state(), PanelState::Loaded(set));
    }

    #[test]
    fn clear_drops_the_selection() {
        let mut panel = EnchantPanel::new();
        panel.begin_load("Necromancer".into());
        panel.clear();
        assert_matches!(panel.state(), PanelState::Unselected);
        assert_eq!(panel.class_name(), None);
    }

    #[test]
    fn slot_payloads_touch_exactly_one_field() {
        let set = EnchantSlot::Cape.to_set("Forge".into());
        assert_eq!(set.cape.as_deref(), Some("Forge"));
        assert!(set.weapon.is_none() && set.class_slot.is_none() && set.helm.is_none());
        assert_eq!(EnchantSlot::Class.as_str(), "class");
    }
}
