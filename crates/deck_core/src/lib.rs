//! Headless tab/navigation controller for the deck viewer.
//!
//! Owns which section is active and which expandable cards are open, and
//! keeps that state consistent across every entry point that can change it
//! (tab click, prev/next buttons, arrow keys, launch query). Rendering is a
//! separate concern: the GUI feeds [`InputTrigger`] values in and draws from
//! [`ViewProjection`] values out, so everything here runs without a window.

use shared::domain::{CardId, Deck};

pub mod cards;
pub mod input;
pub mod projector;
pub mod query;
pub mod store;
pub mod timing;

pub use cards::CardRegistry;
pub use input::{
    ArrowDirection, CardActivationKey, ClickTarget, Effect, FocusPolicy, InputTrigger,
};
pub use projector::{
    project, project_card, ButtonEmphasis, CardProjection, TabProjection, ViewProjection,
};
pub use query::section_index_from_launch_url;
pub use store::{NavigationStore, SwitchEffects};
pub use timing::{FrameDeadline, FOCUS_TRANSFER_DELAY_SECS, RESIZE_DEBOUNCE_SECS};

/// Single owner of navigation and card state.
///
/// Adapters and the projector borrow it; nothing else holds section or card
/// state, so concurrent triggers within one frame converge to one value
/// (last write wins).
pub struct DeckController {
    pub(crate) store: NavigationStore,
    pub(crate) cards: CardRegistry,
    pub(crate) focus_policy: FocusPolicy,
}

impl DeckController {
    pub fn new(deck: Deck) -> Self {
        Self {
            store: NavigationStore::new(deck),
            cards: CardRegistry::default(),
            focus_policy: FocusPolicy::default(),
        }
    }

    pub fn with_focus_policy(mut self, focus_policy: FocusPolicy) -> Self {
        self.focus_policy = focus_policy;
        self
    }

    pub fn register_card(&mut self, id: CardId) {
        self.cards.register(id);
    }

    /// Switch to an arbitrary section ordinal. Out-of-range is a no-op.
    pub fn switch_to(&mut self, index: usize) -> Option<SwitchEffects> {
        self.store.switch_to(index)
    }

    /// Toggle one card's expanded flag. Unknown ids are ignored.
    pub fn toggle_card(&mut self, id: CardId) -> Option<bool> {
        self.cards.toggle(id)
    }

    pub fn current_index(&self) -> usize {
        self.store.active_index()
    }

    pub fn section_count(&self) -> usize {
        self.store.section_count()
    }

    /// Route one input trigger through the adapters.
    pub fn handle(&mut self, trigger: InputTrigger) -> Vec<Effect> {
        input::apply(self, trigger)
    }

    pub fn projection(&self) -> ViewProjection {
        projector::project(&self.store)
    }

    pub fn store(&self) -> &NavigationStore {
        &self.store
    }

    pub fn cards(&self) -> &CardRegistry {
        &self.cards
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
