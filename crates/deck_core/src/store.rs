use shared::domain::Deck;
use tracing::debug;

/// Follow-up work requested by a successful section switch. The renderer
/// consumes these; the store itself never touches the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchEffects {
    pub reproject: bool,
    pub scroll_to_top: bool,
}

/// Single source of truth for the active section ordinal.
pub struct NavigationStore {
    deck: Deck,
    active: usize,
}

impl NavigationStore {
    pub fn new(deck: Deck) -> Self {
        Self { deck, active: 0 }
    }

    /// The only path by which the active section changes. Out-of-range
    /// indices are silently ignored. Switching to the already-active index
    /// is legal and still requests a re-projection.
    pub fn switch_to(&mut self, index: usize) -> Option<SwitchEffects> {
        let Some(section) = self.deck.section(index) else {
            debug!(index, "ignoring out-of-range section switch");
            return None;
        };
        debug!(index, slug = %section.slug, "active section switched");
        self.active = index;
        Some(SwitchEffects {
            reproject: true,
            scroll_to_top: true,
        })
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn section_count(&self) -> usize {
        self.deck.section_count()
    }

    pub fn is_terminal(&self) -> bool {
        self.active == self.deck.last_index()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
