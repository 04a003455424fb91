use std::collections::HashMap;

use shared::domain::CardId;
use tracing::debug;

/// Expanded/collapsed flags for every registered expandable card.
///
/// Entries are independent of each other and of the navigation state;
/// collapsing one card never affects another outside of [`collapse_all`].
///
/// [`collapse_all`]: CardRegistry::collapse_all
#[derive(Debug, Default)]
pub struct CardRegistry {
    expanded: HashMap<CardId, bool>,
}

impl CardRegistry {
    /// Registers a card, collapsed. Re-registering keeps the current flag.
    pub fn register(&mut self, id: CardId) {
        self.expanded.entry(id).or_insert(false);
    }

    /// Flips the card's flag and returns the new value. Unknown ids are
    /// ignored.
    pub fn toggle(&mut self, id: CardId) -> Option<bool> {
        let flag = self.expanded.get_mut(&id)?;
        *flag = !*flag;
        Some(*flag)
    }

    pub fn is_expanded(&self, id: CardId) -> bool {
        self.expanded.get(&id).copied().unwrap_or(false)
    }

    /// Collapses every expanded card in one pass; already-collapsed cards
    /// are untouched, so repeating this is idempotent. Returns how many
    /// cards actually closed.
    pub fn collapse_all(&mut self) -> usize {
        let mut closed = 0;
        for flag in self.expanded.values_mut() {
            if *flag {
                *flag = false;
                closed += 1;
            }
        }
        if closed > 0 {
            debug!(closed, "collapsed expanded cards");
        }
        closed
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.values().filter(|flag| **flag).count()
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/cards_tests.rs"]
mod tests;
