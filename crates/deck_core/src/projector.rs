use crate::store::NavigationStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabProjection {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEmphasis {
    Primary,
    Secondary,
}

/// Everything the tab bar, progress bar, and prev/next buttons need to
/// draw themselves for the current navigation state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewProjection {
    /// Exactly one entry is active.
    pub tabs: Vec<TabProjection>,
    /// `(active + 1) / count`, as a 0-100 width percentage.
    pub progress_percent: f32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub next_label: String,
    pub next_emphasis: ButtonEmphasis,
}

/// Pure mapping from navigation state to visual directives.
pub fn project(store: &NavigationStore) -> ViewProjection {
    let active = store.active_index();
    let count = store.section_count();
    let terminal = store.is_terminal();

    let tabs = store
        .deck()
        .sections()
        .iter()
        .enumerate()
        .map(|(ordinal, section)| TabProjection {
            label: section.title.clone(),
            active: ordinal == active,
        })
        .collect();

    // The terminal section swaps the forward cue for a completion cue; it
    // does not lock backward navigation.
    let (next_label, next_emphasis) = if terminal {
        let last = &store.deck().sections()[store.deck().last_index()];
        (
            format!("{} Complete", capitalize(&last.slug)),
            ButtonEmphasis::Secondary,
        )
    } else {
        ("Next →".to_string(), ButtonEmphasis::Primary)
    };

    ViewProjection {
        tabs,
        progress_percent: (active as f32 + 1.0) / count as f32 * 100.0,
        prev_enabled: active > 0,
        next_enabled: !terminal,
        next_label,
        next_emphasis,
    }
}

/// Visual/ARIA directives for one expandable card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardProjection {
    pub body_visible: bool,
    /// "+" invites expansion, "×" invites collapse.
    pub glyph: &'static str,
    pub aria_expanded: bool,
}

pub fn project_card(expanded: bool) -> CardProjection {
    CardProjection {
        body_visible: expanded,
        glyph: if expanded { "×" } else { "+" },
        aria_expanded: expanded,
    }
}

fn capitalize(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "tests/projector_tests.rs"]
mod tests;
