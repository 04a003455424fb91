//! Adapters from heterogeneous UI triggers to store commands.
//!
//! Every trigger routes through [`NavigationStore::switch_to`] or the card
//! registry; the adapters only decide whether a trigger applies and which
//! follow-up effects it carries.
//!
//! [`NavigationStore::switch_to`]: crate::store::NavigationStore::switch_to

use shared::domain::CardId;

use crate::DeckController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Left,
    Right,
}

/// What a pointer press inside an expandable card actually landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    CardSurface,
    /// A link or button nested in the card keeps its own behavior; the
    /// toggle is suppressed.
    NestedInteractive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardActivationKey {
    Enter,
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTrigger {
    TabClick {
        ordinal: usize,
    },
    PrevClick,
    NextClick,
    ArrowKey {
        direction: ArrowDirection,
        /// True while a text-input-like widget has keyboard focus; arrow
        /// navigation must not steal those keystrokes.
        in_text_input: bool,
    },
    CardActivate {
        card: CardId,
        target: ClickTarget,
    },
    CardKey {
        card: CardId,
        key: CardActivationKey,
    },
    Escape,
}

/// Follow-up work a trigger asks the presentation layer to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Reset the content viewport to the top.
    ScrollToTop,
    /// Move focus to the first focusable element of the newly active
    /// section after a fixed short delay (layout-settle pause, not a
    /// completion signal).
    DeferFocusTransfer,
}

/// Per-trigger focus-transfer behavior.
///
/// The source behavior transfers focus after button-driven prev/next but
/// not after arrow-key navigation. Whether that asymmetry is intended is
/// ambiguous, so both knobs stay explicit instead of being unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusPolicy {
    pub on_button_nav: bool,
    pub on_key_nav: bool,
}

impl Default for FocusPolicy {
    fn default() -> Self {
        Self {
            on_button_nav: true,
            on_key_nav: false,
        }
    }
}

/// Translate one trigger into store/registry commands.
pub fn apply(controller: &mut DeckController, trigger: InputTrigger) -> Vec<Effect> {
    match trigger {
        InputTrigger::TabClick { ordinal } => nav_step(controller, Some(ordinal), false),
        InputTrigger::PrevClick => {
            let target = controller.store.active_index().checked_sub(1);
            nav_step(controller, target, controller.focus_policy.on_button_nav)
        }
        InputTrigger::NextClick => {
            let target = bounded_next(controller);
            nav_step(controller, target, controller.focus_policy.on_button_nav)
        }
        InputTrigger::ArrowKey {
            direction,
            in_text_input,
        } => {
            if in_text_input {
                return Vec::new();
            }
            let target = match direction {
                ArrowDirection::Left => controller.store.active_index().checked_sub(1),
                ArrowDirection::Right => bounded_next(controller),
            };
            nav_step(controller, target, controller.focus_policy.on_key_nav)
        }
        InputTrigger::CardActivate { card, target } => {
            if target == ClickTarget::NestedInteractive {
                return Vec::new();
            }
            controller.cards.toggle(card);
            Vec::new()
        }
        InputTrigger::CardKey { card, key: _ } => {
            controller.cards.toggle(card);
            Vec::new()
        }
        InputTrigger::Escape => {
            controller.cards.collapse_all();
            Vec::new()
        }
    }
}

fn bounded_next(controller: &DeckController) -> Option<usize> {
    let current = controller.store.active_index();
    (current < controller.store.deck().last_index()).then(|| current + 1)
}

fn nav_step(
    controller: &mut DeckController,
    target: Option<usize>,
    focus_after: bool,
) -> Vec<Effect> {
    let Some(index) = target else {
        return Vec::new();
    };
    let Some(effects) = controller.store.switch_to(index) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    if effects.scroll_to_top {
        out.push(Effect::ScrollToTop);
    }
    if focus_after {
        out.push(Effect::DeferFocusTransfer);
    }
    out
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
