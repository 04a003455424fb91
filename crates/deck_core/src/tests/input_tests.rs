use super::*;
use crate::DeckController;
use shared::domain::{CardId, Deck, Section};

const CARD_A: CardId = CardId(10);
const CARD_B: CardId = CardId(11);

fn paper_deck() -> Deck {
    Deck::new(vec![
        Section::new("overview", "Overview & Motivation"),
        Section::new("method", "PrefPalette Method"),
        Section::new("findings", "Key Findings"),
        Section::new("connections", "Connections to Visualization"),
        Section::new("discussion", "Discussion & Questions"),
    ])
    .expect("deck")
}

fn controller() -> DeckController {
    let mut controller = DeckController::new(paper_deck());
    controller.register_card(CARD_A);
    controller.register_card(CARD_B);
    controller
}

#[test]
fn tab_click_maps_ordinal_directly() {
    let mut controller = controller();
    let effects = controller.handle(InputTrigger::TabClick { ordinal: 3 });
    assert_eq!(controller.current_index(), 3);
    assert_eq!(effects, vec![Effect::ScrollToTop]);
}

#[test]
fn tab_click_out_of_range_is_ignored() {
    let mut controller = controller();
    let effects = controller.handle(InputTrigger::TabClick { ordinal: 9 });
    assert_eq!(controller.current_index(), 0);
    assert!(effects.is_empty());
}

#[test]
fn button_nav_defers_a_focus_transfer() {
    let mut controller = controller();
    let effects = controller.handle(InputTrigger::NextClick);
    assert_eq!(controller.current_index(), 1);
    assert_eq!(effects, vec![Effect::ScrollToTop, Effect::DeferFocusTransfer]);

    let effects = controller.handle(InputTrigger::PrevClick);
    assert_eq!(controller.current_index(), 0);
    assert_eq!(effects, vec![Effect::ScrollToTop, Effect::DeferFocusTransfer]);
}

#[test]
fn prev_at_first_section_is_a_no_op() {
    let mut controller = controller();
    let effects = controller.handle(InputTrigger::PrevClick);
    assert_eq!(controller.current_index(), 0);
    assert!(effects.is_empty());
}

#[test]
fn next_at_terminal_section_is_a_no_op() {
    let mut controller = controller();
    controller.switch_to(4);
    let effects = controller.handle(InputTrigger::NextClick);
    assert_eq!(controller.current_index(), 4);
    assert!(effects.is_empty());
}

#[test]
fn arrow_nav_moves_without_focus_transfer() {
    let mut controller = controller();
    let effects = controller.handle(InputTrigger::ArrowKey {
        direction: ArrowDirection::Right,
        in_text_input: false,
    });
    assert_eq!(controller.current_index(), 1);
    assert_eq!(effects, vec![Effect::ScrollToTop]);

    let effects = controller.handle(InputTrigger::ArrowKey {
        direction: ArrowDirection::Left,
        in_text_input: false,
    });
    assert_eq!(controller.current_index(), 0);
    assert_eq!(effects, vec![Effect::ScrollToTop]);
}

#[test]
fn arrows_are_ignored_while_typing() {
    let mut controller = controller();
    let effects = controller.handle(InputTrigger::ArrowKey {
        direction: ArrowDirection::Right,
        in_text_input: true,
    });
    assert_eq!(controller.current_index(), 0);
    assert!(effects.is_empty());
}

#[test]
fn arrow_left_at_first_section_is_a_no_op() {
    let mut controller = controller();
    let effects = controller.handle(InputTrigger::ArrowKey {
        direction: ArrowDirection::Left,
        in_text_input: false,
    });
    assert_eq!(controller.current_index(), 0);
    assert!(effects.is_empty());
}

#[test]
fn focus_policy_knobs_are_per_trigger() {
    let mut controller = DeckController::new(paper_deck()).with_focus_policy(FocusPolicy {
        on_button_nav: false,
        on_key_nav: true,
    });

    let effects = controller.handle(InputTrigger::NextClick);
    assert_eq!(effects, vec![Effect::ScrollToTop]);

    let effects = controller.handle(InputTrigger::ArrowKey {
        direction: ArrowDirection::Right,
        in_text_input: false,
    });
    assert_eq!(effects, vec![Effect::ScrollToTop, Effect::DeferFocusTransfer]);
}

#[test]
fn card_surface_click_toggles() {
    let mut controller = controller();
    controller.handle(InputTrigger::CardActivate {
        card: CARD_A,
        target: ClickTarget::CardSurface,
    });
    assert!(controller.cards().is_expanded(CARD_A));
}

#[test]
fn nested_interactive_click_does_not_toggle() {
    let mut controller = controller();
    controller.handle(InputTrigger::CardActivate {
        card: CARD_A,
        target: ClickTarget::NestedInteractive,
    });
    assert!(!controller.cards().is_expanded(CARD_A));

    // Suppression also holds for an already-expanded card.
    controller.toggle_card(CARD_A);
    controller.handle(InputTrigger::CardActivate {
        card: CARD_A,
        target: ClickTarget::NestedInteractive,
    });
    assert!(controller.cards().is_expanded(CARD_A));
}

#[test]
fn enter_and_space_both_toggle_a_focused_card() {
    let mut controller = controller();
    controller.handle(InputTrigger::CardKey {
        card: CARD_A,
        key: CardActivationKey::Enter,
    });
    assert!(controller.cards().is_expanded(CARD_A));

    controller.handle(InputTrigger::CardKey {
        card: CARD_A,
        key: CardActivationKey::Space,
    });
    assert!(!controller.cards().is_expanded(CARD_A));
}

#[test]
fn escape_collapses_every_expanded_card() {
    let mut controller = controller();
    controller.toggle_card(CARD_A);
    controller.toggle_card(CARD_B);

    let effects = controller.handle(InputTrigger::Escape);
    assert!(effects.is_empty());
    assert!(!controller.cards().is_expanded(CARD_A));
    assert!(!controller.cards().is_expanded(CARD_B));

    // Already-collapsed cards are unaffected by a second pass.
    controller.handle(InputTrigger::Escape);
    assert_eq!(controller.cards().expanded_count(), 0);
}

#[test]
fn navigation_leaves_card_state_alone() {
    let mut controller = controller();
    controller.toggle_card(CARD_B);
    controller.handle(InputTrigger::NextClick);
    controller.handle(InputTrigger::TabClick { ordinal: 4 });
    assert!(controller.cards().is_expanded(CARD_B));
}
