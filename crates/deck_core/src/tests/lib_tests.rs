use super::*;
use shared::domain::{CardId, Deck, Section};

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

#[test]
fn programmatic_switch_and_read_round_trip() {
    let mut controller = DeckController::new(paper_deck());
    for index in 0..controller.section_count() {
        controller.switch_to(index);
        assert_eq!(controller.current_index(), index);
    }
}

#[test]
fn programmatic_switch_out_of_range_is_ignored() {
    let mut controller = DeckController::new(paper_deck());
    controller.switch_to(3);
    assert_eq!(controller.switch_to(7), None);
    assert_eq!(controller.current_index(), 3);
}

#[test]
fn section_count_matches_the_deck() {
    let controller = DeckController::new(paper_deck());
    assert_eq!(controller.section_count(), 5);
}

#[test]
fn toggle_card_through_the_facade() {
    let mut controller = DeckController::new(paper_deck());
    let card = CardId(42);
    controller.register_card(card);

    assert_eq!(controller.toggle_card(card), Some(true));
    assert_eq!(controller.toggle_card(card), Some(false));
    assert_eq!(controller.toggle_card(CardId(7)), None);
}

#[test]
fn walking_the_deck_end_to_end() {
    let mut controller = DeckController::new(paper_deck());

    for expected in 1..controller.section_count() {
        controller.handle(InputTrigger::NextClick);
        assert_eq!(controller.current_index(), expected);
    }
    let projection = controller.projection();
    assert!(!projection.next_enabled);
    assert_eq!(projection.next_label, "Discussion Complete");
    assert_eq!(projection.progress_percent, 100.0);

    for expected in (0..controller.section_count() - 1).rev() {
        controller.handle(InputTrigger::PrevClick);
        assert_eq!(controller.current_index(), expected);
    }
    assert!(!controller.projection().prev_enabled);
}
