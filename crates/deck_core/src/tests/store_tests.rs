use super::*;
use shared::domain::{Deck, Section};

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
fn switch_lands_on_every_requested_index() {
    let mut store = NavigationStore::new(paper_deck());
    for index in 0..store.section_count() {
        let effects = store.switch_to(index);
        assert_eq!(store.active_index(), index);
        assert_eq!(
            effects,
            Some(SwitchEffects {
                reproject: true,
                scroll_to_top: true,
            })
        );
    }
}

#[test]
fn out_of_range_switch_leaves_state_unchanged() {
    let mut store = NavigationStore::new(paper_deck());
    store.switch_to(2);

    assert_eq!(store.switch_to(5), None);
    assert_eq!(store.switch_to(100), None);
    assert_eq!(store.switch_to(usize::MAX), None);
    assert_eq!(store.active_index(), 2);
}

#[test]
fn switching_to_the_active_index_still_requests_reprojection() {
    let mut store = NavigationStore::new(paper_deck());
    store.switch_to(1);

    let effects = store.switch_to(1).expect("same-index switch is legal");
    assert!(effects.reproject);
    assert_eq!(store.active_index(), 1);
}

#[test]
fn terminal_flag_only_on_last_section() {
    let mut store = NavigationStore::new(paper_deck());
    for index in 0..store.section_count() {
        store.switch_to(index);
        assert_eq!(store.is_terminal(), index == store.section_count() - 1);
    }
}
