use deck_core::{ArrowDirection, InputTrigger};

/// Collects the frame's global keyboard triggers.
///
/// Arrow navigation carries the text-input guard: while a text widget wants
/// the keyboard, ArrowLeft/ArrowRight must not switch sections. Escape is
/// deliberately unguarded, as in the source behavior.
pub fn keyboard_triggers(ctx: &egui::Context) -> Vec<InputTrigger> {
    let in_text_input = ctx.wants_keyboard_input();

    let mut triggers = Vec::new();
    ctx.input(|input| {
        if input.key_pressed(egui::Key::ArrowLeft) {
            triggers.push(InputTrigger::ArrowKey {
                direction: ArrowDirection::Left,
                in_text_input,
            });
        }
        if input.key_pressed(egui::Key::ArrowRight) {
            triggers.push(InputTrigger::ArrowKey {
                direction: ArrowDirection::Right,
                in_text_input,
            });
        }
        if input.key_pressed(egui::Key::Escape) {
            triggers.push(InputTrigger::Escape);
        }
    });
    triggers
}
