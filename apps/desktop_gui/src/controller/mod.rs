//! GUI-side glue from raw egui input to deck_core triggers.

pub mod bindings;
