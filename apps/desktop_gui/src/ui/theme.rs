//! Theme presets. The chosen preset is restored from the persisted
//! settings and written back on save, but is not applied in the current
//! configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemePreset {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreset {
    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::System => "System",
            ThemePreset::Light => "Light",
            ThemePreset::Dark => "Dark",
        }
    }
}
