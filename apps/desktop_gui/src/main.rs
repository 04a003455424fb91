mod controller;
mod ui;

use clap::Parser;

use crate::ui::app::{PersistedDeckSettings, SETTINGS_STORAGE_KEY};
use crate::ui::{DeckApp, StartupConfig};

/// Desktop viewer for the PrefPalette paper presentation.
#[derive(Debug, Parser)]
#[command(name = "prefdeck", version)]
struct Args {
    /// Launch link carrying the initial section, e.g.
    /// "prefdeck://present?tab=findings".
    #[arg(long)]
    open_url: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let startup = StartupConfig {
        open_url: args.open_url,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PrefPalette Presentation")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "PrefPalette Presentation",
        options,
        Box::new(move |cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedDeckSettings>(&text).ok())
            });
            Ok(Box::new(DeckApp::new(startup, persisted)?))
        }),
    )
}
