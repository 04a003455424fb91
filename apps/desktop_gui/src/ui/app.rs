use deck_core::{
    ButtonEmphasis, CardRegistry, ClickTarget, DeckController, Effect, FrameDeadline,
    InputTrigger, ViewProjection, FOCUS_TRANSFER_DELAY_SECS, RESIZE_DEBOUNCE_SECS,
};
use eframe::egui;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::controller::bindings;
use crate::ui::content;
use crate::ui::theme::ThemePreset;

pub(crate) const SETTINGS_STORAGE_KEY: &str = "desktop_gui.settings";

/// Below this window width the tab labels drop to the compact size.
const COMPACT_LAYOUT_WIDTH: f32 = 768.0;

#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// Launch link carrying the initial section, e.g.
    /// `prefdeck://present?tab=findings`.
    pub open_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct PersistedDeckSettings {
    pub theme_preset: ThemePreset,
}

pub struct DeckApp {
    controller: DeckController,
    /// Restored preference; kept and written back, not applied.
    theme: ThemePreset,
    scroll_to_top: bool,
    pending_focus: FrameDeadline,
    resize_debounce: FrameDeadline,
    last_width: f32,
    compact_tabs: bool,
    /// First focusable widget of the active section, recorded each frame.
    first_focusable: Option<egui::Id>,
}

impl DeckApp {
    pub fn new(
        startup: StartupConfig,
        persisted: Option<PersistedDeckSettings>,
    ) -> anyhow::Result<Self> {
        let deck = content::paper_deck()?;

        let initial = startup
            .open_url
            .as_deref()
            .map(|raw| deck_core::section_index_from_launch_url(&deck, raw))
            .unwrap_or(0);

        let mut controller = DeckController::new(deck);
        controller.switch_to(initial);
        for id in content::expandable_card_ids() {
            controller.register_card(id);
        }

        let theme = persisted.map(|settings| settings.theme_preset).unwrap_or_default();
        debug!(theme = theme.label(), "restored theme preference");

        Ok(Self {
            controller,
            theme,
            scroll_to_top: false,
            pending_focus: FrameDeadline::new(FOCUS_TRANSFER_DELAY_SECS),
            resize_debounce: FrameDeadline::new(RESIZE_DEBOUNCE_SECS),
            last_width: 0.0,
            compact_tabs: false,
            first_focusable: None,
        })
    }

    fn apply_effects(&mut self, effects: &[Effect], now: f64) {
        for effect in effects {
            match effect {
                Effect::ScrollToTop => self.scroll_to_top = true,
                Effect::DeferFocusTransfer => self.pending_focus.arm(now),
            }
        }
    }

    fn track_resize(&mut self, ctx: &egui::Context, now: f64) {
        let width = ctx.screen_rect().width();
        if (width - self.last_width).abs() > 0.5 {
            self.last_width = width;
            self.resize_debounce.arm(now);
        }
        if self.resize_debounce.fire(now) {
            let compact = width < COMPACT_LAYOUT_WIDTH;
            if compact != self.compact_tabs {
                debug!(compact, "responsive layout recalculated");
            }
            self.compact_tabs = compact;
        }
    }

    fn show_header_panel(
        &self,
        ctx: &egui::Context,
        projection: &ViewProjection,
        triggers: &mut Vec<InputTrigger>,
    ) {
        let header = content::header();
        egui::TopBottomPanel::top("deck_header").show(ctx, |ui| {
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(header.title).size(22.0).strong());
                    ui.hyperlink_to("↗", content::ARXIV_URL)
                        .on_hover_text("Open paper on arXiv");
                });
                ui.label(egui::RichText::new(header.subtitle).weak());
                ui.label(egui::RichText::new(header.venue).weak());
                ui.label(
                    egui::RichText::new(format!("{}  ·  {}", header.affiliations, header.date))
                        .small()
                        .weak(),
                );
            });
            ui.add_space(8.0);

            let tab_size = if self.compact_tabs { 11.0 } else { 13.5 };
            ui.horizontal_wrapped(|ui| {
                for (ordinal, tab) in projection.tabs.iter().enumerate() {
                    let label = egui::RichText::new(tab.label.as_str()).size(tab_size);
                    if ui.selectable_label(tab.active, label).clicked() {
                        triggers.push(InputTrigger::TabClick { ordinal });
                    }
                }
            });

            ui.add_space(4.0);
            ui.add(egui::ProgressBar::new(projection.progress_percent / 100.0).desired_height(4.0));
            ui.add_space(6.0);
        });
    }

    fn show_nav_panel(
        &self,
        ctx: &egui::Context,
        projection: &ViewProjection,
        triggers: &mut Vec<InputTrigger>,
    ) {
        egui::TopBottomPanel::bottom("deck_nav").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let prev = ui.add_enabled(
                    projection.prev_enabled,
                    egui::Button::new("← Previous"),
                );
                if prev.clicked() {
                    triggers.push(InputTrigger::PrevClick);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut button = egui::Button::new(projection.next_label.as_str());
                    if projection.next_emphasis == ButtonEmphasis::Primary {
                        button = button.fill(ui.visuals().selection.bg_fill);
                    }
                    let next = ui.add_enabled(projection.next_enabled, button);
                    if next.clicked() {
                        triggers.push(InputTrigger::NextClick);
                    }
                });
            });
            ui.add_space(6.0);
        });
    }

    fn show_content_panel(&mut self, ctx: &egui::Context, triggers: &mut Vec<InputTrigger>) {
        let (slug, title) = {
            let deck = self.controller.store().deck();
            let section = &deck.sections()[self.controller.current_index()];
            (section.slug.clone(), section.title.clone())
        };
        let section = content::section_content(&slug);

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut area = egui::ScrollArea::vertical().auto_shrink(false);
            if self.scroll_to_top {
                area = area.vertical_scroll_offset(0.0);
                self.scroll_to_top = false;
            }
            area.show(ui, |ui| {
                self.first_focusable = None;

                ui.add_space(8.0);
                ui.label(egui::RichText::new(title).size(24.0).strong());
                if !section.subtitle.is_empty() {
                    ui.label(egui::RichText::new(section.subtitle).weak());
                }
                ui.add_space(12.0);

                for block in section.blocks {
                    render_block(
                        ui,
                        block,
                        self.controller.cards(),
                        triggers,
                        &mut self.first_focusable,
                    );
                    ui.add_space(10.0);
                }

                ui.add_space(12.0);
                ui.separator();
                ui.vertical_centered(|ui| {
                    ui.hyperlink_to("View the presentation source on GitHub", content::REPOSITORY_URL);
                });
                ui.add_space(8.0);
            });
        });
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|input| input.time);

        self.track_resize(ctx, now);

        let mut triggers = bindings::keyboard_triggers(ctx);
        let focus_due = self.pending_focus.fire(now);

        let projection = self.controller.projection();
        self.show_header_panel(ctx, &projection, &mut triggers);
        self.show_nav_panel(ctx, &projection, &mut triggers);
        self.show_content_panel(ctx, &mut triggers);

        for trigger in triggers {
            let effects = self.controller.handle(trigger);
            self.apply_effects(&effects, now);
        }

        if focus_due {
            if let Some(id) = self.first_focusable {
                ctx.memory_mut(|memory| memory.request_focus(id));
            }
        }

        if self.pending_focus.is_armed() || self.resize_debounce.is_armed() {
            ctx.request_repaint_after(std::time::Duration::from_millis(30));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedDeckSettings {
            theme_preset: self.theme,
        };
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}

fn render_block(
    ui: &mut egui::Ui,
    block: &content::Block,
    cards: &CardRegistry,
    triggers: &mut Vec<InputTrigger>,
    first_focusable: &mut Option<egui::Id>,
) {
    match block {
        content::Block::Card { title, body } => {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new(*title).size(16.0).strong());
                ui.add_space(6.0);
                render_body(ui, body, first_focusable);
            });
        }
        content::Block::Expandable { id, title, body } => {
            let projection = deck_core::project_card(cards.is_expanded(*id));

            let frame = egui::Frame::group(ui.style()).show(ui, |ui| {
                let header = ui.add(
                    egui::Button::new(
                        egui::RichText::new(format!("{}  {}", title, projection.glyph))
                            .size(16.0)
                            .strong(),
                    )
                    .frame(false),
                );
                if first_focusable.is_none() {
                    *first_focusable = Some(header.id);
                }

                let mut link_hovered = false;
                if projection.body_visible {
                    ui.add_space(6.0);
                    link_hovered = render_body(ui, body, first_focusable);
                }
                (header, link_hovered)
            });

            let (header, link_hovered) = frame.inner;
            let surface = frame.response.interact(egui::Sense::click());
            if header.clicked() {
                triggers.push(InputTrigger::CardActivate {
                    card: *id,
                    target: ClickTarget::CardSurface,
                });
            } else if surface.clicked() {
                // A click that lands on a nested link belongs to the link.
                let target = if link_hovered {
                    ClickTarget::NestedInteractive
                } else {
                    ClickTarget::CardSurface
                };
                triggers.push(InputTrigger::CardActivate { card: *id, target });
            }
        }
    }
}

fn render_body(
    ui: &mut egui::Ui,
    body: &content::Body,
    first_focusable: &mut Option<egui::Id>,
) -> bool {
    let mut link_hovered = false;

    for paragraph in body.paragraphs {
        ui.label(*paragraph);
        ui.add_space(4.0);
    }
    for bullet in body.bullets {
        ui.label(format!("• {bullet}"));
    }
    if let Some(stat) = body.stat {
        ui.add_space(4.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(stat.value)
                    .size(34.0)
                    .strong()
                    .color(ui.visuals().hyperlink_color),
            );
            ui.label(egui::RichText::new(stat.caption).weak());
        });
    }
    if !body.links.is_empty() {
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            for link in body.links {
                let response = ui.hyperlink_to(link.label, link.url);
                if first_focusable.is_none() {
                    *first_focusable = Some(response.id);
                }
                link_hovered |= response.hovered();
            }
        });
    }

    link_hovered
}
