//! The tribute shell: an eframe app that polls the countdown once per
//! second and renders the page sections with the decorative layers.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Local};
use egui::{Frame, Margin, RichText};

use crate::models::anniversary::Anniversary;
use crate::models::settings::Settings;
use crate::services::countdown::{CountdownPhase, CountdownService};
use crate::services::settings::{load_settings_or_default, resolve_settings_path, save_settings};
use crate::utils::date::is_same_day;

use super::effects::EffectsLayer;
use super::sections::{self, HeroAction};
use super::theme::TributeTheme;

pub struct TributeApp {
    settings: Settings,
    settings_path: PathBuf,
    countdown: CountdownService,
    theme: TributeTheme,
    effects: EffectsLayer,
    letter_open: bool,
    gift_open: bool,
    last_celebration: Option<DateTime<Local>>,
    settings_dirty: bool,
}

impl TributeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_path = resolve_settings_path();
        let settings = load_settings_or_default(&settings_path);
        log::info!(
            "Loaded settings: honoree={}, anniversary={:02}-{:02}",
            settings.honoree,
            settings.anniversary_month,
            settings.anniversary_day
        );

        let anniversary = settings.anniversary().unwrap_or_else(|err| {
            log::warn!("Invalid anniversary in settings ({err}); using the default");
            Anniversary::default()
        });

        let theme = Self::resolve_theme(&settings);
        theme.apply_to_context(&cc.egui_ctx);

        Self {
            settings,
            settings_path,
            countdown: CountdownService::new(anniversary),
            theme,
            effects: EffectsLayer::new(),
            letter_open: false,
            gift_open: false,
            last_celebration: None,
            settings_dirty: false,
        }
    }

    /// Pick the active theme, honoring the system preference when asked to,
    /// falling back to the persisted name.
    fn resolve_theme(settings: &Settings) -> TributeTheme {
        let name = if settings.use_system_theme {
            match dark_light::detect() {
                dark_light::Mode::Dark => "dark".to_string(),
                dark_light::Mode::Light => "light".to_string(),
                dark_light::Mode::Default => settings.theme.clone(),
            }
        } else {
            settings.theme.clone()
        };
        TributeTheme::from_name(&name)
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        let next = if self.theme.is_dark {
            TributeTheme::light()
        } else {
            TributeTheme::dark()
        };
        self.settings.theme = next.name().to_string();
        self.settings.use_system_theme = false;
        next.apply_to_context(ctx);
        self.theme = next;
        self.settings_dirty = true;
    }

    fn persist_settings_if_needed(&mut self) {
        if !self.settings_dirty {
            return;
        }

        if let Err(err) = save_settings(&self.settings_path, &self.settings) {
            log::error!("Failed to persist settings: {err:?}");
        } else {
            self.settings_dirty = false;
        }
    }

    /// Fire the midnight confetti once per celebration day.
    fn celebrate_if_due(&mut self, phase: CountdownPhase, now: &DateTime<Local>) {
        if phase != CountdownPhase::Celebrating {
            return;
        }
        let already_fired = self
            .last_celebration
            .as_ref()
            .is_some_and(|prev| is_same_day(prev, now));
        if !already_fired {
            log::info!("midnight surprise: celebrating {}", self.settings.honoree);
            self.effects.burst_confetti();
            self.last_celebration = Some(*now);
        }
    }

    fn controls_bar(&mut self, ctx: &egui::Context) {
        let fill = self.theme.app_background;
        egui::TopBottomPanel::top("controls")
            .frame(Frame::none().fill(fill).inner_margin(Margin::symmetric(12.0, 8.0)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("🎂").size(18.0));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let theme_label = if self.theme.is_dark { "☀" } else { "🌙" };
                        if ui.button(theme_label).on_hover_text("Toggle theme").clicked() {
                            self.toggle_theme(ctx);
                        }

                        let music_label = if self.settings.music_enabled {
                            "⏸ Pause"
                        } else {
                            "▶ Play"
                        };
                        if ui.button(music_label).on_hover_text("Toggle music").clicked() {
                            self.settings.music_enabled = !self.settings.music_enabled;
                            self.settings_dirty = true;
                            log::info!("music enabled: {}", self.settings.music_enabled);
                        }
                        if self.settings.music_enabled {
                            ui.label(RichText::new("♪").color(self.theme.accent));
                        }

                        if ui
                            .selectable_label(self.settings.effects_enabled, "✨")
                            .on_hover_text("Toggle effects")
                            .clicked()
                        {
                            self.settings.effects_enabled = !self.settings.effects_enabled;
                            self.settings_dirty = true;
                        }
                    });
                });
            });
    }
}

impl eframe::App for TributeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Local::now();
        if self.countdown.refresh(&now).is_some() {
            // A displayed unit ticked over; this frame already repaints it.
            log::debug!("countdown refreshed: {:?}", self.countdown.last_result());
        }
        let phase = self.countdown.phase(&now);
        self.celebrate_if_due(phase, &now);

        self.controls_bar(ctx);

        let app_background = self.theme.app_background;
        egui::CentralPanel::default()
            .frame(Frame::none().fill(app_background))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = sections::hero_section(
                        ui,
                        &self.theme,
                        &self.settings.content,
                        &self.settings.honoree,
                        self.countdown.last_result(),
                        phase,
                    );
                    if action == HeroAction::Surprise {
                        log::info!("surprise confetti requested");
                        self.effects.burst_confetti();
                    }

                    sections::gallery_section(ui, &self.theme, &self.settings.content);
                    sections::letter_section(
                        ui,
                        &self.theme,
                        &self.settings.content,
                        &self.settings.honoree,
                        &mut self.letter_open,
                    );
                    sections::gift_section(
                        ui,
                        &self.theme,
                        &self.settings.content,
                        &mut self.gift_open,
                    );
                    sections::closing_section(ui, &self.theme, &self.settings.content);
                });
            });

        if self.settings.effects_enabled {
            let animating = self.effects.paint(ctx, ctx.screen_rect());
            if animating {
                ctx.request_repaint();
            }
        }

        // The countdown only changes once per second; make sure a frame
        // arrives for the next tick even with effects off.
        ctx.request_repaint_after(Duration::from_secs(1));

        self.persist_settings_if_needed();
    }
}
