//! Rendering for the tribute page sections: hero counters, gallery,
//! letter, gift box, and closing lines.

use egui::{Color32, Frame, Margin, RichText, Rounding, Stroke};

use crate::models::tribute::TributeContent;
use crate::services::countdown::{CountdownPhase, CountdownResult};

use super::theme::TributeTheme;

const CARD_ROUNDING: f32 = 12.0;
const SECTION_SPACING: f32 = 28.0;
const GALLERY_COLUMNS: usize = 3;

/// What the hero section asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroAction {
    None,
    Surprise,
}

/// Accent color for the counters, pulsing while the countdown is in its
/// final hour.
fn phase_accent(theme: &TributeTheme, phase: CountdownPhase, ctx: &egui::Context) -> Color32 {
    match phase {
        CountdownPhase::Celebrating => theme.accent_strong,
        CountdownPhase::Imminent => {
            let pulse_phase = (ctx.input(|i| i.time) * 2.0) % 1.0;
            let pulse_alpha = 155 + ((pulse_phase * 100.0) as u8);
            ctx.request_repaint();
            Color32::from_rgba_unmultiplied(
                theme.accent_strong.r(),
                theme.accent_strong.g(),
                theme.accent_strong.b(),
                pulse_alpha,
            )
        }
        _ => theme.accent,
    }
}

fn card_frame(theme: &TributeTheme) -> Frame {
    Frame::none()
        .fill(theme.card_background)
        .rounding(Rounding::same(CARD_ROUNDING))
        .stroke(Stroke::new(1.0, theme.card_border))
        .inner_margin(Margin::same(16.0))
}

fn counter_card(
    ui: &mut egui::Ui,
    theme: &TributeTheme,
    label: &str,
    value: String,
    value_color: Color32,
) {
    card_frame(theme).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(label).size(13.0).color(theme.text_secondary));
            ui.label(RichText::new(value).size(36.0).strong().color(value_color));
        });
    });
}

pub fn hero_section(
    ui: &mut egui::Ui,
    theme: &TributeTheme,
    content: &TributeContent,
    honoree: &str,
    result: Option<CountdownResult>,
    phase: CountdownPhase,
) -> HeroAction {
    let mut action = HeroAction::None;

    ui.add_space(SECTION_SPACING);
    ui.vertical_centered(|ui| {
        let headline = if phase == CountdownPhase::Celebrating {
            format!("It's your day, {honoree}! 🎂")
        } else {
            format!("{}, {honoree} 💖", content.greeting)
        };
        ui.label(
            RichText::new(headline)
                .size(44.0)
                .strong()
                .color(phase_accent(theme, phase, ui.ctx())),
        );
        ui.add_space(8.0);
        ui.label(
            RichText::new(&content.hero_subtitle)
                .size(16.0)
                .color(theme.text_secondary),
        );

        ui.add_space(16.0);
        if ui.button(RichText::new(&content.surprise_label).size(16.0)).clicked() {
            action = HeroAction::Surprise;
        }

        ui.add_space(20.0);
        let accent = phase_accent(theme, phase, ui.ctx());
        ui.columns(3, |columns| {
            let (occurrences, days, clock) = match result {
                Some(result) => (
                    result.occurrences.to_string(),
                    result.days_remaining.to_string(),
                    format!(
                        "{:02}:{:02}:{:02}",
                        result.hours_remaining,
                        result.minutes_remaining,
                        result.seconds_remaining
                    ),
                ),
                None => ("–".to_string(), "–".to_string(), "–".to_string()),
            };
            counter_card(
                &mut columns[0],
                theme,
                "Birthdays together",
                occurrences,
                theme.accent,
            );
            counter_card(
                &mut columns[1],
                theme,
                "Days until the next one",
                days,
                theme.accent_alt,
            );
            counter_card(&mut columns[2], theme, "Counting down", clock, accent);
        });
    });

    action
}

pub fn gallery_section(ui: &mut egui::Ui, theme: &TributeTheme, content: &TributeContent) {
    ui.add_space(SECTION_SPACING);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(&content.gallery_title)
                .size(30.0)
                .strong()
                .color(theme.accent),
        );
    });
    ui.add_space(12.0);

    for row in content.gallery_captions.chunks(GALLERY_COLUMNS) {
        ui.columns(GALLERY_COLUMNS, |columns| {
            for (column, caption) in columns.iter_mut().zip(row) {
                card_frame(theme).show(column, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("🖼").size(40.0));
                        ui.add_space(6.0);
                        ui.label(
                            RichText::new(format!("\"{caption}\""))
                                .italics()
                                .size(13.0)
                                .color(theme.text_secondary),
                        );
                    });
                });
            }
        });
        ui.add_space(8.0);
    }
}

pub fn letter_section(
    ui: &mut egui::Ui,
    theme: &TributeTheme,
    content: &TributeContent,
    honoree: &str,
    open: &mut bool,
) {
    ui.add_space(SECTION_SPACING);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(&content.letter_title)
                .size(30.0)
                .strong()
                .color(theme.accent),
        );
        ui.add_space(10.0);

        let label = if *open { "Hide Letter" } else { "Open Letter" };
        if ui.button(RichText::new(label).size(15.0)).clicked() {
            *open = !*open;
        }

        if *open {
            ui.add_space(12.0);
            card_frame(theme).show(ui, |ui| {
                ui.set_max_width(520.0);
                ui.label(
                    RichText::new(format!("My dearest {honoree},"))
                        .italics()
                        .size(15.0)
                        .color(theme.accent_alt),
                );
                for paragraph in &content.letter_paragraphs {
                    ui.add_space(8.0);
                    ui.label(RichText::new(paragraph).size(14.0));
                }
            });
        }
    });
}

pub fn gift_section(
    ui: &mut egui::Ui,
    theme: &TributeTheme,
    content: &TributeContent,
    open: &mut bool,
) {
    ui.add_space(SECTION_SPACING);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(&content.gift_title)
                .size(30.0)
                .strong()
                .color(theme.accent),
        );
        ui.add_space(10.0);

        let gift = egui::Button::new(RichText::new("🎁").size(64.0)).frame(false);
        if ui.add(gift).on_hover_text("Open me").clicked() {
            *open = true;
        }

        if *open {
            ui.add_space(12.0);
            card_frame(theme).show(ui, |ui| {
                ui.set_max_width(420.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(&content.gift_message)
                            .size(16.0)
                            .strong()
                            .color(theme.accent),
                    );
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(&content.gift_footnote)
                            .size(13.0)
                            .color(theme.text_secondary),
                    );
                });
            });
        }
    });
}

pub fn closing_section(ui: &mut egui::Ui, theme: &TributeTheme, content: &TributeContent) {
    ui.add_space(SECTION_SPACING);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(&content.closing_headline)
                .size(26.0)
                .strong()
                .color(theme.accent_alt),
        );
        for line in &content.closing_lines {
            ui.add_space(6.0);
            ui.label(RichText::new(line).size(14.0).color(theme.text_secondary));
        }
    });
    ui.add_space(SECTION_SPACING);
}
