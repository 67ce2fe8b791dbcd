//! Theme module for the tribute shell
//!
//! Defines the TributeTheme structure and the light/dark palettes used by
//! every section.

use egui::Color32;

/// A tribute theme defining all colors used in the application
#[derive(Debug, Clone)]
pub struct TributeTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Counter and gallery card background color
    pub card_background: Color32,

    /// Card border color
    pub card_border: Color32,

    /// Primary accent (headline, occurrences counter)
    pub accent: Color32,

    /// Stronger accent used while celebrating
    pub accent_strong: Color32,

    /// Secondary accent (days counter, letter button)
    pub accent_alt: Color32,

    /// Primary text color
    pub text_primary: Color32,

    /// Secondary text color
    pub text_secondary: Color32,
}

impl TributeTheme {
    /// The pastel light palette of the original page
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(253, 226, 228),
            card_background: Color32::from_rgb(255, 250, 252),
            card_border: Color32::from_rgb(233, 213, 255),
            accent: Color32::from_rgb(219, 39, 119),
            accent_strong: Color32::from_rgb(236, 72, 153),
            accent_alt: Color32::from_rgb(147, 51, 234),
            text_primary: Color32::from_rgb(45, 45, 55),
            text_secondary: Color32::from_rgb(100, 100, 110),
        }
    }

    /// The deep-purple dark palette
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(15, 10, 31),
            card_background: Color32::from_rgb(30, 22, 52),
            card_border: Color32::from_rgb(60, 45, 95),
            accent: Color32::from_rgb(244, 114, 182),
            accent_strong: Color32::from_rgb(251, 146, 60),
            accent_alt: Color32::from_rgb(196, 145, 255),
            text_primary: Color32::from_rgb(240, 238, 248),
            text_secondary: Color32::from_rgb(175, 170, 190),
        }
    }

    pub fn from_name(name: &str) -> Self {
        if name.to_lowercase().contains("dark") {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn name(&self) -> &'static str {
        if self.is_dark {
            "dark"
        } else {
            "light"
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        visuals.widgets.noninteractive.bg_fill = self.card_background;
        visuals.widgets.inactive.bg_fill = self.card_background;
        visuals.widgets.hovered.bg_fill = self.card_border;
        visuals.widgets.active.bg_fill = self.card_border;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
