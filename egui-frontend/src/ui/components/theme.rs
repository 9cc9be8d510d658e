//! # Theme Configuration
//!
//! Centralized color and style configuration. Every renderer pulls its
//! colors from the resolved `Theme` so switching mode, contrast or the
//! color-blind palette restyles the whole app in one place.
//!
//! A `Theme` is resolved from the persisted preferences
//! (`ThemeConfig`/`AccessibilityConfig`) plus the system dark-mode hint:
//! light, dark and high/low-contrast variants share the same structure and
//! only differ in the palette constants below.

use eframe::egui::{self, Color32};

use crate::preferences::{AccessibilityConfig, ContrastMode, FontSize, ThemeConfig, ThemeMode};

/// Resolved theme used by the renderers
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Whether this is the dark variant (drives the egui visuals base)
    pub dark: bool,
    /// Background and container colors
    pub layout: LayoutColors,
    /// Text colors
    pub typography: TypographyColors,
    /// Buttons, inputs and other interactive elements
    pub interactive: InteractiveColors,
    /// Statement table colors
    pub table: TableColors,
    /// Dashboard chart colors
    pub chart: ChartColors,
    /// Success/error banners and amount coloring
    pub feedback: FeedbackColors,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutColors {
    pub gradient_top: Color32,
    pub gradient_bottom: Color32,
    pub card_background: Color32,
    pub card_border: Color32,
    pub card_shadow: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypographyColors {
    /// Main content text on cards
    pub primary: Color32,
    /// Less prominent text (hints, helper lines)
    pub secondary: Color32,
    /// Headings on cards
    pub heading: Color32,
    /// Text placed directly on the gradient background
    pub inverse: Color32,
    /// Brand accent (links, active tab text)
    pub accent: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InteractiveColors {
    pub primary_fill: Color32,
    pub primary_hover: Color32,
    pub secondary_fill: Color32,
    pub secondary_hover: Color32,
    pub outline: Color32,
    pub disabled_fill: Color32,
    pub disabled_text: Color32,
    pub focus_ring: Color32,
    pub input_background: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableColors {
    pub header_background: Color32,
    pub header_text: Color32,
    pub row_even: Color32,
    pub row_odd: Color32,
    pub border: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartColors {
    /// Entries series (credits + loans)
    pub entries: Color32,
    /// Exits series (debits)
    pub exits: Color32,
    pub grid: Color32,
    pub axis_text: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackColors {
    pub success_background: Color32,
    pub success_text: Color32,
    pub error_background: Color32,
    pub error_text: Color32,
    /// Amount color for inflows
    pub income: Color32,
    /// Amount color for outflows
    pub expense: Color32,
}

const LIGHT: Theme = Theme {
    dark: false,
    layout: LayoutColors {
        gradient_top: Color32::from_rgb(0, 77, 97),
        gradient_bottom: Color32::from_rgb(14, 165, 233),
        card_background: Color32::WHITE,
        card_border: Color32::from_rgb(220, 220, 220),
        card_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 20),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(55, 65, 81),
        secondary: Color32::from_rgb(120, 130, 140),
        heading: Color32::from_rgb(17, 24, 39),
        inverse: Color32::WHITE,
        accent: Color32::from_rgb(14, 165, 233),
    },
    interactive: InteractiveColors {
        primary_fill: Color32::from_rgb(14, 165, 233),
        primary_hover: Color32::from_rgb(2, 132, 199),
        secondary_fill: Color32::from_rgb(249, 115, 22),
        secondary_hover: Color32::from_rgb(234, 88, 12),
        outline: Color32::from_rgb(14, 165, 233),
        disabled_fill: Color32::from_rgb(229, 231, 235),
        disabled_text: Color32::from_rgb(156, 163, 175),
        focus_ring: Color32::from_rgb(56, 189, 248),
        input_background: Color32::from_rgb(243, 244, 246),
    },
    table: TableColors {
        header_background: Color32::from_rgb(0, 77, 97),
        header_text: Color32::WHITE,
        row_even: Color32::WHITE,
        row_odd: Color32::from_rgb(248, 250, 252),
        border: Color32::from_rgb(226, 232, 240),
    },
    chart: ChartColors {
        entries: Color32::from_rgb(14, 165, 233),
        exits: Color32::from_rgb(249, 115, 22),
        grid: Color32::from_rgb(186, 230, 253),
        axis_text: Color32::from_rgb(55, 65, 81),
    },
    feedback: FeedbackColors {
        success_background: Color32::from_rgb(220, 252, 231),
        success_text: Color32::from_rgb(22, 101, 52),
        error_background: Color32::from_rgb(254, 226, 226),
        error_text: Color32::from_rgb(153, 27, 27),
        income: Color32::from_rgb(22, 163, 74),
        expense: Color32::from_rgb(220, 38, 38),
    },
};

const DARK: Theme = Theme {
    dark: true,
    layout: LayoutColors {
        gradient_top: Color32::from_rgb(11, 16, 32),
        gradient_bottom: Color32::from_rgb(30, 27, 75),
        card_background: Color32::from_rgb(30, 34, 48),
        card_border: Color32::from_rgb(55, 62, 80),
        card_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 60),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(226, 232, 240),
        secondary: Color32::from_rgb(148, 163, 184),
        heading: Color32::from_rgb(248, 250, 252),
        inverse: Color32::from_rgb(241, 245, 249),
        accent: Color32::from_rgb(139, 131, 246),
    },
    interactive: InteractiveColors {
        primary_fill: Color32::from_rgb(91, 84, 212),
        primary_hover: Color32::from_rgb(109, 102, 224),
        secondary_fill: Color32::from_rgb(234, 179, 8),
        secondary_hover: Color32::from_rgb(202, 138, 4),
        outline: Color32::from_rgb(139, 131, 246),
        disabled_fill: Color32::from_rgb(51, 56, 72),
        disabled_text: Color32::from_rgb(100, 108, 128),
        focus_ring: Color32::from_rgb(165, 158, 255),
        input_background: Color32::from_rgb(40, 45, 62),
    },
    table: TableColors {
        header_background: Color32::from_rgb(49, 46, 129),
        header_text: Color32::from_rgb(241, 245, 249),
        row_even: Color32::from_rgb(30, 34, 48),
        row_odd: Color32::from_rgb(36, 41, 58),
        border: Color32::from_rgb(55, 62, 80),
    },
    chart: ChartColors {
        entries: Color32::from_rgb(139, 131, 246),
        exits: Color32::from_rgb(234, 179, 8),
        grid: Color32::from_rgb(55, 62, 80),
        axis_text: Color32::from_rgb(203, 213, 225),
    },
    feedback: FeedbackColors {
        success_background: Color32::from_rgb(20, 54, 36),
        success_text: Color32::from_rgb(134, 239, 172),
        error_background: Color32::from_rgb(68, 24, 24),
        error_text: Color32::from_rgb(252, 165, 165),
        income: Color32::from_rgb(74, 222, 128),
        expense: Color32::from_rgb(248, 113, 113),
    },
};

impl Theme {
    /// Resolve the active theme from the persisted preferences.
    /// `system_dark` is the windowing system's dark-mode hint, used when the
    /// mode is `Auto`.
    pub fn resolve(
        theme: &ThemeConfig,
        accessibility: &AccessibilityConfig,
        system_dark: bool,
    ) -> Theme {
        let dark = match theme.mode {
            ThemeMode::Dark => true,
            ThemeMode::Light => false,
            ThemeMode::Auto => system_dark,
        };
        let mut resolved = if dark { DARK.clone() } else { LIGHT.clone() };

        // The accessibility flag forces high contrast over the theme choice
        let contrast = if accessibility.high_contrast {
            ContrastMode::High
        } else {
            theme.contrast
        };
        match contrast {
            ContrastMode::High => resolved.apply_high_contrast(),
            ContrastMode::Low => resolved.apply_low_contrast(),
            ContrastMode::Normal => {}
        }

        if accessibility.color_blind_friendly {
            resolved.apply_color_blind_palette();
        }

        resolved
    }

    /// Push text and amounts toward full black/white and harden borders
    fn apply_high_contrast(&mut self) {
        if self.dark {
            self.typography.primary = Color32::WHITE;
            self.typography.secondary = Color32::from_rgb(220, 220, 220);
            self.typography.heading = Color32::WHITE;
            self.layout.card_background = Color32::BLACK;
            self.layout.card_border = Color32::WHITE;
            self.table.border = Color32::WHITE;
        } else {
            self.typography.primary = Color32::BLACK;
            self.typography.secondary = Color32::from_rgb(40, 40, 40);
            self.typography.heading = Color32::BLACK;
            self.layout.card_border = Color32::BLACK;
            self.table.border = Color32::BLACK;
            self.feedback.income = Color32::from_rgb(0, 100, 0);
            self.feedback.expense = Color32::from_rgb(139, 0, 0);
        }
    }

    /// Soften text toward the card background
    fn apply_low_contrast(&mut self) {
        self.typography.primary = blend(self.typography.primary, self.layout.card_background, 0.25);
        self.typography.secondary =
            blend(self.typography.secondary, self.layout.card_background, 0.25);
        self.typography.heading = blend(self.typography.heading, self.layout.card_background, 0.25);
    }

    /// Swap the red/green direction coding for a blue/orange pair that
    /// survives the common color-vision deficiencies
    fn apply_color_blind_palette(&mut self) {
        self.feedback.income = Color32::from_rgb(37, 99, 235);
        self.feedback.expense = Color32::from_rgb(217, 119, 6);
        self.chart.entries = Color32::from_rgb(37, 99, 235);
        self.chart.exits = Color32::from_rgb(217, 119, 6);
    }

    /// Amount color for a movement direction
    pub fn amount_color(&self, inflow: bool) -> Color32 {
        if inflow {
            self.feedback.income
        } else {
            self.feedback.expense
        }
    }

    /// Apply the theme to the egui style: visuals base, widget colors,
    /// font-size scaling and the reduced-motion switch.
    pub fn apply_to_style(
        &self,
        ctx: &egui::Context,
        font_size: FontSize,
        reduced_motion: bool,
    ) {
        let mut style = (*ctx.style()).clone();

        let mut visuals = if self.dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.panel_fill = self.layout.gradient_top;
        visuals.window_fill = self.layout.card_background;
        visuals.window_stroke = egui::Stroke::new(1.0, self.layout.card_border);
        visuals.widgets.noninteractive.fg_stroke.color = self.typography.primary;
        visuals.widgets.inactive.bg_fill = self.interactive.input_background;
        visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.5, self.interactive.focus_ring);
        visuals.selection.bg_fill = self.interactive.primary_fill;
        visuals.selection.stroke = egui::Stroke::new(1.0, self.typography.inverse);
        visuals.extreme_bg_color = self.interactive.input_background;
        style.visuals = visuals;

        crate::ui::fonts::apply_text_styles(&mut style, font_size.scale());

        style.animation_time = if reduced_motion { 0.0 } else { 0.1 };

        ctx.set_style(style);
    }
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let lerp = |x: u8, y: u8| -> u8 {
        (x as f32 * (1.0 - t) + y as f32 * t).round().clamp(0.0, 255.0) as u8
    };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_resolution() {
        let accessibility = AccessibilityConfig::default();

        let mut config = ThemeConfig::default();
        assert!(!Theme::resolve(&config, &accessibility, true).dark);

        config.mode = ThemeMode::Dark;
        assert!(Theme::resolve(&config, &accessibility, false).dark);

        config.mode = ThemeMode::Auto;
        assert!(Theme::resolve(&config, &accessibility, true).dark);
        assert!(!Theme::resolve(&config, &accessibility, false).dark);
    }

    #[test]
    fn test_accessibility_forces_high_contrast() {
        let config = ThemeConfig::default();
        let accessibility = AccessibilityConfig {
            high_contrast: true,
            ..Default::default()
        };
        let theme = Theme::resolve(&config, &accessibility, false);
        assert_eq!(theme.typography.primary, Color32::BLACK);
        assert_eq!(theme.layout.card_border, Color32::BLACK);
    }

    #[test]
    fn test_color_blind_palette_swaps_direction_colors() {
        let config = ThemeConfig::default();
        let accessibility = AccessibilityConfig {
            color_blind_friendly: true,
            ..Default::default()
        };
        let theme = Theme::resolve(&config, &accessibility, false);
        assert_eq!(theme.feedback.income, theme.chart.entries);
        assert_ne!(theme.feedback.income, LIGHT.feedback.income);
        // Blue/orange, not red/green
        assert!(theme.feedback.income.b() > theme.feedback.income.r());
        assert!(theme.feedback.expense.r() > theme.feedback.expense.b());
    }

    #[test]
    fn test_amount_color_follows_direction() {
        let theme = LIGHT.clone();
        assert_eq!(theme.amount_color(true), theme.feedback.income);
        assert_eq!(theme.amount_color(false), theme.feedback.expense);
    }

    #[test]
    fn test_low_contrast_softens_text() {
        let config = ThemeConfig {
            contrast: ContrastMode::Low,
            ..Default::default()
        };
        let theme = Theme::resolve(&config, &AccessibilityConfig::default(), false);
        // Softened toward white, so strictly lighter than the normal palette
        assert!(theme.typography.primary.r() > LIGHT.typography.primary.r());
    }
}
