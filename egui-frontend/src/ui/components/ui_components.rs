//! # UI Components Module
//!
//! The reusable primitives the pages are assembled from: themed buttons
//! (variant × size), typography helpers, and labelled inputs with inline
//! error and helper text. All of them take the resolved theme so they
//! restyle with it.

use eframe::egui;

use crate::ui::components::theme::Theme;

/// Visual role of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Brand-filled call to action
    Primary,
    /// Orange/yellow secondary action
    Secondary,
    /// Transparent with brand border
    Outline,
    /// Text-only
    Ghost,
}

/// Horizontal padding presets, smallest to largest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonSize {
    fn min_size(&self) -> egui::Vec2 {
        match self {
            ButtonSize::Small => egui::vec2(70.0, 32.0),
            ButtonSize::Medium => egui::vec2(120.0, 40.0),
            ButtonSize::Large => egui::vec2(220.0, 44.0),
        }
    }
}

/// Typography scale from the product's Text component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVariant {
    TitleBold,
    TitleRegular,
    Subtitle,
    TextRegular,
    TextSmall,
    TextSmallBold,
}

impl TextVariant {
    fn font_size(&self) -> f32 {
        match self {
            TextVariant::TitleBold | TextVariant::TitleRegular => 26.0,
            TextVariant::Subtitle => 19.0,
            TextVariant::TextRegular => 15.0,
            TextVariant::TextSmall | TextVariant::TextSmallBold => 13.0,
        }
    }

    fn strong(&self) -> bool {
        matches!(
            self,
            TextVariant::TitleBold | TextVariant::Subtitle | TextVariant::TextSmallBold
        )
    }
}

/// Build a RichText in the given variant and color
pub fn text(content: impl Into<String>, variant: TextVariant, color: egui::Color32) -> egui::RichText {
    let rich = egui::RichText::new(content.into())
        .font(egui::FontId::proportional(variant.font_size()))
        .color(color);
    if variant.strong() {
        rich.strong()
    } else {
        rich
    }
}

/// Themed button. Disabled buttons render flat gray and never report clicks.
pub fn themed_button(
    ui: &mut egui::Ui,
    theme: &Theme,
    label: &str,
    variant: ButtonVariant,
    size: ButtonSize,
    enabled: bool,
) -> egui::Response {
    let (fill, text_color, stroke) = if !enabled {
        (
            theme.interactive.disabled_fill,
            theme.interactive.disabled_text,
            egui::Stroke::NONE,
        )
    } else {
        match variant {
            ButtonVariant::Primary => (
                theme.interactive.primary_fill,
                theme.typography.inverse,
                egui::Stroke::NONE,
            ),
            ButtonVariant::Secondary => (
                theme.interactive.secondary_fill,
                theme.typography.inverse,
                egui::Stroke::NONE,
            ),
            ButtonVariant::Outline => (
                egui::Color32::TRANSPARENT,
                theme.typography.accent,
                egui::Stroke::new(1.0, theme.interactive.outline),
            ),
            ButtonVariant::Ghost => (
                egui::Color32::TRANSPARENT,
                theme.typography.accent,
                egui::Stroke::NONE,
            ),
        }
    };

    let button = egui::Button::new(
        egui::RichText::new(label)
            .font(egui::FontId::proportional(15.0))
            .strong()
            .color(text_color),
    )
    .fill(fill)
    .stroke(stroke)
    .rounding(egui::Rounding::same(8.0))
    .min_size(size.min_size());

    let response = ui.add_enabled(enabled, button);
    if response.hovered() && enabled {
        // Hover feedback: repaint the fill slightly darker
        let hover_fill = match variant {
            ButtonVariant::Primary => theme.interactive.primary_hover,
            ButtonVariant::Secondary => theme.interactive.secondary_hover,
            _ => egui::Color32::TRANSPARENT,
        };
        if hover_fill != egui::Color32::TRANSPARENT {
            ui.painter().rect_filled(
                response.rect,
                egui::Rounding::same(8.0),
                hover_fill.gamma_multiply(0.25),
            );
        }
    }
    response
}

/// A labelled single-line input with optional inline error and helper text.
/// Returns the text edit's response so callers can react to changes.
pub fn labeled_input(
    ui: &mut egui::Ui,
    theme: &Theme,
    label: &str,
    value: &mut String,
    placeholder: &str,
    error: Option<&str>,
    helper: Option<&str>,
) -> egui::Response {
    ui.label(text(label, TextVariant::TextSmallBold, theme.typography.primary));
    ui.add_space(4.0);

    let response = ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(placeholder)
            .desired_width(360.0)
            .text_color(theme.typography.primary),
    );

    if let Some(error) = error {
        ui.add_space(2.0);
        ui.label(text(error, TextVariant::TextSmall, theme.feedback.error_text));
    } else if let Some(helper) = helper {
        ui.add_space(2.0);
        ui.label(text(helper, TextVariant::TextSmall, theme.typography.secondary));
    }

    response
}

/// Heading row used at the top of every card: subtitle text with an
/// optional small gray annotation beside it.
pub fn card_title(ui: &mut egui::Ui, theme: &Theme, title: &str, annotation: Option<&str>) {
    ui.horizontal(|ui| {
        ui.label(text(title, TextVariant::Subtitle, theme.typography.heading));
        if let Some(annotation) = annotation {
            ui.label(text(
                annotation,
                TextVariant::TextSmall,
                theme.typography.secondary,
            ));
        }
    });
    ui.separator();
}
