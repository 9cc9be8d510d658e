//! Text-style table for the app. Sizes follow the product's typography
//! scale and are multiplied by the font-size preference before being
//! installed into the egui style.

use eframe::egui::{FontFamily, FontId, Style, TextStyle};

/// Base sizes (in points) for each egui text style at the Medium setting
const BASE_SMALL: f32 = 11.0;
const BASE_BODY: f32 = 14.0;
const BASE_BUTTON: f32 = 14.0;
const BASE_HEADING: f32 = 22.0;
const BASE_MONOSPACE: f32 = 13.0;

/// Install the scaled text styles into the given style
pub fn apply_text_styles(style: &mut Style, scale: f32) {
    style.text_styles = [
        (
            TextStyle::Small,
            FontId::new(BASE_SMALL * scale, FontFamily::Proportional),
        ),
        (
            TextStyle::Body,
            FontId::new(BASE_BODY * scale, FontFamily::Proportional),
        ),
        (
            TextStyle::Button,
            FontId::new(BASE_BUTTON * scale, FontFamily::Proportional),
        ),
        (
            TextStyle::Heading,
            FontId::new(BASE_HEADING * scale, FontFamily::Proportional),
        ),
        (
            TextStyle::Monospace,
            FontId::new(BASE_MONOSPACE * scale, FontFamily::Monospace),
        ),
    ]
    .into();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_applies_to_every_style() {
        let mut style = Style::default();
        apply_text_styles(&mut style, 1.2);
        let body = style.text_styles.get(&TextStyle::Body).unwrap();
        assert!((body.size - BASE_BODY * 1.2).abs() < f32::EPSILON);
        let heading = style.text_styles.get(&TextStyle::Heading).unwrap();
        assert!((heading.size - BASE_HEADING * 1.2).abs() < f32::EPSILON);
    }
}
