//! Terminal capability detection and styling

use bmi_calculator::{Category, ColorChoice};
use owo_colors::OwoColorize;

/// Colour used for inline validation errors.
const ERROR_RGB: (u8, u8, u8) = (0xe7, 0x4c, 0x3c);

/// Detects whether stdout supports coloured output
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Detects terminal width, returning None if not available
pub fn terminal_width() -> Option<u16> {
    terminal_size::terminal_size().map(|(w, _)| w.0)
}

/// Check if terminal is narrow (< 60 columns)
pub fn is_narrow() -> bool {
    terminal_width().is_some_and(|w| w < 60)
}

/// Applies colour to output, or passes text through untouched when colour is
/// disabled.
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    color: bool,
}

impl Styler {
    pub fn new(choice: ColorChoice) -> Self {
        let color = match choice {
            ColorChoice::Auto => supports_color(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };
        Self { color }
    }

    #[cfg(test)]
    pub const fn plain() -> Self {
        Self { color: false }
    }

    /// The category label in its own colour
    pub fn category(self, category: Category) -> String {
        let label = category.label();
        if self.color {
            let (r, g, b) = category.color();
            label.truecolor(r, g, b).bold().to_string()
        } else {
            label.to_string()
        }
    }

    pub fn error(self, text: &str) -> String {
        if self.color {
            let (r, g, b) = ERROR_RGB;
            text.truecolor(r, g, b).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn heading(self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_disables_colour() {
        let styler = Styler::new(ColorChoice::Never);
        assert_eq!(styler.category(Category::Overweight), "Overweight");
        assert_eq!(styler.error("Invalid weight"), "Invalid weight");
    }

    #[test]
    fn always_adds_escape_codes() {
        let styler = Styler::new(ColorChoice::Always);
        let styled = styler.category(Category::NormalWeight);
        assert!(styled.contains("Normal weight"));
        assert!(styled.contains('\u{1b}'));
    }
}
