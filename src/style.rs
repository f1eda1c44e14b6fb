use egui::Color32;
use std::ops::RangeInclusive;

use crate::error::{DrawingError, DrawingResult};

pub const DEFAULT_COLOR: Color32 = Color32::GRAY;
pub const DEFAULT_LINE_WIDTH: f32 = 4.0;
pub const LINE_WIDTH_RANGE: RangeInclusive<f32> = 1.0..=20.0;

/// A palette entry shown as a swatch in the style bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedColor {
    pub name: &'static str,
    pub color: Color32,
}

impl NamedColor {
    pub const fn new(name: &'static str, color: Color32) -> Self {
        Self { name, color }
    }
}

pub const PALETTE: [NamedColor; 6] = [
    NamedColor::new("Gray", DEFAULT_COLOR),
    NamedColor::new("Red", Color32::from_rgb(255, 59, 48)),
    NamedColor::new("Orange", Color32::from_rgb(255, 149, 0)),
    NamedColor::new("Green", Color32::from_rgb(52, 199, 89)),
    NamedColor::new("Blue", Color32::from_rgb(0, 122, 255)),
    NamedColor::new("Purple", Color32::from_rgb(175, 82, 222)),
];

/// Color and width of a stroke.
///
/// This is a plain value: a stroke keeps its own copy, so changing the
/// current style later never reaches back into strokes already drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    color: Color32,
    width: f32,
}

impl StrokeStyle {
    /// Create a style, rejecting widths that are not finite and positive
    pub fn new(color: Color32, width: f32) -> DrawingResult<Self> {
        validate_width(width)?;
        Ok(Self { color, width })
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Copy of this style with another color
    pub fn with_color(self, color: Color32) -> Self {
        Self { color, ..self }
    }

    /// Copy of this style with another width
    pub fn with_width(self, width: f32) -> DrawingResult<Self> {
        validate_width(width)?;
        Ok(Self { width, ..self })
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            width: DEFAULT_LINE_WIDTH,
        }
    }
}

fn validate_width(width: f32) -> DrawingResult<()> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(DrawingError::InvalidInput(format!(
            "stroke width must be a positive number, got {width}"
        )))
    }
}

fn clamp_width(width: f32) -> f32 {
    width.clamp(*LINE_WIDTH_RANGE.start(), *LINE_WIDTH_RANGE.end())
}

/// The style currently selected by the user's controls.
///
/// The capture state machine reads it at drag start and whenever a control
/// changes; nothing reads the controls directly.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct StyleState {
    color: Color32,
    width: f32,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl StyleState {
    pub fn new(color: Color32, width: f32) -> DrawingResult<Self> {
        let mut state = Self { color, ..Self::default() };
        state.set_width(width)?;
        Ok(state)
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    /// Set the line width.
    ///
    /// Non-positive or non-finite widths are rejected; anything else is
    /// clamped into [`LINE_WIDTH_RANGE`].
    pub fn set_width(&mut self, width: f32) -> DrawingResult<()> {
        validate_width(width)?;
        self.width = clamp_width(width);
        Ok(())
    }

    /// Snapshot of the current selection, as copied into a new stroke
    pub fn current(&self) -> StrokeStyle {
        // Persisted state is not checked on load
        if validate_width(self.width).is_err() {
            return StrokeStyle::default().with_color(self.color);
        }
        StrokeStyle {
            color: self.color,
            width: clamp_width(self.width),
        }
    }

    /// Palette entry matching the current color, if any
    pub fn palette_entry(&self) -> Option<&'static NamedColor> {
        PALETTE.iter().find(|entry| entry.color == self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restored_width_is_clamped() {
        // As if loaded from storage written with a wider slider
        let restored = StyleState {
            color: Color32::RED,
            width: 50.0,
        };
        assert_eq!(restored.current().width(), *LINE_WIDTH_RANGE.end());

        let thin = StyleState {
            color: Color32::RED,
            width: 0.25,
        };
        assert_eq!(thin.current().width(), *LINE_WIDTH_RANGE.start());
    }

    #[test]
    fn test_restored_bad_width_falls_back_to_default() {
        let restored = StyleState {
            color: Color32::RED,
            width: f32::NAN,
        };
        let style = restored.current();
        assert_eq!(style.width(), DEFAULT_LINE_WIDTH);
        assert_eq!(style.color(), Color32::RED);
    }
}
