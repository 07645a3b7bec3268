//! Text Elements
//!
//! The text capability the container reaches into when scaling font
//! sizes, plus a label element that measures itself from its text.

use std::fmt;

use crate::view::{Element, MeasureSpec, Visibility};
use crate::{Bounds, Size};

/// Font size a label starts with, in pixels
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Text metrics for layout
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Width of the text
    pub width: f32,
    /// Height of the text (typically line height)
    pub height: f32,
    /// Ascent (distance from baseline to top)
    pub ascent: f32,
    /// Descent (distance from baseline to bottom)
    pub descent: f32,
}

impl TextMetrics {
    pub fn new(width: f32, height: f32, ascent: f32, descent: f32) -> Self {
        Self { width, height, ascent, descent }
    }
}

/// Trait for measuring text
pub trait TextMeasurer: fmt::Debug {
    /// Measure a single line of text at the given pixel font size
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics;
}

/// Text measurer using fixed-width estimation
///
/// Average glyph width is taken as 0.6em and line height as 1.2em.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics {
        let width = text.chars().count() as f32 * font_size * 0.6;
        let height = font_size * 1.2;
        let ascent = font_size * 0.8;
        let descent = font_size * 0.2;

        TextMetrics::new(width, height, ascent, descent)
    }
}

/// An element that renders text at a configurable size
pub trait TextElement {
    /// Current font size in pixels
    fn font_size(&self) -> f32;

    /// Set the font size in pixels
    fn set_font_size_px(&mut self, px: f32);
}

/// A single line of text
#[derive(Debug)]
pub struct Label {
    text: String,
    font_size: f32,
    visibility: Visibility,
    measurer: Box<dyn TextMeasurer>,
    metrics: TextMetrics,
    measured: Size,
    bounds: Bounds,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: DEFAULT_FONT_SIZE,
            visibility: Visibility::Visible,
            measurer: Box::new(HeuristicTextMeasurer),
            metrics: TextMetrics::default(),
            measured: Size::default(),
            bounds: Bounds::default(),
        }
    }

    pub fn with_measurer(mut self, measurer: Box<dyn TextMeasurer>) -> Self {
        self.measurer = measurer;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Metrics computed during the last measurement
    pub fn metrics(&self) -> TextMetrics {
        self.metrics
    }

    /// Where the label was last placed
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl TextElement for Label {
    fn font_size(&self) -> f32 {
        self.font_size
    }

    fn set_font_size_px(&mut self, px: f32) {
        self.font_size = px;
    }
}

impl Element for Label {
    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) {
        self.metrics = self.measurer.measure(&self.text, self.font_size);
        self.measured = Size::new(
            width.resolve(self.metrics.width.round() as i32),
            height.resolve(self.metrics.height.round() as i32),
        );
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn layout(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn as_text(&self) -> Option<&dyn TextElement> {
        Some(self)
    }

    fn as_text_mut(&mut self) -> Option<&mut dyn TextElement> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every glyph is one em wide and lines are exactly one em tall
    #[derive(Debug)]
    struct EmMeasurer;

    impl TextMeasurer for EmMeasurer {
        fn measure(&self, text: &str, font_size: f32) -> TextMetrics {
            let width = text.chars().count() as f32 * font_size;
            TextMetrics::new(width, font_size, font_size * 0.75, font_size * 0.25)
        }
    }

    #[test]
    fn test_heuristic_measurement() {
        let metrics = HeuristicTextMeasurer.measure("Hello", 16.0);

        // 5 chars * 16 * 0.6 = 48
        assert!((metrics.width - 48.0).abs() < 0.1);
        assert!((metrics.height - 19.2).abs() < 0.1);
    }

    #[test]
    fn test_empty_text() {
        let metrics = HeuristicTextMeasurer.measure("", 16.0);
        assert_eq!(metrics.width, 0.0);
    }

    #[test]
    fn test_label_wraps_content() {
        let mut label = Label::new("Hello");
        label.set_font_size_px(20.0);
        label.measure(MeasureSpec::at_most(500), MeasureSpec::unspecified(0));

        // 5 * 20 * 0.6 = 60, 20 * 1.2 = 24
        assert_eq!(label.measured_size(), Size::new(60, 24));
    }

    #[test]
    fn test_label_exact_size() {
        let mut label = Label::new("Hello");
        label.measure(MeasureSpec::exactly(100), MeasureSpec::exactly(25));
        assert_eq!(label.measured_size(), Size::new(100, 25));
    }

    #[test]
    fn test_label_with_custom_measurer() {
        let mut label = Label::new("Wide").with_measurer(Box::new(EmMeasurer));
        label.set_font_size_px(10.0);
        label.measure(MeasureSpec::unspecified(0), MeasureSpec::at_most(8));

        assert_eq!(label.text(), "Wide");
        assert_eq!(label.metrics(), TextMetrics::new(40.0, 10.0, 7.5, 2.5));
        assert_eq!(label.measured_size(), Size::new(40, 8));

        label.layout(Bounds::from_origin_size(3, 4, label.measured_size()));
        assert_eq!(label.bounds(), Bounds::new(3, 4, 43, 12));
    }

    #[test]
    fn test_label_is_text_capable() {
        let mut label = Label::new("Hi");
        let text = label.as_text_mut().map(|t| {
            t.set_font_size_px(30.0);
            t.font_size()
        });
        assert_eq!(text, Some(30.0));
        assert_eq!(label.as_text().map(|t| t.font_size()), Some(30.0));
    }
}
