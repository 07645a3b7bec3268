//! Scalable Layout
//!
//! A container that scales a fixed design coordinate space to the size
//! the host gives it, and places its children proportionally.

pub mod attributes;
pub mod container;
pub mod element;
pub mod error;
pub mod params;
pub mod text;
pub mod view;

pub use attributes::AttributeSource;
pub use container::{compute_scale_factor, BaseConfig, BaseOrientation, Child, LayoutPass, ScalableLayout};
pub use element::Block;
pub use error::{LayoutError, LayoutResult};
pub use params::{ChildParams, ScaleParams};
pub use text::{HeuristicTextMeasurer, Label, TextElement, TextMeasurer, TextMetrics};
pub use view::{
    child_measure_spec, measure_child, Dimension, Element, LayoutParams, MeasureMode, MeasureSpec,
    Visibility,
};

/// Width and height in whole pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Edges of a placed element, relative to its parent's origin
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Bounds with the given origin and size. Edges saturate at the `i32` range.
    pub fn from_origin_size(left: i32, top: i32, size: Size) -> Self {
        Self {
            left,
            top,
            right: left.saturating_add(size.width),
            bottom: top.saturating_add(size.height),
        }
    }

    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Check if a point is inside the bounds
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}
