//! Host View Contract
//!
//! The pieces of a view tree the container relies on: measurement
//! constraints, generic layout parameters, visibility, and the element
//! trait children implement.

use std::fmt;

use crate::attributes::{parse_dimension, AttributeSource};
use crate::text::TextElement;
use crate::{Bounds, Size};

/// How a measurement constraint restricts a size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureMode {
    /// The element must be exactly this size
    Exactly,
    /// The element may be as large as it wants up to this size
    AtMost,
    /// No restriction; the size is only a hint
    Unspecified,
}

/// A measurement constraint for one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: i32,
}

impl MeasureSpec {
    pub fn exactly(size: i32) -> Self {
        Self { mode: MeasureMode::Exactly, size }
    }

    pub fn at_most(size: i32) -> Self {
        Self { mode: MeasureMode::AtMost, size }
    }

    pub fn unspecified(hint: i32) -> Self {
        Self { mode: MeasureMode::Unspecified, size: hint }
    }

    /// The concrete size carried by the constraint, whatever its mode
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Pick a final size for an element that would like to be `desired`
    pub fn resolve(&self, desired: i32) -> i32 {
        match self.mode {
            MeasureMode::Exactly => self.size,
            MeasureMode::AtMost => desired.min(self.size),
            MeasureMode::Unspecified => desired,
        }
    }
}

/// Requested size along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Dimension {
    /// As large as the parent allows
    MatchParent,
    /// Just large enough for the content
    WrapContent,
    /// A fixed pixel size
    Pixels(i32),
}

/// Generic layout parameters understood by every container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutParams {
    pub width: Dimension,
    pub height: Dimension,
}

impl LayoutParams {
    pub fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }

    /// Read `layout_width` / `layout_height`, falling back to wrap-content
    pub fn from_attributes<A: AttributeSource + ?Sized>(attrs: &A) -> Self {
        Self {
            width: parse_dimension(attrs, "layout_width", Dimension::WrapContent),
            height: parse_dimension(attrs, "layout_height", Dimension::WrapContent),
        }
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::new(Dimension::WrapContent, Dimension::WrapContent)
    }
}

/// Element visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Visibility {
    #[default]
    Visible,
    /// Not drawn, but still takes up space
    Invisible,
    /// Not drawn and takes no space; skipped by layout entirely
    Gone,
}

impl Visibility {
    pub fn is_gone(&self) -> bool {
        matches!(self, Visibility::Gone)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Visibility::Visible => "visible",
            Visibility::Invisible => "invisible",
            Visibility::Gone => "gone",
        };
        f.pad(name)
    }
}

/// An element living in the view tree
pub trait Element: fmt::Debug {
    fn visibility(&self) -> Visibility {
        Visibility::Visible
    }

    /// Decide the element's size under the given constraints
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec);

    /// The size chosen by the last call to [`Element::measure`]
    fn measured_size(&self) -> Size;

    /// Place the element within its parent
    fn layout(&mut self, bounds: Bounds);

    /// Access the element's text capability, if it renders text
    fn as_text(&self) -> Option<&dyn TextElement> {
        None
    }

    fn as_text_mut(&mut self) -> Option<&mut dyn TextElement> {
        None
    }
}

/// Derive a child's constraint from the parent's constraint and the
/// child's requested dimension
pub fn child_measure_spec(parent: MeasureSpec, requested: Dimension) -> MeasureSpec {
    let size = parent.size.max(0);

    match (requested, parent.mode) {
        (Dimension::Pixels(px), _) => MeasureSpec::exactly(px),
        (Dimension::MatchParent, MeasureMode::Exactly) => MeasureSpec::exactly(size),
        (Dimension::MatchParent, MeasureMode::AtMost) => MeasureSpec::at_most(size),
        (Dimension::WrapContent, MeasureMode::Exactly | MeasureMode::AtMost) => {
            MeasureSpec::at_most(size)
        }
        (Dimension::MatchParent | Dimension::WrapContent, MeasureMode::Unspecified) => {
            MeasureSpec::unspecified(size)
        }
    }
}

/// Measure a child the way any container does by default
pub fn measure_child(
    child: &mut dyn Element,
    params: &LayoutParams,
    parent_width: MeasureSpec,
    parent_height: MeasureSpec,
) {
    let width = child_measure_spec(parent_width, params.width);
    let height = child_measure_spec(parent_height, params.height);
    child.measure(width, height);
}
