//! Scale Parameters
//!
//! Per-child geometry expressed in design-space units.

use crate::attributes::{parse_float, AttributeSource};
use crate::view::{Dimension, LayoutParams};
use crate::Size;

/// Design-space geometry of one child of a scalable container
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleParams {
    /// Generic width/height request carried alongside the relative geometry
    pub base: LayoutParams,
    pub relative_left: f32,
    pub relative_top: f32,
    pub relative_width: f32,
    pub relative_height: f32,
    /// Design-space font size; zero leaves the child's font alone
    pub relative_font_size: f32,
}

impl ScaleParams {
    pub fn new(width: Dimension, height: Dimension) -> Self {
        LayoutParams::new(width, height).into()
    }

    /// Read relative geometry from attributes
    ///
    /// Each of `left`, `top`, `width`, `height` and `font_size` is read on
    /// its own; anything absent or malformed stays zero.
    pub fn from_attributes<A: AttributeSource + ?Sized>(attrs: &A) -> Self {
        Self {
            base: LayoutParams::from_attributes(attrs),
            relative_left: parse_float(attrs, "left", 0.0),
            relative_top: parse_float(attrs, "top", 0.0),
            relative_width: parse_float(attrs, "width", 0.0),
            relative_height: parse_float(attrs, "height", 0.0),
            relative_font_size: parse_float(attrs, "font_size", 0.0),
        }
    }

    pub fn with_frame(mut self, left: f32, top: f32, width: f32, height: f32) -> Self {
        self.relative_left = left;
        self.relative_top = top;
        self.relative_width = width;
        self.relative_height = height;
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.relative_font_size = font_size;
        self
    }

    /// Pixel size at the given scale, each axis truncated on its own
    pub fn scaled_size(&self, scale_factor: f32) -> Size {
        Size::new(
            (self.relative_width * scale_factor) as i32,
            (self.relative_height * scale_factor) as i32,
        )
    }

    /// Pixel origin at the given scale, truncated independently of the size
    pub fn scaled_origin(&self, scale_factor: f32) -> (i32, i32) {
        (
            (self.relative_left * scale_factor) as i32,
            (self.relative_top * scale_factor) as i32,
        )
    }

    /// Pixel font size at the given scale, if this child overrides its font
    pub fn scaled_font_size(&self, scale_factor: f32) -> Option<f32> {
        (self.relative_font_size > 0.0).then(|| self.relative_font_size * scale_factor)
    }
}

impl From<LayoutParams> for ScaleParams {
    fn from(base: LayoutParams) -> Self {
        Self {
            base,
            relative_left: 0.0,
            relative_top: 0.0,
            relative_width: 0.0,
            relative_height: 0.0,
            relative_font_size: 0.0,
        }
    }
}

/// Layout parameters of a child, as stored by the container
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChildParams {
    /// Positioned and sized in design space
    Scaled(ScaleParams),
    /// Measured by the host's defaults and pinned to the origin
    Generic(LayoutParams),
}

impl ChildParams {
    pub fn as_scaled(&self) -> Option<&ScaleParams> {
        match self {
            ChildParams::Scaled(params) => Some(params),
            ChildParams::Generic(_) => None,
        }
    }

    /// The generic width/height request, whichever variant this is
    pub fn layout_params(&self) -> &LayoutParams {
        match self {
            ChildParams::Scaled(params) => &params.base,
            ChildParams::Generic(params) => params,
        }
    }
}

impl From<ScaleParams> for ChildParams {
    fn from(params: ScaleParams) -> Self {
        ChildParams::Scaled(params)
    }
}

impl From<LayoutParams> for ChildParams {
    fn from(params: LayoutParams) -> Self {
        ChildParams::Generic(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_request() -> ScaleParams {
        ScaleParams::new(Dimension::Pixels(0), Dimension::Pixels(0))
    }

    #[test]
    fn test_new_leaves_relative_fields_zero() {
        let params = ScaleParams::new(Dimension::Pixels(0), Dimension::Pixels(0));

        assert_eq!(params.base, LayoutParams::new(Dimension::Pixels(0), Dimension::Pixels(0)));
        assert_eq!(params.relative_left, 0.0);
        assert_eq!(params.relative_width, 0.0);
        assert_eq!(params.relative_font_size, 0.0);
    }

    #[test]
    fn test_from_layout_params_keeps_request() {
        let generic = LayoutParams::new(Dimension::MatchParent, Dimension::Pixels(48));
        let params = ScaleParams::from(generic);

        assert_eq!(params.base, generic);
        assert_eq!(params.relative_height, 0.0);
    }

    #[test]
    fn test_from_attributes() {
        let attrs = [
            ("left", "100"),
            ("top", "100.5"),
            ("width", "200"),
            ("height", "50"),
            ("font_size", "20"),
        ];
        let params = ScaleParams::from_attributes(&attrs[..]);

        assert_eq!(params.relative_left, 100.0);
        assert_eq!(params.relative_top, 100.5);
        assert_eq!(params.relative_width, 200.0);
        assert_eq!(params.relative_height, 50.0);
        assert_eq!(params.relative_font_size, 20.0);
    }

    #[test]
    fn test_from_attributes_missing_and_malformed() {
        let attrs = [("left", "12"), ("width", "wide")];
        let params = ScaleParams::from_attributes(&attrs[..]);

        assert_eq!(params.relative_left, 12.0);
        assert_eq!(params.relative_top, 0.0);
        assert_eq!(params.relative_width, 0.0);
        assert_eq!(params.base, LayoutParams::default());
    }

    #[test]
    fn test_scaled_geometry() {
        let params = zero_request().with_frame(100.0, 100.0, 200.0, 50.0);

        assert_eq!(params.scaled_size(0.5), Size::new(100, 25));
        assert_eq!(params.scaled_origin(0.5), (50, 50));
    }

    #[test]
    fn test_scaled_geometry_truncates() {
        let params = zero_request().with_frame(3.0, 3.0, 3.0, 3.0);

        // 3 * 0.5 = 1.5 on every axis
        assert_eq!(params.scaled_size(0.5), Size::new(1, 1));
        assert_eq!(params.scaled_origin(0.5), (1, 1));
    }

    #[test]
    fn test_scaled_font_size() {
        let params = zero_request().with_font_size(20.0);
        assert_eq!(params.scaled_font_size(1.5), Some(30.0));
        assert_eq!(zero_request().scaled_font_size(1.5), None);
    }

    #[test]
    fn test_child_params_variants() {
        let scaled = ChildParams::from(zero_request());
        let generic = ChildParams::from(LayoutParams::default());

        assert!(scaled.as_scaled().is_some());
        assert!(generic.as_scaled().is_none());
        assert_eq!(generic.layout_params(), &LayoutParams::default());
    }
}
