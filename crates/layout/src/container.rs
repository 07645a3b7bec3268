//! Scalable Container
//!
//! Scales a design coordinate space to the size the host provides.
//!
//! One axis, picked by the base orientation, drives the scale factor: in
//! portrait the host's width constraint is taken as-is and the height is
//! derived from it, in landscape the other way round. Every child carrying
//! [`ScaleParams`] is then measured and placed by multiplying its
//! design-space geometry by that single factor.
//!
//! Dimensions and positions are truncated independently, so
//! `left + width` can land one pixel short of `trunc((rl + rw) * s)`.

use smallvec::SmallVec;

use crate::attributes::{parse_float, parse_int, parse_with, AttributeSource};
use crate::error::{LayoutError, LayoutResult};
use crate::params::{ChildParams, ScaleParams};
use crate::view::{measure_child, Dimension, Element, LayoutParams, MeasureSpec};
use crate::{Bounds, Size};

/// Default design width and height
pub const DEFAULT_BASE_SIZE: i32 = 640;

/// Which axis of the design space follows the host's constraint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BaseOrientation {
    /// Width drives the scale factor
    #[default]
    Portrait,
    /// Height drives the scale factor
    Landscape,
    /// An orientation code nothing understands; measuring fails
    Unrecognized(i32),
}

impl BaseOrientation {
    /// Map a numeric orientation code (`0` portrait, `1` landscape)
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => BaseOrientation::Portrait,
            1 => BaseOrientation::Landscape,
            other => BaseOrientation::Unrecognized(other),
        }
    }

    /// Parse `portrait`, `landscape` or a numeric code
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "portrait" => Some(BaseOrientation::Portrait),
            "landscape" => Some(BaseOrientation::Landscape),
            other => other.parse::<i32>().ok().map(Self::from_code),
        }
    }
}

/// Design-space reference dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseConfig {
    pub orientation: BaseOrientation,
    pub width: i32,
    pub height: i32,
}

impl BaseConfig {
    pub fn new(orientation: BaseOrientation, width: i32, height: i32) -> Self {
        Self { orientation, width, height }
    }

    pub fn portrait(width: i32, height: i32) -> Self {
        Self::new(BaseOrientation::Portrait, width, height)
    }

    pub fn landscape(width: i32, height: i32) -> Self {
        Self::new(BaseOrientation::Landscape, width, height)
    }

    /// Read `base_orientation`, `base_width` and `base_height`
    pub fn from_attributes<A: AttributeSource + ?Sized>(attrs: &A) -> Self {
        let defaults = Self::default();
        Self {
            orientation: parse_with(attrs, "base_orientation", defaults.orientation, BaseOrientation::parse),
            width: parse_int(attrs, "base_width", defaults.width),
            height: parse_int(attrs, "base_height", defaults.height),
        }
    }
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self::portrait(DEFAULT_BASE_SIZE, DEFAULT_BASE_SIZE)
    }
}

/// Result of a measurement pass, consumed by the layout step that follows
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutPass {
    /// The container's own measured size
    pub size: Size,
    pub scale_factor: f32,
}

/// Compute the container's own size and the scale factor for one pass
pub fn compute_scale_factor(
    config: &BaseConfig,
    width: MeasureSpec,
    height: MeasureSpec,
) -> LayoutResult<LayoutPass> {
    let (size, scale_factor) = match config.orientation {
        BaseOrientation::Portrait => {
            let w = width.size();
            let scale = w as f32 / config.width as f32;
            let h = (config.height as f32 * scale).round() as i32;
            (Size::new(w, h), scale)
        }
        BaseOrientation::Landscape => {
            let h = height.size();
            let scale = h as f32 / config.height as f32;
            let w = (config.width as f32 * scale).round() as i32;
            (Size::new(w, h), scale)
        }
        BaseOrientation::Unrecognized(code) => {
            return Err(LayoutError::invalid_configuration(format!(
                "unrecognized base orientation {}",
                code
            )));
        }
    };

    if !scale_factor.is_finite() {
        log::warn!(
            "Scale factor {} is not finite (base size {}x{})",
            scale_factor,
            config.width,
            config.height
        );
    }

    Ok(LayoutPass { size, scale_factor })
}

/// A child element together with its layout parameters
#[derive(Debug)]
pub struct Child {
    element: Box<dyn Element>,
    params: ChildParams,
    bounds: Option<Bounds>,
}

impl Child {
    pub fn element(&self) -> &dyn Element {
        &*self.element
    }

    pub fn element_mut(&mut self) -> &mut dyn Element {
        &mut *self.element
    }

    pub fn params(&self) -> &ChildParams {
        &self.params
    }

    /// Bounds assigned by the last layout step, `None` if the child was skipped
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }
}

/// Container that lays out children in a scaled design space
#[derive(Debug)]
pub struct ScalableLayout {
    config: BaseConfig,
    scale_factor: f32,
    children: SmallVec<[Child; 4]>,
}

impl Default for ScalableLayout {
    fn default() -> Self {
        Self::new(BaseConfig::default())
    }
}

impl ScalableLayout {
    pub fn new(config: BaseConfig) -> Self {
        Self {
            config,
            scale_factor: 1.0,
            children: SmallVec::new(),
        }
    }

    /// Build a container from declarative attributes
    ///
    /// Understands the base configuration attributes plus `scale_factor`,
    /// which only seeds [`ScalableLayout::scale_factor`] until the first
    /// measurement.
    pub fn from_attributes<A: AttributeSource + ?Sized>(attrs: &A) -> Self {
        let mut layout = Self::new(BaseConfig::from_attributes(attrs));
        layout.scale_factor = parse_float(attrs, "scale_factor", layout.scale_factor);
        layout
    }

    pub fn config(&self) -> &BaseConfig {
        &self.config
    }

    /// The scale factor computed by the last measurement
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Parameters for a child added without any
    pub fn generate_default_layout_params(&self) -> ScaleParams {
        ScaleParams::new(Dimension::Pixels(0), Dimension::Pixels(0))
    }

    pub fn generate_layout_params<A: AttributeSource + ?Sized>(&self, attrs: &A) -> ScaleParams {
        ScaleParams::from_attributes(attrs)
    }

    /// Adopt a child's generic parameters, with zeroed relative geometry
    pub fn convert_layout_params(&self, params: LayoutParams) -> ScaleParams {
        ScaleParams::from(params)
    }

    /// Append a child, returning its index
    pub fn add_child(&mut self, element: Box<dyn Element>, params: impl Into<ChildParams>) -> usize {
        self.children.push(Child {
            element,
            params: params.into(),
            bounds: None,
        });
        self.children.len() - 1
    }

    /// Append a child with default parameters
    pub fn add_element(&mut self, element: Box<dyn Element>) -> usize {
        let params = self.generate_default_layout_params();
        self.add_child(element, params)
    }

    /// Replace a child's parameters wholesale
    pub fn set_child_params(&mut self, index: usize, params: impl Into<ChildParams>) -> bool {
        match self.children.get_mut(index) {
            Some(child) => {
                child.params = params.into();
                true
            }
            None => false,
        }
    }

    pub fn remove_child(&mut self, index: usize) -> Option<Box<dyn Element>> {
        (index < self.children.len()).then(|| self.children.remove(index).element)
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Child> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Child> {
        self.children.get_mut(index)
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Measure the container and every child that takes up space
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> LayoutResult<LayoutPass> {
        let pass = compute_scale_factor(&self.config, width, height)?;
        self.scale_factor = pass.scale_factor;

        log::debug!(
            "Measured scalable layout at {}x{} (scale {})",
            pass.size.width,
            pass.size.height,
            pass.scale_factor
        );

        for (index, child) in self.children.iter_mut().enumerate() {
            if child.element.visibility().is_gone() {
                continue;
            }

            match &child.params {
                ChildParams::Scaled(params) => {
                    let size = params.scaled_size(pass.scale_factor);

                    if let Some(font_size) = params.scaled_font_size(pass.scale_factor) {
                        if let Some(text) = child.element.as_text_mut() {
                            text.set_font_size_px(font_size);
                        }
                    }

                    log::trace!("Child {} measured at {}x{}", index, size.width, size.height);
                    child.element.measure(
                        MeasureSpec::exactly(size.width),
                        MeasureSpec::exactly(size.height),
                    );
                }
                ChildParams::Generic(params) => {
                    measure_child(&mut *child.element, params, width, height);
                }
            }
        }

        Ok(pass)
    }

    /// Place every child that takes up space, using the scale from `pass`
    pub fn layout(&mut self, pass: &LayoutPass) {
        for (index, child) in self.children.iter_mut().enumerate() {
            if child.element.visibility().is_gone() {
                child.bounds = None;
                continue;
            }

            let (left, top) = match &child.params {
                ChildParams::Scaled(params) => params.scaled_origin(pass.scale_factor),
                ChildParams::Generic(_) => (0, 0),
            };

            let bounds = Bounds::from_origin_size(left, top, child.element.measured_size());
            log::trace!("Child {} placed at {:?}", index, bounds);

            child.element.layout(bounds);
            child.bounds = Some(bounds);
        }
    }

    /// Measure then lay out in one go
    pub fn perform_pass(&mut self, width: MeasureSpec, height: MeasureSpec) -> LayoutResult<LayoutPass> {
        let pass = self.measure(width, height)?;
        self.layout(&pass);
        Ok(pass)
    }
}
