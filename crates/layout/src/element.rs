//! Plain Elements
//!
//! A box with an intrinsic size and no content of its own.

use crate::view::{Element, MeasureSpec, Visibility};
use crate::{Bounds, Size};

/// A plain rectangular element
#[derive(Debug, Default)]
pub struct Block {
    intrinsic: Size,
    visibility: Visibility,
    measured: Size,
    bounds: Option<Bounds>,
    last_specs: Option<(MeasureSpec, MeasureSpec)>,
    measure_count: usize,
}

impl Block {
    /// Create a block that would like to be `intrinsic` pixels large
    pub fn new(intrinsic: Size) -> Self {
        Self {
            intrinsic,
            ..Self::default()
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Where the block was last placed, if it has been laid out
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Constraints passed to the last measurement
    pub fn last_specs(&self) -> Option<(MeasureSpec, MeasureSpec)> {
        self.last_specs
    }

    pub fn measure_count(&self) -> usize {
        self.measure_count
    }
}

impl Element for Block {
    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) {
        self.measured = Size::new(
            width.resolve(self.intrinsic.width),
            height.resolve(self.intrinsic.height),
        );
        self.last_specs = Some((width, height));
        self.measure_count += 1;
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn layout(&mut self, bounds: Bounds) {
        self.bounds = Some(bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_records_measurement() {
        let mut block = Block::new(Size::new(30, 40));
        block.measure(MeasureSpec::at_most(20), MeasureSpec::unspecified(0));

        assert_eq!(block.measured_size(), Size::new(20, 40));
        assert_eq!(
            block.last_specs(),
            Some((MeasureSpec::at_most(20), MeasureSpec::unspecified(0)))
        );
        assert_eq!(block.measure_count(), 1);
        assert!(block.bounds().is_none());
    }

    #[test]
    fn test_block_records_bounds() {
        let mut block = Block::new(Size::new(30, 40));
        block.layout(Bounds::new(1, 2, 31, 42));
        assert_eq!(block.bounds(), Some(Bounds::new(1, 2, 31, 42)));
    }
}
