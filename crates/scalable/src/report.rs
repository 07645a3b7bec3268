//! Pass Reports
//!
//! What one measure and layout pass produced, as text or JSON.

use std::fmt;

use scalable_layout::{Bounds, LayoutPass, ScalableLayout, Size, Visibility};
use serde::Serialize;

use crate::document::{ElementKind, LayoutDocument};

/// Geometry of one child after a pass
#[derive(Debug, Clone, Serialize)]
pub struct ChildReport {
    pub index: usize,
    pub kind: ElementKind,
    pub visibility: Visibility,
    /// `None` when the child was skipped
    pub bounds: Option<Bounds>,
    /// Font size of text children
    pub font_size: Option<f32>,
}

/// Outcome of a full pass
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub size: Size,
    pub scale_factor: f32,
    pub children: Vec<ChildReport>,
}

impl Report {
    /// Collect the state of every child after `pass` has been laid out
    pub fn collect(layout: &ScalableLayout, pass: &LayoutPass, document: &LayoutDocument) -> Self {
        let children = document
            .children
            .iter()
            .zip(layout.children())
            .enumerate()
            .map(|(index, (entry, child))| {
                let element = child.element();
                ChildReport {
                    index,
                    kind: entry.kind,
                    visibility: element.visibility(),
                    bounds: child.bounds(),
                    font_size: element.as_text().map(|text| text.font_size()),
                }
            })
            .collect();

        Self {
            size: pass.size,
            scale_factor: pass.scale_factor,
            children,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "container {}x{} scale {}",
            self.size.width, self.size.height, self.scale_factor
        )?;

        for child in &self.children {
            write!(f, "{:>3} {:<6} {:<9}", child.index, child.kind, child.visibility)?;

            match child.bounds {
                Some(b) => write!(f, " {},{} {}x{}", b.left, b.top, b.width(), b.height())?,
                None => write!(f, " -")?,
            }

            if let Some(font_size) = child.font_size {
                write!(f, " font {}px", font_size)?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
