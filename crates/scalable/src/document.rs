//! Layout Documents
//!
//! A JSON description of a scalable container and its children, written
//! with the same attribute names the container reads.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use scalable_layout::{
    Block, ChildParams, Element, Label, LayoutParams, ScalableLayout, Size, Visibility,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// An attribute value as written in the document
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(s) => f.write_str(s),
            AttributeValue::Number(n) => write!(f, "{}", n),
            AttributeValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Kind of element a child entry creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Block,
    Label,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Block => f.pad("block"),
            ElementKind::Label => f.pad("label"),
        }
    }
}

/// One child of the container
#[derive(Debug, Clone, Deserialize)]
pub struct ChildEntry {
    pub kind: ElementKind,
    /// Label text
    #[serde(default)]
    pub text: String,
    /// Whether the child is placed in design space or pinned to the origin
    #[serde(default = "default_scaled")]
    pub scaled: bool,
    #[serde(default)]
    pub visibility: Visibility,
    /// Size a block would like to be when it is not given an exact one
    #[serde(default)]
    pub intrinsic: Size,
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeValue>,
}

fn default_scaled() -> bool {
    true
}

impl ChildEntry {
    fn create_element(&self) -> Box<dyn Element> {
        match self.kind {
            ElementKind::Block => {
                Box::new(Block::new(self.intrinsic).with_visibility(self.visibility))
            }
            ElementKind::Label => {
                Box::new(Label::new(self.text.clone()).with_visibility(self.visibility))
            }
        }
    }
}

/// A container and its children
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutDocument {
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeValue>,
    #[serde(default)]
    pub children: Vec<ChildEntry>,
}

impl LayoutDocument {
    pub fn parse(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| AppError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&json)
    }

    /// Create the container and all of its children
    pub fn build(&self) -> ScalableLayout {
        let mut layout = ScalableLayout::from_attributes(&resolve(&self.attributes));

        for entry in &self.children {
            let attrs = resolve(&entry.attributes);
            let params: ChildParams = if entry.scaled {
                layout.generate_layout_params(&attrs).into()
            } else {
                LayoutParams::from_attributes(&attrs).into()
            };
            layout.add_child(entry.create_element(), params);
        }

        log::info!(
            "Built layout with {} children (base {:?})",
            layout.child_count(),
            layout.config()
        );

        layout
    }
}

/// Flatten document values into the strings the container parses
fn resolve(attributes: &BTreeMap<String, AttributeValue>) -> BTreeMap<String, String> {
    attributes
        .iter()
        .map(|(name, value)| (name.clone(), value.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scalable_layout::{BaseConfig, BaseOrientation, Bounds, MeasureSpec};

    const DOCUMENT: &str = r#"{
        "attributes": { "base_width": 640, "base_height": "640" },
        "children": [
            { "kind": "label", "text": "Title",
              "attributes": { "left": 100, "top": 100, "width": 200, "height": 50, "font_size": 20 } },
            { "kind": "block", "scaled": false, "intrinsic": { "width": 40, "height": 30 },
              "attributes": { "layout_width": "wrap_content", "layout_height": "wrap_content" } },
            { "kind": "block", "visibility": "gone", "attributes": { "width": 10, "height": 10 } }
        ]
    }"#;

    #[test]
    fn test_parse_document() {
        let doc = LayoutDocument::parse(DOCUMENT).unwrap();

        assert_eq!(doc.children.len(), 3);
        assert_eq!(doc.children[0].kind, ElementKind::Label);
        assert!(doc.children[0].scaled);
        assert!(!doc.children[1].scaled);
        assert_eq!(doc.children[1].intrinsic, Size::new(40, 30));
        assert_eq!(doc.children[2].visibility, Visibility::Gone);
    }

    #[test]
    fn test_build_and_layout() {
        let doc = LayoutDocument::parse(DOCUMENT).unwrap();
        let mut layout = doc.build();

        assert_eq!(*layout.config(), BaseConfig::portrait(640, 640));

        let pass = layout
            .perform_pass(MeasureSpec::exactly(320), MeasureSpec::exactly(480))
            .unwrap();
        assert_eq!(pass.size, Size::new(320, 320));

        assert_eq!(layout.child(0).unwrap().bounds(), Some(Bounds::new(50, 50, 150, 75)));
        assert_eq!(layout.child(1).unwrap().bounds(), Some(Bounds::new(0, 0, 40, 30)));
        assert_eq!(layout.child(2).unwrap().bounds(), None);
    }

    #[test]
    fn test_orientation_attribute() {
        let doc = LayoutDocument::parse(r#"{ "attributes": { "base_orientation": "landscape" } }"#).unwrap();
        assert_eq!(doc.build().config().orientation, BaseOrientation::Landscape);
    }

    #[test]
    fn test_empty_document() {
        let doc = LayoutDocument::parse("{}").unwrap();
        let layout = doc.build();

        assert_eq!(layout.child_count(), 0);
        assert_eq!(*layout.config(), BaseConfig::default());
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result = LayoutDocument::parse(r#"{ "children": [ { "kind": "canvas" } ] }"#);
        assert!(matches!(result, Err(AppError::Json(_))));
    }

    #[test]
    fn test_resolve_values() {
        let mut attributes = BTreeMap::new();
        attributes.insert("left".to_string(), AttributeValue::Number(serde_json::Number::from(12)));
        attributes.insert("top".to_string(), AttributeValue::Text("7.5".to_string()));

        let resolved = resolve(&attributes);
        assert_eq!(resolved["left"], "12");
        assert_eq!(resolved["top"], "7.5");
    }
}
