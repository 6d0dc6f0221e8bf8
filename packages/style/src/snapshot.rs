//! The opaque data source: resolved styles and geometry captured by the host.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A resolved-style property map for one element, keyed by CSS property
/// name (`font-size`, `padding-top`, `row-gap`, ...). Values are the final
/// computed strings the host rendering environment reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComputedStyle(HashMap<String, String>);

impl ComputedStyle {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(|v| v.as_str())
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(property.into(), value.into());
        self
    }
}

impl<const N: usize> From<[(&str, &str); N]> for ComputedStyle {
    fn from(entries: [(&str, &str); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// Viewport-relative bounding rectangle, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The rendered box of one direct child, as captured by the host. Only the
/// geometry matters for gap inference; `rendered` is false for children the
/// host reports as `display: none` or detached from layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChildBox {
    pub rect: Rect,

    #[serde(default = "default_rendered")]
    pub rendered: bool,
}

impl ChildBox {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            rendered: true,
        }
    }
}

fn default_rendered() -> bool {
    true
}

/// One element as captured by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    /// Lowercase tag name (`div`, `span`, ...)
    pub tag: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,

    /// Resolved style property map
    pub computed: ComputedStyle,

    /// Bounding rectangle in the viewport
    #[serde(default)]
    pub rect: Rect,

    /// False when the element has no visible rendering box
    /// (the host's equivalent of a null `offsetParent`)
    #[serde(default = "default_rendered")]
    pub rendered: bool,

    /// Direct children boxes, for gap inference on flex/grid containers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ChildBox>,
}

impl ElementSnapshot {
    pub fn new(tag: impl Into<String>, computed: ComputedStyle) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            computed,
            rect: Rect::default(),
            rendered: true,
            children: Vec::new(),
        }
    }

    /// Derive a short selector for reporting: `#id`, else `tag.class.class`,
    /// else `tag`.
    pub fn selector(&self) -> String {
        if let Some(id) = &self.id {
            return format!("#{}", id);
        }
        if !self.classes.is_empty() {
            return format!("{}.{}", self.tag, self.classes.join("."));
        }
        self.tag.clone()
    }
}

/// A full capture of the visible element set of one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    /// All captured elements, in document order
    pub elements: Vec<ElementSnapshot>,

    /// Page URL or other capture origin, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_prefers_id() {
        let mut el = ElementSnapshot::new("div", ComputedStyle::new());
        el.id = Some("header".to_string());
        el.classes = vec!["card".to_string()];
        assert_eq!(el.selector(), "#header");
    }

    #[test]
    fn test_selector_joins_classes() {
        let mut el = ElementSnapshot::new("button", ComputedStyle::new());
        el.classes = vec!["btn".to_string(), "btn-primary".to_string()];
        assert_eq!(el.selector(), "button.btn.btn-primary");
    }

    #[test]
    fn test_selector_falls_back_to_tag() {
        let el = ElementSnapshot::new("span", ComputedStyle::new());
        assert_eq!(el.selector(), "span");
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
    }

    #[test]
    fn test_snapshot_deserializes_with_defaults() {
        let json = r#"{
            "elements": [
                { "tag": "div", "computed": { "font-size": "16px" } }
            ]
        }"#;

        let snapshot: DocumentSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.elements.len(), 1);
        assert!(snapshot.elements[0].rendered);
        assert!(snapshot.elements[0].children.is_empty());
        assert_eq!(
            snapshot.elements[0].computed.get("font-size"),
            Some("16px")
        );
    }
}
