//! XML type definitions for bubble layout files.
//!
//! Style attributes stay as raw strings here: each one is converted
//! separately so a bad value only loses that attribute.

use serde::Deserialize;

/// Root element of a bubble layout file.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename = "Ui")]
pub struct UiXml {
    #[serde(rename = "$value", default)]
    pub elements: Vec<XmlElement>,
}

/// Elements that can appear under `<Ui>`.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub enum XmlElement {
    Bubble(BubbleXml),
    // Stray text content
    #[serde(rename = "$text")]
    Text(String),
}

/// `<Bubble>` element: frame placement plus the bubble attribute set.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct BubbleXml {
    #[serde(rename = "@name")]
    pub name: Option<String>,
    /// Label drawn inside the bubble.
    #[serde(rename = "@text")]
    pub text: Option<String>,
    #[serde(rename = "@x")]
    pub x: Option<String>,
    #[serde(rename = "@y")]
    pub y: Option<String>,
    #[serde(rename = "@width")]
    pub width: Option<String>,
    #[serde(rename = "@height")]
    pub height: Option<String>,

    #[serde(rename = "@cornerRadius")]
    pub corner_radius: Option<String>,
    #[serde(rename = "@shadowRadius")]
    pub shadow_radius: Option<String>,
    #[serde(rename = "@strokeWidth")]
    pub stroke_width: Option<String>,
    #[serde(rename = "@arrowWidth")]
    pub arrow_width: Option<String>,
    #[serde(rename = "@arrowHeight")]
    pub arrow_height: Option<String>,
    #[serde(rename = "@arrowMarginTop")]
    pub arrow_margin_top: Option<String>,
    #[serde(rename = "@strokeColorNormal")]
    pub stroke_color_normal: Option<String>,
    #[serde(rename = "@strokeColorPressed")]
    pub stroke_color_pressed: Option<String>,
    #[serde(rename = "@arrowRight")]
    pub arrow_right: Option<String>,
    #[serde(rename = "@arrowLeft")]
    pub arrow_left: Option<String>,
}

impl UiXml {
    /// All `<Bubble>` elements in document order.
    pub fn bubbles(&self) -> impl Iterator<Item = &BubbleXml> {
        self.elements.iter().filter_map(|e| match e {
            XmlElement::Bubble(b) => Some(b),
            _ => None,
        })
    }
}
