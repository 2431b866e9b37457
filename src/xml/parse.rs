//! XML parsing functions.

use super::types::UiXml;
use crate::error::Result;

/// Parse a bubble layout from a string.
pub fn parse_xml(xml: &str) -> Result<UiXml> {
    Ok(quick_xml::de::from_str(xml)?)
}

/// Parse a bubble layout file from disk.
pub fn parse_xml_file(path: &std::path::Path) -> Result<UiXml> {
    let contents = std::fs::read_to_string(path)?;
    parse_xml(&contents)
}
