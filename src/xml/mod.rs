//! XML bubble layouts: a `<Ui>` root holding `<Bubble>` elements whose
//! attributes carry the bubble configuration.

mod bubble;
mod dimension;
mod parse;
mod types;

pub use bubble::{find_bubble, load_bubbles, load_bubbles_file, BubbleDecl};
pub use dimension::{parse_bool, parse_dimension, Unit};
pub use parse::{parse_xml, parse_xml_file};
pub use types::{BubbleXml, UiXml, XmlElement};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_layout() {
        let xml = r#"
            <Ui>
                <Bubble name="Greeting" width="200" height="80" arrowRight="true"/>
                <Bubble name="Reply" arrowLeft="true"/>
            </Ui>
        "#;

        let ui = parse_xml(xml).unwrap();
        assert_eq!(ui.bubbles().count(), 2);
        let first = ui.bubbles().next().unwrap();
        assert_eq!(first.name.as_deref(), Some("Greeting"));
        assert_eq!(first.width.as_deref(), Some("200"));
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(parse_xml("<Ui><Bubble></Ui>").is_err());
    }
}
