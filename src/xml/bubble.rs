//! Converting `<Bubble>` attributes into a style and a placement.
//!
//! A value that fails to convert is logged and skipped; the default for that
//! attribute stays in effect. Loading a bubble never fails.

use std::fmt::Display;

use super::dimension::{parse_bool, parse_dimension};
use super::types::{BubbleXml, UiXml};
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::widget::{ArrowSide, BubbleStyle, Color};

/// Frame size used when `width` / `height` are missing, in dp.
const DEFAULT_WIDTH_DP: f32 = 160.0;
const DEFAULT_HEIGHT_DP: f32 = 48.0;

/// A bubble as declared in a layout file.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleDecl {
    pub name: Option<String>,
    pub text: Option<String>,
    /// Frame bounds, arrow included.
    pub rect: Rect,
    pub style: BubbleStyle,
}

/// Converts attributes at a fixed display density.
struct AttributeReader<'a> {
    element: Option<&'a str>,
    density: f32,
}

impl AttributeReader<'_> {
    fn read<T, E: Display>(
        &self,
        attribute: &str,
        raw: Option<&String>,
        target: &mut T,
        convert: impl FnOnce(&str) -> std::result::Result<T, E>,
    ) {
        let Some(raw) = raw else { return };
        match convert(raw.as_str()) {
            Ok(value) => *target = value,
            Err(e) => tracing::warn!(
                bubble = self.element.unwrap_or("<unnamed>"),
                attribute,
                value = raw.as_str(),
                "ignoring attribute: {e}"
            ),
        }
    }

    fn dimension(&self, attribute: &str, raw: Option<&String>, target: &mut f32) {
        let density = self.density;
        self.read(attribute, raw, target, |v| {
            let px = parse_dimension(v, density)?;
            if px < 0.0 {
                return Err(Error::InvalidDimension(v.to_string()));
            }
            Ok::<_, Error>(px)
        });
    }

    fn color(&self, attribute: &str, raw: Option<&String>, target: &mut Color) {
        self.read(attribute, raw, target, Color::from_hex);
    }

    fn flag(&self, attribute: &str, raw: Option<&String>, target: &mut bool) {
        self.read(attribute, raw, target, parse_bool);
    }

    fn offset(&self, attribute: &str, raw: Option<&String>, target: &mut f32) {
        let density = self.density;
        self.read(attribute, raw, target, |v| parse_dimension(v, density));
    }
}

impl BubbleXml {
    /// Style from the attribute set, starting from density-scaled defaults.
    pub fn style(&self, density: f32) -> BubbleStyle {
        let reader = AttributeReader { element: self.name.as_deref(), density };
        let mut style = BubbleStyle::with_density(density);

        reader.dimension("cornerRadius", self.corner_radius.as_ref(), &mut style.corner_radius);
        reader.dimension("shadowRadius", self.shadow_radius.as_ref(), &mut style.shadow_radius);
        reader.dimension("strokeWidth", self.stroke_width.as_ref(), &mut style.stroke_width);
        reader.dimension("arrowWidth", self.arrow_width.as_ref(), &mut style.arrow_width);
        reader.dimension("arrowHeight", self.arrow_height.as_ref(), &mut style.arrow_height);
        reader.dimension(
            "arrowMarginTop",
            self.arrow_margin_top.as_ref(),
            &mut style.arrow_margin_top,
        );
        reader.color(
            "strokeColorNormal",
            self.stroke_color_normal.as_ref(),
            &mut style.stroke_color_normal,
        );
        reader.color(
            "strokeColorPressed",
            self.stroke_color_pressed.as_ref(),
            &mut style.stroke_color_pressed,
        );

        let (mut right, mut left) = (false, false);
        reader.flag("arrowRight", self.arrow_right.as_ref(), &mut right);
        reader.flag("arrowLeft", self.arrow_left.as_ref(), &mut left);
        style.arrow_side = ArrowSide::from_flags(right, left);

        if style.arrow_side != ArrowSide::None && style.arrow_margin_top < style.corner_radius {
            tracing::debug!(
                bubble = self.name.as_deref().unwrap_or("<unnamed>"),
                margin = style.arrow_margin_top,
                radius = style.corner_radius,
                "arrow notch overlaps the corner arc"
            );
        }
        style
    }

    /// Frame bounds from `x`, `y`, `width` and `height`.
    pub fn rect(&self, density: f32) -> Rect {
        let reader = AttributeReader { element: self.name.as_deref(), density };
        let mut rect = Rect::new(0.0, 0.0, DEFAULT_WIDTH_DP * density, DEFAULT_HEIGHT_DP * density);
        reader.offset("x", self.x.as_ref(), &mut rect.x);
        reader.offset("y", self.y.as_ref(), &mut rect.y);
        reader.dimension("width", self.width.as_ref(), &mut rect.width);
        reader.dimension("height", self.height.as_ref(), &mut rect.height);
        rect
    }

    pub fn to_decl(&self, density: f32) -> BubbleDecl {
        BubbleDecl {
            name: self.name.clone(),
            text: self.text.clone(),
            rect: self.rect(density),
            style: self.style(density),
        }
    }
}

/// Every bubble declared in `ui`.
pub fn load_bubbles(ui: &UiXml, density: f32) -> Vec<BubbleDecl> {
    let decls: Vec<_> = ui.bubbles().map(|b| b.to_decl(density)).collect();
    tracing::debug!("Loaded {} bubble(s)", decls.len());
    decls
}

/// Read a layout file and return its bubbles.
pub fn load_bubbles_file(path: &std::path::Path, density: f32) -> Result<Vec<BubbleDecl>> {
    let ui = super::parse_xml_file(path)?;
    Ok(load_bubbles(&ui, density))
}

/// Find a bubble by name.
pub fn find_bubble<'a>(decls: &'a [BubbleDecl], name: &str) -> Result<&'a BubbleDecl> {
    decls
        .iter()
        .find(|d| d.name.as_deref() == Some(name))
        .ok_or_else(|| Error::BubbleNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_xml;

    fn first(xml: &str, density: f32) -> BubbleDecl {
        let ui = parse_xml(xml).unwrap();
        load_bubbles(&ui, density).remove(0)
    }

    #[test]
    fn no_attributes_gives_defaults() {
        let decl = first("<Ui><Bubble/></Ui>", 2.0);
        assert_eq!(decl.style, BubbleStyle::with_density(2.0));
        assert_eq!(decl.style.arrow_side, ArrowSide::None);
        assert_eq!(decl.rect, Rect::new(0.0, 0.0, 320.0, 96.0));
    }

    #[test]
    fn reads_every_style_attribute() {
        let decl = first(
            r##"<Ui>
                <Bubble name="Chat" cornerRadius="10" shadowRadius="4dp" strokeWidth="2"
                        arrowWidth="16" arrowHeight="12" arrowMarginTop="20"
                        strokeColorNormal="#ff0000ff" strokeColorPressed="#00ff00"
                        arrowLeft="true"/>
            </Ui>"##,
            1.5,
        );
        let s = decl.style;
        assert_eq!(s.corner_radius, 10.0);
        assert_eq!(s.shadow_radius, 6.0);
        assert_eq!(s.stroke_width, 2.0);
        assert_eq!(s.arrow_width, 16.0);
        assert_eq!(s.arrow_height, 12.0);
        assert_eq!(s.arrow_margin_top, 20.0);
        assert_eq!(s.stroke_color_normal, Color::rgb(0.0, 0.0, 1.0));
        assert_eq!(s.stroke_color_pressed, Color::rgb(0.0, 1.0, 0.0));
        assert_eq!(s.arrow_side, ArrowSide::Left);
        assert_eq!(decl.name.as_deref(), Some("Chat"));
    }

    #[test]
    fn bad_values_fall_back_individually() {
        let decl = first(
            r#"<Ui><Bubble cornerRadius="wide" strokeWidth="-3" strokeColorNormal="blue"
                arrowRight="maybe" arrowHeight="9"/></Ui>"#,
            1.0,
        );
        let defaults = BubbleStyle::with_density(1.0);
        assert_eq!(decl.style.corner_radius, defaults.corner_radius);
        assert_eq!(decl.style.stroke_width, defaults.stroke_width);
        assert_eq!(decl.style.stroke_color_normal, defaults.stroke_color_normal);
        assert_eq!(decl.style.arrow_side, ArrowSide::None);
        assert_eq!(decl.style.arrow_height, 9.0);
    }

    #[test]
    fn both_flags_pick_right() {
        let decl = first(r#"<Ui><Bubble arrowLeft="true" arrowRight="true"/></Ui>"#, 1.0);
        assert_eq!(decl.style.arrow_side, ArrowSide::Right);
    }

    #[test]
    fn find_by_name() {
        let ui = parse_xml(r#"<Ui><Bubble name="A"/><Bubble name="B" x="-4"/></Ui>"#).unwrap();
        let decls = load_bubbles(&ui, 1.0);
        assert_eq!(find_bubble(&decls, "B").unwrap().rect.x, -4.0);
        assert!(matches!(find_bubble(&decls, "C"), Err(Error::BubbleNotFound(_))));
    }
}
