//! Canvas program: forwards pointer input and paints bubbles onto a frame.

use iced::mouse;
use iced::widget::canvas::{self, Event, Geometry, LineCap, LineJoin, Path, Stroke};
use iced::widget::image::Handle as ImageHandle;
use iced::{Color, Pixels, Point, Rectangle, Theme};

use crate::geometry::{OutlinePath, Segment};
use crate::render::{self as paint, PaintPass, PaintSpec, PaintStyle, SoftwareSurface, Surface};

use super::app::App;
use super::state::{CanvasMessage, PlacedBubble};
use super::styles::palette;
use super::Message;

/// Quarter arcs are replayed as tangent arcs through the corner point.
const QUARTER_TOLERANCE: f32 = 1e-3;

impl canvas::Program<Message> for &App {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let publish = |msg| Some(canvas::Action::publish(Message::CanvasEvent(msg)));
        match event {
            Event::Mouse(mouse_event) => match mouse_event {
                mouse::Event::CursorMoved { position } => {
                    if bounds.contains(*position) {
                        let local = Point::new(position.x - bounds.x, position.y - bounds.y);
                        return publish(CanvasMessage::MouseMove(local));
                    }
                }
                mouse::Event::ButtonPressed(mouse::Button::Left) => {
                    if let Some(pos) = cursor.position_in(bounds) {
                        return publish(CanvasMessage::MouseDown(pos));
                    }
                }
                mouse::Event::ButtonReleased(mouse::Button::Left) => {
                    // Releases outside the canvas still end the gesture.
                    return match cursor.position() {
                        Some(p) => {
                            let local = Point::new(p.x - bounds.x, p.y - bounds.y);
                            publish(CanvasMessage::MouseUp(local))
                        }
                        None => publish(CanvasMessage::Cancel),
                    };
                }
                mouse::Event::CursorLeft => return publish(CanvasMessage::Cancel),
                _ => {}
            },
            Event::Keyboard(keyboard_event) => {
                use iced::keyboard;
                if let keyboard::Event::KeyPressed { key, modifiers, .. } = keyboard_event {
                    if modifiers.control() && *key == keyboard::Key::Character("r".into()) {
                        return Some(canvas::Action::publish(Message::Reload));
                    }
                }
            }
            _ => {}
        }
        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.frame_cache.draw(renderer, bounds.size(), |frame| {
            frame.fill_rectangle(Point::ORIGIN, frame.size(), self.background);
            for bubble in &self.bubbles {
                draw_bubble(frame, bubble);
            }
        });

        vec![geometry]
    }
}

fn draw_bubble(frame: &mut canvas::Frame, bubble: &PlacedBubble) {
    bubble.draw(&mut CanvasSurface::new(frame, bubble.bounds));

    if let Some(text) = &bubble.text {
        frame.fill_text(canvas::Text {
            content: text.clone(),
            position: bubble.content_origin(),
            color: palette::TEXT_PRIMARY,
            size: Pixels(14.0),
            ..Default::default()
        });
    }
}

/// Paints outlines onto an iced canvas frame, positioned at `bounds`.
///
/// Unmasked passes become vector fills and strokes. Passes carrying a blur
/// mask have no vector equivalent and are rasterized into an image first.
pub struct CanvasSurface<'a> {
    frame: &'a mut canvas::Frame,
    bounds: Rectangle,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(frame: &'a mut canvas::Frame, bounds: Rectangle) -> Self {
        Self { frame, bounds }
    }

    fn draw_masked(&mut self, outline: &OutlinePath, spec: &PaintSpec, pass: &PaintPass) {
        let (w, h) = (self.bounds.width.ceil() as u32, self.bounds.height.ceil() as u32);
        if w == 0 || h == 0 {
            return;
        }
        let mut raster = match SoftwareSurface::new(w, h, crate::widget::Color::TRANSPARENT) {
            Ok(raster) => raster,
            Err(e) => {
                tracing::warn!("Skipping masked pass: {e}");
                return;
            }
        };
        raster.draw_outline(outline, spec, pass);
        let image = raster.into_image();
        let handle = ImageHandle::from_rgba(w, h, image.into_raw());
        let target = Rectangle::new(self.bounds.position(), iced::Size::new(w as f32, h as f32));
        self.frame.draw_image(target, canvas::Image::new(handle));
    }
}

impl Surface for CanvasSurface<'_> {
    fn draw_outline(&mut self, outline: &OutlinePath, spec: &PaintSpec, pass: &PaintPass) {
        if pass.mask.is_some() {
            self.draw_masked(outline, spec, pass);
            return;
        }
        let path = outline_to_path(outline, self.bounds.position());
        let color = to_iced_color(pass.color);
        if matches!(pass.style, PaintStyle::Fill | PaintStyle::FillAndStroke) {
            self.frame.fill(&path, color);
        }
        if matches!(pass.style, PaintStyle::Stroke | PaintStyle::FillAndStroke) {
            let stroke = Stroke::default()
                .with_color(color)
                .with_width(spec.stroke_width)
                .with_line_cap(match spec.line_cap {
                    paint::LineCap::Butt => LineCap::Butt,
                    paint::LineCap::Round => LineCap::Round,
                    paint::LineCap::Square => LineCap::Square,
                })
                .with_line_join(match spec.line_join {
                    paint::LineJoin::Miter => LineJoin::Miter,
                    paint::LineJoin::Round => LineJoin::Round,
                    paint::LineJoin::Bevel => LineJoin::Bevel,
                });
            self.frame.stroke(&path, stroke);
        }
    }
}

fn to_iced_color(c: crate::widget::Color) -> Color {
    Color::from_rgba(c.r, c.g, c.b, c.a)
}

/// Convert an outline into an iced path, translated by `origin`.
pub fn outline_to_path(outline: &OutlinePath, origin: Point) -> Path {
    let at = |p: crate::geometry::Point| Point::new(p.x + origin.x, p.y + origin.y);
    Path::new(|builder| {
        let mut current = None;
        for segment in outline.segments() {
            match *segment {
                Segment::MoveTo { to } => builder.move_to(at(to)),
                Segment::LineTo { to } => builder.line_to(at(to)),
                Segment::Arc { center, radius, start_angle, sweep_angle, to } => {
                    let start = current.unwrap_or(to);
                    if (sweep_angle.abs() - std::f32::consts::FRAC_PI_2).abs() < QUARTER_TOLERANCE {
                        // Tangent lines of a quarter arc meet at start + (to - center).
                        let corner = crate::geometry::Point::new(
                            start.x + to.x - center.x,
                            start.y + to.y - center.y,
                        );
                        builder.arc_to(at(corner), at(to), radius);
                    } else {
                        builder.arc(canvas::path::Arc {
                            center: at(center),
                            radius,
                            start_angle: iced::Radians(start_angle),
                            end_angle: iced::Radians(start_angle + sweep_angle),
                        });
                    }
                }
                Segment::Close => builder.close(),
            }
            if let Some(end) = segment.end() {
                current = Some(end);
            }
        }
    })
}
