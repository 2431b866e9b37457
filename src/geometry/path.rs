//! Closed outline made of straight and circular-arc segments.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use serde::Serialize;

use super::{Point, Rect};

/// One drawing operation of an outline.
///
/// Angles are in radians, measured from +x toward +y (clockwise on screen).
/// Arcs keep their exact end point so consumers never need to recompute it
/// from trigonometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Segment {
    MoveTo { to: Point },
    LineTo { to: Point },
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
        to: Point,
    },
    Close,
}

impl Segment {
    /// End point of the segment (`None` for `Close`).
    pub fn end(&self) -> Option<Point> {
        match *self {
            Segment::MoveTo { to } | Segment::LineTo { to } | Segment::Arc { to, .. } => Some(to),
            Segment::Close => None,
        }
    }

    /// Single-letter tag, handy for describing the shape of an outline.
    pub fn tag(&self) -> char {
        match self {
            Segment::MoveTo { .. } => 'M',
            Segment::LineTo { .. } => 'L',
            Segment::Arc { .. } => 'A',
            Segment::Close => 'Z',
        }
    }
}

/// Point on a circle at `angle`.
pub(crate) fn on_circle(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// Reusable outline buffer.
///
/// [`OutlinePath::reset`] keeps the allocation, so a widget can rebuild its
/// outline every paint pass without reallocating.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OutlinePath {
    segments: Vec<Segment>,
}

impl OutlinePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { segments: Vec::with_capacity(capacity) }
    }

    pub fn reset(&mut self) {
        self.segments.clear();
    }

    pub fn move_to(&mut self, to: Point) {
        self.segments.push(Segment::MoveTo { to });
    }

    pub fn line_to(&mut self, to: Point) {
        self.segments.push(Segment::LineTo { to });
    }

    /// Append an arc with a caller-supplied exact end point.
    pub fn arc_to(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
        to: Point,
    ) {
        self.segments.push(Segment::Arc { center, radius, start_angle, sweep_angle, to });
    }

    pub fn close(&mut self) {
        self.segments.push(Segment::Close);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Compact textual shape, e.g. `"MLALZ"`.
    pub fn shape(&self) -> String {
        self.segments.iter().map(Segment::tag).collect()
    }

    pub fn first_point(&self) -> Option<Point> {
        self.segments.iter().find_map(|s| match s {
            Segment::MoveTo { to } => Some(*to),
            _ => None,
        })
    }

    /// End point of the last drawing segment (the closing segment itself is skipped).
    pub fn last_point(&self) -> Option<Point> {
        self.segments.iter().rev().find_map(Segment::end)
    }

    /// True when the outline ends with `Close` and its last point is back at the start.
    pub fn is_closed(&self) -> bool {
        if !matches!(self.segments.last(), Some(Segment::Close)) {
            return false;
        }
        match (self.first_point(), self.last_point()) {
            (Some(a), Some(b)) => a.distance(b) <= 1e-3,
            _ => false,
        }
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        for seg in &mut self.segments {
            match seg {
                Segment::MoveTo { to } | Segment::LineTo { to } => *to = to.translate(dx, dy),
                Segment::Arc { center, to, .. } => {
                    *center = center.translate(dx, dy);
                    *to = to.translate(dx, dy);
                }
                Segment::Close => {}
            }
        }
    }

    /// Mirror in place across `x = width / 2`. Arcs keep their direction
    /// on screen, so their sweep flips sign.
    pub fn mirror(&mut self, width: f32) {
        for seg in &mut self.segments {
            match seg {
                Segment::MoveTo { to } | Segment::LineTo { to } => *to = to.mirror_x(width),
                Segment::Arc { center, start_angle, sweep_angle, to, .. } => {
                    *center = center.mirror_x(width);
                    *start_angle = normalize_angle(PI - *start_angle);
                    *sweep_angle = -*sweep_angle;
                    *to = to.mirror_x(width);
                }
                Segment::Close => {}
            }
        }
    }

    /// Tight bounding box, including the extreme points of arcs.
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = Vec::with_capacity(self.segments.len() * 2);
        for seg in &self.segments {
            match *seg {
                Segment::MoveTo { to } | Segment::LineTo { to } => points.push(to),
                Segment::Arc { center, radius, start_angle, sweep_angle, to } => {
                    points.push(on_circle(center, radius, start_angle));
                    points.push(to);
                    for k in 0..4 {
                        let cardinal = k as f32 * FRAC_PI_2;
                        if angle_in_sweep(cardinal, start_angle, sweep_angle) {
                            points.push(on_circle(center, radius, cardinal));
                        }
                    }
                }
                Segment::Close => {}
            }
        }
        Rect::enclosing(points)
    }
}

fn normalize_angle(angle: f32) -> f32 {
    angle.rem_euclid(TAU)
}

fn angle_in_sweep(angle: f32, start: f32, sweep: f32) -> bool {
    let (from, span) = if sweep >= 0.0 { (start, sweep) } else { (start + sweep, -sweep) };
    let offset = normalize_angle(angle - from);
    offset > 1e-6 && offset < span - 1e-6
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_with_round_corner() -> OutlinePath {
        let mut path = OutlinePath::new();
        path.move_to(Point::new(0.0, 0.0));
        path.line_to(Point::new(10.0, 0.0));
        path.arc_to(Point::new(10.0, 10.0), 10.0, -FRAC_PI_2, FRAC_PI_2, Point::new(20.0, 10.0));
        path.line_to(Point::new(0.0, 10.0));
        path.line_to(Point::new(0.0, 0.0));
        path.close();
        path
    }

    #[test]
    fn closed_path_reports_closed() {
        let path = square_with_round_corner();
        assert!(path.is_closed());
        assert_eq!(path.shape(), "MLALLZ");
    }

    #[test]
    fn open_path_is_not_closed() {
        let mut path = OutlinePath::new();
        path.move_to(Point::new(0.0, 0.0));
        path.line_to(Point::new(5.0, 0.0));
        assert!(!path.is_closed());
        path.close();
        // Close without returning to the start is still not "closed" geometrically.
        assert!(!path.is_closed());
    }

    #[test]
    fn reset_keeps_capacity() {
        let mut path = square_with_round_corner();
        let cap = path.segments.capacity();
        path.reset();
        assert!(path.is_empty());
        assert_eq!(path.segments.capacity(), cap);
    }

    #[test]
    fn bounds_include_arc_bulge() {
        let mut path = OutlinePath::new();
        path.move_to(Point::new(0.0, 0.0));
        // Half circle bulging downward past y = 5.
        path.arc_to(Point::new(5.0, 0.0), 5.0, PI, -PI, Point::new(10.0, 0.0));
        path.close();
        let b = path.bounds().unwrap();
        assert!((b.bottom() - 5.0).abs() < 1e-4, "bounds: {:?}", b);
    }

    #[test]
    fn mirror_twice_is_identity() {
        let path = square_with_round_corner();
        let mut back = path.clone();
        back.mirror(20.0);
        back.mirror(20.0);
        for (a, b) in path.segments().iter().zip(back.segments()) {
            if let (Some(pa), Some(pb)) = (a.end(), b.end()) {
                assert!(pa.distance(pb) < 1e-4);
            }
        }
    }

    #[test]
    fn mirror_keeps_allocation() {
        let mut path = square_with_round_corner();
        let before = path.segments().as_ptr();
        path.mirror(20.0);
        assert_eq!(path.segments().as_ptr(), before);
        assert_eq!(path.first_point(), Some(Point::new(20.0, 0.0)));
    }
}
