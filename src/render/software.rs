//! CPU rasterizer for bubble outlines, on top of `tiny-skia`.
//!
//! Fills and strokes go straight to [`Pixmap::fill_path`] and
//! [`Pixmap::stroke_path`]. A pass with a blur mask is drawn through a
//! [`Mask`] holding its own coverage multiplied by a Gaussian blur of that
//! coverage, so the fill fades in from the edge and nothing leaks outside.

use std::f32::consts::FRAC_PI_2;

use image::{Rgba, RgbaImage};
use tiny_skia::{FillRule, Mask, MaskType, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::paint::{LineCap, LineJoin, PaintPass, PaintSpec, PaintStyle};
use super::Surface;
use crate::geometry::{on_circle, OutlinePath, Segment};
use crate::widget::{BubbleFrame, Color};
use crate::Error;

/// Raster target backed by a premultiplied `tiny_skia::Pixmap`.
pub struct SoftwareSurface {
    pixmap: Pixmap,
    offset: (f32, f32),
}

impl SoftwareSurface {
    /// A `width` x `height` surface cleared to `background`. Fails for an
    /// empty or oversized surface.
    pub fn new(width: u32, height: u32, background: Color) -> crate::Result<Self> {
        let mut pixmap = Pixmap::new(width, height).ok_or(Error::SurfaceSize(width, height))?;
        pixmap.fill(skia_color(background));
        Ok(Self { pixmap, offset: (0.0, 0.0) })
    }

    /// Translate subsequent drawing by `(x, y)` pixels.
    pub fn set_offset(&mut self, x: f32, y: f32) {
        self.offset = (x, y);
    }

    /// Straight-alpha copy of the surface.
    pub fn into_image(self) -> RgbaImage {
        let width = self.pixmap.width();
        let pixels = self.pixmap.pixels();
        RgbaImage::from_fn(width, self.pixmap.height(), |x, y| {
            let c = pixels[(y * width + x) as usize].demultiply();
            Rgba([c.red(), c.green(), c.blue(), c.alpha()])
        })
    }
}

impl Surface for SoftwareSurface {
    fn draw_outline(&mut self, outline: &OutlinePath, spec: &PaintSpec, pass: &PaintPass) {
        let Some(path) = skia_path(outline) else {
            return;
        };
        let transform = Transform::from_translate(self.offset.0, self.offset.1);
        let stroke = skia_stroke(spec);
        let mut paint = Paint::default();
        paint.anti_alias = spec.anti_alias;
        paint.set_color(skia_color(pass.color));

        let sigma = pass.mask.map(|m| m.sigma());
        if sigma.is_none() && pass.style != PaintStyle::FillAndStroke {
            draw_region(&mut self.pixmap, &path, &paint, &stroke, pass.style, transform);
            return;
        }

        // Fill and stroke overlap, so both go through one coverage mask to
        // blend each pixel once.
        let Some(mut coverage) = Pixmap::new(self.pixmap.width(), self.pixmap.height()) else {
            return;
        };
        let mut opaque = paint.clone();
        opaque.set_color(tiny_skia::Color::BLACK);
        draw_region(&mut coverage, &path, &opaque, &stroke, pass.style, transform);
        let mut mask = Mask::from_pixmap(coverage.as_ref(), MaskType::Alpha);
        if let Some(sigma) = sigma {
            apply_inner_blur(&mut mask, sigma);
        }

        let area = tiny_skia::Rect::from_xywh(
            0.0,
            0.0,
            self.pixmap.width() as f32,
            self.pixmap.height() as f32,
        );
        if let Some(area) = area {
            self.pixmap.fill_rect(area, &paint, Transform::identity(), Some(&mask));
        }
    }
}

fn draw_region(
    pixmap: &mut Pixmap,
    path: &tiny_skia::Path,
    paint: &Paint,
    stroke: &Stroke,
    style: PaintStyle,
    transform: Transform,
) {
    if matches!(style, PaintStyle::Fill | PaintStyle::FillAndStroke) {
        pixmap.fill_path(path, paint, FillRule::Winding, transform, None);
    }
    if matches!(style, PaintStyle::Stroke | PaintStyle::FillAndStroke) {
        pixmap.stroke_path(path, paint, stroke, transform, None);
    }
}

/// Keep `mask` only where its blurred copy reaches: `coverage × blur(coverage)`.
fn apply_inner_blur(mask: &mut Mask, sigma: f32) {
    let (width, height) = (mask.width() as usize, mask.height() as usize);
    let blurred = gaussian_blur(mask.data(), width, height, sigma);
    for (m, b) in mask.data_mut().iter_mut().zip(blurred) {
        *m = ((u16::from(*m) * u16::from(b) + 127) / 255) as u8;
    }
}

/// Separable Gaussian blur of an 8-bit plane; samples past the edges count as 0.
fn gaussian_blur(data: &[u8], width: usize, height: usize, sigma: f32) -> Vec<u8> {
    let kernel = gaussian_kernel(sigma);
    let reach = (kernel.len() / 2) as isize;

    let mut rows = vec![0.0f32; data.len()];
    for y in 0..height {
        let line = &data[y * width..(y + 1) * width];
        for x in 0..width {
            rows[y * width + x] = kernel
                .iter()
                .enumerate()
                .filter_map(|(k, w)| {
                    let sx = x as isize + k as isize - reach;
                    (0..width as isize).contains(&sx).then(|| w * f32::from(line[sx as usize]))
                })
                .sum();
        }
    }

    let mut out = vec![0u8; data.len()];
    for y in 0..height {
        for x in 0..width {
            let sum: f32 = kernel
                .iter()
                .enumerate()
                .filter_map(|(k, w)| {
                    let sy = y as isize + k as isize - reach;
                    (0..height as isize).contains(&sy).then(|| w * rows[sy as usize * width + x])
                })
                .sum();
            out[y * width + x] = sum.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Normalized weights out to three sigma on each side.
fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let sigma = sigma.max(1e-3);
    let reach = (3.0 * sigma).ceil() as i32;
    let weights: Vec<f32> = (-reach..=reach)
        .map(|i| (-((i * i) as f32) / (2.0 * sigma * sigma)).exp())
        .collect();
    let total: f32 = weights.iter().sum();
    weights.into_iter().map(|w| w / total).collect()
}

/// Replay an outline as a `tiny_skia::Path`; arcs become cubic Béziers of at
/// most a quarter turn each.
fn skia_path(outline: &OutlinePath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::with_capacity(outline.segments().len() * 2, 0);
    for segment in outline.segments() {
        match *segment {
            Segment::MoveTo { to } => builder.move_to(to.x, to.y),
            Segment::LineTo { to } => builder.line_to(to.x, to.y),
            Segment::Arc { center, radius, start_angle, sweep_angle, to } => {
                if radius <= 0.0 || sweep_angle == 0.0 {
                    builder.line_to(to.x, to.y);
                    continue;
                }
                let pieces = (sweep_angle.abs() / FRAC_PI_2 - 1e-4).ceil().max(1.0) as usize;
                let step = sweep_angle / pieces as f32;
                // Tangent handle length of a circular cubic.
                let k = 4.0 / 3.0 * (step / 4.0).tan() * radius;
                for i in 0..pieces {
                    let a0 = start_angle + step * i as f32;
                    let a1 = a0 + step;
                    let p0 = on_circle(center, radius, a0);
                    let p3 = if i + 1 == pieces { to } else { on_circle(center, radius, a1) };
                    builder.cubic_to(
                        p0.x - k * a0.sin(),
                        p0.y + k * a0.cos(),
                        p3.x + k * a1.sin(),
                        p3.y - k * a1.cos(),
                        p3.x,
                        p3.y,
                    );
                }
            }
            Segment::Close => builder.close(),
        }
    }
    builder.finish()
}

fn skia_stroke(spec: &PaintSpec) -> Stroke {
    Stroke {
        width: spec.stroke_width,
        line_cap: match spec.line_cap {
            LineCap::Butt => tiny_skia::LineCap::Butt,
            LineCap::Round => tiny_skia::LineCap::Round,
            LineCap::Square => tiny_skia::LineCap::Square,
        },
        line_join: match spec.line_join {
            LineJoin::Miter => tiny_skia::LineJoin::Miter,
            LineJoin::Round => tiny_skia::LineJoin::Round,
            LineJoin::Bevel => tiny_skia::LineJoin::Bevel,
        },
        ..Stroke::default()
    }
}

fn skia_color(color: Color) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_rgba8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

/// Rasterize a single bubble frame into a new image of the frame's size.
pub fn render_frame(
    frame: &mut BubbleFrame,
    width: u32,
    height: u32,
    background: Color,
) -> crate::Result<RgbaImage> {
    let mut surface = SoftwareSurface::new(width, height, background)?;
    frame.draw(width as f32, height as f32, &mut surface);
    Ok(surface.into_image())
}

/// Write `image` to `path`; the format follows the file extension.
pub fn save_image(image: &RgbaImage, path: &std::path::Path) -> crate::Result<()> {
    image.save(path)?;
    tracing::debug!("Saved {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(())
}

/// Rasterize only the shadow-fill pass (the first pass) of `frame`.
pub fn render_fill_pass(
    frame: &mut BubbleFrame,
    width: u32,
    height: u32,
) -> crate::Result<RgbaImage> {
    let mut surface = SoftwareSurface::new(width, height, Color::TRANSPARENT)?;
    if frame.paints_background() {
        let spec = frame.paint_spec();
        let outline = frame.outline(width as f32, height as f32);
        surface.draw_outline(outline, &spec, &spec.passes[0]);
    }
    Ok(surface.into_image())
}
