//! CPU raster surface: even-odd scanline fills and Bresenham strokes on an
//! RGBA buffer. No anti-aliasing; later shapes overwrite earlier pixels.

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use std::collections::HashMap;
use std::path::Path;

use wellsketch_core::{DrawPath, Fill, Gradient, Point, RenderSurface, Resizable};

use crate::color::{parse_hex_rgb, parse_or_black, sample_gradient, Rgb};
use crate::vector_export::ExportConfig;

pub struct RasterSurface {
    background: Rgb,
    img: RgbaImage,
    gradients: HashMap<String, Gradient>,
}

impl RasterSurface {
    pub fn new(config: &ExportConfig) -> Self {
        let background = parse_or_black(&config.background_color);
        Self {
            background,
            img: RgbaImage::from_pixel(config.width, config.height, opaque(background)),
            gradients: HashMap::new(),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.img
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.img
            .save(path)
            .with_context(|| format!("Failed to write PNG file: {}", path.display()))
    }

    fn fill_polygon(&mut self, points: &[Point], fill: &Fill) {
        if points.len() < 3 {
            return;
        }
        let (min_x, max_x) = points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.x), hi.max(p.x)));
        let (min_y, max_y) = points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));

        let solid = match fill {
            Fill::None => return,
            Fill::Solid(color) => Some(parse_or_black(color)),
            Fill::Gradient(id) => {
                if !self.gradients.contains_key(id) {
                    log::warn!("Fill references undefined gradient {:?}, skipping", id);
                    return;
                }
                None
            }
        };

        let (w, h) = (self.img.width() as i64, self.img.height() as i64);
        let y_start = (min_y.floor() as i64).max(0);
        let y_end = (max_y.ceil() as i64).min(h);
        let width_span = (max_x - min_x).max(f64::EPSILON);

        let mut crossings = Vec::with_capacity(points.len());
        for py in y_start..y_end {
            let sy = py as f64 + 0.5;
            crossings.clear();
            // closing edge included: fills close the open path implicitly
            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                if (a.y <= sy && b.y > sy) || (b.y <= sy && a.y > sy) {
                    crossings.push(a.x + (sy - a.y) / (b.y - a.y) * (b.x - a.x));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));

            for span in crossings.chunks_exact(2) {
                let x0 = ((span[0] - 0.5).ceil() as i64).max(0);
                let x1 = ((span[1] - 0.5).floor() as i64).min(w - 1);
                for px in x0..=x1 {
                    let rgb = match (&solid, fill) {
                        (Some(rgb), _) => *rgb,
                        (None, Fill::Gradient(id)) => match self.gradients.get(id) {
                            Some(g) => sample_gradient(g, (px as f64 + 0.5 - min_x) / width_span),
                            None => continue,
                        },
                        _ => continue,
                    };
                    self.img.put_pixel(px as u32, py as u32, opaque(rgb));
                }
            }
        }
    }

    fn stroke_polyline(&mut self, points: &[Point], color: &str, width: f64) {
        if width <= 0.0 {
            return;
        }
        let Some(rgb) = parse_hex_rgb(color) else {
            if color != "none" {
                log::warn!("Unsupported stroke colour {:?}, skipping stroke", color);
            }
            return;
        };
        let bounds = (self.img.width() as f64, self.img.height() as f64);
        for pair in points.windows(2) {
            let Some((a, b)) = clip_segment(pair[0], pair[1], bounds) else {
                continue;
            };
            draw_line(
                &mut self.img,
                a.x.floor() as i64,
                a.y.floor() as i64,
                b.x.floor() as i64,
                b.y.floor() as i64,
                opaque(rgb),
            );
        }
    }
}

impl RenderSurface for RasterSurface {
    fn size(&self) -> (f64, f64) {
        (self.img.width() as f64, self.img.height() as f64)
    }

    fn clear(&mut self) {
        let background = opaque(self.background);
        for pixel in self.img.pixels_mut() {
            *pixel = background;
        }
        self.gradients.clear();
    }

    fn define_gradient(&mut self, gradient: &Gradient) {
        self.gradients.insert(gradient.id.clone(), gradient.clone());
    }

    fn draw_path(&mut self, path: &DrawPath, offset: Point) {
        let points: Vec<Point> = path.points.iter().map(|p| p.translate(offset.x, offset.y)).collect();
        self.fill_polygon(&points, &path.style.fill);
        self.stroke_polyline(&points, &path.style.stroke_color, path.style.stroke_width);
    }
}

impl Resizable for RasterSurface {
    fn resize(&mut self, width: f64, height: f64) {
        let (w, h) = (width.max(0.0).round() as u32, height.max(0.0).round() as u32);
        self.img = RgbaImage::from_pixel(w, h, opaque(self.background));
    }
}

fn opaque(rgb: Rgb) -> Rgba<u8> {
    Rgba([rgb[0], rgb[1], rgb[2], 255])
}

/// Liang-Barsky clip of `a -> b` to `[0, width) x [0, height)`. `None` when
/// the segment misses the image or has a non-finite endpoint.
fn clip_segment(a: Point, b: Point, (width, height): (f64, f64)) -> Option<(Point, Point)> {
    if !(a.x.is_finite() && a.y.is_finite() && b.x.is_finite() && b.y.is_finite()) {
        return None;
    }
    // keep floor() of the far edge inside the last pixel
    let (max_x, max_y) = (width - 1e-6, height - 1e-6);
    if max_x < 0.0 || max_y < 0.0 {
        return None;
    }

    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    for (p, q) in [(-dx, a.x), (dx, max_x - a.x), (-dy, a.y), (dy, max_y - a.y)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| Point::new((a.x + t * dx).clamp(0.0, max_x), (a.y + t * dy).clamp(0.0, max_y));
    Some((at(t0), at(t1)))
}

fn draw_line(img: &mut RgbaImage, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgba<u8>) {
    // Bresenham line drawing
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        if x0 >= 0 && y0 >= 0 && x0 < img.width() as i64 && y0 < img.height() as i64 {
            img.put_pixel(x0 as u32, y0 as u32, color);
        }
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}
