/*!
# Vector Export System

SVG render surface with optional title, provenance comment and footer, plus
the [`VectorExporter`] that renders a well configuration straight to a file.
*/

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

use wellsketch_core::{
    Composer, ConfigProvider, DrawPath, Fill, Gradient, Point, RenderSurface, Resizable, Scene, SketchHost,
};

/// Export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    pub width: u32,
    pub height: u32,
    pub title: Option<String>,
    pub background_color: String,
    pub font_family: String,
    pub font_size: u32,
    pub show_footer: bool,
    pub provenance_comment: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 800,
            title: None,
            background_color: "#ffffff".to_string(),
            font_family: "Arial, sans-serif".to_string(),
            font_size: 12,
            show_footer: true,
            provenance_comment: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Svg,
    Png,
}

impl ExportFormat {
    /// Guess the format from a file extension; anything unknown is SVG.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("png") => ExportFormat::Png,
            _ => ExportFormat::Svg,
        }
    }
}

/// Renders well configurations to files.
pub struct VectorExporter {
    config: ExportConfig,
}

impl VectorExporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn export<P, C>(&self, path: P, format: ExportFormat, composer: &Composer, provider: &C) -> Result<Scene>
    where
        P: AsRef<Path>,
        C: ConfigProvider + ?Sized,
    {
        match format {
            ExportFormat::Svg => self.export_svg(path, composer, provider),
            ExportFormat::Png => self.export_png(path, composer, provider),
        }
    }

    /// Export to SVG format
    pub fn export_svg<P, C>(&self, path: P, composer: &Composer, provider: &C) -> Result<Scene>
    where
        P: AsRef<Path>,
        C: ConfigProvider + ?Sized,
    {
        let surface = SvgSurface::new(self.config.clone());
        let mut host = SketchHost::new(composer.clone(), provider, surface);
        let scene = host.attach().context("Failed to compose schematic")?;
        host.into_surface().write_to_file(path.as_ref())?;
        log::info!("Wrote SVG schematic to {}", path.as_ref().display());
        Ok(scene)
    }

    /// Export to PNG format
    #[cfg(feature = "raster")]
    pub fn export_png<P, C>(&self, path: P, composer: &Composer, provider: &C) -> Result<Scene>
    where
        P: AsRef<Path>,
        C: ConfigProvider + ?Sized,
    {
        let surface = crate::raster::RasterSurface::new(&self.config);
        let mut host = SketchHost::new(composer.clone(), provider, surface);
        let scene = host.attach().context("Failed to compose schematic")?;
        host.into_surface().save(path.as_ref())?;
        log::info!("Wrote PNG schematic to {}", path.as_ref().display());
        Ok(scene)
    }

    #[cfg(not(feature = "raster"))]
    pub fn export_png<P, C>(&self, _path: P, _composer: &Composer, _provider: &C) -> Result<Scene>
    where
        P: AsRef<Path>,
        C: ConfigProvider + ?Sized,
    {
        Err(anyhow::anyhow!("PNG export not enabled (compile with 'raster' feature)"))
    }
}

/// SVG document builder implementing [`RenderSurface`].
#[derive(Debug, Clone)]
pub struct SvgSurface {
    config: ExportConfig,
    defs: Vec<String>,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(config: ExportConfig) -> Self {
        Self { config, defs: Vec::new(), elements: Vec::new() }
    }

    /// Number of drawn shapes.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn to_svg_string(&self) -> String {
        let (width, height) = (self.config.width, self.config.height);
        let mut out = String::new();

        // writing into a String cannot fail
        let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        let _ = writeln!(
            out,
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#,
            w = width,
            h = height
        );
        if let Some(comment) = &self.config.provenance_comment {
            for line in comment.lines() {
                let _ = writeln!(out, "  <!-- {} -->", line.replace("--", "- -"));
            }
        }
        let _ = writeln!(
            out,
            r#"  <rect width="{}" height="{}" fill="{}"/>"#,
            width, height, self.config.background_color
        );
        if !self.defs.is_empty() {
            let _ = writeln!(out, "  <defs>");
            for def in &self.defs {
                let _ = writeln!(out, "    {}", def);
            }
            let _ = writeln!(out, "  </defs>");
        }
        if let Some(title) = &self.config.title {
            let _ = writeln!(
                out,
                r#"  <text x="{}" y="{}" font-family="{}" font-size="{}px" text-anchor="middle" font-weight="bold">{}</text>"#,
                width as f32 / 2.0,
                self.config.font_size + 2,
                self.config.font_family,
                self.config.font_size + 2,
                escape_text(title)
            );
        }
        for element in &self.elements {
            let _ = writeln!(out, "  {}", element);
        }
        if self.config.show_footer {
            let _ = writeln!(
                out,
                r#"  <text x="10" y="{}" font-family="{}" font-size="{}px" fill="gray">Wellsketch v{} | Generated: {}</text>"#,
                height.saturating_sub(6),
                self.config.font_family,
                self.config.font_size.saturating_sub(2),
                wellsketch_core::VERSION,
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
            );
        }
        let _ = writeln!(out, "</svg>");
        out
    }

    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_svg_string())
            .with_context(|| format!("Failed to write SVG file: {}", path.display()))
    }
}

impl RenderSurface for SvgSurface {
    fn size(&self) -> (f64, f64) {
        (self.config.width as f64, self.config.height as f64)
    }

    fn clear(&mut self) {
        self.defs.clear();
        self.elements.clear();
    }

    fn define_gradient(&mut self, gradient: &Gradient) {
        let mut def = format!(
            r#"<linearGradient id="{}" x1="0%" y1="0%" x2="100%" y2="0%">"#,
            gradient.id
        );
        for stop in &gradient.stops {
            def.push_str(&format!(
                r#"<stop offset="{:.1}%" stop-color="{}"/>"#,
                stop.offset * 100.0,
                stop.color
            ));
        }
        def.push_str("</linearGradient>");
        self.defs.push(def);
    }

    fn draw_path(&mut self, path: &DrawPath, offset: Point) {
        let fill = match &path.style.fill {
            Fill::None => "none".to_string(),
            Fill::Solid(color) => color.clone(),
            Fill::Gradient(id) => format!("url(#{})", id),
        };
        self.elements.push(format!(
            r#"<g transform="translate({},{})"><path class="{}" d="{}" stroke="{}" stroke-width="{}" fill="{}"/></g>"#,
            offset.x,
            offset.y,
            shape_class(path),
            path_data(&path.points),
            path.style.stroke_color,
            path.style.stroke_width,
            fill
        ));
    }
}

impl Resizable for SvgSurface {
    fn resize(&mut self, width: f64, height: f64) {
        self.config.width = width.max(0.0).round() as u32;
        self.config.height = height.max(0.0).round() as u32;
    }
}

/// Open polyline: `M x y L x y ...`
fn path_data(points: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            d.push(' ');
        }
        let _ = write!(d, "{} {:.3} {:.3}", cmd, p.x, p.y);
    }
    d
}

fn shape_class(path: &DrawPath) -> &'static str {
    use wellsketch_core::ShapeKind;
    match path.shape {
        ShapeKind::Hole => "hole",
        ShapeKind::Cement => "cement",
        ShapeKind::CasingFill => "casing-fill",
        ShapeKind::CasingLeftIncision | ShapeKind::CasingRightIncision => "casing-incision",
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
