/*!
# Schematic Composer

Orchestrates one render pass: validate the element list, derive ranges,
build the scale pair, run the shape builders in layering order (hole, cement,
casing) and collect the result as a [`Scene`]. Later commands draw over
earlier ones.
*/

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::provider::ConfigProvider;
use crate::ranges::{calculate_ranges, DEFAULT_BASELINE_MD};
use crate::scale::Scales;
use crate::shapes::{casing_shapes, cement_points, hole_points};
use crate::style::{Palette, Style};
use crate::surface::{DrawCommand, DrawPath, RenderSurface, Scene, ShapeKind};
use crate::types::{ElementConfig, Point};

/// Space kept free around the content area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    #[serde(default = "default_vertical_margin")]
    pub top: f64,
    #[serde(default = "default_horizontal_margin")]
    pub right: f64,
    #[serde(default = "default_vertical_margin")]
    pub bottom: f64,
    #[serde(default = "default_horizontal_margin")]
    pub left: f64,
}

fn default_vertical_margin() -> f64 { 20.0 }
fn default_horizontal_margin() -> f64 { 50.0 }

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: default_vertical_margin(),
            right: default_horizontal_margin(),
            bottom: default_vertical_margin(),
            left: default_horizontal_margin(),
        }
    }
}

impl Margins {
    pub const fn uniform(margin: f64) -> Self {
        Self { top: margin, right: margin, bottom: margin, left: margin }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComposerOptions {
    pub margins: Margins,
    pub baseline_md: f64,
    pub palette: Palette,
}

impl Default for ComposerOptions {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            baseline_md: DEFAULT_BASELINE_MD,
            palette: Palette::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Composer {
    options: ComposerOptions,
}

impl Composer {
    pub fn new(options: ComposerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ComposerOptions {
        &self.options
    }

    /// Build the command list for a `width` x `height` surface. The last
    /// element of `elements` is the one drawn.
    pub fn compose(&self, elements: &[ElementConfig], width: f64, height: f64) -> Result<Scene, RenderError> {
        for element in elements {
            element.validate()?;
        }

        let margins = &self.options.margins;
        let content_width = width - margins.left - margins.right;
        let content_height = height - margins.top - margins.bottom;
        if content_width <= 0.0 || content_height <= 0.0 {
            return Err(RenderError::ContentTooSmall { width: content_width, height: content_height });
        }

        let ranges = calculate_ranges(elements, self.options.baseline_md)?;
        let scales = Scales::for_content(&ranges, content_width, content_height)?;
        let active = elements.last().ok_or(RenderError::NoElements)?;
        log::debug!(
            "Composing {} element ({} in, MD {}) into {:.0}x{:.0} content, ranges {:?}",
            active.kind, active.hole_size, active.hole_md, content_width, content_height, ranges
        );

        let palette = &self.options.palette;
        let mut commands = vec![DrawCommand::Clear];

        push_path(&mut commands, ShapeKind::Hole, &hole_points(&scales, active, &ranges), palette.hole());

        if let Some(cement) = cement_points(&scales, active, &ranges) {
            push_path(&mut commands, ShapeKind::Cement, &cement, palette.cement());
        }

        if let Some(casing) = casing_shapes(&scales, active, &ranges) {
            commands.push(DrawCommand::DefineGradient(palette.casing_gradient()));
            push_path(&mut commands, ShapeKind::CasingFill, &casing.fill, palette.casing_fill());
            push_path(&mut commands, ShapeKind::CasingLeftIncision, &casing.left_incision, palette.casing_incision());
            push_path(&mut commands, ShapeKind::CasingRightIncision, &casing.right_incision, palette.casing_incision());
        }

        Ok(Scene {
            width,
            height,
            offset: Point::new(margins.left, margins.top),
            ranges,
            scales,
            commands,
        })
    }

    /// Full render pass: snapshot the provider, compose for the surface's
    /// current size and replay the scene onto it. Nothing is drawn when
    /// composing fails.
    pub fn render<S, P>(&self, surface: &mut S, provider: &P) -> Result<Scene, RenderError>
    where
        S: RenderSurface + ?Sized,
        P: ConfigProvider + ?Sized,
    {
        let elements = provider.elements();
        let (width, height) = surface.size();
        let scene = self.compose(&elements, width, height)?;
        scene.apply(surface);
        Ok(scene)
    }
}

fn push_path(commands: &mut Vec<DrawCommand>, shape: ShapeKind, points: &[Point], style: Style) {
    log::debug!("{:?}: {} points", shape, points.len());
    commands.push(DrawCommand::Draw(DrawPath { shape, points: points.to_vec(), style }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::provider::StaticProvider;
    use crate::surface::RecordingSurface;

    fn shapes(scene: &Scene) -> Vec<ShapeKind> {
        scene.paths().map(|p| p.shape).collect()
    }

    #[test]
    fn test_casing_layering_order() {
        let composer = Composer::default();
        let elements = StaticProvider::sample().elements();
        let scene = composer.compose(&elements, 400.0, 800.0).unwrap();
        assert_eq!(scene.commands[0], DrawCommand::Clear);
        assert_eq!(
            shapes(&scene),
            vec![
                ShapeKind::Hole,
                ShapeKind::Cement,
                ShapeKind::CasingFill,
                ShapeKind::CasingLeftIncision,
                ShapeKind::CasingRightIncision,
            ]
        );
        assert!(scene.commands.iter().any(|c| matches!(c, DrawCommand::DefineGradient(_))));
    }

    #[test]
    fn test_open_hole_draws_only_hole() {
        let composer = Composer::default();
        let elements = StaticProvider::open_hole_sample().elements();
        let scene = composer.compose(&elements, 400.0, 800.0).unwrap();
        assert_eq!(shapes(&scene), vec![ShapeKind::Hole]);
        assert!(!scene.commands.iter().any(|c| matches!(c, DrawCommand::DefineGradient(_))));
    }

    #[test]
    fn test_default_margins_set_offset() {
        let scene = Composer::default()
            .compose(&StaticProvider::sample().elements(), 400.0, 800.0)
            .unwrap();
        assert_eq!(scene.offset, Point::new(50.0, 20.0));
        assert_eq!(scene.scales.horizontal.range, (0.0, 300.0));
        assert_eq!(scene.scales.vertical.range, (0.0, 760.0));
    }

    #[test]
    fn test_invalid_config_fails_before_drawing() {
        let mut bad = StaticProvider::sample().elements();
        bad[0].od = None;
        let provider = StaticProvider::new(bad);
        let mut surface = RecordingSurface::new(400.0, 800.0);
        let err = Composer::default().render(&mut surface, &provider).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Config(ConfigError::MissingRequiredField { field: "od", .. })
        ));
        assert_eq!(surface.clears, 0);
        assert!(surface.paths.is_empty());
    }

    #[test]
    fn test_surface_smaller_than_margins() {
        let err = Composer::default()
            .compose(&StaticProvider::sample().elements(), 90.0, 800.0)
            .unwrap_err();
        assert!(matches!(err, RenderError::ContentTooSmall { .. }));
    }

    #[test]
    fn test_hole_at_baseline_is_rejected() {
        let elements = vec![ElementConfig::open_hole(16.0, DEFAULT_BASELINE_MD)];
        let err = Composer::default().compose(&elements, 400.0, 800.0).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Config(ConfigError::InvalidRange { field: "hole_md", .. })
        ));
    }

    #[test]
    fn test_empty_provider() {
        let mut surface = RecordingSurface::new(400.0, 800.0);
        let err = Composer::default().render(&mut surface, &StaticProvider::default()).unwrap_err();
        assert_eq!(err, RenderError::NoElements);
    }
}
