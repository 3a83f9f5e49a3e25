/*!
# Render Surfaces and Scenes

The composer never touches a surface directly while building geometry. It
produces a [`Scene`]: an ordered command list that a [`RenderSurface`]
replays. Paths are open polylines; surfaces close them implicitly when
filling.
*/

use serde::{Deserialize, Serialize};

use crate::ranges::DerivedRange;
use crate::scale::Scales;
use crate::style::{Gradient, Style};
use crate::types::Point;

/// Anything that can display a schematic.
pub trait RenderSurface {
    /// Pixel width and height of the whole surface, margins included.
    fn size(&self) -> (f64, f64);

    /// Remove every previously drawn shape and registered gradient.
    fn clear(&mut self);

    fn define_gradient(&mut self, gradient: &Gradient);

    /// Draw `path`, whose points are in content space, shifted by `offset`.
    fn draw_path(&mut self, path: &DrawPath, offset: Point);
}

/// Surfaces whose pixel size follows the host container.
pub trait Resizable {
    fn resize(&mut self, width: f64, height: f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Hole,
    Cement,
    CasingFill,
    CasingLeftIncision,
    CasingRightIncision,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawPath {
    pub shape: ShapeKind,
    pub points: Vec<Point>,
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear,
    DefineGradient(Gradient),
    Draw(DrawPath),
}

/// Everything one render pass produced, in draw order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    /// Top-left corner of the content area (left and top margins).
    pub offset: Point,
    pub ranges: DerivedRange,
    pub scales: Scales,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    /// Replay every command onto `surface`.
    pub fn apply<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear => surface.clear(),
                DrawCommand::DefineGradient(gradient) => surface.define_gradient(gradient),
                DrawCommand::Draw(path) => surface.draw_path(path, self.offset),
            }
        }
    }

    pub fn paths(&self) -> impl Iterator<Item = &DrawPath> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Draw(path) => Some(path),
            _ => None,
        })
    }

    pub fn path(&self, shape: ShapeKind) -> Option<&DrawPath> {
        self.paths().find(|p| p.shape == shape)
    }
}

/// In-memory surface that keeps what was drawn, in surface coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub gradients: Vec<Gradient>,
    pub paths: Vec<DrawPath>,
    pub clears: usize,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ..Default::default() }
    }
}

impl RenderSurface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.gradients.clear();
        self.paths.clear();
        self.clears += 1;
    }

    fn define_gradient(&mut self, gradient: &Gradient) {
        self.gradients.push(gradient.clone());
    }

    fn draw_path(&mut self, path: &DrawPath, offset: Point) {
        let points = path.points.iter().map(|p| p.translate(offset.x, offset.y)).collect();
        self.paths.push(DrawPath { shape: path.shape, points, style: path.style.clone() });
    }
}

impl Resizable for RecordingSurface {
    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::LinearScale;
    use crate::style::Palette;

    fn tiny_scene() -> Scene {
        let scale = LinearScale::new((0.0, 1.0), (0.0, 10.0));
        Scene {
            width: 30.0,
            height: 30.0,
            offset: Point::new(5.0, 7.0),
            ranges: DerivedRange { max_hole_size: 1.0, min_md: 0.0, max_md: 1.0, prev_md: 0.0 },
            scales: Scales { horizontal: scale, vertical: scale },
            commands: vec![
                DrawCommand::Clear,
                DrawCommand::Draw(DrawPath {
                    shape: ShapeKind::Hole,
                    points: vec![Point::new(0.0, 0.0), Point::new(0.0, 10.0)],
                    style: Palette::default().hole(),
                }),
            ],
        }
    }

    #[test]
    fn test_apply_translates_by_offset() {
        let mut surface = RecordingSurface::new(30.0, 30.0);
        tiny_scene().apply(&mut surface);
        assert_eq!(surface.paths.len(), 1);
        assert_eq!(surface.paths[0].points[1], Point::new(5.0, 17.0));
    }

    #[test]
    fn test_clear_resets_contents() {
        let mut surface = RecordingSurface::new(30.0, 30.0);
        let scene = tiny_scene();
        scene.apply(&mut surface);
        scene.apply(&mut surface);
        assert_eq!(surface.paths.len(), 1);
        assert_eq!(surface.clears, 2);
    }

    #[test]
    fn test_path_lookup() {
        let scene = tiny_scene();
        assert!(scene.path(ShapeKind::Hole).is_some());
        assert!(scene.path(ShapeKind::Cement).is_none());
    }
}
