//! Inspect command implementation - dump the composed geometry as JSON

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use wellsketch_core::{Composer, ConfigProvider, DerivedRange, DrawPath, Point, Scales, Scene, ShapeKind};

use crate::config::WellFile;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct InspectReport {
    width: f64,
    height: f64,
    offset: Point,
    ranges: DerivedRange,
    scales: Scales,
    shapes: Vec<ShapeReport>,
}

#[derive(Debug, Serialize)]
struct ShapeReport {
    shape: ShapeKind,
    /// Shallowest and deepest MD the shape reaches, read back from its points.
    md_extent: (f64, f64),
    points: Vec<Point>,
}

impl ShapeReport {
    fn new(path: &DrawPath, scales: &Scales) -> Self {
        let (top, bottom) = path
            .points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
        Self {
            shape: path.shape,
            md_extent: (scales.vertical.invert(top), scales.vertical.invert(bottom)),
            points: path.points.clone(),
        }
    }
}

impl From<&Scene> for InspectReport {
    fn from(scene: &Scene) -> Self {
        Self {
            width: scene.width,
            height: scene.height,
            offset: scene.offset,
            ranges: scene.ranges,
            scales: scene.scales,
            shapes: scene.paths().map(|path| ShapeReport::new(path, &scene.scales)).collect(),
        }
    }
}

pub fn execute(well: PathBuf) -> Result<()> {
    let well_file = WellFile::load(&well)?;
    let report = inspect(&well_file)?;
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize inspection report")?;
    println!("{}", json);
    Ok(())
}

fn inspect(well: &WellFile) -> Result<InspectReport> {
    let composer = Composer::new(well.composer_options());
    let elements = well.provider().elements();
    let scene = composer
        .compose(&elements, well.render.width as f64, well.render.height as f64)
        .map_err(CliError::from)?;
    log::debug!("Composed {} commands for inspection", scene.commands.len());
    Ok(InspectReport::from(&scene))
}
