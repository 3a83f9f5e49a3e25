//! Render command implementation - export a well file to SVG/PNG

use anyhow::Result;
use std::path::{Path, PathBuf};

use wellsketch_core::{Composer, RenderError};
use wellsketch_export::{ExportConfig, ExportFormat, VectorExporter};

use crate::config::WellFile;
use crate::error::{CliError, CliResult};
use crate::RenderFormat;

pub fn execute(
    well: PathBuf,
    output: PathBuf,
    format: Option<RenderFormat>,
    width: Option<u32>,
    height: Option<u32>,
    title: Option<String>,
    no_footer: bool,
) -> Result<()> {
    log::info!("Starting schematic rendering");
    log::info!("Well file: {}", well.display());
    log::info!("Output file: {}", output.display());

    let well_file = WellFile::load(&well)?;
    let export_format = resolve_format(format, &output)?;
    log::info!("Output format: {:?}", export_format);

    let export_config = ExportConfig {
        width: width.unwrap_or(well_file.render.width),
        height: height.unwrap_or(well_file.render.height),
        title: title.or_else(|| well_file.render.title.clone()),
        show_footer: !no_footer,
        provenance_comment: Some(format!("Rendered from {}", file_label(&well))),
        ..ExportConfig::default()
    };
    log::debug!("Export configuration: {:?}", export_config);

    let composer = Composer::new(well_file.composer_options());
    let provider = well_file.provider();
    let exporter = VectorExporter::new(export_config);

    let scene = exporter
        .export(&output, export_format, &composer, &provider)
        .map_err(|err| match err.downcast_ref::<RenderError>() {
            Some(render_err) => CliError::from(render_err.clone()).into(),
            None => err,
        })?;

    log::info!(
        "Rendered {} shapes over MD {}..{} to {}",
        scene.paths().count(),
        scene.ranges.min_md,
        scene.ranges.max_md,
        output.display()
    );

    Ok(())
}

fn resolve_format(format: Option<RenderFormat>, output: &Path) -> CliResult<ExportFormat> {
    let resolved = match format {
        Some(RenderFormat::Svg) => ExportFormat::Svg,
        Some(RenderFormat::Png) => ExportFormat::Png,
        None => ExportFormat::from_path(output),
    };

    if resolved == ExportFormat::Png && !cfg!(feature = "png") {
        return Err(CliError::invalid_format("PNG output is not available in this build"));
    }

    Ok(resolved)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
