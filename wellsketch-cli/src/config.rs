//! Well file handling for the Wellsketch CLI
//!
//! A well file is TOML (or JSON, by extension) holding render settings, an
//! optional palette and the ordered list of construction elements.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use wellsketch_core::{
    ComposerOptions, ConfigProvider, ElementConfig, Margins, Palette, StaticProvider, DEFAULT_BASELINE_MD,
};

use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellFile {
    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub palette: Palette,

    /// Construction elements, shallowest first. The last one is drawn.
    #[serde(default)]
    pub elements: Vec<ElementConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Default width
    #[serde(default = "default_width")]
    pub width: u32,

    /// Default height
    #[serde(default = "default_height")]
    pub height: u32,

    /// Top reference depth of the first element
    #[serde(default = "default_baseline_md")]
    pub baseline_md: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub margins: Margins,
}

fn default_width() -> u32 { 400 }
fn default_height() -> u32 { 800 }
fn default_baseline_md() -> f64 { DEFAULT_BASELINE_MD }

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            baseline_md: default_baseline_md(),
            title: None,
            margins: Margins::default(),
        }
    }
}

impl WellFile {
    pub fn from_provider(provider: &impl ConfigProvider) -> Self {
        Self {
            render: RenderConfig::default(),
            palette: Palette::default(),
            elements: provider.elements(),
        }
    }

    /// Load a well file, choosing JSON or TOML by extension.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::file_not_found(path.to_path_buf()).into());
        }
        log::info!("Loading well configuration from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read well file: {}", path.display()))?;

        let well = if is_json(path) {
            serde_json::from_str(&content)
                .map_err(|e| CliError::parse(path.display().to_string(), e.to_string()))?
        } else {
            toml::from_str(&content)
                .map_err(|e| CliError::parse(path.display().to_string(), e.to_string()))?
        };

        Ok(well)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self).context("Failed to serialize well file")?
        } else {
            toml::to_string_pretty(self).context("Failed to serialize well file")?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write well file: {}", path.display()))?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize well file")
    }

    /// Example well file content
    pub fn example(open_hole: bool) -> Self {
        let provider = if open_hole { StaticProvider::open_hole_sample() } else { StaticProvider::sample() };
        let mut well = Self::from_provider(&provider);
        well.render.title = Some(if open_hole { "16in open hole" } else { "13 3/8in production casing" }.to_string());
        well
    }

    pub fn composer_options(&self) -> ComposerOptions {
        ComposerOptions {
            margins: self.render.margins,
            baseline_md: self.render.baseline_md,
            palette: self.palette.clone(),
        }
    }

    pub fn provider(&self) -> StaticProvider {
        StaticProvider::new(self.elements.clone())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
