//! Stroke and fill styles for the schematic shapes.

use serde::{Deserialize, Serialize};

/// Identifier of the casing body gradient registered with the surface.
pub const CASING_GRADIENT_ID: &str = "casing-gradient";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient, `0.0..=1.0`.
    pub offset: f64,
    pub color: String,
}

/// A left-to-right linear gradient that styles can reference by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub id: String,
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    pub fn horizontal(id: impl Into<String>, stops: &[(f64, &str)]) -> Self {
        Self {
            id: id.into(),
            stops: stops
                .iter()
                .map(|&(offset, color)| GradientStop { offset, color: color.to_string() })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Fill {
    None,
    Solid(String),
    Gradient(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub stroke_color: String,
    pub stroke_width: f64,
    pub fill: Fill,
}

/// Colours for every shape of the schematic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default = "default_hole_stroke")]
    pub hole_stroke: String,
    #[serde(default = "default_cement_fill")]
    pub cement_fill: String,
    #[serde(default = "default_cement_stroke")]
    pub cement_stroke: String,
    #[serde(default = "default_casing_body")]
    pub casing_body: String,
    #[serde(default = "default_casing_gradient")]
    pub casing_gradient: Vec<String>,
}

fn default_hole_stroke() -> String { "#a0acbc".to_string() }
fn default_cement_fill() -> String { "#d4d0c8".to_string() }
fn default_cement_stroke() -> String { "#b5b0a5".to_string() }
fn default_casing_body() -> String { "#4b5563".to_string() }
fn default_casing_gradient() -> Vec<String> {
    vec!["#9ca3af".to_string(), "#f3f4f6".to_string(), "#9ca3af".to_string()]
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            hole_stroke: default_hole_stroke(),
            cement_fill: default_cement_fill(),
            cement_stroke: default_cement_stroke(),
            casing_body: default_casing_body(),
            casing_gradient: default_casing_gradient(),
        }
    }
}

impl Palette {
    /// Thin outline, no fill.
    pub fn hole(&self) -> Style {
        Style { stroke_color: self.hole_stroke.clone(), stroke_width: 1.0, fill: Fill::None }
    }

    pub fn cement(&self) -> Style {
        Style {
            stroke_color: self.cement_stroke.clone(),
            stroke_width: 1.0,
            fill: Fill::Solid(self.cement_fill.clone()),
        }
    }

    pub fn casing_fill(&self) -> Style {
        Style {
            stroke_color: "none".to_string(),
            stroke_width: 0.0,
            fill: Fill::Gradient(CASING_GRADIENT_ID.to_string()),
        }
    }

    pub fn casing_incision(&self) -> Style {
        Style {
            stroke_color: self.casing_body.clone(),
            stroke_width: 1.0,
            fill: Fill::Solid(self.casing_body.clone()),
        }
    }

    /// Stops evenly spread across the configured colours.
    pub fn casing_gradient(&self) -> Gradient {
        let n = self.casing_gradient.len();
        let stops: Vec<(f64, &str)> = self
            .casing_gradient
            .iter()
            .enumerate()
            .map(|(i, color)| (if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 }, color.as_str()))
            .collect();
        Gradient::horizontal(CASING_GRADIENT_ID, &stops)
    }
}
