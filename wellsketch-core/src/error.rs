//! Error types for the geometry engine

use thiserror::Error;

use crate::scale::Axis;
use crate::types::ElementKind;

/// A well configuration that cannot be drawn.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{kind} element is missing required field `{field}`")]
    MissingRequiredField { kind: ElementKind, field: &'static str },

    #[error("invalid range for `{field}`: {detail}")]
    InvalidRange { field: &'static str, detail: String },

    #[error("unknown element type code {0}")]
    UnknownElementKind(u8),
}

impl ConfigError {
    pub fn invalid_range<S: Into<String>>(field: &'static str, detail: S) -> Self {
        Self::InvalidRange { field, detail: detail.into() }
    }
}

/// Failure of a render pass before anything reaches the surface.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("configuration provider returned no elements")]
    NoElements,

    #[error("surface too small for margins: content area would be {width}x{height}")]
    ContentTooSmall { width: f64, height: f64 },

    #[error("degenerate {axis} domain: both bounds are {value}")]
    DegenerateDomain { axis: Axis, value: f64 },
}
