//! Linear mappings from physical units to pixel space.
//!
//! One scale per axis per render pass: diameters map onto the horizontal
//! content width, measured depth onto the vertical content height with depth
//! increasing downward. Values outside the domain are extrapolated.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RenderError;
use crate::ranges::DerivedRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

/// `(domain_min, domain_max) -> (range_min, range_max)` linear interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    /// Callers must not pass a zero-width domain; use [`LinearScale::try_new`]
    /// when the domain comes from user data.
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn try_new(axis: Axis, domain: (f64, f64), range: (f64, f64)) -> Result<Self, RenderError> {
        if domain.0 == domain.1 {
            return Err(RenderError::DegenerateDomain { axis, value: domain.0 });
        }
        Ok(Self::new(domain, range))
    }

    #[inline]
    pub fn map(&self, value: f64) -> f64 {
        let t = (value - self.domain.0) / (self.domain.1 - self.domain.0);
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    #[inline]
    pub fn invert(&self, pixel: f64) -> f64 {
        let t = (pixel - self.range.0) / (self.range.1 - self.range.0);
        self.domain.0 + t * (self.domain.1 - self.domain.0)
    }

    /// Pixel length of a physical length, independent of the domain origin.
    #[inline]
    pub fn span(&self, length: f64) -> f64 {
        length * (self.range.1 - self.range.0) / (self.domain.1 - self.domain.0)
    }
}

/// The horizontal/vertical scale pair for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    pub horizontal: LinearScale,
    pub vertical: LinearScale,
}

impl Scales {
    /// Horizontal: `[0, max_hole_size] -> [0, content_width]`.
    /// Vertical: `[min_md, max_md] -> [0, content_height]`.
    pub fn for_content(
        ranges: &DerivedRange,
        content_width: f64,
        content_height: f64,
    ) -> Result<Self, RenderError> {
        let horizontal = LinearScale::try_new(
            Axis::Horizontal,
            (0.0, ranges.max_hole_size),
            (0.0, content_width),
        )?;
        let vertical = LinearScale::try_new(
            Axis::Vertical,
            (ranges.min_md, ranges.max_md),
            (0.0, content_height),
        )?;
        Ok(Self { horizontal, vertical })
    }

    #[inline]
    pub fn x(&self, diameter: f64) -> f64 {
        self.horizontal.map(diameter)
    }

    #[inline]
    pub fn y(&self, md: f64) -> f64 {
        self.vertical.map(md)
    }
}
