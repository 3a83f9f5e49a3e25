use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, RenderError};
use crate::types::ElementConfig;

/// Top reference depth for the first element of a well.
pub const DEFAULT_BASELINE_MD: f64 = 200.0;

/// Domain bounds for the two scales of one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedRange {
    pub max_hole_size: f64,
    pub min_md: f64,
    pub max_md: f64,
    /// Bottom depth of the element preceding the active one.
    pub prev_md: f64,
}

/// Top reference depth of every element: its predecessor's hole bottom, or
/// `baseline_md` for the first element.
pub fn top_references(elements: &[ElementConfig], baseline_md: f64) -> Vec<f64> {
    std::iter::once(baseline_md)
        .chain(elements.iter().map(|e| e.hole_md))
        .take(elements.len())
        .collect()
}

/// Fold the ordered element sequence into scale domains. The last element is
/// the active one; `prev_md` is its top reference.
///
/// Every element must end below its top reference, otherwise the hole would
/// be drawn upside down.
pub fn calculate_ranges(elements: &[ElementConfig], baseline_md: f64) -> Result<DerivedRange, RenderError> {
    if elements.is_empty() {
        return Err(RenderError::NoElements);
    }

    let tops = top_references(elements, baseline_md);
    if let Some((element, top)) = elements.iter().zip(&tops).find(|(e, top)| e.hole_md <= **top) {
        return Err(ConfigError::invalid_range(
            "hole_md",
            format!("hole bottom {} is not below its top reference {}", element.hole_md, top),
        )
        .into());
    }

    let max_hole_size = elements.iter().map(|e| e.hole_size).fold(f64::NEG_INFINITY, f64::max);
    let max_md = elements.iter().map(|e| e.hole_md).fold(f64::NEG_INFINITY, f64::max);

    let min_md = tops.iter().copied().fold(f64::INFINITY, f64::min);
    let prev_md = tops.last().copied().unwrap_or(baseline_md);

    Ok(DerivedRange { max_hole_size, min_md, max_md, prev_md })
}
