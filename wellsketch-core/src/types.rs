use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;

/// A pixel-space coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Reflect across the vertical line `x = axis_x`.
    pub fn mirror_x(self, axis_x: f64) -> Self {
        Self { x: 2.0 * axis_x - self.x, y: self.y }
    }
}

/// Kind of construction element along the wellbore.
///
/// Serialized by name; deserializes from the name or the legacy type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "ElementKindRepr")]
pub enum ElementKind {
    OpenHole,
    Casing,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ElementKindRepr {
    Code(u8),
    Name(String),
}

impl TryFrom<ElementKindRepr> for ElementKind {
    type Error = ConfigError;

    fn try_from(repr: ElementKindRepr) -> Result<Self, Self::Error> {
        match repr {
            ElementKindRepr::Code(code) => Self::from_code(code),
            ElementKindRepr::Name(name) => match name.as_str() {
                "open_hole" => Ok(ElementKind::OpenHole),
                "casing" => Ok(ElementKind::Casing),
                other => Err(ConfigError::invalid_range("type", format!("unknown element type {other:?}"))),
            },
        }
    }
}

impl ElementKind {
    /// Numeric type codes used by legacy well configuration exports.
    pub const OPEN_HOLE_CODE: u8 = 9;
    pub const CASING_CODE: u8 = 6;

    pub fn from_code(code: u8) -> Result<Self, ConfigError> {
        match code {
            Self::OPEN_HOLE_CODE => Ok(ElementKind::OpenHole),
            Self::CASING_CODE => Ok(ElementKind::Casing),
            other => Err(ConfigError::UnknownElementKind(other)),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            ElementKind::OpenHole => Self::OPEN_HOLE_CODE,
            ElementKind::Casing => Self::CASING_CODE,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::OpenHole => f.write_str("open hole"),
            ElementKind::Casing => f.write_str("casing"),
        }
    }
}

/// One construction element: a hole section, optionally cased and cemented.
///
/// Diameters are in inches, depths are measured depth along the wellbore.
/// Field names accept the camelCase spelling used by older JSON exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementConfig {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(alias = "holeSize")]
    pub hole_size: f64,
    #[serde(alias = "holeMD")]
    pub hole_md: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub od: Option<f64>,
    #[serde(default, alias = "startMD", skip_serializing_if = "Option::is_none")]
    pub start_md: Option<f64>,
    #[serde(default, alias = "endMD", skip_serializing_if = "Option::is_none")]
    pub end_md: Option<f64>,
    #[serde(default, alias = "tocMD", skip_serializing_if = "Option::is_none")]
    pub toc_md: Option<f64>,
}

impl ElementConfig {
    pub fn open_hole(hole_size: f64, hole_md: f64) -> Self {
        Self {
            kind: ElementKind::OpenHole,
            hole_size,
            hole_md,
            od: None,
            start_md: None,
            end_md: None,
            toc_md: None,
        }
    }

    pub fn casing(hole_size: f64, hole_md: f64, od: f64, start_md: f64, end_md: f64) -> Self {
        Self {
            kind: ElementKind::Casing,
            hole_size,
            hole_md,
            od: Some(od),
            start_md: Some(start_md),
            end_md: Some(end_md),
            toc_md: None,
        }
    }

    pub fn with_toc(mut self, toc_md: f64) -> Self {
        self.toc_md = Some(toc_md);
        self
    }

    pub fn is_casing(&self) -> bool {
        self.kind == ElementKind::Casing
    }

    /// Casing run as `(od, start_md, end_md)`, if all three are present.
    pub fn casing_run(&self) -> Option<(f64, f64, f64)> {
        Some((self.od?, self.start_md?, self.end_md?))
    }

    /// Check field presence for the element kind and the ordering invariants
    /// `start_md <= end_md`, `toc_md <= hole_md`, `od <= hole_size`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.hole_size.is_finite() || self.hole_size <= 0.0 {
            return Err(ConfigError::invalid_range(
                "hole_size",
                format!("hole size must be positive, got {}", self.hole_size),
            ));
        }
        if !self.hole_md.is_finite() {
            return Err(ConfigError::invalid_range("hole_md", "hole depth must be finite"));
        }
        for (field, value) in [("start_md", self.start_md), ("end_md", self.end_md), ("toc_md", self.toc_md)] {
            if let Some(md) = value.filter(|md| !md.is_finite()) {
                return Err(ConfigError::invalid_range(field, format!("depth must be finite, got {md}")));
            }
        }

        if self.kind == ElementKind::Casing {
            for (field, value) in [("od", self.od), ("start_md", self.start_md), ("end_md", self.end_md)] {
                if value.is_none() {
                    return Err(ConfigError::MissingRequiredField { kind: self.kind, field });
                }
            }
        }

        if let Some(od) = self.od {
            if !od.is_finite() || od <= 0.0 {
                return Err(ConfigError::invalid_range("od", format!("outer diameter must be positive, got {od}")));
            }
            if od > self.hole_size {
                return Err(ConfigError::invalid_range(
                    "od",
                    format!("outer diameter {od} exceeds hole size {}", self.hole_size),
                ));
            }
        }

        if let (Some(start), Some(end)) = (self.start_md, self.end_md) {
            if start > end {
                return Err(ConfigError::invalid_range(
                    "start_md",
                    format!("casing top {start} is below casing bottom {end}"),
                ));
            }
        }

        if let Some(toc) = self.toc_md {
            if toc > self.hole_md {
                return Err(ConfigError::invalid_range(
                    "toc_md",
                    format!("top of cement {toc} is below hole bottom {}", self.hole_md),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn production_casing() -> ElementConfig {
        ElementConfig::casing(17.5, 1900.0, 13.375, 213.0, 1900.0).with_toc(213.0)
    }

    #[test]
    fn test_valid_casing_passes() {
        assert!(production_casing().validate().is_ok());
        assert!(ElementConfig::open_hole(16.0, 590.0).validate().is_ok());
    }

    #[test]
    fn test_casing_without_od_is_rejected() {
        let mut config = production_casing();
        config.od = None;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingRequiredField { kind: ElementKind::Casing, field: "od" }
        );
    }

    #[test]
    fn test_cement_below_hole_is_rejected() {
        let config = production_casing().with_toc(2000.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { field: "toc_md", .. })
        ));
    }

    #[test]
    fn test_od_wider_than_hole_is_rejected() {
        let mut config = production_casing();
        config.od = Some(20.0);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange { field: "od", .. })));
    }

    #[test]
    fn test_inverted_casing_run_is_rejected() {
        let config = ElementConfig::casing(17.5, 1900.0, 13.375, 1500.0, 200.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { field: "start_md", .. })
        ));
    }

    #[test]
    fn test_non_finite_depths_are_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut config = production_casing();
            config.start_md = Some(bad);
            assert!(matches!(config.validate(), Err(ConfigError::InvalidRange { field: "start_md", .. })));

            let mut config = production_casing();
            config.end_md = Some(bad);
            assert!(matches!(config.validate(), Err(ConfigError::InvalidRange { field: "end_md", .. })));

            let config = production_casing().with_toc(bad);
            assert!(matches!(config.validate(), Err(ConfigError::InvalidRange { field: "toc_md", .. })));
        }
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(ElementKind::from_code(9).unwrap(), ElementKind::OpenHole);
        assert_eq!(ElementKind::from_code(6).unwrap(), ElementKind::Casing);
        assert_eq!(ElementKind::from_code(3), Err(ConfigError::UnknownElementKind(3)));
        assert_eq!(ElementKind::Casing.code(), 6);
    }

    #[test]
    fn test_camel_case_aliases() {
        let json = r#"{"type":"casing","holeSize":17,"holeMD":1900,"od":13.375,"startMD":0,"endMD":1500,"tocMD":553}"#;
        let config: ElementConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.casing_run(), Some((13.375, 0.0, 1500.0)));
        assert_eq!(config.toc_md, Some(553.0));
    }

    #[test]
    fn test_legacy_production_casing_json() {
        let json = r#"{
            "type": 6,
            "holeSize": 17,
            "holeMD": 1900,
            "od": 13.375,
            "startMD": 0,
            "endMD": 1500,
            "tocMD": 553
        }"#;
        let config: ElementConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, ElementConfig::casing(17.0, 1900.0, 13.375, 0.0, 1500.0).with_toc(553.0));
    }

    #[test]
    fn test_legacy_open_hole_json() {
        let json = r#"{ "type": 9, "holeSize": 16, "holeMD": 590 }"#;
        let config: ElementConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, ElementConfig::open_hole(16.0, 590.0));
        assert_eq!(config.kind.code(), ElementKind::OPEN_HOLE_CODE);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(serde_json::from_str::<ElementKind>("3").is_err());
        assert!(serde_json::from_str::<ElementKind>(r#""liner""#).is_err());
        assert_eq!(serde_json::from_str::<ElementKind>(r#""casing""#).unwrap(), ElementKind::Casing);
        assert_eq!(serde_json::to_string(&ElementKind::OpenHole).unwrap(), r#""open_hole""#);
    }

    #[test]
    fn test_mirror_x() {
        let p = Point::new(10.0, 5.0).mirror_x(20.0);
        assert_eq!(p, Point::new(30.0, 5.0));
    }
}
