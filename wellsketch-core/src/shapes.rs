/*!
# Shape Builders

Pure functions from scales and an element configuration to pixel-space
point sequences. Every shape is either a rectangular band (hole wall, cement
sheath, casing body) or a casing shoe incision.

All builders assume the element passed [`ElementConfig::validate`].
*/

use serde::{Deserialize, Serialize};

use crate::ranges::DerivedRange;
use crate::scale::Scales;
use crate::types::{ElementConfig, Point};

/// Height of the flat step at the bottom of a shoe notch.
pub const SHOE_RISE_PX: f64 = 3.0;
/// Distance above the casing bottom where the shoe notch rejoins the wall.
pub const SHOE_TAPER_PX: f64 = 10.0;

/// Which wall of the casing an incision belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Direction of "outward" along x.
    fn outward(self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Casing body fill plus the two shoe incisions drawn over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CasingShapes {
    pub fill: [Point; 4],
    pub left_incision: [Point; 5],
    pub right_incision: [Point; 5],
}

/// Quadrilateral between two diameter bounds and two depths, in the order
/// top-left, bottom-left, bottom-right, top-right.
pub fn band(
    scales: &Scales,
    left_diameter: f64,
    right_diameter: f64,
    top_md: f64,
    bottom_md: f64,
) -> [Point; 4] {
    let left_x = scales.x(left_diameter);
    let right_x = scales.x(right_diameter);
    let top_y = scales.y(top_md);
    let bottom_y = scales.y(bottom_md);

    [
        Point::new(left_x, top_y),
        Point::new(left_x, bottom_y),
        Point::new(right_x, bottom_y),
        Point::new(right_x, top_y),
    ]
}

/// Diameter bounds of a pipe or hole of `diameter` centred in `max_diameter`.
fn centred(max_diameter: f64, diameter: f64) -> (f64, f64) {
    let left = (max_diameter - diameter) / 2.0;
    (left, left + diameter)
}

/// Shoe notch along one casing wall: down the wall, out by `jog`, up by
/// [`SHOE_RISE_PX`], then back to the wall [`SHOE_TAPER_PX`] above the bottom.
pub fn shoe_incision(side: Side, edge_x: f64, top_y: f64, bottom_y: f64, jog: f64) -> [Point; 5] {
    let out_x = edge_x + side.outward() * jog;
    [
        Point::new(edge_x, top_y),
        Point::new(edge_x, bottom_y),
        Point::new(out_x, bottom_y),
        Point::new(out_x, bottom_y - SHOE_RISE_PX),
        Point::new(edge_x, bottom_y - SHOE_TAPER_PX),
    ]
}

/// Hole walls from the previous element's bottom down to this hole's bottom.
pub fn hole_points(scales: &Scales, config: &ElementConfig, ranges: &DerivedRange) -> [Point; 4] {
    let (left, right) = centred(ranges.max_hole_size, config.hole_size);
    band(scales, left, right, ranges.prev_md, config.hole_md)
}

/// Cement sheath across the hole width from top of cement to hole bottom.
/// `None` when the element carries no cement.
pub fn cement_points(scales: &Scales, config: &ElementConfig, ranges: &DerivedRange) -> Option<[Point; 4]> {
    let toc_md = config.toc_md?;
    let (left, right) = centred(ranges.max_hole_size, config.hole_size);
    Some(band(scales, left, right, toc_md, config.hole_md))
}

/// Casing body and shoe incisions. `None` for elements without a casing run.
pub fn casing_shapes(scales: &Scales, config: &ElementConfig, ranges: &DerivedRange) -> Option<CasingShapes> {
    if !config.is_casing() {
        return None;
    }
    let (od, start_md, end_md) = config.casing_run()?;

    let (left, right) = centred(ranges.max_hole_size, od);
    let fill = band(scales, left, right, start_md, end_md);
    let [top_left, bottom_left, bottom_right, _] = fill;

    let jog = scales.horizontal.span((config.hole_size - od) / 2.0);
    let left_incision = shoe_incision(Side::Left, top_left.x, top_left.y, bottom_left.y, jog);
    let right_incision = shoe_incision(Side::Right, bottom_right.x, top_left.y, bottom_right.y, jog);

    Some(CasingShapes { fill, left_incision, right_incision })
}
