//! Colour parsing and interpolation for the raster surface.

use wellsketch_core::Gradient;

pub type Rgb = [u8; 3];

/// Parse `#rrggbb` (the leading `#` is optional).
pub fn parse_hex_rgb(s: &str) -> Option<Rgb> {
    let hex = s.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}

/// Like [`parse_hex_rgb`] but falls back to black for unreadable colours.
pub fn parse_or_black(s: &str) -> Rgb {
    parse_hex_rgb(s).unwrap_or_else(|| {
        log::warn!("Unsupported colour {:?}, using black", s);
        [0, 0, 0]
    })
}

fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round().clamp(0.0, 255.0) as u8;
    [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
}

/// Colour of `gradient` at position `t` in `0.0..=1.0`.
pub fn sample_gradient(gradient: &Gradient, t: f64) -> Rgb {
    let stops = &gradient.stops;
    let Some(first) = stops.first() else {
        return [0, 0, 0];
    };
    if t <= first.offset {
        return parse_or_black(&first.color);
    }
    for pair in stops.windows(2) {
        let (lo, hi) = (&pair[0], &pair[1]);
        if t <= hi.offset {
            let span = (hi.offset - lo.offset).max(f64::EPSILON);
            return lerp(parse_or_black(&lo.color), parse_or_black(&hi.color), (t - lo.offset) / span);
        }
    }
    stops.last().map(|s| parse_or_black(&s.color)).unwrap_or([0, 0, 0])
}
