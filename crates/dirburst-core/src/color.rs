/// Arc colouring — hue follows the angular midpoint of each span.
use crate::geometry::ArcSpan;
use std::f64::consts::TAU;

/// An opaque colour in HSL space. Hue in degrees, the rest in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// An opaque 8-bit sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`, as used in SVG `fill` attributes.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Hue for an angle in radians: one full turn maps to 360 degrees.
    pub fn from_angle(angle: f64, s: f64, l: f64) -> Self {
        Self::new(360.0 * angle.rem_euclid(TAU) / TAU, s, l)
    }

    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        Rgb::new(channel(r), channel(g), channel(b))
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Fill colour of an arc: hue from its mid angle, fixed saturation and
/// lightness.
pub fn span_color(span: &ArcSpan, saturation: f64, lightness: f64) -> Rgb {
    Hsl::from_angle(span.mid_angle(), saturation, lightness).to_rgb()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_primary_hues() {
        assert_eq!(Hsl::new(0.0, 0.7, 0.5).to_rgb(), Rgb::new(217, 38, 38));
        assert_eq!(Hsl::new(120.0, 0.7, 0.5).to_rgb(), Rgb::new(38, 217, 38));
        assert_eq!(Hsl::new(240.0, 0.7, 0.5).to_rgb(), Rgb::new(38, 38, 217));
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        assert_eq!(Hsl::new(200.0, 0.0, 0.5).to_rgb(), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_hue_wraps_full_turn() {
        assert_eq!(Hsl::from_angle(TAU, 0.7, 0.5), Hsl::from_angle(0.0, 0.7, 0.5));
        assert_eq!(Hsl::from_angle(PI, 0.7, 0.5).h, 180.0);
    }

    #[test]
    fn test_span_color_uses_mid_angle() {
        let span = ArcSpan {
            angle_start: 0.0,
            angle_end: 2.0 * PI / 3.0,
            radius_inner: 0.0,
            radius_outer: 1.0,
            depth: 1,
        };
        // Mid angle is a sixth of a turn: 60 degrees, yellow.
        assert_eq!(span_color(&span, 0.7, 0.5), Rgb::new(217, 217, 38));
    }

    #[test]
    fn test_hex_output() {
        assert_eq!(Rgb::new(217, 38, 38).to_hex(), "#d92626");
        assert_eq!(Rgb::WHITE.to_hex(), "#ffffff");
    }
}
