//! DirBurst application icon generator.
//!
//! Produces a procedural icon: a small three-ring sunburst whose segments
//! are coloured with the same angle-to-hue rule as the chart itself. The
//! icon is rendered at an arbitrary resolution as RGBA pixel data suitable
//! for use as a window icon.

use dirburst_core::color::Hsl;
use std::f32::consts::TAU;

/// Segment boundaries per ring, as fractions of a full turn.
const RINGS: [&[f32]; 2] = [
    &[0.0, 0.55, 0.85, 1.0],
    &[0.0, 0.30, 0.55, 0.72, 0.85, 0.93, 1.0],
];

/// Generate a DirBurst icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    let rgba = render_icon(size);
    egui::IconData {
        rgba,
        width: size,
        height: size,
    }
}

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // ── Layout ──────────────────────────────────────────────────
    let c = s * 0.5;
    let outer = s * 0.47;
    let band = outer / 3.0;
    // Separator width between segments, in pixels.
    let gap = (s / 64.0).max(1.0);

    // ── Per-pixel rendering ─────────────────────────────────────
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - c;
            let dy = y as f32 + 0.5 - c;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > outer + 1.0 {
                continue;
            }

            let turn = {
                let a = dy.atan2(dx) / TAU;
                if a < 0.0 {
                    a + 1.0
                } else {
                    a
                }
            };

            let ring = ((dist / band) as usize).min(2);
            let (rgb, to_edge) = if ring == 0 {
                // Centre disc: the display root.
                ([0xe4u8, 0xe4, 0xe8], f32::INFINITY)
            } else {
                let bounds = RINGS[ring - 1];
                let seg = bounds.windows(2).position(|w| turn < w[1]).unwrap_or(0);
                let (start, end) = (bounds[seg], bounds[seg + 1]);
                let mid = f64::from(0.5 * (start + end)) * std::f64::consts::TAU;
                let rgb = Hsl::from_angle(mid, 0.7, 0.5).to_rgb();
                // Arc length to the nearest radial edge of the segment.
                let to_edge = (turn - start).min(end - turn) * TAU * dist;
                ([rgb.r, rgb.g, rgb.b], to_edge)
            };

            // White separators along ring and segment boundaries.
            let to_inner = if ring > 0 {
                dist - band * ring as f32
            } else {
                f32::INFINITY
            };
            let to_outer = if ring < 2 {
                band * (ring + 1) as f32 - dist
            } else {
                f32::INFINITY
            };
            let separator = smooth_edge(to_edge.min(to_inner).min(to_outer), gap * 0.5);

            let coverage = smooth_edge(dist, outer);
            let idx = ((y * size + x) * 4) as usize;
            pixels[idx] = lerp_c(rgb[0], 0xff, separator);
            pixels[idx + 1] = lerp_c(rgb[1], 0xff, separator);
            pixels[idx + 2] = lerp_c(rgb[2], 0xff, separator);
            pixels[idx + 3] = (coverage * 255.0).clamp(0.0, 255.0) as u8;
        }
    }

    pixels
}

// ── Helpers ─────────────────────────────────────────────────────

/// Smooth anti-aliased edge (1 → 0 as `dist` crosses `edge`).
fn smooth_edge(dist: f32, edge: f32) -> f32 {
    let d = dist - edge;
    if d < -1.0 {
        1.0
    } else if d > 1.0 {
        0.0
    } else {
        0.5 - d * 0.5
    }
}

/// Linear interpolation for a single colour channel.
fn lerp_c(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}
