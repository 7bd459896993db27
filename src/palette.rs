//! Pastel colours for topic tags, derived from the tag text and its position.
//!
//! Design:
//! - Hue: one mulberry32 draw seeded by `fnv1a_32(label + index)`.
//! - Saturation/lightness: fixed per role, giving a soft background, a
//!   slightly stronger border and a dark readable foreground.
//!
//! The position index is part of the seed, so the same tag text at
//! different positions gets different (still stable) colours.

use crate::hash::fnv1a_32;
use crate::prng::Mulberry32;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h_deg: f64, // 0..360
    pub s: f64,     // 0..1
    pub l: f64,     // 0..1
}

impl Hsl {
    pub fn new(h_deg: f64, s: f64, l: f64) -> Self {
        Self { h_deg, s, l }
    }

    /// CSS Color 4 space-separated form, e.g. `hsl(20 90% 96%)`.
    pub fn to_css(&self) -> String {
        format!(
            "hsl({} {}% {}%)",
            fmt_num(self.h_deg),
            fmt_num(self.s * 100.0),
            fmt_num(self.l * 100.0)
        )
    }

    pub fn to_rgb8(&self) -> Rgb8 {
        hsl_to_rgb8(*self)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The three colours applied to one rendered tag.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TagColors {
    pub hue: u16,
    pub background: Hsl,
    pub border: Hsl,
    pub foreground: Hsl,
}

impl TagColors {
    /// Build the triple for a hue angle in degrees.
    pub fn from_hue(hue: u16) -> Self {
        let h = f64::from(hue);
        Self {
            hue,
            background: Hsl::new(h, 0.90, 0.96),
            border: Hsl::new(h, 0.70, 0.85),
            foreground: Hsl::new(h, 0.40, 0.30),
        }
    }

    /// Inline style declaration for an HTML element.
    pub fn css_style(&self) -> String {
        format!(
            "background-color:{};border-color:{};color:{}",
            self.background, self.border, self.foreground
        )
    }
}

/// Colours for `label` shown at position `index` in an article's tag row.
///
/// ```
/// use daily_digest::palette::tag_colors;
///
/// let first = tag_colors("Наука", 0);
/// assert_eq!(first, tag_colors("Наука", 0));
/// assert_ne!(first, tag_colors("Наука", 1));
/// ```
pub fn tag_colors(label: &str, index: usize) -> TagColors {
    TagColors::from_hue(tag_hue(label, index))
}

/// Hue in `0..360` for `(label, index)`.
pub fn tag_hue(label: &str, index: usize) -> u16 {
    let seed = fnv1a_32(&format!("{label}{index}"));
    let r = Mulberry32::new(seed).next_f64();
    (r * 360.0).floor() as u16
}

// ------------------------ Utilities ------------------------

/// Integers print without a fractional part so CSS stays compact.
fn fmt_num(x: f64) -> String {
    let rounded = (x * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

// HSL -> RGB conversion, used for the hex fallback in plain-text output
fn hsl_to_rgb8(hsl: Hsl) -> Rgb8 {
    let h = (hsl.h_deg.rem_euclid(360.0)) / 360.0;
    let s = clamp01(hsl.s);
    let l = clamp01(hsl.l);

    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return Rgb8 { r: v, g: v, b: v };
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

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

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Rgb8 {
        r: (r * 255.0).round() as u8,
        g: (g * 255.0).round() as u8,
        b: (b * 255.0).round() as u8,
    }
}
