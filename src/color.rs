//! CSS colour parsing and WCAG G18 luminance / contrast calculations.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// An opaque sRGB colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Result of parsing a computed CSS colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssColor {
    Opaque(Rgb),
    /// `transparent`, or any colour with a zero alpha channel.
    Transparent,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Relative luminance, 0.0 for black and 1.0 for white.
    pub fn luminance(&self) -> f64 {
        // http://www.w3.org/TR/WCAG20-GENERAL/G18.html
        fn channel(value: u8) -> f64 {
            let a = f64::from(value) / 255.0;
            if a <= 0.03928 {
                a / 12.92
            } else {
                ((a + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    pub fn contrast_ratio(&self, other: &Rgb) -> f64 {
        contrast_ratio(self.luminance(), other.luminance())
    }
}

/// Contrast ratio between two luminance values. Symmetric in its arguments.
pub fn contrast_ratio(lum1: f64, lum2: f64) -> f64 {
    let (bright, dark) = if lum1 > lum2 { (lum1, lum2) } else { (lum2, lum1) };
    (bright + 0.05) / (dark + 0.05)
}

impl CssColor {
    /// Parses a CSS colour: `transparent`, `#rgb`, `#rgba`, `#rrggbb`,
    /// `#rrggbbaa`, `rgb()`, `rgba()` and the named colours. Returns `None`
    /// for anything else (`currentcolor`, `hsl()`, garbage).
    pub fn parse(value: &str) -> Option<CssColor> {
        let value = value.trim().to_ascii_lowercase();

        if value == "transparent" {
            return Some(CssColor::Transparent);
        }
        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex);
        }
        if value.starts_with("rgb") {
            return parse_rgb_function(&value);
        }

        named_color(&value).map(CssColor::Opaque)
    }

    /// The colour to use for a background, where transparency shows the
    /// white page underneath.
    pub fn on_white(self) -> Rgb {
        match self {
            CssColor::Opaque(rgb) => rgb,
            CssColor::Transparent => WHITE,
        }
    }
}

fn parse_hex(hex: &str) -> Option<CssColor> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let digits: Vec<u8> = match hex.len() {
        3 | 4 => hex
            .chars()
            .map(|c| u8::from_str_radix(&format!("{c}{c}"), 16))
            .collect::<Result<_, _>>()
            .ok()?,
        6 | 8 => (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
            .collect::<Result<_, _>>()
            .ok()?,
        _ => return None,
    };

    if digits.len() == 4 && digits[3] == 0 {
        return Some(CssColor::Transparent);
    }
    Some(CssColor::Opaque(Rgb::new(digits[0], digits[1], digits[2])))
}

fn rgb_function_regex() -> Option<&'static Regex> {
    static RGB: OnceLock<Option<Regex>> = OnceLock::new();
    RGB.get_or_init(|| {
        Regex::new(
            r"^rgba?\(\s*([0-9.]+%?)\s*[,\s]\s*([0-9.]+%?)\s*[,\s]\s*([0-9.]+%?)\s*(?:[,/]\s*([0-9.]+%?)\s*)?\)$",
        )
        .ok()
    })
    .as_ref()
}

fn parse_rgb_function(value: &str) -> Option<CssColor> {
    let captures = rgb_function_regex()?.captures(value)?;

    let channel = |index: usize| -> Option<u8> {
        let raw = captures.get(index)?.as_str();
        let number = match raw.strip_suffix('%') {
            Some(percent) => percent.parse::<f64>().ok()? * 255.0 / 100.0,
            None => raw.parse::<f64>().ok()?,
        };
        // Clamped to 0..=255, so the cast cannot truncate.
        Some(number.round().clamp(0.0, 255.0) as u8)
    };

    let rgb = Rgb::new(channel(1)?, channel(2)?, channel(3)?);

    if let Some(alpha) = captures.get(4) {
        let raw = alpha.as_str();
        let alpha = match raw.strip_suffix('%') {
            Some(percent) => percent.parse::<f64>().ok()? / 100.0,
            None => raw.parse::<f64>().ok()?,
        };
        if alpha <= 0.0 {
            return Some(CssColor::Transparent);
        }
    }

    Some(CssColor::Opaque(rgb))
}

fn named_color(name: &str) -> Option<Rgb> {
    let rgb = match name {
        "black" => Rgb::new(0, 0, 0),
        "silver" => Rgb::new(192, 192, 192),
        "gray" | "grey" => Rgb::new(128, 128, 128),
        "white" => Rgb::new(255, 255, 255),
        "maroon" => Rgb::new(128, 0, 0),
        "red" => Rgb::new(255, 0, 0),
        "purple" => Rgb::new(128, 0, 128),
        "fuchsia" | "magenta" => Rgb::new(255, 0, 255),
        "green" => Rgb::new(0, 128, 0),
        "lime" => Rgb::new(0, 255, 0),
        "olive" => Rgb::new(128, 128, 0),
        "yellow" => Rgb::new(255, 255, 0),
        "navy" => Rgb::new(0, 0, 128),
        "blue" => Rgb::new(0, 0, 255),
        "teal" => Rgb::new(0, 128, 128),
        "aqua" | "cyan" => Rgb::new(0, 255, 255),
        "orange" => Rgb::new(255, 165, 0),
        "darkgray" | "darkgrey" => Rgb::new(169, 169, 169),
        "dimgray" | "dimgrey" => Rgb::new(105, 105, 105),
        "lightgray" | "lightgrey" => Rgb::new(211, 211, 211),
        "gainsboro" => Rgb::new(220, 220, 220),
        "whitesmoke" => Rgb::new(245, 245, 245),
        "darkblue" => Rgb::new(0, 0, 139),
        "darkred" => Rgb::new(139, 0, 0),
        "darkgreen" => Rgb::new(0, 100, 0),
        "lightblue" => Rgb::new(173, 216, 230),
        "lightgreen" => Rgb::new(144, 238, 144),
        "lightyellow" => Rgb::new(255, 255, 224),
        "pink" => Rgb::new(255, 192, 203),
        "brown" => Rgb::new(165, 42, 42),
        "gold" => Rgb::new(255, 215, 0),
        "beige" => Rgb::new(245, 245, 220),
        "ivory" => Rgb::new(255, 255, 240),
        "khaki" => Rgb::new(240, 230, 140),
        "coral" => Rgb::new(255, 127, 80),
        "salmon" => Rgb::new(250, 128, 114),
        "tomato" => Rgb::new(255, 99, 71),
        "orangered" => Rgb::new(255, 69, 0),
        "indigo" => Rgb::new(75, 0, 130),
        "violet" => Rgb::new(238, 130, 238),
        "skyblue" => Rgb::new(135, 206, 235),
        "steelblue" => Rgb::new(70, 130, 180),
        "royalblue" => Rgb::new(65, 105, 225),
        "slategray" | "slategrey" => Rgb::new(112, 128, 144),
        "rebeccapurple" => Rgb::new(102, 51, 153),
        _ => return None,
    };
    Some(rgb)
}
