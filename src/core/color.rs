use crate::core::constants::FALLBACK_RGB;

/// An 8-bit RGB triple used for fill styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const FALLBACK: Rgb = Rgb {
        r: FALLBACK_RGB.0,
        g: FALLBACK_RGB.1,
        b: FALLBACK_RGB.2,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgba(...)` string with the given alpha.
    pub fn css_rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Parse `#rrggbb` / `rrggbb` (any case). Anything else yields [`Rgb::FALLBACK`].
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or(Rgb::FALLBACK)
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}
