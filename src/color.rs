use crate::error::ColorError;
use once_cell::sync::Lazy;
use palette::{FromColor, Hsl, Lab, Lch, RgbHue, Srgb};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Lab lightness / LCh chroma shift per unit of darken, brighten or saturate.
const ADJUST_STEP: f32 = 18.0;

/// A single sRGB color. Displays and compares as canonical `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hex {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Hex {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#ff8800`, `FF8800` or any mix of case.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 {
            return Err(ColorError::Length {
                input: input.to_string(),
                len: digits.len(),
            });
        }
        let mut rgb = [0u8; 3];
        hex::decode_to_slice(digits, &mut rgb).map_err(|_| ColorError::Digits {
            input: input.to_string(),
        })?;
        Ok(Self::new(rgb[0], rgb[1], rgb[2]))
    }

    /// Uppercase digits without the leading `#`, as shown on a bar.
    pub fn code(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    fn to_srgb(self) -> Srgb<f32> {
        Srgb::new(self.r, self.g, self.b).into_format()
    }

    /// Clamp each channel into [0, 1] before quantizing.
    fn from_srgb_clamped(srgb: Srgb<f32>) -> Self {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(q(srgb.red), q(srgb.green), q(srgb.blue))
    }

    /// HSL hue in degrees, [0, 360).
    pub fn hue(self) -> f32 {
        let hsl: Hsl = Hsl::from_color(self.to_srgb());
        hsl.hue.into_positive_degrees()
    }

    /// Same saturation and lightness, hue replaced (wrapped into [0, 360)).
    pub fn with_hue(self, degrees: f32) -> Self {
        let mut hsl: Hsl = Hsl::from_color(self.to_srgb());
        hsl.hue = RgbHue::from_degrees(degrees.rem_euclid(360.0));
        let rgb: Srgb = Srgb::from_color(hsl);
        Self::from_srgb_clamped(rgb)
    }

    /// Rotate the HSL hue by `degrees`.
    pub fn rotate_hue(self, degrees: f32) -> Self {
        self.with_hue(self.hue() + degrees)
    }

    /// Lower Lab lightness by `amount` steps. Negative amounts brighten.
    pub fn darken(self, amount: f32) -> Self {
        let mut lab: Lab = Lab::from_color(self.to_srgb());
        lab.l = (lab.l - ADJUST_STEP * amount).clamp(0.0, 100.0);
        let rgb: Srgb = Srgb::from_color(lab);
        Self::from_srgb_clamped(rgb)
    }

    pub fn brighten(self, amount: f32) -> Self {
        self.darken(-amount)
    }

    /// Raise LCh chroma by `amount` steps. Negative amounts desaturate.
    pub fn saturate(self, amount: f32) -> Self {
        let mut lch: Lch = Lch::from_color(self.to_srgb());
        lch.chroma = (lch.chroma + ADJUST_STEP * amount).max(0.0);
        let rgb: Srgb = Srgb::from_color(lch);
        Self::from_srgb_clamped(rgb)
    }

    /// WCAG relative luminance in [0, 1].
    pub fn relative_luminance(self) -> f32 {
        fn linearize(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    pub fn is_dark(self) -> bool {
        self.relative_luminance() < 0.5
    }

    /// CSS color keyword for an exact match.
    pub fn name(self) -> Option<&'static str> {
        NAMED.get(&self).copied()
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Hex {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Hex {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Hex> for String {
    fn from(hex: Hex) -> Self {
        hex.to_string()
    }
}

impl From<Hex> for ratatui::style::Color {
    fn from(hex: Hex) -> Self {
        ratatui::style::Color::Rgb(hex.r, hex.g, hex.b)
    }
}

const CSS_NAMES: &[&str] = &[
    "aliceblue",
    "antiquewhite",
    "aqua",
    "aquamarine",
    "azure",
    "beige",
    "bisque",
    "black",
    "blanchedalmond",
    "blue",
    "blueviolet",
    "brown",
    "burlywood",
    "cadetblue",
    "chartreuse",
    "chocolate",
    "coral",
    "cornflowerblue",
    "cornsilk",
    "crimson",
    "cyan",
    "darkblue",
    "darkcyan",
    "darkgoldenrod",
    "darkgray",
    "darkgreen",
    "darkkhaki",
    "darkmagenta",
    "darkolivegreen",
    "darkorange",
    "darkorchid",
    "darkred",
    "darksalmon",
    "darkseagreen",
    "darkslateblue",
    "darkslategray",
    "darkturquoise",
    "darkviolet",
    "deeppink",
    "deepskyblue",
    "dimgray",
    "dodgerblue",
    "firebrick",
    "floralwhite",
    "forestgreen",
    "fuchsia",
    "gainsboro",
    "ghostwhite",
    "gold",
    "goldenrod",
    "gray",
    "green",
    "greenyellow",
    "honeydew",
    "hotpink",
    "indianred",
    "indigo",
    "ivory",
    "khaki",
    "lavender",
    "lavenderblush",
    "lawngreen",
    "lemonchiffon",
    "lightblue",
    "lightcoral",
    "lightcyan",
    "lightgoldenrodyellow",
    "lightgray",
    "lightgreen",
    "lightpink",
    "lightsalmon",
    "lightseagreen",
    "lightskyblue",
    "lightslategray",
    "lightsteelblue",
    "lightyellow",
    "lime",
    "limegreen",
    "linen",
    "magenta",
    "maroon",
    "mediumaquamarine",
    "mediumblue",
    "mediumorchid",
    "mediumpurple",
    "mediumseagreen",
    "mediumslateblue",
    "mediumspringgreen",
    "mediumturquoise",
    "mediumvioletred",
    "midnightblue",
    "mintcream",
    "mistyrose",
    "moccasin",
    "navajowhite",
    "navy",
    "oldlace",
    "olive",
    "olivedrab",
    "orange",
    "orangered",
    "orchid",
    "palegoldenrod",
    "palegreen",
    "paleturquoise",
    "palevioletred",
    "papayawhip",
    "peachpuff",
    "peru",
    "pink",
    "plum",
    "powderblue",
    "purple",
    "red",
    "rosybrown",
    "royalblue",
    "saddlebrown",
    "salmon",
    "sandybrown",
    "seagreen",
    "seashell",
    "sienna",
    "silver",
    "skyblue",
    "slateblue",
    "slategray",
    "snow",
    "springgreen",
    "steelblue",
    "tan",
    "teal",
    "thistle",
    "tomato",
    "turquoise",
    "violet",
    "wheat",
    "white",
    "whitesmoke",
    "yellow",
    "yellowgreen",
];

static NAMED: Lazy<HashMap<Hex, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for name in CSS_NAMES {
        if let Some(c) = palette::named::from_str(name) {
            map.entry(Hex::new(c.red, c.green, c.blue)).or_insert(*name);
        }
    }
    map
});
