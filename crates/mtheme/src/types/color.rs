//! RGBA color type with parsing and blending.
//!
//! ## Supported Color Formats
//!
//! - **Hex**: `#RGB`, `#RRGGBB`, `#RRRGGGBBB`, `#RRRRGGGGBBBB`
//! - **Named**: the X11 color names (`red`, `dark slate gray`, `gray50`),
//!   matched case-insensitively with spaces ignored

use std::fmt;

use phf::phf_map;

/// Error returned when color parsing fails.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorParseError {
    pub message: String,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ColorParseError {}

/// An RGBA color.
///
/// # Examples
///
/// ```
/// use mtheme::types::RgbaColor;
///
/// let red = RgbaColor::parse("#ff0000").unwrap();
/// assert_eq!(red, RgbaColor::rgb(255, 0, 0));
/// assert_eq!(RgbaColor::parse("navy").unwrap(), RgbaColor::rgb(0, 0, 128));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha component (0.0 = transparent, 1.0 = opaque).
    pub a: f32,
}

impl Default for RgbaColor {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl RgbaColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0.0)
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self { a: alpha, ..*self }
    }

    /// Perceived brightness in 0.0..=1.0.
    pub fn intensity(&self) -> f32 {
        (0.30 * self.r as f32 + 0.59 * self.g as f32 + 0.11 * self.b as f32) / 255.0
    }

    /// `self + (other - self) * t` per channel, alpha included.
    pub fn lerp(&self, other: &RgbaColor, t: f64) -> RgbaColor {
        let mix = |a: u8, b: u8| -> u8 {
            let v = a as f64 + (b as f64 - a as f64) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        RgbaColor {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: (self.a as f64 + (other.a as f64 - self.a as f64) * t) as f32,
        }
    }

    /// Alpha-composite `self` over `background` with an extra opacity.
    pub fn over(&self, background: &RgbaColor, alpha: f64) -> RgbaColor {
        let src_a = (self.a as f64 * alpha).clamp(0.0, 1.0);
        let dst_a = background.a as f64;
        let out_a = src_a + dst_a * (1.0 - src_a);
        if out_a <= 0.0 {
            return RgbaColor::transparent();
        }
        let mix = |s: u8, d: u8| -> u8 {
            let v = (s as f64 * src_a + d as f64 * dst_a * (1.0 - src_a)) / out_a;
            v.round().clamp(0.0, 255.0) as u8
        };
        RgbaColor {
            r: mix(self.r, background.r),
            g: mix(self.g, background.g),
            b: mix(self.b, background.b),
            a: out_a as f32,
        }
    }

    /// Parse a literal color string.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ColorParseError {
                message: "empty color string".to_string(),
            });
        }

        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        let lower = input.to_ascii_lowercase().replace(' ', "");
        NAMED_COLORS
            .get(lower.as_str())
            .copied()
            .ok_or_else(|| ColorParseError {
                message: format!("unknown color name: {input}"),
            })
    }

    /// `#rgb` with 1 to 4 hex digits per channel, scaled to 8 bits.
    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let len = hex.len();
        if len == 0 || len % 3 != 0 || len > 12 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError {
                message: format!("invalid hex color: #{hex}"),
            });
        }

        let digits = len / 3;
        let max = (1u32 << (4 * digits)) - 1;
        let channel = |i: usize| -> Result<u8, ColorParseError> {
            let part = &hex[i * digits..(i + 1) * digits];
            let value = u32::from_str_radix(part, 16).map_err(|_| ColorParseError {
                message: format!("invalid hex color: #{hex}"),
            })?;
            Ok(((value * 255 + max / 2) / max) as u8)
        };
        Ok(Self::rgb(channel(0)?, channel(1)?, channel(2)?))
    }
}

impl fmt::Display for RgbaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}@{:.2}", self.r, self.g, self.b, self.a)
        }
    }
}

/// X11 `rgb.txt`, keyed by lowercase name with spaces removed.
static NAMED_COLORS: phf::Map<&'static str, RgbaColor> = phf_map! {
    "snow" => RgbaColor::rgb(255, 250, 250),
    "ghostwhite" => RgbaColor::rgb(248, 248, 255),
    "whitesmoke" => RgbaColor::rgb(245, 245, 245),
    "gainsboro" => RgbaColor::rgb(220, 220, 220),
    "floralwhite" => RgbaColor::rgb(255, 250, 240),
    "oldlace" => RgbaColor::rgb(253, 245, 230),
    "linen" => RgbaColor::rgb(250, 240, 230),
    "antiquewhite" => RgbaColor::rgb(250, 235, 215),
    "papayawhip" => RgbaColor::rgb(255, 239, 213),
    "blanchedalmond" => RgbaColor::rgb(255, 235, 205),
    "bisque" => RgbaColor::rgb(255, 228, 196),
    "peachpuff" => RgbaColor::rgb(255, 218, 185),
    "navajowhite" => RgbaColor::rgb(255, 222, 173),
    "moccasin" => RgbaColor::rgb(255, 228, 181),
    "cornsilk" => RgbaColor::rgb(255, 248, 220),
    "ivory" => RgbaColor::rgb(255, 255, 240),
    "lemonchiffon" => RgbaColor::rgb(255, 250, 205),
    "seashell" => RgbaColor::rgb(255, 245, 238),
    "honeydew" => RgbaColor::rgb(240, 255, 240),
    "mintcream" => RgbaColor::rgb(245, 255, 250),
    "azure" => RgbaColor::rgb(240, 255, 255),
    "aliceblue" => RgbaColor::rgb(240, 248, 255),
    "lavender" => RgbaColor::rgb(230, 230, 250),
    "lavenderblush" => RgbaColor::rgb(255, 240, 245),
    "mistyrose" => RgbaColor::rgb(255, 228, 225),
    "white" => RgbaColor::rgb(255, 255, 255),
    "black" => RgbaColor::rgb(0, 0, 0),
    "darkslategray" => RgbaColor::rgb(47, 79, 79),
    "darkslategrey" => RgbaColor::rgb(47, 79, 79),
    "dimgray" => RgbaColor::rgb(105, 105, 105),
    "dimgrey" => RgbaColor::rgb(105, 105, 105),
    "slategray" => RgbaColor::rgb(112, 128, 144),
    "slategrey" => RgbaColor::rgb(112, 128, 144),
    "lightslategray" => RgbaColor::rgb(119, 136, 153),
    "lightslategrey" => RgbaColor::rgb(119, 136, 153),
    "gray" => RgbaColor::rgb(190, 190, 190),
    "grey" => RgbaColor::rgb(190, 190, 190),
    "lightgrey" => RgbaColor::rgb(211, 211, 211),
    "lightgray" => RgbaColor::rgb(211, 211, 211),
    "midnightblue" => RgbaColor::rgb(25, 25, 112),
    "navy" => RgbaColor::rgb(0, 0, 128),
    "navyblue" => RgbaColor::rgb(0, 0, 128),
    "cornflowerblue" => RgbaColor::rgb(100, 149, 237),
    "darkslateblue" => RgbaColor::rgb(72, 61, 139),
    "slateblue" => RgbaColor::rgb(106, 90, 205),
    "mediumslateblue" => RgbaColor::rgb(123, 104, 238),
    "lightslateblue" => RgbaColor::rgb(132, 112, 255),
    "mediumblue" => RgbaColor::rgb(0, 0, 205),
    "royalblue" => RgbaColor::rgb(65, 105, 225),
    "blue" => RgbaColor::rgb(0, 0, 255),
    "dodgerblue" => RgbaColor::rgb(30, 144, 255),
    "deepskyblue" => RgbaColor::rgb(0, 191, 255),
    "skyblue" => RgbaColor::rgb(135, 206, 235),
    "lightskyblue" => RgbaColor::rgb(135, 206, 250),
    "steelblue" => RgbaColor::rgb(70, 130, 180),
    "lightsteelblue" => RgbaColor::rgb(176, 196, 222),
    "lightblue" => RgbaColor::rgb(173, 216, 230),
    "powderblue" => RgbaColor::rgb(176, 224, 230),
    "paleturquoise" => RgbaColor::rgb(175, 238, 238),
    "darkturquoise" => RgbaColor::rgb(0, 206, 209),
    "mediumturquoise" => RgbaColor::rgb(72, 209, 204),
    "turquoise" => RgbaColor::rgb(64, 224, 208),
    "cyan" => RgbaColor::rgb(0, 255, 255),
    "lightcyan" => RgbaColor::rgb(224, 255, 255),
    "cadetblue" => RgbaColor::rgb(95, 158, 160),
    "mediumaquamarine" => RgbaColor::rgb(102, 205, 170),
    "aquamarine" => RgbaColor::rgb(127, 255, 212),
    "darkgreen" => RgbaColor::rgb(0, 100, 0),
    "darkolivegreen" => RgbaColor::rgb(85, 107, 47),
    "darkseagreen" => RgbaColor::rgb(143, 188, 143),
    "seagreen" => RgbaColor::rgb(46, 139, 87),
    "mediumseagreen" => RgbaColor::rgb(60, 179, 113),
    "lightseagreen" => RgbaColor::rgb(32, 178, 170),
    "palegreen" => RgbaColor::rgb(152, 251, 152),
    "springgreen" => RgbaColor::rgb(0, 255, 127),
    "lawngreen" => RgbaColor::rgb(124, 252, 0),
    "green" => RgbaColor::rgb(0, 255, 0),
    "chartreuse" => RgbaColor::rgb(127, 255, 0),
    "mediumspringgreen" => RgbaColor::rgb(0, 250, 154),
    "greenyellow" => RgbaColor::rgb(173, 255, 47),
    "limegreen" => RgbaColor::rgb(50, 205, 50),
    "yellowgreen" => RgbaColor::rgb(154, 205, 50),
    "forestgreen" => RgbaColor::rgb(34, 139, 34),
    "olivedrab" => RgbaColor::rgb(107, 142, 35),
    "darkkhaki" => RgbaColor::rgb(189, 183, 107),
    "khaki" => RgbaColor::rgb(240, 230, 140),
    "palegoldenrod" => RgbaColor::rgb(238, 232, 170),
    "lightgoldenrodyellow" => RgbaColor::rgb(250, 250, 210),
    "lightyellow" => RgbaColor::rgb(255, 255, 224),
    "yellow" => RgbaColor::rgb(255, 255, 0),
    "gold" => RgbaColor::rgb(255, 215, 0),
    "lightgoldenrod" => RgbaColor::rgb(238, 221, 130),
    "goldenrod" => RgbaColor::rgb(218, 165, 32),
    "darkgoldenrod" => RgbaColor::rgb(184, 134, 11),
    "rosybrown" => RgbaColor::rgb(188, 143, 143),
    "indianred" => RgbaColor::rgb(205, 92, 92),
    "saddlebrown" => RgbaColor::rgb(139, 69, 19),
    "sienna" => RgbaColor::rgb(160, 82, 45),
    "peru" => RgbaColor::rgb(205, 133, 63),
    "burlywood" => RgbaColor::rgb(222, 184, 135),
    "beige" => RgbaColor::rgb(245, 245, 220),
    "wheat" => RgbaColor::rgb(245, 222, 179),
    "sandybrown" => RgbaColor::rgb(244, 164, 96),
    "tan" => RgbaColor::rgb(210, 180, 140),
    "chocolate" => RgbaColor::rgb(210, 105, 30),
    "firebrick" => RgbaColor::rgb(178, 34, 34),
    "brown" => RgbaColor::rgb(165, 42, 42),
    "darksalmon" => RgbaColor::rgb(233, 150, 122),
    "salmon" => RgbaColor::rgb(250, 128, 114),
    "lightsalmon" => RgbaColor::rgb(255, 160, 122),
    "orange" => RgbaColor::rgb(255, 165, 0),
    "darkorange" => RgbaColor::rgb(255, 140, 0),
    "coral" => RgbaColor::rgb(255, 127, 80),
    "lightcoral" => RgbaColor::rgb(240, 128, 128),
    "tomato" => RgbaColor::rgb(255, 99, 71),
    "orangered" => RgbaColor::rgb(255, 69, 0),
    "red" => RgbaColor::rgb(255, 0, 0),
    "hotpink" => RgbaColor::rgb(255, 105, 180),
    "deeppink" => RgbaColor::rgb(255, 20, 147),
    "pink" => RgbaColor::rgb(255, 192, 203),
    "lightpink" => RgbaColor::rgb(255, 182, 193),
    "palevioletred" => RgbaColor::rgb(219, 112, 147),
    "maroon" => RgbaColor::rgb(176, 48, 96),
    "mediumvioletred" => RgbaColor::rgb(199, 21, 133),
    "violetred" => RgbaColor::rgb(208, 32, 144),
    "magenta" => RgbaColor::rgb(255, 0, 255),
    "violet" => RgbaColor::rgb(238, 130, 238),
    "plum" => RgbaColor::rgb(221, 160, 221),
    "orchid" => RgbaColor::rgb(218, 112, 214),
    "mediumorchid" => RgbaColor::rgb(186, 85, 211),
    "darkorchid" => RgbaColor::rgb(153, 50, 204),
    "darkviolet" => RgbaColor::rgb(148, 0, 211),
    "blueviolet" => RgbaColor::rgb(138, 43, 226),
    "purple" => RgbaColor::rgb(160, 32, 240),
    "mediumpurple" => RgbaColor::rgb(147, 112, 219),
    "thistle" => RgbaColor::rgb(216, 191, 216),
    "snow1" => RgbaColor::rgb(255, 250, 250),
    "snow2" => RgbaColor::rgb(238, 233, 233),
    "snow3" => RgbaColor::rgb(205, 201, 201),
    "snow4" => RgbaColor::rgb(139, 137, 137),
    "seashell1" => RgbaColor::rgb(255, 245, 238),
    "seashell2" => RgbaColor::rgb(238, 229, 222),
    "seashell3" => RgbaColor::rgb(205, 197, 191),
    "seashell4" => RgbaColor::rgb(139, 134, 130),
    "antiquewhite1" => RgbaColor::rgb(255, 239, 219),
    "antiquewhite2" => RgbaColor::rgb(238, 223, 204),
    "antiquewhite3" => RgbaColor::rgb(205, 192, 176),
    "antiquewhite4" => RgbaColor::rgb(139, 131, 120),
    "bisque1" => RgbaColor::rgb(255, 228, 196),
    "bisque2" => RgbaColor::rgb(238, 213, 183),
    "bisque3" => RgbaColor::rgb(205, 183, 158),
    "bisque4" => RgbaColor::rgb(139, 125, 107),
    "peachpuff1" => RgbaColor::rgb(255, 218, 185),
    "peachpuff2" => RgbaColor::rgb(238, 203, 173),
    "peachpuff3" => RgbaColor::rgb(205, 175, 149),
    "peachpuff4" => RgbaColor::rgb(139, 119, 101),
    "navajowhite1" => RgbaColor::rgb(255, 222, 173),
    "navajowhite2" => RgbaColor::rgb(238, 207, 161),
    "navajowhite3" => RgbaColor::rgb(205, 179, 139),
    "navajowhite4" => RgbaColor::rgb(139, 121, 94),
    "lemonchiffon1" => RgbaColor::rgb(255, 250, 205),
    "lemonchiffon2" => RgbaColor::rgb(238, 233, 191),
    "lemonchiffon3" => RgbaColor::rgb(205, 201, 165),
    "lemonchiffon4" => RgbaColor::rgb(139, 137, 112),
    "cornsilk1" => RgbaColor::rgb(255, 248, 220),
    "cornsilk2" => RgbaColor::rgb(238, 232, 205),
    "cornsilk3" => RgbaColor::rgb(205, 200, 177),
    "cornsilk4" => RgbaColor::rgb(139, 136, 120),
    "ivory1" => RgbaColor::rgb(255, 255, 240),
    "ivory2" => RgbaColor::rgb(238, 238, 224),
    "ivory3" => RgbaColor::rgb(205, 205, 193),
    "ivory4" => RgbaColor::rgb(139, 139, 131),
    "honeydew1" => RgbaColor::rgb(240, 255, 240),
    "honeydew2" => RgbaColor::rgb(224, 238, 224),
    "honeydew3" => RgbaColor::rgb(193, 205, 193),
    "honeydew4" => RgbaColor::rgb(131, 139, 131),
    "lavenderblush1" => RgbaColor::rgb(255, 240, 245),
    "lavenderblush2" => RgbaColor::rgb(238, 224, 229),
    "lavenderblush3" => RgbaColor::rgb(205, 193, 197),
    "lavenderblush4" => RgbaColor::rgb(139, 131, 134),
    "mistyrose1" => RgbaColor::rgb(255, 228, 225),
    "mistyrose2" => RgbaColor::rgb(238, 213, 210),
    "mistyrose3" => RgbaColor::rgb(205, 183, 181),
    "mistyrose4" => RgbaColor::rgb(139, 125, 123),
    "azure1" => RgbaColor::rgb(240, 255, 255),
    "azure2" => RgbaColor::rgb(224, 238, 238),
    "azure3" => RgbaColor::rgb(193, 205, 205),
    "azure4" => RgbaColor::rgb(131, 139, 139),
    "slateblue1" => RgbaColor::rgb(131, 111, 255),
    "slateblue2" => RgbaColor::rgb(122, 103, 238),
    "slateblue3" => RgbaColor::rgb(105, 89, 205),
    "slateblue4" => RgbaColor::rgb(71, 60, 139),
    "royalblue1" => RgbaColor::rgb(72, 118, 255),
    "royalblue2" => RgbaColor::rgb(67, 110, 238),
    "royalblue3" => RgbaColor::rgb(58, 95, 205),
    "royalblue4" => RgbaColor::rgb(39, 64, 139),
    "blue1" => RgbaColor::rgb(0, 0, 255),
    "blue2" => RgbaColor::rgb(0, 0, 238),
    "blue3" => RgbaColor::rgb(0, 0, 205),
    "blue4" => RgbaColor::rgb(0, 0, 139),
    "dodgerblue1" => RgbaColor::rgb(30, 144, 255),
    "dodgerblue2" => RgbaColor::rgb(28, 134, 238),
    "dodgerblue3" => RgbaColor::rgb(24, 116, 205),
    "dodgerblue4" => RgbaColor::rgb(16, 78, 139),
    "steelblue1" => RgbaColor::rgb(99, 184, 255),
    "steelblue2" => RgbaColor::rgb(92, 172, 238),
    "steelblue3" => RgbaColor::rgb(79, 148, 205),
    "steelblue4" => RgbaColor::rgb(54, 100, 139),
    "deepskyblue1" => RgbaColor::rgb(0, 191, 255),
    "deepskyblue2" => RgbaColor::rgb(0, 178, 238),
    "deepskyblue3" => RgbaColor::rgb(0, 154, 205),
    "deepskyblue4" => RgbaColor::rgb(0, 104, 139),
    "skyblue1" => RgbaColor::rgb(135, 206, 255),
    "skyblue2" => RgbaColor::rgb(126, 192, 238),
    "skyblue3" => RgbaColor::rgb(108, 166, 205),
    "skyblue4" => RgbaColor::rgb(74, 112, 139),
    "lightskyblue1" => RgbaColor::rgb(176, 226, 255),
    "lightskyblue2" => RgbaColor::rgb(164, 211, 238),
    "lightskyblue3" => RgbaColor::rgb(141, 182, 205),
    "lightskyblue4" => RgbaColor::rgb(96, 123, 139),
    "slategray1" => RgbaColor::rgb(198, 226, 255),
    "slategray2" => RgbaColor::rgb(185, 211, 238),
    "slategray3" => RgbaColor::rgb(159, 182, 205),
    "slategray4" => RgbaColor::rgb(108, 123, 139),
    "lightsteelblue1" => RgbaColor::rgb(202, 225, 255),
    "lightsteelblue2" => RgbaColor::rgb(188, 210, 238),
    "lightsteelblue3" => RgbaColor::rgb(162, 181, 205),
    "lightsteelblue4" => RgbaColor::rgb(110, 123, 139),
    "lightblue1" => RgbaColor::rgb(191, 239, 255),
    "lightblue2" => RgbaColor::rgb(178, 223, 238),
    "lightblue3" => RgbaColor::rgb(154, 192, 205),
    "lightblue4" => RgbaColor::rgb(104, 131, 139),
    "lightcyan1" => RgbaColor::rgb(224, 255, 255),
    "lightcyan2" => RgbaColor::rgb(209, 238, 238),
    "lightcyan3" => RgbaColor::rgb(180, 205, 205),
    "lightcyan4" => RgbaColor::rgb(122, 139, 139),
    "paleturquoise1" => RgbaColor::rgb(187, 255, 255),
    "paleturquoise2" => RgbaColor::rgb(174, 238, 238),
    "paleturquoise3" => RgbaColor::rgb(150, 205, 205),
    "paleturquoise4" => RgbaColor::rgb(102, 139, 139),
    "cadetblue1" => RgbaColor::rgb(152, 245, 255),
    "cadetblue2" => RgbaColor::rgb(142, 229, 238),
    "cadetblue3" => RgbaColor::rgb(122, 197, 205),
    "cadetblue4" => RgbaColor::rgb(83, 134, 139),
    "turquoise1" => RgbaColor::rgb(0, 245, 255),
    "turquoise2" => RgbaColor::rgb(0, 229, 238),
    "turquoise3" => RgbaColor::rgb(0, 197, 205),
    "turquoise4" => RgbaColor::rgb(0, 134, 139),
    "cyan1" => RgbaColor::rgb(0, 255, 255),
    "cyan2" => RgbaColor::rgb(0, 238, 238),
    "cyan3" => RgbaColor::rgb(0, 205, 205),
    "cyan4" => RgbaColor::rgb(0, 139, 139),
    "darkslategray1" => RgbaColor::rgb(151, 255, 255),
    "darkslategray2" => RgbaColor::rgb(141, 238, 238),
    "darkslategray3" => RgbaColor::rgb(121, 205, 205),
    "darkslategray4" => RgbaColor::rgb(82, 139, 139),
    "aquamarine1" => RgbaColor::rgb(127, 255, 212),
    "aquamarine2" => RgbaColor::rgb(118, 238, 198),
    "aquamarine3" => RgbaColor::rgb(102, 205, 170),
    "aquamarine4" => RgbaColor::rgb(69, 139, 116),
    "darkseagreen1" => RgbaColor::rgb(193, 255, 193),
    "darkseagreen2" => RgbaColor::rgb(180, 238, 180),
    "darkseagreen3" => RgbaColor::rgb(155, 205, 155),
    "darkseagreen4" => RgbaColor::rgb(105, 139, 105),
    "seagreen1" => RgbaColor::rgb(84, 255, 159),
    "seagreen2" => RgbaColor::rgb(78, 238, 148),
    "seagreen3" => RgbaColor::rgb(67, 205, 128),
    "seagreen4" => RgbaColor::rgb(46, 139, 87),
    "palegreen1" => RgbaColor::rgb(154, 255, 154),
    "palegreen2" => RgbaColor::rgb(144, 238, 144),
    "palegreen3" => RgbaColor::rgb(124, 205, 124),
    "palegreen4" => RgbaColor::rgb(84, 139, 84),
    "springgreen1" => RgbaColor::rgb(0, 255, 127),
    "springgreen2" => RgbaColor::rgb(0, 238, 118),
    "springgreen3" => RgbaColor::rgb(0, 205, 102),
    "springgreen4" => RgbaColor::rgb(0, 139, 69),
    "green1" => RgbaColor::rgb(0, 255, 0),
    "green2" => RgbaColor::rgb(0, 238, 0),
    "green3" => RgbaColor::rgb(0, 205, 0),
    "green4" => RgbaColor::rgb(0, 139, 0),
    "chartreuse1" => RgbaColor::rgb(127, 255, 0),
    "chartreuse2" => RgbaColor::rgb(118, 238, 0),
    "chartreuse3" => RgbaColor::rgb(102, 205, 0),
    "chartreuse4" => RgbaColor::rgb(69, 139, 0),
    "olivedrab1" => RgbaColor::rgb(192, 255, 62),
    "olivedrab2" => RgbaColor::rgb(179, 238, 58),
    "olivedrab3" => RgbaColor::rgb(154, 205, 50),
    "olivedrab4" => RgbaColor::rgb(105, 139, 34),
    "darkolivegreen1" => RgbaColor::rgb(202, 255, 112),
    "darkolivegreen2" => RgbaColor::rgb(188, 238, 104),
    "darkolivegreen3" => RgbaColor::rgb(162, 205, 90),
    "darkolivegreen4" => RgbaColor::rgb(110, 139, 61),
    "khaki1" => RgbaColor::rgb(255, 246, 143),
    "khaki2" => RgbaColor::rgb(238, 230, 133),
    "khaki3" => RgbaColor::rgb(205, 198, 115),
    "khaki4" => RgbaColor::rgb(139, 134, 78),
    "lightgoldenrod1" => RgbaColor::rgb(255, 236, 139),
    "lightgoldenrod2" => RgbaColor::rgb(238, 220, 130),
    "lightgoldenrod3" => RgbaColor::rgb(205, 190, 112),
    "lightgoldenrod4" => RgbaColor::rgb(139, 129, 76),
    "lightyellow1" => RgbaColor::rgb(255, 255, 224),
    "lightyellow2" => RgbaColor::rgb(238, 238, 209),
    "lightyellow3" => RgbaColor::rgb(205, 205, 180),
    "lightyellow4" => RgbaColor::rgb(139, 139, 122),
    "yellow1" => RgbaColor::rgb(255, 255, 0),
    "yellow2" => RgbaColor::rgb(238, 238, 0),
    "yellow3" => RgbaColor::rgb(205, 205, 0),
    "yellow4" => RgbaColor::rgb(139, 139, 0),
    "gold1" => RgbaColor::rgb(255, 215, 0),
    "gold2" => RgbaColor::rgb(238, 201, 0),
    "gold3" => RgbaColor::rgb(205, 173, 0),
    "gold4" => RgbaColor::rgb(139, 117, 0),
    "goldenrod1" => RgbaColor::rgb(255, 193, 37),
    "goldenrod2" => RgbaColor::rgb(238, 180, 34),
    "goldenrod3" => RgbaColor::rgb(205, 155, 29),
    "goldenrod4" => RgbaColor::rgb(139, 105, 20),
    "darkgoldenrod1" => RgbaColor::rgb(255, 185, 15),
    "darkgoldenrod2" => RgbaColor::rgb(238, 173, 14),
    "darkgoldenrod3" => RgbaColor::rgb(205, 149, 12),
    "darkgoldenrod4" => RgbaColor::rgb(139, 101, 8),
    "rosybrown1" => RgbaColor::rgb(255, 193, 193),
    "rosybrown2" => RgbaColor::rgb(238, 180, 180),
    "rosybrown3" => RgbaColor::rgb(205, 155, 155),
    "rosybrown4" => RgbaColor::rgb(139, 105, 105),
    "indianred1" => RgbaColor::rgb(255, 106, 106),
    "indianred2" => RgbaColor::rgb(238, 99, 99),
    "indianred3" => RgbaColor::rgb(205, 85, 85),
    "indianred4" => RgbaColor::rgb(139, 58, 58),
    "sienna1" => RgbaColor::rgb(255, 130, 71),
    "sienna2" => RgbaColor::rgb(238, 121, 66),
    "sienna3" => RgbaColor::rgb(205, 104, 57),
    "sienna4" => RgbaColor::rgb(139, 71, 38),
    "burlywood1" => RgbaColor::rgb(255, 211, 155),
    "burlywood2" => RgbaColor::rgb(238, 197, 145),
    "burlywood3" => RgbaColor::rgb(205, 170, 125),
    "burlywood4" => RgbaColor::rgb(139, 115, 85),
    "wheat1" => RgbaColor::rgb(255, 231, 186),
    "wheat2" => RgbaColor::rgb(238, 216, 174),
    "wheat3" => RgbaColor::rgb(205, 186, 150),
    "wheat4" => RgbaColor::rgb(139, 126, 102),
    "tan1" => RgbaColor::rgb(255, 165, 79),
    "tan2" => RgbaColor::rgb(238, 154, 73),
    "tan3" => RgbaColor::rgb(205, 133, 63),
    "tan4" => RgbaColor::rgb(139, 90, 43),
    "chocolate1" => RgbaColor::rgb(255, 127, 36),
    "chocolate2" => RgbaColor::rgb(238, 118, 33),
    "chocolate3" => RgbaColor::rgb(205, 102, 29),
    "chocolate4" => RgbaColor::rgb(139, 69, 19),
    "firebrick1" => RgbaColor::rgb(255, 48, 48),
    "firebrick2" => RgbaColor::rgb(238, 44, 44),
    "firebrick3" => RgbaColor::rgb(205, 38, 38),
    "firebrick4" => RgbaColor::rgb(139, 26, 26),
    "brown1" => RgbaColor::rgb(255, 64, 64),
    "brown2" => RgbaColor::rgb(238, 59, 59),
    "brown3" => RgbaColor::rgb(205, 51, 51),
    "brown4" => RgbaColor::rgb(139, 35, 35),
    "salmon1" => RgbaColor::rgb(255, 140, 105),
    "salmon2" => RgbaColor::rgb(238, 130, 98),
    "salmon3" => RgbaColor::rgb(205, 112, 84),
    "salmon4" => RgbaColor::rgb(139, 76, 57),
    "lightsalmon1" => RgbaColor::rgb(255, 160, 122),
    "lightsalmon2" => RgbaColor::rgb(238, 149, 114),
    "lightsalmon3" => RgbaColor::rgb(205, 129, 98),
    "lightsalmon4" => RgbaColor::rgb(139, 87, 66),
    "orange1" => RgbaColor::rgb(255, 165, 0),
    "orange2" => RgbaColor::rgb(238, 154, 0),
    "orange3" => RgbaColor::rgb(205, 133, 0),
    "orange4" => RgbaColor::rgb(139, 90, 0),
    "darkorange1" => RgbaColor::rgb(255, 127, 0),
    "darkorange2" => RgbaColor::rgb(238, 118, 0),
    "darkorange3" => RgbaColor::rgb(205, 102, 0),
    "darkorange4" => RgbaColor::rgb(139, 69, 0),
    "coral1" => RgbaColor::rgb(255, 114, 86),
    "coral2" => RgbaColor::rgb(238, 106, 80),
    "coral3" => RgbaColor::rgb(205, 91, 69),
    "coral4" => RgbaColor::rgb(139, 62, 47),
    "tomato1" => RgbaColor::rgb(255, 99, 71),
    "tomato2" => RgbaColor::rgb(238, 92, 66),
    "tomato3" => RgbaColor::rgb(205, 79, 57),
    "tomato4" => RgbaColor::rgb(139, 54, 38),
    "orangered1" => RgbaColor::rgb(255, 69, 0),
    "orangered2" => RgbaColor::rgb(238, 64, 0),
    "orangered3" => RgbaColor::rgb(205, 55, 0),
    "orangered4" => RgbaColor::rgb(139, 37, 0),
    "red1" => RgbaColor::rgb(255, 0, 0),
    "red2" => RgbaColor::rgb(238, 0, 0),
    "red3" => RgbaColor::rgb(205, 0, 0),
    "red4" => RgbaColor::rgb(139, 0, 0),
    "debianred" => RgbaColor::rgb(215, 7, 81),
    "deeppink1" => RgbaColor::rgb(255, 20, 147),
    "deeppink2" => RgbaColor::rgb(238, 18, 137),
    "deeppink3" => RgbaColor::rgb(205, 16, 118),
    "deeppink4" => RgbaColor::rgb(139, 10, 80),
    "hotpink1" => RgbaColor::rgb(255, 110, 180),
    "hotpink2" => RgbaColor::rgb(238, 106, 167),
    "hotpink3" => RgbaColor::rgb(205, 96, 144),
    "hotpink4" => RgbaColor::rgb(139, 58, 98),
    "pink1" => RgbaColor::rgb(255, 181, 197),
    "pink2" => RgbaColor::rgb(238, 169, 184),
    "pink3" => RgbaColor::rgb(205, 145, 158),
    "pink4" => RgbaColor::rgb(139, 99, 108),
    "lightpink1" => RgbaColor::rgb(255, 174, 185),
    "lightpink2" => RgbaColor::rgb(238, 162, 173),
    "lightpink3" => RgbaColor::rgb(205, 140, 149),
    "lightpink4" => RgbaColor::rgb(139, 95, 101),
    "palevioletred1" => RgbaColor::rgb(255, 130, 171),
    "palevioletred2" => RgbaColor::rgb(238, 121, 159),
    "palevioletred3" => RgbaColor::rgb(205, 104, 137),
    "palevioletred4" => RgbaColor::rgb(139, 71, 93),
    "maroon1" => RgbaColor::rgb(255, 52, 179),
    "maroon2" => RgbaColor::rgb(238, 48, 167),
    "maroon3" => RgbaColor::rgb(205, 41, 144),
    "maroon4" => RgbaColor::rgb(139, 28, 98),
    "violetred1" => RgbaColor::rgb(255, 62, 150),
    "violetred2" => RgbaColor::rgb(238, 58, 140),
    "violetred3" => RgbaColor::rgb(205, 50, 120),
    "violetred4" => RgbaColor::rgb(139, 34, 82),
    "magenta1" => RgbaColor::rgb(255, 0, 255),
    "magenta2" => RgbaColor::rgb(238, 0, 238),
    "magenta3" => RgbaColor::rgb(205, 0, 205),
    "magenta4" => RgbaColor::rgb(139, 0, 139),
    "orchid1" => RgbaColor::rgb(255, 131, 250),
    "orchid2" => RgbaColor::rgb(238, 122, 233),
    "orchid3" => RgbaColor::rgb(205, 105, 201),
    "orchid4" => RgbaColor::rgb(139, 71, 137),
    "plum1" => RgbaColor::rgb(255, 187, 255),
    "plum2" => RgbaColor::rgb(238, 174, 238),
    "plum3" => RgbaColor::rgb(205, 150, 205),
    "plum4" => RgbaColor::rgb(139, 102, 139),
    "mediumorchid1" => RgbaColor::rgb(224, 102, 255),
    "mediumorchid2" => RgbaColor::rgb(209, 95, 238),
    "mediumorchid3" => RgbaColor::rgb(180, 82, 205),
    "mediumorchid4" => RgbaColor::rgb(122, 55, 139),
    "darkorchid1" => RgbaColor::rgb(191, 62, 255),
    "darkorchid2" => RgbaColor::rgb(178, 58, 238),
    "darkorchid3" => RgbaColor::rgb(154, 50, 205),
    "darkorchid4" => RgbaColor::rgb(104, 34, 139),
    "purple1" => RgbaColor::rgb(155, 48, 255),
    "purple2" => RgbaColor::rgb(145, 44, 238),
    "purple3" => RgbaColor::rgb(125, 38, 205),
    "purple4" => RgbaColor::rgb(85, 26, 139),
    "mediumpurple1" => RgbaColor::rgb(171, 130, 255),
    "mediumpurple2" => RgbaColor::rgb(159, 121, 238),
    "mediumpurple3" => RgbaColor::rgb(137, 104, 205),
    "mediumpurple4" => RgbaColor::rgb(93, 71, 139),
    "thistle1" => RgbaColor::rgb(255, 225, 255),
    "thistle2" => RgbaColor::rgb(238, 210, 238),
    "thistle3" => RgbaColor::rgb(205, 181, 205),
    "thistle4" => RgbaColor::rgb(139, 123, 139),
    "gray0" => RgbaColor::rgb(0, 0, 0),
    "grey0" => RgbaColor::rgb(0, 0, 0),
    "gray1" => RgbaColor::rgb(3, 3, 3),
    "grey1" => RgbaColor::rgb(3, 3, 3),
    "gray2" => RgbaColor::rgb(5, 5, 5),
    "grey2" => RgbaColor::rgb(5, 5, 5),
    "gray3" => RgbaColor::rgb(8, 8, 8),
    "grey3" => RgbaColor::rgb(8, 8, 8),
    "gray4" => RgbaColor::rgb(10, 10, 10),
    "grey4" => RgbaColor::rgb(10, 10, 10),
    "gray5" => RgbaColor::rgb(13, 13, 13),
    "grey5" => RgbaColor::rgb(13, 13, 13),
    "gray6" => RgbaColor::rgb(15, 15, 15),
    "grey6" => RgbaColor::rgb(15, 15, 15),
    "gray7" => RgbaColor::rgb(18, 18, 18),
    "grey7" => RgbaColor::rgb(18, 18, 18),
    "gray8" => RgbaColor::rgb(20, 20, 20),
    "grey8" => RgbaColor::rgb(20, 20, 20),
    "gray9" => RgbaColor::rgb(23, 23, 23),
    "grey9" => RgbaColor::rgb(23, 23, 23),
    "gray10" => RgbaColor::rgb(26, 26, 26),
    "grey10" => RgbaColor::rgb(26, 26, 26),
    "gray11" => RgbaColor::rgb(28, 28, 28),
    "grey11" => RgbaColor::rgb(28, 28, 28),
    "gray12" => RgbaColor::rgb(31, 31, 31),
    "grey12" => RgbaColor::rgb(31, 31, 31),
    "gray13" => RgbaColor::rgb(33, 33, 33),
    "grey13" => RgbaColor::rgb(33, 33, 33),
    "gray14" => RgbaColor::rgb(36, 36, 36),
    "grey14" => RgbaColor::rgb(36, 36, 36),
    "gray15" => RgbaColor::rgb(38, 38, 38),
    "grey15" => RgbaColor::rgb(38, 38, 38),
    "gray16" => RgbaColor::rgb(41, 41, 41),
    "grey16" => RgbaColor::rgb(41, 41, 41),
    "gray17" => RgbaColor::rgb(43, 43, 43),
    "grey17" => RgbaColor::rgb(43, 43, 43),
    "gray18" => RgbaColor::rgb(46, 46, 46),
    "grey18" => RgbaColor::rgb(46, 46, 46),
    "gray19" => RgbaColor::rgb(48, 48, 48),
    "grey19" => RgbaColor::rgb(48, 48, 48),
    "gray20" => RgbaColor::rgb(51, 51, 51),
    "grey20" => RgbaColor::rgb(51, 51, 51),
    "gray21" => RgbaColor::rgb(54, 54, 54),
    "grey21" => RgbaColor::rgb(54, 54, 54),
    "gray22" => RgbaColor::rgb(56, 56, 56),
    "grey22" => RgbaColor::rgb(56, 56, 56),
    "gray23" => RgbaColor::rgb(59, 59, 59),
    "grey23" => RgbaColor::rgb(59, 59, 59),
    "gray24" => RgbaColor::rgb(61, 61, 61),
    "grey24" => RgbaColor::rgb(61, 61, 61),
    "gray25" => RgbaColor::rgb(64, 64, 64),
    "grey25" => RgbaColor::rgb(64, 64, 64),
    "gray26" => RgbaColor::rgb(66, 66, 66),
    "grey26" => RgbaColor::rgb(66, 66, 66),
    "gray27" => RgbaColor::rgb(69, 69, 69),
    "grey27" => RgbaColor::rgb(69, 69, 69),
    "gray28" => RgbaColor::rgb(71, 71, 71),
    "grey28" => RgbaColor::rgb(71, 71, 71),
    "gray29" => RgbaColor::rgb(74, 74, 74),
    "grey29" => RgbaColor::rgb(74, 74, 74),
    "gray30" => RgbaColor::rgb(77, 77, 77),
    "grey30" => RgbaColor::rgb(77, 77, 77),
    "gray31" => RgbaColor::rgb(79, 79, 79),
    "grey31" => RgbaColor::rgb(79, 79, 79),
    "gray32" => RgbaColor::rgb(82, 82, 82),
    "grey32" => RgbaColor::rgb(82, 82, 82),
    "gray33" => RgbaColor::rgb(84, 84, 84),
    "grey33" => RgbaColor::rgb(84, 84, 84),
    "gray34" => RgbaColor::rgb(87, 87, 87),
    "grey34" => RgbaColor::rgb(87, 87, 87),
    "gray35" => RgbaColor::rgb(89, 89, 89),
    "grey35" => RgbaColor::rgb(89, 89, 89),
    "gray36" => RgbaColor::rgb(92, 92, 92),
    "grey36" => RgbaColor::rgb(92, 92, 92),
    "gray37" => RgbaColor::rgb(94, 94, 94),
    "grey37" => RgbaColor::rgb(94, 94, 94),
    "gray38" => RgbaColor::rgb(97, 97, 97),
    "grey38" => RgbaColor::rgb(97, 97, 97),
    "gray39" => RgbaColor::rgb(99, 99, 99),
    "grey39" => RgbaColor::rgb(99, 99, 99),
    "gray40" => RgbaColor::rgb(102, 102, 102),
    "grey40" => RgbaColor::rgb(102, 102, 102),
    "gray41" => RgbaColor::rgb(105, 105, 105),
    "grey41" => RgbaColor::rgb(105, 105, 105),
    "gray42" => RgbaColor::rgb(107, 107, 107),
    "grey42" => RgbaColor::rgb(107, 107, 107),
    "gray43" => RgbaColor::rgb(110, 110, 110),
    "grey43" => RgbaColor::rgb(110, 110, 110),
    "gray44" => RgbaColor::rgb(112, 112, 112),
    "grey44" => RgbaColor::rgb(112, 112, 112),
    "gray45" => RgbaColor::rgb(115, 115, 115),
    "grey45" => RgbaColor::rgb(115, 115, 115),
    "gray46" => RgbaColor::rgb(117, 117, 117),
    "grey46" => RgbaColor::rgb(117, 117, 117),
    "gray47" => RgbaColor::rgb(120, 120, 120),
    "grey47" => RgbaColor::rgb(120, 120, 120),
    "gray48" => RgbaColor::rgb(122, 122, 122),
    "grey48" => RgbaColor::rgb(122, 122, 122),
    "gray49" => RgbaColor::rgb(125, 125, 125),
    "grey49" => RgbaColor::rgb(125, 125, 125),
    "gray50" => RgbaColor::rgb(127, 127, 127),
    "grey50" => RgbaColor::rgb(127, 127, 127),
    "gray51" => RgbaColor::rgb(130, 130, 130),
    "grey51" => RgbaColor::rgb(130, 130, 130),
    "gray52" => RgbaColor::rgb(133, 133, 133),
    "grey52" => RgbaColor::rgb(133, 133, 133),
    "gray53" => RgbaColor::rgb(135, 135, 135),
    "grey53" => RgbaColor::rgb(135, 135, 135),
    "gray54" => RgbaColor::rgb(138, 138, 138),
    "grey54" => RgbaColor::rgb(138, 138, 138),
    "gray55" => RgbaColor::rgb(140, 140, 140),
    "grey55" => RgbaColor::rgb(140, 140, 140),
    "gray56" => RgbaColor::rgb(143, 143, 143),
    "grey56" => RgbaColor::rgb(143, 143, 143),
    "gray57" => RgbaColor::rgb(145, 145, 145),
    "grey57" => RgbaColor::rgb(145, 145, 145),
    "gray58" => RgbaColor::rgb(148, 148, 148),
    "grey58" => RgbaColor::rgb(148, 148, 148),
    "gray59" => RgbaColor::rgb(150, 150, 150),
    "grey59" => RgbaColor::rgb(150, 150, 150),
    "gray60" => RgbaColor::rgb(153, 153, 153),
    "grey60" => RgbaColor::rgb(153, 153, 153),
    "gray61" => RgbaColor::rgb(156, 156, 156),
    "grey61" => RgbaColor::rgb(156, 156, 156),
    "gray62" => RgbaColor::rgb(158, 158, 158),
    "grey62" => RgbaColor::rgb(158, 158, 158),
    "gray63" => RgbaColor::rgb(161, 161, 161),
    "grey63" => RgbaColor::rgb(161, 161, 161),
    "gray64" => RgbaColor::rgb(163, 163, 163),
    "grey64" => RgbaColor::rgb(163, 163, 163),
    "gray65" => RgbaColor::rgb(166, 166, 166),
    "grey65" => RgbaColor::rgb(166, 166, 166),
    "gray66" => RgbaColor::rgb(168, 168, 168),
    "grey66" => RgbaColor::rgb(168, 168, 168),
    "gray67" => RgbaColor::rgb(171, 171, 171),
    "grey67" => RgbaColor::rgb(171, 171, 171),
    "gray68" => RgbaColor::rgb(173, 173, 173),
    "grey68" => RgbaColor::rgb(173, 173, 173),
    "gray69" => RgbaColor::rgb(176, 176, 176),
    "grey69" => RgbaColor::rgb(176, 176, 176),
    "gray70" => RgbaColor::rgb(179, 179, 179),
    "grey70" => RgbaColor::rgb(179, 179, 179),
    "gray71" => RgbaColor::rgb(181, 181, 181),
    "grey71" => RgbaColor::rgb(181, 181, 181),
    "gray72" => RgbaColor::rgb(184, 184, 184),
    "grey72" => RgbaColor::rgb(184, 184, 184),
    "gray73" => RgbaColor::rgb(186, 186, 186),
    "grey73" => RgbaColor::rgb(186, 186, 186),
    "gray74" => RgbaColor::rgb(189, 189, 189),
    "grey74" => RgbaColor::rgb(189, 189, 189),
    "gray75" => RgbaColor::rgb(191, 191, 191),
    "grey75" => RgbaColor::rgb(191, 191, 191),
    "gray76" => RgbaColor::rgb(194, 194, 194),
    "grey76" => RgbaColor::rgb(194, 194, 194),
    "gray77" => RgbaColor::rgb(196, 196, 196),
    "grey77" => RgbaColor::rgb(196, 196, 196),
    "gray78" => RgbaColor::rgb(199, 199, 199),
    "grey78" => RgbaColor::rgb(199, 199, 199),
    "gray79" => RgbaColor::rgb(201, 201, 201),
    "grey79" => RgbaColor::rgb(201, 201, 201),
    "gray80" => RgbaColor::rgb(204, 204, 204),
    "grey80" => RgbaColor::rgb(204, 204, 204),
    "gray81" => RgbaColor::rgb(207, 207, 207),
    "grey81" => RgbaColor::rgb(207, 207, 207),
    "gray82" => RgbaColor::rgb(209, 209, 209),
    "grey82" => RgbaColor::rgb(209, 209, 209),
    "gray83" => RgbaColor::rgb(212, 212, 212),
    "grey83" => RgbaColor::rgb(212, 212, 212),
    "gray84" => RgbaColor::rgb(214, 214, 214),
    "grey84" => RgbaColor::rgb(214, 214, 214),
    "gray85" => RgbaColor::rgb(217, 217, 217),
    "grey85" => RgbaColor::rgb(217, 217, 217),
    "gray86" => RgbaColor::rgb(219, 219, 219),
    "grey86" => RgbaColor::rgb(219, 219, 219),
    "gray87" => RgbaColor::rgb(222, 222, 222),
    "grey87" => RgbaColor::rgb(222, 222, 222),
    "gray88" => RgbaColor::rgb(224, 224, 224),
    "grey88" => RgbaColor::rgb(224, 224, 224),
    "gray89" => RgbaColor::rgb(227, 227, 227),
    "grey89" => RgbaColor::rgb(227, 227, 227),
    "gray90" => RgbaColor::rgb(229, 229, 229),
    "grey90" => RgbaColor::rgb(229, 229, 229),
    "gray91" => RgbaColor::rgb(232, 232, 232),
    "grey91" => RgbaColor::rgb(232, 232, 232),
    "gray92" => RgbaColor::rgb(235, 235, 235),
    "grey92" => RgbaColor::rgb(235, 235, 235),
    "gray93" => RgbaColor::rgb(237, 237, 237),
    "grey93" => RgbaColor::rgb(237, 237, 237),
    "gray94" => RgbaColor::rgb(240, 240, 240),
    "grey94" => RgbaColor::rgb(240, 240, 240),
    "gray95" => RgbaColor::rgb(242, 242, 242),
    "grey95" => RgbaColor::rgb(242, 242, 242),
    "gray96" => RgbaColor::rgb(245, 245, 245),
    "grey96" => RgbaColor::rgb(245, 245, 245),
    "gray97" => RgbaColor::rgb(247, 247, 247),
    "grey97" => RgbaColor::rgb(247, 247, 247),
    "gray98" => RgbaColor::rgb(250, 250, 250),
    "grey98" => RgbaColor::rgb(250, 250, 250),
    "gray99" => RgbaColor::rgb(252, 252, 252),
    "grey99" => RgbaColor::rgb(252, 252, 252),
    "gray100" => RgbaColor::rgb(255, 255, 255),
    "grey100" => RgbaColor::rgb(255, 255, 255),
    "darkgrey" => RgbaColor::rgb(169, 169, 169),
    "darkgray" => RgbaColor::rgb(169, 169, 169),
    "darkblue" => RgbaColor::rgb(0, 0, 139),
    "darkcyan" => RgbaColor::rgb(0, 139, 139),
    "darkmagenta" => RgbaColor::rgb(139, 0, 139),
    "darkred" => RgbaColor::rgb(139, 0, 0),
    "lightgreen" => RgbaColor::rgb(144, 238, 144),
};
