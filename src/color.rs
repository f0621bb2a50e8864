//! Conversion between truecolor and the 8-bit packed palette.
//!
//! A packed color is laid out as `11 RR GG BB`: the two most significant
//! bits mark the color as opaque, then two bits per channel, red first.

use core::fmt;

use rgb::RGB8;

/// Full range color, 8 bits per channel.
pub type Color = RGB8;

/// Top two bits of every packed color.
pub const OPAQUE_MARKER: u8 = 0b1100_0000;

/// Distance between two quantization levels in the 8-bit range.
pub const QUANTIZATION_STEP: u8 = 64;

// 0..=3 maps onto 0, 85, 170, 255
const LEVEL_SCALE: u8 = 0b0101_0101;

/// One palette byte; its two most significant bits are always `11`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct PackedColor(u8);

impl PackedColor {
    /// Opaque black, `0xC0`.
    pub const BLACK: Self = Self(OPAQUE_MARKER);
    /// Opaque white, `0xFF`.
    pub const WHITE: Self = Self(0xFF);

    /// Returns `None` when the opacity marker is missing.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & OPAQUE_MARKER == OPAQUE_MARKER {
            true => Some(Self(bits)),
            false => None,
        }
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Red, green and blue levels, each in `0..=3`.
    pub const fn levels(self) -> [u8; 3] {
        [(self.0 >> 4) & 0b11, (self.0 >> 2) & 0b11, self.0 & 0b11]
    }

    pub fn to_color(self) -> Color {
        decode(self)
    }
}

impl fmt::Debug for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackedColor({:#04X})", self.0)
    }
}

impl From<Color> for PackedColor {
    fn from(color: Color) -> Self {
        encode(color)
    }
}

/// Quantizes each channel by truncation (`channel / 64`).
pub fn encode(color: Color) -> PackedColor {
    let r = color.r >> 6;
    let g = color.g >> 6;
    let b = color.b >> 6;
    PackedColor(OPAQUE_MARKER | (r << 4) | (g << 2) | b)
}

/// Rescales every level back to the 8-bit range.
///
/// `decode(encode(c))` is within one quantization step of `c` on each channel.
pub fn decode(packed: PackedColor) -> Color {
    let [r, g, b] = packed.levels();
    Color::new(r * LEVEL_SCALE, g * LEVEL_SCALE, b * LEVEL_SCALE)
}

/// Returns the raw levels as if they were 8-bit channels.
///
/// Matches older tools reading these files: every color ends up near black.
pub fn decode_legacy(packed: PackedColor) -> Color {
    let [r, g, b] = packed.levels();
    Color::new(r, g, b)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ColorDecoding {
    #[default]
    Rescaled,
    Legacy,
}

impl ColorDecoding {
    pub fn decode(self, packed: PackedColor) -> Color {
        match self {
            ColorDecoding::Rescaled => decode(packed),
            ColorDecoding::Legacy => decode_legacy(packed),
        }
    }
}
