//! Strongly typed parameter enumerations for the LIS3DSH driver.
//!
//! The full-scale selection is kept as data: every [`Range`] resolves to one
//! [`ScaleEntry`] of [`RANGE_TABLE`] holding its `CTRL_REG5` bitmask and its
//! conversion factor, so range switching never branches per variant.
//!
//! # Examples
//!
//! ```rust
//! use lis3dsh::params::Range;
//!
//! let range = Range::G8;
//! assert_eq!(range.mask(), 0b0001_1000);
//! assert_eq!(range.full_scale_g(), 8);
//! ```

use modular_bitfield::prelude::Specifier;

/// Bit offset of the `FSCALE` field inside `CTRL_REG5`.
pub(crate) const FSCALE_SHIFT: u8 = 3;

/// Selectable full-scale measurement ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Range {
    /// ±2 g, the most sensitive range and the power-on default.
    G2 = 0,
    /// ±4 g.
    G4 = 1,
    /// ±6 g.
    G6 = 2,
    /// ±8 g.
    G8 = 3,
    /// ±16 g.
    G16 = 4,
}

/// One row of the range/scale table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScaleEntry {
    /// Range this row describes.
    pub range: Range,
    /// `FSCALE` bits already shifted into their `CTRL_REG5` position.
    pub mask: u8,
    /// Sensitivity in milli-g per least significant digit.
    pub mg_per_digit: f32,
    /// Nominal full-scale magnitude in g.
    pub full_scale_g: u8,
}

/// Range/scale lookup table, indexed by the [`Range`] discriminant.
pub const RANGE_TABLE: [ScaleEntry; 5] = [
    ScaleEntry { range: Range::G2, mask: 0b000 << FSCALE_SHIFT, mg_per_digit: 0.06, full_scale_g: 2 },
    ScaleEntry { range: Range::G4, mask: 0b001 << FSCALE_SHIFT, mg_per_digit: 0.12, full_scale_g: 4 },
    ScaleEntry { range: Range::G6, mask: 0b010 << FSCALE_SHIFT, mg_per_digit: 0.18, full_scale_g: 6 },
    ScaleEntry { range: Range::G8, mask: 0b011 << FSCALE_SHIFT, mg_per_digit: 0.24, full_scale_g: 8 },
    ScaleEntry { range: Range::G16, mask: 0b100 << FSCALE_SHIFT, mg_per_digit: 0.73, full_scale_g: 16 },
];

impl Range {
    /// Every selectable range, most sensitive first.
    pub const ALL: [Range; 5] = [Self::G2, Self::G4, Self::G6, Self::G8, Self::G16];

    /// Returns the table row for this range.
    pub const fn scale(self) -> ScaleEntry {
        RANGE_TABLE[self as usize]
    }

    /// Returns the shifted `FSCALE` bitmask written into `CTRL_REG5`.
    pub const fn mask(self) -> u8 {
        self.scale().mask
    }

    /// Returns the raw-count to milli-g conversion factor.
    pub const fn conversion_factor(self) -> f32 {
        self.scale().mg_per_digit
    }

    /// Returns the nominal full-scale magnitude in g.
    pub const fn full_scale_g(self) -> u8 {
        self.scale().full_scale_g
    }

    /// Returns the unshifted 3-bit `FSCALE` field value.
    pub const fn scale_bits(self) -> u8 {
        self.mask() >> FSCALE_SHIFT
    }

    /// Decodes an unshifted `FSCALE` field value. Reserved patterns yield `None`.
    pub fn from_scale_bits(bits: u8) -> Option<Self> {
        RANGE_TABLE
            .iter()
            .find(|entry| entry.mask >> FSCALE_SHIFT == bits)
            .map(|entry| entry.range)
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::G2
    }
}

/// Self-test selection encoded in `CTRL_REG5.ST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum SelfTestMode {
    /// Normal measurement.
    Normal = 0b00,
    /// Positive sign self-test.
    Positive = 0b01,
    /// Negative sign self-test.
    Negative = 0b10,
    /// Reserved by the datasheet.
    NotAllowed = 0b11,
}

/// Anti-aliasing filter bandwidth encoded in `CTRL_REG5.BW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum AntiAliasingBandwidth {
    /// 800 Hz bandwidth (reset default).
    Bw800Hz = 0b00,
    /// 200 Hz bandwidth.
    Bw200Hz = 0b01,
    /// 400 Hz bandwidth.
    Bw400Hz = 0b10,
    /// 50 Hz bandwidth.
    Bw50Hz = 0b11,
}

/// SPI clock prescaler applied to the peripheral clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockDivider {
    /// Peripheral clock / 2.
    Div2,
    /// Peripheral clock / 4.
    Div4,
    /// Peripheral clock / 8.
    Div8,
    /// Peripheral clock / 16.
    Div16,
    /// Peripheral clock / 32.
    Div32,
    /// Peripheral clock / 64.
    Div64,
    /// Peripheral clock / 128.
    Div128,
    /// Peripheral clock / 256.
    Div256,
}

impl ClockDivider {
    /// Returns the integer divisor.
    pub const fn divisor(self) -> u32 {
        match self {
            Self::Div2 => 2,
            Self::Div4 => 4,
            Self::Div8 => 8,
            Self::Div16 => 16,
            Self::Div32 => 32,
            Self::Div64 => 64,
            Self::Div128 => 128,
            Self::Div256 => 256,
        }
    }
}

impl Default for ClockDivider {
    fn default() -> Self {
        Self::Div16
    }
}
