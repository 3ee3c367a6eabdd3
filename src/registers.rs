//! Register map definitions for the LIS3DSH accelerometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{AntiAliasingBandwidth, Range, SelfTestMode};

/// Register addresses used by the driver. Values are fixed by the silicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// `WHO_AM_I` identity register.
    WhoAmI = 0x0F,
    /// `OUT_X_L`.
    OutXL = 0x28,
    /// `OUT_X_H`.
    OutXH = 0x29,
    /// `OUT_Y_L`.
    OutYL = 0x2A,
    /// `OUT_Y_H`.
    OutYH = 0x2B,
    /// `OUT_Z_L`.
    OutZL = 0x2C,
    /// `OUT_Z_H`.
    OutZH = 0x2D,
    /// `CTRL_REG5`: full scale, self-test, anti-aliasing bandwidth, SPI mode.
    Ctrl5 = 0x34,
}

impl Register {
    /// Returns the register address as documented in the datasheet.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// Expected content of `WHO_AM_I`.
pub const WHO_AM_I_VALUE: u8 = 0x3F;

/// `CTRL_REG5.FSCALE` field (bits 5:3). Cleared before a new range mask is applied.
pub const FSCALE_MASK: u8 = 0b0011_1000;

/// `CTRL_REG5.ST` value enabling the positive sign self-test (bit 1).
pub const SELF_TEST_ENABLE: u8 = 0b0000_0010;

/// Measurement axes with their `{high, low}` output register pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl Axis {
    /// Axes in sampling order.
    pub const ALL: [Axis; 3] = [Self::X, Self::Y, Self::Z];

    /// Returns the register holding bits 15..8 of this axis.
    pub const fn high(self) -> Register {
        match self {
            Self::X => Register::OutXH,
            Self::Y => Register::OutYH,
            Self::Z => Register::OutZH,
        }
    }

    /// Returns the register holding bits 7..0 of this axis.
    pub const fn low(self) -> Register {
        match self {
            Self::X => Register::OutXL,
            Self::Y => Register::OutYL,
            Self::Z => Register::OutZL,
        }
    }
}

/// Bitfield representation of `CTRL_REG5` (address `0x34`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control5 {
    // 3-wire SPI interface selection (bit 0).
    pub spi_three_wire: bool,
    // Self-test selection (bits 2:1).
    pub self_test: SelfTestMode,
    // Full-scale selection (bits 5:3).
    pub full_scale: B3,
    // Anti-aliasing filter bandwidth (bits 7:6).
    pub bandwidth: AntiAliasingBandwidth,
}

impl Control5 {
    /// Returns the configured range, or `None` for reserved `FSCALE` patterns.
    pub fn range(&self) -> Option<Range> {
        Range::from_scale_bits(self.full_scale())
    }

    /// Returns `true` when any self-test mode is selected.
    pub fn self_test_enabled(&self) -> bool {
        self.self_test() != SelfTestMode::Normal
    }
}

impl From<u8> for Control5 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Control5> for u8 {
    fn from(value: Control5) -> Self {
        value.into_bytes()[0]
    }
}

/// Replaces the `FSCALE` field of a `CTRL_REG5` value, preserving every other bit.
pub const fn apply_range_mask(ctrl5: u8, range: Range) -> u8 {
    (ctrl5 & !FSCALE_MASK) | range.mask()
}
