//! Axis decoding from output register pairs.
//!
//! Each axis is two independent register reads (high byte first). The sensor
//! may update between them; the decoder does not try to hide that.

use crate::error::Result;
use crate::interface::Lis3dshInterface;
use crate::registers::Axis;
use crate::transaction::Transaction;

/// Acceleration on all three axes in milli-g.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelerationSample {
    /// X-axis acceleration (mg).
    pub x: f32,
    /// Y-axis acceleration (mg).
    pub y: f32,
    /// Z-axis acceleration (mg).
    pub z: f32,
}

impl AccelerationSample {
    /// Creates a sample from per-axis values in mg.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Scales raw two's-complement counts by `factor` (mg per digit).
    pub fn from_raw(raw: [i16; 3], factor: f32) -> Self {
        Self {
            x: f32::from(raw[0]) * factor,
            y: f32::from(raw[1]) * factor,
            z: f32::from(raw[2]) * factor,
        }
    }

    /// Per-axis `self - other`.
    pub fn delta(&self, other: &Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

/// Combines a `{high, low}` register pair into a signed 16-bit raw value.
#[inline]
pub const fn decode_raw(high: u8, low: u8) -> i16 {
    (((high as u16) << 8) | low as u16) as i16
}

/// Reads one axis as a raw count.
pub fn read_axis_raw<IFACE>(tx: &mut Transaction<'_, IFACE>, axis: Axis) -> Result<i16, IFACE::Error>
where
    IFACE: Lis3dshInterface,
{
    let high = tx.read(axis.high())?;
    let low = tx.read(axis.low())?;
    Ok(decode_raw(high, low))
}

/// Reads X, Y and Z as raw counts.
pub fn read_raw<IFACE>(tx: &mut Transaction<'_, IFACE>) -> Result<[i16; 3], IFACE::Error>
where
    IFACE: Lis3dshInterface,
{
    let mut raw = [0i16; 3];
    for (slot, axis) in raw.iter_mut().zip(Axis::ALL) {
        *slot = read_axis_raw(tx, axis)?;
    }
    Ok(raw)
}

/// Reads X, Y and Z and converts them with `factor` (mg per digit).
pub fn read_sample<IFACE>(
    tx: &mut Transaction<'_, IFACE>,
    factor: f32,
) -> Result<AccelerationSample, IFACE::Error>
where
    IFACE: Lis3dshInterface,
{
    Ok(AccelerationSample::from_raw(read_raw(tx)?, factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Range;

    #[test]
    fn raw_pairs_decode_as_twos_complement() {
        assert_eq!(decode_raw(0x00, 0x01), 1);
        assert_eq!(decode_raw(0xFF, 0xFF), -1);
        assert_eq!(decode_raw(0x7F, 0xFF), 32767);
        assert_eq!(decode_raw(0x80, 0x00), -32768);
        assert_eq!(decode_raw(0x12, 0x34), 0x1234);
    }

    #[test]
    fn raw_counts_scale_with_active_factor() {
        let sample = AccelerationSample::from_raw([1, -1, 0], Range::G2.conversion_factor());
        assert_eq!(sample, AccelerationSample::new(0.06, -0.06, 0.0));

        let sample = AccelerationSample::from_raw([100, 0, 0], Range::G16.conversion_factor());
        assert!((sample.x - 73.0).abs() < 1e-3);
    }

    #[test]
    fn delta_is_per_axis_difference() {
        let before = AccelerationSample::new(120.0, 60.0, 30.0);
        let during = AccelerationSample::new(60.0, 30.0, 15.0);
        assert_eq!(before.delta(&during), AccelerationSample::new(60.0, 30.0, 15.0));
    }
}
