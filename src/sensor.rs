//! Narrow capability interface used by generic sampling loops.

use crate::device::Lis3dsh;
use crate::error::ErrorKind;
use crate::interface::Lis3dshInterface;
use crate::log::Logger;

/// Lifecycle a polling framework needs from a sensor driver.
///
/// Failures are reported as `false`/`None`; the cause stays readable through
/// [`Sensor::last_error`].
pub trait Sensor {
    /// Measurement produced by one sampling call.
    type Data;

    /// Brings the sensor up. Returns `true` on success.
    fn init(&mut self) -> bool;

    /// Runs the built-in self-test. Returns `true` on pass.
    fn self_test(&mut self) -> bool;

    /// Takes one measurement. `None` only when the bus failed.
    fn sample(&mut self) -> Option<Self::Data>;

    /// Outcome recorded by the most recent call that reported one.
    fn last_error(&self) -> ErrorKind;
}

impl<IFACE, L> Sensor for Lis3dsh<IFACE, L>
where
    IFACE: Lis3dshInterface,
    L: Logger,
{
    type Data = crate::decoder::AccelerationSample;

    fn init(&mut self) -> bool {
        Lis3dsh::init(self).is_ok()
    }

    fn self_test(&mut self) -> bool {
        Lis3dsh::self_test(self).is_ok()
    }

    fn sample(&mut self) -> Option<Self::Data> {
        Lis3dsh::sample(self).ok()
    }

    fn last_error(&self) -> ErrorKind {
        Lis3dsh::last_error(self)
    }
}
