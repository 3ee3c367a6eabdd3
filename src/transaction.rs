//! Scoped bus acquisition.
//!
//! A [`Transaction`] mutably borrows the interface for one logical group of
//! register accesses. The bus is acquired when the guard is created and
//! released exactly once, either through [`Transaction::release`] or when the
//! guard is dropped on any early return.

use crate::error::Result;
use crate::interface::Lis3dshInterface;
use crate::registers::Register;

/// Guard holding exclusive bus access for its lifetime.
pub struct Transaction<'a, IFACE>
where
    IFACE: Lis3dshInterface,
{
    interface: &'a mut IFACE,
    released: bool,
}

impl<'a, IFACE> Transaction<'a, IFACE>
where
    IFACE: Lis3dshInterface,
{
    /// Acquires the bus. Nothing needs releasing when acquisition fails.
    pub fn begin(interface: &'a mut IFACE) -> Result<Self, IFACE::Error> {
        interface.acquire_bus()?;
        Ok(Self {
            interface,
            released: false,
        })
    }

    /// Reads the current value of `register`.
    pub fn read(&mut self, register: Register) -> Result<u8, IFACE::Error> {
        Ok(self.interface.read_register(register.addr())?)
    }

    /// Overwrites `register` with `value`.
    pub fn write(&mut self, register: Register, value: u8) -> Result<(), IFACE::Error> {
        Ok(self.interface.write_register(register.addr(), value)?)
    }

    /// Read-modify-write of a single register.
    ///
    /// The register is read fresh, passed through `mutate`, and written back
    /// only when the value changed. Returns the value now held by the register.
    pub fn modify<F>(&mut self, register: Register, mutate: F) -> Result<u8, IFACE::Error>
    where
        F: FnOnce(u8) -> u8,
    {
        let current = self.read(register)?;
        let updated = mutate(current);
        if updated != current {
            self.write(register, updated)?;
        }
        Ok(updated)
    }

    /// Releases the bus now instead of at scope exit.
    pub fn release(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        if !self.released {
            self.released = true;
            self.interface.release_bus();
        }
    }
}

impl<IFACE> Drop for Transaction<'_, IFACE>
where
    IFACE: Lis3dshInterface,
{
    fn drop(&mut self) {
        self.finish();
    }
}
