//! Bus interface abstraction for the LIS3DSH driver.

pub mod spi;

/// Abstraction over the low-level bus access required by the driver.
///
/// Register accesses are synchronous and bounded. The `acquire_bus`/`release_bus`
/// hooks bracket every [`Transaction`](crate::transaction::Transaction);
/// transports sharing one physical bus between several drivers override them
/// to hold a per-bus lock for the whole register group.
pub trait Lis3dshInterface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes a single register.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error>;

    /// Takes exclusive ownership of the bus for a group of register accesses.
    fn acquire_bus(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }

    /// Returns the bus to other users. Called exactly once per successful `acquire_bus`.
    fn release_bus(&mut self) {}
}

impl<T> Lis3dshInterface for &mut T
where
    T: Lis3dshInterface + ?Sized,
{
    type Error = T::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        (**self).write_register(register, value)
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        (**self).read_register(register)
    }

    fn acquire_bus(&mut self) -> core::result::Result<(), Self::Error> {
        (**self).acquire_bus()
    }

    fn release_bus(&mut self) {
        (**self).release_bus()
    }
}
