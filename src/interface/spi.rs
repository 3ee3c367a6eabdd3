//! SPI interface implementation built on top of `embedded-hal` `SpiDevice`.

use embedded_hal::spi::{Mode, Operation, SpiDevice, MODE_3};

use super::Lis3dshInterface;

/// SPI mode required by the LIS3DSH (CPOL = 1, CPHA = 1).
pub const SPI_MODE: Mode = MODE_3;

/// Highest SPI clock frequency supported by the sensor.
pub const MAX_SPI_FREQUENCY_HZ: u32 = 10_000_000;

// Set in the command byte for register reads.
const READ_FLAG: u8 = 0x80;

/// SPI-based interface implementation for the LIS3DSH driver.
///
/// Chip-select handling and bus sharing are delegated to the wrapped
/// `SpiDevice`; every register access is one chip-select frame.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new interface from the provided SPI device abstraction.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Builds the command byte used to address registers over SPI.
    fn command_byte(register: u8, is_read: bool) -> u8 {
        let command = register & 0x7F;
        if is_read { command | READ_FLAG } else { command }
    }

    /// Provides mutable access to the wrapped SPI device.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the interface and returns the owned SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> Lis3dshInterface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type Error = SPI::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        let frame = [Self::command_byte(register, false), value];
        self.spi.write(&frame)
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let command = [Self::command_byte(register, true)];
        let mut value = [0u8; 1];
        let mut operations = [Operation::Write(&command), Operation::Read(&mut value)];
        self.spi.transaction(&mut operations)?;
        Ok(value[0])
    }
}
