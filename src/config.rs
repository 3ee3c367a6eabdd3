//! Configuration primitives for the LIS3DSH driver.

use crate::interface::spi::MAX_SPI_FREQUENCY_HZ;
use crate::params::ClockDivider;

/// Construction-time configuration for the LIS3DSH driver.
///
/// Chip-select designation travels with the `SpiDevice` handed to the driver;
/// the clock divider is what the board code applies to its SPI peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// SPI clock prescaler. Defaults to [`ClockDivider::Div16`].
    pub clock_divider: ClockDivider,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Resulting SPI clock for the given peripheral clock.
    pub const fn spi_frequency_hz(&self, peripheral_clock_hz: u32) -> u32 {
        peripheral_clock_hz / self.clock_divider.divisor()
    }

    /// Checks the resulting SPI clock against the sensor's 10 MHz limit.
    pub fn validate_for(&self, peripheral_clock_hz: u32) -> core::result::Result<(), ConfigError> {
        if self.spi_frequency_hz(peripheral_clock_hz) > MAX_SPI_FREQUENCY_HZ {
            return Err(ConfigError::ClockTooFast);
        }

        Ok(())
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the SPI clock divider.
    pub fn clock_divider(mut self, clock_divider: ClockDivider) -> Self {
        self.config.clock_divider = clock_divider;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Validation errors generated while verifying a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The divided SPI clock exceeds what the sensor accepts.
    ClockTooFast,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_div16() {
        assert_eq!(Config::default().clock_divider, ClockDivider::Div16);
        assert_eq!(Config::new().build(), Config::default());
    }

    #[test]
    fn frequency_follows_divider() {
        let config = Config::new().clock_divider(ClockDivider::Div8).build();
        assert_eq!(config.spi_frequency_hz(84_000_000), 10_500_000);
        assert_eq!(config.validate_for(84_000_000), Err(ConfigError::ClockTooFast));
        assert_eq!(Config::default().validate_for(84_000_000), Ok(()));
    }
}
