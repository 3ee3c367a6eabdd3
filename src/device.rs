//! High-level LIS3DSH device driver implementation.

use crate::config::Config;
use crate::decoder::{self, AccelerationSample};
use crate::error::{Error, ErrorKind, Result};
use crate::interface::spi::SpiInterface;
use crate::interface::Lis3dshInterface;
use crate::log::{Event, Logger, NoopLogger, Operation};
use crate::params::Range;
use crate::registers::{apply_range_mask, Control5, Register, WHO_AM_I_VALUE};
use crate::self_test::{run_self_test, SelfTestReport};
use crate::transaction::Transaction;
use embedded_hal::spi::SpiDevice;

/// Initialization state of the driver.
///
/// `Faulted` behaves like `Uninitialized`: both require a fresh
/// [`Lis3dsh::init`] before range changes are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Constructed, `init` not yet successful.
    Uninitialized,
    /// Identity and self-test passed.
    Initialized,
    /// A self-test failed or an operation ran before `init`.
    Faulted,
}

/// Range currently programmed into `CTRL_REG5` and its conversion factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ActiveScale {
    pub(crate) range: Range,
    pub(crate) conversion_factor: f32,
}

impl ActiveScale {
    const fn new(range: Range) -> Self {
        Self {
            range,
            conversion_factor: range.conversion_factor(),
        }
    }
}

/// Clears `FSCALE`, applies `range`'s mask and makes it the active scale.
///
/// `CTRL_REG5` is read fresh so the self-test, bandwidth and SPI mode bits
/// survive. The active scale only changes once the write went through.
pub(crate) fn write_range<IFACE>(
    tx: &mut Transaction<'_, IFACE>,
    scale: &mut ActiveScale,
    range: Range,
) -> Result<(), IFACE::Error>
where
    IFACE: Lis3dshInterface,
{
    tx.modify(Register::Ctrl5, |ctrl| apply_range_mask(ctrl, range))?;
    *scale = ActiveScale::new(range);
    Ok(())
}

/// High-level synchronous driver for the LIS3DSH accelerometer.
///
/// One instance is driven by one caller at a time; wrap it in a mutex if it
/// must be shared between threads.
pub struct Lis3dsh<IFACE, L = NoopLogger> {
    interface: IFACE,
    config: Config,
    logger: L,
    state: State,
    scale: ActiveScale,
    last_error: ErrorKind,
    last_sample: AccelerationSample,
}

impl<IFACE> Lis3dsh<IFACE, NoopLogger> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    pub fn new(interface: IFACE, config: Config) -> Self {
        Self::with_logger(interface, config, NoopLogger)
    }
}

impl<IFACE, L> Lis3dsh<IFACE, L> {
    /// Creates a new driver reporting diagnostics to `logger`.
    pub fn with_logger(interface: IFACE, config: Config, logger: L) -> Self {
        Self {
            interface,
            config,
            logger,
            state: State::Uninitialized,
            scale: ActiveScale::new(Range::G2),
            last_error: ErrorKind::None,
            last_sample: AccelerationSample::default(),
        }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> (IFACE, Config) {
        (self.interface, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Provides mutable access to the injected logger.
    pub fn logger_mut(&mut self) -> &mut L {
        &mut self.logger
    }

    // ==================================================================
    // == State Accessors ===============================================
    // ==================================================================
    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current initialization state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns `true` once `init` succeeded and no self-test failed since.
    pub fn is_initialized(&self) -> bool {
        self.state == State::Initialized
    }

    /// Active full-scale range.
    pub fn range(&self) -> Range {
        self.scale.range
    }

    /// Active conversion factor in mg per digit.
    pub fn conversion_factor(&self) -> f32 {
        self.scale.conversion_factor
    }

    /// Outcome recorded by the most recent call that reported one.
    pub fn last_error(&self) -> ErrorKind {
        self.last_error
    }

    /// Most recent successful sample.
    pub fn last_sample(&self) -> AccelerationSample {
        self.last_sample
    }
}

impl<SPI> Lis3dsh<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    // ==================================================================
    // == SPI Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for SPI transports.
    pub fn new_spi(spi: SPI, config: Config) -> Self {
        Self::new(SpiInterface::new(spi), config)
    }
}

impl<SPI, L> Lis3dsh<SpiInterface<SPI>, L>
where
    SPI: SpiDevice,
{
    /// Releases the driver, returning the SPI device and configuration.
    pub fn release_spi(self) -> (SPI, Config) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<IFACE, L, CommE> Lis3dsh<IFACE, L>
where
    IFACE: Lis3dshInterface<Error = CommE>,
    L: Logger,
{
    // ==================================================================
    // == Initialization & Identification ===============================
    // ==================================================================
    /// Verifies the sensor identity and runs the self-test.
    ///
    /// Calling this on an initialized driver touches no register, records
    /// [`ErrorKind::AlreadyInitialized`] and succeeds.
    pub fn init(&mut self) -> Result<(), CommE> {
        if self.is_initialized() {
            self.last_error = ErrorKind::AlreadyInitialized;
            self.emit(Event::AlreadyInitialized);
            return Ok(());
        }

        let found = self.transact(|tx, _| tx.read(Register::WhoAmI))?;
        if found != WHO_AM_I_VALUE {
            self.emit(Event::IdentityMismatch { found });
            return Err(self.fail(Error::InvalidIdentity(found)));
        }

        self.self_test()?;

        self.state = State::Initialized;
        self.emit(Event::Initialized);
        Ok(())
    }

    /// Reads `WHO_AM_I` and compares it with the expected constant.
    pub fn check_identity(&mut self) -> Result<bool, CommE> {
        let found = self.transact(|tx, _| tx.read(Register::WhoAmI))?;
        Ok(found == WHO_AM_I_VALUE)
    }

    // ==================================================================
    // == Self-Test ======================================================
    // ==================================================================
    /// Executes the datasheet self-test routine.
    ///
    /// A pass leaves the initialization state as it was. A failure, or a bus
    /// error during the routine, moves the driver to [`State::Faulted`].
    pub fn self_test(&mut self) -> Result<SelfTestReport, CommE> {
        let entry_state = self.state;

        let report = match self.transact(|tx, scale| run_self_test(tx, scale)) {
            Ok(report) => report,
            Err(err) => {
                self.state = State::Faulted;
                return Err(err);
            }
        };

        if !report.passed {
            self.state = State::Faulted;
            self.emit(Event::SelfTestFailed {
                delta: report.delta,
            });
            return Err(self.fail(Error::SelfTestFailed));
        }

        self.state = entry_state;
        self.emit(Event::SelfTestPassed {
            delta: report.delta,
        });
        Ok(report)
    }

    // ==================================================================
    // == Range Configuration ===========================================
    // ==================================================================
    /// Programs a new full-scale range.
    ///
    /// Requires an initialized driver; otherwise nothing is written and
    /// [`Error::NotInitialized`] is returned.
    pub fn select_range(&mut self, range: Range) -> Result<(), CommE> {
        if !self.is_initialized() {
            self.state = State::Faulted;
            self.emit(Event::NotInitialized(Operation::SelectRange));
            return Err(self.fail(Error::NotInitialized));
        }

        self.transact(|tx, scale| write_range(tx, scale, range))?;
        self.emit(Event::RangeSelected(range));
        Ok(())
    }

    /// Returns a typed snapshot of `CTRL_REG5`.
    pub fn control_register(&mut self) -> Result<Control5, CommE> {
        let raw = self.transact(|tx, _| tx.read(Register::Ctrl5))?;
        Ok(Control5::from(raw))
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads all three axes in mg using the active conversion factor.
    ///
    /// An uninitialized driver records [`ErrorKind::NotInitialized`] but
    /// still performs the read.
    pub fn sample(&mut self) -> Result<AccelerationSample, CommE> {
        self.note_uninitialized(Operation::Sample);

        let sample = self.transact(|tx, scale| decoder::read_sample(tx, scale.conversion_factor))?;
        self.last_sample = sample;
        Ok(sample)
    }

    /// Reads a raw acceleration triplet.
    pub fn read_raw(&mut self) -> Result<[i16; 3], CommE> {
        self.note_uninitialized(Operation::Sample);
        self.transact(|tx, _| decoder::read_raw(tx))
    }

    // ==================================================================
    // == Internal Helpers ==============================================
    // ==================================================================
    /// Runs `op` inside one bus transaction and records any error.
    fn transact<T, F>(&mut self, op: F) -> Result<T, CommE>
    where
        F: FnOnce(&mut Transaction<'_, IFACE>, &mut ActiveScale) -> Result<T, CommE>,
    {
        let scale = &mut self.scale;
        let result = Transaction::begin(&mut self.interface).and_then(|mut tx| op(&mut tx, scale));
        result.map_err(|err| self.fail(err))
    }

    fn note_uninitialized(&mut self, operation: Operation) {
        if !self.is_initialized() {
            self.state = State::Faulted;
            self.last_error = ErrorKind::NotInitialized;
            self.emit(Event::NotInitialized(operation));
        }
    }

    fn fail(&mut self, err: Error<CommE>) -> Error<CommE> {
        self.last_error = err.kind();
        if let Error::Interface(_) = err {
            self.emit(Event::TransportFailure);
        }
        err
    }

    fn emit(&mut self, event: Event) {
        self.logger.log(event.level(), event);
    }
}
