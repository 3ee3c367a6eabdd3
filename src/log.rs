//! Diagnostic sink injected into the driver.
//!
//! The driver never talks to a global logger. It reports typed [`Event`]s to
//! the [`Logger`] it was built with; [`NoopLogger`] discards them and, with
//! the `defmt` feature, [`DefmtLogger`] forwards them to `defmt`.

use crate::decoder::AccelerationSample;
use crate::params::Range;

/// Severity attached to every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Step-by-step tracing.
    Debug,
    /// State changes worth keeping.
    Info,
    /// Recoverable misuse.
    Warn,
    /// Failed operation.
    Error,
}

/// Driver operations that require initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operation {
    /// [`select_range`](crate::Lis3dsh::select_range).
    SelectRange,
    /// [`sample`](crate::Lis3dsh::sample).
    Sample,
}

/// Diagnostic events emitted by the driver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// `init` called on an initialized driver.
    AlreadyInitialized,
    /// `WHO_AM_I` returned something other than the expected constant.
    IdentityMismatch {
        /// Value read back from the sensor.
        found: u8,
    },
    /// Identity check and self-test both passed.
    Initialized,
    /// Self-test completed within thresholds.
    SelfTestPassed {
        /// Normal minus self-test reading, in mg.
        delta: AccelerationSample,
    },
    /// Self-test deltas reached a threshold.
    SelfTestFailed {
        /// Normal minus self-test reading, in mg.
        delta: AccelerationSample,
    },
    /// An operation ran before a successful `init`.
    NotInitialized(Operation),
    /// A new full-scale range is active.
    RangeSelected(Range),
    /// The bus transport reported an error.
    TransportFailure,
}

impl Event {
    /// Severity the driver reports this event with.
    pub const fn level(&self) -> Level {
        match self {
            Self::RangeSelected(_) | Self::SelfTestPassed { .. } => Level::Debug,
            Self::Initialized => Level::Info,
            Self::AlreadyInitialized => Level::Warn,
            Self::IdentityMismatch { .. }
            | Self::SelfTestFailed { .. }
            | Self::NotInitialized(_)
            | Self::TransportFailure => Level::Error,
        }
    }
}

/// Receiver of driver diagnostics.
pub trait Logger {
    /// Records one event.
    fn log(&mut self, level: Level, event: Event);
}

impl<L> Logger for &mut L
where
    L: Logger + ?Sized,
{
    fn log(&mut self, level: Level, event: Event) {
        (**self).log(level, event)
    }
}

/// Logger that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&mut self, _level: Level, _event: Event) {}
}

/// Logger forwarding events to the `defmt` macros of the matching level.
#[cfg(feature = "defmt")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DefmtLogger;

#[cfg(feature = "defmt")]
impl Logger for DefmtLogger {
    fn log(&mut self, level: Level, event: Event) {
        match level {
            Level::Debug => defmt::debug!("lis3dsh: {}", event),
            Level::Info => defmt::info!("lis3dsh: {}", event),
            Level::Warn => defmt::warn!("lis3dsh: {}", event),
            Level::Error => defmt::error!("lis3dsh: {}", event),
        }
    }
}
