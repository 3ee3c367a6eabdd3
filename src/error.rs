//! Error handling primitives for the LIS3DSH driver.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Any error reported by the underlying bus interface.
    Interface(E),
    /// `WHO_AM_I` did not hold the expected constant (contains the value read).
    InvalidIdentity(u8),
    /// Self-test deltas exceeded the datasheet thresholds.
    SelfTestFailed,
    /// The operation requires a successful [`init`](crate::Lis3dsh::init) first.
    NotInitialized,
}

impl<E> Error<E> {
    /// Returns the payload-free kind recorded as the driver's last error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Interface(_) => ErrorKind::TransportFailure,
            Self::InvalidIdentity(_) => ErrorKind::InvalidIdentity,
            Self::SelfTestFailed => ErrorKind::SelfTestFailed,
            Self::NotInitialized => ErrorKind::NotInitialized,
        }
    }
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Interface(err)
    }
}

/// Last-error code readable after any driver call.
///
/// Unlike [`Error`], this also covers the informational
/// [`AlreadyInitialized`](ErrorKind::AlreadyInitialized) outcome, which is
/// never returned as a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// No error recorded yet.
    #[default]
    None,
    /// `init` was called on an initialized driver; the call still succeeded.
    AlreadyInitialized,
    /// Identity byte mismatch.
    InvalidIdentity,
    /// Self-test thresholds exceeded.
    SelfTestFailed,
    /// Operation attempted before a successful `init`.
    NotInitialized,
    /// The bus transport reported an error.
    TransportFailure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_one_to_one() {
        assert_eq!(Error::Interface(()).kind(), ErrorKind::TransportFailure);
        assert_eq!(Error::<()>::InvalidIdentity(0x00).kind(), ErrorKind::InvalidIdentity);
        assert_eq!(Error::<()>::SelfTestFailed.kind(), ErrorKind::SelfTestFailed);
        assert_eq!(Error::<()>::NotInitialized.kind(), ErrorKind::NotInitialized);
    }

    #[test]
    fn bus_errors_lift_into_interface_variant() {
        let err: Error<u8> = 7u8.into();
        assert_eq!(err, Error::Interface(7));
    }
}
