//! Error types for pin operations

use embedded_hal::digital::ErrorKind;

/// Errors produced by digital pin operations
///
/// Invalid direction, value or pull arguments cannot occur; the closed
/// enums in [`crate::digital`] rule them out at the type level. What
/// remains is the one state error a caller can still reach, plus the
/// device driver's transport error passed through unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Pull resistor configuration attempted while the pin is an output
    PullOnOutput,
    /// Device communication failed
    Bus(E),
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Error::Bus(err)
    }
}

impl<E: core::fmt::Debug> embedded_hal::digital::Error for Error<E> {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}
