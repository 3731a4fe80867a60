use core::fmt::Debug;

use hal::i2cdev::linux::LinuxI2CError;
use thiserror::Error;

/// The bus character device could not be opened. Fatal for the binary.
#[derive(Debug, Error)]
#[error("failed to open I2C bus {path}")]
pub struct OpenError {
    pub path: String,
    #[source]
    pub source: LinuxI2CError,
}

/// Fewer bytes than the output block holds were handed to the decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("Input/output Error: expected {expected} bytes, got {got}")]
pub struct ShortRead {
    pub expected: usize,
    pub got: usize,
}

/// Errors raised by the driver once the bus is open.
#[derive(Debug, Error)]
pub enum Error<E: Debug> {
    #[error("register write failed: {0:?}")]
    Write(E),
    /// The HAL read is all-or-error, so a truncated transfer lands here too.
    #[error("output block read failed: {0:?}")]
    Read(E),
}
