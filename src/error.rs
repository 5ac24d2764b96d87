//! Errors that can occur when using the HDC1080 device.
//!
//! This module provides an error type that encapsulates all possible errors that can occur during communication with the HDC1080.
//! It is generic over the underlying I2C error type.

use crate::register::InvalidRegisterField;

/// This represents all possible errors that can occur when using the HDC1080 device.
#[derive(Debug)]
pub enum Hdc1080Error<BusError> {
    /// An error has occurred in the I2C driver
    ///
    /// The driver does not retry or subdivide bus failures further; any
    /// NACK/timeout distinction belongs to the transport layer.
    Bus(BusError),

    /// Reading from a register returned a reserved bit pattern. This should not happen in normal circumstances.
    ///
    /// Could possibly indicate a bug in the driver, or less likely, a faulty chip or interference.
    UnexpectedRegisterData(InvalidRegisterField),
}
