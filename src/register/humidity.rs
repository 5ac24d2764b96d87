//! ### HUMIDITY - Humidity measurement result (`0x01`, 2 bytes, R)
//!
//! Holds the most recent raw humidity conversion, most-significant byte
//! first. Like the temperature register, it must only be read after a
//! trigger write and the full conversion delay.
//!
//! See [`Hdc1080::measure()`](crate::Hdc1080::measure) and
//! [`Hdc1080::measure_humidity()`](crate::Hdc1080::measure_humidity).
#![doc(alias = "HUMIDITY")]
use crate::register::{InvalidRegisterField, Readable, Reg};

/// Marker struct for the HUMIDITY (0x01) register
///
/// - **Length:** 2 bytes
/// - **Access:** Read-only
pub struct Humidity;
impl Reg for Humidity { const ADDR: u8 = 0x01; }

impl Readable for Humidity {
    type Out = u16;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }
}
