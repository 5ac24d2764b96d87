//! ### TEMPERATURE - Temperature measurement result (`0x00`, 2 bytes, R)
//!
//! Holds the most recent raw temperature conversion, most-significant byte
//! first. The register is only valid after a trigger write to this address
//! followed by the full conversion delay, so the driver fetches it with a
//! trigger/delay/raw-read cycle rather than a register-addressed read.
//!
//! See [`Hdc1080::measure()`](crate::Hdc1080::measure) and
//! [`Hdc1080::measure_temperature()`](crate::Hdc1080::measure_temperature).
#![doc(alias = "TEMPERATURE")]
use crate::register::{InvalidRegisterField, Readable, Reg};

/// Marker struct for the TEMPERATURE (0x00) register
///
/// - **Length:** 2 bytes
/// - **Access:** Read-only
pub struct Temperature;
impl Reg for Temperature { const ADDR: u8 = 0x00; }

impl Readable for Temperature {
    type Out = u16;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }
}
