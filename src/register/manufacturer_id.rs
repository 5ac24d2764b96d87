//! ### MANUFACTURER_ID - Manufacturer identification (`0xFE`, 2 bytes, R)
//!
//! Contains the manufacturer identification code, which will always be
//! 0x5449 ("TI") for the HDC1080.
//!
//! ### Default values
//! 0x5449
#![doc(alias = "MANUFACTURER_ID")]
use crate::register::{InvalidRegisterField, Readable, Reg};

/// Marker struct for the MANUFACTURER_ID (0xFE) register
///
/// - **Length:** 2 bytes
/// - **Access:** Read-only
pub struct ManufacturerId;
impl Reg for ManufacturerId { const ADDR: u8 = 0xFE; }

impl Readable for ManufacturerId {
    type Out = u16;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }
}
