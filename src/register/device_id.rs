//! ### DEVICE_ID - Device identification (`0xFF`, 2 bytes, R)
//!
//! Contains the device identification code, which will always be 0x1050
//! for the HDC1080.
//!
//! ### Default values
//! 0x1050
#![doc(alias = "DEVICE_ID")]
use crate::register::{InvalidRegisterField, Readable, Reg};

/// Marker struct for the DEVICE_ID (0xFF) register
///
/// - **Length:** 2 bytes
/// - **Access:** Read-only
pub struct DeviceId;
impl Reg for DeviceId { const ADDR: u8 = 0xFF; }

impl Readable for DeviceId {
    type Out = u16;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }
}
