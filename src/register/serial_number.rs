//! ### SERIAL_ID - Factory-programmed serial number (`0xFB`-`0xFD`, 3 x 2 bytes, R)
//!
//! The serial number is spread across three 16-bit fragment registers:
//! most-significant (`0xFB`), middle (`0xFC`) and least-significant
//! (`0xFD`). [`assemble`] combines them into the 64-bit serial number.
#![doc(alias = "SERIAL_ID")]
use crate::register::{InvalidRegisterField, Readable, Reg};

/// Marker struct for the most-significant serial fragment (0xFB) register
///
/// - **Length:** 2 bytes
/// - **Access:** Read-only
pub struct SerialHigh;
impl Reg for SerialHigh { const ADDR: u8 = 0xFB; }

impl Readable for SerialHigh {
    type Out = u16;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }
}

/// Marker struct for the middle serial fragment (0xFC) register
///
/// - **Length:** 2 bytes
/// - **Access:** Read-only
pub struct SerialMid;
impl Reg for SerialMid { const ADDR: u8 = 0xFC; }

impl Readable for SerialMid {
    type Out = u16;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }
}

/// Marker struct for the least-significant serial fragment (0xFD) register
///
/// - **Length:** 2 bytes
/// - **Access:** Read-only
pub struct SerialLow;
impl Reg for SerialLow { const ADDR: u8 = 0xFD; }

impl Readable for SerialLow {
    type Out = u16;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }
}

/// Assembles the 64-bit serial number from its three register fragments.
///
/// The shift layout is the device's own serial encoding, not a plain
/// big-endian concatenation: the low fragment contributes only its upper
/// nine bits.
pub fn assemble(high: u16, mid: u16, low: u16) -> u64 {
    ((high as u64) << 25) + ((mid as u64) << 9) + ((low as u64) >> 7)
}
