//! ### CONFIG - Configuration and status (`0x02`, 2 bytes, R/W)
//!
//! Controls measurement resolution, acquisition mode, the heater and soft
//! reset, and reports the supply-voltage status. The bit layout is fixed by
//! the hardware; the field is packed and unpacked explicitly rather than
//! through a memory-layout bitfield.
//!
//! | Bit(s) | Field | Access |
//! |--------|-------|--------|
//! | 15     | software reset (self-clearing) | R/W |
//! | 13     | heater enable | R/W |
//! | 12     | acquisition mode | R/W |
//! | 11     | battery status | R |
//! | 10     | temperature resolution | R/W |
//! | 9:8    | humidity resolution | R/W |
//!
//! ### Default values
//! 0x1000 (combined acquisition, 14-bit temperature and humidity)
//!
//! ### Examples
//! ```rust,no_run
//! # use crate::hdc1080_rs::{Hdc1080, Hdc1080Result};
//! # use crate::hdc1080_rs::bus::Bus;
//! # async fn demo<B: Bus>(mut device: Hdc1080<B, impl embedded_hal_async::delay::DelayNs>)
//! #     -> Hdc1080Result<(), B::Error> {
//! use hdc1080_rs::register::config::Config;
//!
//! // Print the current acquisition mode
//! let fields = device.read::<Config>().await?;
//! println!("{:?}", fields.mode);
//!
//! # Ok(()) }
//! ```

use crate::register::{InvalidRegisterField, Readable, Reg, UnexpectedValue, Writable};

/// Marker type for the CONFIG (0x02) register
///
/// - **Length:** 2 bytes
/// - **Access:** Read/Write
pub struct Config;
impl Reg for Config { const ADDR: u8 = 0x02; }

/// The payload of the CONFIG (0x02) register.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConfigFields {
    /// Requests a device reset when set to [`SoftReset::Reset`].
    ///
    /// The device clears this bit itself once the reset has completed, so a
    /// subsequent read may no longer show it set.
    pub software_reset: SoftReset,
    /// Enables the on-die heater. Only active during measurements.
    pub heater_enabled: bool,
    /// Selects between independent and combined acquisition.
    pub mode: AcquisitionMode,
    /// Supply-voltage status. Read-only on the device; the encoded value is
    /// ignored by the hardware but carried through so read-modify-write
    /// cycles reproduce the register verbatim.
    pub battery_status: BatteryStatus,
    pub temperature_resolution: TemperatureResolution,
    pub humidity_resolution: HumidityResolution,
}

impl Default for ConfigFields {
    /// The power-on register value, 0x1000.
    fn default() -> Self {
        Self {
            software_reset: SoftReset::Normal,
            heater_enabled: false,
            mode: AcquisitionMode::Combined,
            battery_status: BatteryStatus::AboveThreshold,
            temperature_resolution: TemperatureResolution::Bits14,
            humidity_resolution: HumidityResolution::Bits14,
        }
    }
}

impl Readable for Config {
    type Out = ConfigFields;

    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        let v = u16::from_be_bytes([b[0], b[1]]);
        Ok(ConfigFields {
            software_reset: SoftReset::from(((v >> 15) & 1) as u8),
            heater_enabled: v & (1 << 13) != 0,
            mode: AcquisitionMode::from(((v >> 12) & 1) as u8),
            battery_status: BatteryStatus::from(((v >> 11) & 1) as u8),
            temperature_resolution: TemperatureResolution::from(((v >> 10) & 1) as u8),
            humidity_resolution: HumidityResolution::try_from(((v >> 8) & 0b11) as u8)
                .map_err(|e| InvalidRegisterField::new(Self::ADDR, e.0, 8))?,
        })
    }
}

impl Writable for Config {
    type In = ConfigFields;

    fn encode(v: &Self::In, out: &mut [u8]) {
        let mut value = 0u16;
        if v.software_reset == SoftReset::Reset {
            value |= 1 << 15;
        }
        if v.heater_enabled {
            value |= 1 << 13;
        }
        let mode: u8 = v.mode.into();
        value |= (mode as u16) << 12;
        let battery: u8 = v.battery_status.into();
        value |= (battery as u16) << 11;
        let tres: u8 = v.temperature_resolution.into();
        value |= (tres as u16) << 10;
        let hres: u8 = v.humidity_resolution.into();
        value |= (hres as u16) << 8;

        out[..2].copy_from_slice(&value.to_be_bytes());
    }
}

/// Soft-reset request state, bit 15 of the CONFIG register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SoftReset {
    /// Normal operation.
    Normal,
    /// Reset requested. The device performs the reset and clears the bit.
    Reset,
}

impl From<u8> for SoftReset {
    fn from(field: u8) -> Self {
        match field {
            0 => SoftReset::Normal,
            _ => SoftReset::Reset,
        }
    }
}

impl Into<u8> for SoftReset {
    fn into(self) -> u8 {
        match self {
            SoftReset::Normal => 0,
            SoftReset::Reset => 1,
        }
    }
}

/// How temperature and humidity conversions are sequenced on the bus.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AcquisitionMode {
    /// Temperature and humidity are acquired through separate
    /// trigger/delay/read cycles and can be measured on their own.
    Independent,
    /// A single trigger on the temperature register converts both
    /// quantities; one 4-byte read returns temperature then humidity.
    Combined,
}

impl From<u8> for AcquisitionMode {
    fn from(field: u8) -> Self {
        match field {
            0 => AcquisitionMode::Independent,
            _ => AcquisitionMode::Combined,
        }
    }
}

impl Into<u8> for AcquisitionMode {
    fn into(self) -> u8 {
        match self {
            AcquisitionMode::Independent => 0,
            AcquisitionMode::Combined => 1,
        }
    }
}

/// Supply-voltage status reported in bit 11 of the CONFIG register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BatteryStatus {
    /// Supply voltage is 2.8 V or above.
    AboveThreshold,
    /// Supply voltage has dropped below 2.8 V.
    BelowThreshold,
}

impl From<u8> for BatteryStatus {
    fn from(field: u8) -> Self {
        match field {
            0 => BatteryStatus::AboveThreshold,
            _ => BatteryStatus::BelowThreshold,
        }
    }
}

impl Into<u8> for BatteryStatus {
    fn into(self) -> u8 {
        match self {
            BatteryStatus::AboveThreshold => 0,
            BatteryStatus::BelowThreshold => 1,
        }
    }
}

/// Temperature conversion resolution, bit 10 of the CONFIG register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TemperatureResolution {
    Bits14,
    Bits11,
}

impl From<u8> for TemperatureResolution {
    fn from(field: u8) -> Self {
        match field {
            0 => TemperatureResolution::Bits14,
            _ => TemperatureResolution::Bits11,
        }
    }
}

impl Into<u8> for TemperatureResolution {
    fn into(self) -> u8 {
        match self {
            TemperatureResolution::Bits14 => 0,
            TemperatureResolution::Bits11 => 1,
        }
    }
}

/// Humidity conversion resolution, bits 9:8 of the CONFIG register.
///
/// The field is two bits wide with three valid codes; 0b11 is reserved and
/// rejected during decode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HumidityResolution {
    Bits14,
    Bits11,
    Bits8,
}

impl TryFrom<u8> for HumidityResolution {
    type Error = UnexpectedValue;
    fn try_from(field: u8) -> Result<Self, Self::Error> {
        match field {
            0b00 => Ok(HumidityResolution::Bits14),
            0b01 => Ok(HumidityResolution::Bits11),
            0b10 => Ok(HumidityResolution::Bits8),
            other => Err(UnexpectedValue(other)),
        }
    }
}

impl Into<u8> for HumidityResolution {
    fn into(self) -> u8 {
        match self {
            HumidityResolution::Bits14 => 0b00,
            HumidityResolution::Bits11 => 0b01,
            HumidityResolution::Bits8 => 0b10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_decode_power_on_default() {
        let reg = Config::decode(&[0x10, 0x00]).unwrap();

        assert_eq!(SoftReset::Normal, reg.software_reset);
        assert!(!reg.heater_enabled);
        assert_eq!(AcquisitionMode::Combined, reg.mode);
        assert_eq!(BatteryStatus::AboveThreshold, reg.battery_status);
        assert_eq!(TemperatureResolution::Bits14, reg.temperature_resolution);
        assert_eq!(HumidityResolution::Bits14, reg.humidity_resolution);
    }

    #[test]
    fn config_decode() {
        // heater on, independent mode, battery low, 11-bit temp, 8-bit hum
        let reg = Config::decode(&[0b0010_1110, 0x00]).unwrap();

        assert!(reg.heater_enabled);
        assert_eq!(AcquisitionMode::Independent, reg.mode);
        assert_eq!(BatteryStatus::BelowThreshold, reg.battery_status);
        assert_eq!(TemperatureResolution::Bits11, reg.temperature_resolution);
        assert_eq!(HumidityResolution::Bits8, reg.humidity_resolution);

        let reg = Config::decode(&[0b1001_0001, 0x00]).unwrap();

        assert_eq!(SoftReset::Reset, reg.software_reset);
        assert_eq!(AcquisitionMode::Combined, reg.mode);
        assert_eq!(HumidityResolution::Bits11, reg.humidity_resolution);
    }

    #[test]
    fn config_decode_reserved_humidity_resolution() {
        let err = Config::decode(&[0b0000_0011, 0x00]).unwrap_err();

        assert_eq!(Config::ADDR, err.register);
        assert_eq!(0b11, err.value);
        assert_eq!(8, err.bit_offset);
    }

    #[test]
    fn config_encode() {
        let mut buffer = [0u8; 2];
        Config::encode(&ConfigFields::default(), &mut buffer);
        assert_eq!([0x10, 0x00], buffer);

        Config::encode(
            &ConfigFields {
                software_reset: SoftReset::Reset,
                heater_enabled: true,
                mode: AcquisitionMode::Independent,
                battery_status: BatteryStatus::BelowThreshold,
                temperature_resolution: TemperatureResolution::Bits11,
                humidity_resolution: HumidityResolution::Bits8,
            },
            &mut buffer,
        );
        assert_eq!([0b1010_1110, 0x00], buffer);
    }

    #[test]
    fn config_round_trip() {
        let fields = ConfigFields {
            software_reset: SoftReset::Normal,
            heater_enabled: true,
            mode: AcquisitionMode::Independent,
            battery_status: BatteryStatus::AboveThreshold,
            temperature_resolution: TemperatureResolution::Bits14,
            humidity_resolution: HumidityResolution::Bits11,
        };

        let mut buffer = [0u8; 2];
        Config::encode(&fields, &mut buffer);

        assert_eq!(fields, Config::decode(&buffer).unwrap());
    }
}
