use crate::bus::{Bus, I2c};
use crate::config::Configuration;
use crate::register::config::{
    AcquisitionMode, BatteryStatus, Config, HumidityResolution, SoftReset, TemperatureResolution,
};
use crate::register::{Readable, Reg, Writable, device_id, humidity, manufacturer_id, serial_number, temperature};
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::SevenBitAddress;

use crate::error::Hdc1080Error;

/// Type alias for an Hdc1080 driver communicating over I2C
pub type Hdc1080I2c<T, D> = Hdc1080<I2c<T>, D>;

/// Fixed I2C bus address of the HDC1080. The device has no address pins.
pub const HDC1080_ADDRESS: SevenBitAddress = 0x40;

/// Manufacturer identification code ("TI") stored in register 0xFE.
pub const MANUFACTURER_ID: u16 = 0x5449;

/// Device identification code stored in register 0xFF.
pub const DEVICE_ID: u16 = 0x1050;

/// Conversion time in milliseconds for one trigger/read cycle.
///
/// This is the device's required conversion time, not a minimum; the result
/// registers are undefined until it has elapsed.
const CONVERSION_DELAY_MS: u32 = 20;

/// Type alias used to simplify return types throughout the driver
pub type Hdc1080Result<T, BusError> = Result<T, Hdc1080Error<BusError>>;

/// Main Hdc1080 driver struct
///
/// Owns the bus and the delay capability; no register state is cached
/// between calls. Every setter performs a full read-modify-write of the
/// 16-bit CONFIG register, since the hardware has no partial-field writes.
pub struct Hdc1080<B, D> {
    bus: B,
    delay: D,
}

impl<T, D> Hdc1080I2c<T, D>
where
    T: embedded_hal_async::i2c::I2c,
    I2c<T>: Bus,
    D: DelayNs,
{
    /// Constructs a new Hdc1080 driver instance that communicates over I2C.
    ///
    /// Applies the given configuration in a single read-modify-write of the
    /// CONFIG register. No identity probe is performed; callers that want a
    /// boot-time sanity check can use [`Hdc1080::is_connected`].
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use embedded_hal_async::delay::DelayNs;
    /// # use embedded_hal_async::i2c::I2c;
    /// # use hdc1080_rs::Hdc1080Result;
    ///  use hdc1080_rs::{Configuration, Hdc1080};
    ///  use hdc1080_rs::register::config::AcquisitionMode;
    /// # async fn demo<I: I2c, D: DelayNs>(i2c: I, delay: D) -> Hdc1080Result<(), I::Error> {
    ///
    ///  let mut device = Hdc1080::new_i2c(
    ///     i2c,
    ///     Configuration::default().acquisition_mode(AcquisitionMode::Combined),
    ///     delay,
    ///  ).await?;
    ///
    ///  let measurement = device.measure().await?;
    /// # Ok(())
    /// # }
    pub async fn new_i2c(
        i2c: T,
        config: Configuration,
        delay: D,
    ) -> Hdc1080Result<Self, <I2c<T> as Bus>::Error> {
        Self::new(I2c::new(i2c, HDC1080_ADDRESS), config, delay).await
    }
}

impl<B, D> Hdc1080<B, D>
where
    B: Bus,
    D: DelayNs,
{
    /// Creates a new instance of the Hdc1080 driver struct with the given configuration.
    pub(crate) async fn new(bus: B, config: Configuration, delay: D) -> Hdc1080Result<Self, B::Error> {
        let mut device = Hdc1080 { bus, delay };

        device.apply_configuration(&config).await?;

        Ok(device)
    }

    /// Applies the given configuration to the CONFIG register.
    ///
    /// Mode, both resolutions and the heater bit are updated together in one
    /// read-modify-write transaction, so no torn intermediate state is ever
    /// written to the device.
    pub async fn apply_configuration(&mut self, config: &Configuration) -> Hdc1080Result<(), B::Error> {
        let mut fields = self.bus.read::<Config>().await?;

        fields.mode = config.mode;
        fields.temperature_resolution = config.temperature_resolution;
        fields.humidity_resolution = config.humidity_resolution;
        fields.heater_enabled = config.heater_enabled;

        self.bus.write::<Config>(&fields).await
    }

    /// Read a register using a **typed marker**.
    ///
    /// This is the low-level, register-accurate entry point. You pass a
    /// marker type from [`crate::register`] (e.g.
    /// `register::config::Config`) and get back its decoded value
    /// (`R::Out`). The transfer length and address come from `R::N` and
    /// `R::ADDR`.
    ///
    /// Note that the measurement result registers
    /// ([`temperature::Temperature`] and [`humidity::Humidity`]) are only
    /// valid after a conversion; use [`measure`](Self::measure) and friends
    /// for those, which run the full trigger/delay/read protocol.
    pub async fn read<R: Readable>(&mut self) -> Hdc1080Result<R::Out, B::Error> {
        self.bus.read::<R>().await
    }

    /// Write a register using a **typed marker**.
    ///
    /// This performs a **direct write** of the provided fields. To preserve
    /// unrelated bits, prefer the convenience setters, which read-modify-write.
    pub async fn write<W: Writable>(&mut self, v: &W::In) -> Hdc1080Result<(), B::Error> {
        self.bus.write::<W>(v).await
    }

    /// Reads the current acquisition mode from the CONFIG (0x02) register.
    pub async fn mode(&mut self) -> Hdc1080Result<AcquisitionMode, B::Error> {
        Ok(self.bus.read::<Config>().await?.mode)
    }

    /// Sets the acquisition mode in the CONFIG (0x02) register.
    pub async fn set_mode(&mut self, mode: AcquisitionMode) -> Hdc1080Result<(), B::Error> {
        let mut cfg = self.bus.read::<Config>().await?;
        cfg.mode = mode;
        self.bus.write::<Config>(&cfg).await
    }

    /// Reads the heater enable bit from the CONFIG (0x02) register.
    pub async fn heater_enabled(&mut self) -> Hdc1080Result<bool, B::Error> {
        Ok(self.bus.read::<Config>().await?.heater_enabled)
    }

    /// Enables or disables the on-die heater.
    pub async fn set_heater(&mut self, enable: bool) -> Hdc1080Result<(), B::Error> {
        let mut cfg = self.bus.read::<Config>().await?;
        cfg.heater_enabled = enable;
        self.bus.write::<Config>(&cfg).await
    }

    /// Reads the supply-voltage status bit from the CONFIG (0x02) register.
    pub async fn battery_status(&mut self) -> Hdc1080Result<BatteryStatus, B::Error> {
        Ok(self.bus.read::<Config>().await?.battery_status)
    }

    /// Reads the current measurement resolutions from the CONFIG (0x02) register.
    pub async fn resolution(
        &mut self,
    ) -> Hdc1080Result<(TemperatureResolution, HumidityResolution), B::Error> {
        let cfg = self.bus.read::<Config>().await?;

        Ok((cfg.temperature_resolution, cfg.humidity_resolution))
    }

    /// Sets the temperature and humidity resolutions.
    ///
    /// Both fields are updated in a single register write.
    pub async fn set_resolution(
        &mut self,
        temperature: TemperatureResolution,
        humidity: HumidityResolution,
    ) -> Hdc1080Result<(), B::Error> {
        let mut cfg = self.bus.read::<Config>().await?;
        cfg.temperature_resolution = temperature;
        cfg.humidity_resolution = humidity;
        self.bus.write::<Config>(&cfg).await
    }

    /// Sets or clears the soft-reset bit in the CONFIG (0x02) register.
    ///
    /// After a reset request the device performs the reset and clears the
    /// bit itself, so a subsequent read may already show
    /// [`SoftReset::Normal`] again.
    pub async fn soft_reset(&mut self, request: SoftReset) -> Hdc1080Result<(), B::Error> {
        let mut cfg = self.bus.read::<Config>().await?;
        cfg.software_reset = request;
        self.bus.write::<Config>(&cfg).await
    }

    /// Reads the manufacturer identification code from register 0xFE.
    pub async fn manufacturer_id(&mut self) -> Hdc1080Result<u16, B::Error> {
        self.bus.read::<manufacturer_id::ManufacturerId>().await
    }

    /// Reads the device identification code from register 0xFF.
    pub async fn device_id(&mut self) -> Hdc1080Result<u16, B::Error> {
        self.bus.read::<device_id::DeviceId>().await
    }

    /// Determines if an HDC1080 is connected by comparing both identification
    /// registers against their fixed values (0x5449 / 0x1050).
    pub async fn is_connected(&mut self) -> Hdc1080Result<bool, B::Error> {
        Ok(self.manufacturer_id().await? == MANUFACTURER_ID
            && self.device_id().await? == DEVICE_ID)
    }

    /// Reads the factory-programmed 64-bit serial number.
    ///
    /// The three fragment registers are read most-significant first and the
    /// operation aborts on the first failed read.
    pub async fn serial_number(&mut self) -> Hdc1080Result<u64, B::Error> {
        let high = self.bus.read::<serial_number::SerialHigh>().await?;
        let mid = self.bus.read::<serial_number::SerialMid>().await?;
        let low = self.bus.read::<serial_number::SerialLow>().await?;

        Ok(serial_number::assemble(high, mid, low))
    }

    /// Acquires one temperature and humidity measurement.
    ///
    /// The protocol is selected by the acquisition mode currently configured
    /// on the device:
    /// - [`AcquisitionMode::Independent`]: two trigger/delay/read cycles,
    ///   one per quantity.
    /// - [`AcquisitionMode::Combined`]: one trigger on the temperature
    ///   register, one conversion delay, one 4-byte read returning both.
    ///
    /// Each call is a complete, self-contained protocol run; nothing is
    /// cached between calls. On any bus failure the error is returned and no
    /// measurement value is produced.
    pub async fn measure(&mut self) -> Hdc1080Result<Measurement, B::Error> {
        match self.mode().await? {
            AcquisitionMode::Independent => {
                let temperature_raw = self.acquire(temperature::Temperature::ADDR).await?;
                let humidity_raw = self.acquire(humidity::Humidity::ADDR).await?;

                Ok(Measurement::from_raw(temperature_raw, humidity_raw))
            }
            AcquisitionMode::Combined => self.acquire_combined().await,
        }
    }

    /// Acquires a temperature measurement in degrees Celsius.
    ///
    /// In independent mode only the temperature sub-protocol runs; no
    /// humidity-register transaction is issued. In combined mode the device
    /// always converts both quantities, so the combined cycle runs and the
    /// humidity result is discarded.
    pub async fn measure_temperature(&mut self) -> Hdc1080Result<f32, B::Error> {
        match self.mode().await? {
            AcquisitionMode::Independent => {
                let raw = self.acquire(temperature::Temperature::ADDR).await?;

                Ok(temperature_celsius(raw))
            }
            AcquisitionMode::Combined => Ok(self.acquire_combined().await?.temperature_celsius),
        }
    }

    /// Acquires a relative-humidity measurement as a 0.0..1.0 fraction.
    ///
    /// In independent mode only the humidity sub-protocol runs. In combined
    /// mode the combined cycle runs and the temperature result is discarded.
    pub async fn measure_humidity(&mut self) -> Hdc1080Result<f32, B::Error> {
        match self.mode().await? {
            AcquisitionMode::Independent => {
                let raw = self.acquire(humidity::Humidity::ADDR).await?;

                Ok(humidity_fraction(raw))
            }
            AcquisitionMode::Combined => Ok(self.acquire_combined().await?.relative_humidity),
        }
    }

    /// One independent-mode cycle: trigger `reg`, wait out the conversion,
    /// read the 2-byte result from the bus (no register pointer).
    async fn acquire(&mut self, reg: u8) -> Hdc1080Result<u16, B::Error> {
        self.bus.trigger(reg).await?;
        self.delay.delay_ms(CONVERSION_DELAY_MS).await;

        let mut buf = [0u8; 2];
        self.bus.read_data(&mut buf).await?;

        Ok(u16::from_be_bytes(buf))
    }

    /// Combined-mode cycle: a single trigger on the temperature register
    /// converts both quantities; the 4-byte read returns temperature in
    /// bytes 0-1 and humidity in bytes 2-3.
    async fn acquire_combined(&mut self) -> Hdc1080Result<Measurement, B::Error> {
        self.bus.trigger(temperature::Temperature::ADDR).await?;
        self.delay.delay_ms(CONVERSION_DELAY_MS).await;

        let mut buf = [0u8; 4];
        self.bus.read_data(&mut buf).await?;

        Ok(Measurement::from_raw(
            u16::from_be_bytes([buf[0], buf[1]]),
            u16::from_be_bytes([buf[2], buf[3]]),
        ))
    }
}

/// Holds one acquisition result: the raw register contents and the converted
/// physical values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Measurement {
    pub temperature_raw: u16,
    pub humidity_raw: u16,
    /// Temperature in degrees Celsius.
    pub temperature_celsius: f32,
    /// Relative humidity as a 0.0..1.0 fraction.
    pub relative_humidity: f32,
}

impl Measurement {
    fn from_raw(temperature_raw: u16, humidity_raw: u16) -> Self {
        Self {
            temperature_raw,
            humidity_raw,
            temperature_celsius: temperature_celsius(temperature_raw),
            relative_humidity: humidity_fraction(humidity_raw),
        }
    }
}

/// Converts a raw temperature register value to degrees Celsius.
fn temperature_celsius(raw: u16) -> f32 {
    (raw as f32 / 65536.0) * 165.0 - 40.0
}

/// Converts a raw humidity register value to a 0.0..1.0 fraction.
fn humidity_fraction(raw: u16) -> f32 {
    raw as f32 / 65536.0
}
