use crate::register::config::{AcquisitionMode, HumidityResolution, TemperatureResolution};

/// Driver configuration applied to the CONFIG register at construction.
///
/// The default matches the device's power-on state: combined acquisition,
/// 14-bit resolution for both quantities and the heater off.
pub struct Configuration {
    pub(crate) mode: AcquisitionMode,
    pub(crate) temperature_resolution: TemperatureResolution,
    pub(crate) humidity_resolution: HumidityResolution,
    pub(crate) heater_enabled: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            mode: AcquisitionMode::Combined,
            temperature_resolution: TemperatureResolution::Bits14,
            humidity_resolution: HumidityResolution::Bits14,
            heater_enabled: false,
        }
    }
}

impl Configuration {
    pub fn acquisition_mode(mut self, mode: AcquisitionMode) -> Self {
        self.mode = mode;

        self
    }

    pub fn temperature_resolution(mut self, resolution: TemperatureResolution) -> Self {
        self.temperature_resolution = resolution;

        self
    }

    pub fn humidity_resolution(mut self, resolution: HumidityResolution) -> Self {
        self.humidity_resolution = resolution;

        self
    }

    /// Enables the on-die heater. The heater only draws current while a
    /// measurement is running and is meant to drive off condensation.
    pub fn enable_heater(mut self, enable: bool) -> Self {
        self.heater_enabled = enable;

        self
    }
}
