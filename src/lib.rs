#![cfg_attr(not(test), no_std)]

pub mod bus;
pub mod config;
pub mod error;
pub mod register;

mod hdc1080;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::config::Configuration;
pub use crate::error::Hdc1080Error;
pub use crate::hdc1080::{
    DEVICE_ID, HDC1080_ADDRESS, Hdc1080, Hdc1080I2c, Hdc1080Result, MANUFACTURER_ID, Measurement,
};
