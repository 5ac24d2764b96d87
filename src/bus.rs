//! Bus abstraction for the HDC1080.
//!
//! The HDC1080 mixes two kinds of transactions: register-addressed reads and
//! writes, and a raw read/write pair used during measurement acquisition
//! (a pointer-only "trigger" write, then a plain read after the conversion
//! delay). The [`Bus`] trait exposes both.

use crate::error::Hdc1080Error;
use crate::register::{Readable, Writable};

/// Largest register payload on the HDC1080. Every register is 16 bits wide.
pub const MAX_REG_BYTES: usize = 2;

pub trait Bus {
    type Error;

    /// Register-addressed read, decoded via the register's typed marker.
    fn read<R: Readable>(
        &mut self,
    ) -> impl Future<Output = Result<R::Out, Hdc1080Error<Self::Error>>>;

    /// Register-addressed write, encoded via the register's typed marker.
    fn write<W: Writable>(
        &mut self,
        v: &W::In,
    ) -> impl Future<Output = Result<(), Hdc1080Error<Self::Error>>>;

    /// Trigger write: points the device at `reg` without a data phase.
    ///
    /// Starts a conversion when `reg` is one of the measurement registers.
    fn trigger(&mut self, reg: u8) -> impl Future<Output = Result<(), Hdc1080Error<Self::Error>>>;

    /// Raw read with no register pointer.
    ///
    /// Fetches conversion results after a trigger write once the conversion
    /// delay has elapsed.
    fn read_data(
        &mut self,
        buf: &mut [u8],
    ) -> impl Future<Output = Result<(), Hdc1080Error<Self::Error>>>;
}

pub struct I2c<I2cType> {
    i2c: I2cType,
    address: u8,
}

impl<I2cType> I2c<I2cType>
where
    I2cType: embedded_hal_async::i2c::I2c,
{
    pub(crate) fn new(i2c: I2cType, address: u8) -> Self {
        Self { i2c, address }
    }
}

impl<I2cType> Bus for I2c<I2cType>
where
    I2cType: embedded_hal_async::i2c::I2c,
{
    type Error = <I2cType as embedded_hal_async::i2c::ErrorType>::Error;

    async fn read<R: Readable>(&mut self) -> Result<R::Out, Hdc1080Error<Self::Error>> {
        let mut buf = [0u8; MAX_REG_BYTES];
        self.i2c
            .write_read(self.address, &[R::ADDR], &mut buf[..R::N])
            .await
            .map_err(Hdc1080Error::Bus)?;

        R::decode(&buf[..R::N]).map_err(Hdc1080Error::UnexpectedRegisterData)
    }

    async fn write<W: Writable>(&mut self, v: &W::In) -> Result<(), Hdc1080Error<Self::Error>> {
        let mut buf = [0u8; MAX_REG_BYTES + 1];
        buf[0] = W::ADDR;
        W::encode(v, &mut buf[1..1 + W::N]);

        self.i2c
            .write(self.address, &buf[..1 + W::N])
            .await
            .map_err(Hdc1080Error::Bus)?;

        Ok(())
    }

    async fn trigger(&mut self, reg: u8) -> Result<(), Hdc1080Error<Self::Error>> {
        self.i2c
            .write(self.address, &[reg])
            .await
            .map_err(Hdc1080Error::Bus)?;

        Ok(())
    }

    async fn read_data(&mut self, buf: &mut [u8]) -> Result<(), Hdc1080Error<Self::Error>> {
        self.i2c
            .read(self.address, buf)
            .await
            .map_err(Hdc1080Error::Bus)?;

        Ok(())
    }
}
