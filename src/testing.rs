use crate::bus::{Bus, MAX_REG_BYTES};
use crate::error::Hdc1080Error;
use crate::register::{Readable, Writable};
use embedded_hal_async::delay::DelayNs;
use heapless::{LinearMap, Vec};

/// One scripted raw-read frame, returned by [`FakeBus::read_data`] in
/// script order. Independent-mode cycles consume 2-byte frames, the
/// combined cycle a 4-byte frame.
#[derive(Debug)]
struct DataFrame {
    bytes: [u8; 4],
    len: usize,
}

/// In-memory register file standing in for the I2C transport.
///
/// Writes are applied to the register store so later reads observe them,
/// and every transaction is journaled so tests can assert on exact bus
/// traffic.
pub struct FakeBus<const N: usize> {
    regs: LinearMap<u8, [u8; MAX_REG_BYTES], N>,
    frames: Vec<DataFrame, 4>,
    next_frame: usize,
    fail_register: Option<u8>,
    fail_trigger: bool,
    fail_read_data: bool,
    pub reads: Vec<u8, 8>,
    pub writes: Vec<(u8, [u8; MAX_REG_BYTES]), 8>,
    pub triggers: Vec<u8, 8>,
}

pub struct FakeDelay {}

impl DelayNs for FakeDelay {
    async fn delay_ns(&mut self, _: u32) {}
}

impl<const N: usize> FakeBus<N> {
    pub fn new() -> Self {
        FakeBus {
            regs: LinearMap::new(),
            frames: Vec::new(),
            next_frame: 0,
            fail_register: None,
            fail_trigger: false,
            fail_read_data: false,
            reads: Vec::new(),
            writes: Vec::new(),
            triggers: Vec::new(),
        }
    }

    pub fn with_response<R: Readable>(&mut self, data: &[u8; MAX_REG_BYTES]) {
        self.regs.insert(R::ADDR, *data).unwrap();
    }

    pub fn with_data_frame(&mut self, data: &[u8]) {
        let mut bytes = [0u8; 4];
        bytes[..data.len()].copy_from_slice(data);
        self.frames.push(DataFrame { bytes, len: data.len() }).unwrap();
    }

    /// Makes every transaction addressed at `reg` fail with a bus error.
    pub fn fail_reads_of(&mut self, reg: u8) {
        self.fail_register = Some(reg);
    }

    pub fn fail_triggers(&mut self) {
        self.fail_trigger = true;
    }

    pub fn fail_data_reads(&mut self) {
        self.fail_read_data = true;
    }

    pub fn register_value(&self, reg: u8) -> u16 {
        let bytes = self
            .regs
            .get(&reg)
            .unwrap_or_else(|| panic!("no value stored for register 0x{reg:02X}"));

        u16::from_be_bytes(*bytes)
    }

    pub fn frames_consumed(&self) -> usize {
        self.next_frame
    }
}

impl<const N: usize> Bus for FakeBus<N> {
    type Error = ();

    async fn read<R: Readable>(&mut self) -> Result<R::Out, Hdc1080Error<Self::Error>> {
        self.reads.push(R::ADDR).unwrap();

        if self.fail_register == Some(R::ADDR) {
            return Err(Hdc1080Error::Bus(()));
        }

        match self.regs.get(&R::ADDR) {
            Some(bytes) => R::decode(&bytes[..R::N]).map_err(Hdc1080Error::UnexpectedRegisterData),
            None => panic!("No mocked value for register 0x{:02X}", R::ADDR),
        }
    }

    async fn write<W: Writable>(&mut self, v: &W::In) -> Result<(), Hdc1080Error<Self::Error>> {
        if self.fail_register == Some(W::ADDR) {
            return Err(Hdc1080Error::Bus(()));
        }

        let mut bytes = [0u8; MAX_REG_BYTES];
        W::encode(v, &mut bytes[..W::N]);

        self.writes.push((W::ADDR, bytes)).unwrap();
        self.regs.insert(W::ADDR, bytes).unwrap();

        Ok(())
    }

    async fn trigger(&mut self, reg: u8) -> Result<(), Hdc1080Error<Self::Error>> {
        if self.fail_trigger {
            return Err(Hdc1080Error::Bus(()));
        }

        self.triggers.push(reg).unwrap();

        Ok(())
    }

    async fn read_data(&mut self, buf: &mut [u8]) -> Result<(), Hdc1080Error<Self::Error>> {
        if self.fail_read_data {
            return Err(Hdc1080Error::Bus(()));
        }

        let frame = self
            .frames
            .get(self.next_frame)
            .expect("no scripted data frame left");
        assert_eq!(
            frame.len,
            buf.len(),
            "scripted frame length does not match the requested read"
        );

        buf.copy_from_slice(&frame.bytes[..frame.len]);
        self.next_frame += 1;

        Ok(())
    }
}
