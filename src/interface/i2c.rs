//! I²C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::{sealed, Access, Frame, Lis3dhtrInterface};
use crate::params::SlaveAddr;
use crate::registers::I2C_AUTO_INCREMENT_BIT;

/// I²C-based interface implementation for the LIS3DHTR driver.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface talking to the device at the strapped address.
    pub const fn new(i2c: I2C, address: SlaveAddr) -> Self {
        Self {
            i2c,
            address: address.addr(),
        }
    }

    /// Returns the 7-bit device address in use.
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Provides mutable access to the wrapped I²C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I²C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> sealed::Sealed for I2cInterface<I2C> {}

impl<I2C> Lis3dhtrInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn frame(register: u8, access: Access) -> Frame {
        match access {
            // Multi-byte reads need the sub-address MSB to step through registers.
            Access::Read(len) if len > 1 => Frame::read(register | I2C_AUTO_INCREMENT_BIT, len),
            Access::Read(len) => Frame::read(register, len),
            Access::Write(value) => Frame::write(register, value),
        }
    }

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        let frame = Self::frame(register, Access::Write(value));
        self.i2c.write(self.address, frame.bytes())
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        let frame = Self::frame(register, Access::Read(buf.len()));
        self.i2c
            .write_read(self.address, frame.bytes(), &mut buf[..frame.reply_len()])
    }
}
