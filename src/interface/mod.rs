//! Bus interface abstraction for the LIS3DHTR driver.
//!
//! The sensor is reachable over I²C ([`i2c::I2cInterface`]) or four-wire SPI
//! with a dedicated chip-select line ([`spi::SpiInterface`]). Both encode a
//! register access into a [`Frame`] and share the [`Lis3dhtrInterface`]
//! contract, so the driver above them never looks at the transport.

pub mod i2c;
pub mod spi;

/// Direction and size of a single register access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Read this many consecutive registers.
    Read(usize),
    /// Write one byte to the register.
    Write(u8),
}

/// On-wire bytes for one register access plus the number of reply bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    bytes: [u8; 2],
    len: usize,
    reply_len: usize,
}

impl Frame {
    /// Frame that reads `reply_len` bytes after sending `header`.
    pub const fn read(header: u8, reply_len: usize) -> Self {
        Self {
            bytes: [header, 0],
            len: 1,
            reply_len,
        }
    }

    /// Frame that sends `header` followed by `value`, expecting no reply.
    pub const fn write(header: u8, value: u8) -> Self {
        Self {
            bytes: [header, value],
            len: 2,
            reply_len: 0,
        }
    }

    /// Bytes to transmit.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Number of bytes the device sends back.
    pub const fn reply_len(&self) -> usize {
        self.reply_len
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Abstraction over the low-level bus access required by the driver.
///
/// Sealed: the only implementations are [`i2c::I2cInterface`] and
/// [`spi::SpiInterface`].
pub trait Lis3dhtrInterface: sealed::Sealed {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Encodes a register access for this transport.
    fn frame(register: u8, access: Access) -> Frame;

    /// Writes a single register.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Reads consecutive registers starting at `register` into the provided buffer.
    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error>;

    /// Transport-specific setup, run once the device identity is confirmed.
    fn prepare(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read_many(register, &mut value)?;
        Ok(value[0])
    }
}
