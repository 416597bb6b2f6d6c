//! SPI interface implementation built on top of `embedded-hal` `SpiBus` and a
//! dedicated chip-select `OutputPin`.
//!
//! The chip-select line is driven low for the duration of every register
//! access and always returned high afterwards, including when the bus
//! transfer fails.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use super::{sealed, Access, Frame, Lis3dhtrInterface};
use crate::params::SpiMode;
use crate::registers::{
    CtrlReg4, Register, SPI_ADDRESS_MASK, SPI_AUTO_INCREMENT_BIT, SPI_READ_BIT,
};

/// Errors raised by the SPI transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiInterfaceError<SpiE, PinE> {
    /// The SPI bus reported a failure.
    Spi(SpiE),
    /// Driving the chip-select line failed.
    ChipSelect(PinE),
}

/// SPI-based interface implementation for the LIS3DHTR driver.
pub struct SpiInterface<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> SpiInterface<SPI, CS> {
    /// Creates a new interface from an SPI bus and the sensor's chip-select pin.
    pub const fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    /// Builds the header byte used to address registers over SPI.
    fn command_byte(register: u8, is_read: bool, auto_increment: bool) -> u8 {
        let mut command = register & SPI_ADDRESS_MASK;
        if is_read {
            command |= SPI_READ_BIT;
        }
        if auto_increment {
            command |= SPI_AUTO_INCREMENT_BIT;
        }
        command
    }

    /// Provides mutable access to the wrapped SPI bus.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the interface and returns the owned SPI bus and chip-select pin.
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> SpiInterface<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    /// Runs `transfer` with the chip selected and deselects it on every exit path.
    ///
    /// A bus failure takes precedence over a failure to release the line.
    fn selected<R, F>(&mut self, transfer: F) -> Result<R, SpiInterfaceError<SPI::Error, CS::Error>>
    where
        F: FnOnce(&mut SPI) -> Result<R, SPI::Error>,
    {
        self.cs.set_low().map_err(SpiInterfaceError::ChipSelect)?;
        let result = transfer(&mut self.spi);
        let released = self.cs.set_high();

        let value = result.map_err(SpiInterfaceError::Spi)?;
        released.map_err(SpiInterfaceError::ChipSelect)?;
        Ok(value)
    }
}

impl<SPI, CS> sealed::Sealed for SpiInterface<SPI, CS> {}

impl<SPI, CS> Lis3dhtrInterface for SpiInterface<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    type Error = SpiInterfaceError<SPI::Error, CS::Error>;

    // Writes leave bit 6 clear; only the multi-byte read needs auto-increment.
    fn frame(register: u8, access: Access) -> Frame {
        match access {
            Access::Read(len) => Frame::read(Self::command_byte(register, true, len > 1), len),
            Access::Write(value) => Frame::write(Self::command_byte(register, false, false), value),
        }
    }

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        let frame = Self::frame(register, Access::Write(value));
        self.selected(|spi| {
            spi.write(frame.bytes())?;
            spi.flush()
        })
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        let frame = Self::frame(register, Access::Read(buf.len()));
        let reply = &mut buf[..frame.reply_len()];
        self.selected(|spi| {
            spi.write(frame.bytes())?;
            spi.read(reply)?;
            spi.flush()
        })
    }

    /// Forces four-wire mode (`CTRL_REG4.SIM` cleared), keeping the other bits.
    fn prepare(&mut self) -> core::result::Result<(), Self::Error> {
        let mut reg = CtrlReg4::from(self.read_register(CtrlReg4::ADDRESS)?);
        reg.set_spi_mode(SpiMode::FourWire);
        self.write_register(CtrlReg4::ADDRESS, u8::from(reg))
    }
}

/// Hand-written `SpiBus` double that checks every transfer against a script.
#[cfg(test)]
pub(crate) mod mock {
    use embedded_hal::spi::{ErrorKind, ErrorType, SpiBus};

    /// One scripted bus operation.
    #[derive(Clone, Copy, Debug)]
    pub(crate) enum Step<'a> {
        /// Expect `write` with exactly these bytes.
        Write(&'a [u8]),
        /// Expect `read` of this length and answer with these bytes.
        Read(&'a [u8]),
        /// Fail the next bus operation.
        Fail,
    }

    pub(crate) struct MockBus<'a> {
        steps: &'a [Step<'a>],
        index: usize,
    }

    impl<'a> MockBus<'a> {
        pub(crate) fn new(steps: &'a [Step<'a>]) -> Self {
            Self { steps, index: 0 }
        }

        fn next(&mut self) -> Step<'a> {
            let step = *self.steps.get(self.index).expect("unexpected SPI operation");
            self.index += 1;
            step
        }
    }

    impl Drop for MockBus<'_> {
        fn drop(&mut self) {
            if !std::thread::panicking() {
                assert_eq!(self.index, self.steps.len(), "not all SPI steps consumed");
            }
        }
    }

    impl ErrorType for MockBus<'_> {
        type Error = ErrorKind;
    }

    impl SpiBus for MockBus<'_> {
        fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
            match self.next() {
                Step::Read(response) => {
                    assert_eq!(words.len(), response.len(), "response length mismatch");
                    words.copy_from_slice(response);
                    Ok(())
                }
                Step::Fail => Err(ErrorKind::Other),
                Step::Write(_) => panic!("expected write, got read"),
            }
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            match self.next() {
                Step::Write(expected) => {
                    assert_eq!(words, expected, "written bytes mismatch");
                    Ok(())
                }
                Step::Fail => Err(ErrorKind::Other),
                Step::Read(_) => panic!("expected read, got write"),
            }
        }

        fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
            panic!("transfer is not used by the driver")
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            panic!("transfer_in_place is not used by the driver")
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }
}
