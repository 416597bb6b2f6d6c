//! High-level LIS3DHTR device driver implementation.

use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiBus;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::i2c::I2cInterface;
use crate::interface::spi::SpiInterface;
use crate::interface::Lis3dhtrInterface;
use crate::log::{debug, trace, warning};
use crate::params::{DataRate, FullScale, SlaveAddr, SpiMode};
use crate::registers::{CtrlReg1, CtrlReg4, Register, EXPECTED_WHO_AM_I, REG_OUT_X_L, REG_WHO_AM_I};
use crate::sample::{unpack_xyz, Acceleration, RAW_AXIS_BYTES};

/// High-level synchronous driver for the LIS3DHTR accelerometer.
///
/// Instances only exist once the identity check and initial configuration
/// have succeeded; every constructor is all-or-nothing.
pub struct Lis3dhtr<IFACE> {
    interface: IFACE,
    config: Config,
}

impl<IFACE> Lis3dhtr<IFACE> {
    // ==================================================================
    // == Driver Ownership ==============================================
    // ==================================================================
    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> IFACE {
        self.interface
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns the configuration last written to the device.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Full-scale range used to scale samples.
    pub fn full_scale(&self) -> FullScale {
        self.config.full_scale
    }
}

impl<I2C> Lis3dhtr<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I²C Constructors ==============================================
    // ==================================================================
    /// Creates and initializes a driver on the I²C bus.
    pub fn new_i2c(i2c: I2C, address: SlaveAddr, config: Config) -> Result<Self, I2C::Error> {
        Self::new(I2cInterface::new(i2c, address), config)
    }

    /// Releases the driver, returning the I²C bus.
    pub fn release_i2c(self) -> I2C {
        self.release().release()
    }
}

impl<SPI, CS> Lis3dhtr<SpiInterface<SPI, CS>>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    // ==================================================================
    // == SPI Constructors & Protocol Mode ==============================
    // ==================================================================
    /// Creates and initializes a driver on a four-wire SPI bus.
    ///
    /// `cs` should already be driven high; the driver pulls it low around every
    /// register access.
    pub fn new_spi(
        spi: SPI,
        cs: CS,
        config: Config,
    ) -> Result<Self, <SpiInterface<SPI, CS> as Lis3dhtrInterface>::Error> {
        Self::new(SpiInterface::new(spi, cs), config)
    }

    /// Releases the driver, returning the SPI bus and chip-select pin.
    pub fn release_spi(self) -> (SPI, CS) {
        self.release().release()
    }

    /// Sets `CTRL_REG4.SIM`. Only [`SpiMode::FourWire`] is accepted.
    pub fn configure_spi_mode(
        &mut self,
        mode: SpiMode,
    ) -> Result<(), <SpiInterface<SPI, CS> as Lis3dhtrInterface>::Error> {
        if mode == SpiMode::ThreeWire {
            warning!("three-wire SPI is not supported");
            return Err(Error::UnsupportedSpiMode);
        }

        self.modify_ctrl_reg4(|reg| reg.set_spi_mode(mode))?;
        debug!("SPI mode set to four-wire");
        Ok(())
    }
}

impl<IFACE, CommE> Lis3dhtr<IFACE>
where
    IFACE: Lis3dhtrInterface<Error = CommE>,
{
    // ==================================================================
    // == Initialization ================================================
    // ==================================================================
    /// Creates a driver over any supported interface and runs the startup
    /// sequence: identity check, transport setup (four-wire mode on SPI),
    /// power-on, full-scale, then data rate.
    pub fn new(interface: IFACE, config: Config) -> Result<Self, CommE> {
        let mut device = Self { interface, config };
        device.verify_device()?;
        device.interface.prepare()?;
        device.initialize()?;
        Ok(device)
    }

    fn initialize(&mut self) -> Result<(), CommE> {
        let target = self.config;
        self.power_on()?;
        self.configure_full_scale(target.full_scale)?;
        if target.data_rate != DataRate::Hz400 {
            self.configure_data_rate(target.data_rate)?;
        }
        Ok(())
    }

    // ==================================================================
    // == Identification ================================================
    // ==================================================================
    /// Checks `WHO_AM_I` against the expected LIS3DHTR identity.
    pub fn verify_device(&mut self) -> Result<(), CommE> {
        let who_am_i = self.interface.read_register(REG_WHO_AM_I)?;
        if who_am_i != EXPECTED_WHO_AM_I {
            warning!("unexpected WHO_AM_I {=u8:#x}", who_am_i);
            return Err(Error::DeviceIdMismatch(who_am_i));
        }

        debug!("LIS3DHTR detected");
        Ok(())
    }

    // ==================================================================
    // == Power & Measurement Configuration =============================
    // ==================================================================
    /// Starts sampling at the default 400 Hz rate.
    pub fn power_on(&mut self) -> Result<(), CommE> {
        self.configure_data_rate(DataRate::Hz400)
    }

    /// Powers the sensing element down.
    pub fn power_off(&mut self) -> Result<(), CommE> {
        self.configure_data_rate(DataRate::PowerDown)
    }

    /// Updates `CTRL_REG1.ODR`, preserving the other bits of the register.
    pub fn configure_data_rate(&mut self, rate: DataRate) -> Result<(), CommE> {
        self.modify_ctrl_reg1(|reg| reg.set_data_rate(rate))?;
        self.config.data_rate = rate;
        debug!("data rate set to {}", rate);
        Ok(())
    }

    /// Updates `CTRL_REG4.FS`, preserving the other bits of the register.
    ///
    /// The stored range used for scaling only changes once the write went through.
    pub fn configure_full_scale(&mut self, full_scale: FullScale) -> Result<(), CommE> {
        self.modify_ctrl_reg4(|reg| reg.set_full_scale(full_scale))?;
        self.config.full_scale = full_scale;
        debug!("full scale set to {}", full_scale);
        Ok(())
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads a raw acceleration triplet as signed, left-justified codes.
    pub fn read_raw(&mut self) -> Result<[i16; 3], CommE> {
        let mut raw = [0u8; RAW_AXIS_BYTES];
        self.interface.read_many(REG_OUT_X_L, &mut raw)?;
        trace!("axis block {}", raw);
        Ok(unpack_xyz(&raw))
    }

    /// Reads the three axes and scales them to g using the active full-scale range.
    pub fn read(&mut self) -> Result<Acceleration, CommE> {
        let raw = self.read_raw()?;
        Ok(Acceleration::from_raw(raw, self.config.full_scale))
    }

    // ==================================================================
    // == Internal Register Helpers =====================================
    // ==================================================================
    fn modify_ctrl_reg1<F>(&mut self, mutate: F) -> Result<(), CommE>
    where
        F: FnOnce(&mut CtrlReg1),
    {
        let current = self.interface.read_register(CtrlReg1::ADDRESS)?;
        let mut reg = CtrlReg1::from(current);
        mutate(&mut reg);
        self.interface.write_register(CtrlReg1::ADDRESS, u8::from(reg))?;
        Ok(())
    }

    fn modify_ctrl_reg4<F>(&mut self, mutate: F) -> Result<(), CommE>
    where
        F: FnOnce(&mut CtrlReg4),
    {
        let current = self.interface.read_register(CtrlReg4::ADDRESS)?;
        let mut reg = CtrlReg4::from(current);
        mutate(&mut reg);
        self.interface.write_register(CtrlReg4::ADDRESS, u8::from(reg))?;
        Ok(())
    }
}
