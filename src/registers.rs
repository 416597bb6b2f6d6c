//! Register map definitions for the LIS3DHTR accelerometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{DataRate, FullScale, SpiMode};

/// Register address of `WHO_AM_I`.
pub const REG_WHO_AM_I: u8 = 0x0F;
/// Register address of `CTRL_REG1` (data rate, low-power, axis enables).
pub const REG_CTRL_REG1: u8 = 0x20;
/// Register address of `CTRL_REG4` (BDU, endianness, full scale, SPI mode).
pub const REG_CTRL_REG4: u8 = 0x23;
/// Register address of `OUT_X_L`, first byte of the axis block.
pub const REG_OUT_X_L: u8 = 0x28;
/// Register address of `OUT_X_H`.
pub const REG_OUT_X_H: u8 = 0x29;
/// Register address of `OUT_Y_L`.
pub const REG_OUT_Y_L: u8 = 0x2A;
/// Register address of `OUT_Y_H`.
pub const REG_OUT_Y_H: u8 = 0x2B;
/// Register address of `OUT_Z_L`.
pub const REG_OUT_Z_L: u8 = 0x2C;
/// Register address of `OUT_Z_H`.
pub const REG_OUT_Z_H: u8 = 0x2D;

/// Value `WHO_AM_I` must report.
pub const EXPECTED_WHO_AM_I: u8 = 0x33;

/// SPI header bit 7: read when set, write when clear.
pub const SPI_READ_BIT: u8 = 1 << 7;
/// SPI header bit 6: auto-increment the register address.
pub const SPI_AUTO_INCREMENT_BIT: u8 = 1 << 6;
/// SPI header bits 5:0 carry the register address.
pub const SPI_ADDRESS_MASK: u8 = 0x3F;
/// I²C sub-address bit 7: auto-increment the register address.
pub const I2C_AUTO_INCREMENT_BIT: u8 = 1 << 7;

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Reset value defined by the datasheet.
    const RESET_VALUE: u8;
}

/// Bitfield representation of `CTRL_REG1` (address `0x20`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg1 {
    // X-axis enable (bit 0).
    pub x_enable: bool,
    // Y-axis enable (bit 1).
    pub y_enable: bool,
    // Z-axis enable (bit 2).
    pub z_enable: bool,
    // Low-power mode enable (bit 3).
    pub low_power: bool,
    // Output data rate selection (bits 7:4).
    pub data_rate: DataRate,
}

impl From<u8> for CtrlReg1 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<CtrlReg1> for u8 {
    fn from(value: CtrlReg1) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `CTRL_REG4` (address `0x23`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg4 {
    // SPI serial interface mode (bit 0).
    pub spi_mode: SpiMode,
    // Self-test selection (bits 2:1).
    pub self_test: B2,
    // High-resolution output enable (bit 3).
    pub high_resolution: bool,
    // Full-scale selection (bits 5:4).
    pub full_scale: FullScale,
    // Big/little endian data selection (bit 6).
    pub big_endian: bool,
    // Block data update (bit 7).
    pub block_data_update: bool,
}

impl From<u8> for CtrlReg4 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<CtrlReg4> for u8 {
    fn from(value: CtrlReg4) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for CtrlReg1 {
    const ADDRESS: u8 = REG_CTRL_REG1;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: u8 = 0x07;
}

impl Register for CtrlReg4 {
    const ADDRESS: u8 = REG_CTRL_REG4;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: u8 = 0x00;
}
