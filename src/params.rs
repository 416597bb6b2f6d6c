//! Strongly typed parameter enumerations for the LIS3DHTR driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Prefer these
//! types over raw integers to keep configuration values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use lis3dhtr::params::{DataRate, FullScale, SlaveAddr};
//!
//! let rate = DataRate::Hz400;
//! let scale = FullScale::G4;
//! assert_eq!(scale.limit_g(), 4.0);
//! assert_eq!(SlaveAddr::default().addr(), 0x18);
//! let _ = rate;
//! ```

use modular_bitfield::prelude::Specifier;

/// Output data rate selections encoded in `CTRL_REG1[7:4]`.
///
/// `PowerDown` stops the sensing element; every other mode samples continuously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 4]
pub enum DataRate {
    /// Mode 0: power-down.
    PowerDown = 0b0000,
    /// Mode 1: 1 Hz.
    Hz1 = 0b0001,
    /// Mode 2: 10 Hz.
    Hz10 = 0b0010,
    /// Mode 3: 25 Hz.
    Hz25 = 0b0011,
    /// Mode 4: 50 Hz.
    Hz50 = 0b0100,
    /// Mode 5: 100 Hz.
    Hz100 = 0b0101,
    /// Mode 6: 200 Hz.
    Hz200 = 0b0110,
    /// Mode 7: 400 Hz, the rate selected by `power_on`.
    Hz400 = 0b0111,
    /// Mode 8: 1.6 kHz, low-power mode only.
    LowPowerHz1600 = 0b1000,
    /// Mode 9: 1.344 kHz in normal/high-resolution mode, 5.376 kHz in low-power mode.
    Hz1344LowPowerHz5376 = 0b1001,
}

impl DataRate {
    /// Returns the nominal rate in hertz for normal/high-resolution operation.
    ///
    /// Mode 8 only exists in low-power mode, so its low-power rate is reported.
    pub const fn hz(self) -> u32 {
        match self {
            Self::PowerDown => 0,
            Self::Hz1 => 1,
            Self::Hz10 => 10,
            Self::Hz25 => 25,
            Self::Hz50 => 50,
            Self::Hz100 => 100,
            Self::Hz200 => 200,
            Self::Hz400 => 400,
            Self::LowPowerHz1600 => 1_600,
            Self::Hz1344LowPowerHz5376 => 1_344,
        }
    }

    /// Raw 4-bit register code.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Full-scale selections encoded in `CTRL_REG4[5:4]`.
///
/// Larger ranges trade resolution for headroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum FullScale {
    /// ±2 g.
    G2 = 0b00,
    /// ±4 g.
    G4 = 0b01,
    /// ±8 g.
    G8 = 0b10,
    /// ±16 g.
    G16 = 0b11,
}

impl FullScale {
    /// Raw 2-bit register code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Output limit in g, `2^(code + 1)`.
    pub fn limit_g(self) -> f32 {
        (1u8 << (self.code() + 1)) as f32
    }
}

/// SPI serial interface mode, `CTRL_REG4.SIM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum SpiMode {
    /// Four-wire, full duplex (reset default).
    FourWire = 0,
    /// Three-wire, half duplex. Not supported by the driver's framing.
    ThreeWire = 1,
}

/// 7-bit I²C address selected by the SDO/SA0 strap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlaveAddr {
    /// SDO/SA0 tied to ground: `0x18`.
    #[default]
    Low,
    /// SDO/SA0 tied to supply: `0x19`.
    High,
}

impl SlaveAddr {
    /// Returns the 7-bit bus address.
    pub const fn addr(self) -> u8 {
        match self {
            Self::Low => 0b0001_1000,
            Self::High => 0b0001_1001,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_scale_limits_are_powers_of_two() {
        assert_eq!(FullScale::G2.limit_g(), 2.0);
        assert_eq!(FullScale::G4.limit_g(), 4.0);
        assert_eq!(FullScale::G8.limit_g(), 8.0);
        assert_eq!(FullScale::G16.limit_g(), 16.0);
    }

    #[test]
    fn data_rate_codes_follow_mode_numbers() {
        assert_eq!(DataRate::PowerDown.code(), 0);
        assert_eq!(DataRate::Hz400.code(), 7);
        assert_eq!(DataRate::Hz1344LowPowerHz5376.code(), 9);
        assert_eq!(DataRate::Hz400.hz(), 400);
    }

    #[test]
    fn strap_addresses() {
        assert_eq!(SlaveAddr::Low.addr(), 0x18);
        assert_eq!(SlaveAddr::High.addr(), 0x19);
    }
}
