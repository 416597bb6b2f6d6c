#![no_std]

#[cfg(test)]
extern crate std;

mod error;

pub mod accelerometer;
pub mod config;
pub mod device;
pub mod interface;
mod log;
pub mod params;
pub mod registers;
pub mod sample;

pub use crate::accelerometer::Accelerometer;
pub use crate::device::Lis3dhtr;
pub use crate::error::{Error, Result};
pub use crate::sample::Acceleration;
