//! Transport-agnostic sampling capability.

use crate::device::Lis3dhtr;
use crate::error::Error;
use crate::interface::Lis3dhtrInterface;
use crate::sample::Acceleration;

/// Anything that can produce the next calibrated acceleration sample.
///
/// Implemented for [`Lis3dhtr`] over both the I²C and SPI interfaces, so
/// polling code can stay generic over the bus:
///
/// ```rust,ignore
/// fn poll<A: Accelerometer>(sensor: &mut A) -> Result<f32, A::Error> {
///     Ok(sensor.read()?.z)
/// }
/// ```
pub trait Accelerometer {
    /// Error produced when a sample cannot be taken.
    type Error;

    /// Reads the current acceleration in g.
    fn read(&mut self) -> Result<Acceleration, Self::Error>;
}

impl<IFACE> Accelerometer for Lis3dhtr<IFACE>
where
    IFACE: Lis3dhtrInterface,
{
    type Error = Error<IFACE::Error>;

    fn read(&mut self) -> Result<Acceleration, Self::Error> {
        Lis3dhtr::read(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Accelerometer;
    use crate::config::Config;
    use crate::device::Lis3dhtr;
    use crate::interface::spi::mock::{MockBus, Step};
    use crate::params::SlaveAddr;
    use embedded_hal_mock::eh1::digital::Mock as PinMock;
    use embedded_hal_mock::eh1::digital::{State as PinState, Transaction as PinTransaction};
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    use std::vec;
    use std::vec::Vec;

    fn z_axis<A: Accelerometer>(sensor: &mut A) -> Result<f32, A::Error> {
        Ok(sensor.read()?.z)
    }

    #[test]
    fn i2c_driver_satisfies_capability() {
        let expectations = [
            I2cTransaction::write_read(0x19, vec![0x0F], vec![0x33]),
            I2cTransaction::write_read(0x19, vec![0x20], vec![0x07]),
            I2cTransaction::write(0x19, vec![0x20, 0x77]),
            I2cTransaction::write_read(0x19, vec![0x23], vec![0x00]),
            I2cTransaction::write(0x19, vec![0x23, 0x00]),
            I2cTransaction::write_read(0x19, vec![0xA8], vec![0, 0, 0, 0, 0xFF, 0x7F]),
        ];
        let mut i2c = I2cMock::new(&expectations);

        let mut sensor = Lis3dhtr::new_i2c(i2c.clone(), SlaveAddr::High, Config::default()).unwrap();
        assert_eq!(z_axis(&mut sensor).unwrap(), 2.0);

        i2c.done();
    }

    #[test]
    fn spi_driver_satisfies_capability() {
        let steps = [
            Step::Write(&[0x8F]),
            Step::Read(&[0x33]),
            Step::Write(&[0xA3]),
            Step::Read(&[0x00]),
            Step::Write(&[0x23, 0x00]),
            Step::Write(&[0xA0]),
            Step::Read(&[0x07]),
            Step::Write(&[0x20, 0x77]),
            Step::Write(&[0xA3]),
            Step::Read(&[0x00]),
            Step::Write(&[0x23, 0x00]),
            Step::Write(&[0xE8]),
            Step::Read(&[0, 0, 0, 0, 0x00, 0x80]),
        ];
        let pin_expectations: Vec<PinTransaction> = (0..8)
            .flat_map(|_| {
                [
                    PinTransaction::set(PinState::Low),
                    PinTransaction::set(PinState::High),
                ]
            })
            .collect();
        let mut cs = PinMock::new(&pin_expectations);

        let mut sensor =
            Lis3dhtr::new_spi(MockBus::new(&steps), cs.clone(), Config::default()).unwrap();
        assert_eq!(z_axis(&mut sensor).unwrap(), -2.0);

        drop(sensor);
        cs.done();
    }
}
