//! Configuration primitives for the LIS3DHTR driver.

use crate::params::{DataRate, FullScale};

/// User-facing configuration for the LIS3DHTR sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Full-scale range used to scale every sample.
    pub full_scale: FullScale,
    /// Output data rate applied after power-on.
    pub data_rate: DataRate,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the full-scale range.
    pub fn full_scale(mut self, full_scale: FullScale) -> Self {
        self.config.full_scale = full_scale;
        self
    }

    /// Overrides the output data rate.
    pub fn data_rate(mut self, data_rate: DataRate) -> Self {
        self.config.data_rate = data_rate;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            full_scale: FullScale::G2,
            data_rate: DataRate::Hz400,
        }
    }
}
