#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod accelerometer;
pub mod config;
pub mod device;
pub mod interface;
pub mod interrupt;
pub mod registers;
pub mod variant;

// Re-export main types
pub use accelerometer::{AccelData, Acceleration, AccelerationG, DataStatus};
pub use config::{
    AxesEnabled, DataRate, HighPassConfig, HighPassCutoff, HighPassMode, LowPassCutoff, Mode,
};
pub use device::Lis331Driver;
pub use interface::{I2cInterface, SpiInterface};
pub use interrupt::{
    InterruptConfig, InterruptLine, InterruptPinConfig, InterruptPinSource, InterruptSource,
};
pub use variant::{FullScaleRange, H3lis331Range, H3lis331dl, Lis331hh, Lis331hhRange, Variant};

/// LIS331 I2C address when the SA0 pin is low (default: 0x18)
///
/// Use [`I2cInterface::default()`] for this configuration.
pub const I2C_ADDRESS_SA0_LOW: u8 = 0x18;

/// LIS331 I2C address when the SA0 pin is high (alternative: 0x19)
///
/// Only used when SA0/SDO is tied high.
/// Use [`I2cInterface::alternative()`] for this configuration.
pub const I2C_ADDRESS_SA0_HIGH: u8 = 0x19;

/// Expected value of the `WHO_AM_I` register (same for LIS331HH and H3LIS331DL)
pub const WHO_AM_I_VALUE: u8 = 0x32;

/// Standard gravity in m/s², used to convert g to SI units
pub const STANDARD_GRAVITY: f32 = 9.806_65;

/// Driver errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Invalid `WHO_AM_I` register value (contains the actual value read)
    InvalidDevice(u8),
    /// Invalid configuration parameter, or a register field holding an
    /// encoding outside its enumeration
    InvalidConfig,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
