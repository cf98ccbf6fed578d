//! Interrupt configuration and management
//!
//! The LIS331 has two interrupt generators, each with its own threshold and
//! duration, and two pads (INT1, INT2). Each pad can carry its own generator,
//! the OR of both generators, data ready or the boot-running flag.
//!
//! # Example
//!
//! ```ignore
//! # use lis331::{Lis331Driver, InterruptConfig, InterruptLine, InterruptPinConfig};
//! # let mut accel: Lis331Driver<_, _> = todo!();
//! // Latch INT1 when any axis exceeds ~3g on the ±6g range
//! accel.configure_interrupt_pins(InterruptPinConfig {
//!     int1_latch: true,
//!     ..Default::default()
//! })?;
//! accel.configure_interrupt(
//!     InterruptLine::Int1,
//!     InterruptConfig {
//!         threshold: 64,
//!         ..InterruptConfig::any_high_event()
//!     },
//! )?;
//! ```

use crate::variant::FullScaleRange;

/// Largest value accepted by the 7-bit threshold and duration registers
pub const MAX_THRESHOLD: u8 = 0x7F;

/// Interrupt generator / pad selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptLine {
    /// Interrupt generator 1 and the INT1 pad
    Int1,
    /// Interrupt generator 2 and the INT2 pad
    Int2,
}

/// Signal routed to an interrupt pad (`I1_CFG` / `I2_CFG`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptPinSource {
    /// The pad's own interrupt generator
    #[default]
    Generator = 0b00,
    /// Either interrupt generator
    EitherGenerator = 0b01,
    /// Data ready
    DataReady = 0b10,
    /// Boot running
    BootRunning = 0b11,
}

impl InterruptPinSource {
    /// Decode the two pad configuration bits
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::Generator,
            0b01 => Self::EitherGenerator,
            0b10 => Self::DataReady,
            _ => Self::BootRunning,
        }
    }
}

/// Interrupt pad configuration (`CTRL_REG3`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptPinConfig {
    /// Active low (true) or active high (false)
    pub active_low: bool,
    /// Open-drain (true) or push-pull (false)
    pub open_drain: bool,
    /// Signal on INT1
    pub int1_source: InterruptPinSource,
    /// Latch generator 1 until `INT1_SRC` is read
    pub int1_latch: bool,
    /// Signal on INT2
    pub int2_source: InterruptPinSource,
    /// Latch generator 2 until `INT2_SRC` is read
    pub int2_latch: bool,
}

/// Interrupt generator configuration (`INTx_CFG`, `INTx_THS`, `INTx_DURATION`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct InterruptConfig {
    /// Interrupt when X drops below the threshold
    pub x_low: bool,
    /// Interrupt when X exceeds the threshold
    pub x_high: bool,
    /// Interrupt when Y drops below the threshold
    pub y_low: bool,
    /// Interrupt when Y exceeds the threshold
    pub y_high: bool,
    /// Interrupt when Z drops below the threshold
    pub z_low: bool,
    /// Interrupt when Z exceeds the threshold
    pub z_high: bool,
    /// Require all enabled events (AND) instead of any (OR)
    pub and_combination: bool,
    /// 6-direction movement/position recognition
    pub six_direction: bool,
    /// Threshold, 7 bits, in units of full scale / 128
    pub threshold: u8,
    /// Minimum event duration in ODR periods, 7 bits
    pub duration: u8,
}

impl InterruptConfig {
    /// Interrupt on a high event on any axis (wake-up / motion detection)
    pub const fn any_high_event() -> Self {
        Self {
            x_low: false,
            x_high: true,
            y_low: false,
            y_high: true,
            z_low: false,
            z_high: true,
            and_combination: false,
            six_direction: false,
            threshold: 0,
            duration: 0,
        }
    }

    /// Interrupt when all axes are below threshold (free-fall detection)
    pub const fn free_fall() -> Self {
        Self {
            x_low: true,
            x_high: false,
            y_low: true,
            y_high: false,
            z_low: true,
            z_high: false,
            and_combination: true,
            six_direction: false,
            threshold: 0,
            duration: 0,
        }
    }

    /// Threshold and duration fit their 7-bit registers
    pub const fn is_valid(&self) -> bool {
        self.threshold <= MAX_THRESHOLD && self.duration <= MAX_THRESHOLD
    }
}

/// Convert a threshold in g to `INTx_THS` counts for the given range
///
/// Returns `None` when the threshold is negative or does not fit in 7 bits.
#[must_use]
pub fn threshold_counts<R: FullScaleRange>(threshold_g: f32, range: R) -> Option<u8> {
    let counts = libm::roundf(threshold_g * 128.0 / f32::from(range.max_g()));
    if (0.0..=f32::from(MAX_THRESHOLD)).contains(&counts) {
        // In range, checked above
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(counts as u8)
    } else {
        None
    }
}

/// Latched interrupt generator state (`INTx_SRC`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct InterruptSource {
    /// One or more events occurred
    pub active: bool,
    /// X low event
    pub x_low: bool,
    /// X high event
    pub x_high: bool,
    /// Y low event
    pub y_low: bool,
    /// Y high event
    pub y_high: bool,
    /// Z low event
    pub z_low: bool,
    /// Z high event
    pub z_high: bool,
}
