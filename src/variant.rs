//! Chip variants of the LIS331 family
//!
//! The LIS331HH and H3LIS331DL share a register map but differ in the
//! full-scale ranges selected by the `FS` bits of `CTRL_REG4`. Each chip is a
//! zero-sized marker type implementing [`Variant`], whose associated
//! [`Variant::Range`] enum lists only the ranges that chip supports.
//!
//! # Example
//!
//! ```ignore
//! use lis331::{H3lis331dl, H3lis331Range, I2cInterface, Lis331Driver};
//!
//! let mut accel = Lis331Driver::new(I2cInterface::default(i2c), H3lis331dl)?;
//! accel.set_range(H3lis331Range::G400)?;
//! ```

use core::fmt::Debug;

/// Number of counts spanning the full-scale range of the 12-bit output
const FULL_SCALE_COUNTS: f32 = 4096.0;

/// A full-scale range selectable on a particular chip
pub trait FullScaleRange: Copy + PartialEq + Debug {
    /// Range selected by [`crate::Lis331Driver::init`]
    const DEFAULT: Self;

    /// Encoding written to the `FS` bits of `CTRL_REG4`
    fn bits(self) -> u8;

    /// Decode the `FS` bits, `None` when the encoding is not a range of this chip
    fn from_bits(bits: u8) -> Option<Self>;

    /// Full-scale magnitude in g
    fn max_g(self) -> u16;

    /// Scale factor in g per count of the 12-bit output
    #[must_use]
    fn lsb_g(self) -> f32 {
        2.0 * f32::from(self.max_g()) / FULL_SCALE_COUNTS
    }
}

/// A member of the LIS331 family
pub trait Variant {
    /// Full-scale ranges supported by this chip
    type Range: FullScaleRange;

    /// Part name, used in log output
    const NAME: &'static str;
}

/// LIS331HH (±6/±12/±24 g)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Lis331hh;

/// H3LIS331DL (±100/±200/±400 g)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct H3lis331dl;

impl Variant for Lis331hh {
    type Range = Lis331hhRange;
    const NAME: &'static str = "LIS331HH";
}

impl Variant for H3lis331dl {
    type Range = H3lis331Range;
    const NAME: &'static str = "H3LIS331DL";
}

/// LIS331HH full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lis331hhRange {
    /// ±6g range (most sensitive)
    G6 = 0b00,
    /// ±12g range
    G12 = 0b01,
    /// ±24g range
    G24 = 0b11,
}

impl FullScaleRange for Lis331hhRange {
    const DEFAULT: Self = Self::G6;

    fn bits(self) -> u8 {
        self as u8
    }

    fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0b00 => Some(Self::G6),
            0b01 => Some(Self::G12),
            0b11 => Some(Self::G24),
            _ => None,
        }
    }

    fn max_g(self) -> u16 {
        match self {
            Self::G6 => 6,
            Self::G12 => 12,
            Self::G24 => 24,
        }
    }
}

/// H3LIS331DL full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum H3lis331Range {
    /// ±100g range (most sensitive)
    G100 = 0b00,
    /// ±200g range
    G200 = 0b01,
    /// ±400g range
    G400 = 0b11,
}

impl FullScaleRange for H3lis331Range {
    const DEFAULT: Self = Self::G100;

    fn bits(self) -> u8 {
        self as u8
    }

    fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0b00 => Some(Self::G100),
            0b01 => Some(Self::G200),
            0b11 => Some(Self::G400),
            _ => None,
        }
    }

    fn max_g(self) -> u16 {
        match self {
            Self::G100 => 100,
            Self::G200 => 200,
            Self::G400 => 400,
        }
    }
}
