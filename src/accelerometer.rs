//! Acceleration readings and their conversion to physical units
//!
//! The output registers hold left-justified 12-bit two's-complement values in
//! little-endian order. A reading is decoded by sign-extending each axis to a
//! 12-bit count, scaling it by the range's g-per-count factor and, for SI
//! output, multiplying by standard gravity.

use crate::STANDARD_GRAVITY;

/// Bits of padding below the 12-bit sample in each output register pair
const SAMPLE_SHIFT: u32 = 4;

/// Raw accelerometer data (sign-extended 12-bit counts)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelData {
    /// X-axis acceleration (counts)
    pub x: i16,
    /// Y-axis acceleration (counts)
    pub y: i16,
    /// Z-axis acceleration (counts)
    pub z: i16,
}

impl AccelData {
    /// Decode the six bytes read from `OUT_X_L` to `OUT_Z_H`
    #[must_use]
    pub const fn from_le_bytes(bytes: [u8; 6]) -> Self {
        Self {
            x: decode_axis(bytes[0], bytes[1]),
            y: decode_axis(bytes[2], bytes[3]),
            z: decode_axis(bytes[4], bytes[5]),
        }
    }
}

/// Sign-extend one output register pair to a 12-bit count
#[must_use]
pub const fn decode_axis(low: u8, high: u8) -> i16 {
    i16::from_le_bytes([low, high]) >> SAMPLE_SHIFT
}

/// Acceleration in g
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelerationG {
    /// X-axis acceleration in g
    pub x: f32,
    /// Y-axis acceleration in g
    pub y: f32,
    /// Z-axis acceleration in g
    pub z: f32,
}

impl AccelerationG {
    /// Create from raw counts
    ///
    /// # Arguments
    ///
    /// * `raw` - Raw counts
    /// * `lsb_g` - Scale factor in g per count (from `FullScaleRange::lsb_g()`)
    #[must_use]
    pub fn from_raw(raw: AccelData, lsb_g: f32) -> Self {
        Self {
            x: f32::from(raw.x) * lsb_g,
            y: f32::from(raw.y) * lsb_g,
            z: f32::from(raw.z) * lsb_g,
        }
    }

    /// Get the magnitude of the acceleration vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

/// Acceleration in m/s²
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Acceleration {
    /// X-axis acceleration in m/s²
    pub x: f32,
    /// Y-axis acceleration in m/s²
    pub y: f32,
    /// Z-axis acceleration in m/s²
    pub z: f32,
}

impl Acceleration {
    /// Create from raw counts
    ///
    /// # Arguments
    ///
    /// * `raw` - Raw counts
    /// * `lsb_g` - Scale factor in g per count (from `FullScaleRange::lsb_g()`)
    #[must_use]
    pub fn from_raw(raw: AccelData, lsb_g: f32) -> Self {
        Self::from(AccelerationG::from_raw(raw, lsb_g))
    }

    /// Get the magnitude of the acceleration vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

impl From<AccelerationG> for Acceleration {
    fn from(g: AccelerationG) -> Self {
        Self {
            x: g.x * STANDARD_GRAVITY,
            y: g.y * STANDARD_GRAVITY,
            z: g.z * STANDARD_GRAVITY,
        }
    }
}

/// Data availability and overrun flags (`STATUS_REG`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DataStatus {
    /// New X, Y, Z data available (x, y, z, all)
    pub data_available: (bool, bool, bool, bool),
    /// X, Y, Z data overrun (x, y, z, all)
    pub overrun: (bool, bool, bool, bool),
}

impl DataStatus {
    /// A complete new X, Y, Z sample is available
    #[must_use]
    pub const fn xyz_ready(&self) -> bool {
        self.data_available.3
    }
}
