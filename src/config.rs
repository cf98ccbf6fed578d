//! Output data rate, power mode and filter configuration
//!
//! `CTRL_REG1` packs the power mode (`PM`) and a two-bit `DR` field whose
//! meaning depends on the mode: in normal mode it selects the output data
//! rate, in low-power mode the output rate comes from `PM` and `DR` selects the
//! low-pass filter cutoff instead.
//!
//! `CTRL_REG2` holds the high-pass filter configuration.

/// Power mode, derived from the `PM` bits of `CTRL_REG1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Power-down
    Shutdown,
    /// Normal mode, 50 Hz to 1 kHz
    Normal,
    /// Low-power mode, 0.5 Hz to 10 Hz with selectable low-pass cutoff
    LowPower,
}

/// Output data rate
///
/// Low-power rates share the `DR` bits with [`LowPassCutoff`]; selecting one
/// leaves the configured cutoff untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataRate {
    /// Power-down
    Shutdown,
    /// 50 Hz, normal mode
    Hz50,
    /// 100 Hz, normal mode
    Hz100,
    /// 400 Hz, normal mode
    Hz400,
    /// 1000 Hz, normal mode
    Hz1000,
    /// 0.5 Hz, low-power mode
    LowPowerHz0_5,
    /// 1 Hz, low-power mode
    LowPowerHz1,
    /// 2 Hz, low-power mode
    LowPowerHz2,
    /// 5 Hz, low-power mode
    LowPowerHz5,
    /// 10 Hz, low-power mode
    LowPowerHz10,
}

impl DataRate {
    /// Value of the `PM` bits for this rate
    #[must_use]
    pub const fn pm_bits(self) -> u8 {
        match self {
            Self::Shutdown => 0b000,
            Self::Hz50 | Self::Hz100 | Self::Hz400 | Self::Hz1000 => 0b001,
            Self::LowPowerHz0_5 => 0b010,
            Self::LowPowerHz1 => 0b011,
            Self::LowPowerHz2 => 0b100,
            Self::LowPowerHz5 => 0b101,
            Self::LowPowerHz10 => 0b110,
        }
    }

    /// Value of the `DR` bits, only meaningful for normal-mode rates
    #[must_use]
    pub const fn dr_bits(self) -> Option<u8> {
        match self {
            Self::Hz50 => Some(0b00),
            Self::Hz100 => Some(0b01),
            Self::Hz400 => Some(0b10),
            Self::Hz1000 => Some(0b11),
            _ => None,
        }
    }

    /// Decode `PM` and `DR`, `None` for the reserved `PM = 111`
    #[must_use]
    pub const fn from_bits(pm: u8, dr: u8) -> Option<Self> {
        match (pm, dr & 0b11) {
            (0b000, _) => Some(Self::Shutdown),
            (0b001, 0b00) => Some(Self::Hz50),
            (0b001, 0b01) => Some(Self::Hz100),
            (0b001, 0b10) => Some(Self::Hz400),
            (0b001, _) => Some(Self::Hz1000),
            (0b010, _) => Some(Self::LowPowerHz0_5),
            (0b011, _) => Some(Self::LowPowerHz1),
            (0b100, _) => Some(Self::LowPowerHz2),
            (0b101, _) => Some(Self::LowPowerHz5),
            (0b110, _) => Some(Self::LowPowerHz10),
            _ => None,
        }
    }

    /// Power mode implied by this rate
    #[must_use]
    pub const fn mode(self) -> Mode {
        match self.pm_bits() {
            0b000 => Mode::Shutdown,
            0b001 => Mode::Normal,
            _ => Mode::LowPower,
        }
    }

    /// Output data rate in Hz (0 when shut down)
    #[must_use]
    pub const fn hz(self) -> f32 {
        match self {
            Self::Shutdown => 0.0,
            Self::Hz50 => 50.0,
            Self::Hz100 => 100.0,
            Self::Hz400 => 400.0,
            Self::Hz1000 => 1000.0,
            Self::LowPowerHz0_5 => 0.5,
            Self::LowPowerHz1 => 1.0,
            Self::LowPowerHz2 => 2.0,
            Self::LowPowerHz5 => 5.0,
            Self::LowPowerHz10 => 10.0,
        }
    }
}

/// Low-pass filter cutoff, applies in low-power mode only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LowPassCutoff {
    /// 37 Hz
    Hz37 = 0b00,
    /// 74 Hz
    Hz74 = 0b01,
    /// 292 Hz
    Hz292 = 0b10,
    /// 780 Hz
    Hz780 = 0b11,
}

impl LowPassCutoff {
    /// Decode the `DR` bits
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::Hz37,
            0b01 => Self::Hz74,
            0b10 => Self::Hz292,
            _ => Self::Hz780,
        }
    }

    /// Cutoff frequency in Hz
    #[must_use]
    pub const fn hz(self) -> u16 {
        match self {
            Self::Hz37 => 37,
            Self::Hz74 => 74,
            Self::Hz292 => 292,
            Self::Hz780 => 780,
        }
    }
}

/// High-pass filter cutoff as a divisor of the output data rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HighPassCutoff {
    /// ODR / 50
    OdrDiv50 = 0b00,
    /// ODR / 100
    OdrDiv100 = 0b01,
    /// ODR / 200
    OdrDiv200 = 0b10,
    /// ODR / 400
    OdrDiv400 = 0b11,
}

impl HighPassCutoff {
    /// Decode the `HPCF` bits
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::OdrDiv50,
            0b01 => Self::OdrDiv100,
            0b10 => Self::OdrDiv200,
            _ => Self::OdrDiv400,
        }
    }

    /// The divisor applied to the output data rate
    #[must_use]
    pub const fn divisor(self) -> u16 {
        match self {
            Self::OdrDiv50 => 50,
            Self::OdrDiv100 => 100,
            Self::OdrDiv200 => 200,
            Self::OdrDiv400 => 400,
        }
    }

    /// Cutoff frequency in Hz for the given data rate
    #[must_use]
    pub fn cutoff_hz(self, rate: DataRate) -> f32 {
        rate.hz() / f32::from(self.divisor())
    }
}

/// High-pass filter mode (`HPM` bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HighPassMode {
    /// Normal mode; reading `HP_FILTER_RESET` zeroes the filter
    Normal = 0b00,
    /// Output is the difference from the `REFERENCE` register
    Reference = 0b01,
}

impl HighPassMode {
    /// Decode the `HPM` bits, `None` for the unused `11` encoding
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            // 10 is a second encoding of normal mode
            0b00 | 0b10 => Some(Self::Normal),
            0b01 => Some(Self::Reference),
            _ => None,
        }
    }
}

/// High-pass filter configuration (`CTRL_REG2`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HighPassConfig {
    /// Route filtered data to the output registers (`FDS`)
    pub enabled: bool,
    /// Cutoff frequency
    pub cutoff: HighPassCutoff,
    /// Filter mode
    pub mode: HighPassMode,
    /// Filter the data fed to interrupt generator 1
    pub int1: bool,
    /// Filter the data fed to interrupt generator 2
    pub int2: bool,
}

impl Default for HighPassConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            cutoff: HighPassCutoff::OdrDiv50,
            mode: HighPassMode::Normal,
            int1: false,
            int2: false,
        }
    }
}

/// Axis enable flags (`CTRL_REG1` `Xen`/`Yen`/`Zen`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxesEnabled {
    /// X-axis enabled
    pub x: bool,
    /// Y-axis enabled
    pub y: bool,
    /// Z-axis enabled
    pub z: bool,
}

impl Default for AxesEnabled {
    fn default() -> Self {
        Self {
            x: true,
            y: true,
            z: true,
        }
    }
}
