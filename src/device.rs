//! High-level driver API for the LIS331
//!
//! This module provides a user-friendly interface to the LIS331HH and
//! H3LIS331DL: range, data rate and filter configuration, interrupts, and
//! acceleration readings in physical units.

use crate::accelerometer::{AccelData, Acceleration, AccelerationG, DataStatus};
use crate::config::{
    AxesEnabled, DataRate, HighPassConfig, HighPassCutoff, HighPassMode, LowPassCutoff, Mode,
};
use crate::interrupt::{
    InterruptConfig, InterruptLine, InterruptPinConfig, InterruptPinSource, InterruptSource,
};
use crate::registers::{Lis331 as RegisterDevice, OUT_X_L};
use crate::variant::{FullScaleRange, Variant};
use crate::{Error, WHO_AM_I_VALUE};

// Only import RegisterInterface when not using async feature
#[cfg(not(feature = "async"))]
use device_driver::RegisterInterface;

/// Maximum time to wait for a memory reboot to complete
const BOOT_TIMEOUT_MS: u32 = 100;

/// Poll interval while waiting for the BOOT bit to clear
const BOOT_POLL_INTERVAL_MS: u32 = 1;

/// `TurnOn` value enabling sleep-to-wake
const SLEEP_TO_WAKE_ENABLED: u8 = 0b11;

/// Main driver for the LIS331 family
///
/// `V` selects the chip ([`crate::Lis331hh`] or [`crate::H3lis331dl`]) and
/// with it the set of legal full-scale ranges.
pub struct Lis331Driver<I, V: Variant> {
    device: RegisterDevice<I>,
    variant: V,
    // Range used to scale readings, kept in sync with CTRL_REG4
    range: V::Range,
}

impl<I, V: Variant> Lis331Driver<I, V> {
    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }

    /// Get a reference to the underlying register device (for advanced usage)
    pub const fn device(&self) -> &RegisterDevice<I> {
        &self.device
    }

    /// The chip variant this driver was created for
    pub const fn variant(&self) -> &V {
        &self.variant
    }

    /// The full-scale range currently used to scale readings
    ///
    /// This is the last range written by [`set_range`](Self::set_range) or
    /// read back by `range()`; it does not touch the bus.
    pub fn cached_range(&self) -> V::Range {
        self.range
    }
}

#[cfg(not(feature = "async"))]
impl<I, V> Lis331Driver<I, V>
where
    I: RegisterInterface<AddressType = u8>,
    V: Variant,
{
    /// Create a new LIS331 driver instance
    ///
    /// This verifies the `WHO_AM_I` register and reads the configured range,
    /// but does not change the device configuration. Call `init()` after
    /// construction to apply the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The `WHO_AM_I` register contains an unexpected value
    /// - `CTRL_REG4` holds a full-scale encoding this chip does not support
    ///
    /// # Example
    ///
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut accel = Lis331Driver::new(interface, Lis331hh)?;
    /// ```
    pub fn new(interface: I, variant: V) -> Result<Self, Error<I::Error>> {
        let mut driver = Self {
            device: RegisterDevice::new(interface),
            variant,
            range: V::Range::DEFAULT,
        };

        let who_am_i = driver.read_who_am_i()?;
        if who_am_i != WHO_AM_I_VALUE {
            return Err(Error::InvalidDevice(who_am_i));
        }

        driver.range()?;
        Ok(driver)
    }

    /// Initialize the device with default settings
    ///
    /// Reboots the memory content, then enables block data update,
    /// little-endian output, all three axes, 1000 Hz normal mode and the
    /// chip's default (most sensitive) range.
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay provider implementing `embedded_hal::delay::DelayNs`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn init<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.reboot(delay)?;

        self.device.ctrl_reg_4().modify(|w| {
            w.set_bdu(true);
            w.set_ble(false);
        })?;
        self.set_axes(AxesEnabled::default())?;
        self.set_data_rate(DataRate::Hz1000)?;
        self.set_range(V::Range::DEFAULT)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("{=str} initialized: 1000 Hz, {} g", V::NAME, self.range.max_g());

        Ok(())
    }

    /// Reboot memory content
    ///
    /// Sets the `BOOT` bit and polls until the device clears it (up to 100 ms).
    /// A bit that is still set after the timeout is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, including
    /// while polling.
    pub fn reboot<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.device.ctrl_reg_2().modify(|w| {
            w.set_boot(true);
        })?;

        for _ in 0..(BOOT_TIMEOUT_MS / BOOT_POLL_INTERVAL_MS) {
            delay.delay_ms(BOOT_POLL_INTERVAL_MS);
            if !self.device.ctrl_reg_2().read()?.boot() {
                return Ok(());
            }
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("{=str}: BOOT bit still set after {} ms", V::NAME, BOOT_TIMEOUT_MS);

        Ok(())
    }

    /// Read the `WHO_AM_I` register
    ///
    /// Should return 0x32 for both supported chips
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.who_am_i().read()?;
        Ok(reg.who_am_i())
    }

    /// Read raw accelerometer data
    ///
    /// Returns sign-extended 12-bit counts for X, Y, Z axes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_raw(&mut self) -> Result<AccelData, Error<I::Error>> {
        // Read all 6 bytes in one burst so the axes come from the same sample
        let mut buffer = [0u8; 6];
        self.device
            .interface
            .read_register(OUT_X_L, 48, &mut buffer)?;

        Ok(AccelData::from_le_bytes(buffer))
    }

    /// Read acceleration in m/s²
    ///
    /// # Example
    ///
    /// ```ignore
    /// let accel = lis.acceleration()?;
    /// println!("X: {} Y: {} Z: {} m/s²", accel.x, accel.y, accel.z);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn acceleration(&mut self) -> Result<Acceleration, Error<I::Error>> {
        let raw = self.read_raw()?;
        Ok(Acceleration::from_raw(raw, self.range.lsb_g()))
    }

    /// Read acceleration in g
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn acceleration_g(&mut self) -> Result<AccelerationG, Error<I::Error>> {
        let raw = self.read_raw()?;
        Ok(AccelerationG::from_raw(raw, self.range.lsb_g()))
    }

    /// Read the data availability and overrun flags
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn status(&mut self) -> Result<DataStatus, Error<I::Error>> {
        let reg = self.device.status_reg().read()?;
        Ok(DataStatus {
            data_available: (reg.xda(), reg.yda(), reg.zda(), reg.zyxda()),
            overrun: (reg.x_or(), reg.y_or(), reg.z_or(), reg.zyxor()),
        })
    }

    /// Check whether a new X, Y, Z sample is available
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn data_ready(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.status_reg().read()?.zyxda())
    }

    /// Read the configured full-scale range
    ///
    /// Also refreshes the range used to scale readings.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, or
    /// `Error::InvalidConfig` if the `FS` bits hold an unsupported encoding.
    pub fn range(&mut self) -> Result<V::Range, Error<I::Error>> {
        let fs = self.device.ctrl_reg_4().read()?.fs();
        let range = V::Range::from_bits(fs).ok_or(Error::InvalidConfig)?;
        self.range = range;
        Ok(range)
    }

    /// Set the full-scale range
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_range(&mut self, range: V::Range) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_4().modify(|w| {
            w.set_fs(range.bits());
        })?;
        self.range = range;

        #[cfg(feature = "defmt")]
        defmt::debug!("{=str} range set to +/-{} g", V::NAME, range.max_g());

        Ok(())
    }

    /// Enable or disable block data update
    ///
    /// With BDU enabled the output registers are not updated until both
    /// bytes of an axis have been read. `init()` enables it.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_block_data_update(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_4().modify(|w| {
            w.set_bdu(enable);
        })?;
        Ok(())
    }

    /// Read the output data rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, or
    /// `Error::InvalidConfig` if the `PM` bits hold the reserved encoding.
    pub fn data_rate(&mut self) -> Result<DataRate, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read()?;
        DataRate::from_bits(reg.pm(), reg.dr()).ok_or(Error::InvalidConfig)
    }

    /// Set the output data rate
    ///
    /// The power mode follows from the rate. Selecting a low-power rate keeps
    /// the configured low-pass cutoff.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_data_rate(&mut self, rate: DataRate) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_1().modify(|w| {
            w.set_pm(rate.pm_bits());
            if let Some(dr) = rate.dr_bits() {
                w.set_dr(dr);
            }
        })?;

        #[cfg(feature = "defmt")]
        defmt::debug!("{=str} data rate set to {}", V::NAME, rate);

        Ok(())
    }

    /// Read the power mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, or
    /// `Error::InvalidConfig` if the `PM` bits hold the reserved encoding.
    pub fn mode(&mut self) -> Result<Mode, Error<I::Error>> {
        Ok(self.data_rate()?.mode())
    }

    /// Read the low-pass filter cutoff
    ///
    /// Returns `None` outside low-power mode, where the `DR` bits select the
    /// data rate instead.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, or
    /// `Error::InvalidConfig` if the `PM` bits hold the reserved encoding.
    pub fn lpf_cutoff(&mut self) -> Result<Option<LowPassCutoff>, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read()?;
        let rate = DataRate::from_bits(reg.pm(), reg.dr()).ok_or(Error::InvalidConfig)?;
        Ok((rate.mode() == Mode::LowPower).then(|| LowPassCutoff::from_bits(reg.dr())))
    }

    /// Set the low-pass filter cutoff
    ///
    /// Allowed in low-power mode and in shutdown, so the cutoff can be chosen
    /// before switching to a low-power rate.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, or
    /// `Error::InvalidConfig` in normal mode, where `DR` selects the data rate.
    pub fn set_lpf_cutoff(&mut self, cutoff: LowPassCutoff) -> Result<(), Error<I::Error>> {
        if self.mode()? == Mode::Normal {
            #[cfg(feature = "defmt")]
            defmt::warn!("{=str}: low-pass cutoff not available in normal mode", V::NAME);
            return Err(Error::InvalidConfig);
        }

        self.device.ctrl_reg_1().modify(|w| {
            w.set_dr(cutoff as u8);
        })?;
        Ok(())
    }

    /// Read which axes are enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn axes(&mut self) -> Result<AxesEnabled, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read()?;
        Ok(AxesEnabled {
            x: reg.xen(),
            y: reg.yen(),
            z: reg.zen(),
        })
    }

    /// Enable or disable individual axes
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_axes(&mut self, axes: AxesEnabled) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_1().modify(|w| {
            w.set_xen(axes.x);
            w.set_yen(axes.y);
            w.set_zen(axes.z);
        })?;
        Ok(())
    }

    /// Enable or disable the high-pass filter on the output data
    ///
    /// # Arguments
    ///
    /// * `enabled` - Route filtered data to the output registers
    /// * `cutoff` - Cutoff frequency as a divisor of the data rate
    /// * `use_reference` - Filter against the `REFERENCE` register instead of
    ///   the running average
    ///
    /// # Example
    ///
    /// ```ignore
    /// lis.set_data_rate(DataRate::Hz1000)?;
    /// lis.enable_hpf(true, HighPassCutoff::OdrDiv100, false)?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn enable_hpf(
        &mut self,
        enabled: bool,
        cutoff: HighPassCutoff,
        use_reference: bool,
    ) -> Result<(), Error<I::Error>> {
        let mode = if use_reference {
            HighPassMode::Reference
        } else {
            HighPassMode::Normal
        };

        self.device.ctrl_reg_2().modify(|w| {
            w.set_fds(enabled);
            w.set_hpcf(cutoff as u8);
            w.set_hpm(mode as u8);
        })?;
        Ok(())
    }

    /// Configure the high-pass filter, including its use by the interrupt generators
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure_high_pass_filter(
        &mut self,
        config: HighPassConfig,
    ) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_2().modify(|w| {
            w.set_fds(config.enabled);
            w.set_hpcf(config.cutoff as u8);
            w.set_hpm(config.mode as u8);
            w.set_hp_en_1(config.int1);
            w.set_hp_en_2(config.int2);
        })?;
        Ok(())
    }

    /// Read the high-pass filter configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, or
    /// `Error::InvalidConfig` if the `HPM` bits hold the unused encoding.
    pub fn high_pass_filter(&mut self) -> Result<HighPassConfig, Error<I::Error>> {
        let reg = self.device.ctrl_reg_2().read()?;
        Ok(HighPassConfig {
            enabled: reg.fds(),
            cutoff: HighPassCutoff::from_bits(reg.hpcf()),
            mode: HighPassMode::from_bits(reg.hpm()).ok_or(Error::InvalidConfig)?,
            int1: reg.hp_en_1(),
            int2: reg.hp_en_2(),
        })
    }

    /// Read the high-pass filter reference value
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn hpf_reference(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.reference().read()?.reference())
    }

    /// Set the high-pass filter reference value
    ///
    /// Only used when the filter is in [`HighPassMode::Reference`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_hpf_reference(&mut self, reference: u8) -> Result<(), Error<I::Error>> {
        self.device.reference().write(|w| {
            w.set_reference(reference);
        })?;
        Ok(())
    }

    /// Zero the high-pass filter by reading `HP_FILTER_RESET`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn reset_hpf(&mut self) -> Result<(), Error<I::Error>> {
        self.device.hp_filter_reset().read()?;
        Ok(())
    }

    /// Configure the interrupt pads
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure_interrupt_pins(
        &mut self,
        config: InterruptPinConfig,
    ) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_3().write(|w| {
            w.set_ihl(config.active_low);
            w.set_pp_od(config.open_drain);
            w.set_i_1_cfg(config.int1_source as u8);
            w.set_lir_1(config.int1_latch);
            w.set_i_2_cfg(config.int2_source as u8);
            w.set_lir_2(config.int2_latch);
        })?;
        Ok(())
    }

    /// Read the interrupt pad configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn interrupt_pin_config(&mut self) -> Result<InterruptPinConfig, Error<I::Error>> {
        let reg = self.device.ctrl_reg_3().read()?;
        Ok(InterruptPinConfig {
            active_low: reg.ihl(),
            open_drain: reg.pp_od(),
            int1_source: InterruptPinSource::from_bits(reg.i_1_cfg()),
            int1_latch: reg.lir_1(),
            int2_source: InterruptPinSource::from_bits(reg.i_2_cfg()),
            int2_latch: reg.lir_2(),
        })
    }

    /// Configure an interrupt generator
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, or
    /// `Error::InvalidConfig` if the threshold or duration exceeds 7 bits.
    pub fn configure_interrupt(
        &mut self,
        line: InterruptLine,
        config: InterruptConfig,
    ) -> Result<(), Error<I::Error>> {
        if !config.is_valid() {
            return Err(Error::InvalidConfig);
        }

        match line {
            InterruptLine::Int1 => {
                self.device.int_1_ths().write(|w| {
                    w.set_ths(config.threshold);
                })?;
                self.device.int_1_duration().write(|w| {
                    w.set_duration(config.duration);
                })?;
                self.device.int_1_cfg().write(|w| {
                    w.set_xlie(config.x_low);
                    w.set_xhie(config.x_high);
                    w.set_ylie(config.y_low);
                    w.set_yhie(config.y_high);
                    w.set_zlie(config.z_low);
                    w.set_zhie(config.z_high);
                    w.set_six_d(config.six_direction);
                    w.set_aoi(config.and_combination);
                })?;
            }
            InterruptLine::Int2 => {
                self.device.int_2_ths().write(|w| {
                    w.set_ths(config.threshold);
                })?;
                self.device.int_2_duration().write(|w| {
                    w.set_duration(config.duration);
                })?;
                self.device.int_2_cfg().write(|w| {
                    w.set_xlie(config.x_low);
                    w.set_xhie(config.x_high);
                    w.set_ylie(config.y_low);
                    w.set_yhie(config.y_high);
                    w.set_zlie(config.z_low);
                    w.set_zhie(config.z_high);
                    w.set_six_d(config.six_direction);
                    w.set_aoi(config.and_combination);
                })?;
            }
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("{=str} interrupt {} configured: {}", V::NAME, line, config);

        Ok(())
    }

    /// Read an interrupt generator's source register
    ///
    /// Reading clears a latched interrupt.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn interrupt_source(
        &mut self,
        line: InterruptLine,
    ) -> Result<InterruptSource, Error<I::Error>> {
        let source = match line {
            InterruptLine::Int1 => {
                let reg = self.device.int_1_src().read()?;
                InterruptSource {
                    active: reg.ia(),
                    x_low: reg.xl(),
                    x_high: reg.xh(),
                    y_low: reg.yl(),
                    y_high: reg.yh(),
                    z_low: reg.zl(),
                    z_high: reg.zh(),
                }
            }
            InterruptLine::Int2 => {
                let reg = self.device.int_2_src().read()?;
                InterruptSource {
                    active: reg.ia(),
                    x_low: reg.xl(),
                    x_high: reg.xh(),
                    y_low: reg.yl(),
                    y_high: reg.yh(),
                    z_low: reg.zl(),
                    z_high: reg.zh(),
                }
            }
        };
        Ok(source)
    }

    /// Enable or disable sleep-to-wake
    ///
    /// When enabled, an interrupt event switches the device from low-power
    /// mode to normal mode.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_sleep_to_wake(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_5().modify(|w| {
            w.set_turn_on(if enable { SLEEP_TO_WAKE_ENABLED } else { 0 });
        })?;
        Ok(())
    }

    /// Check whether sleep-to-wake is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn sleep_to_wake(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.ctrl_reg_5().read()?.turn_on() == SLEEP_TO_WAKE_ENABLED)
    }
}

#[cfg(feature = "async")]
impl<I, V> Lis331Driver<I, V>
where
    I: device_driver::AsyncRegisterInterface<AddressType = u8>,
    V: Variant,
{
    /// Create a new LIS331 driver instance
    ///
    /// This verifies the `WHO_AM_I` register and reads the configured range,
    /// but does not change the device configuration. Call `init()` after
    /// construction to apply the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The `WHO_AM_I` register contains an unexpected value
    /// - `CTRL_REG4` holds a full-scale encoding this chip does not support
    pub async fn new(interface: I, variant: V) -> Result<Self, Error<I::Error>> {
        let mut driver = Self {
            device: RegisterDevice::new(interface),
            variant,
            range: V::Range::DEFAULT,
        };

        let who_am_i = driver.read_who_am_i().await?;
        if who_am_i != WHO_AM_I_VALUE {
            return Err(Error::InvalidDevice(who_am_i));
        }

        driver.range().await?;
        Ok(driver)
    }

    /// Initialize the device with default settings
    ///
    /// Reboots the memory content, then enables block data update,
    /// little-endian output, all three axes, 1000 Hz normal mode and the
    /// chip's default (most sensitive) range.
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay provider implementing `embedded_hal_async::delay::DelayNs`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn init<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        self.reboot(delay).await?;

        self.device
            .ctrl_reg_4()
            .modify_async(|w| {
                w.set_bdu(true);
                w.set_ble(false);
            })
            .await?;
        self.set_axes(AxesEnabled::default()).await?;
        self.set_data_rate(DataRate::Hz1000).await?;
        self.set_range(V::Range::DEFAULT).await?;

        #[cfg(feature = "defmt")]
        defmt::debug!("{=str} initialized: 1000 Hz, {} g", V::NAME, self.range.max_g());

        Ok(())
    }

    /// Reboot memory content
    ///
    /// Sets the `BOOT` bit and polls until the device clears it (up to 100 ms).
    /// A bit that is still set after the timeout is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, including
    /// while polling.
    pub async fn reboot<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        self.device
            .ctrl_reg_2()
            .modify_async(|w| {
                w.set_boot(true);
            })
            .await?;

        for _ in 0..(BOOT_TIMEOUT_MS / BOOT_POLL_INTERVAL_MS) {
            delay.delay_ms(BOOT_POLL_INTERVAL_MS).await;
            if !self.device.ctrl_reg_2().read_async().await?.boot() {
                return Ok(());
            }
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("{=str}: BOOT bit still set after {} ms", V::NAME, BOOT_TIMEOUT_MS);

        Ok(())
    }

    /// Read the `WHO_AM_I` register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.who_am_i().read_async().await?;
        Ok(reg.who_am_i())
    }

    /// Read raw accelerometer data
    ///
    /// Returns sign-extended 12-bit counts for X, Y, Z axes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_raw(&mut self) -> Result<AccelData, Error<I::Error>> {
        let mut buffer = [0u8; 6];
        self.device
            .interface
            .read_register(OUT_X_L, 48, &mut buffer)
            .await?;

        Ok(AccelData::from_le_bytes(buffer))
    }

    /// Read acceleration in m/s²
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn acceleration(&mut self) -> Result<Acceleration, Error<I::Error>> {
        let raw = self.read_raw().await?;
        Ok(Acceleration::from_raw(raw, self.range.lsb_g()))
    }

    /// Read acceleration in g
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn acceleration_g(&mut self) -> Result<AccelerationG, Error<I::Error>> {
        let raw = self.read_raw().await?;
        Ok(AccelerationG::from_raw(raw, self.range.lsb_g()))
    }

    /// Read the data availability and overrun flags
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn status(&mut self) -> Result<DataStatus, Error<I::Error>> {
        let reg = self.device.status_reg().read_async().await?;
        Ok(DataStatus {
            data_available: (reg.xda(), reg.yda(), reg.zda(), reg.zyxda()),
            overrun: (reg.x_or(), reg.y_or(), reg.z_or(), reg.zyxor()),
        })
    }

    /// Check whether a new X, Y, Z sample is available
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn data_ready(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.status_reg().read_async().await?.zyxda())
    }

    /// Read the configured full-scale range
    ///
    /// Also refreshes the range used to scale readings.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, or
    /// `Error::InvalidConfig` if the `FS` bits hold an unsupported encoding.
    pub async fn range(&mut self) -> Result<V::Range, Error<I::Error>> {
        let fs = self.device.ctrl_reg_4().read_async().await?.fs();
        let range = V::Range::from_bits(fs).ok_or(Error::InvalidConfig)?;
        self.range = range;
        Ok(range)
    }

    /// Set the full-scale range
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_range(&mut self, range: V::Range) -> Result<(), Error<I::Error>> {
        self.device
            .ctrl_reg_4()
            .modify_async(|w| {
                w.set_fs(range.bits());
            })
            .await?;
        self.range = range;

        #[cfg(feature = "defmt")]
        defmt::debug!("{=str} range set to +/-{} g", V::NAME, range.max_g());

        Ok(())
    }

    /// Enable or disable block data update
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_block_data_update(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device
            .ctrl_reg_4()
            .modify_async(|w| {
                w.set_bdu(enable);
            })
            .await?;
        Ok(())
    }

    /// Read the output data rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, or
    /// `Error::InvalidConfig` if the `PM` bits hold the reserved encoding.
    pub async fn data_rate(&mut self) -> Result<DataRate, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read_async().await?;
        DataRate::from_bits(reg.pm(), reg.dr()).ok_or(Error::InvalidConfig)
    }

    /// Set the output data rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_data_rate(&mut self, rate: DataRate) -> Result<(), Error<I::Error>> {
        self.device
            .ctrl_reg_1()
            .modify_async(|w| {
                w.set_pm(rate.pm_bits());
                if let Some(dr) = rate.dr_bits() {
                    w.set_dr(dr);
                }
            })
            .await?;

        #[cfg(feature = "defmt")]
        defmt::debug!("{=str} data rate set to {}", V::NAME, rate);

        Ok(())
    }

    /// Read the power mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, or
    /// `Error::InvalidConfig` if the `PM` bits hold the reserved encoding.
    pub async fn mode(&mut self) -> Result<Mode, Error<I::Error>> {
        Ok(self.data_rate().await?.mode())
    }

    /// Read the low-pass filter cutoff, `None` outside low-power mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, or
    /// `Error::InvalidConfig` if the `PM` bits hold the reserved encoding.
    pub async fn lpf_cutoff(&mut self) -> Result<Option<LowPassCutoff>, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read_async().await?;
        let rate = DataRate::from_bits(reg.pm(), reg.dr()).ok_or(Error::InvalidConfig)?;
        Ok((rate.mode() == Mode::LowPower).then(|| LowPassCutoff::from_bits(reg.dr())))
    }

    /// Set the low-pass filter cutoff
    ///
    /// Allowed in low-power mode and in shutdown, so the cutoff can be chosen
    /// before switching to a low-power rate.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, or
    /// `Error::InvalidConfig` in normal mode, where `DR` selects the data rate.
    pub async fn set_lpf_cutoff(&mut self, cutoff: LowPassCutoff) -> Result<(), Error<I::Error>> {
        if self.mode().await? == Mode::Normal {
            #[cfg(feature = "defmt")]
            defmt::warn!("{=str}: low-pass cutoff not available in normal mode", V::NAME);
            return Err(Error::InvalidConfig);
        }

        self.device
            .ctrl_reg_1()
            .modify_async(|w| {
                w.set_dr(cutoff as u8);
            })
            .await?;
        Ok(())
    }

    /// Read which axes are enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn axes(&mut self) -> Result<AxesEnabled, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read_async().await?;
        Ok(AxesEnabled {
            x: reg.xen(),
            y: reg.yen(),
            z: reg.zen(),
        })
    }

    /// Enable or disable individual axes
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_axes(&mut self, axes: AxesEnabled) -> Result<(), Error<I::Error>> {
        self.device
            .ctrl_reg_1()
            .modify_async(|w| {
                w.set_xen(axes.x);
                w.set_yen(axes.y);
                w.set_zen(axes.z);
            })
            .await?;
        Ok(())
    }

    /// Enable or disable the high-pass filter on the output data
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn enable_hpf(
        &mut self,
        enabled: bool,
        cutoff: HighPassCutoff,
        use_reference: bool,
    ) -> Result<(), Error<I::Error>> {
        let mode = if use_reference {
            HighPassMode::Reference
        } else {
            HighPassMode::Normal
        };

        self.device
            .ctrl_reg_2()
            .modify_async(|w| {
                w.set_fds(enabled);
                w.set_hpcf(cutoff as u8);
                w.set_hpm(mode as u8);
            })
            .await?;
        Ok(())
    }

    /// Configure the high-pass filter, including its use by the interrupt generators
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn configure_high_pass_filter(
        &mut self,
        config: HighPassConfig,
    ) -> Result<(), Error<I::Error>> {
        self.device
            .ctrl_reg_2()
            .modify_async(|w| {
                w.set_fds(config.enabled);
                w.set_hpcf(config.cutoff as u8);
                w.set_hpm(config.mode as u8);
                w.set_hp_en_1(config.int1);
                w.set_hp_en_2(config.int2);
            })
            .await?;
        Ok(())
    }

    /// Read the high-pass filter configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, or
    /// `Error::InvalidConfig` if the `HPM` bits hold the unused encoding.
    pub async fn high_pass_filter(&mut self) -> Result<HighPassConfig, Error<I::Error>> {
        let reg = self.device.ctrl_reg_2().read_async().await?;
        Ok(HighPassConfig {
            enabled: reg.fds(),
            cutoff: HighPassCutoff::from_bits(reg.hpcf()),
            mode: HighPassMode::from_bits(reg.hpm()).ok_or(Error::InvalidConfig)?,
            int1: reg.hp_en_1(),
            int2: reg.hp_en_2(),
        })
    }

    /// Read the high-pass filter reference value
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn hpf_reference(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.reference().read_async().await?.reference())
    }

    /// Set the high-pass filter reference value
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_hpf_reference(&mut self, reference: u8) -> Result<(), Error<I::Error>> {
        self.device
            .reference()
            .write_async(|w| {
                w.set_reference(reference);
            })
            .await?;
        Ok(())
    }

    /// Zero the high-pass filter by reading `HP_FILTER_RESET`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn reset_hpf(&mut self) -> Result<(), Error<I::Error>> {
        self.device.hp_filter_reset().read_async().await?;
        Ok(())
    }

    /// Configure the interrupt pads
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn configure_interrupt_pins(
        &mut self,
        config: InterruptPinConfig,
    ) -> Result<(), Error<I::Error>> {
        self.device
            .ctrl_reg_3()
            .write_async(|w| {
                w.set_ihl(config.active_low);
                w.set_pp_od(config.open_drain);
                w.set_i_1_cfg(config.int1_source as u8);
                w.set_lir_1(config.int1_latch);
                w.set_i_2_cfg(config.int2_source as u8);
                w.set_lir_2(config.int2_latch);
            })
            .await?;
        Ok(())
    }

    /// Read the interrupt pad configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn interrupt_pin_config(&mut self) -> Result<InterruptPinConfig, Error<I::Error>> {
        let reg = self.device.ctrl_reg_3().read_async().await?;
        Ok(InterruptPinConfig {
            active_low: reg.ihl(),
            open_drain: reg.pp_od(),
            int1_source: InterruptPinSource::from_bits(reg.i_1_cfg()),
            int1_latch: reg.lir_1(),
            int2_source: InterruptPinSource::from_bits(reg.i_2_cfg()),
            int2_latch: reg.lir_2(),
        })
    }

    /// Configure an interrupt generator
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, or
    /// `Error::InvalidConfig` if the threshold or duration exceeds 7 bits.
    pub async fn configure_interrupt(
        &mut self,
        line: InterruptLine,
        config: InterruptConfig,
    ) -> Result<(), Error<I::Error>> {
        if !config.is_valid() {
            return Err(Error::InvalidConfig);
        }

        match line {
            InterruptLine::Int1 => {
                self.device
                    .int_1_ths()
                    .write_async(|w| {
                        w.set_ths(config.threshold);
                    })
                    .await?;
                self.device
                    .int_1_duration()
                    .write_async(|w| {
                        w.set_duration(config.duration);
                    })
                    .await?;
                self.device
                    .int_1_cfg()
                    .write_async(|w| {
                        w.set_xlie(config.x_low);
                        w.set_xhie(config.x_high);
                        w.set_ylie(config.y_low);
                        w.set_yhie(config.y_high);
                        w.set_zlie(config.z_low);
                        w.set_zhie(config.z_high);
                        w.set_six_d(config.six_direction);
                        w.set_aoi(config.and_combination);
                    })
                    .await?;
            }
            InterruptLine::Int2 => {
                self.device
                    .int_2_ths()
                    .write_async(|w| {
                        w.set_ths(config.threshold);
                    })
                    .await?;
                self.device
                    .int_2_duration()
                    .write_async(|w| {
                        w.set_duration(config.duration);
                    })
                    .await?;
                self.device
                    .int_2_cfg()
                    .write_async(|w| {
                        w.set_xlie(config.x_low);
                        w.set_xhie(config.x_high);
                        w.set_ylie(config.y_low);
                        w.set_yhie(config.y_high);
                        w.set_zlie(config.z_low);
                        w.set_zhie(config.z_high);
                        w.set_six_d(config.six_direction);
                        w.set_aoi(config.and_combination);
                    })
                    .await?;
            }
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("{=str} interrupt {} configured: {}", V::NAME, line, config);

        Ok(())
    }

    /// Read an interrupt generator's source register
    ///
    /// Reading clears a latched interrupt.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn interrupt_source(
        &mut self,
        line: InterruptLine,
    ) -> Result<InterruptSource, Error<I::Error>> {
        let source = match line {
            InterruptLine::Int1 => {
                let reg = self.device.int_1_src().read_async().await?;
                InterruptSource {
                    active: reg.ia(),
                    x_low: reg.xl(),
                    x_high: reg.xh(),
                    y_low: reg.yl(),
                    y_high: reg.yh(),
                    z_low: reg.zl(),
                    z_high: reg.zh(),
                }
            }
            InterruptLine::Int2 => {
                let reg = self.device.int_2_src().read_async().await?;
                InterruptSource {
                    active: reg.ia(),
                    x_low: reg.xl(),
                    x_high: reg.xh(),
                    y_low: reg.yl(),
                    y_high: reg.yh(),
                    z_low: reg.zl(),
                    z_high: reg.zh(),
                }
            }
        };
        Ok(source)
    }

    /// Enable or disable sleep-to-wake
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_sleep_to_wake(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device
            .ctrl_reg_5()
            .modify_async(|w| {
                w.set_turn_on(if enable { SLEEP_TO_WAKE_ENABLED } else { 0 });
            })
            .await?;
        Ok(())
    }

    /// Check whether sleep-to-wake is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn sleep_to_wake(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.ctrl_reg_5().read_async().await?.turn_on() == SLEEP_TO_WAKE_ENABLED)
    }
}
