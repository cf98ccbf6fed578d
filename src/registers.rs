//! Register definitions for the LIS331 family
//!
//! The LIS331HH and H3LIS331DL share one register map. Differences between the
//! two chips are limited to the meaning of the `FS` bits in `CTRL_REG4`, which
//! is handled by [`crate::variant`].
//!
//! Multi-byte transfers need the auto-increment flag in the sub-address; the
//! bus interfaces in [`crate::interface`] add it, so addresses here are plain.

device_driver::create_device!(
    device_name: Lis331,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = LE;
        }

        /// WHO_AM_I - Device identification (0x0F)
        /// Expected value: 0x32
        register WhoAmI {
            const ADDRESS = 0x0F;
            const SIZE_BITS = 8;

            /// Device ID (should read 0x32)
            who_am_i: uint = 0..8,
        },

        /// CTRL_REG1 - Power mode, data rate and axis enable (0x20)
        register CtrlReg1 {
            const ADDRESS = 0x20;
            const SIZE_BITS = 8;
            const RESET_VALUE = 0x07;

            /// X-axis enable
            xen: bool = 0,
            /// Y-axis enable
            yen: bool = 1,
            /// Z-axis enable
            zen: bool = 2,
            /// Data rate in normal mode, low-pass cutoff in low-power mode
            dr: uint = 3..5,
            /// Power mode (000 = power-down, 001 = normal, 010-110 = low-power)
            pm: uint = 5..8,
        },

        /// CTRL_REG2 - Memory reboot and high-pass filter (0x21)
        register CtrlReg2 {
            const ADDRESS = 0x21;
            const SIZE_BITS = 8;

            /// High-pass filter cutoff configuration
            hpcf: uint = 0..2,
            /// High-pass filter enabled for interrupt 1 source
            hp_en_1: bool = 2,
            /// High-pass filter enabled for interrupt 2 source
            hp_en_2: bool = 3,
            /// Filtered data selection (output registers take filtered data)
            fds: bool = 4,
            /// High-pass filter mode (00 = normal, 01 = reference)
            hpm: uint = 5..7,
            /// Reboot memory content
            boot: bool = 7,
        },

        /// CTRL_REG3 - Interrupt pin configuration (0x22)
        register CtrlReg3 {
            const ADDRESS = 0x22;
            const SIZE_BITS = 8;

            /// INT1 pad signal source
            i_1_cfg: uint = 0..2,
            /// Latch interrupt request on INT1_SRC
            lir_1: bool = 2,
            /// INT2 pad signal source
            i_2_cfg: uint = 3..5,
            /// Latch interrupt request on INT2_SRC
            lir_2: bool = 5,
            /// Open-drain pads (0 = push-pull)
            pp_od: bool = 6,
            /// Interrupt active low
            ihl: bool = 7,
        },

        /// CTRL_REG4 - Block data update, endianness and full scale (0x23)
        register CtrlReg4 {
            const ADDRESS = 0x23;
            const SIZE_BITS = 8;

            /// SPI serial interface mode (0 = 4-wire, 1 = 3-wire)
            sim: bool = 0,
            reserved_3_1: uint = 1..4,
            /// Full-scale selection (10 is not a legal encoding)
            fs: uint = 4..6,
            /// Big/little endian data selection (0 = little endian)
            ble: bool = 6,
            /// Block data update
            bdu: bool = 7,
        },

        /// CTRL_REG5 - Sleep-to-wake (0x24)
        register CtrlReg5 {
            const ADDRESS = 0x24;
            const SIZE_BITS = 8;

            /// Sleep-to-wake function (00 = disabled, 11 = low-power sleep-to-wake)
            turn_on: uint = 0..2,
            reserved_7_2: uint = 2..8,
        },

        /// HP_FILTER_RESET - Dummy register; reading it zeroes the high-pass filter (0x25)
        register HpFilterReset {
            const ADDRESS = 0x25;
            const SIZE_BITS = 8;

            /// Dummy content
            value: uint = 0..8,
        },

        /// REFERENCE - High-pass filter reference value (0x26)
        register Reference {
            const ADDRESS = 0x26;
            const SIZE_BITS = 8;

            /// Reference value
            reference: uint = 0..8,
        },

        /// STATUS_REG - Data availability and overrun (0x27)
        register StatusReg {
            const ADDRESS = 0x27;
            const SIZE_BITS = 8;

            /// X-axis new data available
            xda: bool = 0,
            /// Y-axis new data available
            yda: bool = 1,
            /// Z-axis new data available
            zda: bool = 2,
            /// X, Y and Z new data available
            zyxda: bool = 3,
            /// X-axis data overrun
            x_or: bool = 4,
            /// Y-axis data overrun
            y_or: bool = 5,
            /// Z-axis data overrun
            z_or: bool = 6,
            /// X, Y and Z data overrun
            zyxor: bool = 7,
        },

        /// INT1_CFG - Interrupt 1 configuration (0x30)
        register Int1Cfg {
            const ADDRESS = 0x30;
            const SIZE_BITS = 8;

            /// Interrupt on X low event
            xlie: bool = 0,
            /// Interrupt on X high event
            xhie: bool = 1,
            /// Interrupt on Y low event
            ylie: bool = 2,
            /// Interrupt on Y high event
            yhie: bool = 3,
            /// Interrupt on Z low event
            zlie: bool = 4,
            /// Interrupt on Z high event
            zhie: bool = 5,
            /// 6-direction detection
            six_d: bool = 6,
            /// AND/OR combination of interrupt events
            aoi: bool = 7,
        },

        /// INT1_SRC - Interrupt 1 source (0x31), reading clears a latched interrupt
        register Int1Src {
            const ADDRESS = 0x31;
            const SIZE_BITS = 8;

            /// X low
            xl: bool = 0,
            /// X high
            xh: bool = 1,
            /// Y low
            yl: bool = 2,
            /// Y high
            yh: bool = 3,
            /// Z low
            zl: bool = 4,
            /// Z high
            zh: bool = 5,
            /// Interrupt active
            ia: bool = 6,
            reserved_7: uint = 7..8,
        },

        /// INT1_THS - Interrupt 1 threshold (0x32)
        register Int1Ths {
            const ADDRESS = 0x32;
            const SIZE_BITS = 8;

            /// Threshold (7 bits)
            ths: uint = 0..7,
            reserved_7: uint = 7..8,
        },

        /// INT1_DURATION - Interrupt 1 duration (0x33)
        register Int1Duration {
            const ADDRESS = 0x33;
            const SIZE_BITS = 8;

            /// Minimum event duration in ODR periods (7 bits)
            duration: uint = 0..7,
            reserved_7: uint = 7..8,
        },

        /// INT2_CFG - Interrupt 2 configuration (0x34)
        register Int2Cfg {
            const ADDRESS = 0x34;
            const SIZE_BITS = 8;

            /// Interrupt on X low event
            xlie: bool = 0,
            /// Interrupt on X high event
            xhie: bool = 1,
            /// Interrupt on Y low event
            ylie: bool = 2,
            /// Interrupt on Y high event
            yhie: bool = 3,
            /// Interrupt on Z low event
            zlie: bool = 4,
            /// Interrupt on Z high event
            zhie: bool = 5,
            /// 6-direction detection
            six_d: bool = 6,
            /// AND/OR combination of interrupt events
            aoi: bool = 7,
        },

        /// INT2_SRC - Interrupt 2 source (0x35), reading clears a latched interrupt
        register Int2Src {
            const ADDRESS = 0x35;
            const SIZE_BITS = 8;

            /// X low
            xl: bool = 0,
            /// X high
            xh: bool = 1,
            /// Y low
            yl: bool = 2,
            /// Y high
            yh: bool = 3,
            /// Z low
            zl: bool = 4,
            /// Z high
            zh: bool = 5,
            /// Interrupt active
            ia: bool = 6,
            reserved_7: uint = 7..8,
        },

        /// INT2_THS - Interrupt 2 threshold (0x36)
        register Int2Ths {
            const ADDRESS = 0x36;
            const SIZE_BITS = 8;

            /// Threshold (7 bits)
            ths: uint = 0..7,
            reserved_7: uint = 7..8,
        },

        /// INT2_DURATION - Interrupt 2 duration (0x37)
        register Int2Duration {
            const ADDRESS = 0x37;
            const SIZE_BITS = 8;

            /// Minimum event duration in ODR periods (7 bits)
            duration: uint = 0..7,
            reserved_7: uint = 7..8,
        }
    }
);

/// Address of `OUT_X_L`, the first of the six output data registers
pub const OUT_X_L: u8 = 0x28;
