//! Unit tests for output data rate, power mode and low-pass cutoff

use crate::common::{create_mock_driver, reg};
use lis331::{AxesEnabled, DataRate, Error, LowPassCutoff, Mode};

const ALL_RATES: [DataRate; 10] = [
    DataRate::Shutdown,
    DataRate::Hz50,
    DataRate::Hz100,
    DataRate::Hz400,
    DataRate::Hz1000,
    DataRate::LowPowerHz0_5,
    DataRate::LowPowerHz1,
    DataRate::LowPowerHz2,
    DataRate::LowPowerHz5,
    DataRate::LowPowerHz10,
];

#[test]
fn test_data_rate_round_trip() {
    let (mut driver, _interface) = create_mock_driver();

    for rate in ALL_RATES {
        driver.set_data_rate(rate).unwrap();
        assert_eq!(driver.data_rate().unwrap(), rate, "Rate {:?} should read back", rate);
    }
}

#[test]
fn test_data_rate_register_encoding() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_data_rate(DataRate::Hz1000).unwrap();
    // PM = 001, DR = 11, axes untouched
    assert_eq!(interface.get_register(reg::CTRL_REG1), 0b0011_1111);

    driver.set_data_rate(DataRate::Hz50).unwrap();
    assert_eq!(interface.get_register(reg::CTRL_REG1), 0b0010_0111);

    driver.set_data_rate(DataRate::LowPowerHz10).unwrap();
    assert_eq!(interface.get_register(reg::CTRL_REG1), 0b1100_0111);
}

#[test]
fn test_mode_follows_rate() {
    let (mut driver, _interface) = create_mock_driver();

    driver.set_data_rate(DataRate::Shutdown).unwrap();
    assert_eq!(driver.mode().unwrap(), Mode::Shutdown);

    driver.set_data_rate(DataRate::Hz400).unwrap();
    assert_eq!(driver.mode().unwrap(), Mode::Normal);

    driver.set_data_rate(DataRate::LowPowerHz2).unwrap();
    assert_eq!(driver.mode().unwrap(), Mode::LowPower);
}

#[test]
fn test_reserved_power_mode_rejected() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(reg::CTRL_REG1, 0b1110_0111);
    assert!(matches!(driver.data_rate(), Err(Error::InvalidConfig)));
    assert!(matches!(driver.mode(), Err(Error::InvalidConfig)));
}

#[test]
fn test_lpf_cutoff_round_trip_in_low_power() {
    let (mut driver, _interface) = create_mock_driver();
    driver.set_data_rate(DataRate::LowPowerHz5).unwrap();

    for cutoff in [
        LowPassCutoff::Hz37,
        LowPassCutoff::Hz74,
        LowPassCutoff::Hz292,
        LowPassCutoff::Hz780,
    ] {
        driver.set_lpf_cutoff(cutoff).unwrap();
        assert_eq!(driver.lpf_cutoff().unwrap(), Some(cutoff));
        // The cutoff shares DR with the normal-mode rate, but PM is untouched
        assert_eq!(driver.data_rate().unwrap(), DataRate::LowPowerHz5);
    }
}

#[test]
fn test_lpf_cutoff_rejected_in_normal_mode() {
    let (mut driver, interface) = create_mock_driver();
    driver.set_data_rate(DataRate::Hz100).unwrap();
    let before = interface.get_register(reg::CTRL_REG1);

    let result = driver.set_lpf_cutoff(LowPassCutoff::Hz780);
    assert!(matches!(result, Err(Error::InvalidConfig)));
    assert_eq!(interface.get_register(reg::CTRL_REG1), before);
    assert_eq!(driver.lpf_cutoff().unwrap(), None);
}

#[test]
fn test_low_power_rate_keeps_cutoff() {
    let (mut driver, _interface) = create_mock_driver();

    driver.set_data_rate(DataRate::LowPowerHz1).unwrap();
    driver.set_lpf_cutoff(LowPassCutoff::Hz292).unwrap();
    driver.set_data_rate(DataRate::LowPowerHz10).unwrap();

    assert_eq!(driver.lpf_cutoff().unwrap(), Some(LowPassCutoff::Hz292));
}

#[test]
fn test_axes_round_trip() {
    let (mut driver, _interface) = create_mock_driver();

    let axes = AxesEnabled {
        x: true,
        y: false,
        z: true,
    };
    driver.set_axes(axes).unwrap();
    assert_eq!(driver.axes().unwrap(), axes);

    driver.set_axes(AxesEnabled::default()).unwrap();
    assert_eq!(driver.axes().unwrap(), AxesEnabled::default());
}

#[test]
fn test_lpf_cutoff_staged_in_shutdown() {
    let (mut driver, _interface) = create_mock_driver();
    driver.set_data_rate(DataRate::Shutdown).unwrap();

    driver.set_lpf_cutoff(LowPassCutoff::Hz292).unwrap();
    // Not a cutoff until the device is in low-power mode
    assert_eq!(driver.lpf_cutoff().unwrap(), None);

    driver.set_data_rate(DataRate::LowPowerHz1).unwrap();
    assert_eq!(driver.lpf_cutoff().unwrap(), Some(LowPassCutoff::Hz292));
}
