//! Unit tests for full-scale range selection

use crate::common::{create_mock_driver, create_mock_h3lis331, reg, test_utils};
use lis331::{Error, FullScaleRange, H3lis331Range, Lis331hhRange};

#[test]
fn test_lis331hh_range_round_trip() {
    let (mut driver, _interface) = create_mock_driver();

    for range in [Lis331hhRange::G6, Lis331hhRange::G12, Lis331hhRange::G24] {
        driver.set_range(range).unwrap();
        assert_eq!(driver.range().unwrap(), range, "Range {:?} should read back", range);
    }
}

#[test]
fn test_h3lis331_range_round_trip() {
    let (mut driver, _interface) = create_mock_h3lis331();

    for range in [H3lis331Range::G100, H3lis331Range::G200, H3lis331Range::G400] {
        driver.set_range(range).unwrap();
        assert_eq!(driver.range().unwrap(), range, "Range {:?} should read back", range);
    }
}

#[test]
fn test_range_register_encoding() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_range(Lis331hhRange::G24).unwrap();
    assert_eq!(interface.get_register(reg::CTRL_REG4) & 0x30, 0x30);

    driver.set_range(Lis331hhRange::G12).unwrap();
    assert_eq!(interface.get_register(reg::CTRL_REG4) & 0x30, 0x10);

    driver.set_range(Lis331hhRange::G6).unwrap();
    assert_eq!(interface.get_register(reg::CTRL_REG4) & 0x30, 0x00);
}

#[test]
fn test_set_range_preserves_other_bits() {
    let (mut driver, interface) = create_mock_driver();
    driver.init(&mut test_utils::MockDelay).unwrap();

    driver.set_range(Lis331hhRange::G12).unwrap();

    // BDU stays set
    assert_eq!(interface.get_register(reg::CTRL_REG4), 0x90);
}

#[test]
fn test_unsupported_fs_encoding_rejected() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(reg::CTRL_REG4, 0x20);
    let result = driver.range();
    assert!(matches!(result, Err(Error::InvalidConfig)));

    // The scale used for readings is unchanged
    assert_eq!(driver.cached_range(), Lis331hhRange::G6);
}

#[test]
fn test_new_picks_up_configured_range() {
    let interface = crate::common::mock_interface::MockInterface::new();
    interface.set_register(reg::CTRL_REG4, 0x30);

    let driver = lis331::Lis331Driver::new(interface, lis331::H3lis331dl).unwrap();
    assert_eq!(driver.cached_range(), H3lis331Range::G400);
}

#[test]
fn test_range_changes_scale() {
    let (mut driver, interface) = create_mock_h3lis331();
    interface.set_accel_counts(1024, 0, 0);

    driver.set_range(H3lis331Range::G100).unwrap();
    let low = driver.acceleration_g().unwrap();

    driver.set_range(H3lis331Range::G400).unwrap();
    let high = driver.acceleration_g().unwrap();

    test_utils::assert_float_eq(low.x, 50.0, 1e-3);
    test_utils::assert_float_eq(high.x, 200.0, 1e-3);
    test_utils::assert_float_eq(
        high.x / low.x,
        H3lis331Range::G400.lsb_g() / H3lis331Range::G100.lsb_g(),
        1e-5,
    );
}

#[test]
fn test_block_data_update_keeps_range() {
    let (mut driver, interface) = create_mock_driver();
    driver.set_range(Lis331hhRange::G24).unwrap();

    driver.set_block_data_update(true).unwrap();
    assert_eq!(interface.get_register(reg::CTRL_REG4), 0xB0);

    driver.set_block_data_update(false).unwrap();
    assert_eq!(interface.get_register(reg::CTRL_REG4), 0x30);
    assert_eq!(driver.range().unwrap(), Lis331hhRange::G24);
}
