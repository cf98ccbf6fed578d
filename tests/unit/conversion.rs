//! Unit tests for acceleration readings and unit conversion

use crate::common::{Operation, assert_float_eq, create_mock_driver, create_mock_h3lis331, reg};
use lis331::{AccelData, FullScaleRange, H3lis331Range, Lis331hhRange, STANDARD_GRAVITY};

#[test]
fn test_read_raw_counts() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_accel_counts(100, -200, 2047);

    let raw = driver.read_raw().unwrap();
    assert_eq!(raw, AccelData { x: 100, y: -200, z: 2047 });
}

#[test]
fn test_raw_extremes_sign_extend() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_accel_counts(-2048, -1, 0);

    let raw = driver.read_raw().unwrap();
    assert_eq!(raw.x, -2048);
    assert_eq!(raw.y, -1);
    assert_eq!(raw.z, 0);
}

#[test]
fn test_low_padding_bits_ignored() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_accel_counts(1, 1, 1);
    // Garbage in the unused low nibble
    interface.set_register(reg::OUT_X_L, 0x1F);

    assert_eq!(driver.read_raw().unwrap().x, 1);
}

#[test]
fn test_reading_is_one_burst() {
    let (mut driver, interface) = create_mock_driver();
    interface.clear_operations();

    driver.read_raw().unwrap();

    let ops = interface.operations();
    assert_eq!(
        ops[0],
        Operation::BurstRead {
            address: reg::OUT_X_L,
            len: 6
        }
    );
    let bursts = ops
        .iter()
        .filter(|op| matches!(op, Operation::BurstRead { .. }))
        .count();
    assert_eq!(bursts, 1);
}

#[test]
fn test_acceleration_g_default_range() {
    let (mut driver, interface) = create_mock_driver();
    // 1 g on the +/-6 g range is 4096 / 12 counts
    interface.set_accel_counts(0, 0, 341);

    let accel = driver.acceleration_g().unwrap();
    assert_float_eq(accel.x, 0.0, 1e-6);
    assert_float_eq(accel.y, 0.0, 1e-6);
    assert_float_eq(accel.z, 341.0 * Lis331hhRange::G6.lsb_g(), 1e-6);
    assert_float_eq(accel.z, 1.0, 5e-3);
}

#[test]
fn test_acceleration_sign() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_accel_counts(-1024, 1024, -512);

    let accel = driver.acceleration_g().unwrap();
    assert!(accel.x < 0.0);
    assert!(accel.y > 0.0);
    assert!(accel.z < 0.0);
    assert_float_eq(accel.x, -3.0, 1e-5);
    assert_float_eq(accel.y, 3.0, 1e-5);
    assert_float_eq(accel.z, -1.5, 1e-5);
}

#[test]
fn test_acceleration_si_units() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_accel_counts(1024, 0, -1024);

    let accel = driver.acceleration().unwrap();
    assert_float_eq(accel.x, 3.0 * STANDARD_GRAVITY, 1e-4);
    assert_float_eq(accel.y, 0.0, 1e-6);
    assert_float_eq(accel.z, -3.0 * STANDARD_GRAVITY, 1e-4);
}

#[test]
fn test_acceleration_follows_range() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_accel_counts(2047, 0, 0);

    driver.set_range(Lis331hhRange::G24).unwrap();
    let accel = driver.acceleration_g().unwrap();

    // Full positive scale is just under the range limit
    assert_float_eq(accel.x, 2047.0 * 48.0 / 4096.0, 1e-4);
    assert!(accel.x < 24.0);
}

#[test]
fn test_h3lis331_full_scale() {
    let (mut driver, interface) = create_mock_h3lis331();
    interface.set_accel_counts(-2048, 0, 0);

    driver.set_range(H3lis331Range::G200).unwrap();
    let accel = driver.acceleration_g().unwrap();
    assert_float_eq(accel.x, -200.0, 1e-3);
}

#[test]
fn test_magnitude() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_accel_counts(1024, 1024, 0);

    let accel = driver.acceleration_g().unwrap();
    assert_float_eq(accel.magnitude(), libm::sqrtf(18.0), 1e-4);
}

#[test]
fn test_status_flags() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(reg::STATUS_REG, 0x00);
    assert!(!driver.data_ready().unwrap());

    // ZYXDA and ZYXOR
    interface.set_register(reg::STATUS_REG, 0x88);
    assert!(driver.data_ready().unwrap());

    let status = driver.status().unwrap();
    assert!(status.xyz_ready());
    assert!(status.data_available.3);
    assert!(status.overrun.3);
    assert!(!status.data_available.0);
}
