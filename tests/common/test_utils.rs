//! Test utilities and helper functions

use crate::common::mock_interface::MockInterface;
use lis331::{H3lis331dl, Lis331Driver, Lis331hh};

/// Mock delay implementation for testing
///
/// This is a no-op delay that implements the embedded-hal DelayNs trait
/// for use in tests where actual delays are not needed.
#[derive(Debug, Clone, Copy)]
pub struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {
        // No-op for testing
    }
}

/// Create a LIS331HH mock driver for testing
/// Returns (driver, interface) where interface is a clone that shares state with the driver
pub fn create_mock_driver() -> (Lis331Driver<MockInterface, Lis331hh>, MockInterface) {
    let interface = MockInterface::new();
    let interface_clone = interface.clone();
    let driver = Lis331Driver::new(interface, Lis331hh).expect("Failed to create mock driver");
    (driver, interface_clone)
}

/// Create an H3LIS331DL mock driver for testing
pub fn create_mock_h3lis331() -> (Lis331Driver<MockInterface, H3lis331dl>, MockInterface) {
    let interface = MockInterface::new();
    let interface_clone = interface.clone();
    let driver =
        Lis331Driver::new(interface, H3lis331dl).expect("Failed to create mock driver");
    (driver, interface_clone)
}

/// Assert that two floating point values are approximately equal
pub fn assert_float_eq(a: f32, b: f32, epsilon: f32) {
    let diff = (a - b).abs();
    assert!(
        diff < epsilon,
        "Values not equal within epsilon: {} vs {} (diff: {}, epsilon: {})",
        a,
        b,
        diff,
        epsilon
    );
}
