//! Unit tests for the high-pass filter

use crate::common::{Operation, create_mock_driver, reg};
use lis331::{Error, HighPassConfig, HighPassCutoff, HighPassMode};

#[test]
fn test_enable_hpf_without_reference() {
    let (mut driver, interface) = create_mock_driver();

    driver
        .enable_hpf(true, HighPassCutoff::OdrDiv100, false)
        .unwrap();

    // FDS set, HPM = 00, HPCF = 01
    assert_eq!(interface.get_register(reg::CTRL_REG2), 0b0001_0001);

    let config = driver.high_pass_filter().unwrap();
    assert!(config.enabled);
    assert_eq!(config.cutoff, HighPassCutoff::OdrDiv100);
    assert_eq!(config.mode, HighPassMode::Normal);
}

#[test]
fn test_enable_hpf_with_reference() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_hpf_reference(50).unwrap();
    driver
        .enable_hpf(true, HighPassCutoff::OdrDiv400, true)
        .unwrap();

    assert_eq!(interface.get_register(reg::CTRL_REG2), 0b0011_0011);
    assert_eq!(interface.get_register(reg::REFERENCE), 50);
    assert_eq!(driver.hpf_reference().unwrap(), 50);
    assert_eq!(driver.high_pass_filter().unwrap().mode, HighPassMode::Reference);
}

#[test]
fn test_disable_hpf() {
    let (mut driver, _interface) = create_mock_driver();

    driver.enable_hpf(true, HighPassCutoff::OdrDiv50, false).unwrap();
    driver.enable_hpf(false, HighPassCutoff::OdrDiv50, false).unwrap();

    assert!(!driver.high_pass_filter().unwrap().enabled);
}

#[test]
fn test_high_pass_config_round_trip() {
    let (mut driver, _interface) = create_mock_driver();

    let cutoffs = [
        HighPassCutoff::OdrDiv50,
        HighPassCutoff::OdrDiv100,
        HighPassCutoff::OdrDiv200,
        HighPassCutoff::OdrDiv400,
    ];

    for cutoff in cutoffs {
        for mode in [HighPassMode::Normal, HighPassMode::Reference] {
            let config = HighPassConfig {
                enabled: true,
                cutoff,
                mode,
                int1: true,
                int2: false,
            };
            driver.configure_high_pass_filter(config).unwrap();
            assert_eq!(driver.high_pass_filter().unwrap(), config);
        }
    }

    driver
        .configure_high_pass_filter(HighPassConfig::default())
        .unwrap();
    assert_eq!(driver.high_pass_filter().unwrap(), HighPassConfig::default());
}

#[test]
fn test_unused_hpm_encoding_rejected() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(reg::CTRL_REG2, 0b0110_0000);
    assert!(matches!(driver.high_pass_filter(), Err(Error::InvalidConfig)));
}

#[test]
fn test_reset_hpf_reads_dummy_register() {
    let (mut driver, interface) = create_mock_driver();
    interface.clear_operations();

    driver.reset_hpf().unwrap();

    assert!(interface.operations().iter().any(|op| matches!(
        op,
        Operation::ReadRegister {
            address: reg::HP_FILTER_RESET,
            ..
        }
    )));
}
