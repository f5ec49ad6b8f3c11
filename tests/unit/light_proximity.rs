//! Unit tests for light and proximity sensing

use crate::common::create_initialized_driver;
use apds9960::{AmbientLightGain, ColorData, LedDrive, Persistence, ProximityGain};

const ENABLE: u8 = 0x80;
const STATUS: u8 = 0x93;

#[test]
fn test_enable_light_sensor_sequence() {
    let (mut driver, interface) = create_initialized_driver();
    interface.set_register(0x8F, 0xC0 | 0x03); // 12.5 mA, AGAIN 64x

    driver.enable_light_sensor(true).unwrap();

    assert_eq!(driver.get_ambient_light_gain().unwrap(), AmbientLightGain::X4);
    assert_eq!(driver.get_led_drive().unwrap(), LedDrive::Ma12_5);
    assert_eq!(interface.writes_to(ENABLE), vec![0x10, 0x11, 0x13]);
}

#[test]
fn test_enable_light_sensor_without_interrupts() {
    let (mut driver, interface) = create_initialized_driver();
    interface.set_register(ENABLE, 0x10);

    driver.enable_light_sensor(false).unwrap();

    assert_eq!(interface.get_register(ENABLE), 0x03);
}

#[test]
fn test_disable_light_sensor() {
    let (mut driver, interface) = create_initialized_driver();
    driver.enable_light_sensor(true).unwrap();

    driver.disable_light_sensor().unwrap();

    assert_eq!(interface.get_register(ENABLE), 0x01);
}

#[test]
fn test_enable_proximity_sensor_sequence() {
    let (mut driver, interface) = create_initialized_driver();
    interface.set_register(0x8F, 0xFF);

    driver.enable_proximity_sensor(false).unwrap();

    assert_eq!(driver.get_proximity_gain().unwrap(), ProximityGain::X4);
    assert_eq!(driver.get_led_drive().unwrap(), LedDrive::Ma100);
    assert_eq!(interface.get_register(0x8F), 0x3B);
    assert_eq!(interface.writes_to(ENABLE), vec![0x00, 0x01, 0x05]);
}

#[test]
fn test_disable_proximity_sensor() {
    let (mut driver, interface) = create_initialized_driver();
    driver.enable_proximity_sensor(true).unwrap();
    assert_eq!(interface.get_register(ENABLE), 0x25);

    driver.disable_proximity_sensor().unwrap();

    assert_eq!(interface.get_register(ENABLE), 0x01);
}

#[test]
fn test_read_channels() {
    let (mut driver, interface) = create_initialized_driver();
    interface.set_register_u16(0x94, 1234);
    interface.set_register_u16(0x96, 0x0102);
    interface.set_register_u16(0x98, 0xBEEF);
    interface.set_register_u16(0x9A, 7);
    interface.set_register(0x9C, 200);

    assert_eq!(driver.read_ambient_light().unwrap(), 1234);
    assert_eq!(driver.read_red_light().unwrap(), 0x0102);
    assert_eq!(driver.read_green_light().unwrap(), 0xBEEF);
    assert_eq!(driver.read_blue_light().unwrap(), 7);
    assert_eq!(driver.read_proximity().unwrap(), 200);
}

#[test]
fn test_read_color_single_block() {
    let (mut driver, interface) = create_initialized_driver();
    interface.set_register_u16(0x94, 1000);
    interface.set_register_u16(0x96, 300);
    interface.set_register_u16(0x98, 400);
    interface.set_register_u16(0x9A, 0xFFFF);

    let color = driver.read_color().unwrap();

    assert_eq!(
        color,
        ColorData {
            clear: 1000,
            red: 300,
            green: 400,
            blue: 0xFFFF,
        }
    );
    assert_eq!(
        interface.read_addresses(),
        vec![0x94, 0x95, 0x96, 0x97, 0x98, 0x99, 0x9A, 0x9B]
    );
}

#[test]
fn test_light_thresholds_little_endian() {
    let (mut driver, interface) = create_initialized_driver();

    driver.set_light_int_low_threshold(0x1234).unwrap();
    driver.set_light_int_high_threshold(0xABCD).unwrap();

    assert_eq!(interface.get_register(0x84), 0x34);
    assert_eq!(interface.get_register(0x85), 0x12);
    assert_eq!(interface.get_register(0x86), 0xCD);
    assert_eq!(interface.get_register(0x87), 0xAB);
    assert_eq!(driver.get_light_int_low_threshold().unwrap(), 0x1234);
    assert_eq!(driver.get_light_int_high_threshold().unwrap(), 0xABCD);
}

#[test]
fn test_proximity_thresholds_read_back() {
    let (mut driver, interface) = create_initialized_driver();

    driver.set_proximity_int_low_threshold(12).unwrap();
    driver.set_proximity_int_high_threshold(180).unwrap();

    assert_eq!(interface.get_register(0x89), 12);
    assert_eq!(interface.get_register(0x8B), 180);
    assert_eq!(driver.get_proximity_int_low_threshold().unwrap(), 12);
    assert_eq!(driver.get_proximity_int_high_threshold().unwrap(), 180);
}

#[test]
fn test_clear_interrupts() {
    let (mut driver, interface) = create_initialized_driver();
    interface.set_register(STATUS, 0x33);

    driver.clear_proximity_interrupt().unwrap();
    let status = driver.read_status().unwrap();
    assert!(!status.proximity_interrupt);
    assert!(status.ambient_light_interrupt);

    driver.clear_ambient_light_interrupt().unwrap();
    let status = driver.read_status().unwrap();
    assert!(!status.ambient_light_interrupt);
    assert!(status.ambient_light_valid);
    assert!(status.proximity_valid);

    assert!(interface.read_addresses().contains(&0xE5));
    assert!(interface.read_addresses().contains(&0xE7));
    assert!(!interface.has_writes());
}

#[test]
fn test_read_status() {
    let (mut driver, interface) = create_initialized_driver();
    interface.set_register(STATUS, 0b1100_0100);

    let status = driver.read_status().unwrap();

    assert!(status.gesture_interrupt);
    assert!(status.proximity_saturation);
    assert!(status.clear_saturation);
    assert!(!status.ambient_light_valid);
    assert!(status.any_interrupt());
}

#[test]
fn test_persistence_round_trip() {
    let (mut driver, interface) = create_initialized_driver();

    driver.set_persistence(Persistence::new(5, 12)).unwrap();

    assert_eq!(interface.get_register(0x8C), 0x5C);
    assert_eq!(driver.get_persistence().unwrap(), Persistence::new(5, 12));
}
