//! Unit tests for bit-field accessors
//!
//! Every setter must read-modify-write: the field reads back what was set and
//! every other bit of the shared register keeps its value.

use crate::common::create_mock_driver;
use apds9960::{AmbientLightGain, GestureGain, GestureWaitTime, LedBoost, LedDrive, ProximityGain};

const CONTROL: u8 = 0x8F;
const CONFIG2: u8 = 0x90;
const CONFIG3: u8 = 0x9F;
const GCONF2: u8 = 0xA3;
const GCONF4: u8 = 0xAB;
const ENABLE: u8 = 0x80;

const LED_DRIVES: [LedDrive; 4] = [
    LedDrive::Ma100,
    LedDrive::Ma50,
    LedDrive::Ma25,
    LedDrive::Ma12_5,
];

#[test]
fn test_led_drive_round_trip() {
    for background in [0x00, 0xFF, 0x15] {
        for drive in LED_DRIVES {
            let (mut driver, interface) = create_mock_driver();
            interface.set_register(CONTROL, background);

            driver.set_led_drive(drive).unwrap();

            assert_eq!(driver.get_led_drive().unwrap(), drive);
            let raw = interface.get_register(CONTROL);
            assert_eq!(raw & 0x3F, background & 0x3F);
            assert_eq!(raw >> 6, drive as u8);
        }
    }
}

#[test]
fn test_proximity_gain_round_trip() {
    for background in [0x00, 0xFF, 0xA2] {
        for gain in [
            ProximityGain::X1,
            ProximityGain::X2,
            ProximityGain::X4,
            ProximityGain::X8,
        ] {
            let (mut driver, interface) = create_mock_driver();
            interface.set_register(CONTROL, background);

            driver.set_proximity_gain(gain).unwrap();

            assert_eq!(driver.get_proximity_gain().unwrap(), gain);
            let raw = interface.get_register(CONTROL);
            assert_eq!(raw & !0x0C, background & !0x0C);
            assert_eq!((raw >> 2) & 0x03, gain as u8);
        }
    }
}

#[test]
fn test_ambient_light_gain_round_trip() {
    for background in [0x00, 0xFF, 0x5C] {
        for gain in [
            AmbientLightGain::X1,
            AmbientLightGain::X4,
            AmbientLightGain::X16,
            AmbientLightGain::X64,
        ] {
            let (mut driver, interface) = create_mock_driver();
            interface.set_register(CONTROL, background);

            driver.set_ambient_light_gain(gain).unwrap();

            assert_eq!(driver.get_ambient_light_gain().unwrap(), gain);
            let raw = interface.get_register(CONTROL);
            assert_eq!(raw & !0x03, background & !0x03);
            assert_eq!(raw & 0x03, gain as u8);
        }
    }
}

#[test]
fn test_led_boost_round_trip() {
    for background in [0x00, 0xFF, 0x81] {
        for boost in [
            LedBoost::Percent100,
            LedBoost::Percent150,
            LedBoost::Percent200,
            LedBoost::Percent300,
        ] {
            let (mut driver, interface) = create_mock_driver();
            interface.set_register(CONFIG2, background);

            driver.set_led_boost(boost).unwrap();

            assert_eq!(driver.get_led_boost().unwrap(), boost);
            let raw = interface.get_register(CONFIG2);
            assert_eq!(raw & !0x30, background & !0x30);
            assert_eq!((raw >> 4) & 0x03, boost as u8);
        }
    }
}

#[test]
fn test_gesture_gain_round_trip() {
    for background in [0x00, 0xFF, 0x9B] {
        for gain in [GestureGain::X1, GestureGain::X2, GestureGain::X4, GestureGain::X8] {
            let (mut driver, interface) = create_mock_driver();
            interface.set_register(GCONF2, background);

            driver.set_gesture_gain(gain).unwrap();

            assert_eq!(driver.get_gesture_gain().unwrap(), gain);
            let raw = interface.get_register(GCONF2);
            assert_eq!(raw & !0x60, background & !0x60);
            assert_eq!((raw >> 5) & 0x03, gain as u8);
        }
    }
}

#[test]
fn test_gesture_led_drive_round_trip() {
    for background in [0x00, 0xFF, 0xE6] {
        for drive in LED_DRIVES {
            let (mut driver, interface) = create_mock_driver();
            interface.set_register(GCONF2, background);

            driver.set_gesture_led_drive(drive).unwrap();

            assert_eq!(driver.get_gesture_led_drive().unwrap(), drive);
            let raw = interface.get_register(GCONF2);
            assert_eq!(raw & !0x18, background & !0x18);
            assert_eq!((raw >> 3) & 0x03, drive as u8);
        }
    }
}

#[test]
fn test_gesture_wait_time_round_trip() {
    let times = [
        GestureWaitTime::Ms0,
        GestureWaitTime::Ms2_8,
        GestureWaitTime::Ms5_6,
        GestureWaitTime::Ms8_4,
        GestureWaitTime::Ms14_0,
        GestureWaitTime::Ms22_4,
        GestureWaitTime::Ms30_8,
        GestureWaitTime::Ms39_2,
    ];
    for background in [0x00, 0xFF, 0x78] {
        for time in times {
            let (mut driver, interface) = create_mock_driver();
            interface.set_register(GCONF2, background);

            driver.set_gesture_wait_time(time).unwrap();

            assert_eq!(driver.get_gesture_wait_time().unwrap(), time);
            let raw = interface.get_register(GCONF2);
            assert_eq!(raw & !0x07, background & !0x07);
            assert_eq!(raw & 0x07, time as u8);
        }
    }
}

#[test]
fn test_interrupt_enables_round_trip() {
    for background in [0x00, 0xFF, 0x4D] {
        for enable in [true, false] {
            let (mut driver, interface) = create_mock_driver();
            interface.set_register(ENABLE, background);

            driver.set_ambient_light_int_enable(enable).unwrap();
            assert_eq!(driver.is_ambient_light_int_enabled().unwrap(), enable);
            let raw = interface.get_register(ENABLE);
            assert_eq!(raw & !0x10, background & !0x10);

            interface.set_register(ENABLE, background);
            driver.set_proximity_int_enable(enable).unwrap();
            assert_eq!(driver.is_proximity_int_enabled().unwrap(), enable);
            let raw = interface.get_register(ENABLE);
            assert_eq!(raw & !0x20, background & !0x20);
        }
    }
}

#[test]
fn test_gesture_int_and_mode_round_trip() {
    for background in [0x00, 0xFF, 0xF4] {
        for enable in [true, false] {
            let (mut driver, interface) = create_mock_driver();
            interface.set_register(GCONF4, background);

            driver.set_gesture_int_enable(enable).unwrap();
            assert_eq!(driver.is_gesture_int_enabled().unwrap(), enable);
            let raw = interface.get_register(GCONF4);
            assert_eq!(raw & !0x02, background & !0x02);

            interface.set_register(GCONF4, background);
            driver.set_gesture_mode(enable).unwrap();
            assert_eq!(driver.is_gesture_mode().unwrap(), enable);
            let raw = interface.get_register(GCONF4);
            assert_eq!(raw & !0x01, background & !0x01);
        }
    }
}

#[test]
fn test_config3_fields_round_trip() {
    for background in [0x00, 0xFF, 0xC3] {
        let (mut driver, interface) = create_mock_driver();
        interface.set_register(CONFIG3, background);

        driver.set_proximity_gain_compensation(true).unwrap();
        assert!(driver.is_proximity_gain_compensation_enabled().unwrap());
        driver.set_proximity_gain_compensation(false).unwrap();
        assert!(!driver.is_proximity_gain_compensation_enabled().unwrap());
        assert_eq!(
            interface.get_register(CONFIG3) & !0x20,
            background & !0x20
        );

        for mask in 0..=0x0F {
            interface.set_register(CONFIG3, background);
            driver.set_proximity_photo_mask(mask).unwrap();
            assert_eq!(driver.get_proximity_photo_mask().unwrap(), mask);
            let raw = interface.get_register(CONFIG3);
            assert_eq!(raw & 0xF0, background & 0xF0);
        }
    }
}

#[test]
fn test_photo_mask_ignores_upper_bits() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(CONFIG3, 0x20);

    driver.set_proximity_photo_mask(0xF5).unwrap();

    assert_eq!(driver.get_proximity_photo_mask().unwrap(), 0x05);
    assert_eq!(interface.get_register(CONFIG3), 0x25);
}

#[test]
fn test_gesture_thresholds_round_trip() {
    let (mut driver, interface) = create_mock_driver();

    for value in [0, 1, 40, 128, 255] {
        driver.set_gesture_enter_threshold(value).unwrap();
        driver.set_gesture_exit_threshold(255 - value).unwrap();
        assert_eq!(driver.get_gesture_enter_threshold().unwrap(), value);
        assert_eq!(driver.get_gesture_exit_threshold().unwrap(), 255 - value);
        assert_eq!(interface.get_register(0xA0), value);
        assert_eq!(interface.get_register(0xA1), 255 - value);
    }
}
