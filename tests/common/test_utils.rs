//! Test utilities and helper functions

use crate::common::mock_interface::MockInterface;
use apds9960::Apds9960Driver;

/// Mock delay implementation for testing
///
/// Returns immediately but records every requested millisecond delay, so
/// tests can assert the polling cadence of the gesture loop.
#[derive(Debug, Clone, Default)]
pub struct MockDelay {
    ms_calls: Vec<u32>,
    total_ns: u64,
}

impl MockDelay {
    /// Create a delay with an empty record
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Millisecond delays requested, in order
    #[allow(dead_code)]
    pub fn ms_calls(&self) -> &[u32] {
        &self.ms_calls
    }

    /// Total requested delay in milliseconds
    #[allow(dead_code)]
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.ms_calls.push(ms);
        self.total_ns += u64::from(ms) * 1_000_000;
    }
}

/// Create a mock driver for testing
/// Returns (driver, interface) where interface is a clone that shares state with the driver
#[allow(dead_code)]
pub fn create_mock_driver() -> (Apds9960Driver<MockInterface>, MockInterface) {
    let interface = MockInterface::new();
    let interface_clone = interface.clone();
    let driver = Apds9960Driver::new(interface);
    (driver, interface_clone)
}

/// Create a mock driver that has completed `init()`, with an empty operations log
#[allow(dead_code)]
pub fn create_initialized_driver() -> (Apds9960Driver<MockInterface>, MockInterface) {
    let (mut driver, interface) = create_mock_driver();
    driver.init().expect("Failed to initialize mock driver");
    interface.clear_operations();
    (driver, interface)
}

/// Five-quad FIFO frame: `first`, three out-of-range quads, `last`
#[allow(dead_code)]
pub fn gesture_frame(first: [u8; 4], last: [u8; 4]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(20);
    frame.extend_from_slice(&first);
    frame.extend_from_slice(&[0; 12]);
    frame.extend_from_slice(&last);
    frame
}

/// Frame producing an upward swipe (up/down delta -83)
#[allow(dead_code)]
pub fn swipe_up_frame() -> Vec<u8> {
    gesture_frame([100, 50, 80, 20], [40, 120, 80, 20])
}

/// Frame producing a leftward swipe (left/right delta -83)
#[allow(dead_code)]
pub fn swipe_left_frame() -> Vec<u8> {
    gesture_frame([80, 20, 100, 50], [80, 20, 40, 120])
}

/// Frame with identical first and last quads
#[allow(dead_code)]
pub fn still_frame() -> Vec<u8> {
    gesture_frame([100, 100, 100, 100], [100, 100, 100, 100])
}

/// Frame with a small change on both axes
#[allow(dead_code)]
pub fn drift_frame() -> Vec<u8> {
    gesture_frame([100, 100, 100, 100], [110, 100, 110, 100])
}
