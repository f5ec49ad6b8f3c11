//! Sensor modules for the APDS-9960
//!
//! This module provides the typed field values for each sensing engine in
//! the APDS-9960:
//! - Ambient light / RGB color
//! - Proximity (including the shared IR LED drive and boost)
//! - Gesture
//!
//! All register access is performed through methods on `Apds9960Driver`.

pub mod gesture;
pub mod light;
pub mod proximity;

// Re-export main types
pub use gesture::{GestureGain, GestureWaitTime};
pub use light::{AmbientLightGain, ColorData};
pub use proximity::{LedBoost, LedDrive, ProximityGain};
