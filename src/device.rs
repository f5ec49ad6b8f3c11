//! High-level driver API for the APDS-9960
//!
//! This module provides a user-friendly interface to the APDS-9960 sensor,
//! handling engine sequencing, field configuration, data reads and gesture
//! acquisition.

use crate::fifo::{GESTURE_FIFO_BYTES, GESTURE_FIFO_DEPTH, QUAD_SIZE};
use crate::gesture::{AcquisitionState, FIFO_PAUSE_TIME_MS, GestureSession, Motion};
use crate::interface::ByteAccess;
use crate::interrupt::{DeviceStatus, Persistence};
use crate::power::{EnableStatus, Feature};
use crate::registers::{RegisterDevice, addr};
use crate::sensors::{
    AmbientLightGain, ColorData, GestureGain, GestureWaitTime, LedBoost, LedDrive, ProximityGain,
};
use crate::{DEVICE_IDS, Error};

use device_driver::RegisterInterface;

// Power-on defaults written by `init()`
const DEFAULT_ATIME: u8 = 219; // 103 ms
const DEFAULT_WTIME: u8 = 246; // 27 ms
const DEFAULT_PROX_PPULSE: u8 = 0x87; // 16 us, 8 pulses
const DEFAULT_GESTURE_PPULSE: u8 = 0x89; // 16 us, 10 pulses
const DEFAULT_POFFSET_UR: u8 = 0;
const DEFAULT_POFFSET_DL: u8 = 0;
const DEFAULT_CONFIG1: u8 = 0x60; // no 12x wait
const DEFAULT_PILT: u8 = 0;
const DEFAULT_PIHT: u8 = 50;
const DEFAULT_AILT: u16 = 0xFFFF; // forces an interrupt for calibration
const DEFAULT_AIHT: u16 = 0;
const DEFAULT_PERS: u8 = 0x11; // 2 consecutive prox or ALS for int.
const DEFAULT_CONFIG2: u8 = 0x01; // no saturation ints or LED boost
const DEFAULT_CONFIG3: u8 = 0; // all photodiodes, no SAI
const DEFAULT_GPENTH: u8 = 40;
const DEFAULT_GEXTH: u8 = 30;
const DEFAULT_GCONF1: u8 = 0x40; // 4 gesture events for int., 1 for exit
const DEFAULT_GOFFSET: u8 = 0;
const DEFAULT_GPULSE: u8 = 0xC9; // 32 us, 10 pulses
const DEFAULT_GCONF3: u8 = 0; // all photodiodes active during gesture

/// WTIME written while gesture sensing is enabled
const GESTURE_WTIME: u8 = 0xFF;

/// Main driver for the APDS-9960
pub struct Apds9960Driver<I> {
    device: RegisterDevice<I>,
    gesture: GestureSession,
}

impl<I> Apds9960Driver<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Create a new APDS-9960 driver instance
    ///
    /// No bus traffic happens here. Call `init()` to identify the device and
    /// load the power-on defaults.
    pub fn new(interface: I) -> Self {
        Self {
            device: RegisterDevice::new(interface),
            gesture: GestureSession::new(),
        }
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }

    /// Get a reference to the underlying register device (for advanced usage)
    pub const fn device(&self) -> &RegisterDevice<I> {
        &self.device
    }

    /// Current gesture session state
    pub const fn gesture_session(&self) -> &GestureSession {
        &self.gesture
    }

    /// Identify the device and write every register to its power-on default
    ///
    /// All engines are switched off first. Gesture defaults are loaded but
    /// gesture mode stays off until [`enable_gesture_sensor`](Self::enable_gesture_sensor).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDevice`] if the `ID` register holds an unknown
    /// value; nothing but the `ID` register has been touched in that case.
    /// Returns [`Error::Bus`] if communication with the device fails.
    pub fn init(&mut self) -> Result<(), Error<I::Error>> {
        let id = self.read_device_id()?;
        if !DEVICE_IDS.contains(&id) {
            #[cfg(feature = "defmt")]
            defmt::warn!("APDS-9960: unexpected device ID {=u8:#x}", id);
            return Err(Error::InvalidDevice(id));
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("APDS-9960: device ID {=u8:#x}, loading defaults", id);

        self.set_mode(Feature::All, false)?;

        let bus = &mut self.device.interface;
        bus.write_byte(addr::ATIME, DEFAULT_ATIME)?;
        bus.write_byte(addr::WTIME, DEFAULT_WTIME)?;
        bus.write_byte(addr::PPULSE, DEFAULT_PROX_PPULSE)?;
        bus.write_byte(addr::POFFSET_UR, DEFAULT_POFFSET_UR)?;
        bus.write_byte(addr::POFFSET_DL, DEFAULT_POFFSET_DL)?;
        bus.write_byte(addr::CONFIG1, DEFAULT_CONFIG1)?;

        self.set_led_drive(LedDrive::default())?;
        self.set_proximity_gain(ProximityGain::default())?;
        self.set_ambient_light_gain(AmbientLightGain::default())?;
        self.set_proximity_int_low_threshold(DEFAULT_PILT)?;
        self.set_proximity_int_high_threshold(DEFAULT_PIHT)?;
        self.set_light_int_low_threshold(DEFAULT_AILT)?;
        self.set_light_int_high_threshold(DEFAULT_AIHT)?;

        let bus = &mut self.device.interface;
        bus.write_byte(addr::PERS, DEFAULT_PERS)?;
        bus.write_byte(addr::CONFIG2, DEFAULT_CONFIG2)?;
        bus.write_byte(addr::CONFIG3, DEFAULT_CONFIG3)?;

        self.set_gesture_enter_threshold(DEFAULT_GPENTH)?;
        self.set_gesture_exit_threshold(DEFAULT_GEXTH)?;
        self.device.interface.write_byte(addr::GCONF1, DEFAULT_GCONF1)?;
        self.set_gesture_gain(GestureGain::default())?;
        self.set_gesture_led_drive(LedDrive::default())?;
        self.set_gesture_wait_time(GestureWaitTime::default())?;

        let bus = &mut self.device.interface;
        bus.write_byte(addr::GOFFSET_U, DEFAULT_GOFFSET)?;
        bus.write_byte(addr::GOFFSET_D, DEFAULT_GOFFSET)?;
        bus.write_byte(addr::GOFFSET_L, DEFAULT_GOFFSET)?;
        bus.write_byte(addr::GOFFSET_R, DEFAULT_GOFFSET)?;
        bus.write_byte(addr::GPULSE, DEFAULT_GPULSE)?;
        bus.write_byte(addr::GCONF3, DEFAULT_GCONF3)?;

        self.set_gesture_int_enable(false)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("APDS-9960: initialized");

        Ok(())
    }

    /// Read the `ID` register
    ///
    /// Should return 0xAB or 0x9C for a valid APDS-9960
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_device_id(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.id().read()?;
        Ok(reg.id())
    }

    // ===== Power and mode =====

    /// Read the raw ENABLE register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn get_mode(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.interface.read_byte(addr::ENABLE)?)
    }

    /// Switch one feature, or all of them, on or off
    ///
    /// Single features read-modify-write their ENABLE bit. [`Feature::All`]
    /// writes 0x7F or 0x00 directly.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails. Nothing is
    /// written when the ENABLE read fails.
    pub fn set_mode(&mut self, feature: Feature, enable: bool) -> Result<(), Error<I::Error>> {
        let current = self.get_mode()?;
        let value = feature.apply(current, enable);

        #[cfg(feature = "defmt")]
        defmt::trace!("ENABLE {=u8:#x} -> {=u8:#x} ({})", current, value, feature);

        self.device.interface.write_byte(addr::ENABLE, value)?;
        Ok(())
    }

    /// Read and decode the ENABLE register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn enable_status(&mut self) -> Result<EnableStatus, Error<I::Error>> {
        Ok(EnableStatus::from_bits(self.get_mode()?))
    }

    /// Turn the internal oscillator on
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn enable_power(&mut self) -> Result<(), Error<I::Error>> {
        self.set_mode(Feature::Power, true)
    }

    /// Turn the internal oscillator off; every engine stops
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn disable_power(&mut self) -> Result<(), Error<I::Error>> {
        self.set_mode(Feature::Power, false)
    }

    // ===== Engine sequences =====

    /// Start the ambient light and color engine
    ///
    /// Loads the default ALS gain, sets the ALS interrupt per `interrupts`,
    /// then powers the device and enables the engine.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn enable_light_sensor(&mut self, interrupts: bool) -> Result<(), Error<I::Error>> {
        self.set_ambient_light_gain(AmbientLightGain::default())?;
        self.set_ambient_light_int_enable(interrupts)?;
        self.enable_power()?;
        self.set_mode(Feature::AmbientLight, true)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Light sensor enabled (interrupts: {})", interrupts);

        Ok(())
    }

    /// Stop the ambient light engine and its interrupt
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn disable_light_sensor(&mut self) -> Result<(), Error<I::Error>> {
        self.set_ambient_light_int_enable(false)?;
        self.set_mode(Feature::AmbientLight, false)
    }

    /// Start the proximity engine
    ///
    /// Loads the default proximity gain and LED drive, sets the proximity
    /// interrupt per `interrupts`, then powers the device and enables the
    /// engine.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn enable_proximity_sensor(&mut self, interrupts: bool) -> Result<(), Error<I::Error>> {
        self.set_proximity_gain(ProximityGain::default())?;
        self.set_led_drive(LedDrive::default())?;
        self.set_proximity_int_enable(interrupts)?;
        self.enable_power()?;
        self.set_mode(Feature::Proximity, true)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Proximity sensor enabled (interrupts: {})", interrupts);

        Ok(())
    }

    /// Stop the proximity engine and its interrupt
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn disable_proximity_sensor(&mut self) -> Result<(), Error<I::Error>> {
        self.set_proximity_int_enable(false)?;
        self.set_mode(Feature::Proximity, false)
    }

    /// Start the gesture engine
    ///
    /// Starts a fresh gesture session, loads the gesture timing (maximum
    /// wait, gesture pulse count, 300% LED boost), sets the gesture
    /// interrupt per `interrupts`, enters gesture mode, then enables power,
    /// wait, proximity and gesture in that order.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn enable_gesture_sensor(&mut self, interrupts: bool) -> Result<(), Error<I::Error>> {
        self.gesture.reset();

        self.device.interface.write_byte(addr::WTIME, GESTURE_WTIME)?;
        self.device
            .interface
            .write_byte(addr::PPULSE, DEFAULT_GESTURE_PPULSE)?;
        self.set_led_boost(LedBoost::Percent300)?;
        self.set_gesture_int_enable(interrupts)?;
        self.set_gesture_mode(true)?;

        self.enable_power()?;
        self.set_mode(Feature::Wait, true)?;
        self.set_mode(Feature::Proximity, true)?;
        self.set_mode(Feature::Gesture, true)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Gesture sensor enabled (interrupts: {})", interrupts);

        Ok(())
    }

    /// Stop the gesture engine and discard the session
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn disable_gesture_sensor(&mut self) -> Result<(), Error<I::Error>> {
        self.gesture.reset();
        self.set_gesture_int_enable(false)?;
        self.set_gesture_mode(false)?;
        self.set_mode(Feature::Gesture, false)
    }

    // ===== Data =====

    /// Read the clear channel
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_ambient_light(&mut self) -> Result<u16, Error<I::Error>> {
        Ok(self.device.cdata().read()?.cdata())
    }

    /// Read the red channel
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_red_light(&mut self) -> Result<u16, Error<I::Error>> {
        Ok(self.device.rdata().read()?.rdata())
    }

    /// Read the green channel
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_green_light(&mut self) -> Result<u16, Error<I::Error>> {
        Ok(self.device.gdata().read()?.gdata())
    }

    /// Read the blue channel
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_blue_light(&mut self) -> Result<u16, Error<I::Error>> {
        Ok(self.device.bdata().read()?.bdata())
    }

    /// Read all four color channels
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_color(&mut self) -> Result<ColorData, Error<I::Error>> {
        // One block so the channels come from the same integration cycle
        let mut buffer = [0u8; 8];
        self.device.interface.read_block(addr::CDATAL, &mut buffer)?;
        Ok(ColorData::from_le_block(&buffer))
    }

    /// Read the proximity count
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_proximity(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.pdata().read()?.pdata())
    }

    /// Read and decode the STATUS register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_status(&mut self) -> Result<DeviceStatus, Error<I::Error>> {
        let status = self.device.status().read()?;
        Ok(DeviceStatus {
            ambient_light_valid: status.avalid(),
            proximity_valid: status.pvalid(),
            gesture_interrupt: status.gint(),
            ambient_light_interrupt: status.aint(),
            proximity_interrupt: status.pint(),
            proximity_saturation: status.pgsat(),
            clear_saturation: status.cpsat(),
        })
    }

    // ===== Interrupt thresholds =====

    /// Get the ALS low interrupt threshold
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn get_light_int_low_threshold(&mut self) -> Result<u16, Error<I::Error>> {
        Ok(self.device.ailt().read()?.ailt())
    }

    /// Set the ALS low interrupt threshold
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_light_int_low_threshold(&mut self, threshold: u16) -> Result<(), Error<I::Error>> {
        self.device.ailt().write(|w| {
            w.set_ailt(threshold);
        })?;
        Ok(())
    }

    /// Get the ALS high interrupt threshold
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn get_light_int_high_threshold(&mut self) -> Result<u16, Error<I::Error>> {
        Ok(self.device.aiht().read()?.aiht())
    }

    /// Set the ALS high interrupt threshold
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_light_int_high_threshold(&mut self, threshold: u16) -> Result<(), Error<I::Error>> {
        self.device.aiht().write(|w| {
            w.set_aiht(threshold);
        })?;
        Ok(())
    }

    /// Get the proximity low interrupt threshold
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn get_proximity_int_low_threshold(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.pilt().read()?.pilt())
    }

    /// Set the proximity low interrupt threshold
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_proximity_int_low_threshold(&mut self, threshold: u8) -> Result<(), Error<I::Error>> {
        self.device.pilt().write(|w| {
            w.set_pilt(threshold);
        })?;
        Ok(())
    }

    /// Get the proximity high interrupt threshold
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn get_proximity_int_high_threshold(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.piht().read()?.piht())
    }

    /// Set the proximity high interrupt threshold
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_proximity_int_high_threshold(
        &mut self,
        threshold: u8,
    ) -> Result<(), Error<I::Error>> {
        self.device.piht().write(|w| {
            w.set_piht(threshold);
        })?;
        Ok(())
    }

    // ===== Interrupt control =====

    /// Clear the latched ambient light interrupt
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn clear_ambient_light_interrupt(&mut self) -> Result<(), Error<I::Error>> {
        // Any read of the clear address acknowledges the interrupt
        self.device.interface.read_byte(addr::AICLEAR)?;
        Ok(())
    }

    /// Clear the latched proximity interrupt
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn clear_proximity_interrupt(&mut self) -> Result<(), Error<I::Error>> {
        self.device.interface.read_byte(addr::PICLEAR)?;
        Ok(())
    }

    /// Get the interrupt persistence filter
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn get_persistence(&mut self) -> Result<Persistence, Error<I::Error>> {
        let pers = self.device.pers().read()?;
        Ok(Persistence::new(pers.ppers(), pers.apers()))
    }

    /// Set the interrupt persistence filter
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_persistence(&mut self, persistence: Persistence) -> Result<(), Error<I::Error>> {
        self.device.pers().write(|w| {
            w.set_ppers(persistence.proximity);
            w.set_apers(persistence.ambient_light);
        })?;
        Ok(())
    }

    /// Check whether the ALS interrupt output is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_ambient_light_int_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.enable().read()?.aien())
    }

    /// Enable or disable the ALS interrupt output
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_ambient_light_int_enable(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.enable().modify(|w| {
            w.set_aien(enable);
        })?;
        Ok(())
    }

    /// Check whether the proximity interrupt output is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_proximity_int_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.enable().read()?.pien())
    }

    /// Enable or disable the proximity interrupt output
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_proximity_int_enable(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.enable().modify(|w| {
            w.set_pien(enable);
        })?;
        Ok(())
    }

    /// Check whether the gesture interrupt is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_gesture_int_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.gconf_4().read()?.gien())
    }

    /// Enable or disable the gesture interrupt
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_gesture_int_enable(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.gconf_4().modify(|w| {
            w.set_gien(enable);
        })?;
        Ok(())
    }

    // ===== Analog configuration =====

    /// Get the proximity LED drive strength
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn get_led_drive(&mut self) -> Result<LedDrive, Error<I::Error>> {
        Ok(LedDrive::from_bits(self.device.control().read()?.ldrive()))
    }

    /// Set the proximity LED drive strength
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_led_drive(&mut self, drive: LedDrive) -> Result<(), Error<I::Error>> {
        self.device.control().modify(|w| {
            w.set_ldrive(drive as u8);
        })?;
        Ok(())
    }

    /// Get the proximity gain
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn get_proximity_gain(&mut self) -> Result<ProximityGain, Error<I::Error>> {
        Ok(ProximityGain::from_bits(self.device.control().read()?.pgain()))
    }

    /// Set the proximity gain
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_proximity_gain(&mut self, gain: ProximityGain) -> Result<(), Error<I::Error>> {
        self.device.control().modify(|w| {
            w.set_pgain(gain as u8);
        })?;
        Ok(())
    }

    /// Get the ALS and color gain
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn get_ambient_light_gain(&mut self) -> Result<AmbientLightGain, Error<I::Error>> {
        Ok(AmbientLightGain::from_bits(
            self.device.control().read()?.again(),
        ))
    }

    /// Set the ALS and color gain
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_ambient_light_gain(&mut self, gain: AmbientLightGain) -> Result<(), Error<I::Error>> {
        self.device.control().modify(|w| {
            w.set_again(gain as u8);
        })?;
        Ok(())
    }

    /// Get the LED boost used during proximity and gesture pulses
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn get_led_boost(&mut self) -> Result<LedBoost, Error<I::Error>> {
        Ok(LedBoost::from_bits(self.device.config_2().read()?.led_boost()))
    }

    /// Set the LED boost
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_led_boost(&mut self, boost: LedBoost) -> Result<(), Error<I::Error>> {
        self.device.config_2().modify(|w| {
            w.set_led_boost(boost as u8);
        })?;
        Ok(())
    }

    /// Check whether proximity gain compensation is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_proximity_gain_compensation_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.config_3().read()?.pcmp())
    }

    /// Enable or disable proximity gain compensation
    ///
    /// Should be enabled when photodiodes are masked off.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_proximity_gain_compensation(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.config_3().modify(|w| {
            w.set_pcmp(enable);
        })?;
        Ok(())
    }

    /// Get the proximity photodiode mask
    ///
    /// Bit 0 masks RIGHT, 1 LEFT, 2 DOWN, 3 UP.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn get_proximity_photo_mask(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.config_3().read()?.pmask())
    }

    /// Set the proximity photodiode mask (upper bits ignored)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_proximity_photo_mask(&mut self, mask: u8) -> Result<(), Error<I::Error>> {
        self.device.config_3().modify(|w| {
            w.set_pmask(mask & 0x0F);
        })?;
        Ok(())
    }

    // ===== Gesture configuration =====

    /// Get the gesture gain
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn get_gesture_gain(&mut self) -> Result<GestureGain, Error<I::Error>> {
        Ok(GestureGain::from_bits(self.device.gconf_2().read()?.ggain()))
    }

    /// Set the gesture gain
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_gesture_gain(&mut self, gain: GestureGain) -> Result<(), Error<I::Error>> {
        self.device.gconf_2().modify(|w| {
            w.set_ggain(gain as u8);
        })?;
        Ok(())
    }

    /// Get the gesture LED drive strength
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn get_gesture_led_drive(&mut self) -> Result<LedDrive, Error<I::Error>> {
        Ok(LedDrive::from_bits(self.device.gconf_2().read()?.gldrive()))
    }

    /// Set the gesture LED drive strength
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_gesture_led_drive(&mut self, drive: LedDrive) -> Result<(), Error<I::Error>> {
        self.device.gconf_2().modify(|w| {
            w.set_gldrive(drive as u8);
        })?;
        Ok(())
    }

    /// Get the wait time between gesture cycles
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn get_gesture_wait_time(&mut self) -> Result<GestureWaitTime, Error<I::Error>> {
        Ok(GestureWaitTime::from_bits(
            self.device.gconf_2().read()?.gwtime(),
        ))
    }

    /// Set the wait time between gesture cycles
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_gesture_wait_time(&mut self, time: GestureWaitTime) -> Result<(), Error<I::Error>> {
        self.device.gconf_2().modify(|w| {
            w.set_gwtime(time as u8);
        })?;
        Ok(())
    }

    /// Check whether the gesture engine is in gesture mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_gesture_mode(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.gconf_4().read()?.gmode())
    }

    /// Enter or leave gesture mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_gesture_mode(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.gconf_4().modify(|w| {
            w.set_gmode(enable);
        })?;
        Ok(())
    }

    /// Get the proximity level that starts the gesture engine
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn get_gesture_enter_threshold(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.gpenth().read()?.gpenth())
    }

    /// Set the proximity level that starts the gesture engine
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_gesture_enter_threshold(&mut self, threshold: u8) -> Result<(), Error<I::Error>> {
        self.device.gpenth().write(|w| {
            w.set_gpenth(threshold);
        })?;
        Ok(())
    }

    /// Get the level below which the gesture engine exits
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn get_gesture_exit_threshold(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.gexth().read()?.gexth())
    }

    /// Set the level below which the gesture engine exits
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_gesture_exit_threshold(&mut self, threshold: u8) -> Result<(), Error<I::Error>> {
        self.device.gexth().write(|w| {
            w.set_gexth(threshold);
        })?;
        Ok(())
    }

    // ===== Gesture acquisition =====

    /// Check whether the gesture FIFO holds valid data (GVALID)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_gesture_available(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.gstatus().read()?.gvalid())
    }

    /// Block until the current gesture completes and return it
    ///
    /// Returns [`Motion::None`] immediately unless the FIFO holds valid data
    /// and both power and gesture are enabled. Otherwise drains the FIFO every
    /// 30 ms until the device stops reporting valid data, then returns the
    /// decoded motion.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails. The gesture
    /// session is discarded in that case.
    ///
    /// # Example
    ///
    /// ```ignore
    /// if sensor.is_gesture_available()? {
    ///     match sensor.read_gesture(&mut delay)? {
    ///         Motion::Left => { /* ... */ }
    ///         Motion::Right => { /* ... */ }
    ///         _ => {}
    ///     }
    /// }
    /// ```
    pub fn read_gesture<D>(&mut self, delay: &mut D) -> Result<Motion, Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.read_gesture_until(delay, || false)
    }

    /// Like [`read_gesture`](Self::read_gesture), with cooperative cancellation
    ///
    /// `should_abort` is sampled once per polling period, before the pause.
    /// When it returns `true` the session is discarded and [`Motion::None`]
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gesture_until<D, F>(
        &mut self,
        delay: &mut D,
        should_abort: F,
    ) -> Result<Motion, Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
        F: FnMut() -> bool,
    {
        if !self.is_gesture_available()? || !self.enable_status()?.gesture_active() {
            return Ok(Motion::None);
        }

        let result = self.acquire_gesture(delay, should_abort);
        if result.is_err() {
            self.gesture.reset();
        }
        result
    }

    fn acquire_gesture<D, F>(
        &mut self,
        delay: &mut D,
        mut should_abort: F,
    ) -> Result<Motion, Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
        F: FnMut() -> bool,
    {
        let mut buffer = [0u8; GESTURE_FIFO_BYTES];

        loop {
            if should_abort() {
                #[cfg(feature = "defmt")]
                defmt::debug!("Gesture acquisition aborted");
                self.gesture.reset();
                return Ok(Motion::None);
            }

            delay.delay_ms(FIFO_PAUSE_TIME_MS);

            if !self.is_gesture_available()? {
                // Let trailing data settle before the final decode
                delay.delay_ms(FIFO_PAUSE_TIME_MS);
                return Ok(self.gesture.finish());
            }

            let level = usize::from(self.device.gflvl().read()?.gflvl());
            if level == 0 {
                continue;
            }
            if level > GESTURE_FIFO_DEPTH {
                #[cfg(feature = "defmt")]
                defmt::warn!("Gesture FIFO level {} exceeds depth, clamping", level);
            }

            let block = &mut buffer[..level.min(GESTURE_FIFO_DEPTH) * QUAD_SIZE];
            self.device.interface.read_block(addr::GFIFO_U, block)?;

            if let AcquisitionState::Finished(motion) = self.gesture.ingest(block) {
                return Ok(motion);
            }
        }
    }
}
