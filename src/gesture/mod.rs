//! Gesture recognition
//!
//! A gesture session turns the stream of FIFO quads into one [`Motion`]:
//!
//! 1. **Acquisition**: each FIFO block is appended to a [`GestureBatch`]
//! 2. **Processing**: the first and last in-range quads of the batch give an
//!    up/down and a left/right ratio change, accumulated across batches
//!    ([`processor`])
//! 3. **Decoding**: accumulated direction counts, or a debounced near/far
//!    state, map to a motion ([`decoder`])
//!
//! All state lives in an owned [`GestureSession`] record. The driver holds one
//! and passes it by reference through every stage; [`GestureSession::reset`]
//! replaces it with a zeroed record at session boundaries.

pub mod acquisition;
pub mod decoder;
pub mod processor;

pub use acquisition::AcquisitionState;
pub use processor::{Accumulator, BatchDelta, ProcessOutcome};

use crate::fifo::GestureBatch;

/// Polling period of the acquisition loop in milliseconds
///
/// Long enough for the gesture engine to refill the FIFO between reads.
pub const FIFO_PAUSE_TIME_MS: u32 = 30;

/// Decoded gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Motion {
    /// No gesture recognised
    #[default]
    None,
    /// Swipe towards the LEFT photodiode
    Left,
    /// Swipe towards the RIGHT photodiode
    Right,
    /// Swipe towards the UP photodiode
    Up,
    /// Swipe towards the DOWN photodiode
    Down,
    /// Object held still close to the sensor
    Near,
    /// Object moved slowly away from the sensor
    Far,
    /// Reserved for a combined event; never produced by the decoder
    All,
}

/// Near/far state confirmed during the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    /// Nothing confirmed yet
    #[default]
    Idle,
    /// Sustained stillness confirmed
    Near,
    /// Slow withdrawal confirmed
    Far,
    /// Reserved; never entered by the processor
    All,
}

/// Complete gesture state of one session
///
/// Created zeroed when gesture sensing is enabled, mutated only by the
/// acquisition loop, and reset when the sensor is disabled or a session
/// concludes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureSession {
    /// Samples of the current processing pass
    pub batch: GestureBatch,
    /// Directional deltas, counts and near/far debounce counters
    pub accumulator: Accumulator,
    /// Confirmed near/far state
    pub state: SessionState,
    /// Last successfully decoded motion
    pub motion: Motion,
}

impl GestureSession {
    /// Create a zeroed session
    #[must_use]
    pub const fn new() -> Self {
        Self {
            batch: GestureBatch::new(),
            accumulator: Accumulator::new(),
            state: SessionState::Idle,
            motion: Motion::None,
        }
    }

    /// Replace this session with a zeroed one
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Decode the current state into [`motion`](Self::motion)
    ///
    /// Returns `false` and leaves the previous motion untouched when the
    /// accumulated state does not resolve to a direction.
    pub fn decode(&mut self) -> bool {
        match decoder::decode(&self.accumulator, self.state) {
            Some(motion) => {
                self.motion = motion;
                true
            }
            None => false,
        }
    }
}
