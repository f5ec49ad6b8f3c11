//! Gesture acquisition state machine
//!
//! The driver polls the device every [`FIFO_PAUSE_TIME_MS`](super::FIFO_PAUSE_TIME_MS)
//! and feeds each FIFO block into the session:
//!
//! ```text
//!            GVALID && level > 0
//!          ┌─────────────────────┐
//!          ▼                     │
//!   ┌────────────┐  ingest()  ┌──┴─────────┐
//!   │ Collecting │ ─────────► │ Collecting │
//!   └─────┬──────┘            └────────────┘
//!         │ !GVALID: finish()
//!         │ empty block
//!         ▼
//!   ┌────────────┐
//!   │  Finished  │
//!   └────────────┘
//! ```
//!
//! Bus access stays in the driver; this module only holds the transitions so
//! they can be exercised without a device.

use super::{GestureSession, Motion, ProcessOutcome, processor};

/// State of the acquisition loop after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AcquisitionState {
    /// Keep polling
    Collecting,
    /// Session concluded with this motion
    Finished(Motion),
}

impl GestureSession {
    /// Feed one FIFO block into the session
    ///
    /// An empty block ends the session with [`Motion::None`]. Otherwise the
    /// quads are appended, the batch is processed and, on a confirmed
    /// near/far event, decoded. The batch is rewound afterwards whatever the
    /// outcome.
    pub fn ingest(&mut self, block: &[u8]) -> AcquisitionState {
        if block.is_empty() {
            #[cfg(feature = "defmt")]
            defmt::debug!("Empty gesture FIFO read, ending session");
            self.reset();
            return AcquisitionState::Finished(Motion::None);
        }

        let _appended = self.batch.extend_from_fifo(block);

        #[cfg(feature = "defmt")]
        defmt::trace!("Gesture FIFO: {} quads, batch total {}", _appended, self.batch.total());

        let outcome = processor::process(&self.batch, &mut self.accumulator, &mut self.state);
        if outcome == ProcessOutcome::Confirmed {
            self.decode();
        }

        self.batch.rewind();
        AcquisitionState::Collecting
    }

    /// Conclude the session once the device stops reporting valid data
    ///
    /// Forces a decode of the accumulated state, resets the session and
    /// returns the captured motion. When the final decode does not resolve,
    /// the last motion decoded during the session is returned.
    pub fn finish(&mut self) -> Motion {
        self.decode();
        let motion = self.motion;
        self.reset();

        #[cfg(feature = "defmt")]
        defmt::debug!("Gesture session finished: {}", motion);

        motion
    }
}
