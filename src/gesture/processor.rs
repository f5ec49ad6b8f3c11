//! Gesture data processing
//!
//! For every batch the processor picks the first and the last quad whose four
//! channels are all above [`GESTURE_THRESHOLD_OUT`], and compares their
//! normalised differences:
//!
//! ```text
//! ud_ratio = (up - down) * 100 / (up + down)
//! lr_ratio = (left - right) * 100 / (left + right)
//! ```
//!
//! The change of each ratio from first to last is the batch delta. Deltas are
//! summed across batches; once a sum crosses ±[`GESTURE_SENSITIVITY_1`] the
//! axis has a direction. Batches with almost no change feed the near/far
//! debounce counters instead.

use super::SessionState;
use crate::fifo::{GestureBatch, Quad};

/// Channel level a quad must exceed on all four photodiodes to be used
pub const GESTURE_THRESHOLD_OUT: u8 = 10;

/// Accumulated ratio change that marks a swipe direction
pub const GESTURE_SENSITIVITY_1: i32 = 50;

/// Per-batch ratio change below which the hand counts as still
pub const GESTURE_SENSITIVITY_2: i32 = 20;

/// Samples a batch must exceed to be processed
pub const MIN_BATCH_SAMPLES: usize = 4;

/// Still batches needed before near/far is considered
pub const NEAR_CONFIRM_COUNT: u32 = 10;

/// Drifting batches needed before near/far is considered
pub const FAR_CONFIRM_COUNT: u32 = 2;

/// Result of one processing pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProcessOutcome {
    /// Too few samples or no in-range quad; nothing was updated
    InsufficientData,
    /// State updated, no session-level event yet
    Pending,
    /// Near/far debouncing completed; the session should be decoded
    Confirmed,
}

/// Directional accumulator and near/far debounce counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Accumulator {
    /// Sum of up/down ratio deltas
    pub ud_delta: i32,
    /// Sum of left/right ratio deltas
    pub lr_delta: i32,
    /// Up/down direction (-1 = up, 1 = down)
    pub ud_count: i8,
    /// Left/right direction (-1 = left, 1 = right)
    pub lr_count: i8,
    /// Batches with no change at all
    pub near_count: u32,
    /// Batches with a small change
    pub far_count: u32,
}

impl Accumulator {
    /// Create a zeroed accumulator
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ud_delta: 0,
            lr_delta: 0,
            ud_count: 0,
            lr_count: 0,
            near_count: 0,
            far_count: 0,
        }
    }

    /// Drop any forming swipe
    fn cancel_swipe(&mut self) {
        self.ud_count = 0;
        self.lr_count = 0;
        self.ud_delta = 0;
        self.lr_delta = 0;
    }
}

/// Ratio change between the first and last in-range quads of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatchDelta {
    /// Up/down ratio change
    pub ud: i32,
    /// Left/right ratio change
    pub lr: i32,
}

impl BatchDelta {
    /// Compute the delta from `first` to `last`
    #[must_use]
    pub fn between(first: Quad, last: Quad) -> Self {
        Self {
            ud: ratio(last.up, last.down) - ratio(first.up, first.down),
            lr: ratio(last.left, last.right) - ratio(first.left, first.right),
        }
    }

    /// No change on either axis
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.ud == 0 && self.lr == 0
    }

    /// Change on both axes
    #[must_use]
    pub const fn both_nonzero(&self) -> bool {
        self.ud != 0 && self.lr != 0
    }

    /// Both axes below [`GESTURE_SENSITIVITY_2`]
    #[must_use]
    pub const fn is_still(&self) -> bool {
        self.ud.abs() < GESTURE_SENSITIVITY_2 && self.lr.abs() < GESTURE_SENSITIVITY_2
    }
}

/// Normalised difference of two opposing channels, scaled by 100
///
/// Integer division truncates towards zero. Both channels are above
/// [`GESTURE_THRESHOLD_OUT`] whenever this is called, so the sum is never zero.
#[must_use]
pub fn ratio(a: u8, b: u8) -> i32 {
    let (a, b) = (i32::from(a), i32::from(b));
    match a + b {
        0 => 0,
        sum => ((a - b) * 100) / sum,
    }
}

/// Direction of an accumulated delta
const fn direction(accumulated: i32) -> i8 {
    if accumulated >= GESTURE_SENSITIVITY_1 {
        1
    } else if accumulated <= -GESTURE_SENSITIVITY_1 {
        -1
    } else {
        0
    }
}

/// Locate the first and last in-range quads of a batch
fn endpoints(batch: &GestureBatch) -> Option<(Quad, Quad)> {
    let first = batch
        .iter()
        .find(|quad| quad.all_above(GESTURE_THRESHOLD_OUT))?;
    let last = batch
        .iter()
        .rev()
        .find(|quad| quad.all_above(GESTURE_THRESHOLD_OUT))
        .unwrap_or(first);
    Some((first, last))
}

/// Fold one batch into the session accumulator
///
/// Returns [`ProcessOutcome::InsufficientData`] without touching any state
/// when the batch holds [`MIN_BATCH_SAMPLES`] or fewer samples, overflowed
/// the buffer, or contains no in-range quad.
pub fn process(
    batch: &GestureBatch,
    accumulator: &mut Accumulator,
    state: &mut SessionState,
) -> ProcessOutcome {
    if batch.total() <= MIN_BATCH_SAMPLES || batch.overflowed() {
        return ProcessOutcome::InsufficientData;
    }

    let Some((first, last)) = endpoints(batch) else {
        return ProcessOutcome::InsufficientData;
    };

    let delta = BatchDelta::between(first, last);

    accumulator.ud_delta += delta.ud;
    accumulator.lr_delta += delta.lr;
    accumulator.ud_count = direction(accumulator.ud_delta);
    accumulator.lr_count = direction(accumulator.lr_delta);

    #[cfg(feature = "defmt")]
    defmt::trace!(
        "Gesture batch: samples={} delta=({}, {}) accumulated=({}, {}) counts=({}, {})",
        batch.total(),
        delta.ud,
        delta.lr,
        accumulator.ud_delta,
        accumulator.lr_delta,
        accumulator.ud_count,
        accumulator.lr_count
    );

    if !delta.is_still() {
        return ProcessOutcome::Pending;
    }

    if accumulator.ud_count == 0 && accumulator.lr_count == 0 {
        if delta.is_zero() {
            accumulator.near_count = accumulator.near_count.saturating_add(1);
        } else {
            accumulator.far_count = accumulator.far_count.saturating_add(1);
        }

        if accumulator.near_count >= NEAR_CONFIRM_COUNT
            && accumulator.far_count >= FAR_CONFIRM_COUNT
        {
            if delta.is_zero() {
                *state = SessionState::Near;
            } else if delta.both_nonzero() {
                *state = SessionState::Far;
            }
            return ProcessOutcome::Confirmed;
        }
    } else {
        if delta.is_zero() {
            accumulator.near_count = accumulator.near_count.saturating_add(1);
        }

        // Sustained stillness overrides a half-formed swipe
        if accumulator.near_count >= NEAR_CONFIRM_COUNT {
            accumulator.cancel_swipe();
        }
    }

    ProcessOutcome::Pending
}
