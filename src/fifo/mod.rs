//! Gesture FIFO sample buffering
//!
//! The APDS-9960 gesture engine buffers up to 32 quads (UP, DOWN, LEFT,
//! RIGHT intensities) in an on-chip FIFO. The driver drains it into a
//! [`GestureBatch`] of the same depth, which the gesture processor then
//! inspects as a whole before the batch is rewound for the next read.
//!
//! # Example
//!
//! ```ignore
//! # use apds9960::fifo::GestureBatch;
//! let mut batch = GestureBatch::new();
//! batch.extend_from_fifo(&[10, 20, 30, 40, 11, 21, 31, 41]);
//!
//! assert_eq!(batch.up(), &[10, 11]);
//! assert_eq!(batch.right(), &[40, 41]);
//! assert_eq!(batch.total(), 2);
//! ```

pub mod parser;

pub use parser::Quad;

/// Gesture FIFO depth in quads
pub const GESTURE_FIFO_DEPTH: usize = 32;

/// Bytes per FIFO entry
pub const QUAD_SIZE: usize = 4;

/// Largest FIFO block in bytes
pub const GESTURE_FIFO_BYTES: usize = GESTURE_FIFO_DEPTH * QUAD_SIZE;

/// Per-channel sample buffer for one processing pass
///
/// Samples are written at a running index that wraps at
/// [`GESTURE_FIFO_DEPTH`]; `index == total % GESTURE_FIFO_DEPTH` holds until
/// [`rewind`](Self::rewind) resets both to zero. Channel storage is reused
/// between passes, not cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureBatch {
    up: [u8; GESTURE_FIFO_DEPTH],
    down: [u8; GESTURE_FIFO_DEPTH],
    left: [u8; GESTURE_FIFO_DEPTH],
    right: [u8; GESTURE_FIFO_DEPTH],
    index: usize,
    total: usize,
}

impl Default for GestureBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureBatch {
    /// Create an empty batch
    #[must_use]
    pub const fn new() -> Self {
        Self {
            up: [0; GESTURE_FIFO_DEPTH],
            down: [0; GESTURE_FIFO_DEPTH],
            left: [0; GESTURE_FIFO_DEPTH],
            right: [0; GESTURE_FIFO_DEPTH],
            index: 0,
            total: 0,
        }
    }

    /// Append one sample
    pub fn push(&mut self, quad: Quad) {
        self.up[self.index] = quad.up;
        self.down[self.index] = quad.down;
        self.left[self.index] = quad.left;
        self.right[self.index] = quad.right;
        self.index = (self.index + 1) % GESTURE_FIFO_DEPTH;
        self.total = self.total.saturating_add(1);
    }

    /// Append every complete quad of a FIFO block, returning how many were added
    pub fn extend_from_fifo(&mut self, block: &[u8]) -> usize {
        let mut added = 0;
        for quad in parser::quads(block) {
            self.push(quad);
            added += 1;
        }
        added
    }

    /// Rewind the fill index and sample counter for the next pass
    pub fn rewind(&mut self) {
        self.index = 0;
        self.total = 0;
    }

    /// Samples appended since the last rewind
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Next write position
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Whether more samples were appended than the buffer can hold
    #[must_use]
    pub const fn overflowed(&self) -> bool {
        self.total > GESTURE_FIFO_DEPTH
    }

    /// Number of valid samples held
    #[must_use]
    pub const fn len(&self) -> usize {
        if self.total < GESTURE_FIFO_DEPTH {
            self.total
        } else {
            GESTURE_FIFO_DEPTH
        }
    }

    /// Whether no sample has been appended since the last rewind
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Sample at `position`, if it holds valid data
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Quad> {
        (position < self.len()).then(|| {
            Quad::new(
                self.up[position],
                self.down[position],
                self.left[position],
                self.right[position],
            )
        })
    }

    /// Iterate over the valid samples in buffer order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Quad> + '_ {
        (0..self.len()).filter_map(|position| self.get(position))
    }

    /// UP channel samples
    #[must_use]
    pub fn up(&self) -> &[u8] {
        &self.up[..self.len()]
    }

    /// DOWN channel samples
    #[must_use]
    pub fn down(&self) -> &[u8] {
        &self.down[..self.len()]
    }

    /// LEFT channel samples
    #[must_use]
    pub fn left(&self) -> &[u8] {
        &self.left[..self.len()]
    }

    /// RIGHT channel samples
    #[must_use]
    pub fn right(&self) -> &[u8] {
        &self.right[..self.len()]
    }
}
