//! Gesture FIFO quad parsing
//!
//! The gesture engine stores one sample per cycle as four consecutive bytes,
//! one per photodiode, always in the order UP, DOWN, LEFT, RIGHT. A block
//! read from GFIFO_U returns whole quads back to back.
//!
//! # Example
//!
//! ```ignore
//! # use apds9960::fifo::parser::quads;
//! let block = [10, 20, 30, 40, 11, 21, 31, 41];
//! let ups: Vec<u8> = quads(&block).map(|q| q.up).collect();
//! assert_eq!(ups, [10, 11]);
//! ```

use super::QUAD_SIZE;

/// One gesture sample: the four directional photodiode intensities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Quad {
    /// UP photodiode
    pub up: u8,
    /// DOWN photodiode
    pub down: u8,
    /// LEFT photodiode
    pub left: u8,
    /// RIGHT photodiode
    pub right: u8,
}

impl Quad {
    /// Create a quad from its four channel values
    #[must_use]
    pub const fn new(up: u8, down: u8, left: u8, right: u8) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    /// Decode one FIFO entry (UP, DOWN, LEFT, RIGHT)
    #[must_use]
    pub const fn from_bytes(bytes: [u8; QUAD_SIZE]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Whether every channel is strictly above `threshold`
    #[must_use]
    pub const fn all_above(&self, threshold: u8) -> bool {
        self.up > threshold && self.down > threshold && self.left > threshold && self.right > threshold
    }
}

/// Iterate over the complete quads of a FIFO block
///
/// A trailing partial quad is ignored; the device only ever returns whole
/// quads when the read length is `level * 4`.
pub fn quads(block: &[u8]) -> impl Iterator<Item = Quad> + '_ {
    block
        .chunks_exact(QUAD_SIZE)
        .map(|chunk| Quad::new(chunk[0], chunk[1], chunk[2], chunk[3]))
}
