//! Gesture decoding
//!
//! Maps the accumulated direction counts, or a confirmed near/far state, to a
//! single [`Motion`]. Diagonal counts resolve to the axis with the larger
//! accumulated delta; on a tie the left/right axis wins.

use super::{Accumulator, Motion, SessionState};

/// Resolve a session to a motion
///
/// Returns `None` when both direction counts are zero and no near/far state
/// has been confirmed.
#[must_use]
pub fn decode(accumulator: &Accumulator, state: SessionState) -> Option<Motion> {
    match state {
        SessionState::Near => return Some(Motion::Near),
        SessionState::Far => return Some(Motion::Far),
        SessionState::Idle | SessionState::All => {}
    }

    let vertical_dominates = accumulator.ud_delta.abs() > accumulator.lr_delta.abs();
    let pick = |vertical: Motion, horizontal: Motion| {
        if vertical_dominates {
            vertical
        } else {
            horizontal
        }
    };

    let motion = match (accumulator.ud_count, accumulator.lr_count) {
        (-1, 0) => Motion::Up,
        (1, 0) => Motion::Down,
        (0, 1) => Motion::Right,
        (0, -1) => Motion::Left,
        (-1, 1) => pick(Motion::Up, Motion::Right),
        (1, -1) => pick(Motion::Down, Motion::Left),
        (-1, -1) => pick(Motion::Up, Motion::Left),
        (1, 1) => pick(Motion::Down, Motion::Right),
        _ => return None,
    };

    #[cfg(feature = "defmt")]
    defmt::debug!("Decoded gesture: {}", motion);

    Some(motion)
}
