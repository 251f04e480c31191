//! Drop-frame label mapping for 29.97 fps timecode.
//!
//! Drop-frame timecode reconciles the 30-label nominal count with the
//! actual ~29.97 playback rate by skipping frame labels 0 and 1 at the
//! start of each minute, except every tenth minute. No real frames are
//! discarded; only the labels are.
//!
//! This module owns the block constants and both directions of the
//! label-to-frame-index mapping. Counts are within-day (or larger, for
//! extended-range values) and non-negative; the signed rollover split
//! happens in [`crate::timecode`].

/// Nominal frames per second at 29.97 drop-frame.
pub const NOMINAL_FPS: i64 = 30;

/// Frame labels skipped at the start of each non-exempt minute.
pub const DROPPED_PER_MINUTE: i64 = 2;

/// Real frame slots in one non-exempt minute (30 * 60 - 2).
pub const FRAMES_PER_MINUTE: i64 = 1798;

/// Real frame slots in one ten-minute block (18000 - 9 * 2).
pub const FRAMES_PER_TEN_MINUTES: i64 = 17982;

/// Real frame slots in one 24-hour day (144 * 17982).
pub const FRAMES_PER_DAY: i64 = 2_589_408;

/// Whether a (minutes, seconds, frames) label is skipped on the
/// drop-frame timeline.
#[must_use]
pub fn is_dropped_label(minutes: u8, seconds: u8, frames: u8) -> bool {
    seconds == 0 && minutes % 10 != 0 && i64::from(frames) < DROPPED_PER_MINUTE
}

/// Decompose a non-negative frame count into drop-frame field labels.
///
/// Hours are unbounded to support extended-range values; the caller folds
/// days out beforehand when 24-hour wrapping is wanted.
#[must_use]
pub fn frame_count_to_fields(count: i64) -> (i64, u8, u8, u8) {
    debug_assert!(count >= 0);

    let ten_minute_blocks = count / FRAMES_PER_TEN_MINUTES;
    let remainder = count % FRAMES_PER_TEN_MINUTES;

    // The first minute of each block is exempt and carries a full 1800
    // slots; the other nine carry 1798 each.
    let full_minute = NOMINAL_FPS * 60;
    let (extra_minutes, minute_frames) = if remainder < full_minute {
        (0, remainder)
    } else {
        let past_first = remainder - full_minute;
        (
            1 + past_first / FRAMES_PER_MINUTE,
            past_first % FRAMES_PER_MINUTE,
        )
    };

    let total_minutes = ten_minute_blocks * 10 + extra_minutes;
    let hours = total_minutes / 60;
    let minutes = (total_minutes % 60) as u8;

    // Non-exempt minutes start at label 2; shift past the skipped labels.
    let labeled = if extra_minutes > 0 {
        minute_frames + DROPPED_PER_MINUTE
    } else {
        minute_frames
    };
    let seconds = (labeled / NOMINAL_FPS) as u8;
    let frames = (labeled % NOMINAL_FPS) as u8;

    (hours, minutes, seconds, frames)
}

/// Recompose drop-frame field labels into a frame count.
///
/// The fields must name a label that exists on the drop-frame timeline
/// (see [`is_dropped_label`]); construction-time validation guarantees
/// this for every [`crate::Timecode`].
#[must_use]
pub fn fields_to_frame_count(hours: i64, minutes: u8, seconds: u8, frames: u8) -> i64 {
    let total_minutes = hours * 60 + i64::from(minutes);
    let ten_minute_blocks = total_minutes / 10;
    let block_minutes = total_minutes % 10;

    let minute_base = if block_minutes > 0 {
        NOMINAL_FPS * 60 + (block_minutes - 1) * FRAMES_PER_MINUTE
    } else {
        0
    };

    let labeled = i64::from(seconds) * NOMINAL_FPS + i64::from(frames);
    let skipped = if block_minutes > 0 {
        DROPPED_PER_MINUTE
    } else {
        0
    };

    ten_minute_blocks * FRAMES_PER_TEN_MINUTES + minute_base + labeled - skipped
}
