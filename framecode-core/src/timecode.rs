//! The timecode value type.
//!
//! A [`Timecode`] binds decomposed HH:MM:SS:FF fields to an
//! [`FpsFormat`] and a signed rollover counter. The canonical scalar form
//! is a signed total-frame count since 00:00:00:00; all arithmetic and
//! comparison go through it. Values are immutable: every operation
//! produces a new instance.

use crate::dropframe;
use crate::error::{Result, TimecodeError};
use crate::fps::{self, FpsFormat};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// How sums past 24 hours are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RolloverMode {
    /// Hours wrap modulo 24 and the rollover counter tracks whole days.
    #[default]
    Wrap,
    /// Hours grow unbounded on the positive side; below zero the signed
    /// rollover counter is used in both modes.
    Extended,
}

/// A frame-accurate timestamp bound to a frame-rate format.
///
/// The six decomposed elements (hours, minutes, seconds, frames, format,
/// rollover counter) are exposed in that fixed order by
/// [`Timecode::decompose`]; the order and count are a stable contract.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timecode {
    hours: u32,
    minutes: u8,
    seconds: u8,
    frames: u8,
    format: FpsFormat,
    rollover: i64,
    mode: RolloverMode,
}

impl Timecode {
    /// Create a timecode from explicit fields.
    ///
    /// Hours must be 0..=23, minutes and seconds 0..=59, frames below the
    /// format's nominal fps. For the drop-frame format, frame labels 0
    /// and 1 at the start of a non-exempt minute are rejected; they never
    /// exist on the drop-frame timeline.
    pub fn new(
        hours: u32,
        minutes: u8,
        seconds: u8,
        frames: u8,
        format: FpsFormat,
    ) -> Result<Self> {
        if format == FpsFormat::None {
            if hours == 0 && minutes == 0 && seconds == 0 && frames == 0 {
                return Ok(Self::zero(format));
            }
            return Err(TimecodeError::unknown_format("construction"));
        }

        if hours > 23 {
            return Err(TimecodeError::out_of_range("hours", i64::from(hours), 0, 23));
        }
        if minutes > 59 {
            return Err(TimecodeError::out_of_range(
                "minutes",
                i64::from(minutes),
                0,
                59,
            ));
        }
        if seconds > 59 {
            return Err(TimecodeError::out_of_range(
                "seconds",
                i64::from(seconds),
                0,
                59,
            ));
        }
        let max_frame = i64::from(format.to_int()) - 1;
        if i64::from(frames) > max_frame {
            return Err(TimecodeError::out_of_range(
                "frames",
                i64::from(frames),
                0,
                max_frame,
            ));
        }
        if format.is_drop_frame() && dropframe::is_dropped_label(minutes, seconds, frames) {
            // At this position the legal labels start past the skipped pair.
            return Err(TimecodeError::out_of_range(
                "frames",
                i64::from(frames),
                dropframe::DROPPED_PER_MINUTE,
                max_frame,
            ));
        }

        Ok(Self {
            hours,
            minutes,
            seconds,
            frames,
            format,
            rollover: 0,
            mode: RolloverMode::Wrap,
        })
    }

    /// The zero timecode (00:00:00:00) at the given format.
    ///
    /// Infallible for every format, the sentinel included: the all-zero
    /// value is the additive identity.
    #[must_use]
    pub fn zero(format: FpsFormat) -> Self {
        Self {
            hours: 0,
            minutes: 0,
            seconds: 0,
            frames: 0,
            format,
            rollover: 0,
            mode: RolloverMode::Wrap,
        }
    }

    /// Create a timecode from a signed total-frame count.
    ///
    /// Negative counts wrap to a negative rollover counter with in-range
    /// fields, so [`Timecode::total_frames`] always inverts exactly.
    pub fn from_frame_count(count: i64, format: FpsFormat) -> Result<Self> {
        Self::from_total(count, format, RolloverMode::Wrap)
    }

    fn frames_per_day_of(format: FpsFormat) -> i64 {
        if format.is_drop_frame() {
            dropframe::FRAMES_PER_DAY
        } else {
            i64::from(format.to_int()) * 86_400
        }
    }

    fn from_total(total: i64, format: FpsFormat, mode: RolloverMode) -> Result<Self> {
        if format == FpsFormat::None {
            return Err(TimecodeError::unknown_format("frame count decomposition"));
        }

        let per_day = Self::frames_per_day_of(format);
        let (rollover, within) = match mode {
            RolloverMode::Extended if total >= 0 => (0, total),
            _ => (total.div_euclid(per_day), total.rem_euclid(per_day)),
        };

        let (hours, minutes, seconds, frames) = if format.is_drop_frame() {
            let (h, m, s, f) = dropframe::frame_count_to_fields(within);
            let h = u32::try_from(h).map_err(|_| TimecodeError::Overflow)?;
            (h, m, s, f)
        } else {
            let nominal = i64::from(format.to_int());
            let frames = (within % nominal) as u8;
            let total_seconds = within / nominal;
            let seconds = (total_seconds % 60) as u8;
            let minutes = ((total_seconds / 60) % 60) as u8;
            let hours =
                u32::try_from(total_seconds / 3600).map_err(|_| TimecodeError::Overflow)?;
            (hours, minutes, seconds, frames)
        };

        Ok(Self {
            hours,
            minutes,
            seconds,
            frames,
            format,
            rollover,
            mode,
        })
    }

    /// Rebuild this value under a different rollover mode.
    ///
    /// The total-frame count is unchanged; only the hours/rollover
    /// presentation moves.
    #[must_use]
    pub fn with_rollover_mode(self, mode: RolloverMode) -> Self {
        if mode == self.mode || self.format == FpsFormat::None {
            return Self { mode, ..self };
        }
        // Hours past u32::MAX cannot unfold; keep the wrapped fields.
        match Self::from_total(self.total_frames(), self.format, mode) {
            Ok(tc) => tc,
            Err(_) => Self { mode, ..self },
        }
    }

    /// The signed total-frame count since 00:00:00:00 at the bound format.
    #[must_use]
    pub fn total_frames(&self) -> i64 {
        let within = if self.format.is_drop_frame() {
            dropframe::fields_to_frame_count(
                i64::from(self.hours),
                self.minutes,
                self.seconds,
                self.frames,
            )
        } else {
            let nominal = i64::from(self.format.to_int());
            (i64::from(self.hours) * 3600
                + i64::from(self.minutes) * 60
                + i64::from(self.seconds))
                * nominal
                + i64::from(self.frames)
        };
        self.rollover * Self::frames_per_day_of(self.format) + within
    }

    /// Hours field (0..=23 in wrap mode; unbounded in extended mode).
    #[must_use]
    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// Minutes field (0..=59).
    #[must_use]
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Seconds field (0..=59).
    #[must_use]
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Frames field (0 to nominal fps - 1, drop-frame exclusions applied).
    #[must_use]
    pub fn frames(&self) -> u8 {
        self.frames
    }

    /// The bound frame-rate format.
    #[must_use]
    pub fn format(&self) -> FpsFormat {
        self.format
    }

    /// Whether the bound format follows the drop-frame convention.
    #[must_use]
    pub fn is_drop_frame(&self) -> bool {
        self.format.is_drop_frame()
    }

    /// Signed count of whole 24-hour days folded out of the fields.
    #[must_use]
    pub fn rollover(&self) -> i64 {
        self.rollover
    }

    /// The rollover mode this value presents under.
    #[must_use]
    pub fn rollover_mode(&self) -> RolloverMode {
        self.mode
    }

    /// Whether this is the zero timecode.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.frames == 0
            && self.rollover == 0
    }

    /// The separator printed before the frames field.
    #[must_use]
    pub fn separator(&self) -> char {
        if self.format.is_drop_frame() {
            ';'
        } else {
            ':'
        }
    }

    /// The six decomposed elements in fixed order: hours, minutes,
    /// seconds, frames, format, rollover counter.
    ///
    /// This ordering and count is a stable contract.
    #[must_use]
    pub fn decompose(&self) -> (u32, u8, u8, u8, FpsFormat, i64) {
        (
            self.hours,
            self.minutes,
            self.seconds,
            self.frames,
            self.format,
            self.rollover,
        )
    }

    fn check_same_format(&self, other: &Self) -> Result<()> {
        if self.format != other.format {
            return Err(TimecodeError::format_mismatch(
                self.format.label(),
                other.format.label(),
            ));
        }
        Ok(())
    }

    /// Sum of two same-format timecodes.
    ///
    /// Mismatched formats yield [`TimecodeError::FormatMismatch`]; no
    /// implicit rate conversion is ever performed. The result keeps this
    /// value's rollover mode.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_format(other)?;
        if self.format == FpsFormat::None {
            return Err(TimecodeError::unknown_format("add"));
        }
        let total = self
            .total_frames()
            .checked_add(other.total_frames())
            .ok_or(TimecodeError::Overflow)?;
        Self::from_total(total, self.format, self.mode)
    }

    /// Difference of two same-format timecodes.
    ///
    /// Results below zero decrement the rollover counter rather than
    /// failing.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_format(other)?;
        if self.format == FpsFormat::None {
            return Err(TimecodeError::unknown_format("sub"));
        }
        let total = self
            .total_frames()
            .checked_sub(other.total_frames())
            .ok_or(TimecodeError::Overflow)?;
        Self::from_total(total, self.format, self.mode)
    }

    /// Add a raw signed frame delta in this format's domain.
    pub fn add_frames(&self, delta: i64) -> Result<Self> {
        if self.format == FpsFormat::None {
            return Err(TimecodeError::unknown_format("add_frames"));
        }
        let total = self
            .total_frames()
            .checked_add(delta)
            .ok_or(TimecodeError::Overflow)?;
        Self::from_total(total, self.format, self.mode)
    }

    /// Subtract a raw signed frame delta in this format's domain.
    pub fn sub_frames(&self, delta: i64) -> Result<Self> {
        if self.format == FpsFormat::None {
            return Err(TimecodeError::unknown_format("sub_frames"));
        }
        let total = self
            .total_frames()
            .checked_sub(delta)
            .ok_or(TimecodeError::Overflow)?;
        Self::from_total(total, self.format, self.mode)
    }

    /// Total order by total-frame count, defined only within one format.
    pub fn compare(&self, other: &Self) -> Result<Ordering> {
        self.check_same_format(other)?;
        Ok(self.total_frames().cmp(&other.total_frames()))
    }
}

impl Default for Timecode {
    fn default() -> Self {
        Self::zero(fps::default_format())
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}{}{:02}",
            self.hours,
            self.minutes,
            self.seconds,
            self.separator(),
            self.frames
        )
    }
}

impl PartialEq for Timecode {
    fn eq(&self, other: &Self) -> bool {
        // Rollover mode is presentation, not identity.
        self.format == other.format && self.total_frames() == other.total_frames()
    }
}

impl Eq for Timecode {}

impl PartialOrd for Timecode {
    /// `None` across formats; there is intentionally no `Ord`.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl Add for Timecode {
    type Output = Result<Self>;

    fn add(self, other: Self) -> Result<Self> {
        Timecode::add(&self, &other)
    }
}

impl Sub for Timecode {
    type Output = Result<Self>;

    fn sub(self, other: Self) -> Result<Self> {
        Timecode::sub(&self, &other)
    }
}

fn split_fields(s: &str) -> Result<(Vec<&str>, bool)> {
    let s = s.trim();
    let drop_separator = s.contains(';');
    let parts: Vec<&str> = s.split([':', ';']).collect();
    if parts.len() != 4 {
        return Err(TimecodeError::parse(0, s));
    }
    Ok((parts, drop_separator))
}

fn parse_numeric(parts: &[&str]) -> Result<(u32, u8, u8, u8)> {
    let hours: u32 = parts[0]
        .parse()
        .map_err(|_| TimecodeError::parse(0, parts[0]))?;
    let minutes: u8 = parts[1]
        .parse()
        .map_err(|_| TimecodeError::parse(1, parts[1]))?;
    let seconds: u8 = parts[2]
        .parse()
        .map_err(|_| TimecodeError::parse(2, parts[2]))?;
    let frames: u8 = parts[3]
        .parse()
        .map_err(|_| TimecodeError::parse(3, parts[3]))?;
    Ok((hours, minutes, seconds, frames))
}

/// Range violations in textual input surface as parse errors carrying the
/// field index and raw text.
fn range_error_to_parse(err: TimecodeError, parts: &[&str]) -> TimecodeError {
    match err {
        TimecodeError::OutOfRangeField { ref field, .. } => {
            let index = match field.as_str() {
                "hours" => 0,
                "minutes" => 1,
                "seconds" => 2,
                _ => 3,
            };
            TimecodeError::parse(index, parts[index])
        }
        other => other,
    }
}

/// Pick a format for a `:`-separated input from its frames field: the
/// process default when the field fits it, otherwise the
/// earliest-declared non-drop variant that admits it.
fn infer_format(frames: u8) -> Option<FpsFormat> {
    let default = fps::default_format();
    if default != FpsFormat::None
        && !default.is_drop_frame()
        && u32::from(frames) < default.to_int()
    {
        return Some(default);
    }
    [
        FpsFormat::Fps24,
        FpsFormat::Fps25,
        FpsFormat::Fps30,
        FpsFormat::Fps60,
    ]
    .into_iter()
    .find(|format| u32::from(frames) < format.to_int())
}

impl FromStr for Timecode {
    type Err = TimecodeError;

    /// Parse "HH:MM:SS:FF" or "HH:MM:SS;FF", inferring the format from
    /// the separator before the frames field.
    fn from_str(s: &str) -> Result<Self> {
        let (parts, drop_separator) = split_fields(s)?;
        let (hours, minutes, seconds, frames) = parse_numeric(&parts)?;
        let format = if drop_separator {
            FpsFormat::Fps29_97Df
        } else {
            infer_format(frames).ok_or_else(|| TimecodeError::parse(3, parts[3]))?
        };
        Self::new(hours, minutes, seconds, frames, format)
            .map_err(|e| range_error_to_parse(e, &parts))
    }
}

/// Parse a timecode string against an explicit format.
///
/// The format argument is authoritative regardless of the separator used
/// in the input.
pub fn parse_timecode(s: &str, format: FpsFormat) -> Result<Timecode> {
    let (parts, _) = split_fields(s)?;
    let (hours, minutes, seconds, frames) = parse_numeric(&parts)?;
    Timecode::new(hours, minutes, seconds, frames, format)
        .map_err(|e| range_error_to_parse(e, &parts))
}
