//! Broadcast timecode values for Framecode.
//!
//! This crate provides SMPTE-style timecode support:
//!
//! - **Frame-rate formats**: a closed enumeration with bidirectional
//!   conversion to integer rate, floating rate, and canonical label
//! - **Timecode values**: HH:MM:SS:FF fields bound to a format, with
//!   arithmetic, comparison, parsing, and formatting
//! - **Drop-frame math**: the 29.97 label-skip rules, applied during
//!   construction, decomposition, and arithmetic
//!
//! # Quick Start
//!
//! ```rust
//! use framecode_core::{FpsFormat, Timecode};
//!
//! // Create a timecode
//! let tc = Timecode::new(1, 30, 45, 12, FpsFormat::Fps24).unwrap();
//! println!("Timecode: {}", tc); // Output: 01:30:45:12
//!
//! // Parse from string; the separator picks the format
//! let tc2: Timecode = "01:30:45;12".parse().unwrap();
//! assert!(tc2.is_drop_frame());
//!
//! // Arithmetic is frame-accurate and format-checked
//! let tc3 = tc.add_frames(100).unwrap();
//! assert_eq!(tc3.total_frames(), tc.total_frames() + 100);
//! ```
//!
//! # Drop-Frame Timecode
//!
//! Drop-frame timecode skips frame labels 0 and 1 at the start of each
//! minute, except every tenth minute, so the 30-label nominal count
//! tracks the actual ~29.97 playback rate:
//!
//! ```rust
//! use framecode_core::{parse_timecode, FpsFormat};
//!
//! let tc = parse_timecode("00:00:59;29", FpsFormat::Fps29_97Df).unwrap();
//! let next = tc.add_frames(1).unwrap();
//! assert_eq!(next.to_string(), "00:01:00;02"); // labels ;00 and ;01 skipped
//! ```
//!
//! # Format Lookups
//!
//! Lookups into the format table never fail hard; a miss recovers to the
//! [`FpsFormat::None`] sentinel with a logged warning, because such
//! lookups often originate from untrusted external metadata:
//!
//! ```rust
//! use framecode_core::FpsFormat;
//!
//! assert_eq!(FpsFormat::from_int(25), FpsFormat::Fps25);
//! assert_eq!(FpsFormat::from_int(23), FpsFormat::None);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod dropframe;
pub mod error;
pub mod fps;
pub mod timecode;

// Re-export main types
pub use error::{Result, TimecodeError};
pub use fps::{default_format, set_default_format, FpsFormat};
pub use timecode::{parse_timecode, RolloverMode, Timecode};

/// Maximum hours value in wrap-mode timecode (23).
pub const MAX_HOURS: u32 = 23;

/// Maximum minutes value in timecode (59).
pub const MAX_MINUTES: u8 = 59;

/// Maximum seconds value in timecode (59).
pub const MAX_SECONDS: u8 = 59;

/// Number of elements exposed by [`Timecode::decompose`] (a stable
/// contract).
pub const DECOMPOSED_ELEMENTS: usize = 6;

/// Create a non-drop-frame timecode from hours, minutes, seconds, and
/// frames.
///
/// # Example
/// ```rust
/// use framecode_core::{timecode, FpsFormat};
///
/// let tc = timecode(1, 30, 45, 12, FpsFormat::Fps24).unwrap();
/// assert_eq!(tc.to_string(), "01:30:45:12");
/// ```
pub fn timecode(
    hours: u32,
    minutes: u8,
    seconds: u8,
    frames: u8,
    format: FpsFormat,
) -> Result<Timecode> {
    Timecode::new(hours, minutes, seconds, frames, format)
}

/// Create a 29.97 drop-frame timecode from hours, minutes, seconds, and
/// frames.
///
/// # Example
/// ```rust
/// use framecode_core::timecode_df;
///
/// let tc = timecode_df(1, 0, 0, 2).unwrap();
/// assert_eq!(tc.to_string(), "01:00:00;02");
/// ```
pub fn timecode_df(hours: u32, minutes: u8, seconds: u8, frames: u8) -> Result<Timecode> {
    Timecode::new(hours, minutes, seconds, frames, FpsFormat::Fps29_97Df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_timecode_convenience() {
        let tc = timecode(1, 30, 45, 12, FpsFormat::Fps24).unwrap();
        assert_eq!(tc.to_string(), "01:30:45:12");
    }

    #[test]
    fn test_timecode_df_convenience() {
        let tc = timecode_df(1, 0, 0, 2).unwrap();
        assert_eq!(tc.to_string(), "01:00:00;02");
        assert!(tc.is_drop_frame());
        assert_eq!(tc.format(), FpsFormat::Fps29_97Df);
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_HOURS, 23);
        assert_eq!(MAX_MINUTES, 59);
        assert_eq!(MAX_SECONDS, 59);

        let tc = timecode(0, 0, 0, 0, FpsFormat::Fps25).unwrap();
        // The decomposition width is part of the public contract.
        let (_, _, _, _, _, _) = tc.decompose();
        assert_eq!(DECOMPOSED_ELEMENTS, 6);
    }

    #[test]
    fn test_parse_and_format_roundtrip() {
        let original = "12:34:56:07";
        let tc = parse_timecode(original, FpsFormat::Fps24).unwrap();
        assert_eq!(tc.to_string(), original);

        let original = "12:34:56;07";
        let tc = parse_timecode(original, FpsFormat::Fps29_97Df).unwrap();
        assert_eq!(tc.to_string(), original);
    }
}
