//! CLI subcommand implementations.

pub mod add;
pub mod increment;
pub mod inspect;

pub use add::CmdAdd;
pub use increment::CmdIncrement;
pub use inspect::CmdInspect;

use framecode_core::{parse_timecode, FpsFormat, Timecode};

/// Resolve a `--fps` argument to a format.
///
/// Accepts an integer rate, a float rate, or the canonical label
/// ("25 fps"). Numeric text goes straight to the rate lookup so a plain
/// `--fps 25` never trips the label-miss diagnostic. The `None` sentinel
/// is a usage error here: a command that was handed an explicit rate
/// should not silently fall back.
pub fn resolve_fps(text: &str) -> anyhow::Result<FpsFormat> {
    let format = match text.parse::<f64>() {
        Ok(rate) => FpsFormat::from_float(rate),
        Err(_) => FpsFormat::from_string(text),
    };
    if format == FpsFormat::None {
        anyhow::bail!(
            "unknown frame rate {:?}; expected a rate like 25 or a label like \"29.97 fps drop-frame\"",
            text
        );
    }
    Ok(format)
}

/// Parse a timecode argument, honoring an explicit `--fps` when given and
/// falling back to separator inference otherwise.
pub fn parse_argument(text: &str, fps: Option<&str>) -> anyhow::Result<Timecode> {
    match fps {
        Some(rate) => {
            let format = resolve_fps(rate)?;
            Ok(parse_timecode(text, format)?)
        }
        None => Ok(text.parse()?),
    }
}
