//! Frame-rate formats and the conversion table between their numeric,
//! textual, and flag attributes.
//!
//! Every supported rate is a distinct enumerator. Drop-frame 29.97 is its
//! own variant rather than a flag threaded beside the rate, so every
//! conversion stays a pure function of the variant alone.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use tracing::warn;

/// Supported frame-rate formats.
///
/// `None` is a sentinel for lookups that match no known rate; it has no
/// frame domain and cannot host non-trivial timecode values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FpsFormat {
    /// 24 fps (film)
    Fps24,
    /// 25 fps (PAL)
    Fps25,
    /// 30 fps
    Fps30,
    /// 29.97 fps (NTSC, non-drop-frame)
    Fps29_97,
    /// 29.97 fps drop-frame (NTSC)
    Fps29_97Df,
    /// 60 fps
    Fps60,
    /// Sentinel for unknown rates
    None,
}

/// One row of the conversion table.
struct FormatRecord {
    format: FpsFormat,
    int_rate: u32,
    float_rate: f64,
    label: &'static str,
    drop_frame: bool,
}

/// Declaration order is the lookup order: duplicate rates resolve to the
/// earliest row, so `from_int(30)` is `Fps30` and `from_float(29.97)` is
/// `Fps29_97`.
static FORMAT_TABLE: [FormatRecord; 7] = [
    FormatRecord {
        format: FpsFormat::Fps24,
        int_rate: 24,
        float_rate: 24.0,
        label: "24 fps",
        drop_frame: false,
    },
    FormatRecord {
        format: FpsFormat::Fps25,
        int_rate: 25,
        float_rate: 25.0,
        label: "25 fps",
        drop_frame: false,
    },
    FormatRecord {
        format: FpsFormat::Fps30,
        int_rate: 30,
        float_rate: 30.0,
        label: "30 fps",
        drop_frame: false,
    },
    FormatRecord {
        format: FpsFormat::Fps29_97,
        int_rate: 30,
        float_rate: 29.97,
        label: "29.97 fps",
        drop_frame: false,
    },
    FormatRecord {
        format: FpsFormat::Fps29_97Df,
        int_rate: 30,
        float_rate: 29.97,
        label: "29.97 fps drop-frame",
        drop_frame: true,
    },
    FormatRecord {
        format: FpsFormat::Fps60,
        int_rate: 60,
        float_rate: 60.0,
        label: "60 fps",
        drop_frame: false,
    },
    FormatRecord {
        format: FpsFormat::None,
        int_rate: 0,
        float_rate: 0.0,
        label: "NONE",
        drop_frame: false,
    },
];

/// Absolute tolerance for float lookups. Tight enough that 30000/1001
/// does not match 29.97.
const FLOAT_LOOKUP_EPSILON: f64 = 1e-9;

static DEFAULT_FORMAT: OnceLock<FpsFormat> = OnceLock::new();

impl FpsFormat {
    fn record(&self) -> &'static FormatRecord {
        // The table is keyed by variant; every variant has exactly one row.
        FORMAT_TABLE
            .iter()
            .find(|r| r.format == *self)
            .unwrap_or(&FORMAT_TABLE[FORMAT_TABLE.len() - 1])
    }

    /// Look up a format by nominal integer rate.
    ///
    /// Returns [`FpsFormat::None`] when no table row matches; the miss is
    /// reported as a warning, never as a hard error.
    #[must_use]
    pub fn from_int(rate: i64) -> Self {
        for record in &FORMAT_TABLE {
            if i64::from(record.int_rate) == rate {
                return record.format;
            }
        }
        warn!(rate, "no frame rate format for integer rate");
        Self::None
    }

    /// Look up a format by nominal floating rate.
    ///
    /// Returns [`FpsFormat::None`] when no table row matches; the miss is
    /// reported as a warning, never as a hard error.
    #[must_use]
    pub fn from_float(rate: f64) -> Self {
        for record in &FORMAT_TABLE {
            if (record.float_rate - rate).abs() < FLOAT_LOOKUP_EPSILON {
                return record.format;
            }
        }
        warn!(rate, "no frame rate format for float rate");
        Self::None
    }

    /// Look up a format by canonical label (exact match).
    ///
    /// Returns [`FpsFormat::None`] when no table row matches; the miss is
    /// reported as a warning, never as a hard error.
    #[must_use]
    pub fn from_string(label: &str) -> Self {
        for record in &FORMAT_TABLE {
            if record.label == label {
                return record.format;
            }
        }
        warn!(label, "no frame rate format for label");
        Self::None
    }

    /// Nominal integer rate magnitude (0 for the sentinel).
    ///
    /// The drop-frame and non-drop-frame 29.97 siblings both report 30;
    /// drop-frame status is carried by [`FpsFormat::is_drop_frame`], never
    /// by the sign or value of the rate.
    #[must_use]
    pub fn to_int(&self) -> u32 {
        self.record().int_rate
    }

    /// Nominal floating rate magnitude (0.0 for the sentinel).
    #[must_use]
    pub fn to_float(&self) -> f64 {
        self.record().float_rate
    }

    /// Canonical label for this format.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.record().label
    }

    /// Whether this format follows the drop-frame labeling convention.
    #[must_use]
    pub fn is_drop_frame(&self) -> bool {
        self.record().drop_frame
    }
}

impl fmt::Display for FpsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Default for FpsFormat {
    fn default() -> Self {
        default_format()
    }
}

/// The process-wide default format, read-only after first use.
///
/// Reads before any [`set_default_format`] call observe [`FpsFormat::Fps25`].
#[must_use]
pub fn default_format() -> FpsFormat {
    *DEFAULT_FORMAT.get_or_init(|| FpsFormat::Fps25)
}

/// Configure the process-wide default format.
///
/// May succeed at most once, before the default is first read. Returns
/// `false` (and leaves the default unchanged) on any later call.
pub fn set_default_format(format: FpsFormat) -> bool {
    DEFAULT_FORMAT.set(format).is_ok()
}
