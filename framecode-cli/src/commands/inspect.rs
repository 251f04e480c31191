//! Timecode inspection command.

use clap::Args;
use console::style;
use framecode_core::Timecode;
use serde::Serialize;

/// Report printed for an inspected timecode.
#[derive(Debug, Clone, Serialize)]
pub struct TimecodeReport {
    /// Canonical string form.
    pub timecode: String,
    /// Hours field.
    pub hours: u32,
    /// Minutes field.
    pub minutes: u8,
    /// Seconds field.
    pub seconds: u8,
    /// Frames field.
    pub frames: u8,
    /// Canonical format label.
    pub format: String,
    /// Nominal integer rate.
    pub nominal_fps: u32,
    /// Nominal floating rate.
    pub float_fps: f64,
    /// Whether the format follows the drop-frame convention.
    pub drop_frame: bool,
    /// Signed total-frame count since 00:00:00:00.
    pub total_frames: i64,
    /// Signed count of whole days folded out of the fields.
    pub rollover: i64,
}

impl TimecodeReport {
    /// Build a report from a timecode value.
    pub fn new(tc: &Timecode) -> Self {
        let (hours, minutes, seconds, frames, format, rollover) = tc.decompose();
        Self {
            timecode: tc.to_string(),
            hours,
            minutes,
            seconds,
            frames,
            format: format.label().to_string(),
            nominal_fps: format.to_int(),
            float_fps: format.to_float(),
            drop_frame: format.is_drop_frame(),
            total_frames: tc.total_frames(),
            rollover,
        }
    }
}

/// Parse a timecode and print its fields, total frames, and format
/// attributes.
#[derive(Args, Debug)]
pub struct CmdInspect {
    /// Timecode to inspect (HH:MM:SS:FF or HH:MM:SS;FF)
    pub timecode: String,

    /// Frame rate (integer, float, or canonical label); inferred from the
    /// separator when omitted
    #[arg(long)]
    pub fps: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

impl CmdInspect {
    /// Execute the inspect command.
    pub fn run(&self) -> anyhow::Result<()> {
        let tc = super::parse_argument(&self.timecode, self.fps.as_deref())?;
        let report = TimecodeReport::new(&tc);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report);
        }

        Ok(())
    }
}

fn print_report(report: &TimecodeReport) {
    println!("{}", style(&report.timecode).green().bold());
    println!();
    println!("{}", style("Fields:").cyan().bold());
    println!("  Hours:         {}", report.hours);
    println!("  Minutes:       {}", report.minutes);
    println!("  Seconds:       {}", report.seconds);
    println!("  Frames:        {}", report.frames);
    println!("  Rollover:      {}", report.rollover);
    println!();
    println!("{}", style("Format:").cyan().bold());
    println!("  Label:         {}", style(&report.format).white());
    println!("  Nominal fps:   {}", report.nominal_fps);
    println!("  Float fps:     {}", report.float_fps);
    println!("  Drop-frame:    {}", report.drop_frame);
    println!();
    println!(
        "{} {}",
        style("Total frames:").cyan().bold(),
        style(report.total_frames).yellow()
    );
}
