//! Timecode addition command.

use clap::Args;
use console::style;
use serde::Serialize;

use super::inspect::TimecodeReport;

/// JSON output for an addition.
#[derive(Debug, Clone, Serialize)]
struct AddOutput {
    left: String,
    right: String,
    sum: TimecodeReport,
}

/// Sum two same-format timecodes.
#[derive(Args, Debug)]
pub struct CmdAdd {
    /// Left operand (HH:MM:SS:FF or HH:MM:SS;FF)
    pub left: String,

    /// Right operand (same format as the left)
    pub right: String,

    /// Frame rate for both operands; inferred from the separators when
    /// omitted
    #[arg(long)]
    pub fps: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

impl CmdAdd {
    /// Execute the add command.
    pub fn run(&self) -> anyhow::Result<()> {
        let left = super::parse_argument(&self.left, self.fps.as_deref())?;
        let right = super::parse_argument(&self.right, self.fps.as_deref())?;
        let sum = left.add(&right)?;

        if self.json {
            let output = AddOutput {
                left: left.to_string(),
                right: right.to_string(),
                sum: TimecodeReport::new(&sum),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!(
                "{} + {} = {}  ({} frames at {})",
                style(left).white(),
                style(right).white(),
                style(sum).green().bold(),
                sum.total_frames(),
                sum.format()
            );
            if sum.rollover() != 0 {
                println!("rolled over {} day(s)", sum.rollover());
            }
        }

        Ok(())
    }
}
