//! Timecode increment loop command.

use clap::Args;
use console::style;

/// Print successive timecodes stepping a signed frame delta.
#[derive(Args, Debug)]
pub struct CmdIncrement {
    /// Starting timecode (HH:MM:SS:FF or HH:MM:SS;FF)
    pub timecode: String,

    /// Frame rate; inferred from the separator when omitted
    #[arg(long)]
    pub fps: Option<String>,

    /// Signed frame delta applied at each step
    #[arg(long)]
    pub frames: i64,

    /// Number of values to print
    #[arg(long, default_value = "10")]
    pub count: u32,
}

impl CmdIncrement {
    /// Execute the increment command.
    pub fn run(&self) -> anyhow::Result<()> {
        let mut tc = super::parse_argument(&self.timecode, self.fps.as_deref())?;
        let fps = tc.format().to_int();

        for _ in 0..self.count {
            println!("value: {} fps: {}", style(tc).green(), fps);
            tc = tc.add_frames(self.frames)?;
        }

        Ok(())
    }
}
