// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(name = "povanim")]
#[command(about = "POV-Ray scene animation toolkit", long_about = None)]
pub struct Cli {
    /// Scene to render (see --list)
    pub scene: Option<String>,

    /// Settings file (TOML); built-in defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// What to produce
    #[arg(short, long, value_enum, default_value_t = Mode::Png)]
    pub mode: Mode,

    /// Frame number to render in png and json modes
    #[arg(long, default_value_t = 0)]
    pub frame: u32,

    /// List available scenes and exit
    #[arg(long, default_value_t = false)]
    pub list: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Single frame as PNG
    Png,
    /// Full animation encoded as MP4
    Mp4,
    /// Full animation encoded as GIF
    Gif,
    /// Single frame's scene description as JSON, no renderer involved
    Json,
}
