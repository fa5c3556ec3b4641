//! Command-line interface for the hangman client.

use clap::Parser;
use clap::error::ErrorKind;
use hangman_client::VerdictMode;
use std::path::PathBuf;

/// Hangman client - play hangman against a remote word server
#[derive(Parser, Debug)]
#[command(name = "hangman")]
#[command(about = "Play hangman against a remote word server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print debugging info
    #[arg(short, long)]
    pub debug: bool,

    /// Hangman server host [default: erdos.dsm.fordham.edu]
    pub server: Option<String>,

    /// Hangman server port [default: 9999]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// TOML config file with host, port, verdict_mode, banner_lines
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// How to treat verdict lines other than true/false (lenient or strict)
    #[arg(long)]
    pub verdicts: Option<VerdictMode>,

    /// Let the computer play this many rounds instead of reading the keyboard
    #[arg(long, value_name = "ROUNDS")]
    pub auto: Option<u32>,
}

/// Process exit status for a failed parse: 0 when help or version was
/// requested, 1 for a usage error.
pub fn exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}
