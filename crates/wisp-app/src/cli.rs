use clap::Parser;

/// Wisp — terminal demo host for the embedded chat widget.
#[derive(Parser, Debug)]
#[command(name = "wisp", version, about)]
pub struct Args {
    /// Backend base URL override.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Reveal instantly instead of on the typewriter cadence.
    #[arg(long)]
    pub instant: bool,

    /// Print the conversation transcript on exit.
    #[arg(long)]
    pub transcript: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
