use std::io;

use clap::Parser;
use mwdict::{lookup, Config, HttpSource};

#[derive(Parser)]
#[command(name = "mwdict", version)]
#[command(about = "Look up a word in the Merriam-Webster Collegiate Dictionary")]
struct Args {
    /// The word to look up
    word: String,

    /// Include etymology information (if available)
    #[arg(short, long)]
    etymology: bool,

    /// Print the request URL and the raw API response
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = Config::from_env()?;
    let source = HttpSource::new(config).debug(args.debug);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    lookup(&args.word, args.etymology, &source, &mut out)?;
    Ok(())
}
