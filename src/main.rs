// src/main.rs
use anyhow::Result;
use clap::Parser;
use fontblaster::cli::{self, Args};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let report = cli::run(&args)?;
    println!("{}", cli::render(&report, args.sorted));
    Ok(())
}
