use anyhow::Result;
use clap::Parser;
use cleanup_files::{execute, logger, CleanupPlan};
use std::io;

#[derive(Parser, Debug)]
#[command(name = "cleanup-files", version)]
#[command(about = "Removes unnecessary files from the Offensive Security Escape Room project")]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    logger::init();

    let stdout = io::stdout();
    execute(&CleanupPlan::default(), &mut stdout.lock())?;
    Ok(())
}
