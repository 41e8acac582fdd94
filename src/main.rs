use clap::Parser;
use miette::Result;
use picture::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    picture::cli::run(cli)?;
    Ok(())
}
