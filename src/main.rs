//! Главный исполняемый файл rustdb-lexer

use clap::Parser;
use rustdb_lexer::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    cli.execute()?;
    Ok(())
}
