mod check;
mod list;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use orthic_core::DirectoryProvider;

#[derive(Parser)]
#[command(name = "glyph_tool")]
#[command(about = "Inspect a directory of Orthic glyph artwork")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Glyph directory
    #[arg(long, default_value = "resources/glyphs")]
    dir: PathBuf,

    /// Artwork file extension
    #[arg(long, default_value = "png")]
    extension: String,
}

#[derive(Subcommand)]
enum Command {
    /// Report glyphs with missing or repeated alignment markers
    Check {
        /// Exit with an error if any glyph has a problem
        #[arg(long)]
        strict: bool,
    },
    /// Print the scan order and the variants of each base symbol
    List {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let provider = DirectoryProvider::new(&args.dir, &args.extension);

    match args.command {
        Command::Check { strict } => {
            let problems = check::run(&provider)?;
            if strict && problems > 0 {
                anyhow::bail!("{} glyph(s) in {} have problems", problems, args.dir.display());
            }
        }
        Command::List { json } => list::run(&provider, json)?,
    }
    Ok(())
}
