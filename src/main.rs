use std::io::stdout;

use anyhow::Result;
use clap::Parser;
use maillon::{printer::render, List};

use crate::cli::Cli;

mod cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut list = List::new();
    for value in cli.values {
        // A failed append is reported and skipped; the list stays valid.
        if let Err(error) = list.try_append(value) {
            eprintln!("append of {value} skipped: {error}");
        }
    }
    render(&list, &cli.label, &mut stdout().lock())?;
    list.clear();
    Ok(())
}
