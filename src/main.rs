use std::io::{self, BufRead};

use anyhow::Result;
use clap::Parser;
use log::debug;

mod balloon;
mod figures;

use figures::Figure;

#[derive(Parser)]
#[command(
    name = "cowsay",
    version,
    about = "Wraps piped-in text in a speech balloon spoken by an ASCII figure"
)]
struct Cli {
    /// The figure name. Valid values are cow, stegosaurus, alligator, whale, cat
    #[arg(short, long, default_value = "cow")]
    figure: String,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let stdin = io::stdin();
    if termion::is_tty(&stdin) {
        println!("The command is intended to work with pipes");
        println!("Usage: fortune | cowsay");
        return Ok(());
    }

    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        balloon::chunk_line(&line?, &mut lines);
    }

    let lines = balloon::tabs_to_spaces(&lines);
    let maxwidth = balloon::max_width(&lines);
    debug!("{} balloon rows, {} runes wide", lines.len(), maxwidth);

    let messages = balloon::normalize_lengths(&lines, maxwidth);
    println!("{}", balloon::build_balloon(&messages, maxwidth));
    println!();

    match Figure::parse(&cli.figure) {
        Some(figure) => println!("{}", figure.art()),
        None => println!("Unknown figure"),
    }

    Ok(())
}
