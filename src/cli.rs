use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CliOptions {
    /// File to copy to standard output
    pub input: PathBuf,
}

pub fn parse() -> CliOptions {
    CliOptions::parse()
}
