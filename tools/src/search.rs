use std::error::Error;
use std::fs::File;
use std::io::Read;

use clap::Parser;
use skew_sa::SuffixArrayBuilder;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Locates patterns in the given file with a suffix array."
)]
struct Args {
    #[arg(short = 'i', long, help = "Path to an input text file")]
    input_file: String,

    #[arg(required = true, help = "Patterns to be located")]
    patterns: Vec<String>,

    #[arg(short = 'v', long, help = "Flag to print construction progress")]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let text = read_text(&args.input_file)?;
    let sa = SuffixArrayBuilder::new(&text[..])
        .verbose(args.verbose)
        .build()?;

    for pattern in &args.patterns {
        let mut positions = sa.occurrences(pattern.as_bytes()).to_vec();
        if positions.is_empty() {
            println!("{:?}: pattern not found", pattern);
            continue;
        }
        positions.sort_unstable();
        println!("{:?}: {} occurrences", pattern, positions.len());
        for pos in positions {
            println!("  {}", pos);
        }
    }

    Ok(())
}

fn read_text(input_file: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut file: File = File::open(input_file)?;
    let mut text = Vec::new();
    file.read_to_end(&mut text)?;
    Ok(text)
}
