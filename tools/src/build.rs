use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::time::Instant;

use clap::Parser;
use skew_sa::SuffixArrayBuilder;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Constructs the suffix array of the given file."
)]
struct Args {
    #[arg(short = 'i', long, help = "Path to an input text file")]
    input_file: String,

    #[arg(
        short = 'o',
        long,
        help = "Path to an output file receiving one suffix position per line"
    )]
    output_file: Option<String>,

    #[arg(
        short = 't',
        long,
        help = "Optional parameter for the comparison sort threshold"
    )]
    threshold: Option<usize>,

    #[arg(long, help = "Flag to verify the constructed suffix array")]
    verify: bool,

    #[arg(short = 'v', long, help = "Flag to print construction progress")]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let text = read_text(&args.input_file)?;

    let builder = SuffixArrayBuilder::new(&text[..]).verbose(args.verbose);
    let builder = if let Some(threshold) = args.threshold {
        builder.threshold(threshold)
    } else {
        builder
    };

    let now = Instant::now();
    let sa = builder.build()?;
    println!("Elapsed sec: {}", now.elapsed().as_millis() as f64 / 1000.0);

    if args.verify {
        skew_sa::verify(sa.text(), sa.suffixes())?;
        println!("Verified {} suffixes", sa.len());
    }

    if let Some(output_file) = args.output_file.as_ref() {
        let mut writer = BufWriter::new(File::create(output_file)?);
        for pos in sa.suffixes() {
            writeln!(writer, "{}", pos)?;
        }
        writer.flush()?;
    }

    Ok(())
}

fn read_text(input_file: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut file: File = File::open(input_file)?;
    let n_bytes = file.metadata()?.len();
    let mut text = Vec::with_capacity(n_bytes as usize);
    file.read_to_end(&mut text)?;
    Ok(text)
}
