use std::io::{self, BufRead, Write};

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use synopsis_gen_core::{GenerationInput, SAMPLE_CORPUS, SynopsisGenerator};

/// Trains a bigram model and prints generated book synopses.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Training corpus (defaults to the bundled fantasy blurbs).
    #[arg(short, long)]
    corpus: Option<String>,

    /// Number of synopses to print.
    #[arg(short = 'n', long, default_value_t = 5)]
    count: usize,

    /// Maximum number of words per synopsis.
    #[arg(long, default_value_t = 80)]
    max_length: usize,

    /// Number of words before a sentence end may stop a synopsis.
    #[arg(long, default_value_t = 20)]
    min_length: usize,

    /// Number of bigram entries to preview.
    #[arg(long, default_value_t = 10)]
    preview: usize,

    /// Seed for reproducible synopses (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the interactive loop.
    #[arg(long)]
    batch: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    // Train on the given corpus, or on the sample blurbs
    let mut generator = SynopsisGenerator::new();
    match &args.corpus {
        Some(path) => generator.train_files(&[path])?,
        None => generator.train(SAMPLE_CORPUS),
    }

    println!("Training Data Statistics:");
    println!("{}", generator.stats());
    println!();

    println!("Sample of bigrams dictionary:");
    println!("{}", generator.preview(args.preview));
    println!();

    // Rejects a zero maximum length
    let input = GenerationInput::new(args.max_length, args.min_length)?;

    // One random source for the whole session, seeded on request
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("Generated Book Synopses:");
    println!("{}", "-".repeat(50));
    for (i, synopsis) in generator.generate_many_with_rng(args.count, &input, &mut rng).iter().enumerate() {
        println!("Synopsis {}:", i + 1);
        println!("{synopsis}");
        println!();
    }

    if args.batch {
        return Ok(());
    }

    // Enter generates a new synopsis, 'quit' / 'exit' / 'q' leaves
    let interactive = GenerationInput::new(60, args.min_length)?;
    println!("Interactive Mode - Press Enter to generate new synopses (type 'quit' to exit):");
    let stdin = io::stdin();
    loop {
        print!("\nPress Enter for new synopsis: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if matches!(line.trim().to_lowercase().as_str(), "quit" | "exit" | "q") {
            break;
        }

        println!("New synopsis:");
        println!("{}", generator.generate_with_rng(&interactive, &mut rng));
    }

    Ok(())
}
