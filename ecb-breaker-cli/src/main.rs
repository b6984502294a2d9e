use std::path::PathBuf;

use clap::Parser;
use ecb_breaker_core::io::{load_wordlist, write_text};
use ecb_breaker_core::model::search_config::DEFAULT_ITERATIONS;
use ecb_breaker_core::{Breaker, Ciphertext, SearchConfig};

/// Break a block-to-letter substitution cipher with n-gram statistics.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// Ciphertext file, one block per line (blank lines are ignored)
    #[clap(short, long)]
    cipher: PathBuf,

    /// Dictionary file, one word per line
    #[clap(short = 'd', long = "cipher-dict")]
    cipher_dict: Option<PathBuf>,

    /// Unigram CSV (token,value)
    #[clap(long)]
    unigram: PathBuf,

    /// Bigram CSV (token,count,percentage)
    #[clap(long)]
    bigram: PathBuf,

    /// Trigram CSV (token,count,percentage)
    #[clap(long)]
    trigram: PathBuf,

    /// Write the decoded text to this file
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Wrap width used by --print
    #[clap(long, default_value_t = 80)]
    width: usize,

    /// Number of hill-climb iterations
    #[clap(long, default_value_t = DEFAULT_ITERATIONS)]
    iters: usize,

    /// Seed for the swap selector, for reproducible runs
    #[clap(long)]
    seed: Option<u64>,

    /// Print the decoded text, wrapped, to stdout
    #[clap(long)]
    print: bool,

    /// Read/write a binary cache (.bin) next to each n-gram CSV
    #[clap(long)]
    cache: bool,
}

/// Wraps the decoded text to `width` columns.
fn format_text(text: &str, width: usize) -> String {
    textwrap::fill(text, width)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let ciphertext = Ciphertext::load(&args.cipher)?;
    if let Some(dict) = &args.cipher_dict {
        let words = load_wordlist(dict)?;
        log::info!("loaded {} dictionary words from {}", words.len(), dict.display());
    }
    let breaker = Breaker::load(&args.unigram, &args.bigram, &args.trigram, args.cache)?;

    let mut config = SearchConfig::default().with_iterations(args.iters);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let best = breaker.solve(&ciphertext, &config);
    log::info!("final score {:.4}", best.score);
    log::debug!("final mapping:\n{}", best.mapping);

    if let Some(output) = &args.output {
        write_text(output, &best.text)?;
        log::info!("decoded text written to {}", output.display());
    }

    if args.print {
        println!("{}", format_text(&best.text, args.width));
    }

    Ok(())
}
