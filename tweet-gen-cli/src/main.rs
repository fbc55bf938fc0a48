use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tweet_gen_core::model::sampler::{MAX_WORDS, generate_sentence};
use tweet_gen_core::model::{Model, WordBudget};

/// Generates random "tweets" from a word chain learned on a text corpus.
#[derive(Debug, Parser)]
#[command(name = "tweet-gen", version)]
struct Args {
	/// Seed of the random source; the same seed gives the same tweets
	seed: u64,

	/// Number of tweets to generate
	sentences: usize,

	/// Path to the corpus text file
	corpus: PathBuf,

	/// Maximum number of distinct words to read (0 or -1 reads the whole file)
	#[arg(default_value_t = 0, allow_negative_numbers = true)]
	word_budget: i64,

	/// Maximum number of words per tweet
	#[arg(long, default_value_t = MAX_WORDS, value_parser = parse_max_words)]
	max_words: usize,
}

fn parse_max_words(value: &str) -> Result<usize, String> {
	match value.parse::<usize>() {
		Ok(n) if n >= 2 => Ok(n),
		Ok(n) => Err(format!("must be at least 2, got {n}")),
		Err(e) => Err(e.to_string()),
	}
}

/// Any value <= 0 reads the whole corpus.
fn word_budget(value: i64) -> WordBudget {
	WordBudget::from(usize::try_from(value).unwrap_or(0))
}

/// Builds the model, then writes `Tweet N: ...` lines to `out`.
fn run<W: Write>(args: &Args, out: &mut W) -> anyhow::Result<()> {
	let (model, report) = Model::from_file(&args.corpus, word_budget(args.word_budget))
		.with_context(|| format!("cannot read corpus {}", args.corpus.display()))?;
	info!("{} distinct words from {} lines", model.len(), report.lines);

	let mut rng = StdRng::seed_from_u64(args.seed);
	for i in 1..=args.sentences {
		let sentence = generate_sentence(&model, &mut rng, args.max_words)?;
		write!(out, "Tweet {i}: {sentence}")?;
		if !sentence.ends_with_line_break() {
			writeln!(out)?;
		}
	}
	out.flush()?;
	Ok(())
}

fn main() -> anyhow::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let args = Args::parse();
	let stdout = io::stdout();
	run(&args, &mut stdout.lock())
}
