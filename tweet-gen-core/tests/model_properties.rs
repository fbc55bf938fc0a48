use std::collections::{HashMap, HashSet};

use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tweet_gen_core::model::sampler::{MAX_WORDS, generate_sentence, generate_sentences};
use tweet_gen_core::model::{GenerationConfig, Model, WordBudget};

const CORPORA: &[&str] = &[
	"the cat sat.\nthe dog ran.\n",
	"I think therefore I am. I think so.\nyou think I am not\n",
	"a  b   a b a.\n\n   \nb a b b b c\nc c c. c a\n",
	"one line without break",
	"Same same SAME same. same\n",
];

fn build(corpus: &str) -> Model {
	Model::from_reader(corpus.as_bytes(), WordBudget::Unbounded).unwrap().0
}

#[test]
fn every_word_is_registered_once() {
	for corpus in CORPORA {
		let model = build(corpus);
		let mut seen = HashSet::new();
		for (_, word) in model.registry().iter() {
			assert!(seen.insert(word.text().to_owned()), "duplicate {:?}", word.text());
		}

		let expected: HashSet<&str> = corpus
			.split_inclusive('\n')
			.filter(|line| !line.trim().is_empty())
			.flat_map(|line| line.split(' ').filter(|t| !t.is_empty()))
			.collect();
		assert_eq!(seen.len(), expected.len());
	}
}

#[test]
fn successor_totals_match_in_line_follow_counts() {
	for corpus in CORPORA {
		let model = build(corpus);

		let mut followed: HashMap<&str, usize> = HashMap::new();
		for line in corpus.split_inclusive('\n') {
			let tokens: Vec<&str> = line.split(' ').filter(|t| !t.is_empty()).collect();
			for pair in tokens.windows(2) {
				*followed.entry(pair[0]).or_default() += 1;
			}
		}

		for (_, word) in model.registry().iter() {
			if word.is_terminal() {
				assert!(word.successors().is_empty());
			} else {
				let expected = followed.get(word.text()).copied().unwrap_or(0);
				assert_eq!(word.total_frequency(), expected, "word {:?}", word.text());
			}
		}
	}
}

#[test]
fn occurrences_count_every_token() {
	let model = build("x y x.\nx y\n");
	let x = model.word(model.registry().find("x").unwrap());
	let y = model.word(model.registry().find("y").unwrap());
	assert_eq!(x.occurrences(), 2);
	assert_eq!(y.occurrences(), 1);
}

#[test]
fn budget_of_three_keeps_three_words() {
	let (model, report) = Model::from_reader(
		&b"alpha beta alpha gamma delta epsilon\nzeta\n"[..],
		WordBudget::Limited(3),
	)
	.unwrap();

	let texts: Vec<&str> = model.registry().iter().map(|(_, w)| w.text()).collect();
	assert_eq!(texts, vec!["alpha", "beta", "gamma"]);
	assert!(report.budget_exhausted);
	// alpha, beta, alpha, gamma
	assert_eq!(report.tokens, 4);
}

#[test]
fn sentences_hold_two_to_twenty_words() {
	let corpus = "a b a b a b a b a b a b a b a b a b a b a b a b c.\nb c\n";
	let model = build(corpus);
	let mut rng = StdRng::seed_from_u64(2024);
	for _ in 0..500 {
		let sentence = generate_sentence(&model, &mut rng, MAX_WORDS).unwrap();
		assert!((2..=MAX_WORDS).contains(&sentence.len()), "{} words", sentence.len());
	}
}

#[test]
fn single_pair_corpus_ignores_seed() {
	let model = build("only pair.\n");
	for seed in [0, 1, 17, u64::MAX] {
		let mut rng = StdRng::seed_from_u64(seed);
		let sentence = generate_sentence(&model, &mut rng, MAX_WORDS).unwrap();
		assert_eq!(sentence.words(), &["only".to_owned(), "pair.\n".to_owned()]);
		assert_eq!(sentence.to_string(), "only pair.\n");
	}
}

#[test]
fn generation_is_reproducible() {
	let corpus = CORPORA.concat();
	let config = GenerationConfig::new(40);

	let first = {
		let mut rng = StdRng::seed_from_u64(31337);
		generate_sentences(&build(&corpus), &mut rng, &config).unwrap()
	};
	let second = {
		let mut rng = StdRng::seed_from_u64(31337);
		generate_sentences(&build(&corpus), &mut rng, &config).unwrap()
	};

	assert_eq!(first, second);
}

#[test]
fn first_successor_wins_the_tie() {
	// "the" -> [cat:1, dog:1]: draws 0 and 1 both satisfy 1 >= r
	let model = build("the cat sat.\nthe dog ran.\n");
	let the = model.word(model.registry().find("the").unwrap());
	let cat = model.registry().find("cat").unwrap();
	assert_eq!(the.successor_for_draw(0), Some(cat));

	let mut rng = StdRng::seed_from_u64(8);
	for _ in 0..100 {
		let sentence = generate_sentence(&model, &mut rng, MAX_WORDS).unwrap();
		assert!(!sentence.words().contains(&"dog".to_owned()) || sentence.words()[0] == "dog");
	}
}
