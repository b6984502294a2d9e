use std::cmp::Ordering;

use rand::Rng;
use rand::seq::index;

use super::ciphertext::Ciphertext;
use super::mapping::Mapping;
use super::ngram_table::NGramTables;
use super::search_config::SearchConfig;

/// A mapping together with the text it decodes to and that text's score.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
	pub mapping: Mapping,
	pub text: String,
	pub score: f64,
}

/// One ciphertext position, resolved against the mapping's symbol order.
#[derive(Clone, Copy, Debug)]
enum Slot<'a> {
	Letter(usize),
	Literal(&'a str),
}

/// Greedy local search over letter swaps.
///
/// Each step picks two distinct symbols uniformly at random, swaps their
/// letters, decodes the full ciphertext again and keeps the swap only if the
/// score strictly improves. There is no annealing and no restart, so the
/// search can settle in a local optimum.
///
/// # Invariants
/// - `best.score` never decreases
/// - `best.text` is the decoding of `best.mapping`
/// - the multiset of letters in `best.mapping` is that of the seed
pub struct HillClimb<'a, R> {
	tables: &'a NGramTables,
	slots: Vec<Slot<'a>>,
	rng: R,
	best: Candidate,
	steps: usize,
	accepted: usize,
}

impl<'a, R: Rng> HillClimb<'a, R> {
	/// Starts a search from `seed`, scoring its decoding as the initial best.
	pub fn new(ciphertext: &'a Ciphertext, seed: Mapping, tables: &'a NGramTables, rng: R) -> Self {
		// Symbol positions never change under swaps, so each token is
		// resolved once and decoding only reads the current letters.
		let slots = ciphertext
			.tokens()
			.iter()
			.map(|token| match seed.position(token) {
				Some(i) => Slot::Letter(i),
				None => Slot::Literal(token.as_str()),
			})
			.collect();

		let mut search = Self {
			tables,
			slots,
			rng,
			best: Candidate { mapping: Mapping::new(), text: String::new(), score: 0.0 },
			steps: 0,
			accepted: 0,
		};
		let text = search.decode(&seed);
		let score = tables.score(&text);
		search.best = Candidate { mapping: seed, text, score };
		search
	}

	/// Full decoding of the ciphertext under `mapping`.
	fn decode(&self, mapping: &Mapping) -> String {
		let letters = mapping.letters();
		let mut text = String::with_capacity(self.slots.len());
		for slot in &self.slots {
			match *slot {
				Slot::Letter(i) => text.push(letters[i]),
				Slot::Literal(token) => text.push_str(token),
			}
		}
		text
	}

	/// Tries one random swap and reports whether it was accepted.
	///
	/// With fewer than two symbols there is nothing to swap and the step is
	/// a no-op.
	pub fn step(&mut self) -> bool {
		self.steps += 1;
		if self.best.mapping.len() < 2 {
			return false;
		}

		let pair = index::sample(&mut self.rng, self.best.mapping.len(), 2);
		let mapping = self.best.mapping.swapped(pair.index(0), pair.index(1));
		let text = self.decode(&mapping);
		let score = self.tables.score(&text);
		// Only a strict improvement is kept; a NaN on either side rejects.
		if score.partial_cmp(&self.best.score) != Some(Ordering::Greater) {
			return false;
		}

		log::debug!("step {}: score {:.4} -> {:.4}", self.steps, self.best.score, score);
		self.best = Candidate { mapping, text, score };
		self.accepted += 1;
		true
	}

	/// Runs `iterations` steps and returns the best candidate found.
	pub fn run(mut self, iterations: usize) -> Candidate {
		for _ in 0..iterations {
			self.step();
		}
		log::info!(
			"hill climb done: {} steps, {} accepted, best score {:.4}",
			self.steps, self.accepted, self.best.score
		);
		self.best
	}

	pub fn best(&self) -> &Candidate {
		&self.best
	}

	/// Number of steps taken so far.
	pub fn steps(&self) -> usize {
		self.steps
	}

	/// Number of swaps kept so far.
	pub fn accepted(&self) -> usize {
		self.accepted
	}
}

/// Refines `seed` with a hill climb configured by `config`.
pub fn refine(ciphertext: &Ciphertext, seed: Mapping, tables: &NGramTables, config: &SearchConfig) -> Candidate {
	HillClimb::new(ciphertext, seed, tables, config.rng()).run(config.iterations)
}
