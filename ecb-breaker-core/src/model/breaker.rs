use std::path::Path;

use crate::error::BreakerError;
use super::ciphertext::Ciphertext;
use super::guesser;
use super::hill_climb::{self, Candidate};
use super::mapping::Mapping;
use super::ngram_table::NGramTables;
use super::search_config::SearchConfig;

/// High-level entry point: frequency seeding followed by hill climbing.
///
/// # Responsibilities
/// - Own the three n-gram tables for the lifetime of the solver
/// - Build the seed mapping for a ciphertext
/// - Refine it and hand back the best decoding
#[derive(Clone, Debug)]
pub struct Breaker {
	tables: NGramTables,
}

impl Breaker {
	pub fn new(tables: NGramTables) -> Self {
		Self { tables }
	}

	/// Loads the unigram, bigram and trigram CSV sources.
	///
	/// # Errors
	/// Returns an error if any source is unreadable or empty.
	pub fn load<P: AsRef<Path>>(unigram: P, bigram: P, trigram: P, use_cache: bool) -> Result<Self, BreakerError> {
		Ok(Self::new(NGramTables::load(unigram, bigram, trigram, use_cache)?))
	}

	pub fn tables(&self) -> &NGramTables {
		&self.tables
	}

	/// Seed mapping from symbol and letter frequency ranks.
	pub fn initial_guess(&self, ciphertext: &Ciphertext) -> Mapping {
		guesser::initial_guess(ciphertext, &self.tables.unigrams)
	}

	/// Seeds a mapping, refines it and returns the best candidate.
	pub fn solve(&self, ciphertext: &Ciphertext, config: &SearchConfig) -> Candidate {
		let seed = self.initial_guess(ciphertext);
		hill_climb::refine(ciphertext, seed, &self.tables, config)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::ngram_table::{NGramOrder, NGramTable};

	fn breaker() -> Breaker {
		Breaker::new(NGramTables::new(
			NGramTable::from_rows(NGramOrder::Unigram, [["e", "12.7"], ["t", "9.1"]]),
			NGramTable::from_rows(NGramOrder::Bigram, [["te", "1", "1.2"]]),
			NGramTable::new(NGramOrder::Trigram),
		))
	}

	#[test]
	fn zero_budget_solve_decodes_the_seed() {
		let breaker = breaker();
		let ciphertext = Ciphertext::new(["a", "b", "a", "c", "a", "b"]);
		let seed = breaker.initial_guess(&ciphertext);

		let best = breaker.solve(&ciphertext, &SearchConfig::default().with_iterations(0));
		assert_eq!(best.mapping, seed);
		assert_eq!(best.text, " e t e");
		assert_eq!(best.score, breaker.tables().score(" e t e"));
	}

	#[test]
	fn solve_keeps_seed_letters() {
		let breaker = breaker();
		let ciphertext = Ciphertext::new(["a", "b", "a", "c", "a", "b"]);
		let best = breaker.solve(&ciphertext, &SearchConfig::default().with_iterations(50).with_seed(5));

		let mut letters = best.mapping.letters().to_vec();
		letters.sort_unstable();
		assert_eq!(letters, vec![' ', 'e', 't']);
	}
}
