use super::ciphertext::Ciphertext;
use super::mapping::Mapping;
use super::ngram_table::{NGramTable, WeightField};

/// How many of the most frequent ciphertext symbols receive a seed letter.
///
/// One more than the alphabet, to leave room for a space-like block.
pub const MAX_RANKED_SYMBOLS: usize = 27;

/// Letter ranked ahead of every unigram: the most common character of
/// running text, often missing from letter frequency tables.
pub const DEFAULT_LETTER: char = ' ';

/// Plaintext letters ranked by descending unigram value, after `DEFAULT_LETTER`.
///
/// # Notes
/// - Only single-character keys are letters; longer keys are skipped.
/// - A non-numeric or NaN value ranks as 0.
/// - Ties keep table order.
pub fn rank_letters(unigrams: &NGramTable) -> Vec<char> {
	let mut weighted: Vec<(char, f64)> = Vec::with_capacity(unigrams.len());
	for (token, entry) in unigrams.iter() {
		let mut chars = token.chars();
		let (Some(letter), None) = (chars.next(), chars.next()) else {
			log::debug!("skipping multi-character unigram key {token:?}");
			continue;
		};
		let weight = entry.field(WeightField::Value).filter(|w| !w.is_nan()).unwrap_or_else(|| {
			log::warn!("unigram {token:?} has a non-numeric value, ranking it last");
			0.0
		});
		weighted.push((letter, weight));
	}
	weighted.sort_by(|a, b| b.1.total_cmp(&a.1));

	let mut letters = Vec::with_capacity(weighted.len() + 1);
	letters.push(DEFAULT_LETTER);
	letters.extend(weighted.into_iter().map(|(letter, _)| letter));
	letters
}

/// Builds the seed mapping by frequency analysis.
///
/// The i-th most frequent ciphertext symbol (at most `MAX_RANKED_SYMBOLS`)
/// gets the i-th letter of `rank_letters`. When one ranking is shorter, the
/// surplus ranks of the other stay unassigned.
pub fn initial_guess(ciphertext: &Ciphertext, unigrams: &NGramTable) -> Mapping {
	let letters = rank_letters(unigrams);
	let mapping: Mapping = ciphertext
		.symbol_frequencies()
		.into_iter()
		.take(MAX_RANKED_SYMBOLS)
		.zip(letters)
		.map(|((symbol, _), letter)| (symbol, letter))
		.collect();
	log::debug!("seed mapping over {} symbols:\n{mapping}", mapping.len());
	mapping
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::ngram_table::NGramOrder;

	fn unigrams(rows: &[&[&str]]) -> NGramTable {
		NGramTable::from_rows(NGramOrder::Unigram, rows.iter().map(|r| r.iter()))
	}

	#[test]
	fn most_frequent_symbol_gets_the_space() {
		let ciphertext = Ciphertext::new(["X", "Y", "X", "Z"]);
		let table = unigrams(&[&["A", "50"], &["B", "30"]]);

		let mapping = initial_guess(&ciphertext, &table);
		assert_eq!(mapping.iter().collect::<Vec<_>>(), vec![("X", ' '), ("Y", 'A'), ("Z", 'B')]);
	}

	#[test]
	fn ranks_letters_by_value() {
		let table = unigrams(&[&["letter", "percentage"], &["t", "9.1"], &["e", "12.7"], &["q", "oops"], &["th", "4"], &["a", "8.2"]]);
		assert_eq!(rank_letters(&table), vec![' ', 'e', 't', 'a', 'q']);
	}

	#[test]
	fn nan_value_ranks_as_zero() {
		let table = unigrams(&[&["z", "NaN"], &["e", "12.7"], &["t", "9.1"], &["q", "0"]]);
		assert_eq!(rank_letters(&table), vec![' ', 'e', 't', 'z', 'q']);
	}

	#[test]
	fn truncates_to_shorter_ranking() {
		let ciphertext = Ciphertext::new(["1", "2", "3", "1", "2", "1"]);
		let table = unigrams(&[&["e", "12"]]);

		let mapping = initial_guess(&ciphertext, &table);
		assert_eq!(mapping.len(), 2);
		assert_eq!(mapping.get("1"), Some(' '));
		assert_eq!(mapping.get("2"), Some('e'));
		assert_eq!(mapping.get("3"), None);
		assert_eq!(mapping.substitute(&ciphertext), " e3 e ");
	}

	#[test]
	fn assigns_at_most_max_ranked_symbols() {
		let tokens: Vec<String> = (0..40).map(|i| format!("{i:02}")).collect();
		let ciphertext = Ciphertext::new(tokens);
		let letters: Vec<String> = ('a'..='z').chain('A'..='Z').map(String::from).collect();
		let table = NGramTable::from_rows(NGramOrder::Unigram, letters.iter().map(|l| [l.as_str(), "1"]));

		assert_eq!(initial_guess(&ciphertext, &table).len(), MAX_RANKED_SYMBOLS);
	}
}
