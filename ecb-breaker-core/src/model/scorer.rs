use super::ngram_table::NGramTable;

/// Added to every probability before taking its logarithm, so a zero weight
/// stays finite.
pub const SMOOTHING: f64 = 1e-9;

/// Contribution of one matched n-gram with the given table weight.
#[inline]
pub fn log_weight(weight: f64) -> f64 {
	(weight / 100.0 + SMOOTHING).ln()
}

/// Computes the log-probability score of `text`.
///
/// A window slides over the characters of `text`. At each position the
/// unigram, then the bigram, then the trigram starting there is looked up,
/// and every hit adds `ln(weight / 100 + SMOOTHING)`. Windows that would run
/// past the end are not formed, and unknown n-grams add nothing.
///
/// The window length of each table comes from its order, and the weight from
/// the field that order selects (see `NGramOrder::field`).
///
/// Higher is more plausible. The result is deterministic for identical inputs.
pub fn score(text: &str, unigrams: &NGramTable, bigrams: &NGramTable, trigrams: &NGramTable) -> f64 {
	let chars: Vec<char> = text.chars().collect();
	let tables = [unigrams, bigrams, trigrams];
	let mut window = String::with_capacity(12);
	let mut score = 0.0;

	for i in 0..chars.len() {
		for table in tables {
			let end = i + table.order().token_len();
			if end > chars.len() {
				continue;
			}
			window.clear();
			window.extend(&chars[i..end]);
			if let Some(weight) = table.lookup(&window) {
				score += log_weight(weight);
			}
		}
	}
	score
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::ngram_table::NGramOrder;

	fn table(order: NGramOrder, rows: &[&[&str]]) -> NGramTable {
		NGramTable::from_rows(order, rows.iter().map(|r| r.iter()))
	}

	#[test]
	fn sums_matched_windows() {
		let unigrams = table(NGramOrder::Unigram, &[&["A", "10"], &["B", "5"]]);
		let bigrams = table(NGramOrder::Bigram, &[&["AB", "1", "20"]]);
		let trigrams = NGramTable::new(NGramOrder::Trigram);

		let expected = (10.0f64 / 100.0 + 1e-9).ln() + (5.0f64 / 100.0 + 1e-9).ln() + (20.0f64 / 100.0 + 1e-9).ln();
		let got = score("AB", &unigrams, &bigrams, &trigrams);
		assert!((got - expected).abs() < 1e-12, "got {got}, expected {expected}");
	}

	#[test]
	fn missing_ngrams_contribute_nothing() {
		let unigrams = table(NGramOrder::Unigram, &[&["A", "10"]]);
		let bigrams = table(NGramOrder::Bigram, &[&["ZZ", "1", "20"], &["AQ", "3"]]);
		let trigrams = table(NGramOrder::Trigram, &[&["AQA", "1", "n/a"]]);

		assert_eq!(score("", &unigrams, &bigrams, &trigrams), 0.0);
		assert_eq!(score("QQ", &unigrams, &bigrams, &trigrams), 0.0);
		assert_eq!(score("AQA", &unigrams, &bigrams, &trigrams), 2.0 * log_weight(10.0));
	}

	#[test]
	fn counts_trigrams_and_respects_text_end() {
		let unigrams = NGramTable::new(NGramOrder::Unigram);
		let bigrams = NGramTable::new(NGramOrder::Bigram);
		let trigrams = table(NGramOrder::Trigram, &[&["THE", "9", "3.5"]]);

		assert_eq!(score("THE", &unigrams, &bigrams, &trigrams), log_weight(3.5));
		assert_eq!(score("THETHE", &unigrams, &bigrams, &trigrams), 2.0 * log_weight(3.5));
		assert_eq!(score("TH", &unigrams, &bigrams, &trigrams), 0.0);
	}

	#[test]
	fn is_deterministic() {
		let unigrams = table(NGramOrder::Unigram, &[&["e", "12.7"], &["t", "9.1"], &[" ", "18"]]);
		let bigrams = table(NGramOrder::Bigram, &[&["te", "1", "1.2"], &["et", "1", "0.8"]]);
		let trigrams = table(NGramOrder::Trigram, &[&["tet", "1", "0.1"]]);
		let text = "tet et te tete";

		let a = score(text, &unigrams, &bigrams, &trigrams);
		let b = score(text, &unigrams, &bigrams, &trigrams);
		assert_eq!(a.to_bits(), b.to_bits());
	}

	#[test]
	fn heavier_weight_never_lowers_score() {
		let bigrams = NGramTable::new(NGramOrder::Bigram);
		let trigrams = NGramTable::new(NGramOrder::Trigram);
		let mut previous = f64::NEG_INFINITY;
		for weight in ["0", "0.5", "3", "12", "40", "100"] {
			let unigrams = table(NGramOrder::Unigram, &[&["x", weight], &["y", "2"]]);
			let s = score("xyx", &unigrams, &bigrams, &trigrams);
			assert!(s >= previous);
			previous = s;
		}
	}
}
