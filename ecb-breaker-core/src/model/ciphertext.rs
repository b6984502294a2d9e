use std::collections::HashMap;
use std::path::Path;

use crate::error::BreakerError;
use crate::io::read_lines;

/// An ordered, immutable sequence of ciphertext blocks.
///
/// Each block is an opaque token (for instance the hex of one ECB block) and
/// is only ever compared by exact string match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext {
	tokens: Vec<String>,
}

impl Ciphertext {
	pub fn new<I, S>(tokens: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { tokens: tokens.into_iter().map(Into::into).collect() }
	}

	/// Loads one token per line, dropping blank lines.
	///
	/// # Errors
	/// Fails if the file is unreadable or holds no token.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BreakerError> {
		let tokens = read_lines(&path)?;
		log::info!("loaded {} ciphertext blocks from {}", tokens.len(), path.as_ref().display());
		Ok(Self { tokens })
	}

	pub fn tokens(&self) -> &[String] {
		&self.tokens
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Distinct symbols with their occurrence counts, most frequent first.
	///
	/// Ties keep the order in which the symbols first appear.
	pub fn symbol_frequencies(&self) -> Vec<(&str, usize)> {
		let mut counts: HashMap<&str, usize> = HashMap::new();
		let mut ranked: Vec<&str> = Vec::new();
		for token in &self.tokens {
			let count = counts.entry(token.as_str()).or_insert(0);
			if *count == 0 {
				ranked.push(token.as_str());
			}
			*count += 1;
		}

		let mut ranked: Vec<(&str, usize)> = ranked.into_iter().map(|s| (s, counts[s])).collect();
		ranked.sort_by(|a, b| b.1.cmp(&a.1));
		ranked
	}
}
