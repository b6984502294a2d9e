use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use super::ciphertext::Ciphertext;

/// Candidate decryption key: ciphertext symbol → plaintext letter.
///
/// Symbols keep the position they were first inserted at, so an index into
/// the mapping stays valid across swaps.
///
/// # Invariants
/// - `symbols` and `letters` have the same length
/// - `index[symbols[i]] == i` for every `i`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mapping {
	symbols: Vec<String>,
	letters: Vec<char>,
	index: HashMap<String, usize>,
}

impl Mapping {
	pub fn new() -> Self {
		Self::default()
	}

	/// Assigns `letter` to `symbol`, replacing any previous assignment.
	pub fn insert<S: Into<String>>(&mut self, symbol: S, letter: char) {
		let symbol = symbol.into();
		match self.index.get(&symbol) {
			Some(&i) => self.letters[i] = letter,
			None => {
				self.index.insert(symbol.clone(), self.symbols.len());
				self.symbols.push(symbol);
				self.letters.push(letter);
			}
		}
	}

	pub fn get(&self, symbol: &str) -> Option<char> {
		self.index.get(symbol).map(|&i| self.letters[i])
	}

	pub(crate) fn position(&self, symbol: &str) -> Option<usize> {
		self.index.get(symbol).copied()
	}

	pub fn len(&self) -> usize {
		self.symbols.len()
	}

	pub fn is_empty(&self) -> bool {
		self.symbols.is_empty()
	}

	pub fn symbols(&self) -> &[String] {
		&self.symbols
	}

	/// Letters in symbol order.
	pub fn letters(&self) -> &[char] {
		&self.letters
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, char)> {
		self.symbols.iter().map(String::as_str).zip(self.letters.iter().copied())
	}

	/// Exchanges the letters of the symbols at positions `a` and `b`.
	///
	/// The multiset of assigned letters is unchanged.
	///
	/// # Panics
	/// Panics if either position is out of bounds.
	pub fn swap(&mut self, a: usize, b: usize) {
		self.letters.swap(a, b);
	}

	/// Copy of this mapping with the letters at `a` and `b` exchanged.
	pub fn swapped(&self, a: usize, b: usize) -> Self {
		let mut candidate = self.clone();
		candidate.swap(a, b);
		candidate
	}

	/// Decodes a whole ciphertext into one string.
	///
	/// Symbols without an assigned letter are copied through literally.
	pub fn substitute(&self, ciphertext: &Ciphertext) -> String {
		let mut text = String::with_capacity(ciphertext.len());
		for token in ciphertext.tokens() {
			match self.get(token) {
				Some(letter) => text.push(letter),
				None => text.push_str(token),
			}
		}
		text
	}
}

impl<S: Into<String>> FromIterator<(S, char)> for Mapping {
	fn from_iter<I: IntoIterator<Item = (S, char)>>(iter: I) -> Self {
		let mut mapping = Self::new();
		for (symbol, letter) in iter {
			mapping.insert(symbol, letter);
		}
		mapping
	}
}

impl Display for Mapping {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		for (symbol, letter) in self.iter() {
			writeln!(f, "{symbol} -> {letter:?}")?;
		}
		Ok(())
	}
}
