use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BreakerError;
use crate::io::build_output_path;
use super::scorer;

/// First-column values that mark a header row rather than a data token.
///
/// Compared case-insensitively against the trimmed first cell of each row.
pub const HEADER_TOKENS: [&str; 13] = [
	"token", "tokens", "ngram", "ngrams", "gram", "grams",
	"char", "chars", "key", "keys", "count", "percentage", "percent",
];

/// A numeric-looking field of an n-gram row.
///
/// Parsing is best effort: integers first, then floats, and anything else is
/// kept verbatim so that a stray value never aborts a load.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Weight {
	Int(i64),
	Float(f64),
	Text(String),
}

impl Weight {
	/// Coerces a raw cell into the narrowest weight that represents it.
	pub fn parse(raw: &str) -> Self {
		let raw = raw.trim();
		if let Ok(i) = raw.parse::<i64>() {
			Weight::Int(i)
		} else if let Ok(f) = raw.parse::<f64>() {
			Weight::Float(f)
		} else {
			Weight::Text(raw.to_owned())
		}
	}

	/// Numeric view of the weight, `None` for literal text.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Weight::Int(i) => Some(*i as f64),
			Weight::Float(f) => Some(*f),
			Weight::Text(_) => None,
		}
	}
}

/// One row of an n-gram source: a primary value and an optional percentage.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NGramEntry {
	pub value: Weight,
	pub percentage: Option<Weight>,
}

impl NGramEntry {
	pub fn new(value: Weight, percentage: Option<Weight>) -> Self {
		Self { value, percentage }
	}

	/// Returns the requested field as a number, if present and numeric.
	pub fn field(&self, field: WeightField) -> Option<f64> {
		match field {
			WeightField::Value => self.value.as_f64(),
			WeightField::Percentage => self.percentage.as_ref()?.as_f64(),
		}
	}
}

/// Which of the two stored fields a table answers lookups with.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeightField {
	Value,
	Percentage,
}

/// Order of an n-gram table.
///
/// The order decides the scored field: unigram tables are queried by their
/// first value, bigram and trigram tables by their percentage column.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NGramOrder {
	Unigram,
	Bigram,
	Trigram,
}

impl NGramOrder {
	/// Token length (in characters) of this order.
	pub fn token_len(self) -> usize {
		match self {
			NGramOrder::Unigram => 1,
			NGramOrder::Bigram => 2,
			NGramOrder::Trigram => 3,
		}
	}

	pub fn field(self) -> WeightField {
		match self {
			NGramOrder::Unigram => WeightField::Value,
			NGramOrder::Bigram | NGramOrder::Trigram => WeightField::Percentage,
		}
	}

	/// Keys that a table of this order never holds once built.
	///
	/// Unigram sources ship a `letter,percentage` header that is not in
	/// `HEADER_TOKENS`, so the unigram table drops `letter` explicitly.
	pub fn reserved_keys(self) -> &'static [&'static str] {
		match self {
			NGramOrder::Unigram => &["letter"],
			NGramOrder::Bigram | NGramOrder::Trigram => &[],
		}
	}
}

/// Read-only frequency table for one n-gram order.
///
/// # Invariants
/// - No key is blank or matches `HEADER_TOKENS` (case-insensitive)
/// - No key matches `order.reserved_keys()`
/// - `tokens` lists every key of `entries` exactly once, in first-seen order
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NGramTable {
	order: NGramOrder,
	tokens: Vec<String>,
	entries: HashMap<String, NGramEntry>,
}

impl NGramTable {
	/// Creates an empty table of the given order.
	pub fn new(order: NGramOrder) -> Self {
		Self { order, tokens: Vec::new(), entries: HashMap::new() }
	}

	/// Builds a table from raw rows of `token[,value[,percentage]]`.
	///
	/// # Behavior
	/// - Skips empty rows, blank keys and header-like keys.
	/// - `token` alone stores `(1, None)`.
	/// - `token,value` stores `(value, None)`.
	/// - `token,value,percentage` stores `(value, percentage)`; an empty value
	///   cell in that shape defaults to 1.
	/// - A repeated key overwrites its entry but keeps its first position.
	pub fn from_rows<I, R, S>(order: NGramOrder, rows: I) -> Self
	where
		I: IntoIterator<Item = R>,
		R: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut table = Self::new(order);
		for row in rows {
			let cells: Vec<String> = row.into_iter().map(|c| c.as_ref().trim().to_owned()).collect();
			let Some(key) = cells.first() else { continue };
			if key.is_empty() || is_header_token(key) {
				continue;
			}

			let value = cells.get(1).filter(|c| !c.is_empty());
			let percentage = cells.get(2).filter(|c| !c.is_empty());
			let entry = match (value, percentage) {
				(value, Some(pct)) => NGramEntry::new(
					value.map_or(Weight::Int(1), |v| Weight::parse(v)),
					Some(Weight::parse(pct)),
				),
				(Some(value), None) => NGramEntry::new(Weight::parse(value), None),
				(None, None) => NGramEntry::new(Weight::Int(1), None),
			};
			table.insert(key.clone(), entry);
		}
		table.drop_reserved_keys();
		table
	}

	/// Parses a headerless, ragged CSV file into a table.
	///
	/// # Errors
	/// - `BreakerError::Csv` if the file cannot be opened or parsed
	/// - `BreakerError::EmptySource` if no data row survives filtering
	pub fn from_csv<P: AsRef<Path>>(order: NGramOrder, path: P) -> Result<Self, BreakerError> {
		let path = path.as_ref();
		let csv_error = |source| BreakerError::Csv { path: path.to_path_buf(), source };

		let mut reader = csv::ReaderBuilder::new()
			.has_headers(false)
			.flexible(true)
			.from_path(path)
			.map_err(csv_error)?;

		let mut rows = Vec::new();
		for record in reader.records() {
			rows.push(record.map_err(csv_error)?);
		}

		let table = Self::from_rows(order, rows.iter());
		if table.is_empty() {
			return Err(BreakerError::EmptySource { path: path.to_path_buf() });
		}
		log::info!("loaded {} {:?} entries from {}", table.len(), order, path.display());
		Ok(table)
	}

	/// Loads a table, optionally through a binary cache beside the CSV.
	///
	/// - With `use_cache`, a `<stem>.bin` next to `path` is read if it exists
	///   and holds a table of the same order.
	/// - Otherwise the CSV is parsed, and with `use_cache` the result is
	///   serialized with `postcard` for the next run.
	/// - An unreadable cache or a failed cache write is logged and the CSV
	///   table is used; only the CSV itself can fail the load.
	pub fn load<P: AsRef<Path>>(order: NGramOrder, path: P, use_cache: bool) -> Result<Self, BreakerError> {
		let path = path.as_ref();
		if !use_cache {
			return Self::from_csv(order, path);
		}

		let binary_path = build_output_path(path, "bin").map_err(|e| BreakerError::io(path, e))?;
		if binary_path.exists() {
			match Self::read_cache(&binary_path) {
				Ok(cached) if cached.order == order => {
					log::info!("loaded {} {:?} entries from cache {}", cached.len(), order, binary_path.display());
					return Ok(cached);
				}
				Ok(cached) => {
					log::warn!("ignoring cache {}: holds {:?}, expected {:?}", binary_path.display(), cached.order, order);
				}
				Err(e) => log::warn!("ignoring cache {}: {e}", binary_path.display()),
			}
		}

		let table = Self::from_csv(order, path)?;
		let bytes = postcard::to_stdvec(&table)?;
		if let Err(e) = std::fs::write(&binary_path, bytes) {
			log::warn!("cannot write cache {}: {e}", binary_path.display());
		}
		Ok(table)
	}

	fn read_cache(binary_path: &Path) -> Result<Self, BreakerError> {
		let bytes = std::fs::read(binary_path).map_err(|e| BreakerError::io(binary_path, e))?;
		Ok(postcard::from_bytes(&bytes)?)
	}

	fn insert(&mut self, key: String, entry: NGramEntry) {
		if !self.entries.contains_key(&key) {
			self.tokens.push(key.clone());
		}
		self.entries.insert(key, entry);
	}

	fn drop_reserved_keys(&mut self) {
		let reserved = self.order.reserved_keys();
		self.tokens.retain(|t| !reserved.contains(&t.as_str()));
		self.entries.retain(|t, _| !reserved.contains(&t.as_str()));
	}

	pub fn order(&self) -> NGramOrder {
		self.order
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	pub fn get(&self, token: &str) -> Option<&NGramEntry> {
		self.entries.get(token)
	}

	/// Weight used for scoring `token`, selected by the table's order.
	///
	/// Returns `None` when the token is unknown or its field is absent or
	/// not numeric.
	pub fn lookup(&self, token: &str) -> Option<f64> {
		self.entries.get(token)?.field(self.order.field())
	}

	/// Entries in first-seen order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &NGramEntry)> {
		self.tokens.iter().map(move |t| (t.as_str(), &self.entries[t]))
	}
}

fn is_header_token(key: &str) -> bool {
	HEADER_TOKENS.iter().any(|h| h.eq_ignore_ascii_case(key))
}

/// The three tables the scorer consumes.
#[derive(Clone, Debug)]
pub struct NGramTables {
	pub unigrams: NGramTable,
	pub bigrams: NGramTable,
	pub trigrams: NGramTable,
}

impl NGramTables {
	pub fn new(unigrams: NGramTable, bigrams: NGramTable, trigrams: NGramTable) -> Self {
		Self { unigrams, bigrams, trigrams }
	}

	/// Loads the unigram, bigram and trigram sources.
	pub fn load<P: AsRef<Path>>(unigram: P, bigram: P, trigram: P, use_cache: bool) -> Result<Self, BreakerError> {
		Ok(Self {
			unigrams: NGramTable::load(NGramOrder::Unigram, unigram, use_cache)?,
			bigrams: NGramTable::load(NGramOrder::Bigram, bigram, use_cache)?,
			trigrams: NGramTable::load(NGramOrder::Trigram, trigram, use_cache)?,
		})
	}

	/// Log-probability score of `text` against these tables.
	pub fn score(&self, text: &str) -> f64 {
		scorer::score(text, &self.unigrams, &self.bigrams, &self.trigrams)
	}
}
