use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced while loading resources.
///
/// The search itself never fails: missing n-grams score zero and degenerate
/// mappings turn the search into a no-op. Only reading inputs can go wrong.
#[derive(Debug, Error)]
pub enum BreakerError {
	#[error("cannot read {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("{} contains no usable entries", .path.display())]
	EmptySource { path: PathBuf },

	#[error("malformed csv in {}: {source}", .path.display())]
	Csv {
		path: PathBuf,
		#[source]
		source: csv::Error,
	},

	#[error("n-gram cache error: {0}")]
	Cache(#[from] postcard::Error),
}

impl BreakerError {
	pub(crate) fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}
}
