//! Monoalphabetic substitution breaker driven by n-gram statistics.
//!
//! This crate recovers plaintext from a block-to-letter substitution (such as
//! ECB blocks standing for single characters) in two phases:
//! - Frequency-rank seeding of an initial key
//! - Greedy hill climbing on a unigram/bigram/trigram log-probability score
//!
//! Resource loading is the only fallible part; the search itself degrades
//! gracefully instead of failing.

/// Core tables, scoring and search.
pub mod model;

/// Error type for resource loading.
pub mod error;

/// I/O helpers (line files, word lists, output writing).
pub mod io;

pub use error::BreakerError;
pub use model::breaker::Breaker;
pub use model::ciphertext::Ciphertext;
pub use model::hill_climb::Candidate;
pub use model::mapping::Mapping;
pub use model::search_config::SearchConfig;
