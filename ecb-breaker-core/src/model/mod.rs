//! Top-level module for the substitution breaker.
//!
//! This module provides, leaf-first:
//! - N-gram frequency tables and their CSV/binary loading (`NGramTable`)
//! - The log-probability scorer (`scorer::score`)
//! - Ciphertext blocks and the candidate key (`Ciphertext`, `Mapping`)
//! - Frequency-rank seeding (`guesser`)
//! - Greedy swap search (`HillClimb`) and its configuration (`SearchConfig`)
//! - A high-level solver tying them together (`Breaker`)

/// High-level solver: seed a mapping, then hill climb from it.
pub mod breaker;

/// Ordered ciphertext blocks and symbol frequency ranking.
pub mod ciphertext;

/// Frequency-rank seed mapping.
pub mod guesser;

/// Greedy local search over letter swaps.
pub mod hill_climb;

/// Ciphertext symbol → plaintext letter key.
pub mod mapping;

/// N-gram tables: weights, header filtering, CSV parsing and caching.
pub mod ngram_table;

/// Log-probability scoring of candidate plaintext.
pub mod scorer;

/// Iteration budget and RNG seed of a search.
pub mod search_config;
