use rand::SeedableRng;
use rand::rngs::StdRng;

/// Number of swap attempts the search makes by default.
pub const DEFAULT_ITERATIONS: usize = 3000;

/// Parameters of a hill-climb run.
///
/// # Responsibilities
/// - Hold the iteration budget (0 is valid and leaves the seed untouched)
/// - Hold an optional RNG seed, so that runs can be replayed exactly
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
	/// Number of candidate swaps to evaluate.
	pub iterations: usize,

	/// Seed of the symbol-pair selector; `None` draws one from the OS.
	pub seed: Option<u64>,
}

impl Default for SearchConfig {
	fn default() -> Self {
		Self { iterations: DEFAULT_ITERATIONS, seed: None }
	}
}

impl SearchConfig {
	pub fn with_iterations(mut self, iterations: usize) -> Self {
		self.iterations = iterations;
		self
	}

	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}

	/// Builds the random generator the search draws symbol pairs from.
	pub fn rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		}
	}
}
