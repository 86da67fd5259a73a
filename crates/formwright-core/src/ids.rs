//! Identifier sources for fields without a natural name
//!
//! Labels are fields in their own right but nobody names them, so they
//! draw a name from an [`IdGenerator`]. Production code uses
//! [`RandomIdGenerator`]; tests inject [`SequentialIdGenerator`] to keep
//! output reproducible.

use rand::RngCore;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Number of random bytes behind a generated identifier
pub const RANDOM_ID_BYTES: usize = 10;

/// A thread-safe source of unique identifiers
pub trait IdGenerator: Send + Sync {
	/// Produce the next identifier
	fn next_id(&self) -> String;
}

/// Hex-encoded random identifiers backed by the thread-local RNG
///
/// # Examples
///
/// ```
/// use formwright_core::{IdGenerator, RandomIdGenerator};
///
/// let ids = RandomIdGenerator;
/// let id = ids.next_id();
/// assert_eq!(id.len(), 20);
/// assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
	fn next_id(&self) -> String {
		let mut bytes = [0u8; RANDOM_ID_BYTES];
		rand::thread_rng().fill_bytes(&mut bytes);
		hex::encode(bytes)
	}
}

/// Deterministic identifiers of the form `prefix-1`, `prefix-2`, ...
///
/// # Examples
///
/// ```
/// use formwright_core::{IdGenerator, SequentialIdGenerator};
///
/// let ids = SequentialIdGenerator::new("label");
/// assert_eq!(ids.next_id(), "label-1");
/// assert_eq!(ids.next_id(), "label-2");
/// ```
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
	prefix: String,
	counter: AtomicUsize,
}

impl SequentialIdGenerator {
	pub fn new(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			counter: AtomicUsize::new(0),
		}
	}
}

impl IdGenerator for SequentialIdGenerator {
	fn next_id(&self) -> String {
		let next = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
		format!("{}-{}", self.prefix, next)
	}
}
