//! # Formwright Core
//!
//! Utilities shared by the formwright crates:
//!
//! - [`security`]: attribute and body escaping, plus the rich-text filter
//!   applied to caller-supplied captions
//! - [`text`]: class-name sanitizing, id derivation and slugs
//! - [`ids`]: the identifier source used to name fields that have no
//!   natural name (labels)

pub mod ids;
pub mod security;
pub mod text;

pub use ids::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
