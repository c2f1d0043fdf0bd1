//! Pure operations over in-memory numeric sequences.
//!
//! The crate enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (filtering, summing, statistics,
//!   grading). No I/O, no logging, fully testable in isolation.
//! - **[`boundary`]**: The single place loosely-typed, already-deserialized
//!   data is validated and narrowed into strongly-typed sequences.
//!
//! Every operation borrows its input and returns a newly constructed value;
//! caller-owned data is never mutated.

pub mod boundary;
pub mod core;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
