//! # seqcomb
//!
//! Sequential asynchronous combinators: `pipe`, `series`, `map`, and
//! `reduce` over fallible async step functions.
//!
//! ## Overview
//!
//! This library orchestrates *ordering* and *error propagation* across a
//! chain of asynchronous steps. It owns no state, performs no I/O, and
//! defines no error type of its own: steps fail with whatever error the
//! caller chose, and that error passes through untouched.
//!
//! - **[`Pipeline`] / [`pipe!`]**: compose unary async steps left to right
//!   into one runnable chain; the empty pipeline is the identity.
//! - **[`series`]**: apply one step to each element of a sequence in order,
//!   keeping only the last result.
//! - **[`map`]**: same sequencing, collecting every result into a `Vec` in
//!   input order.
//! - **[`reduce`]**: strict left fold of a sequence through a binary async
//!   step, seeded at construction time.
//!
//! All four are fail-fast: the first step to fail aborts the run and no
//! partial output escapes. All four run one step at a time: a deliberate
//! choice that guarantees ordering and bounds outstanding work at one step
//! per run, at the cost of latency versus a concurrent variant.
//!
//! ## Example
//!
//! ```rust,ignore
//! use seqcomb::{map, pipe, reduce, series};
//!
//! async fn double(x: i32) -> Result<i32, String> { Ok(x * 2) }
//!
//! #[tokio::main]
//! async fn main() {
//!     assert_eq!(pipe!(double, double).run(1).await, Ok(4));
//!     assert_eq!(series(double).run([1, 2, 3]).await, Ok(Some(6)));
//!     assert_eq!(map(double).run([1, 2, 3]).await, Ok(vec![2, 4, 6]));
//!
//!     let doubled_sum = reduce(|acc, x| async move { Ok(acc + double(x).await?) }, 0);
//!     assert_eq!(doubled_sum.run([1, 2, 3]).await, Ok(12));
//! }
//! ```
//!
//! Cancellation and timeouts are not provided here: a step that should honor
//! a deadline or a cancellation signal must implement that itself.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use seqcomb::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combinator::*;
    pub use crate::step::*;
}

pub mod combinator;
pub mod step;

pub use combinator::{Pipeline, Reduce, SeqMap, Series, map, reduce, series};
pub use step::{SharedStep, StepFuture, shared_step};
