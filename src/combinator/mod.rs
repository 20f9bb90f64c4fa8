//! Sequential asynchronous combinators.
//!
//! Four independent, stateless combinators for composing fallible async
//! step functions over values and sequences:
//!
//! - [`Pipeline`] / [`pipe!`](crate::pipe): left-to-right composition of
//!   unary steps into a single runnable chain
//! - [`series`]: apply a step to each element in order, keeping only the
//!   final result
//! - [`map`]: apply a step to each element in order, collecting every
//!   result
//! - [`reduce`]: strict left fold of a sequence through a binary step
//!
//! # Sequencing discipline
//!
//! Every combinator runs exactly one step at a time: a step is invoked only
//! after the previous step's pending result has settled. Within one run of
//! `series`, `map`, or `reduce`, no two element-applications ever overlap,
//! and invocation order equals input order. This trades latency for a
//! guaranteed ordering and a bound of one outstanding step per run.
//!
//! # Failure policy
//!
//! Fail-fast, pass-through: the first step to return `Err` aborts the run,
//! no later step is invoked, and the error reaches the caller unchanged:
//! no wrapping, no classification, no partial output. `map` never returns a
//! partially filled `Vec`; `reduce` never exposes an in-flight accumulator.
//!
//! # Reuse
//!
//! Each combinator value is inert until run and reusable afterwards: runs
//! borrow the value, and two runs of the same value share no mutable state
//! (given steps that are themselves free of shared mutable state).

mod map;
mod pipe;
mod pipe_macro;
mod reduce;
mod series;

pub use map::{SeqMap, map};
pub use pipe::Pipeline;
pub use reduce::{Reduce, reduce};
pub use series::{Series, series};

// The pipe! macro is at the crate root via #[macro_export].
pub use crate::pipe;
