//! Sequential pipeline composition.
//!
//! A [`Pipeline`] feeds a value through an ordered chain of async steps,
//! left to right, awaiting each stage before invoking the next. The empty
//! pipeline is the identity: it resolves to its input unchanged.
//!
//! # Examples
//!
//! ```rust,ignore
//! use seqcomb::Pipeline;
//!
//! async fn double(x: i32) -> Result<i32, String> { Ok(x * 2) }
//!
//! #[tokio::main]
//! async fn main() {
//!     let pipeline = Pipeline::new().then(double).then(double);
//!     assert_eq!(pipeline.run(1).await, Ok(4));
//! }
//! ```

use std::future::Future;
use std::sync::Arc;

use crate::step::{SharedStep, shared_step};

/// An ordered chain of async steps from `A` to `B`, failing with `E`.
///
/// Stages run strictly one at a time: each is invoked only after the prior
/// stage's pending result has resolved successfully. The first stage to fail
/// aborts the run and its error is returned unchanged; later stages are
/// never invoked.
///
/// A pipeline is a reusable value: `run` borrows it, and every run is an
/// independent execution with no state carried between runs.
pub struct Pipeline<A, B, E> {
    run_pipeline: SharedStep<A, B, E>,
}

// =============================================================================
// Constructors
// =============================================================================

impl<A, E> Pipeline<A, A, E>
where
    A: Send + 'static,
    E: Send + 'static,
{
    /// Creates the empty pipeline, which resolves to its input unchanged.
    #[must_use]
    pub fn new() -> Self {
        Self {
            run_pipeline: Arc::new(|input| Box::pin(async move { Ok(input) })),
        }
    }

    /// Builds a pipeline from an ordered sequence of already-erased steps,
    /// all of the same type `A -> A`.
    ///
    /// For stages of differing types, chain [`then`](Pipeline::then) calls
    /// or use the [`pipe!`](crate::pipe) macro.
    #[must_use]
    pub fn stages<I>(steps: I) -> Self
    where
        I: IntoIterator<Item = SharedStep<A, A, E>>,
    {
        steps.into_iter().fold(Self::new(), Pipeline::then_step)
    }
}

impl<A, E> Default for Pipeline<A, A, E>
where
    A: Send + 'static,
    E: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Composition
// =============================================================================

impl<A, B, E> Pipeline<A, B, E>
where
    A: 'static,
    B: Send + 'static,
    E: Send + 'static,
{
    /// Appends a stage, producing a pipeline whose output type is the new
    /// stage's output type.
    ///
    /// The stage is invoked with the prior stage's resolved value; it is not
    /// invoked at all if an earlier stage fails.
    #[must_use]
    pub fn then<C, F, Fut>(self, step: F) -> Pipeline<A, C, E>
    where
        F: Fn(B) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<C, E>> + Send + 'static,
        C: 'static,
    {
        self.then_step(shared_step(step))
    }

    /// Appends an already-erased stage.
    #[must_use]
    pub fn then_step<C>(self, step: SharedStep<B, C, E>) -> Pipeline<A, C, E>
    where
        C: 'static,
    {
        let previous = self.run_pipeline;
        Pipeline {
            run_pipeline: Arc::new(move |input| {
                let prior = previous(input);
                let step = Arc::clone(&step);
                Box::pin(async move { step(prior.await?).await })
            }),
        }
    }
}

// =============================================================================
// Execution
// =============================================================================

impl<A, B, E> Pipeline<A, B, E> {
    /// Runs the pipeline on `input`, resolving to the final stage's value.
    ///
    /// # Errors
    ///
    /// Returns the first failing stage's error unchanged; no later stage is
    /// invoked after a failure.
    pub async fn run(&self, input: A) -> Result<B, E> {
        (self.run_pipeline)(input).await
    }
}

impl<A, B, E> Clone for Pipeline<A, B, E> {
    fn clone(&self) -> Self {
        Self {
            run_pipeline: Arc::clone(&self.run_pipeline),
        }
    }
}
