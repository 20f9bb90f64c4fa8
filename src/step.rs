//! Step-function aliases and lifting.
//!
//! A *step* is a caller-supplied asynchronous function invoked by a
//! combinator: unary (`A -> Result<B, E>` behind a future) everywhere except
//! [`reduce`](crate::reduce), whose step is binary over the accumulator.
//! The combinators treat steps as opaque: they never inspect, wrap, or
//! classify the failure type `E`.
//!
//! Most of the crate accepts plain generic closures. Type-erased steps only
//! appear inside [`Pipeline`](crate::Pipeline), where stages of differing
//! concrete closure types must live behind one callable type.

use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;

/// The pending result of a single step: a boxed future that either resolves
/// to a value or fails with the step's own error.
pub type StepFuture<'a, T, E> = BoxFuture<'a, Result<T, E>>;

/// A type-erased, shareable step from `A` to `B` that fails with `E`.
///
/// Steps are held behind `Arc` rather than `Box` so that a composed
/// combinator can be run any number of times: every run re-invokes the same
/// step by reference, and no run observes state left behind by another.
pub type SharedStep<A, B, E> = Arc<dyn Fn(A) -> StepFuture<'static, B, E> + Send + Sync>;

/// Lifts a plain async closure into a [`SharedStep`].
///
/// # Examples
///
/// ```rust,ignore
/// use seqcomb::step::shared_step;
///
/// let double = shared_step(|x: i32| async move { Ok::<_, String>(x * 2) });
/// assert_eq!(double(21).await, Ok(42));
/// ```
pub fn shared_step<A, B, E, F, Fut>(step: F) -> SharedStep<A, B, E>
where
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<B, E>> + Send + 'static,
{
    Arc::new(move |input| Box::pin(step(input)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn test_shared_step_invokes_closure() {
        let double = shared_step(|x: i32| async move { Ok::<_, String>(x * 2) });
        assert_eq!(double(21).await, Ok(42));
    }

    #[rstest]
    #[tokio::test]
    async fn test_shared_step_is_reusable() {
        let add_one = shared_step(|x: i32| async move { Ok::<_, String>(x + 1) });
        assert_eq!(add_one(1).await, Ok(2));
        assert_eq!(add_one(41).await, Ok(42));
    }

    #[rstest]
    #[tokio::test]
    async fn test_shared_step_propagates_failure() {
        let failing = shared_step(|_: i32| async move { Err::<i32, _>("Failed") });
        assert_eq!(failing(1).await, Err("Failed"));
    }
}
