//! Sequential left fold through an async step.

use std::future::Future;

/// Folds a sequence left to right through a binary async step, seeded with
/// an accumulator supplied at construction time.
///
/// Built with [`reduce`]; see that function for examples.
pub struct Reduce<F, Acc> {
    step: F,
    initial: Acc,
}

/// Creates a [`Reduce`] that folds a sequence through `step`, starting from
/// `initial`.
///
/// The step receives the current accumulator and the next element and
/// resolves to the next accumulator. The seed is taken at construction time
/// and cloned per run, so one `Reduce` value supports any number of
/// independent folds. An empty input resolves to the seed unchanged.
///
/// # Examples
///
/// ```rust,ignore
/// use seqcomb::reduce;
///
/// async fn double(x: i32) -> Result<i32, String> { Ok(x * 2) }
///
/// #[tokio::main]
/// async fn main() {
///     let doubled_sum = reduce(|acc, x| async move { Ok(acc + double(x).await?) }, 0);
///     assert_eq!(doubled_sum.run([1, 2, 3]).await, Ok(12));
/// }
/// ```
pub const fn reduce<F, Acc>(step: F, initial: Acc) -> Reduce<F, Acc> {
    Reduce { step, initial }
}

impl<F, Acc> Reduce<F, Acc>
where
    Acc: Clone,
{
    /// Folds the elements in order: the accumulator from each step is passed
    /// to the next, and the final accumulator is the result.
    ///
    /// # Errors
    ///
    /// The first failing step aborts the fold; its error is returned
    /// unchanged and the in-flight accumulator is dropped, never exposed.
    pub async fn run<A, E, Fut, I>(&self, items: I) -> Result<Acc, E>
    where
        F: Fn(Acc, A) -> Fut,
        Fut: Future<Output = Result<Acc, E>>,
        I: IntoIterator<Item = A>,
    {
        let mut accumulator = self.initial.clone();
        for item in items {
            accumulator = (self.step)(accumulator, item).await?;
        }
        Ok(accumulator)
    }
}
