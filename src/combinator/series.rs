//! Sequential application keeping only the final result.

use std::future::Future;

/// Applies one async step to each element of a sequence strictly in order,
/// resolving to the result of the last application only.
///
/// Built with [`series`]; see that function for examples.
pub struct Series<F> {
    step: F,
}

/// Creates a [`Series`] that applies `step` to each element of a sequence,
/// one at a time and in order, keeping only the last application's result.
///
/// Intermediate results are discarded; an empty input resolves to
/// `Ok(None)`.
///
/// # Examples
///
/// ```rust,ignore
/// use seqcomb::series;
///
/// async fn double(x: i32) -> Result<i32, String> { Ok(x * 2) }
///
/// #[tokio::main]
/// async fn main() {
///     let last = series(double);
///     assert_eq!(last.run([1, 2, 3]).await, Ok(Some(6)));
/// }
/// ```
pub const fn series<F>(step: F) -> Series<F> {
    Series { step }
}

impl<F> Series<F> {
    /// Applies the step to each element in order, waiting for each pending
    /// result to settle before starting the next, and resolves to the last
    /// application's value (`None` for empty input).
    ///
    /// # Errors
    ///
    /// The first failing application aborts the run; its error is returned
    /// unchanged and no later element is visited. Results of earlier
    /// successful applications are discarded either way.
    pub async fn run<A, B, E, Fut, I>(&self, items: I) -> Result<Option<B>, E>
    where
        F: Fn(A) -> Fut,
        Fut: Future<Output = Result<B, E>>,
        I: IntoIterator<Item = A>,
    {
        let mut last = None;
        for item in items {
            last = Some((self.step)(item).await?);
        }
        Ok(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn double(value: i32) -> Result<i32, &'static str> {
        Ok(value * 2)
    }

    #[rstest]
    #[tokio::test]
    async fn test_series_keeps_only_last_result() {
        let last = series(double);
        assert_eq!(last.run([1, 2, 3]).await, Ok(Some(6)));
    }

    #[rstest]
    #[tokio::test]
    async fn test_series_empty_input_resolves_to_none() {
        let last = series(double);
        assert_eq!(last.run(Vec::<i32>::new()).await, Ok(None));
    }

    #[rstest]
    #[tokio::test]
    async fn test_series_single_element() {
        let last = series(double);
        assert_eq!(last.run([21]).await, Ok(Some(42)));
    }

    #[rstest]
    #[tokio::test]
    async fn test_series_failure_aborts_chain() {
        static INVOCATIONS: AtomicUsize = AtomicUsize::new(0);

        async fn fail_on_second(value: i32) -> Result<i32, &'static str> {
            INVOCATIONS.fetch_add(1, Ordering::SeqCst);
            if value == 2 { Err("Failed") } else { Ok(value) }
        }

        let last = series(fail_on_second);
        assert_eq!(last.run([1, 2, 3]).await, Err("Failed"));
        // 3 is never visited
        assert_eq!(INVOCATIONS.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn test_series_is_reusable() {
        let last = series(double);
        assert_eq!(last.run([1, 2]).await, Ok(Some(4)));
        assert_eq!(last.run([5]).await, Ok(Some(10)));
    }
}
