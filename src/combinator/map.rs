//! Sequential mapping collecting every result.

use std::future::Future;

/// Applies one async step to each element of a sequence strictly in order,
/// collecting every result into a `Vec` in input order.
///
/// Built with [`map`]; see that function for examples.
pub struct SeqMap<F> {
    step: F,
}

/// Creates a [`SeqMap`] that applies `step` to each element of a sequence,
/// one at a time and in order, collecting the results.
///
/// Unlike a concurrent map, no two applications ever overlap: each element's
/// pending result settles before the next element is visited. An empty input
/// resolves to an empty `Vec`.
///
/// # Examples
///
/// ```rust,ignore
/// use seqcomb::map;
///
/// async fn double(x: i32) -> Result<i32, String> { Ok(x * 2) }
///
/// #[tokio::main]
/// async fn main() {
///     let doubled = map(double);
///     assert_eq!(doubled.run([1, 2, 3]).await, Ok(vec![2, 4, 6]));
/// }
/// ```
pub const fn map<F>(step: F) -> SeqMap<F> {
    SeqMap { step }
}

impl<F> SeqMap<F> {
    /// Applies the step to each element in order and resolves to the
    /// collected results, index-aligned with the input.
    ///
    /// # Errors
    ///
    /// All-or-nothing: the first failing application aborts the run, the
    /// partially built output is dropped, and the error is returned
    /// unchanged. No later element is visited.
    pub async fn run<A, B, E, Fut, I>(&self, items: I) -> Result<Vec<B>, E>
    where
        F: Fn(A) -> Fut,
        Fut: Future<Output = Result<B, E>>,
        I: IntoIterator<Item = A>,
    {
        let items = items.into_iter();
        let mut collected = Vec::with_capacity(items.size_hint().0);
        for item in items {
            collected.push((self.step)(item).await?);
        }
        Ok(collected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn double(value: i32) -> Result<i32, &'static str> {
        Ok(value * 2)
    }

    #[rstest]
    #[tokio::test]
    async fn test_map_collects_results_in_order() {
        let doubled = map(double);
        assert_eq!(doubled.run([1, 2, 3]).await, Ok(vec![2, 4, 6]));
    }

    #[rstest]
    #[tokio::test]
    async fn test_map_empty_input_resolves_to_empty_vec() {
        let doubled = map(double);
        assert_eq!(doubled.run(Vec::<i32>::new()).await, Ok(vec![]));
    }

    #[rstest]
    #[tokio::test]
    async fn test_map_visits_elements_in_input_order() {
        let visited = Mutex::new(Vec::new());
        let recorder = map(|value: i32| {
            visited.lock().unwrap().push(value);
            async move { Ok::<_, &str>(value) }
        });

        let result = recorder.run([3, 1, 2]).await;
        assert_eq!(result, Ok(vec![3, 1, 2]));
        assert_eq!(*visited.lock().unwrap(), vec![3, 1, 2]);
    }

    #[rstest]
    #[tokio::test]
    async fn test_map_failure_returns_no_partial_output() {
        static INVOCATIONS: AtomicUsize = AtomicUsize::new(0);

        async fn always_failing(_value: i32) -> Result<i32, &'static str> {
            INVOCATIONS.fetch_add(1, Ordering::SeqCst);
            Err("Failed")
        }

        let failing = map(always_failing);
        assert_eq!(failing.run([1, 2, 3]).await, Err("Failed"));
        // fail-fast: only the first element is ever visited
        assert_eq!(INVOCATIONS.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn test_map_is_reusable_without_cross_run_state() {
        let doubled = map(double);
        assert_eq!(doubled.run([1, 2]).await, Ok(vec![2, 4]));
        assert_eq!(doubled.run([1, 2]).await, Ok(vec![2, 4]));
    }
}
