//! The `pipe!` macro for variadic pipeline construction.
//!
//! `pipe!(f, g, h)` is sugar for
//! `Pipeline::new().then(f).then(g).then(h)`: an ordered sequence of steps
//! composed left to right into a single [`Pipeline`](crate::Pipeline).
//! `pipe!()` is the empty pipeline, which resolves to its input unchanged.
//!
//! # Examples
//!
//! ```rust,ignore
//! use seqcomb::pipe;
//!
//! async fn double(x: i32) -> Result<i32, String> { Ok(x * 2) }
//!
//! #[tokio::main]
//! async fn main() {
//!     let pipeline = pipe!(double, double);
//!     assert_eq!(pipeline.run(1).await, Ok(4));
//! }
//! ```

/// Composes async steps left to right into a [`Pipeline`](crate::Pipeline).
///
/// Each argument is a step `Fn(A) -> Future<Output = Result<B, E>>`; a
/// step's input type is the previous step's output type, so stages may
/// change the value's type along the chain. The resulting pipeline is run
/// with [`Pipeline::run`](crate::Pipeline::run).
///
/// # Syntax
///
/// - `pipe!()` - the empty pipeline (identity)
/// - `pipe!(f)` - a single-stage pipeline
/// - `pipe!(f, g, ...)` - stages applied left to right
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::combinator::Pipeline::new()
    };
    ($($step:expr),+ $(,)?) => {
        $crate::combinator::Pipeline::new()$(.then($step))+
    };
}
