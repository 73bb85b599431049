#[cfg(feature = "profile")]
pub use no_nonsense_flamegraphs::span;

#[cfg(not(feature = "profile"))]
#[macro_export]
macro_rules! __span {
    ($name:expr) => {};
}

// `macro_export` puts the macro at the crate root; re-export it from here so
// callers can write `crate::infra::span` either way.
#[cfg(not(feature = "profile"))]
pub use crate::__span as span;
