//! Integration tests for the deferred combinators.

mod guarded_future;
mod maybe_future;
