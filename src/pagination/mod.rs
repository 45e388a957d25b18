//! Paginating request executor
//!
//! Every physical request passes through [`Executor::call_once`] exactly
//! once: wall-clock timing, then error classification from the status code
//! and payload. [`Executor::fetch_all`] layers the cursor loop on top,
//! following the `Link: rel="next"` header until the collection is complete
//! or the caller's record cap is met.

mod executor;
mod link;

pub use executor::Executor;
pub use link::next_link;
