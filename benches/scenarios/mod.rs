//! Real-world scenario benchmarks.
//!
//! These measure full preset synthesis (the cost of a cache rebuild) and
//! steady-state engine rendering with overlapping carried hits.

mod engine;
mod voices;

pub use engine::bench_engine;
pub use voices::bench_voices;
