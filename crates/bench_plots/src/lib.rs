//! Turns criterion results of `<group>_plot` benchmark groups into charts: the absolute time of
//! every algorithm over the input complexity, and the speedup of one algorithm over another.
//!
//! Expected layout, as produced by benchmarks identified by `BenchmarkId::new(algorithm,
//! "<complexity>::<scale>")` in a group named `<group>_plot`:
//!
//! ```text
//! target/criterion/
//!   └── <group>_plot/
//!       └── <algorithm>/
//!           └── <complexity>__<scale>/
//!               └── new/estimates.json
//! ```

pub mod charts;
pub mod config;
pub mod errors;
pub mod export;
pub mod locator;
pub mod process;
pub mod render;
pub mod runner;
pub mod sample_key;
pub mod series;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod tracing_utils;
pub mod types;
