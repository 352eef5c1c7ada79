//! Loading and storage of time series particle data.
//!
//! A simulation run is a sequence of timesteps, each holding positions and
//! densities for the same fixed set of particles. [TimeSeriesStore] loads all
//! timesteps up front and is immutable afterward; rendering code reads
//! per-timestep views through [TimeSeriesStore::slice].

#![warn(rust_2018_idioms, missing_debug_implementations, missing_docs)]

pub use error::*;
pub use store::*;

mod error;
mod reader;
mod store;
