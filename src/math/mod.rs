//! Mathematical utilities for the tiling generators

/// Random sampling helpers threaded with an explicit generator
pub mod probability;
