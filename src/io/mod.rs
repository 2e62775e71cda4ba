//! Command line, output, diagnostics and configuration

/// Command-line parsing and the generation run
pub mod cli;
/// Default parameters and fixed tables
pub mod configuration;
/// Error type shared by the crate
pub mod error;
/// Logger initialization
pub mod logging;
/// Progress bar for subdivision rounds
pub mod progress;
/// SVG document sink
pub mod svg;
