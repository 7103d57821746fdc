//! Command handlers for the Triad CLI
//!
//! One module per subcommand; `main.rs` dispatches here after parsing
//! arguments and loading configuration.

pub mod notes;
pub mod serve;
