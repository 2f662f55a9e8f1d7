//! Command Line Interface (CLI) layer for pltpreview.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the `show` and `plot`
//! subcommands. It wires user-provided options to the library's `Figures`
//! session.
//!
//! If you are embedding pltpreview into another application, prefer using
//! the high-level `pltpreview::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
