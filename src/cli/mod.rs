//! Command Line Interface (CLI) layer for TILEFUSE.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! the built-in per-tile resize transform (`transform`), and the
//! orchestration logic (`runner`) for single-file and batch upscaling flows.
//! It wires user-provided options to the underlying library functionality
//! exposed via `tilefuse::api`.
//!
//! If you are embedding TILEFUSE into another application, prefer using the
//! high-level `tilefuse::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;
pub mod transform;

pub use args::CliArgs;
pub use runner::run;
