//! # CLI
//!
//! One possible UI client for tenkey. It is the only place that knows about the
//! terminal: argument parsing (`setup.rs`), dispatch and context wiring
//! (`commands.rs`), one-shot output (`print.rs`) and the interactive typing screen
//! (`terminal.rs`).
//!
//! Running `tenkey` with no subcommand opens the mode-select screen.

mod commands;
mod print;
mod setup;
mod styles;
mod terminal;

pub use commands::run;
