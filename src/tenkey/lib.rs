//! # Tenkey Architecture
//!
//! Tenkey drills typing digits: it shows a target (a number, a birthday or a Japanese
//! landline number), previews the one after it, and moves on as soon as enough digits
//! have been typed. It is a **UI-agnostic library** with a terminal client on top; the
//! same core could sit behind a web page or a GUI.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, draws the typing screen, reads keys    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Holds config + area-code table, builds trainers          │
//! │  - Dispatches one-shot commands, returns CmdResult          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) and Session (session.rs)     │
//! │  - generate / region / codes / config                       │
//! │  - Trainer: Idle ⇄ Active state machine over a Surface      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - generator, format, queue, history, area_codes, keys      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular Rust types,
//! and never writes to stdout/stderr. The typing screen is driven through the
//! [`surface::Surface`] hooks, so the session logic is tested against an in-memory
//! [`surface::ScreenBuffer`] rather than a terminal.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One-shot operations (generate, region, codes, config)
//! - [`session`]: The practice state machine
//! - [`generator`]: Random numbers, birthdays and phone numbers
//! - [`format`]: Display formatting
//! - [`area_codes`]: Area-code table with longest-prefix region lookup
//! - [`queue`], [`history`]: The current/next pair and the bounded log
//! - [`keys`]: Key filtering and the editable input line
//! - [`surface`]: Render hooks
//! - [`config`], [`error`], [`model`]

pub mod api;
pub mod area_codes;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod history;
pub mod keys;
pub mod model;
pub mod queue;
pub mod session;
pub mod surface;
