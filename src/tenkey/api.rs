//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the session core. It is
//! the single entry point a client uses, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the loaded state**: configuration, config directory, area-code table, seed
//! - **Builds generators and trainers** configured from that state
//! - **Dispatches** one-shot operations to `commands/*.rs`
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O of its own beyond what the commands do (config files), and never
//! prints anything.

use crate::area_codes::AreaCodeTable;
use crate::commands;
use crate::config::TenkeyConfig;
use crate::error::Result;
use crate::generator::Generator;
use crate::model::Mode;
use crate::session::Trainer;
use std::path::PathBuf;

pub struct TenkeyApi {
    config_dir: PathBuf,
    config: TenkeyConfig,
    table: AreaCodeTable,
    seed: Option<u64>,
}

impl TenkeyApi {
    pub fn new(config_dir: PathBuf, config: TenkeyConfig, table: AreaCodeTable) -> Self {
        Self {
            config_dir,
            config,
            table,
            seed: None,
        }
    }

    /// Makes every generator built by this API deterministic.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn generator(&self) -> Generator {
        let generator = match self.seed {
            Some(seed) => Generator::seeded(self.table.clone(), seed),
            None => Generator::from_os_rng(self.table.clone()),
        };
        generator.with_years(self.config.year_min, self.config.year_max)
    }

    /// A fresh, idle trainer for an interactive client.
    pub fn trainer(&self) -> Trainer {
        Trainer::new(self.generator(), self.config.history_limit)
    }

    pub fn generate(&self, mode: Mode, count: usize) -> Result<commands::CmdResult> {
        commands::generate::run(&mut self.generator(), mode, count)
    }

    pub fn region(&self, number: &str) -> Result<commands::CmdResult> {
        commands::region::run(&self.table, number)
    }

    pub fn area_codes(&self) -> Result<commands::CmdResult> {
        commands::codes::run(&self.table)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn settings(&self) -> &TenkeyConfig {
        &self.config
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, GeneratedTarget, MessageLevel, RegionMatch};
