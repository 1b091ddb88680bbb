use crate::area_codes::AreaCodeEntry;
use crate::config::TenkeyConfig;
use crate::model::Target;
use serde::Serialize;

pub mod codes;
pub mod config;
pub mod generate;
pub mod region;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A generated target together with the strings a client shows for it.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedTarget {
    pub target: Target,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Outcome of resolving a phone number against the area-code table.
#[derive(Debug, Clone, Serialize)]
pub struct RegionMatch {
    pub digits: String,
    pub code: Option<String>,
    pub region: String,
    pub display: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub targets: Vec<GeneratedTarget>,
    pub area_codes: Vec<AreaCodeEntry>,
    pub region: Option<RegionMatch>,
    pub config: Option<TenkeyConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_targets(mut self, targets: Vec<GeneratedTarget>) -> Self {
        self.targets = targets;
        self
    }

    pub fn with_area_codes(mut self, entries: Vec<AreaCodeEntry>) -> Self {
        self.area_codes = entries;
        self
    }

    pub fn with_region(mut self, region: RegionMatch) -> Self {
        self.region = Some(region);
        self
    }

    pub fn with_config(mut self, config: TenkeyConfig) -> Self {
        self.config = Some(config);
        self
    }
}
