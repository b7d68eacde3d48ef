//! Output verbosity.

use std::str::FromStr;

use crate::config::schema;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including per-project detail.
    Verbose,
    /// Show status messages and results.
    #[default]
    Normal,
    /// Show results and final status only.
    Quiet,
    /// Show nothing except errors and requested data.
    Silent,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            "silent" => Ok(Self::Silent),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl From<schema::OutputMode> for OutputMode {
    fn from(config_mode: schema::OutputMode) -> Self {
        match config_mode {
            schema::OutputMode::Verbose => Self::Verbose,
            schema::OutputMode::Normal => Self::Normal,
            schema::OutputMode::Quiet => Self::Quiet,
            schema::OutputMode::Silent => Self::Silent,
        }
    }
}

impl OutputMode {
    /// Check if this mode shows extra detail.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows headers and hints.
    pub fn shows_decoration(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}
