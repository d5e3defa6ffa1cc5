//! Severity levels and the two resolution sentinels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity ranking used both for gating and for override declarations.
///
/// `Unset` marks a logger whose level has not been resolved against a
/// configuration yet; `Silent` suppresses every record on a logger that
/// resolves to it. The five levels in between are the emittable severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Level {
    #[default]
    Unset = 0,
    Debug = 1,
    Info = 2,
    Warning = 3,
    Error = 4,
    Critical = 5,
    Silent = 6,
}

impl Level {
    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Unset => "UNSET",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
            Level::Silent => "SILENT",
        }
    }

    /// True for the five levels a record can actually be emitted at.
    pub fn is_severity(&self) -> bool {
        matches!(
            self,
            Level::Debug | Level::Info | Level::Warning | Level::Error | Level::Critical
        )
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "UNSET" => Ok(Level::Unset),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warning),
            "ERROR" => Ok(Level::Error),
            "CRITICAL" => Ok(Level::Critical),
            "SILENT" => Ok(Level::Silent),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
