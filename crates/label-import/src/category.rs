//! Label categories recognised in Trac ticket metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Category of a label, one per ticket field that becomes a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Ticket priority (Fatal, Critical, ...)
    Priority,
    /// Ticket resolution (fixed, wontfix, ...)
    Resolution,
    /// Affected version
    Version,
    /// Component the ticket belongs to
    Component,
    /// Ticket type (defect, enhancement, ...)
    Type,
    /// Workflow status (new, assigned, closed, ...)
    Status,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Priority,
        Self::Resolution,
        Self::Version,
        Self::Component,
        Self::Type,
        Self::Status,
    ];

    /// Lowercase name used in configuration and output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Resolution => "resolution",
            Self::Version => "version",
            Self::Component => "component",
            Self::Type => "type",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::UnknownCategory(name.to_string()))
    }
}
