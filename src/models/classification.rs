use crate::Status;
use serde::{Serialize, Serializer};
use std::fmt;

/// Summary tag of a classification: where the last recorded finding came
/// from and what its status was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusType {
    #[default]
    SelfSuccess,
    SelfIssue(Status),
    PairwiseSuccess,
    PairwiseIssue(Status),
}

impl StatusType {
    pub fn status(&self) -> Status {
        match self {
            Self::SelfSuccess | Self::PairwiseSuccess => Status::Success,
            Self::SelfIssue(status) | Self::PairwiseIssue(status) => *status,
        }
    }

    pub fn is_pairwise(&self) -> bool {
        matches!(self, Self::PairwiseSuccess | Self::PairwiseIssue(_))
    }

    /// Tag used by the rendering layer, e.g. `self-unknown` or
    /// `pairwise-install_error`.
    pub fn tag(&self) -> String {
        let scope = if self.is_pairwise() { "pairwise" } else { "self" };
        format!("{}-{}", scope, self.status().as_str().to_lowercase())
    }
}

impl fmt::Display for StatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl Serialize for StatusType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.tag())
    }
}

/// One entry of a self or pairwise check list.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CheckEntry {
    pub status: Status,
    #[serde(rename = "self")]
    pub is_self: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl CheckEntry {
    pub fn self_check(status: Status) -> Self {
        Self {
            status,
            is_self: true,
            details: None,
        }
    }

    pub fn pairwise(status: Status) -> Self {
        Self {
            status,
            is_self: false,
            details: None,
        }
    }

    pub fn with_details(mut self, details: Option<&str>) -> Self {
        self.details = details.map(str::to_string);
        self
    }

    /// The synthetic entry recorded when a package installs cleanly alone.
    pub fn is_self_success(&self) -> bool {
        self.is_self && self.status.is_success() && self.details.is_none()
    }
}

/// Result of classifying a package against another package or itself.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Classification {
    pub status_type: StatusType,
    pub self_check: Vec<CheckEntry>,
    pub pair_check: Vec<CheckEntry>,
}

impl Classification {
    pub fn has_pairwise_failure(&self) -> bool {
        self.pair_check.iter().any(|entry| !entry.status.is_success())
    }

    pub fn has_self_success(&self) -> bool {
        self.self_check.iter().any(CheckEntry::is_self_success)
    }
}
