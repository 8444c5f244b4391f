use crate::{DashboardError, Package, Statistics, services::ResultClassifier};
use std::fmt;

/// Pages the dashboard is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardPage {
    /// Pairwise compatibility grid.
    Grid,
    /// Landing page with summary statistics.
    Main,
}

impl DashboardPage {
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Grid => "grid.html",
            Self::Main => "index.html",
        }
    }
}

impl fmt::Display for DashboardPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid => write!(f, "grid"),
            Self::Main => write!(f, "main"),
        }
    }
}

/// Everything a renderer may read while producing a page.
pub struct DashboardContext<'a> {
    pub packages: &'a [Package],
    pub results: &'a ResultClassifier,
    pub statistics: Statistics,
    pub current_timestamp: String,
}

pub trait DashboardRenderer: Send + Sync {
    fn render(
        &self,
        page: DashboardPage,
        context: &DashboardContext<'_>,
    ) -> Result<String, DashboardError>;
}
