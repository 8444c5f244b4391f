use serde::Serialize;

/// Summary counters shown on the dashboard main page.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    /// Size of the full configured catalog, not just the queried packages.
    pub total: usize,
    pub with_issues: usize,
    pub with_deprecated_deps: usize,
    pub needing_update: usize,
}

impl Statistics {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }
}
