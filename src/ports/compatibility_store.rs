use crate::{CompatibilityResult, DashboardError, Package, PackagePair};
use async_trait::async_trait;
use std::collections::HashMap;

/// Source of recorded installation check results.
#[async_trait]
pub trait CompatibilityStore: Send + Sync {
    /// Results of installing each package alone, keyed by package.
    async fn self_compatibilities(
        &self,
        packages: &[Package],
    ) -> Result<HashMap<Package, Vec<CompatibilityResult>>, DashboardError>;

    /// Results of installing every unordered pair of `packages` together.
    async fn compatibility_combinations(
        &self,
        packages: &[Package],
    ) -> Result<HashMap<PackagePair, Vec<CompatibilityResult>>, DashboardError>;
}
