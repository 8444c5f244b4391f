use crate::{
    DEPRECATED_DEPS_PYTHON_VERSION, DashboardError, Package,
    ports::{CompatibilityStore, DeprecatedDepFinder},
    services::ResultIndex,
};
use tracing::{debug, info};

/// Collects store data for a package set and freezes it into a
/// [`ResultIndex`].
pub struct IndexService<S, F>
where
    S: CompatibilityStore,
    F: DeprecatedDepFinder,
{
    store: S,
    finder: F,
}

impl<S, F> IndexService<S, F>
where
    S: CompatibilityStore,
    F: DeprecatedDepFinder,
{
    pub fn new(store: S, finder: F) -> Self {
        Self { store, finder }
    }

    /// The index is only handed out once every fetch has completed.
    pub async fn build_index(&self, packages: &[Package]) -> Result<ResultIndex, DashboardError> {
        info!(packages = packages.len(), "fetching compatibility results");

        let (self_results, pair_results) = futures::try_join!(
            self.store.self_compatibilities(packages),
            self.store.compatibility_combinations(packages),
        )?;
        debug!(
            self_entries = self_results.len(),
            pair_entries = pair_results.len(),
            "compatibility results fetched"
        );

        let deprecated = self
            .finder
            .deprecated_deps(DEPRECATED_DEPS_PYTHON_VERSION)
            .await?;
        debug!(entries = deprecated.len(), "deprecated dependencies fetched");

        Ok(ResultIndex::new(
            packages.to_vec(),
            self_results,
            pair_results,
            deprecated,
        ))
    }
}
