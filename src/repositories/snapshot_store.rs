use crate::{
    CompatibilityResult, DashboardError, DeprecatedDeps, Package, PackagePair, PythonVersion,
    ports::{CompatibilityStore, DeprecatedDepFinder},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// On-disk dump of compatibility data, as exported from the results store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    #[serde(default)]
    pub self_results: Vec<CompatibilityResult>,
    #[serde(default)]
    pub pair_results: Vec<CompatibilityResult>,
    #[serde(default)]
    pub deprecated_deps: Vec<DeprecatedDeps>,
}

impl Snapshot {
    pub fn validate(&self) -> Result<(), DashboardError> {
        for result in &self.self_results {
            if result.packages().len() != 1 {
                return Err(DashboardError::validation(format!(
                    "self result must name exactly one package, got {}",
                    result.packages().len()
                )));
            }
        }

        for result in &self.pair_results {
            if pair_of(result).is_none() {
                return Err(DashboardError::validation(
                    "pair result must name exactly two distinct packages",
                ));
            }
        }

        Ok(())
    }
}

fn pair_of(result: &CompatibilityResult) -> Option<PackagePair> {
    match result.packages() {
        [a, b] => PackagePair::new(a.clone(), b.clone()),
        _ => None,
    }
}

/// Serves store and deprecated dependency queries from a loaded snapshot.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    self_results: HashMap<Package, Vec<CompatibilityResult>>,
    pair_results: HashMap<PackagePair, Vec<CompatibilityResult>>,
    deprecated_deps: Vec<DeprecatedDeps>,
}

impl SnapshotStore {
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut self_results: HashMap<Package, Vec<CompatibilityResult>> = HashMap::new();
        for result in snapshot.self_results {
            if let [package] = result.packages() {
                self_results.entry(package.clone()).or_default().push(result);
            }
        }

        let mut pair_results: HashMap<PackagePair, Vec<CompatibilityResult>> = HashMap::new();
        for result in snapshot.pair_results {
            if let Some(pair) = pair_of(&result) {
                pair_results.entry(pair).or_default().push(result);
            }
        }

        Self {
            self_results,
            pair_results,
            deprecated_deps: snapshot.deprecated_deps,
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, DashboardError> {
        let snapshot: Snapshot = toml::from_str(content)?;
        snapshot.validate()?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub async fn load(path: &Path) -> Result<Self, DashboardError> {
        let content = tokio::fs::read_to_string(path).await?;
        let store = Self::from_toml_str(&content).map_err(|e| {
            warn!(path = %path.display(), error = %e, "rejecting snapshot");
            DashboardError::InvalidSnapshot(path.to_path_buf())
        })?;

        debug!(
            path = %path.display(),
            packages = store.self_results.len(),
            pairs = store.pair_results.len(),
            "snapshot loaded"
        );
        Ok(store)
    }
}

#[async_trait]
impl CompatibilityStore for SnapshotStore {
    async fn self_compatibilities(
        &self,
        packages: &[Package],
    ) -> Result<HashMap<Package, Vec<CompatibilityResult>>, DashboardError> {
        Ok(packages
            .iter()
            .map(|pkg| {
                let results = self.self_results.get(pkg).cloned().unwrap_or_default();
                (pkg.clone(), results)
            })
            .collect())
    }

    async fn compatibility_combinations(
        &self,
        packages: &[Package],
    ) -> Result<HashMap<PackagePair, Vec<CompatibilityResult>>, DashboardError> {
        Ok(PackagePair::combinations(packages)
            .into_iter()
            .map(|pair| {
                let results = self.pair_results.get(&pair).cloned().unwrap_or_default();
                (pair, results)
            })
            .collect())
    }
}

#[async_trait]
impl DeprecatedDepFinder for SnapshotStore {
    async fn deprecated_deps(
        &self,
        python_version: PythonVersion,
    ) -> Result<Vec<DeprecatedDeps>, DashboardError> {
        // Snapshots are exported from Python 3 dependency data only.
        if python_version != PythonVersion::Py3 {
            return Err(DashboardError::DeprecatedDepsError(format!(
                "snapshot has no deprecated dependency data for Python {}",
                python_version
            )));
        }
        Ok(self.deprecated_deps.clone())
    }
}
