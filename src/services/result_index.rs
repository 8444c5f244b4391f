use crate::{
    CompatibilityResult, DashboardError, DeprecatedDepInfo, DeprecatedDeps, Package, PackagePair,
};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Frozen snapshot of compatibility results for a requested package set.
///
/// Built once from store data and never mutated afterwards. A requested
/// package or pair with no results maps to an empty list; asking about a
/// package outside the requested set is an error.
#[derive(Debug, Clone)]
pub struct ResultIndex {
    packages: Vec<Package>,
    self_results: HashMap<Package, Vec<CompatibilityResult>>,
    pair_results: HashMap<PackagePair, Vec<CompatibilityResult>>,
    deprecated_deps: HashMap<String, DeprecatedDepInfo>,
}

impl ResultIndex {
    pub fn new(
        packages: Vec<Package>,
        mut self_results: HashMap<Package, Vec<CompatibilityResult>>,
        mut pair_results: HashMap<PackagePair, Vec<CompatibilityResult>>,
        deprecated_deps: Vec<DeprecatedDeps>,
    ) -> Self {
        let mut seen = HashSet::new();
        let packages: Vec<Package> = packages
            .into_iter()
            .filter(|pkg| seen.insert(pkg.clone()))
            .collect();

        self_results.retain(|pkg, _| seen.contains(pkg));
        for pkg in &packages {
            self_results.entry(pkg.clone()).or_default();
        }
        pair_results.retain(|pair, _| seen.contains(pair.first()) && seen.contains(pair.second()));

        let deprecated_deps: HashMap<String, DeprecatedDepInfo> = deprecated_deps
            .into_iter()
            .filter(|entry| {
                let requested = seen.contains(&Package::new(entry.package.as_str()));
                if !requested {
                    warn!(
                        package = %entry.package,
                        "ignoring deprecated dependency entry for unrequested package"
                    );
                }
                requested
            })
            .map(|entry| (entry.package, DeprecatedDepInfo::from(entry.deps)))
            .collect();

        debug!(
            packages = packages.len(),
            pairs = pair_results.len(),
            deprecated_entries = deprecated_deps.len(),
            "result index built"
        );

        Self {
            packages,
            self_results,
            pair_results,
            deprecated_deps,
        }
    }

    /// Requested packages, in request order.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn contains(&self, package: &Package) -> bool {
        self.self_results.contains_key(package)
    }

    pub fn self_results_for(&self, package: &Package) -> Result<&[CompatibilityResult], DashboardError> {
        self.self_results
            .get(package)
            .map(Vec::as_slice)
            .ok_or_else(|| DashboardError::PackageNotIndexed(package.to_string()))
    }

    pub fn pair_results_for(
        &self,
        a: &Package,
        b: &Package,
    ) -> Result<&[CompatibilityResult], DashboardError> {
        self.ensure_indexed(a)?;
        self.ensure_indexed(b)?;

        let pair = PackagePair::new(a.clone(), b.clone())
            .ok_or_else(|| DashboardError::SelfPair(a.to_string()))?;

        Ok(self
            .pair_results
            .get(&pair)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    pub fn deprecated_deps_for(&self, package: &Package) -> Result<&DeprecatedDepInfo, DashboardError> {
        self.ensure_indexed(package)?;
        self.deprecated_deps
            .get(package.install_name())
            .ok_or_else(|| {
                DashboardError::DeprecatedDepsError(format!(
                    "no deprecated dependency data for `{}`",
                    package
                ))
            })
    }

    pub fn has_deprecated_deps(&self, package: &Package) -> Result<bool, DashboardError> {
        Ok(self.deprecated_deps_for(package)?.has_deprecated)
    }

    fn ensure_indexed(&self, package: &Package) -> Result<(), DashboardError> {
        if self.contains(package) {
            Ok(())
        } else {
            Err(DashboardError::PackageNotIndexed(package.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PythonVersion, Status};

    fn result(names: &[&str], status: Status) -> CompatibilityResult {
        CompatibilityResult::new(
            names.iter().copied().map(Package::new).collect(),
            status,
            PythonVersion::Py3,
        )
    }

    fn index() -> ResultIndex {
        let a = Package::new("absl-py");
        let b = Package::new("grpcio");

        let mut self_results = HashMap::new();
        self_results.insert(a.clone(), vec![result(&["absl-py"], Status::Success)]);

        let mut pair_results = HashMap::new();
        pair_results.insert(
            PackagePair::new(a.clone(), b.clone()).unwrap(),
            vec![result(&["absl-py", "grpcio"], Status::InstallError)],
        );

        ResultIndex::new(
            vec![a, b],
            self_results,
            pair_results,
            vec![
                DeprecatedDeps::new("absl-py", vec![]),
                DeprecatedDeps::new("grpcio", vec!["oauth2client".to_string()]),
            ],
        )
    }

    #[test]
    fn test_missing_self_results_are_empty() {
        let index = index();
        let results = index.self_results_for(&Package::new("grpcio")).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_pair_lookup_is_order_independent() {
        let index = index();
        let a = Package::new("absl-py");
        let b = Package::new("grpcio");

        assert_eq!(index.pair_results_for(&a, &b).unwrap().len(), 1);
        assert_eq!(index.pair_results_for(&b, &a).unwrap().len(), 1);
    }

    #[test]
    fn test_self_pair_is_an_error() {
        let index = index();
        let a = Package::new("absl-py");
        assert!(matches!(
            index.pair_results_for(&a, &a),
            Err(DashboardError::SelfPair(_))
        ));
    }

    #[test]
    fn test_unindexed_package_is_an_error() {
        let index = index();
        let unknown = Package::new("tensorflow");

        assert!(matches!(
            index.self_results_for(&unknown),
            Err(DashboardError::PackageNotIndexed(_))
        ));
        assert!(matches!(
            index.has_deprecated_deps(&unknown),
            Err(DashboardError::PackageNotIndexed(_))
        ));
    }

    #[test]
    fn test_deprecated_deps_flag() {
        let index = index();
        assert!(!index.has_deprecated_deps(&Package::new("absl-py")).unwrap());
        assert!(index.has_deprecated_deps(&Package::new("grpcio")).unwrap());
        assert_eq!(
            index.deprecated_deps_for(&Package::new("grpcio")).unwrap().deps,
            vec!["oauth2client".to_string()]
        );
    }

    #[test]
    fn test_deprecated_deps_for_unrequested_packages_are_dropped() {
        let index = ResultIndex::new(
            vec![Package::new("grpcio")],
            HashMap::new(),
            HashMap::new(),
            vec![
                DeprecatedDeps::new("grpcio", vec![]),
                DeprecatedDeps::new("unrequested", vec!["x".to_string()]),
            ],
        );

        assert_eq!(index.deprecated_deps.len(), 1);
        assert!(!index.deprecated_deps.contains_key("unrequested"));
        assert!(!index.has_deprecated_deps(&Package::new("grpcio")).unwrap());
    }

    #[test]
    fn test_duplicate_requests_collapse() {
        let index = ResultIndex::new(
            vec![Package::new("grpcio"), Package::new("grpcio")],
            HashMap::new(),
            HashMap::new(),
            vec![],
        );
        assert_eq!(index.packages().len(), 1);
    }
}
