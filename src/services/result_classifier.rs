use crate::{
    CheckEntry, Classification, CompatibilityResult, DashboardConfig, DashboardError, Package,
    Statistics, Status, StatusType,
    services::ResultIndex,
};

/// Reduces raw compatibility results into per-pair classifications and
/// per-package flags.
///
/// Status tags follow scan order: every recorded finding overwrites the
/// previous tag, so the last self or pairwise failure scanned wins. There is
/// no severity ranking between statuses.
#[derive(Debug, Clone)]
pub struct ResultClassifier {
    index: ResultIndex,
    config: DashboardConfig,
}

impl ResultClassifier {
    pub fn new(index: ResultIndex, config: DashboardConfig) -> Self {
        Self { index, config }
    }

    pub fn index(&self) -> &ResultIndex {
        &self.index
    }

    /// Classifies installing `package_1` and `package_2` together, or
    /// `package_1` alone when both are the same package.
    pub fn classify(
        &self,
        package_1: &Package,
        package_2: &Package,
    ) -> Result<Classification, DashboardError> {
        let results_1 = self.index.self_results_for(package_1)?;
        let results_2 = self.index.self_results_for(package_2)?;

        let mut classification = Classification::default();

        if results_1.is_empty() || results_2.is_empty() {
            classification
                .self_check
                .push(CheckEntry::self_check(Status::Unknown));
            classification.status_type = StatusType::SelfIssue(Status::Unknown);
        }

        for result in results_1.iter().chain(results_2) {
            if self.is_failure(result) {
                classification.self_check.push(
                    CheckEntry::self_check(result.status()).with_details(result.details()),
                );
                classification.status_type = StatusType::SelfIssue(result.status());
            }
        }

        if package_1 == package_2 {
            if classification.self_check.is_empty() {
                classification
                    .self_check
                    .push(CheckEntry::self_check(Status::Success));
            }
            return Ok(classification);
        }

        let pair_results = self.index.pair_results_for(package_1, package_2)?;
        if pair_results.is_empty() {
            classification
                .pair_check
                .push(CheckEntry::pairwise(Status::Unknown));
            classification.status_type = StatusType::PairwiseIssue(Status::Unknown);
        }

        for result in pair_results {
            if self.is_failure(result) {
                classification.pair_check.push(
                    CheckEntry::pairwise(result.status()).with_details(result.details()),
                );
                classification.status_type = StatusType::PairwiseIssue(result.status());
            }
        }

        if classification.pair_check.is_empty() {
            classification
                .pair_check
                .push(CheckEntry::pairwise(Status::Success));
            if classification.status_type == StatusType::SelfSuccess {
                classification.status_type = StatusType::PairwiseSuccess;
            }
        }

        Ok(classification)
    }

    /// True when `package` fails to install together with some other
    /// requested package that installs cleanly on its own.
    pub fn has_issues(&self, package: &Package) -> Result<bool, DashboardError> {
        for other in self.index.packages() {
            let pair = self.classify(package, other)?;
            if !pair.has_pairwise_failure() {
                continue;
            }

            // A failure caused by the other package's own install problems
            // is not blamed on this one.
            let other_alone = self.classify(other, other)?;
            if other_alone.has_self_success() {
                return Ok(true);
            }
        }

        Ok(false)
    }

    pub fn has_deprecated_deps(&self, package: &Package) -> Result<bool, DashboardError> {
        self.index.has_deprecated_deps(package)
    }

    /// No data source reports outdated packages yet, so this is always false.
    pub fn needs_update(&self, _package: &Package) -> bool {
        false
    }

    pub fn statistics(&self, packages: &[Package]) -> Result<Statistics, DashboardError> {
        let mut stats = Statistics::new(self.config.catalog_size());

        for package in packages {
            if self.has_issues(package)? {
                stats.with_issues += 1;
            }
            if self.has_deprecated_deps(package)? {
                stats.with_deprecated_deps += 1;
            }
            if self.needs_update(package) {
                stats.needing_update += 1;
            }
        }

        Ok(stats)
    }

    fn is_failure(&self, result: &CompatibilityResult) -> bool {
        !result.status().is_success() && !self.config.is_py_version_incompatible(result)
    }
}
