use crate::{DashboardError, DeprecatedDeps, PythonVersion};
use async_trait::async_trait;

#[async_trait]
pub trait DeprecatedDepFinder: Send + Sync {
    /// Deprecated dependencies of every package the finder knows about,
    /// as resolved under `python_version`.
    async fn deprecated_deps(
        &self,
        python_version: PythonVersion,
    ) -> Result<Vec<DeprecatedDeps>, DashboardError>;
}
