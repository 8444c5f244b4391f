use crate::{CompatibilityResult, DashboardError, Package, PythonVersion, Status};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Python version the deprecated dependency finder is always run with.
pub const DEPRECATED_DEPS_PYTHON_VERSION: PythonVersion = PythonVersion::Py3;

const DEFAULT_PACKAGES: &[&str] = &[
    "absl-py",
    "apache-beam[gcp]",
    "google-api-core",
    "google-api-python-client",
    "google-auth",
    "google-cloud-bigquery",
    "google-cloud-storage",
    "grpcio",
    "opencensus",
    "protobuf",
    "tensorflow",
];

const DEFAULT_PY2_UNSUPPORTED: &[&str] = &["tensorflow"];

const DEFAULT_PY3_UNSUPPORTED: &[&str] = &["apache-beam[gcp]"];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Full package catalog shown on the dashboard.
    pub packages: Vec<String>,
    #[serde(default)]
    pub unsupported: UnsupportedPackages,
}

/// Install names known not to support a Python major version.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct UnsupportedPackages {
    #[serde(default)]
    pub python2: Vec<String>,
    #[serde(default)]
    pub python3: Vec<String>,
}

impl UnsupportedPackages {
    pub fn for_version(&self, version: PythonVersion) -> &[String] {
        match version {
            PythonVersion::Py2 => &self.python2,
            PythonVersion::Py3 => &self.python3,
        }
    }

    pub fn is_unsupported(&self, version: PythonVersion, install_name: &str) -> bool {
        self.for_version(version)
            .iter()
            .any(|name| name == install_name)
    }
}

impl DashboardConfig {
    pub fn new<S: Into<String>>(packages: Vec<S>) -> Self {
        Self {
            packages: packages.into_iter().map(Into::into).collect(),
            unsupported: UnsupportedPackages::default(),
        }
    }

    pub fn with_unsupported<S: Into<String>>(mut self, version: PythonVersion, names: Vec<S>) -> Self {
        let names = names.into_iter().map(Into::into).collect();
        match version {
            PythonVersion::Py2 => self.unsupported.python2 = names,
            PythonVersion::Py3 => self.unsupported.python3 = names,
        }
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self, DashboardError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, DashboardError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DashboardError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.packages.is_empty() {
            return Err(DashboardError::InvalidConfig(
                "package catalog cannot be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for name in &self.packages {
            if name.trim().is_empty() {
                return Err(DashboardError::InvalidConfig(
                    "package install names cannot be empty".to_string(),
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(DashboardError::InvalidConfig(format!(
                    "duplicate package in catalog: '{}'",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Total size of the configured catalog.
    pub fn catalog_size(&self) -> usize {
        self.packages.len()
    }

    pub fn catalog(&self) -> Vec<Package> {
        self.packages.iter().map(Package::new).collect()
    }

    /// True when `result` is an install error caused by a package that is
    /// known not to support the Python version the check ran under.
    pub fn is_py_version_incompatible(&self, result: &CompatibilityResult) -> bool {
        if result.status() != Status::InstallError {
            return false;
        }

        PythonVersion::ALL.iter().any(|&version| {
            result.python_major_version() == version
                && result
                    .packages()
                    .iter()
                    .any(|pkg| self.unsupported.is_unsupported(version, pkg.install_name()))
        })
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGES.to_vec())
            .with_unsupported(PythonVersion::Py2, DEFAULT_PY2_UNSUPPORTED.to_vec())
            .with_unsupported(PythonVersion::Py3, DEFAULT_PY3_UNSUPPORTED.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = DashboardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.catalog_size(), DEFAULT_PACKAGES.len());
    }

    #[test]
    fn test_parse_config() {
        let config = DashboardConfig::from_toml_str(
            r#"
            packages = ["absl-py", "tensorflow"]

            [unsupported]
            python2 = ["tensorflow"]
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog(), vec![Package::new("absl-py"), Package::new("tensorflow")]);
        assert!(config.unsupported.is_unsupported(PythonVersion::Py2, "tensorflow"));
        assert!(!config.unsupported.is_unsupported(PythonVersion::Py3, "tensorflow"));
    }

    #[test]
    fn test_duplicate_packages_rejected() {
        let result = DashboardConfig::from_toml_str(r#"packages = ["grpcio", "grpcio"]"#);
        assert!(matches!(result, Err(DashboardError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = DashboardConfig::from_toml_str("packages = []");
        assert!(matches!(result, Err(DashboardError::InvalidConfig(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"packages = ["grpcio"]"#).unwrap();

        let config = DashboardConfig::load(file.path()).unwrap();
        assert_eq!(config.catalog_size(), 1);
    }

    #[test]
    fn test_py_version_incompatibility() {
        let config = DashboardConfig::new(vec!["tensorflow", "grpcio"])
            .with_unsupported(PythonVersion::Py2, vec!["tensorflow"]);

        let py2_error = CompatibilityResult::new(
            vec![Package::new("tensorflow"), Package::new("grpcio")],
            Status::InstallError,
            PythonVersion::Py2,
        );
        assert!(config.is_py_version_incompatible(&py2_error));

        let py3_error = CompatibilityResult::new(
            vec![Package::new("tensorflow")],
            Status::InstallError,
            PythonVersion::Py3,
        );
        assert!(!config.is_py_version_incompatible(&py3_error));

        let py2_warning = CompatibilityResult::new(
            vec![Package::new("tensorflow")],
            Status::CheckWarning,
            PythonVersion::Py2,
        );
        assert!(!config.is_py_version_incompatible(&py2_warning));
    }
}
