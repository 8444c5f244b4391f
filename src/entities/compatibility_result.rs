use crate::{DashboardError, Package};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of an installation check.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Success,
    InstallError,
    CheckWarning,
    UnknownError,
    Unknown,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::InstallError => "INSTALL_ERROR",
            Self::CheckWarning => "CHECK_WARNING",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Status {
    type Error = DashboardError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_uppercase().as_str() {
            "SUCCESS" => Ok(Self::Success),
            "INSTALL_ERROR" => Ok(Self::InstallError),
            "CHECK_WARNING" => Ok(Self::CheckWarning),
            "UNKNOWN_ERROR" => Ok(Self::UnknownError),
            "UNKNOWN" => Ok(Self::Unknown),
            _ => Err(DashboardError::validation(format!(
                "Invalid status: '{}'",
                value
            ))),
        }
    }
}

/// Python major version a check ran under.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub enum PythonVersion {
    Py2,
    Py3,
}

impl PythonVersion {
    pub const ALL: [PythonVersion; 2] = [PythonVersion::Py2, PythonVersion::Py3];

    pub fn major(&self) -> u8 {
        match self {
            Self::Py2 => 2,
            Self::Py3 => 3,
        }
    }
}

impl TryFrom<u8> for PythonVersion {
    type Error = DashboardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Py2),
            3 => Ok(Self::Py3),
            _ => Err(DashboardError::validation(format!(
                "Unsupported Python major version: {}",
                value
            ))),
        }
    }
}

impl From<PythonVersion> for u8 {
    fn from(version: PythonVersion) -> Self {
        version.major()
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major())
    }
}

/// One recorded installation check of one package alone or two together.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityResult {
    packages: Vec<Package>,
    status: Status,
    python_major_version: PythonVersion,
    #[serde(default)]
    details: Option<String>,
}

impl CompatibilityResult {
    pub fn new(packages: Vec<Package>, status: Status, python_major_version: PythonVersion) -> Self {
        Self {
            packages,
            status,
            python_major_version,
            details: None,
        }
    }

    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn python_major_version(&self) -> PythonVersion {
        self.python_major_version
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        result: CompatibilityResult,
    }

    #[test]
    fn test_deserialize_result() {
        let wrapper: Wrapper = toml::from_str(
            r#"
            [result]
            packages = ["tensorflow"]
            status = "INSTALL_ERROR"
            python_major_version = 2
            details = "No matching distribution"
            "#,
        )
        .unwrap();

        let result = wrapper.result;
        assert_eq!(result.packages(), &[Package::new("tensorflow")]);
        assert_eq!(result.status(), Status::InstallError);
        assert_eq!(result.python_major_version(), PythonVersion::Py2);
        assert_eq!(result.details(), Some("No matching distribution"));
    }

    #[test]
    fn test_invalid_python_version() {
        let parsed: Result<Wrapper, _> = toml::from_str(
            r#"
            [result]
            packages = ["tensorflow"]
            status = "SUCCESS"
            python_major_version = 4
            "#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(Status::try_from("check_warning").unwrap(), Status::CheckWarning);
        assert!(Status::try_from("BROKEN").is_err());
    }
}
