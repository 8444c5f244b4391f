use serde::{Deserialize, Serialize};

/// Deprecated dependencies reported for one package.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeprecatedDeps {
    pub package: String,
    #[serde(default)]
    pub deps: Vec<String>,
}

impl DeprecatedDeps {
    pub fn new<S: Into<String>>(package: S, deps: Vec<String>) -> Self {
        Self {
            package: package.into(),
            deps,
        }
    }
}

/// Cached per-package deprecated dependency information.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeprecatedDepInfo {
    pub deps: Vec<String>,
    pub has_deprecated: bool,
}

impl From<Vec<String>> for DeprecatedDepInfo {
    fn from(deps: Vec<String>) -> Self {
        let has_deprecated = !deps.is_empty();
        Self {
            deps,
            has_deprecated,
        }
    }
}
