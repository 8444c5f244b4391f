use crate::DashboardError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An installable package, identified by its install name.
///
/// Equality, ordering and hashing all go through the install name, so a
/// `Package` can be used directly as a map key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Package {
    install_name: String,
}

impl Package {
    pub fn new<S: Into<String>>(install_name: S) -> Self {
        Self {
            install_name: install_name.into(),
        }
    }

    /// Returns the install name used for installation and lookup.
    pub fn install_name(&self) -> &str {
        &self.install_name
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.install_name)
    }
}

impl TryFrom<&str> for Package {
    type Error = DashboardError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let name = value.trim();
        if name.is_empty() {
            return Err(DashboardError::validation(
                "Package install name cannot be empty or whitespace",
            ));
        }
        Ok(Self::new(name))
    }
}

/// Unordered pair of two distinct packages.
///
/// The packages are stored sorted, so `PackagePair::new(a, b)` and
/// `PackagePair::new(b, a)` are the same key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackagePair {
    first: Package,
    second: Package,
}

impl PackagePair {
    /// Returns `None` when both packages are the same; self pairs are
    /// looked up through self results instead.
    pub fn new(a: Package, b: Package) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self {
                first: a,
                second: b,
            }),
            std::cmp::Ordering::Greater => Some(Self {
                first: b,
                second: a,
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn first(&self) -> &Package {
        &self.first
    }

    pub fn second(&self) -> &Package {
        &self.second
    }

    /// All unordered pairs of distinct packages in `packages`.
    pub fn combinations(packages: &[Package]) -> Vec<PackagePair> {
        let mut pairs = Vec::new();
        for (i, a) in packages.iter().enumerate() {
            for b in &packages[i + 1..] {
                if let Some(pair) = Self::new(a.clone(), b.clone()) {
                    pairs.push(pair);
                }
            }
        }
        pairs.sort();
        pairs.dedup();
        pairs
    }
}

impl fmt::Display for PackagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_pair_is_order_independent() {
        let a = Package::new("absl-py");
        let b = Package::new("grpcio");

        let ab = PackagePair::new(a.clone(), b.clone()).unwrap();
        let ba = PackagePair::new(b, a).unwrap();
        assert_eq!(ab, ba);

        let mut map = HashMap::new();
        map.insert(ab, 1);
        assert_eq!(map.get(&ba), Some(&1));
    }

    #[test]
    fn test_self_pair_is_rejected() {
        let a = Package::new("absl-py");
        assert!(PackagePair::new(a.clone(), a).is_none());
    }

    #[test]
    fn test_combinations_skip_duplicates() {
        let packages = vec![
            Package::new("tensorflow"),
            Package::new("grpcio"),
            Package::new("absl-py"),
            Package::new("grpcio"),
        ];

        let pairs = PackagePair::combinations(&packages);
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].first().install_name(), "absl-py");
        assert_eq!(pairs[0].second().install_name(), "grpcio");
    }

    #[test]
    fn test_empty_install_name() {
        assert!(Package::try_from("   ").is_err());
        assert_eq!(
            Package::try_from(" grpcio ").unwrap().install_name(),
            "grpcio"
        );
    }
}
