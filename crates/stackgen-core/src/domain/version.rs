//! Dotted numeric versions and the minimum-version comparison.
//!
//! Tool probes report versions in many shapes (`v18.17.0`, `17.0.2+8`,
//! `3.9`). [`Version`] keeps only the numeric components; comparison is
//! component-wise against the *required* version's length, so it is not
//! semver-aware and pre-release tags are ignored.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::error::DomainError;

/// A version as an ordered list of non-negative integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    components: Vec<u64>,
}

/// Result of comparing an installed version against a required one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionOrdering {
    Less,
    EqualOrGreater,
}

impl VersionOrdering {
    pub const fn is_satisfied(self) -> bool {
        matches!(self, Self::EqualOrGreater)
    }
}

impl Version {
    pub fn new(components: impl Into<Vec<u64>>) -> Self {
        Self {
            components: components.into(),
        }
    }

    /// Parse a dotted version string.
    ///
    /// Any leading non-digit prefix is stripped (`v18.2.0` → `18.2.0`).
    /// Each component contributes its leading digit run, so `0+8` reads as
    /// `0`. A component without digits is an error.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        let numeric = trimmed.trim_start_matches(|c: char| !c.is_ascii_digit());

        if numeric.is_empty() {
            return Err(DomainError::InvalidVersion {
                input: input.to_string(),
                reason: "no numeric component".into(),
            });
        }

        let components = numeric
            .split('.')
            .map(|part| {
                let digits: String = part.chars().take_while(char::is_ascii_digit).collect();
                if digits.is_empty() {
                    return Err(DomainError::InvalidVersion {
                        input: input.to_string(),
                        reason: format!("component '{part}' is not numeric"),
                    });
                }
                digits.parse::<u64>().map_err(|e| DomainError::InvalidVersion {
                    input: input.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { components })
    }

    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Component at `index`, zero when out of range.
    pub fn component(&self, index: usize) -> u64 {
        self.components.get(index).copied().unwrap_or(0)
    }

    /// Whether `self` meets the minimum `required` version.
    pub fn satisfies(&self, required: &Version) -> bool {
        compare(self, required).is_satisfied()
    }
}

/// Compare an installed version against a required minimum.
///
/// Only the indices of `required` are inspected; trailing components of
/// `current` cannot make it lower.
pub fn compare(current: &Version, required: &Version) -> VersionOrdering {
    for index in 0..required.components.len() {
        match current.component(index).cmp(&required.component(index)) {
            Ordering::Less => return VersionOrdering::Less,
            Ordering::Greater => return VersionOrdering::EqualOrGreater,
            Ordering::Equal => continue,
        }
    }
    VersionOrdering::EqualOrGreater
}

/// Parse both strings, then [`compare`].
pub fn compare_str(current: &str, required: &str) -> Result<VersionOrdering, DomainError> {
    Ok(compare(&Version::parse(current)?, &Version::parse(required)?))
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(u64::to_string).collect();
        f.write_str(&parts.join("."))
    }
}

impl FromStr for Version {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Version::parse(&raw).map_err(serde::de::Error::custom)
    }
}
