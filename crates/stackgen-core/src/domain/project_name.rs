//! Project name validation.
//!
//! A [`ProjectName`] can only be obtained through [`ProjectName::parse`], so
//! any value of the type satisfies every rule below. The rules are evaluated
//! together and all violations are reported at once.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::DomainError;

pub const MIN_NAME_LEN: usize = 3;
pub const MAX_NAME_LEN: usize = 50;

/// Names that collide with conventional build/output directories.
pub const RESERVED_NAMES: &[&str] = &[
    "node_modules",
    "build",
    "dist",
    "test",
    "src",
    "app",
    "config",
    "public",
];

/// A single broken naming rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameViolation {
    /// Length outside `[MIN_NAME_LEN, MAX_NAME_LEN]`.
    Length,
    /// Does not match `^[a-zA-Z][a-zA-Z0-9-]*[a-zA-Z0-9]$`.
    Format,
    /// Case-insensitively equal to one of [`RESERVED_NAMES`].
    Reserved,
}

impl NameViolation {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Format => "format",
            Self::Reserved => "reserved",
        }
    }

    /// Short, user-facing explanation of the rule.
    pub const fn hint(&self) -> &'static str {
        match self {
            Self::Length => "Use between 3 and 50 characters",
            Self::Format => {
                "Start with a letter, use only letters, digits and hyphens, end with a letter or digit"
            }
            Self::Reserved => {
                "Avoid reserved names: node_modules, build, dist, test, src, app, config, public"
            }
        }
    }
}

impl fmt::Display for NameViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of running every naming rule against a candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<NameViolation>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[NameViolation] {
        &self.violations
    }

    pub fn has(&self, violation: NameViolation) -> bool {
        self.violations.contains(&violation)
    }

    pub fn into_violations(self) -> Vec<NameViolation> {
        self.violations
    }
}

/// Stateless validator for candidate project names.
pub struct NameValidator;

impl NameValidator {
    /// Evaluate all rules; never short-circuits.
    pub fn validate(name: &str) -> ValidationReport {
        let mut violations = Vec::new();

        let len = name.chars().count();
        if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
            violations.push(NameViolation::Length);
        }

        if !matches_format(name) {
            violations.push(NameViolation::Format);
        }

        if is_reserved(name) {
            violations.push(NameViolation::Reserved);
        }

        ValidationReport { violations }
    }
}

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9-]*[a-zA-Z0-9]$").expect("valid project name regex")
});

fn matches_format(name: &str) -> bool {
    NAME_RE.is_match(name)
}

fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name))
}

/// A project name that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let report = NameValidator::validate(&name);
        if report.is_ok() {
            Ok(Self(name))
        } else {
            Err(DomainError::InvalidProjectName {
                name,
                violations: report.into_violations(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names_pass() {
        for name in ["my-project", "project123", "my-cool-project", "Abc", "a1b"] {
            assert!(NameValidator::validate(name).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn too_short_is_length_error() {
        let report = NameValidator::validate("ab");
        assert_eq!(report.violations(), &[NameViolation::Length]);
    }

    #[test]
    fn too_long_is_length_error() {
        let name = "a".repeat(51);
        assert!(NameValidator::validate(&name).has(NameViolation::Length));
        assert!(NameValidator::validate(&"a".repeat(50)).is_ok());
    }

    #[test]
    fn every_out_of_range_length_fails() {
        for len in (0..MIN_NAME_LEN).chain(MAX_NAME_LEN + 1..MAX_NAME_LEN + 5) {
            let name = "x".repeat(len);
            assert!(
                NameValidator::validate(&name).has(NameViolation::Length),
                "length {len} accepted"
            );
        }
    }

    #[test]
    fn format_violations() {
        for name in [
            "test project",
            "project@123",
            "123project",
            "my-project-",
            "-abc",
            "my_project",
            "caf\u{e9}-app",
            "trailing\n",
        ] {
            assert!(
                NameValidator::validate(name).has(NameViolation::Format),
                "accepted: {name}"
            );
        }
    }

    #[test]
    fn hyphens_and_digits_inside_are_allowed() {
        for name in ["ab", "a1", "my-app-2", "Web-Client"] {
            assert!(matches_format(name), "rejected: {name}");
        }
    }

    #[test]
    fn reserved_is_case_insensitive() {
        assert!(NameValidator::validate("test").has(NameViolation::Reserved));
        assert!(NameValidator::validate("Build").has(NameViolation::Reserved));
        assert!(NameValidator::validate("PUBLIC").has(NameViolation::Reserved));
    }

    #[test]
    fn node_modules_reports_format_and_reserved() {
        let report = NameValidator::validate("node_modules");
        assert!(report.has(NameViolation::Format));
        assert!(report.has(NameViolation::Reserved));
    }

    #[test]
    fn all_violations_are_collected() {
        let report = NameValidator::validate("1");
        assert_eq!(
            report.violations(),
            &[NameViolation::Length, NameViolation::Format]
        );
    }

    #[test]
    fn parse_carries_violations() {
        match ProjectName::parse("ab") {
            Err(DomainError::InvalidProjectName { name, violations }) => {
                assert_eq!(name, "ab");
                assert_eq!(violations, vec![NameViolation::Length]);
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert_eq!(ProjectName::parse("demo-app").unwrap().as_str(), "demo-app");
    }

    #[test]
    fn error_message_lists_violations() {
        let err = ProjectName::parse("1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid project name '1': length, format"
        );
    }
}
