//! Domain value objects: ProjectType, Component, Tool.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file defines the types, their string representations, their
//! `FromStr` parsers and the fixed mappings between them
//! (type → components, component → tools).

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProjectType ──────────────────────────────────────────────────────────────

/// The kind of project to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Frontend,
    Backend,
    Fullstack,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [Self::Frontend, Self::Backend, Self::Fullstack];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Fullstack => "fullstack",
        }
    }

    /// Components generated for this type, in generation order.
    pub const fn components(self) -> &'static [Component] {
        match self {
            Self::Frontend => &[Component::Frontend],
            Self::Backend => &[Component::Backend],
            Self::Fullstack => &[Component::Frontend, Component::Backend],
        }
    }

    /// Tools that must be installed before anything is created.
    pub fn required_tools(self) -> Vec<Tool> {
        self.components()
            .iter()
            .flat_map(|c| c.required_tools().iter().copied())
            .collect()
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "frontend" => Ok(Self::Frontend),
            "backend" => Ok(Self::Backend),
            "fullstack" => Ok(Self::Fullstack),
            other => Err(DomainError::UnknownProjectType(other.to_string())),
        }
    }
}

// ── Component ────────────────────────────────────────────────────────────────

/// A generated sub-project living inside the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Frontend,
    Backend,
}

impl Component {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
        }
    }

    /// Directory name of the component, e.g. `demo-app-frontend`.
    pub fn dir_name(&self, project_name: &str) -> String {
        format!("{project_name}-{}", self.as_str())
    }

    pub const fn required_tools(self) -> &'static [Tool] {
        match self {
            Self::Frontend => &[Tool::Node],
            Self::Backend => &[Tool::Java, Tool::Maven],
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Tool ─────────────────────────────────────────────────────────────────────

/// An external tool whose version gates project creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// JavaScript runtime.
    Node,
    /// JDK.
    Java,
    /// Build tool.
    Maven,
}

impl Tool {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Java => "java",
            Self::Maven => "maven",
        }
    }

    /// Executable looked up on `PATH`.
    pub const fn program(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Java => "java",
            Self::Maven => "mvn",
        }
    }

    /// Arguments that make the program print its version.
    pub const fn version_args(&self) -> &'static [&'static str] {
        match self {
            Self::Node => &["--version"],
            Self::Java => &["-version"],
            Self::Maven => &["-v"],
        }
    }

    /// Where users usually get the tool from.
    pub const fn install_hint(&self) -> &'static str {
        match self {
            Self::Node => "https://nodejs.org/",
            Self::Java => "https://adoptium.net/",
            Self::Maven => "https://maven.apache.org/download.cgi",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_type_parses_case_insensitively() {
        assert_eq!(ProjectType::from_str("Frontend").unwrap(), ProjectType::Frontend);
        assert_eq!(ProjectType::from_str("BACKEND").unwrap(), ProjectType::Backend);
        assert!(matches!(
            ProjectType::from_str("mobile"),
            Err(DomainError::UnknownProjectType(_))
        ));
    }

    #[test]
    fn fullstack_is_union_of_both() {
        assert_eq!(ProjectType::Frontend.required_tools(), vec![Tool::Node]);
        assert_eq!(
            ProjectType::Backend.required_tools(),
            vec![Tool::Java, Tool::Maven]
        );
        assert_eq!(
            ProjectType::Fullstack.required_tools(),
            vec![Tool::Node, Tool::Java, Tool::Maven]
        );
    }

    #[test]
    fn component_dir_names() {
        assert_eq!(Component::Frontend.dir_name("demo-app"), "demo-app-frontend");
        assert_eq!(Component::Backend.dir_name("demo-app"), "demo-app-backend");
    }
}
