//! Minimum tool versions.
//!
//! Required versions are configuration, not constants: the CLI loads a
//! [`RequiredVersions`] from config and the core only consumes it.

use serde::{Deserialize, Serialize};

use crate::domain::{
    value_objects::{ProjectType, Tool},
    version::Version,
};

/// A tool and the lowest acceptable version of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRequirement {
    pub tool: Tool,
    pub minimum: Version,
}

impl ToolRequirement {
    pub fn new(tool: Tool, minimum: Version) -> Self {
        Self { tool, minimum }
    }
}

/// Minimum version per tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequiredVersions {
    pub node: Version,
    pub java: Version,
    pub maven: Version,
}

impl Default for RequiredVersions {
    fn default() -> Self {
        Self {
            node: Version::new([18, 0, 0]),
            java: Version::new([17]),
            maven: Version::new([3, 6, 0]),
        }
    }
}

impl RequiredVersions {
    pub fn minimum_for(&self, tool: Tool) -> &Version {
        match tool {
            Tool::Node => &self.node,
            Tool::Java => &self.java,
            Tool::Maven => &self.maven,
        }
    }

    /// Requirements for a project type, in check order.
    pub fn for_type(&self, project_type: ProjectType) -> Vec<ToolRequirement> {
        project_type
            .required_tools()
            .into_iter()
            .map(|tool| ToolRequirement::new(tool, self.minimum_for(tool).clone()))
            .collect()
    }
}
