use crate::domain::{
    entities::ProjectStructure,
    error::DomainError,
    project_name::{NameValidator, ProjectName, ValidationReport},
    version::Version,
};

/// Centralized domain validation.
///
/// All validation entry points live here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_name(name: &str) -> ValidationReport {
        NameValidator::validate(name)
    }

    pub fn project_name(name: &str) -> Result<ProjectName, DomainError> {
        ProjectName::parse(name)
    }

    pub fn version(raw: &str) -> Result<Version, DomainError> {
        Version::parse(raw)
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
