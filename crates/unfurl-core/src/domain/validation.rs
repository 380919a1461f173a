use crate::domain::{
    entities::{ProjectPath, ScaffoldCatalog},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across call sites.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_catalog(catalog: &ScaffoldCatalog) -> Result<(), DomainError> {
        catalog.validate()
    }

    pub fn validate_path(path: &str) -> Result<ProjectPath, DomainError> {
        ProjectPath::try_new(path)
    }
}
