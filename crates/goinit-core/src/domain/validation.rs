use std::path::{Component, Path};

use crate::domain::{
    entities::{Configuration, ProjectBundle},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    /// Project name and module path must both be non-blank, and the name
    /// must be a single path component.
    ///
    /// Generation itself accepts any configuration and roots files under the
    /// name verbatim; callers that write an archive or a directory for a user
    /// run this first.
    pub fn require_identity(config: &Configuration) -> Result<(), DomainError> {
        let name = config.project_name();
        if name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "project name",
            });
        }
        if !is_single_component(name) {
            return Err(DomainError::InvalidProjectName {
                name: name.to_string(),
            });
        }
        if config.module().trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "module" });
        }
        Ok(())
    }

    pub fn validate_bundle(bundle: &ProjectBundle) -> Result<(), DomainError> {
        bundle.validate()
    }
}

fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    !name.contains(['/', '\\'])
        && matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_requires_name() {
        let config = Configuration::builder("  ", "example.com/svc").build();
        assert_eq!(
            DomainValidator::require_identity(&config),
            Err(DomainError::MissingRequiredField {
                field: "project name"
            })
        );
    }

    #[test]
    fn identity_requires_module() {
        let config = Configuration::builder("svc", "").build();
        assert_eq!(
            DomainValidator::require_identity(&config),
            Err(DomainError::MissingRequiredField { field: "module" })
        );
    }

    #[test]
    fn identity_rejects_names_that_leave_the_output_dir() {
        for name in ["/x", "../up", "a/b", "a\\b", ".", ".."] {
            let config = Configuration::builder(name, "example.com/svc").build();
            assert_eq!(
                DomainValidator::require_identity(&config),
                Err(DomainError::InvalidProjectName { name: name.into() }),
                "{name}"
            );
        }
    }

    #[test]
    fn identity_allows_unusual_single_names() {
        for name in ["a b:c", "my-api", "svc.v2"] {
            let config = Configuration::builder(name, "example.com/svc").build();
            assert!(DomainValidator::require_identity(&config).is_ok(), "{name}");
        }
    }

    #[test]
    fn identity_accepts_both() {
        let config = Configuration::builder("svc", "example.com/svc").build();
        assert!(DomainValidator::require_identity(&config).is_ok());
    }
}
