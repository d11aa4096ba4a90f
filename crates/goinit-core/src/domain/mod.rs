//! Core domain layer for goinit.
//!
//! This module contains the pure scaffolding logic. Template lookup,
//! rendering, archiving and disk access are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: Observability lives in the application layer
//! - **Static tables**: layouts and version pins are `static` data
//! - **Immutable inputs**: a [`Configuration`] is never mutated after build
//!
// Public API - what the world sees
pub mod dependencies;
pub mod entities;
pub mod error;
pub mod go_mod;
pub mod layout;
pub mod manifest;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    configuration::{Configuration, ConfigurationBuilder, Feature},
    file_entry::{FileEntry, PROJECT_NAME_PLACEHOLDER, Predicate, TemplateId},
    project_bundle::{BundleFile, ProjectBundle},
};

pub use dependencies::{DependencySet, Pin, PinGroup};
pub use error::{DomainError, ErrorCategory};
pub use manifest::{GO_MOD, GO_SUM, Manifest, ManifestEntry};
pub use validation::DomainValidator;

pub use value_objects::{Logger, ProjectKind, Router, Structure};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Selector Tests
    // ========================================================================

    #[test]
    fn structure_parses_with_aliases() {
        assert_eq!(Structure::from_str("hexagonal").unwrap(), Structure::Hexagonal);
        assert_eq!(Structure::from_str("HEX").unwrap(), Structure::Hexagonal);
        assert_eq!(Structure::from_str("feature-based").unwrap(), Structure::Feature);
        assert!(Structure::from_str("microservices").is_err());
    }

    #[test]
    fn unknown_structure_selector_falls_back_to_standard() {
        assert_eq!(Structure::from_selector("microservices"), Structure::Standard);
        assert_eq!(Structure::from_selector(""), Structure::Standard);
        assert_eq!(Structure::from_selector("flat"), Structure::Flat);
    }

    #[test]
    fn unknown_router_and_logger_fall_back_to_stdlib() {
        assert_eq!(Router::from_selector("gorilla"), Router::Stdlib);
        assert_eq!(Logger::from_selector("glog"), Logger::Stdlib);
        assert_eq!(Router::from_selector("Gin"), Router::Gin);
    }

    #[test]
    fn project_kind_is_strict() {
        assert_eq!(ProjectKind::from_str("rest-api").unwrap(), ProjectKind::RestApi);
        assert_eq!(ProjectKind::from_str("rpc-service").unwrap(), ProjectKind::Grpc);

        let err = ProjectKind::from_str("daemon").unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownSelector {
                field: "project type",
                value: "daemon".into()
            }
        );
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn selectors_round_trip_through_display() {
        for s in Structure::ALL {
            assert_eq!(Structure::from_str(&s.to_string()).unwrap(), s);
        }
        for k in ProjectKind::ALL {
            assert_eq!(ProjectKind::from_str(&k.to_string()).unwrap(), k);
        }
        for r in Router::ALL {
            assert_eq!(Router::from_str(r.as_str()).unwrap(), r);
        }
        for l in Logger::ALL {
            assert_eq!(Logger::from_str(l.as_str()).unwrap(), l);
        }
    }

    #[test]
    fn unknown_selector_suggests_values() {
        let err = Router::from_str("gorilla").unwrap_err();
        let suggestions = err.suggestions();

        assert!(suggestions.iter().any(|s| s.contains("chi, gin, echo")));
    }

    // ========================================================================
    // End-to-end domain flow (no ports)
    // ========================================================================

    #[test]
    fn manifest_and_dependencies_agree_on_configuration() {
        let config = Configuration::builder("myapi", "example.com/myapi")
            .go_version("1.26.0")
            .structure(Structure::Hexagonal)
            .router(Router::Chi)
            .logger(Logger::Zerolog)
            .features([Feature::StructuredLogging, Feature::Docker])
            .build();

        let manifest = Manifest::for_config(&config);
        let deps = dependencies::resolve(&config);
        let go_mod = go_mod::render(config.module(), config.go_version(), &deps);

        assert!(
            manifest
                .preview_paths()
                .contains(&"internal/infrastructure/logger/logger.go".to_string())
        );
        assert!(go_mod.starts_with("module example.com/myapi\n\ngo 1.26.0\n"));
        assert!(go_mod.contains("\tgithub.com/google/uuid v1.5.0\n"));
        assert!(go_mod.contains("\tgithub.com/rs/zerolog v1.32.0\n"));
    }
}
