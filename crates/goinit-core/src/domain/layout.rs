//! Layout registry: the static file tables of every structure variant.
//!
//! Each variant is an ordered `static` slice of [`FileEntry`]. Declaration
//! order is the order files appear in previews and archives.
//!
//! Files that several variants share (`.gitignore`, `Makefile`, the Docker
//! files, the CI workflow, ...) reference the same `standard/...` template id
//! from every variant, so a single template serves them all.

use crate::domain::entities::{
    configuration::Configuration,
    file_entry::{FileEntry, TemplateId},
};
use crate::domain::value_objects::{ProjectKind, Router, Structure};

// ── Shared template ids ──────────────────────────────────────────────────────

const README: &str = "standard/README.md.tmpl";
const MAKEFILE: &str = "standard/Makefile.tmpl";
const GITIGNORE: &str = "standard/gitignore.tmpl";
const ENV_EXAMPLE: &str = "standard/env.example.tmpl";
const DOCKERFILE: &str = "standard/Dockerfile.tmpl";
const DOCKER_COMPOSE: &str = "standard/docker-compose.yaml.tmpl";
const GITHUB_CI: &str = "standard/github_ci.yaml.tmpl";
const CONFIG: &str = "standard/internal_config.go.tmpl";
const LOGGER: &str = "standard/pkg_logger.go.tmpl";

// ── Predicates ───────────────────────────────────────────────────────────────

fn is_rest_api(c: &Configuration) -> bool {
    c.project_type() == ProjectKind::RestApi
}

fn uses_config(c: &Configuration) -> bool {
    c.use_config()
}

fn uses_logger(c: &Configuration) -> bool {
    c.use_logger()
}

fn uses_chi_logging_middleware(c: &Configuration) -> bool {
    c.use_logger() && c.router() == Router::Chi
}

fn uses_docker(c: &Configuration) -> bool {
    c.use_docker()
}

fn uses_github(c: &Configuration) -> bool {
    c.use_github()
}

// ── Variant tables ───────────────────────────────────────────────────────────

static STANDARD: [FileEntry; 12] = [
    FileEntry::always("standard/cmd_main.go.tmpl", "cmd/{project_name}/main.go"),
    FileEntry::when(
        "standard/internal_handler.go.tmpl",
        "internal/handler/handler.go",
        is_rest_api,
    ),
    FileEntry::when(CONFIG, "internal/config/config.go", uses_config),
    FileEntry::when(
        "standard/internal_middleware.go.tmpl",
        "internal/middleware/logger.go",
        uses_chi_logging_middleware,
    ),
    FileEntry::when(LOGGER, "pkg/logger/logger.go", uses_logger),
    FileEntry::always(README, "README.md"),
    FileEntry::always(MAKEFILE, "Makefile"),
    FileEntry::always(GITIGNORE, ".gitignore"),
    FileEntry::always(ENV_EXAMPLE, ".env.example"),
    FileEntry::when(DOCKERFILE, "Dockerfile", uses_docker),
    FileEntry::when(DOCKER_COMPOSE, "docker-compose.yaml", uses_docker),
    FileEntry::when(GITHUB_CI, ".github/workflows/ci.yml", uses_github),
];

static FLAT: [FileEntry; 4] = [
    FileEntry::always("flat/main.go.tmpl", "main.go"),
    FileEntry::always("flat/README.md.tmpl", "README.md"),
    FileEntry::always(GITIGNORE, ".gitignore"),
    FileEntry::when(DOCKERFILE, "Dockerfile", uses_docker),
];

static FEATURE: [FileEntry; 13] = [
    FileEntry::always("feature/cmd_main.go.tmpl", "cmd/{project_name}/main.go"),
    FileEntry::always("feature/user_handler.go.tmpl", "internal/user/handler.go"),
    FileEntry::always("feature/user_service.go.tmpl", "internal/user/service.go"),
    FileEntry::always(
        "feature/user_repository.go.tmpl",
        "internal/user/repository.go",
    ),
    FileEntry::always("feature/user_model.go.tmpl", "internal/user/model.go"),
    FileEntry::always(CONFIG, "pkg/config/config.go"),
    FileEntry::when(LOGGER, "pkg/logger/logger.go", uses_logger),
    FileEntry::always(README, "README.md"),
    FileEntry::always(MAKEFILE, "Makefile"),
    FileEntry::always(GITIGNORE, ".gitignore"),
    FileEntry::always(ENV_EXAMPLE, ".env.example"),
    FileEntry::when(DOCKERFILE, "Dockerfile", uses_docker),
    FileEntry::when(DOCKER_COMPOSE, "docker-compose.yaml", uses_docker),
];

static HEXAGONAL: [FileEntry; 15] = [
    FileEntry::always("hexagonal/cmd_main.go.tmpl", "cmd/{project_name}/main.go"),
    FileEntry::always(
        "hexagonal/domain_user.go.tmpl",
        "internal/core/domain/user.go",
    ),
    FileEntry::always(
        "hexagonal/port_repository.go.tmpl",
        "internal/core/port/repository.go",
    ),
    FileEntry::always(
        "hexagonal/service_user.go.tmpl",
        "internal/core/service/user.go",
    ),
    FileEntry::when(
        "hexagonal/adapter_http_handler.go.tmpl",
        "internal/adapters/http/handler/user.go",
        is_rest_api,
    ),
    FileEntry::always(
        "hexagonal/adapter_repository.go.tmpl",
        "internal/adapters/repository/user.go",
    ),
    FileEntry::always(
        "hexagonal/infra_config.go.tmpl",
        "internal/infrastructure/config/config.go",
    ),
    FileEntry::when(
        "hexagonal/infra_logger.go.tmpl",
        "internal/infrastructure/logger/logger.go",
        uses_logger,
    ),
    FileEntry::always("hexagonal/README.md.tmpl", "README.md"),
    FileEntry::always(MAKEFILE, "Makefile"),
    FileEntry::always(GITIGNORE, ".gitignore"),
    FileEntry::always(ENV_EXAMPLE, ".env.example"),
    FileEntry::when(DOCKERFILE, "Dockerfile", uses_docker),
    FileEntry::when(DOCKER_COMPOSE, "docker-compose.yaml", uses_docker),
    FileEntry::when(GITHUB_CI, ".github/workflows/ci.yml", uses_github),
];

// ── Lookup ───────────────────────────────────────────────────────────────────

/// File table of a structure variant.
pub fn entries(structure: Structure) -> &'static [FileEntry] {
    match structure {
        Structure::Standard => &STANDARD,
        Structure::Flat => &FLAT,
        Structure::Feature => &FEATURE,
        Structure::Hexagonal => &HEXAGONAL,
    }
}

/// File table for a raw selector string. Unknown selectors get the standard
/// table.
pub fn entries_for_selector(selector: &str) -> &'static [FileEntry] {
    entries(Structure::from_selector(selector))
}

/// Every distinct template id referenced by any variant, in first-seen order.
pub fn referenced_templates() -> Vec<TemplateId> {
    let mut seen = Vec::new();
    for structure in Structure::ALL {
        for entry in entries(structure) {
            if !seen.contains(entry.template()) {
                seen.push(entry.template().clone());
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::entities::configuration::Feature;
    use crate::domain::value_objects::Logger;

    /// Every subset of the feature toggles.
    fn all_toggle_sets() -> impl Iterator<Item = Vec<Feature>> {
        (0u32..1 << Feature::ALL.len()).map(|mask| {
            Feature::ALL
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, f)| *f)
                .collect()
        })
    }

    #[test]
    fn variant_sizes() {
        assert_eq!(entries(Structure::Standard).len(), 12);
        assert_eq!(entries(Structure::Flat).len(), 4);
        assert_eq!(entries(Structure::Feature).len(), 13);
        assert_eq!(entries(Structure::Hexagonal).len(), 15);
    }

    #[test]
    fn unknown_selector_yields_standard_table() {
        let unknown = entries_for_selector("microservices");
        let standard = entries(Structure::Standard);

        assert_eq!(unknown.len(), standard.len());
        assert!(std::ptr::eq(unknown, standard));
    }

    #[test]
    fn no_duplicate_output_paths_for_any_combination() {
        for structure in Structure::ALL {
            for kind in ProjectKind::ALL {
                for router in Router::ALL {
                    for toggles in all_toggle_sets() {
                        let config = Configuration::builder("svc", "example.com/svc")
                            .structure(structure)
                            .project_type(kind)
                            .router(router)
                            .features(toggles.clone())
                            .build();

                        let mut seen = HashSet::new();
                        for entry in entries(structure).iter().filter(|e| e.applies_to(&config)) {
                            let path = entry.output_path(config.project_name());
                            assert!(
                                seen.insert(path.clone()),
                                "{structure}/{kind}/{router}/{toggles:?}: duplicate {path}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn cross_cutting_files_share_template_ids() {
        let id_for = |structure: Structure, output: &str| {
            entries(structure)
                .iter()
                .find(|e| e.output_pattern() == output)
                .map(|e| e.template().clone())
        };

        for structure in Structure::ALL {
            assert_eq!(
                id_for(structure, ".gitignore"),
                Some(TemplateId::from_static(GITIGNORE))
            );
            assert_eq!(
                id_for(structure, "Dockerfile"),
                Some(TemplateId::from_static(DOCKERFILE))
            );
        }
        assert_eq!(
            id_for(Structure::Hexagonal, ".github/workflows/ci.yml"),
            id_for(Structure::Standard, ".github/workflows/ci.yml")
        );
    }

    #[test]
    fn middleware_requires_logger_and_chi() {
        let middleware = |router: Router, logger: bool| {
            let config = Configuration::builder("svc", "m")
                .router(router)
                .logger(Logger::Zap)
                .feature(Feature::StructuredLogging, logger)
                .build();
            entries(Structure::Standard)
                .iter()
                .any(|e| e.output_pattern() == "internal/middleware/logger.go" && e.applies_to(&config))
        };

        assert!(middleware(Router::Chi, true));
        assert!(!middleware(Router::Chi, false));
        assert!(!middleware(Router::Gin, true));
    }

    #[test]
    fn referenced_templates_are_distinct() {
        let ids = referenced_templates();
        let unique: HashSet<_> = ids.iter().collect();

        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids.len(), 28);
    }
}
