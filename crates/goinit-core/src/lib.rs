//! Core of the goinit scaffolder: what a Go service skeleton contains and how
//! it is assembled.
//!
//! A [`Configuration`](domain::Configuration) fixes the layout, router,
//! logger, features and extra libraries.  From it the domain derives a
//! [`Manifest`](domain::Manifest) (ordered output paths and their templates)
//! and a [`DependencySet`](domain::DependencySet) (pinned `go.mod`
//! requirements).  The application services render the manifest through the
//! ports in [`application::ports`] and hand the result to an archive writer
//! or a filesystem:
//!
//! ```text
//! Configuration ──► Manifest ──► TemplateStore + TemplateRenderer ──► ProjectBundle
//!       │                                                                  │
//!       └──────────► DependencySet ──► go.mod / go.sum ───────────────────┤
//!                                                                          ▼
//!                                                        ArchiveWriter or Filesystem
//! ```
//!
//! Adapters for every port live in `goinit-adapters`; nothing in this crate
//! touches the disk directly.
//!
//! ```rust,ignore
//! use goinit_core::prelude::*;
//!
//! let config = Configuration::builder("myapi", "github.com/acme/myapi")
//!     .structure(Structure::Hexagonal)
//!     .router(Router::Chi)
//!     .build();
//!
//! let service = ScaffoldService::new(store, renderer, archive, filesystem);
//! let zip_bytes = service.generate(&config)?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// Everything a driver needs to build and run a scaffold.
pub mod prelude {
    pub use crate::application::{
        CatalogService, ScaffoldService,
        ports::{ArchiveWriter, Filesystem, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        Configuration, ConfigurationBuilder, DependencySet, Feature, Logger, Manifest,
        ProjectBundle, ProjectKind, Router, Structure, TemplateId,
    };
    pub use crate::error::{GoinitError, GoinitResult};
}
