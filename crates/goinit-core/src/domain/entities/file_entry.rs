//! File entries: one declarative row of a layout.
//!
//! A [`FileEntry`] binds a template to an output path and, optionally, to a
//! predicate over the [`Configuration`]. Entries are `const`-constructible so
//! that every layout variant is a plain `static` array.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::domain::entities::configuration::Configuration;

/// Placeholder replaced by the project name in output path patterns.
pub const PROJECT_NAME_PLACEHOLDER: &str = "{project_name}";

/// Inclusion predicate of a conditional entry.
pub type Predicate = fn(&Configuration) -> bool;

// ── TemplateId ───────────────────────────────────────────────────────────────

/// Opaque key of a template in a template store (e.g. `standard/Makefile.tmpl`).
///
/// Ids are compared by value; the same id may appear in several layouts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TemplateId(Cow<'static, str>);

impl TemplateId {
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TemplateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TemplateId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TemplateId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

// ── FileEntry ────────────────────────────────────────────────────────────────

/// One output file of a layout variant.
#[derive(Debug, Clone)]
pub struct FileEntry {
    template: TemplateId,
    output: &'static str,
    predicate: Option<Predicate>,
}

impl FileEntry {
    /// An entry included for every configuration.
    pub const fn always(template: &'static str, output: &'static str) -> Self {
        Self {
            template: TemplateId::from_static(template),
            output,
            predicate: None,
        }
    }

    /// An entry included only when `predicate` holds.
    pub const fn when(template: &'static str, output: &'static str, predicate: Predicate) -> Self {
        Self {
            template: TemplateId::from_static(template),
            output,
            predicate: Some(predicate),
        }
    }

    pub fn template(&self) -> &TemplateId {
        &self.template
    }

    /// Output path pattern, possibly containing [`PROJECT_NAME_PLACEHOLDER`].
    pub const fn output_pattern(&self) -> &'static str {
        self.output
    }

    pub const fn is_conditional(&self) -> bool {
        self.predicate.is_some()
    }

    /// Absent predicate means "always".
    pub fn applies_to(&self, config: &Configuration) -> bool {
        self.predicate.is_none_or(|predicate| predicate(config))
    }

    /// Output path with the placeholder substituted.
    pub fn output_path(&self, project_name: &str) -> String {
        self.output.replace(PROJECT_NAME_PLACEHOLDER, project_name)
    }
}
