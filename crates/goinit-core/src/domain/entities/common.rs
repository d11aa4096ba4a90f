use std::fmt;
use std::path::Path;

use crate::domain::error::DomainError;

/// A `/`-separated path guaranteed to be relative.
///
/// Bundle paths end up both as archive entry names and as paths below an
/// output directory, so they are stored as plain strings with forward
/// slashes and never start at a filesystem root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(String);

impl RelativePath {
    pub fn try_new(path: impl Into<String>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.starts_with('/') || Path::new(&path).is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed { path });
        }
        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
