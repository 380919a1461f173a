use super::DomainError;
use std::fmt;
use std::path::{Component, Path};

/// A path guaranteed to stay inside the directory it is joined onto.
///
/// Invariant: non-empty, relative, no root or drive prefix, no `..`
/// components. Enforced at construction.
///
/// The stored form is canonical: `.` segments, repeated separators and
/// trailing separators are dropped, so `./app//page.tsx` and `app/page.tsx`
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectPath(String);

impl ProjectPath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<String>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.trim().is_empty() {
            return Err(DomainError::EmptyPath);
        }

        let unsafe_reason = Path::new(&path)
            .components()
            .find_map(|component| match component {
                Component::Prefix(_) => Some("has a drive or UNC prefix"),
                Component::RootDir => Some("is absolute"),
                Component::ParentDir => Some("contains a parent-directory segment"),
                Component::CurDir | Component::Normal(_) => None,
            });
        if let Some(reason) = unsafe_reason {
            return Err(DomainError::UnsafePath {
                path,
                reason: reason.into(),
            });
        }

        // `Path::components` does not treat a leading backslash as a root on
        // unix, but the output may be consumed on Windows.
        if path.starts_with('\\') || path.split(['/', '\\']).any(|seg| seg == "..") {
            return Err(DomainError::UnsafePath {
                path,
                reason: "contains a parent-directory segment or a root".into(),
            });
        }

        let canonical = Path::new(&path)
            .components()
            .filter_map(|component| match component {
                Component::Normal(segment) => Some(segment.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/");
        if canonical.is_empty() {
            return Err(DomainError::EmptyPath);
        }

        Ok(Self(canonical))
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for ProjectPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
