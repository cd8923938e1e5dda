use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Result of sanitizing an archive entry path.
#[derive(Clone, Debug)]
pub struct SanitizedPath {
    pub original: PathBuf,
    pub relative: PathBuf,
    pub resolved: PathBuf,
}

/// Resolve an archive entry path under `base`.
///
/// Absolute entries and `..` components that climb above `base` are
/// rejected as zip-slip. Entries that resolve to `base` itself are invalid.
pub fn sanitize_path<P: AsRef<Path>, B: AsRef<Path>>(entry_path: P, base: B) -> Result<SanitizedPath> {
    let entry_path = entry_path.as_ref();
    let base = base.as_ref();

    if entry_path.as_os_str().is_empty() {
        return Err(Error::InvalidPath {
            path: entry_path.to_path_buf(),
        });
    }

    let relative = normalize_relative(entry_path).ok_or_else(|| Error::ZipSlip {
        entry: entry_path.to_path_buf(),
        base: base.to_path_buf(),
    })?;

    if relative.as_os_str().is_empty() {
        return Err(Error::InvalidPath {
            path: entry_path.to_path_buf(),
        });
    }

    Ok(SanitizedPath {
        original: entry_path.to_path_buf(),
        resolved: base.join(&relative),
        relative,
    })
}

/// Fold `.` and `..` away. `None` when the path is rooted or escapes.
fn normalize_relative(path: &Path) -> Option<PathBuf> {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Normal(part) => result.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    return None;
                }
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    Some(result)
}
