//! Source file discovery.
//!
//! First stage of generation. Walks the scan root recursively and collects
//! every file whose name ends with the configured extension (`.swift` by
//! default).
//!
//! ## Paths
//!
//! Each discovered file keeps its path relative to the scan root, joined with
//! `/` regardless of platform. That string goes verbatim into the file
//! reference's `path` value; case and extension are never touched.
//!
//! ```text
//! MyApp/                         # scan root
//! ├── App/MyApp.swift            → "App/MyApp.swift"
//! ├── Data/Models/User.swift     → "Data/Models/User.swift"
//! ├── Assets.xcassets/           (ignored: not a .swift file)
//! └── README.md                  (ignored)
//! ```
//!
//! ## Ordering
//!
//! Results are sorted by relative path, so the generated document does not
//! depend on filesystem enumeration order and diffs cleanly between runs.
//!
//! ## Failure
//!
//! Any failure to read the root or a directory below it aborts the scan.
//! A partial file list would silently drop sources from the build. So does
//! an eligible file whose path is not valid UTF-8: it cannot be recorded
//! verbatim, and a lossy path would point at a file that does not exist.

use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot read {}: {source}", .path.display())]
    RootUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("traversal failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
}

/// A discovered source file, before identifiers are assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    /// File name, e.g. `User.swift`.
    pub name: String,
    /// Path relative to the scan root with `/` separators.
    pub relative_path: String,
}

/// Walk `root` and return every file whose name ends with `.<extension>`,
/// sorted by relative path.
pub fn discover(root: &Path, extension: &str) -> Result<Vec<SourceFile>, ScanError> {
    let metadata = fs::metadata(root).map_err(|source| ScanError::RootUnavailable {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let mut files = Vec::new();

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry?;
        if !is_file(&entry) {
            continue;
        }
        if !entry
            .file_name()
            .as_encoded_bytes()
            .ends_with(suffix.as_bytes())
        {
            continue;
        }
        let non_utf8 = || ScanError::NonUtf8Path(entry.path().to_path_buf());
        let name = entry.file_name().to_str().ok_or_else(non_utf8)?.to_string();
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        files.push(SourceFile {
            name,
            relative_path: to_slash_path(relative).ok_or_else(non_utf8)?,
        });
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(files)
}

/// Regular files, and symlinks that resolve to one.
fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// Join path components with `/`. `None` if any component is not UTF-8.
fn to_slash_path(path: &Path) -> Option<String> {
    let parts = path
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}
