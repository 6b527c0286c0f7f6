//! Shared test utilities for the pbxgen test suite.
//!
//! Provides fixture builders (source trees on disk, configs, projects) and
//! small text probes for the rendered project file. The probes are just
//! enough to check cross-references; they are not a pbxproj parser.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_tree(tmp.path(), &["App.swift", "Views/Home.swift"]);
//!
//! let text = render_pbxproj(&sample_project(&["App.swift"]));
//! for id in referenced_ids(&text) {
//!     assert!(defined_ids(&text).contains(id));
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::config::ProjectConfig;
use crate::ids::{ID_LEN, IdPool};
use crate::project::Project;
use crate::scan::SourceFile;

// =========================================================================
// Fixture setup
// =========================================================================

/// Create each relative path under `root` as a small file, with parents.
pub fn write_tree(root: &Path, paths: &[&str]) {
    for rel in paths {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, format!("// {rel}\n")).unwrap();
    }
}

/// Stock config with the given project name.
pub fn named_config(name: &str) -> ProjectConfig {
    let mut config = ProjectConfig::default();
    config.project.name = name.to_string();
    config
}

/// Discovery results for the given relative paths, without touching disk.
pub fn source_files(paths: &[&str]) -> Vec<SourceFile> {
    paths
        .iter()
        .map(|rel| SourceFile {
            name: rel.rsplit('/').next().unwrap_or(rel).to_string(),
            relative_path: rel.to_string(),
        })
        .collect()
}

/// A project named `App` with random identifiers.
pub fn sample_project(paths: &[&str]) -> Project {
    Project::new(&named_config("App"), source_files(paths), &mut IdPool::random())
}

// =========================================================================
// Rendered text probes
// =========================================================================

fn is_id(token: &str) -> bool {
    token.len() == ID_LEN && token.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F'))
}

/// All identifier-shaped tokens in the text, in order of appearance.
pub fn referenced_ids(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| is_id(token))
        .collect()
}

/// The identifier an object definition line introduces, if any.
///
/// Definitions sit at exactly two tabs of indentation and start with the id.
pub fn definition_id(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("\t\t")?;
    let id = rest.get(..ID_LEN)?;
    let tail = &rest[ID_LEN..];
    (is_id(id) && tail.starts_with(' ')).then_some(id)
}

/// Identifiers that have a defining entry.
pub fn defined_ids(text: &str) -> HashSet<&str> {
    text.lines().filter_map(definition_id).collect()
}

/// Replace every identifier with a placeholder, leaving only the shape.
pub fn mask_ids(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut token = String::new();
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            token.push(c);
            continue;
        }
        out.push_str(if is_id(&token) { "<ID>" } else { token.as_str() });
        token.clear();
        out.push(c);
    }
    out.push_str(if is_id(&token) { "<ID>" } else { token.as_str() });
    out
}

/// Number of lines containing `needle`.
pub fn lines_containing(text: &str, needle: &str) -> usize {
    text.lines().filter(|line| line.contains(needle)).count()
}
