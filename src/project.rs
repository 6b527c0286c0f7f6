//! In-memory model of the generated project.
//!
//! A [`Project`] is everything the renderer needs: the name and bundle
//! identity, the build settings, one identifier per structural object, and
//! one pair of identifiers per source file. It is built once from the config
//! and the discovered files, and never mutated afterwards.

use crate::config::{BuildConfig, ProjectConfig};
use crate::ids::{IdPool, ObjectId};
use crate::scan::SourceFile;

/// Identifiers for the fixed objects every generated project contains.
#[derive(Debug, Clone)]
pub struct ProjectIds {
    /// `PBXFileReference` for the built `.app`.
    pub product_ref: ObjectId,
    /// The `PBXProject` root object.
    pub project: ObjectId,
    pub main_group: ObjectId,
    pub products_group: ObjectId,
    /// The application `PBXNativeTarget`.
    pub target: ObjectId,
    pub project_config_list: ObjectId,
    pub target_config_list: ObjectId,
    pub project_debug: ObjectId,
    pub project_release: ObjectId,
    pub target_debug: ObjectId,
    pub target_release: ObjectId,
    pub sources_phase: ObjectId,
    pub frameworks_phase: ObjectId,
    pub resources_phase: ObjectId,
}

impl ProjectIds {
    /// Number of structural objects.
    pub const COUNT: usize = 14;

    pub fn allocate(pool: &mut IdPool) -> Self {
        Self {
            product_ref: pool.allocate(),
            project: pool.allocate(),
            main_group: pool.allocate(),
            products_group: pool.allocate(),
            target: pool.allocate(),
            project_config_list: pool.allocate(),
            target_config_list: pool.allocate(),
            project_debug: pool.allocate(),
            project_release: pool.allocate(),
            target_debug: pool.allocate(),
            target_release: pool.allocate(),
            sources_phase: pool.allocate(),
            frameworks_phase: pool.allocate(),
            resources_phase: pool.allocate(),
        }
    }

    pub fn all(&self) -> [&ObjectId; Self::COUNT] {
        [
            &self.product_ref,
            &self.project,
            &self.main_group,
            &self.products_group,
            &self.target,
            &self.project_config_list,
            &self.target_config_list,
            &self.project_debug,
            &self.project_release,
            &self.target_debug,
            &self.target_release,
            &self.sources_phase,
            &self.frameworks_phase,
            &self.resources_phase,
        ]
    }
}

/// A source file with its two identifiers.
///
/// `file_ref` keys the `PBXFileReference`; `build_file` keys the
/// `PBXBuildFile` that enrolls it in the Sources build phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFileEntry {
    pub name: String,
    pub relative_path: String,
    pub file_ref: ObjectId,
    pub build_file: ObjectId,
}

/// The complete model handed to the renderer.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub bundle_identifier: String,
    /// `lastKnownFileType` for the source file references.
    pub file_type: String,
    pub settings: BuildConfig,
    pub ids: ProjectIds,
    /// In discovery order (sorted by relative path).
    pub sources: Vec<SourceFileEntry>,
}

impl Project {
    /// Assign identifiers: structural objects first, then a file reference
    /// and a build file for each source, in order.
    pub fn new(config: &ProjectConfig, files: Vec<SourceFile>, pool: &mut IdPool) -> Self {
        let ids = ProjectIds::allocate(pool);
        let sources = files
            .into_iter()
            .map(|file| SourceFileEntry {
                file_ref: pool.allocate(),
                build_file: pool.allocate(),
                name: file.name,
                relative_path: file.relative_path,
            })
            .collect();

        Self {
            name: config.project.name.clone(),
            bundle_identifier: config.bundle_identifier(),
            file_type: config.sources.file_type.clone(),
            settings: config.build.clone(),
            ids,
            sources,
        }
    }

    /// File name of the built product, e.g. `Spotted.app`.
    pub fn product_name(&self) -> String {
        format!("{}.app", self.name)
    }

    /// Every identifier in the project, structural ones first.
    pub fn all_ids(&self) -> Vec<&ObjectId> {
        let mut ids: Vec<&ObjectId> = self.ids.all().to_vec();
        for entry in &self.sources {
            ids.push(&entry.file_ref);
            ids.push(&entry.build_file);
        }
        ids
    }
}
