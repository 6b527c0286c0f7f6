//! Project bundle generation.
//!
//! The one operation pbxgen exists for: scan the source tree, assign
//! identifiers, render the documents, and write the bundle.
//!
//! ## Output Structure
//!
//! ```text
//! <output>/
//! └── MyApp.xcodeproj/
//!     ├── project.pbxproj
//!     ├── project.xcworkspace/
//!     │   ├── contents.xcworkspacedata
//!     │   └── xcshareddata/
//!     │       └── IDEWorkspaceChecks.plist
//!     └── xcuserdata/
//! ```
//!
//! ## Failure Behavior
//!
//! The scan runs before anything is created, so a bad scan root leaves the
//! output untouched. After that, directories are created and the three files
//! written in order; the first failure aborts the run and anything already
//! written stays on disk. An existing `project.pbxproj` is always replaced:
//! the bundle is a derived artifact and the report says when that happened.

use crate::config::{ConfigError, ProjectConfig};
use crate::ids::IdPool;
use crate::project::Project;
use crate::render;
use crate::scan::{self, ScanError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("scan root unavailable: {0}")]
    ScanRootUnavailable(#[from] ScanError),
    #[error("output unwritable: {}: {source}", .path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Everything one generation run needs.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Directory searched for source files.
    pub scan_root: PathBuf,
    /// Directory the `.xcodeproj` bundle is created in.
    pub output_root: PathBuf,
    pub config: ProjectConfig,
}

/// Paths of everything inside one project bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleLayout {
    pub bundle_dir: PathBuf,
    pub workspace_dir: PathBuf,
    pub shared_data_dir: PathBuf,
    pub user_data_dir: PathBuf,
    pub pbxproj: PathBuf,
    pub workspace_contents: PathBuf,
    pub workspace_checks: PathBuf,
}

impl BundleLayout {
    pub fn new(output_root: &Path, project_name: &str) -> Self {
        let bundle_dir = output_root.join(format!("{project_name}.xcodeproj"));
        let workspace_dir = bundle_dir.join("project.xcworkspace");
        let shared_data_dir = workspace_dir.join("xcshareddata");
        Self {
            pbxproj: bundle_dir.join("project.pbxproj"),
            workspace_contents: workspace_dir.join("contents.xcworkspacedata"),
            workspace_checks: shared_data_dir.join("IDEWorkspaceChecks.plist"),
            user_data_dir: bundle_dir.join("xcuserdata"),
            bundle_dir,
            workspace_dir,
            shared_data_dir,
        }
    }

    /// Directories to create, parents first.
    pub fn directories(&self) -> [&Path; 4] {
        [
            &self.bundle_dir,
            &self.workspace_dir,
            &self.shared_data_dir,
            &self.user_data_dir,
        ]
    }
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub project: Project,
    pub layout: BundleLayout,
    /// Files written, in write order.
    pub written: Vec<PathBuf>,
    /// An earlier `project.pbxproj` was overwritten.
    pub replaced_existing: bool,
}

impl GenerateReport {
    pub fn file_count(&self) -> usize {
        self.project.sources.len()
    }
}

pub fn generate(request: &GenerateRequest) -> Result<GenerateReport, GenerateError> {
    request.config.validate()?;

    let files = scan::discover(&request.scan_root, &request.config.sources.extension)?;

    let mut pool = IdPool::from_seed(request.config.identifiers.seed.as_deref());
    let project = Project::new(&request.config, files, &mut pool);
    let rendered = render::render_bundle(&project);

    let layout = BundleLayout::new(&request.output_root, &project.name);
    let replaced_existing = layout.pbxproj.is_file();

    for dir in layout.directories() {
        fs::create_dir_all(dir).map_err(|source| unwritable(dir, source))?;
    }

    let documents = [
        (&layout.pbxproj, &rendered.pbxproj),
        (&layout.workspace_contents, &rendered.workspace_contents),
        (&layout.workspace_checks, &rendered.workspace_checks),
    ];
    let mut written = Vec::with_capacity(documents.len());
    for (path, contents) in documents {
        fs::write(path, contents).map_err(|source| unwritable(path, source))?;
        written.push(path.clone());
    }

    Ok(GenerateReport {
        project,
        layout,
        written,
        replaced_existing,
    })
}

fn unwritable(path: &Path, source: io::Error) -> GenerateError {
    GenerateError::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    }
}
