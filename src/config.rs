//! Project configuration module.
//!
//! Handles loading, validating, and layering `pbxgen.toml`. Values resolve in
//! three layers, each overriding the one before:
//!
//! ```text
//! stock defaults  →  pbxgen.toml  →  CLI flags (--name, --seed)
//! ```
//!
//! ## Config File Location
//!
//! By default `pbxgen.toml` is read from the project directory (the
//! `--output` directory, next to the generated `.xcodeproj`). `--config`
//! points at a file anywhere else.
//!
//! ```text
//! MyApp/                     # project directory (--output)
//! ├── pbxgen.toml            # optional
//! ├── MyApp.xcodeproj/       # generated
//! └── MyApp/                 # scanned for sources (default)
//!     ├── App/MyApp.swift
//!     └── ...
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [project]
//! name = ""                     # required here or via --name
//! bundle_identifier = ""        # empty = com.<name>.app
//!
//! [sources]
//! dir = ""                      # empty = <project dir>/<name>
//! extension = "swift"
//! file_type = "sourcecode.swift"
//!
//! [build]
//! deployment_target = "17.0"
//! swift_version = "5.0"
//! marketing_version = "1.0"
//! build_number = "1"
//! development_team = ""
//! device_family = "1,2"
//!
//! [identifiers]
//! # seed = "MyApp"              # reproducible object ids
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the project directory.
pub const CONFIG_FILENAME: &str = "pbxgen.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Project configuration loaded from `pbxgen.toml`.
///
/// All fields have defaults matching a stock SwiftUI iOS app target. Config
/// files need only specify the values they want to override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project name and bundle identity.
    pub project: ProjectInfo,
    /// Where and what to scan.
    pub sources: SourcesConfig,
    /// Build settings embedded in the configurations.
    pub build: BuildConfig,
    /// Object identifier generation.
    pub identifiers: IdentifiersConfig,
}

impl ProjectConfig {
    /// Validate config values are usable for generation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = self.project.name.trim();
        if name.is_empty() {
            return Err(ConfigError::Validation(
                "project.name must not be empty (set it in pbxgen.toml or pass --name)".into(),
            ));
        }
        if name != self.project.name {
            return Err(ConfigError::Validation(
                "project.name must not have leading or trailing whitespace".into(),
            ));
        }
        if name == "." || name == ".." || name.contains(['/', '\\', '\0']) {
            return Err(ConfigError::Validation(format!(
                "project.name {name:?} is not a valid file name"
            )));
        }
        let ext = self.sources.extension.trim_start_matches('.');
        if ext.is_empty() || ext.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "sources.extension must be a non-empty file extension".into(),
            ));
        }
        if self.sources.file_type.is_empty() {
            return Err(ConfigError::Validation(
                "sources.file_type must not be empty".into(),
            ));
        }
        if self.build.deployment_target.is_empty() || self.build.swift_version.is_empty() {
            return Err(ConfigError::Validation(
                "build.deployment_target and build.swift_version must not be empty".into(),
            ));
        }
        let family_ok = self
            .build
            .device_family
            .split(',')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));
        if !family_ok {
            return Err(ConfigError::Validation(format!(
                "build.device_family must be comma-separated numbers, got {:?}",
                self.build.device_family
            )));
        }
        Ok(())
    }

    /// The bundle identifier: explicit, or derived as `com.<name>.app`.
    ///
    /// The derived form lowercases the name and replaces anything other than
    /// ASCII alphanumerics and `-` with `-`.
    pub fn bundle_identifier(&self) -> String {
        if !self.project.bundle_identifier.is_empty() {
            return self.project.bundle_identifier.clone();
        }
        let slug: String = self
            .project
            .name
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        format!("com.{slug}.app")
    }

    /// The directory to scan, resolved against the project directory.
    pub fn scan_root(&self, project_dir: &Path) -> PathBuf {
        if self.sources.dir.is_empty() {
            project_dir.join(&self.project.name)
        } else {
            project_dir.join(&self.sources.dir)
        }
    }
}

/// Project name and bundle identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectInfo {
    /// Display name; also names the `.xcodeproj` bundle and the `.app` product.
    pub name: String,
    /// Explicit `PRODUCT_BUNDLE_IDENTIFIER`. Empty derives `com.<name>.app`.
    pub bundle_identifier: String,
}

/// Source discovery settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourcesConfig {
    /// Scan root relative to the project directory. Empty means `<name>/`.
    pub dir: String,
    /// File name suffix (without the dot) that marks an eligible source file.
    pub extension: String,
    /// `lastKnownFileType` recorded on every file reference.
    pub file_type: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            extension: "swift".to_string(),
            file_type: "sourcecode.swift".to_string(),
        }
    }
}

/// Build settings written into the target configurations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// `IPHONEOS_DEPLOYMENT_TARGET`.
    pub deployment_target: String,
    /// `SWIFT_VERSION`.
    pub swift_version: String,
    /// `MARKETING_VERSION`.
    pub marketing_version: String,
    /// `CURRENT_PROJECT_VERSION`.
    pub build_number: String,
    /// `DEVELOPMENT_TEAM`. Empty leaves signing to be picked in Xcode.
    pub development_team: String,
    /// `TARGETED_DEVICE_FAMILY` (1 = iPhone, 2 = iPad).
    pub device_family: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            deployment_target: "17.0".to_string(),
            swift_version: "5.0".to_string(),
            marketing_version: "1.0".to_string(),
            build_number: "1".to_string(),
            development_team: String::new(),
            device_family: "1,2".to_string(),
        }
    }
}

/// Object identifier generation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentifiersConfig {
    /// When set, identifiers are derived from this seed and are reproducible.
    /// When absent, every run draws fresh random identifiers.
    pub seed: Option<String>,
}

/// Values supplied on the command line. `None` leaves lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub name: Option<String>,
    pub seed: Option<String>,
}

impl Overrides {
    /// Express the overrides as a sparse TOML overlay.
    pub fn to_toml(&self) -> Option<toml::Value> {
        let mut root = toml::map::Map::new();
        if let Some(name) = &self.name {
            let mut project = toml::map::Map::new();
            project.insert("name".into(), toml::Value::String(name.clone()));
            root.insert("project".into(), toml::Value::Table(project));
        }
        if let Some(seed) = &self.seed {
            let mut identifiers = toml::map::Map::new();
            identifiers.insert("seed".into(), toml::Value::String(seed.clone()));
            root.insert("identifiers".into(), toml::Value::Table(identifiers));
        }
        if root.is_empty() {
            None
        } else {
            Some(toml::Value::Table(root))
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer every other layer is merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(ProjectConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a TOML file as a raw value.
pub fn read_toml_file(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load `pbxgen.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `pbxgen.toml`.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    read_toml_file(&config_path).map(Some)
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<ProjectConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ProjectConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Resolve the full config stack.
///
/// The file layer is `explicit` when given (it must exist), otherwise
/// `pbxgen.toml` in `project_dir` if present. CLI overrides go on top.
pub fn load_config(
    explicit: Option<&Path>,
    project_dir: &Path,
    overrides: &Overrides,
) -> Result<ProjectConfig, ConfigError> {
    let file_layer = match explicit {
        Some(path) => Some(read_toml_file(path)?),
        None => load_raw_config(project_dir)?,
    };
    let base = match file_layer {
        Some(file) => merge_toml(stock_defaults_value(), file),
        None => stock_defaults_value(),
    };
    resolve_config(base, overrides.to_toml())
}

/// Returns a fully-commented stock `pbxgen.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# pbxgen Configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# pbxgen reads this file from the project directory (--output), or from
# the path given with --config. Command line flags override it.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Project
# ---------------------------------------------------------------------------
[project]
# Names the .xcodeproj bundle, the target, and the .app product.
# Required, here or via --name.
# name = "MyApp"

# PRODUCT_BUNDLE_IDENTIFIER. Leave empty to derive com.<name>.app.
bundle_identifier = ""

# ---------------------------------------------------------------------------
# Source discovery
# ---------------------------------------------------------------------------
[sources]
# Directory to scan, relative to the project directory.
# Leave empty to scan <project dir>/<name>. --source overrides it.
dir = ""

# Files whose name ends with .<extension> are compiled.
extension = "swift"

# lastKnownFileType recorded for each file reference.
file_type = "sourcecode.swift"

# ---------------------------------------------------------------------------
# Build settings
# ---------------------------------------------------------------------------
[build]
deployment_target = "17.0"   # IPHONEOS_DEPLOYMENT_TARGET
swift_version = "5.0"        # SWIFT_VERSION
marketing_version = "1.0"    # MARKETING_VERSION
build_number = "1"           # CURRENT_PROJECT_VERSION
development_team = ""        # DEVELOPMENT_TEAM
device_family = "1,2"        # TARGETED_DEVICE_FAMILY (1 = iPhone, 2 = iPad)

# ---------------------------------------------------------------------------
# Object identifiers
# ---------------------------------------------------------------------------
[identifiers]
# Set a seed to make object identifiers reproducible: the same seed and the
# same source tree produce a byte-identical project.pbxproj.
# Omit for fresh random identifiers on every run. --seed overrides it.
# seed = "MyApp"
"##
}
