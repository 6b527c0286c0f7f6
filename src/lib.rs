//! # pbxgen
//!
//! Generates a minimal Xcode project bundle for an existing tree of Swift
//! sources. Your filesystem is the data source: every `.swift` file below the
//! source directory becomes a member of one iOS application target.
//!
//! # Architecture: Scan, Model, Render, Write
//!
//! ```text
//! 1. Scan     MyApp/          →  Vec<SourceFile>   (sorted relative paths)
//! 2. Model    files + config  →  Project           (every object id assigned)
//! 3. Render   Project         →  RenderedBundle    (three documents as text)
//! 4. Write    RenderedBundle  →  MyApp.xcodeproj/
//! ```
//!
//! Only the last step touches the output directory. Everything before it is
//! a pure function of the source tree and the config, so tests exercise the
//! document shape without writing anything.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the source directory and collects eligible files |
//! | [`ids`] | 24-hex-digit object identifiers, random or seeded, unique per run |
//! | [`project`] | The in-memory project model with all identifiers assigned |
//! | [`render`] | `project.pbxproj` and the workspace documents as text |
//! | [`generate`] | The full run: scan, model, render, create the bundle on disk |
//! | [`config`] | Layered `pbxgen.toml` loading, validation, and stock config |
//! | [`output`] | CLI output formatting for scan previews and generation reports |
//!
//! # Design Decisions
//!
//! ## Flat Membership
//!
//! Sources are enrolled in the target's Sources build phase but not placed in
//! the group tree. Xcode builds them and finds them through their recorded
//! relative paths; the navigator shows only `Products`. Mirroring the
//! directory tree as groups is left to Xcode (or to the developer).
//!
//! ## Random Identifiers, Optional Seed
//!
//! Object identifiers are random by default, so two runs over the same tree
//! produce the same document shape with different ids. Setting
//! `identifiers.seed` derives ids from a SHA-256 counter stream instead,
//! which makes regenerated projects diff cleanly under version control.
//!
//! ## Always Regenerate
//!
//! The bundle is a derived artifact. A run overwrites whatever is there and
//! says so in its report, rather than refusing or merging.

pub mod config;
pub mod generate;
pub mod ids;
pub mod output;
pub mod project;
pub mod render;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
