//! CLI output formatting for the scan preview and generation report.
//!
//! # Information-First Display
//!
//! Each discovered source is listed by its positional index and file name,
//! with the path it will be recorded under shown as an indented `Source:`
//! line. The generation report leads with the count, then every written
//! file, then where to find the result.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Sources in MyApp (2 files)
//! 001 MyApp.swift
//!     Source: App/MyApp.swift
//! 002 User.swift
//!     Source: Data/Models/User.swift
//! ```
//!
//! ## Generate
//!
//! ```text
//! Found 2 source files
//! Created: MyApp.xcodeproj/project.pbxproj
//! Created: MyApp.xcodeproj/project.xcworkspace/contents.xcworkspacedata
//! Created: MyApp.xcodeproj/project.xcworkspace/xcshareddata/IDEWorkspaceChecks.plist
//!
//! Project: MyApp.xcodeproj
//! Open with: open MyApp.xcodeproj
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::generate::GenerateReport;
use crate::scan::SourceFile;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

// ============================================================================
// Scan output
// ============================================================================

/// Format the list of sources a `generate` run would include.
pub fn format_scan_output(files: &[SourceFile], scan_root: &Path) -> Vec<String> {
    let mut lines = vec![format!(
        "Sources in {} ({})",
        scan_root.display(),
        plural(files.len(), "file")
    )];
    for (i, file) in files.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), file.name));
        lines.push(format!("{}Source: {}", indent(1), file.relative_path));
    }
    lines
}

pub fn print_scan_output(files: &[SourceFile], scan_root: &Path) {
    for line in format_scan_output(files, scan_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate output
// ============================================================================

/// Format the completion report of a `generate` run.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = vec![format!("Found {}", plural(report.file_count(), "source file"))];
    for path in &report.written {
        lines.push(format!("Created: {}", path.display()));
    }
    if report.replaced_existing {
        lines.push(format!(
            "Replaced existing {}",
            report.layout.pbxproj.display()
        ));
    }
    lines.push(String::new());
    lines.push(format!("Project: {}", report.layout.bundle_dir.display()));
    lines.push(format!("Open with: open {}", report.layout.bundle_dir.display()));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
