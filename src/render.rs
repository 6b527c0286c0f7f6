//! Rendering of the project bundle documents.
//!
//! Produces three texts from a [`Project`]:
//!
//! - `project.pbxproj`: the old-style (OpenStep) property list Xcode reads.
//! - `contents.xcworkspacedata`: a workspace containing only the project itself.
//! - `IDEWorkspaceChecks.plist`: one fixed flag Xcode otherwise writes on first open.
//!
//! ## Document Shape
//!
//! The project file lists its objects section by section, in the order Xcode
//! itself writes them. Only three parts vary with the source tree:
//!
//! ```text
//! PBXBuildFile          one per source: build_file → file_ref
//! PBXFileReference      the .app product, then one per source: file_ref → path
//! PBXSourcesBuildPhase  one membership line per build_file
//! ```
//!
//! Everything else (groups, target, project, configurations) is fixed
//! boilerplate parameterized by the project name, build settings and the
//! structural identifiers. Every identifier referenced anywhere is defined
//! exactly once in the same document.
//!
//! ## Quoting
//!
//! Values that are not plain words are double-quoted with `\` and `"`
//! escaped. File paths are always quoted.

use crate::project::{Project, SourceFileEntry};
use std::borrow::Cow;

/// The rendered texts of one project bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBundle {
    pub pbxproj: String,
    pub workspace_contents: String,
    pub workspace_checks: String,
}

/// Workspace that contains just the enclosing project.
pub const WORKSPACE_CONTENTS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Workspace
   version = "1.0">
   <FileRef
      location = "self:">
   </FileRef>
</Workspace>
"#;

/// Shared workspace checks with the 32-bit warning already acknowledged.
pub const WORKSPACE_CHECKS: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">
<plist version=\"1.0\">
<dict>
\t<key>IDEDidComputeMac32BitWarning</key>
\t<true/>
</dict>
</plist>
";

pub fn render_bundle(project: &Project) -> RenderedBundle {
    RenderedBundle {
        pbxproj: render_pbxproj(project),
        workspace_contents: WORKSPACE_CONTENTS.to_string(),
        workspace_checks: WORKSPACE_CHECKS.to_string(),
    }
}

// ============================================================================
// Value formatting
// ============================================================================

/// Quote a string value unless it is a plain word.
pub fn pbx_string(value: &str) -> Cow<'_, str> {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '/' | ':' | '.' | '-'));
    if plain {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(quoted(value))
    }
}

/// Always double-quote, escaping backslashes, quotes and control characters.
pub fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

// ============================================================================
// Per-file sections
// ============================================================================

fn build_file_line(entry: &SourceFileEntry) -> String {
    format!(
        "\t\t{build} /* {name} in Sources */ = {{isa = PBXBuildFile; fileRef = {file} /* {name} */; }};",
        build = entry.build_file,
        file = entry.file_ref,
        name = entry.name,
    )
}

fn file_reference_line(entry: &SourceFileEntry, file_type: &str) -> String {
    format!(
        "\t\t{file} /* {name} */ = {{isa = PBXFileReference; lastKnownFileType = {file_type}; path = {path}; sourceTree = \"<group>\"; }};",
        file = entry.file_ref,
        name = entry.name,
        file_type = pbx_string(file_type),
        path = quoted(&entry.relative_path),
    )
}

fn sources_phase_line(entry: &SourceFileEntry) -> String {
    format!(
        "\t\t\t\t{build} /* {name} in Sources */,",
        build = entry.build_file,
        name = entry.name,
    )
}

/// One entry per line. An empty list still occupies its (blank) line.
fn join_lines(lines: impl Iterator<Item = String>) -> String {
    lines.collect::<Vec<_>>().join("\n")
}

// ============================================================================
// Build configurations
// ============================================================================

fn project_debug_config(project: &Project) -> String {
    format!(
        "\t\t{id} /* Debug */ = {{
\t\t\tisa = XCBuildConfiguration;
\t\t\tbuildSettings = {{
\t\t\t\tALWAYS_SEARCH_USER_PATHS = NO;
\t\t\t\tCLANG_ENABLE_MODULES = YES;
\t\t\t\tCOPY_PHASE_STRIP = NO;
\t\t\t\tENABLE_TESTABILITY = YES;
\t\t\t\tGCC_OPTIMIZATION_LEVEL = 0;
\t\t\t\tIPHONEOS_DEPLOYMENT_TARGET = {deployment};
\t\t\t\tONLY_ACTIVE_ARCH = YES;
\t\t\t\tSDKROOT = iphoneos;
\t\t\t\tSWIFT_OPTIMIZATION_LEVEL = \"-Onone\";
\t\t\t}};
\t\t\tname = Debug;
\t\t}};
",
        id = project.ids.project_debug,
        deployment = pbx_string(&project.settings.deployment_target),
    )
}

fn project_release_config(project: &Project) -> String {
    format!(
        "\t\t{id} /* Release */ = {{
\t\t\tisa = XCBuildConfiguration;
\t\t\tbuildSettings = {{
\t\t\t\tALWAYS_SEARCH_USER_PATHS = NO;
\t\t\t\tCLANG_ENABLE_MODULES = YES;
\t\t\t\tCOPY_PHASE_STRIP = NO;
\t\t\t\tIPHONEOS_DEPLOYMENT_TARGET = {deployment};
\t\t\t\tSDKROOT = iphoneos;
\t\t\t\tSWIFT_COMPILATION_MODE = wholemodule;
\t\t\t\tVALIDATE_PRODUCT = YES;
\t\t\t}};
\t\t\tname = Release;
\t\t}};
",
        id = project.ids.project_release,
        deployment = pbx_string(&project.settings.deployment_target),
    )
}

/// Target configurations are identical apart from their name.
fn target_config(project: &Project, id: &crate::ids::ObjectId, name: &str) -> String {
    let settings = &project.settings;
    format!(
        "\t\t{id} /* {name} */ = {{
\t\t\tisa = XCBuildConfiguration;
\t\t\tbuildSettings = {{
\t\t\t\tCODE_SIGN_STYLE = Automatic;
\t\t\t\tCURRENT_PROJECT_VERSION = {build_number};
\t\t\t\tDEVELOPMENT_TEAM = {team};
\t\t\t\tENABLE_PREVIEWS = YES;
\t\t\t\tGENERATE_INFOPLIST_FILE = YES;
\t\t\t\tINFOPLIST_KEY_UIApplicationSceneManifest_Generation = YES;
\t\t\t\tINFOPLIST_KEY_UIApplicationSupportsIndirectInputEvents = YES;
\t\t\t\tINFOPLIST_KEY_UILaunchScreen_Generation = YES;
\t\t\t\tINFOPLIST_KEY_UISupportedInterfaceOrientations = UIInterfaceOrientationPortrait;
\t\t\t\tLD_RUNPATH_SEARCH_PATHS = (
\t\t\t\t\t\"$(inherited)\",
\t\t\t\t\t\"@executable_path/Frameworks\",
\t\t\t\t);
\t\t\t\tMARKETING_VERSION = {marketing};
\t\t\t\tPRODUCT_BUNDLE_IDENTIFIER = {bundle_id};
\t\t\t\tPRODUCT_NAME = \"$(TARGET_NAME)\";
\t\t\t\tSWIFT_EMIT_LOC_STRINGS = YES;
\t\t\t\tSWIFT_VERSION = {swift};
\t\t\t\tTARGETED_DEVICE_FAMILY = {family};
\t\t\t}};
\t\t\tname = {name};
\t\t}};
",
        build_number = pbx_string(&settings.build_number),
        team = quoted(&settings.development_team),
        marketing = pbx_string(&settings.marketing_version),
        bundle_id = pbx_string(&project.bundle_identifier),
        swift = pbx_string(&settings.swift_version),
        family = quoted(&settings.device_family),
    )
}

// ============================================================================
// Project file
// ============================================================================

/// Render `project.pbxproj`.
pub fn render_pbxproj(project: &Project) -> String {
    let ids = &project.ids;
    let name = pbx_string(&project.name);
    let product = project.product_name();

    let build_files = join_lines(project.sources.iter().map(build_file_line));
    let file_refs = join_lines(
        project
            .sources
            .iter()
            .map(|entry| file_reference_line(entry, &project.file_type)),
    );
    let sources_phase_files = join_lines(project.sources.iter().map(sources_phase_line));

    let configurations = [
        project_debug_config(project),
        project_release_config(project),
        target_config(project, &ids.target_debug, "Debug"),
        target_config(project, &ids.target_release, "Release"),
    ]
    .concat();

    format!(
        "// !$*UTF8*$!
{{
\tarchiveVersion = 1;
\tclasses = {{
\t}};
\tobjectVersion = 56;
\tobjects = {{

/* Begin PBXBuildFile section */
{build_files}
/* End PBXBuildFile section */

/* Begin PBXFileReference section */
\t\t{product_ref} /* {product} */ = {{isa = PBXFileReference; explicitFileType = wrapper.application; includeInIndex = 0; path = {product_path}; sourceTree = BUILT_PRODUCTS_DIR; }};
{file_refs}
/* End PBXFileReference section */

/* Begin PBXFrameworksBuildPhase section */
\t\t{frameworks_phase} /* Frameworks */ = {{
\t\t\tisa = PBXFrameworksBuildPhase;
\t\t\tbuildActionMask = 2147483647;
\t\t\tfiles = (
\t\t\t);
\t\t\trunOnlyForDeploymentPostprocessing = 0;
\t\t}};
/* End PBXFrameworksBuildPhase section */

/* Begin PBXGroup section */
\t\t{main_group} = {{
\t\t\tisa = PBXGroup;
\t\t\tchildren = (
\t\t\t\t{products_group} /* Products */,
\t\t\t);
\t\t\tsourceTree = \"<group>\";
\t\t}};
\t\t{products_group} /* Products */ = {{
\t\t\tisa = PBXGroup;
\t\t\tchildren = (
\t\t\t\t{product_ref} /* {product} */,
\t\t\t);
\t\t\tname = Products;
\t\t\tsourceTree = \"<group>\";
\t\t}};
/* End PBXGroup section */

/* Begin PBXNativeTarget section */
\t\t{target} /* {display_name} */ = {{
\t\t\tisa = PBXNativeTarget;
\t\t\tbuildConfigurationList = {target_config_list} /* Build configuration list for PBXNativeTarget \"{display_name}\" */;
\t\t\tbuildPhases = (
\t\t\t\t{sources_phase} /* Sources */,
\t\t\t\t{frameworks_phase} /* Frameworks */,
\t\t\t\t{resources_phase} /* Resources */,
\t\t\t);
\t\t\tbuildRules = (
\t\t\t);
\t\t\tdependencies = (
\t\t\t);
\t\t\tname = {name};
\t\t\tproductName = {name};
\t\t\tproductReference = {product_ref} /* {product} */;
\t\t\tproductType = \"com.apple.product-type.application\";
\t\t}};
/* End PBXNativeTarget section */

/* Begin PBXProject section */
\t\t{project_id} /* Project object */ = {{
\t\t\tisa = PBXProject;
\t\t\tattributes = {{
\t\t\t\tBuildIndependentTargetsInParallel = 1;
\t\t\t\tLastSwiftUpdateCheck = 1500;
\t\t\t\tLastUpgradeCheck = 1500;
\t\t\t\tTargetAttributes = {{
\t\t\t\t\t{target} = {{
\t\t\t\t\t\tCreatedOnToolsVersion = 15.0;
\t\t\t\t\t}};
\t\t\t\t}};
\t\t\t}};
\t\t\tbuildConfigurationList = {project_config_list} /* Build configuration list for PBXProject \"{display_name}\" */;
\t\t\tcompatibilityVersion = \"Xcode 14.0\";
\t\t\tdevelopmentRegion = en;
\t\t\thasScannedForEncodings = 0;
\t\t\tknownRegions = (
\t\t\t\ten,
\t\t\t\tBase,
\t\t\t);
\t\t\tmainGroup = {main_group};
\t\t\tproductRefGroup = {products_group} /* Products */;
\t\t\tprojectDirPath = \"\";
\t\t\tprojectRoot = \"\";
\t\t\ttargets = (
\t\t\t\t{target} /* {display_name} */,
\t\t\t);
\t\t}};
/* End PBXProject section */

/* Begin PBXResourcesBuildPhase section */
\t\t{resources_phase} /* Resources */ = {{
\t\t\tisa = PBXResourcesBuildPhase;
\t\t\tbuildActionMask = 2147483647;
\t\t\tfiles = (
\t\t\t);
\t\t\trunOnlyForDeploymentPostprocessing = 0;
\t\t}};
/* End PBXResourcesBuildPhase section */

/* Begin PBXSourcesBuildPhase section */
\t\t{sources_phase} /* Sources */ = {{
\t\t\tisa = PBXSourcesBuildPhase;
\t\t\tbuildActionMask = 2147483647;
\t\t\tfiles = (
{sources_phase_files}
\t\t\t);
\t\t\trunOnlyForDeploymentPostprocessing = 0;
\t\t}};
/* End PBXSourcesBuildPhase section */

/* Begin XCBuildConfiguration section */
{configurations}/* End XCBuildConfiguration section */

/* Begin XCConfigurationList section */
\t\t{project_config_list} /* Build configuration list for PBXProject \"{display_name}\" */ = {{
\t\t\tisa = XCConfigurationList;
\t\t\tbuildConfigurations = (
\t\t\t\t{project_debug} /* Debug */,
\t\t\t\t{project_release} /* Release */,
\t\t\t);
\t\t\tdefaultConfigurationIsVisible = 0;
\t\t\tdefaultConfigurationName = Release;
\t\t}};
\t\t{target_config_list} /* Build configuration list for PBXNativeTarget \"{display_name}\" */ = {{
\t\t\tisa = XCConfigurationList;
\t\t\tbuildConfigurations = (
\t\t\t\t{target_debug} /* Debug */,
\t\t\t\t{target_release} /* Release */,
\t\t\t);
\t\t\tdefaultConfigurationIsVisible = 0;
\t\t\tdefaultConfigurationName = Release;
\t\t}};
/* End XCConfigurationList section */
\t}};
\trootObject = {project_id} /* Project object */;
}}
",
        display_name = project.name,
        product_path = pbx_string(&product),
        product_ref = ids.product_ref,
        project_id = ids.project,
        main_group = ids.main_group,
        products_group = ids.products_group,
        target = ids.target,
        project_config_list = ids.project_config_list,
        target_config_list = ids.target_config_list,
        project_debug = ids.project_debug,
        project_release = ids.project_release,
        target_debug = ids.target_debug,
        target_release = ids.target_release,
        sources_phase = ids.sources_phase,
        frameworks_phase = ids.frameworks_phase,
        resources_phase = ids.resources_phase,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdPool;
    use crate::test_helpers::{
        defined_ids, lines_containing, mask_ids, named_config, referenced_ids, sample_project,
        source_files,
    };
    use std::collections::HashSet;

    // =========================================================================
    // Quoting
    // =========================================================================

    #[test]
    fn plain_words_stay_bare() {
        assert_eq!(pbx_string("Spotted"), "Spotted");
        assert_eq!(pbx_string("com.spotted.app"), "com.spotted.app");
        assert_eq!(pbx_string("17.0"), "17.0");
    }

    #[test]
    fn non_plain_values_are_quoted() {
        assert_eq!(pbx_string("My App"), "\"My App\"");
        assert_eq!(pbx_string("1,2"), "\"1,2\"");
        assert_eq!(pbx_string(""), "\"\"");
    }

    #[test]
    fn quoted_escapes_specials() {
        assert_eq!(quoted(r#"a"b\c"#), r#""a\"b\\c""#);
        assert_eq!(quoted("line\nbreak"), "\"line\\nbreak\"");
    }

    // =========================================================================
    // Document structure
    // =========================================================================

    #[test]
    fn starts_with_utf8_marker_and_ends_with_root_object() {
        let project = sample_project(&["A.swift"]);
        let text = render_pbxproj(&project);

        assert!(text.starts_with("// !$*UTF8*$!\n{\n"));
        let root_line = format!("\trootObject = {} /* Project object */;\n}}\n", project.ids.project);
        assert!(text.ends_with(&root_line));
    }

    #[test]
    fn sections_in_xcode_order() {
        let text = render_pbxproj(&sample_project(&["A.swift"]));
        let sections = [
            "PBXBuildFile",
            "PBXFileReference",
            "PBXFrameworksBuildPhase",
            "PBXGroup",
            "PBXNativeTarget",
            "PBXProject",
            "PBXResourcesBuildPhase",
            "PBXSourcesBuildPhase",
            "XCBuildConfiguration",
            "XCConfigurationList",
        ];
        let mut last = 0;
        for section in sections {
            let begin = format!("/* Begin {section} section */");
            let end = format!("/* End {section} section */");
            let begin_at = text.find(&begin).unwrap_or_else(|| panic!("missing {begin}"));
            let end_at = text.find(&end).unwrap_or_else(|| panic!("missing {end}"));
            assert!(begin_at >= last, "{section} out of order");
            assert!(end_at > begin_at);
            last = end_at;
        }
    }

    #[test]
    fn one_entry_per_file_in_each_list() {
        let text = render_pbxproj(&sample_project(&["A.swift", "sub/B.swift", "sub/C.swift"]));

        assert_eq!(lines_containing(&text, "isa = PBXBuildFile;"), 3);
        assert_eq!(lines_containing(&text, "lastKnownFileType = sourcecode.swift;"), 3);
        assert_eq!(lines_containing(&text, " in Sources */,"), 3);
    }

    #[test]
    fn file_references_record_relative_paths() {
        let text = render_pbxproj(&sample_project(&["A.swift", "sub/B.swift"]));

        assert!(text.contains("/* A.swift */ = {isa = PBXFileReference; lastKnownFileType = sourcecode.swift; path = \"A.swift\"; sourceTree = \"<group>\"; };"));
        assert!(text.contains("/* B.swift */ = {isa = PBXFileReference; lastKnownFileType = sourcecode.swift; path = \"sub/B.swift\"; sourceTree = \"<group>\"; };"));
    }

    #[test]
    fn build_files_point_at_their_file_reference() {
        let project = sample_project(&["A.swift", "sub/B.swift"]);
        let text = render_pbxproj(&project);

        for entry in &project.sources {
            let line = format!(
                "\t\t{} /* {} in Sources */ = {{isa = PBXBuildFile; fileRef = {} /* {} */; }};",
                entry.build_file, entry.name, entry.file_ref, entry.name
            );
            assert_eq!(text.matches(&line).count(), 1, "missing {line}");
        }
    }

    #[test]
    fn every_file_referenced_once_by_build_file_and_phase() {
        let project = sample_project(&["A.swift", "b/B.swift", "c/d/C.swift", "E.swift"]);
        let text = render_pbxproj(&project);

        for entry in &project.sources {
            let by_build_file = text
                .matches(&format!("fileRef = {} ", entry.file_ref))
                .count();
            assert_eq!(by_build_file, 1, "{}", entry.relative_path);

            let membership = format!("\t\t\t\t{} /* {} in Sources */,", entry.build_file, entry.name);
            assert_eq!(text.matches(&membership).count(), 1, "{}", entry.relative_path);
        }
    }

    #[test]
    fn phase_lists_files_in_discovery_order() {
        let project = sample_project(&["A.swift", "sub/B.swift"]);
        let text = render_pbxproj(&project);

        let first = text
            .find(&format!("\t\t\t\t{} /*", project.sources[0].build_file))
            .unwrap();
        let second = text
            .find(&format!("\t\t\t\t{} /*", project.sources[1].build_file))
            .unwrap();
        assert!(first < second);
    }

    #[test]
    fn no_dangling_references() {
        let text = render_pbxproj(&sample_project(&["A.swift", "sub/B.swift"]));
        let defined = defined_ids(&text);
        for id in referenced_ids(&text) {
            assert!(defined.contains(id), "{id} referenced but never defined");
        }
    }

    #[test]
    fn every_allocated_id_is_defined_exactly_once() {
        let project = sample_project(&["A.swift", "sub/B.swift"]);
        let text = render_pbxproj(&project);

        let defined: Vec<&str> = text
            .lines()
            .filter_map(|line| crate::test_helpers::definition_id(line))
            .collect();
        let unique: HashSet<&str> = defined.iter().copied().collect();
        assert_eq!(defined.len(), unique.len());
        assert_eq!(defined.len(), project.all_ids().len());
        for id in project.all_ids() {
            assert!(unique.contains(id.as_str()));
        }
    }

    #[test]
    fn empty_project_has_empty_lists() {
        let project = sample_project(&[]);
        let text = render_pbxproj(&project);

        assert!(text.contains(
            "/* Begin PBXBuildFile section */\n\n/* End PBXBuildFile section */"
        ));
        assert!(text.contains("sourceTree = BUILT_PRODUCTS_DIR; };\n\n/* End PBXFileReference section */"));
        assert!(text.contains("\t\t\tfiles = (\n\n\t\t\t);\n\t\t\trunOnlyForDeploymentPostprocessing = 0;\n\t\t};\n/* End PBXSourcesBuildPhase"));
        assert_eq!(lines_containing(&text, "isa = PBXBuildFile;"), 0);
        assert_eq!(lines_containing(&text, " in Sources */,"), 0);
        assert_eq!(defined_ids(&text).len(), 14);
    }

    #[test]
    fn file_lists_end_directly_before_section_close() {
        let project = sample_project(&["A.swift", "sub/B.swift"]);
        let text = render_pbxproj(&project);
        let last = &project.sources[1];

        assert!(text.contains(&format!(
            "fileRef = {} /* B.swift */; }};\n/* End PBXBuildFile section */",
            last.file_ref
        )));
        assert!(text.contains("path = \"sub/B.swift\"; sourceTree = \"<group>\"; };\n/* End PBXFileReference section */"));
        assert!(text.contains(&format!(
            "\t\t\t\t{} /* B.swift in Sources */,\n\t\t\t);",
            last.build_file
        )));
        assert!(!text.contains("\n\n\n"));
    }

    #[test]
    fn shape_is_independent_of_id_values() {
        let files = source_files(&["A.swift", "sub/B.swift"]);
        let config = named_config("App");
        let a = crate::project::Project::new(&config, files.clone(), &mut IdPool::random());
        let b = crate::project::Project::new(&config, files, &mut IdPool::random());

        assert_eq!(mask_ids(&render_pbxproj(&a)), mask_ids(&render_pbxproj(&b)));
    }

    // =========================================================================
    // Parameterization
    // =========================================================================

    #[test]
    fn names_product_and_target() {
        let text = render_pbxproj(&sample_project(&[]));

        assert!(text.contains("path = App.app; sourceTree = BUILT_PRODUCTS_DIR;"));
        assert!(text.contains("\t\t\tname = App;\n\t\t\tproductName = App;\n"));
        assert!(text.contains("Build configuration list for PBXNativeTarget \"App\""));
        assert!(text.contains("Build configuration list for PBXProject \"App\""));
    }

    #[test]
    fn name_with_space_is_quoted_in_values() {
        let config = named_config("My App");
        let project = crate::project::Project::new(&config, Vec::new(), &mut IdPool::random());
        let text = render_pbxproj(&project);

        assert!(text.contains("name = \"My App\";"));
        assert!(text.contains("path = \"My App.app\";"));
        assert!(text.contains("PRODUCT_BUNDLE_IDENTIFIER = com.my-app.app;"));
    }

    #[test]
    fn build_settings_come_from_config() {
        let mut config = named_config("Spotted");
        config.build.deployment_target = "16.4".to_string();
        config.build.swift_version = "6.0".to_string();
        config.build.development_team = "ABCDE12345".to_string();
        config.build.device_family = "1".to_string();
        config.build.build_number = "42".to_string();
        let project = crate::project::Project::new(&config, Vec::new(), &mut IdPool::random());
        let text = render_pbxproj(&project);

        assert_eq!(lines_containing(&text, "IPHONEOS_DEPLOYMENT_TARGET = 16.4;"), 2);
        assert_eq!(lines_containing(&text, "SWIFT_VERSION = 6.0;"), 2);
        assert_eq!(lines_containing(&text, "DEVELOPMENT_TEAM = \"ABCDE12345\";"), 2);
        assert_eq!(lines_containing(&text, "TARGETED_DEVICE_FAMILY = \"1\";"), 2);
        assert_eq!(lines_containing(&text, "CURRENT_PROJECT_VERSION = 42;"), 2);
        assert_eq!(
            lines_containing(&text, "PRODUCT_BUNDLE_IDENTIFIER = com.spotted.app;"),
            2
        );
    }

    #[test]
    fn default_settings_match_stock_target() {
        let text = render_pbxproj(&sample_project(&[]));

        assert_eq!(lines_containing(&text, "DEVELOPMENT_TEAM = \"\";"), 2);
        assert_eq!(lines_containing(&text, "TARGETED_DEVICE_FAMILY = \"1,2\";"), 2);
        assert_eq!(lines_containing(&text, "IPHONEOS_DEPLOYMENT_TARGET = 17.0;"), 2);
        assert_eq!(lines_containing(&text, "MARKETING_VERSION = 1.0;"), 2);
    }

    #[test]
    fn custom_file_type() {
        let mut config = named_config("App");
        config.sources.file_type = "sourcecode.c.objc".to_string();
        let project = crate::project::Project::new(
            &config,
            source_files(&["main.m"]),
            &mut IdPool::random(),
        );
        let text = render_pbxproj(&project);
        assert!(text.contains("lastKnownFileType = sourcecode.c.objc; path = \"main.m\";"));
    }

    #[test]
    fn path_with_quote_is_escaped() {
        let text = render_pbxproj(&sample_project(&["odd\"name.swift"]));
        assert!(text.contains(r#"path = "odd\"name.swift";"#));
    }

    // =========================================================================
    // Workspace documents
    // =========================================================================

    #[test]
    fn workspace_contents_reference_self() {
        let bundle = render_bundle(&sample_project(&[]));
        assert!(bundle.workspace_contents.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Workspace"));
        assert!(bundle.workspace_contents.contains("location = \"self:\">"));
    }

    #[test]
    fn workspace_checks_set_warning_flag() {
        let bundle = render_bundle(&sample_project(&[]));
        assert!(bundle
            .workspace_checks
            .contains("\t<key>IDEDidComputeMac32BitWarning</key>\n\t<true/>\n"));
        assert!(bundle.workspace_checks.ends_with("</plist>\n"));
    }
}
