use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use swatch_core::{BuildConfig, TokenError};
use swatch_pipeline::{build, check_artifacts, write_artifacts, Format, Project};

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join("build/css").join(relative))
        .unwrap_or_else(|e| panic!("missing {}: {}", relative, e))
}

/// 一个完整的 token 目录
fn fixture(root: &Path) {
    write(
        root,
        "tokens/source/color.json",
        r##"{ "brand": { "type": "color", "value": "#006239" } }"##,
    );
    write(
        root,
        "tokens/source/typography.json",
        r##"{
            "font": {
                "family": { "sans": { "value": "Inter", "type": "fontFamilies" } },
                "size": { "lg": { "value": "18px", "type": "fontSizes" } }
            },
            "tracking": { "tight": { "value": "-1%", "type": "letterSpacing" } }
        }"##,
    );
    write(
        root,
        "tokens/themes/root.json",
        r##"{
            "$root": true,
            "gray": { "100": { "value": "#1c1c1c", "type": "color" } },
            "background": { "default": { "value": "{gray.100}", "type": "color" } }
        }"##,
    );
    write(
        root,
        "tokens/themes/light.json",
        r##"{ "gray": { "100": { "value": "#fcfcfc", "type": "color" } } }"##,
    );
    write(
        root,
        "tokens/semantic/text.json",
        r##"{
            "heading": {
                "type": "typography",
                "value": {
                    "fontFamily": "{font.family.sans}",
                    "fontSize": "{font.size.lg}",
                    "letterSpacing": "{tracking.tight}",
                    "textCase": "none",
                    "textDecoration": "none"
                }
            },
            "accent": { "value": "{brand}", "type": "color" }
        }"##,
    );
}

fn run(root: &Path) {
    let project = Project::load(root, None).unwrap();
    let output = build(&project).unwrap();
    write_artifacts(&project.build_dir(), &output.artifacts).unwrap();
}

#[test]
fn test_source_color_scenario() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "tokens/source/color.json",
        r##"{ "brand": { "type": "color", "value": "#006239" } }"##,
    );

    run(dir.path());

    let css = read(dir.path(), "source/color.css");
    assert!(css.contains(":root {\n  --brand: #006239;\n}"));

    let tailwind = read(dir.path(), "tw-extend/color.js");
    assert!(tailwind.contains("\"brand\": \"var(--brand, #006239);\""));
}

#[test]
fn test_full_pipeline_outputs() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());

    run(dir.path());

    let dark = read(dir.path(), "themes/dark.css");
    assert!(dark.contains(
        ":root {\n  --gray-100: #1c1c1c;\n  --background-default: var(--gray-100, #1c1c1c);\n}"
    ));

    let light = read(dir.path(), "themes/light.css");
    assert!(light.contains(
        ".light {\n  --gray-100: #fcfcfc;\n  --background-default: var(--gray-100, #fcfcfc);\n}"
    ));
    assert!(!dir.path().join("build/css/themes/root.css").exists());

    let typography = read(dir.path(), "source/typography-classes.css");
    assert!(typography.contains(
        ".heading {\n  font: var(--heading);\n  letter-spacing: var(--tracking-tight);\n  text-transform: none;\n  text-decoration: none;\n}"
    ));
    assert!(!typography.contains(".accent"));
    assert!(!typography.contains(".brand"));

    // 根主题的 token 也进入 Tailwind 片段
    let color = read(dir.path(), "tw-extend/color.js");
    assert!(color.contains("\"brand\": \"var(--brand, #006239);\""));
    assert!(color.contains("\"background-default\": \"var(--background-default, #1c1c1c);\""));
    assert!(!color.contains("#fcfcfc"));

    let letter_spacing = read(dir.path(), "tw-extend/letterSpacing.js");
    assert!(letter_spacing.contains("\"tracking-tight\": \"var(--tracking-tight, -0.01em);\""));
}

#[test]
fn test_exactly_fourteen_fragments() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());

    let project = Project::load(dir.path(), None).unwrap();
    let output = build(&project).unwrap();

    let mut fragments: Vec<String> = output
        .artifacts
        .iter()
        .filter(|a| a.format == Format::TailwindVariables)
        .map(|a| a.destination.display().to_string())
        .collect();
    fragments.sort();

    assert_eq!(
        fragments,
        vec![
            "tw-extend/borderRadius.js",
            "tw-extend/borderWidth.js",
            "tw-extend/color.js",
            "tw-extend/fontFamilies.js",
            "tw-extend/fontSizes.js",
            "tw-extend/fontWeights.js",
            "tw-extend/letterSpacing.js",
            "tw-extend/lineHeights.js",
            "tw-extend/opacity.js",
            "tw-extend/paragraphSpacing.js",
            "tw-extend/sizing.js",
            "tw-extend/spacing.js",
            "tw-extend/textCase.js",
            "tw-extend/textDecoration.js",
        ]
    );
}

#[test]
fn test_tailwind_disabled() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());

    let project = Project::new(
        dir.path(),
        BuildConfig {
            tailwind: false,
            ..BuildConfig::default()
        },
    );
    let output = build(&project).unwrap();

    assert!(output
        .artifacts
        .iter()
        .all(|a| a.format != Format::TailwindVariables));
}

#[test]
fn test_idempotent_output() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());

    let project = Project::load(dir.path(), None).unwrap();
    let first = build(&project).unwrap();
    write_artifacts(&project.build_dir(), &first.artifacts).unwrap();

    let second = build(&project).unwrap();
    assert_eq!(first.artifacts, second.artifacts);

    let report = write_artifacts(&project.build_dir(), &second.artifacts).unwrap();
    assert!(report.written.is_empty());
    assert!(check_artifacts(&project.build_dir(), &second.artifacts)
        .unwrap()
        .is_empty());
}

#[test]
fn test_unresolved_reference_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());
    write(
        dir.path(),
        "tokens/themes/light.json",
        r##"{ "gray": { "100": { "value": "{gray.missing}", "type": "color" } } }"##,
    );

    let project = Project::load(dir.path(), None).unwrap();
    let result = build(&project);

    assert!(matches!(
        result,
        Err(TokenError::UnresolvedReference { ref reference, .. }) if reference == "gray.missing"
    ));
    assert!(!project.build_dir().exists());
}

#[test]
fn test_typography_field_reference_must_resolve() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());
    write(
        dir.path(),
        "tokens/semantic/text.json",
        r##"{
            "heading": {
                "type": "typography",
                "value": {
                    "fontFamily": "{font.family.sans}",
                    "letterSpacing": "{tracking.missing}",
                    "textCase": "{case.nope}"
                }
            }
        }"##,
    );

    let project = Project::load(dir.path(), None).unwrap();
    let result = build(&project);

    assert!(matches!(
        result,
        Err(TokenError::UnresolvedReference { ref reference, ref token, .. })
            if reference == "tracking.missing" && token == "heading"
    ));
    assert!(!project.build_dir().exists());
}

#[test]
fn test_malformed_json_aborts() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());
    write(dir.path(), "tokens/semantic/broken.json", "{ \"a\": ");

    let project = Project::load(dir.path(), None).unwrap();
    assert!(matches!(build(&project), Err(TokenError::Json { .. })));
}

#[test]
fn test_empty_project_builds_typography_only() {
    let dir = tempfile::tempdir().unwrap();

    let project = Project::load(dir.path(), None).unwrap();
    let output = build(&project).unwrap();

    assert_eq!(output.artifacts.len(), 1);
    assert_eq!(output.artifacts[0].format, Format::TypographyClasses);
}

#[test]
fn test_kebab_naming_config() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "swatch.config.json", r#"{ "nameCase": "kebab" }"#);
    write(
        dir.path(),
        "tokens/source/color.json",
        r##"{
            "brandPrimary": { "type": "color", "value": "#006239" },
            "brandAccent": { "type": "color", "value": "{brandPrimary}" }
        }"##,
    );

    run(dir.path());

    let css = read(dir.path(), "source/color.css");
    assert!(css.contains("--brand-accent: var(--brand-primary, #006239);"));
}
