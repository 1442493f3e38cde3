use kit_core::{KitValidator, Severity, ValidationReport};
use kit_fs::NormalizedPath;
use kit_meta::Kit;
use kit_test_utils::TestCatalog;
use pretty_assertions::assert_eq;
use std::fs;

fn coder(catalog: &TestCatalog) -> Kit {
    Kit::new("coder", "Coder", catalog.kits_root().join("kits/coder"))
}

fn messages(report: &ValidationReport, severity: Severity) -> Vec<String> {
    report
        .findings
        .iter()
        .filter(|f| f.severity == severity)
        .map(|f| f.message.clone())
        .collect()
}

#[test]
fn test_standard_kit_passes() {
    let catalog = TestCatalog::new();
    catalog.kit("coder").standard().file("scripts/verify.py", "");

    let report = KitValidator::new().validate(&coder(&catalog)).unwrap();

    assert!(report.passed(), "unexpected errors: {:?}", messages(&report, Severity::Error));
    assert_eq!(report.count(Severity::Warning), 0, "{:?}", messages(&report, Severity::Warning));
    assert_eq!(report.stats.agents, 2);
    assert_eq!(report.stats.skills, 3);
    assert_eq!(report.stats.workflows, 2);
    assert_eq!(report.stats.rule_files, 4);
    assert_eq!(report.stats.required_rule_files, 4);
}

#[test]
fn test_missing_directories_and_files() {
    let catalog = TestCatalog::new();
    catalog.kit("coder").file("README.md", "hi");

    let report = KitValidator::new().validate(&coder(&catalog)).unwrap();

    assert!(!report.passed());
    let errors = messages(&report, Severity::Error);
    for expected in [
        "Missing required directory: agents/",
        "Missing required directory: skills/",
        "Missing required directory: rules/",
        "Missing required file: ARCHITECTURE.md",
    ] {
        assert!(errors.iter().any(|e| e == expected), "missing error: {expected}");
    }
    let warnings = messages(&report, Severity::Warning);
    assert!(warnings.contains(&"Optional directory missing: workflows/ (recommended)".to_string()));
}

#[test]
fn test_rule_variants() {
    let catalog = TestCatalog::new();
    let kit = catalog.kit("coder");
    kit.standard()
        .rules("GEMINI.md", "# No frontmatter\n")
        .rules("CURSOR.md", "---\nglobs: *.ts\n---\n# Rules\n");
    fs::remove_file(kit.root().join("rules/AGENTS.md")).unwrap();

    let report = KitValidator::new().validate(&coder(&catalog)).unwrap();

    let errors = messages(&report, Severity::Error);
    assert!(errors.contains(&"Missing required rule file: AGENTS.md".to_string()));
    assert!(errors.contains(&"Missing frontmatter: GEMINI.md".to_string()));
    assert!(errors.contains(&"Missing description or alwaysApply in frontmatter: CURSOR.md".to_string()));
    assert_eq!(report.stats.rule_files, 3);
}

#[test]
fn test_agent_and_skill_warnings() {
    let catalog = TestCatalog::new();
    catalog
        .kit("coder")
        .standard()
        .file("scripts/verify.py", "")
        .file("agents/loose.md", "---\nname: loose\n---\n# Loose\n")
        .agent("reviewer", "Reviews code", &["code-review"], "# Reviewer\n")
        .file("skills/bare/SKILL.md", "---\nname: bare\n---\n")
        .file("workflows/quick.md", "# No description\n");

    let report = KitValidator::new().validate(&coder(&catalog)).unwrap();

    assert!(report.passed());
    let warnings = messages(&report, Severity::Warning);
    assert_eq!(
        warnings,
        vec![
            "loose.md: missing description",
            "loose.md: missing skills",
            "bare: missing name/description",
            "Missing description in: quick.md",
            "Agent 'reviewer' references missing skill: code-review",
        ]
    );
}

#[test]
fn test_shared_skills_resolve_references() {
    let catalog = TestCatalog::new();
    catalog
        .kit("coder")
        .standard()
        .file("scripts/verify.py", "")
        .agent("scanner", "Scans", &["scan-techstack"], "# Scanner\n");
    catalog.common().skill("scan-techstack", "Detect the stack");
    let common = NormalizedPath::new(catalog.kits_root().join("common"));

    let report = KitValidator::new()
        .with_shared_skills(Some(&common))
        .validate(&coder(&catalog))
        .unwrap();

    assert_eq!(report.count(Severity::Warning), 0);
}

#[test]
fn test_missing_kit_path() {
    let catalog = TestCatalog::new();
    let report = KitValidator::new().validate(&coder(&catalog)).unwrap();
    assert!(!report.passed());
    assert_eq!(report.findings.len(), 1);
}

#[test]
fn test_report_serializes() {
    let catalog = TestCatalog::new();
    catalog.kit("coder").standard();
    let report = KitValidator::new()
        .with_required_rules(["CLAUDE.md"])
        .validate(&coder(&catalog))
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["kit"], "coder");
    assert_eq!(json["stats"]["required_rule_files"], 1);
    assert_eq!(json["findings"][0]["severity"], "warning");
}
