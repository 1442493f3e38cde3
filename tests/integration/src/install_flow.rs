//! End-to-end install flow
//!
//! Exercises catalog discovery -> engine -> installed tree -> inventory for
//! every built-in tool.

use kit_content::frontmatter;
use kit_core::{ConflictPolicy, InstallEngine, InstallOutcome, InstallRequest, KitCatalog, KitInventory};
use kit_fs::NormalizedPath;
use kit_meta::Scope;
use kit_test_utils::TestCatalog;
use kit_tools::ToolRegistry;
use pretty_assertions::assert_eq;

fn setup() -> (TestCatalog, KitCatalog) {
    let fixture = TestCatalog::new();
    fixture.kit("coder").standard();
    fixture
        .common()
        .file("skills/shared-search/SKILL.md", "---\nname: shared-search\ndescription: Search helpers\n---\n# Search\n")
        .file("scripts/checklist.py", "print('see .agent/skills/')\n");
    let catalog = KitCatalog::discover(&NormalizedPath::new(fixture.kits_root())).unwrap();
    (fixture, catalog)
}

fn install(fixture: &TestCatalog, catalog: &KitCatalog, tool_id: &str, scope: Scope) -> InstallOutcome {
    let registry = ToolRegistry::with_builtins();
    let tool = registry.tool(tool_id).unwrap().clone();
    let request = InstallRequest::new(tool, scope, NormalizedPath::new(fixture.workspace())).with_kits(["coder"]);
    InstallEngine::new(catalog)
        .with_home(NormalizedPath::new(fixture.home()))
        .run(&request, ConflictPolicy::Replace)
        .unwrap()
}

#[test]
fn test_every_builtin_installs_and_counts_match_inventory() {
    let registry = ToolRegistry::with_builtins();
    for reg in registry.by_priority() {
        let (fixture, catalog) = setup();
        let outcome = install(&fixture, &catalog, reg.id(), Scope::Workspace);
        let results = outcome.results();
        assert_eq!(results.len(), 1, "{}", reg.id());

        let root = NormalizedPath::new(fixture.workspace()).join(&reg.tool.path);
        let inventory = KitInventory::scan_with_folder(&root, reg.tool.workflow_folder()).unwrap();
        assert_eq!(results[0].agents, inventory.agents.len(), "{}", reg.id());
        assert_eq!(results[0].skills, inventory.skills.len(), "{}", reg.id());
        assert_eq!(results[0].workflows, inventory.workflows.len(), "{}", reg.id());

        // Kit skills plus the shared one from common/
        assert_eq!(results[0].skills, 4, "{}", reg.id());
        fixture.assert_workspace_file(&reg.tool.rules_file);
    }
}

#[test]
fn test_cursor_install_reshapes_metadata() {
    let (fixture, catalog) = setup();
    install(&fixture, &catalog, "cursor", Scope::Workspace);

    let agent = fixture.read_workspace(".cursor/agents/frontend-specialist.md");
    let parsed = frontmatter::parse(&agent);
    assert_eq!(
        parsed.data.keys().collect::<Vec<_>>(),
        vec!["name", "description", "model", "readonly", "is_background"]
    );
    assert_eq!(parsed.data.get_text("model").as_deref(), Some("inherit"));
    assert!(parsed.content.contains("## Required Skills"));
    assert!(parsed.content.contains("- **clean-code**: Readable, maintainable code"));
    assert!(parsed.content.contains(".cursor/skills/react-patterns/SKILL.md"));
    assert!(!parsed.content.contains(".agent/"));

    let command = fixture.read_workspace(".cursor/commands/deploy.md");
    let parsed = frontmatter::parse(&command);
    assert_eq!(parsed.data.keys().collect::<Vec<_>>(), vec!["description"]);
    assert!(parsed.content.contains(".cursor/commands/"));
    fixture.assert_no_workspace_path(".cursor/workflows");

    let script = fixture.read_workspace(".cursor/scripts/checklist.py");
    assert_eq!(script, "print('see .cursor/skills/')\n");
}

#[test]
fn test_generic_install_keeps_source_metadata() {
    let (fixture, catalog) = setup();
    install(&fixture, &catalog, "claude", Scope::Workspace);

    let agent = fixture.read_workspace(".claude/agents/frontend-specialist.md");
    let parsed = frontmatter::parse(&agent);
    assert_eq!(parsed.data.get_text("tier").as_deref(), Some("2"));
    assert!(!parsed.content.contains("## Required Skills"));
    assert!(parsed.content.contains(".claude/skills/react-patterns/SKILL.md"));

    let rules = fixture.read_workspace("CLAUDE.md");
    assert!(rules.contains(".claude/agents/"));
}

#[test]
fn test_global_install_uses_home_relative_tokens() {
    let (fixture, catalog) = setup();
    install(&fixture, &catalog, "claude", Scope::Global);

    let agent = std::fs::read_to_string(fixture.home().join(".claude/agents/frontend-specialist.md")).unwrap();
    assert!(agent.contains("~/.claude/skills/react-patterns/SKILL.md"));
    assert!(fixture.home().join(".claude/CLAUDE.md").is_file());
    fixture.assert_no_workspace_path(".claude");
}

#[test]
fn test_replace_backs_up_previous_install() {
    let (fixture, catalog) = setup();
    install(&fixture, &catalog, "codex", Scope::Workspace);
    std::fs::write(fixture.workspace().join(".codex/agents/stale.md"), "old\n").unwrap();

    install(&fixture, &catalog, "codex", Scope::Workspace);

    fixture.assert_no_workspace_path(".codex/agents/stale.md");
    let backups: Vec<_> = std::fs::read_dir(fixture.workspace())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with(".codex.backup-"))
        .collect();
    assert_eq!(backups.len(), 1);
    assert!(
        fixture
            .workspace()
            .join(&backups[0])
            .join("agents/stale.md")
            .is_file()
    );
}

#[test]
fn test_install_result_serializes() {
    let (fixture, catalog) = setup();
    let outcome = install(&fixture, &catalog, "gemini", Scope::Workspace);
    let json = serde_json::to_value(outcome.results()).unwrap();
    assert_eq!(json[0]["kit"], "coder");
    assert_eq!(json[0]["workflows"], 2);
}
