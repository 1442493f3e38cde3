use kit_core::{Error, KitCatalog};
use kit_fs::NormalizedPath;
use kit_test_utils::TestCatalog;
use pretty_assertions::assert_eq;

fn discover(catalog: &TestCatalog) -> KitCatalog {
    KitCatalog::discover(&NormalizedPath::new(catalog.kits_root())).unwrap()
}

#[test]
fn test_discovers_kits_sorted() {
    let catalog = TestCatalog::new();
    catalog.kit("writer").standard();
    catalog.kit("coder").standard();
    catalog.kit("web-dev").standard();

    let kits = discover(&catalog);

    let ids: Vec<_> = kits.kits().iter().map(|k| k.id.as_str()).collect();
    assert_eq!(ids, vec!["coder", "web-dev", "writer"]);
    assert_eq!(kits.get("web-dev").unwrap().name, "Web Dev");
    assert!(kits.common_dir().is_none());
}

#[test]
fn test_overrides_from_catalog_file() {
    let catalog = TestCatalog::new();
    catalog.kit("coder").standard();
    catalog.kit("writer").standard();
    catalog.write(
        "kits.toml",
        "[kits.coder]\nname = \"Coder Kit\"\n\n[kits.writer]\navailable = false\n\n[kits.ghost]\nname = \"Ghost\"\n",
    );

    let kits = discover(&catalog);

    assert_eq!(kits.get("coder").unwrap().name, "Coder Kit");
    assert!(!kits.get("writer").unwrap().available);
    assert!(kits.get("ghost").is_none());
    assert_eq!(kits.available().count(), 1);
}

#[test]
fn test_resolve_preserves_order() {
    let catalog = TestCatalog::new();
    catalog.kit("a").standard();
    catalog.kit("b").standard();

    let kits = discover(&catalog)
        .resolve(&["b".to_string(), "a".to_string()])
        .unwrap();

    assert_eq!(kits.iter().map(|k| k.id.as_str()).collect::<Vec<_>>(), vec!["b", "a"]);
}

#[test]
fn test_resolve_errors() {
    let catalog = TestCatalog::new();
    catalog.kit("writer").standard();
    catalog.write("kits.toml", "[kits.writer]\navailable = false\n");
    let kits = discover(&catalog);

    assert!(matches!(
        kits.resolve(&["missing".to_string()]),
        Err(Error::KitNotFound { id }) if id == "missing"
    ));
    assert!(matches!(
        kits.resolve(&["writer".to_string()]),
        Err(Error::KitUnavailable { id }) if id == "writer"
    ));
}

#[test]
fn test_common_dir_and_custom_tools() {
    let catalog = TestCatalog::new();
    catalog.kit("coder").standard();
    catalog.common().skill("scan-techstack", "Detect the stack");
    catalog.write(
        "tools/windsurf.toml",
        "id = \"windsurf\"\nname = \"Windsurf\"\npath = \".windsurf\"\nrules_file = \".windsurfrules\"\nrules_source = \"AGENTS.md\"\n",
    );

    let kits = discover(&catalog);

    assert!(kits.common_dir().is_some());
    let tools = kits.custom_tools().unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].id, "windsurf");
}

#[test]
fn test_missing_kits_dir() {
    let temp = tempfile::TempDir::new().unwrap();
    let err = KitCatalog::discover(&NormalizedPath::new(temp.path())).unwrap_err();
    assert!(matches!(err, Error::CatalogNotFound { .. }));
}
