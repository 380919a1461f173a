//! Loading scaffold catalogues from directories.

use std::fs;

use tempfile::TempDir;
use unfurl_adapters::{DirectoryCatalogLoader, InMemoryCatalogStore, LocalFilesystem};
use unfurl_core::{domain::DomainError, prelude::*};

fn scaffold_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    fs::write(
        dir.join("catalog.toml"),
        r#"
name = "vite"
description = "Vite + React"
next_steps = ["cd {dir}", "npm install"]
"#,
    )
    .unwrap();
    fs::write(dir.join("package.json"), "{ \"name\": \"vite-app\" }\n").unwrap();
    fs::create_dir_all(dir.join("config")).unwrap();
    fs::write(dir.join("config/eslint.json"), "{}").unwrap();
    temp
}

#[test]
fn loads_entries_and_manifest() {
    let temp = scaffold_dir();
    let catalog = DirectoryCatalogLoader::new(temp.path()).load().unwrap();

    assert_eq!(catalog.name, "vite");
    assert_eq!(catalog.description, "Vite + React");
    let paths: Vec<_> = catalog.entries().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, vec!["config/eslint.json", "package.json"]);
    assert_eq!(
        catalog.render_next_steps("out"),
        vec!["cd out", "npm install"]
    );
}

#[test]
fn name_defaults_to_directory() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("plain");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("README.md"), "# hi").unwrap();

    let catalog = DirectoryCatalogLoader::new(&dir).load().unwrap();
    assert_eq!(catalog.name, "plain");
    assert_eq!(catalog.entry_count(), 1);
}

#[test]
fn malformed_manifest_is_an_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("catalog.toml"), "name = [").unwrap();

    assert!(matches!(
        DirectoryCatalogLoader::new(temp.path()).load(),
        Err(DomainError::InvalidCatalog(_))
    ));
}

#[test]
fn loaded_catalogue_is_provisioned_verbatim() {
    let temp = scaffold_dir();
    let out = TempDir::new().unwrap();
    let root = out.path().join("app");

    let store = InMemoryCatalogStore::with_builtin().unwrap();
    store
        .insert(DirectoryCatalogLoader::new(temp.path()).load().unwrap())
        .unwrap();

    let service = ExtractionService::new(Box::new(LocalFilesystem::new()), Box::new(store));
    let options = ExtractionOptions {
        scaffold: "vite".into(),
        dry_run: false,
    };
    let report = service.run(&Document::new(""), &root, &options).unwrap();

    assert_eq!(report.scaffolded().count(), 2);
    assert_eq!(
        fs::read_to_string(root.join("package.json")).unwrap(),
        "{ \"name\": \"vite-app\" }\n"
    );
    assert!(root.join("config/eslint.json").is_file());
}
