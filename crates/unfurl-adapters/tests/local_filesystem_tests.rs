//! End-to-end extraction against a real temporary directory.

use std::fs;

use tempfile::TempDir;
use unfurl_adapters::{InMemoryCatalogStore, LocalFilesystem, MemoryFilesystem};
use unfurl_core::prelude::*;

const DOCUMENT: &str = "<think>draft</think>
// === FILE: app/page.tsx ===
```tsx
export default function Page() { return null; }
```

// === FILE: lib/utils.ts ===
```ts
export const cn = () => '';
```
";

fn service() -> ExtractionService {
    ExtractionService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(InMemoryCatalogStore::with_builtin().unwrap()),
    )
}

#[test]
fn round_trip_writes_trimmed_files_and_scaffold() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("demo");

    let report = service()
        .run(&Document::new(DOCUMENT), &root, &ExtractionOptions::default())
        .unwrap();

    assert_eq!(report.extracted().count(), 2);
    assert_eq!(report.scaffolded().count(), 4);
    assert_eq!(report.total(), 6);

    assert_eq!(
        fs::read_to_string(root.join("app/page.tsx")).unwrap(),
        "export default function Page() { return null; }"
    );
    assert_eq!(
        fs::read_to_string(root.join("lib/utils.ts")).unwrap(),
        "export const cn = () => '';"
    );
    assert!(root.join("package.json").is_file());
    assert!(root.join("postcss.config.mjs").is_file());
}

#[test]
fn stale_extracted_files_are_overwritten() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("demo");
    fs::create_dir_all(root.join("app")).unwrap();
    fs::write(root.join("app/page.tsx"), "stale").unwrap();

    service()
        .run(&Document::new(DOCUMENT), &root, &ExtractionOptions::default())
        .unwrap();

    assert_eq!(
        fs::read_to_string(root.join("app/page.tsx")).unwrap(),
        "export default function Page() { return null; }"
    );
}

#[test]
fn scaffold_is_idempotent_across_runs() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("demo");
    let options = ExtractionOptions::default();

    service()
        .run(&Document::new(DOCUMENT), &root, &options)
        .unwrap();
    fs::write(root.join("package.json"), "{ \"edited\": true }").unwrap();

    let second = service()
        .run(&Document::new(DOCUMENT), &root, &options)
        .unwrap();

    assert_eq!(second.scaffolded().count(), 0);
    assert_eq!(
        fs::read_to_string(root.join("package.json")).unwrap(),
        "{ \"edited\": true }"
    );
}

#[test]
fn dry_run_creates_nothing() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("demo");
    let options = ExtractionOptions {
        dry_run: true,
        ..ExtractionOptions::default()
    };

    let report = service()
        .run(&Document::new(DOCUMENT), &root, &options)
        .unwrap();

    assert!(report.dry_run);
    assert_eq!(report.total(), 6);
    assert!(!root.exists());
}

#[test]
fn unsafe_paths_never_escape_the_root() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("demo");
    let doc = "// === FILE: ../escape.ts ===\n```ts\nbad\n```\n";

    let options = ExtractionOptions {
        scaffold: "none".into(),
        ..ExtractionOptions::default()
    };
    let report = service().run(&Document::new(doc), &root, &options).unwrap();

    assert_eq!(report.total(), 0);
    assert!(!report.rejected.is_empty());
    assert!(!temp.path().join("escape.ts").exists());
}

#[test]
fn memory_filesystem_sees_the_same_files() {
    let fs = MemoryFilesystem::new();
    let service = ExtractionService::new(
        Box::new(fs.clone()),
        Box::new(InMemoryCatalogStore::with_builtin().unwrap()),
    );

    service
        .run(
            &Document::new(DOCUMENT),
            "out",
            &ExtractionOptions::default(),
        )
        .unwrap();

    assert_eq!(
        fs.read_file("out/lib/utils.ts").as_deref(),
        Some("export const cn = () => '';")
    );
    assert_eq!(fs.list_files().len(), 6);
}

#[test]
fn write_failure_aborts_and_keeps_earlier_files() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(std::path::Path::new("out/lib")).unwrap();
    fs.deny_writes("out/lib");
    let service = ExtractionService::new(
        Box::new(fs.clone()),
        Box::new(InMemoryCatalogStore::with_builtin().unwrap()),
    );

    let err = service
        .run(
            &Document::new(DOCUMENT),
            "out",
            &ExtractionOptions::default(),
        )
        .unwrap_err();

    assert!(err.to_string().contains("Permission denied"));
    assert!(fs.read_file("out/app/page.tsx").is_some());
    assert!(fs.read_file("out/package.json").is_none());
}
