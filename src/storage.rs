use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::paper::PaperRecord;

pub const DUMP_FILE_EXTENSION: &str = "json";

fn dump_file_name(code: &str) -> String {
    format!("{code}.{DUMP_FILE_EXTENSION}")
}

/// Whether a dump for `code` already exists anywhere below `output_root`, in any category folder.
pub fn exists(output_root: &Path, code: &str) -> bool {
    let target = dump_file_name(code);
    WalkDir::new(output_root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .any(|entry| entry.file_name().to_string_lossy().contains(&target))
}

/// Write `record` to `<folder>/<code>.json`, returning the path written.
pub fn save(folder: &Path, record: &PaperRecord) -> anyhow::Result<PathBuf> {
    let path = folder.join(dump_file_name(record.code()));
    info!("Saving new paper: {}", path.display());

    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    record
        .serialize(&mut ser)
        .with_context(|| format!("failed to serialise paper {}", record.code()))?;
    fs::write(&path, buf).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

/// Read a previously saved dump back. Unreadable or malformed files count as absent.
pub fn load(path: &Path) -> Option<PaperRecord> {
    info!("Reading file: {}", path.display());
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!("could not read {}: {e}", path.display());
            return None;
        }
    };
    match serde_json::from_str(&content) {
        Ok(record) => Some(record),
        Err(e) => {
            debug!("could not parse {}: {e}", path.display());
            None
        }
    }
}

/// Create `path` and its parents. Failures are logged and otherwise ignored; a folder that cannot
/// be created shows up later as a write error.
pub fn ensure_directory(path: &Path) {
    if path.is_dir() {
        return;
    }
    match fs::create_dir_all(path) {
        Ok(()) => info!("Creating folder: {}", path.display()),
        Err(e) => warn!("could not create folder {}: {e}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paper::PaperFields;
    use tempfile::TempDir;

    fn record(code: &str) -> PaperRecord {
        PaperRecord::new(
            format!("https://arxiv.org/abs/{code}"),
            PaperFields {
                title: Some("Title".into()),
                subjects: Some(vec!["cs.AI".into()]),
                ..Default::default()
            },
        )
    }

    #[test]
    fn save_then_exists_and_load() {
        let root = TempDir::new().expect("tmp dir");
        let folder = root.path().join("cs.CE");
        ensure_directory(&folder);

        assert!(!exists(root.path(), "2101.00001"));
        let path = save(&folder, &record("2101.00001")).expect("save");
        assert_eq!(path, folder.join("2101.00001.json"));
        assert!(exists(root.path(), "2101.00001"));
        assert_eq!(load(&path), Some(record("2101.00001")));
    }

    #[test]
    fn exists_looks_in_other_categories() {
        let root = TempDir::new().expect("tmp dir");
        let ce = root.path().join("cs.CE");
        let ai = root.path().join("cs.AI");
        ensure_directory(&ce);
        ensure_directory(&ai);
        save(&ce, &record("2101.00001")).expect("save");

        assert!(exists(root.path(), "2101.00001"));
        assert!(!exists(&ai, "2101.00001"));
        assert!(!exists(root.path(), "2101.00002"));
    }

    #[test]
    fn missing_root_means_nothing_exists() {
        let root = TempDir::new().expect("tmp dir");
        assert!(!exists(&root.path().join("nope"), "2101.00001"));
    }

    #[test]
    fn directories_named_like_a_dump_do_not_count() {
        let root = TempDir::new().expect("tmp dir");
        ensure_directory(&root.path().join("2101.00001.json"));
        assert!(!exists(root.path(), "2101.00001"));
    }

    #[test]
    fn dump_uses_four_space_indent_and_nulls() {
        let root = TempDir::new().expect("tmp dir");
        let path = save(root.path(), &record("2101.00003")).expect("save");
        let text = fs::read_to_string(path).expect("read");
        assert!(text.starts_with("{\n    \"paper_code\": \"2101.00003\""));
        assert!(text.contains("\"paper_authors_list\": null"));
        assert!(text.contains("\"paper_subjects\": [\n        \"cs.AI\"\n    ]"));
    }

    #[test]
    fn ensure_directory_is_idempotent() {
        let root = TempDir::new().expect("tmp dir");
        let folder = root.path().join("a").join("b");
        ensure_directory(&folder);
        ensure_directory(&folder);
        assert!(folder.is_dir());
    }

    #[test]
    fn ensure_directory_swallows_failures() {
        let root = TempDir::new().expect("tmp dir");
        let file = root.path().join("taken");
        fs::write(&file, "x").expect("write");
        ensure_directory(&file.join("sub"));
        assert!(!file.join("sub").exists());
    }

    #[test]
    fn save_into_missing_folder_is_an_error() {
        let root = TempDir::new().expect("tmp dir");
        let err = save(&root.path().join("missing"), &record("2101.00004")).unwrap_err();
        assert!(err.to_string().contains("failed to write"));
    }

    #[test]
    fn load_of_garbage_is_none() {
        let root = TempDir::new().expect("tmp dir");
        let path = root.path().join("bad.json");
        fs::write(&path, "not json").expect("write");
        assert!(load(&path).is_none());
        assert!(load(&root.path().join("absent.json")).is_none());
    }
}
